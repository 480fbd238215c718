use crate::schema::appointments;
use chrono::{NaiveDate, NaiveTime};

#[derive(Queryable)]
pub struct Appointment {
    pub aid: u64,
    pub pid: u64,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Insertable)]
#[table_name = "appointments"]
pub struct NewAppointment {
    pub pid: u64,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// The seven bookable times of a clinic day, hourly from 10:00 to 16:00.
pub const APPOINTMENT_SLOTS: [&str; 7] = [
    "10:00:00",
    "11:00:00",
    "12:00:00",
    "13:00:00",
    "14:00:00",
    "15:00:00",
    "16:00:00",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_table_is_hourly_and_distinct() {
        assert_eq!(APPOINTMENT_SLOTS.len(), 7);
        for (i, slot) in APPOINTMENT_SLOTS.iter().enumerate() {
            let time = NaiveTime::parse_from_str(slot, "%H:%M:%S").unwrap();
            assert_eq!(time, NaiveTime::from_hms(10 + i as u32, 0, 0));
        }
    }
}
