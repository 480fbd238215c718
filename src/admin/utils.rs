use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use diesel::MysqlConnection;

/// A slot is free iff no appointment row occupies exactly (date, time).
/// `exclude_aid` keeps an appointment's own row out of the count when it is
/// being moved, so re-saving the current slot is not a conflict.
pub fn slot_is_free(
    conn: &MysqlConnection,
    date: &NaiveDate,
    time: &NaiveTime,
    exclude_aid: Option<u64>,
) -> QueryResult<bool> {
    use crate::schema::appointments;

    let booked: i64 = match exclude_aid {
        Some(aid) => appointments::table
            .filter(appointments::date.eq(date))
            .filter(appointments::time.eq(time))
            .filter(appointments::aid.ne(aid))
            .count()
            .get_result(conn)?,
        None => appointments::table
            .filter(appointments::date.eq(date))
            .filter(appointments::time.eq(time))
            .count()
            .get_result(conn)?,
    };

    Ok(booked == 0)
}
