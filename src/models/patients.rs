use crate::schema::patients;
use chrono::NaiveDate;

#[derive(Queryable)]
pub struct PatientData {
    pub pid: u64,
    pub name: String,
    pub email: String,
    pub dob: Option<NaiveDate>,
    pub gender: String,
    pub contact: String,
    pub address: String,
}

#[derive(Insertable)]
#[table_name = "patients"]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub dob: Option<NaiveDate>,
    pub gender: String,
    pub contact: String,
    pub address: String,
}

/// Partial update: diesel only renders the `Some` fields, so an untouched
/// column keeps its stored value.
#[derive(AsChangeset, Default)]
#[table_name = "patients"]
pub struct UpdatePatient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
}

pub const GENDER_MALE: &str = "Male";
pub const GENDER_FEMALE: &str = "Female";
