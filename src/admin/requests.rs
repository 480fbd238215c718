use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddPatientRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub dob: String,
    pub gender: String,
    pub contact: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Deserialize)]
pub struct MakeAppointmentRequest {
    pub pid: u64,
    pub date: String,
    pub time: String,
}

#[derive(Deserialize)]
pub struct UpdatePatientRequest {
    pub pid: u64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct EditAppointmentRequest {
    pub aid: u64,
    pub date: String,
    pub time: String,
}

#[derive(Deserialize)]
pub struct DeletePatientRequest {
    pub pid: u64,
}

#[derive(Deserialize)]
pub struct SearchPatientRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Deserialize)]
pub struct ListAppointmentsRequest {
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct ListPatientsRequest {}
