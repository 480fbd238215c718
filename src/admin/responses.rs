use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchPatientItem {
    pub pid: u64,
    pub name: String,
    pub email: String,
    pub dob: String,
    pub gender: String,
    pub contact: String,
    pub address: String,
}

#[derive(Default, Serialize)]
pub struct SearchPatientResponse {
    pub success: bool,
    pub err: String,
    pub patients: Vec<SearchPatientItem>,
}

#[derive(Default, Serialize)]
pub struct ListPatientItem {
    pub pid: u64,
    pub name: String,
}

#[derive(Default, Serialize)]
pub struct ListPatientsResponse {
    pub success: bool,
    pub err: String,
    pub patients: Vec<ListPatientItem>,
}

#[derive(Default, Serialize)]
pub struct ListAppointmentItem {
    pub aid: u64,
    pub pid: u64,
    pub patient_name: String,
    pub date: String,
    pub time: String,
}

#[derive(Default, Serialize)]
pub struct ListAppointmentsResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<ListAppointmentItem>,
}

crate::impl_err_response! {
    SearchPatientResponse,
    ListPatientsResponse,
    ListAppointmentsResponse,
}
