mod requests;
mod responses;
mod utils;

use crate::{
    database::get_db_conn,
    error::ServiceError,
    models::{
        appointments::{Appointment, NewAppointment},
        patients::{NewPatient, PatientData, UpdatePatient},
    },
    protocol::SimpleResponse,
    utils::{block_err, non_empty_opt},
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::bail;
use chrono::NaiveDate;
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add_patient)
        .service(make_appointment)
        .service(update_patient)
        .service(edit_appointment)
        .service(delete_patient)
        .service(search_patient)
        .service(list_appointments)
        .service(list_patients);
}

crate::post_funcs! {
    (add_patient, "/add_patient", AddPatientRequest, SimpleResponse),
    (make_appointment, "/make_appointment", MakeAppointmentRequest, SimpleResponse),
    (update_patient, "/update_patient", UpdatePatientRequest, SimpleResponse),
    (edit_appointment, "/edit_appointment", EditAppointmentRequest, SimpleResponse),
    (delete_patient, "/delete_patient", DeletePatientRequest, SimpleResponse),
    (search_patient, "/search_patient", SearchPatientRequest, SearchPatientResponse),
    (list_appointments, "/list_appointments", ListAppointmentsRequest, ListAppointmentsResponse),
    (list_patients, "/list_patients", ListPatientsRequest, ListPatientsResponse),
}

async fn add_patient_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddPatientRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::patients;

    let info = info.into_inner();
    crate::utils::assert_contact_str(&info.contact)?;
    crate::utils::assert_gender_str(&info.gender)?;

    let dob = match NaiveDate::parse_from_str(&info.dob, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => None,
    };

    let data = NewPatient {
        name: info.name,
        email: info.email,
        dob,
        gender: info.gender,
        contact: info.contact,
        address: info.address,
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(patients::table)
            .values(data)
            .execute(&conn)
    })
    .await
    .map_err(block_err)?;

    Ok(SimpleResponse::ok())
}

async fn make_appointment_impl(
    pool: web::Data<DbPool>,
    info: web::Json<MakeAppointmentRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let date = crate::utils::parse_date_str(&info.date)?;
    let time = crate::utils::parse_slot_str(&info.time)?;
    let pid = info.pid;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            if !utils::slot_is_free(&conn, &date, &time, None).map_err(ServiceError::Storage)? {
                bail!(ServiceError::SlotConflict);
            }

            // a missing patient surfaces as the raw FK error from storage
            let data = NewAppointment { pid, date, time };
            diesel::insert_into(appointments::table)
                .values(data)
                .execute(&conn)
                .map_err(ServiceError::from_slot_write)?;

            Ok(())
        })
    })
    .await
    .map_err(block_err)?;

    Ok(SimpleResponse::ok())
}

async fn update_patient_impl(
    pool: web::Data<DbPool>,
    info: web::Json<UpdatePatientRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::patients;

    let info = info.into_inner();
    let pid = info.pid;

    let mut data = UpdatePatient {
        name: non_empty_opt(info.name),
        email: non_empty_opt(info.email),
        gender: non_empty_opt(info.gender),
        contact: non_empty_opt(info.contact),
        address: non_empty_opt(info.address),
        ..Default::default()
    };
    if let Some(dob) = non_empty_opt(info.dob) {
        data.dob = Some(crate::utils::parse_date_str(&dob)?);
    }

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::update(patients::table.filter(patients::pid.eq(pid)))
            .set(&data)
            .execute(&conn)
    })
    .await
    .map_err(block_err)?;

    Ok(SimpleResponse::ok())
}

async fn edit_appointment_impl(
    pool: web::Data<DbPool>,
    info: web::Json<EditAppointmentRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let date = crate::utils::parse_date_str(&info.date)?;
    let time = crate::utils::parse_slot_str(&info.time)?;
    let aid = info.aid;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            // the appointment's own row must not block a move to its current slot
            if !utils::slot_is_free(&conn, &date, &time, Some(aid))
                .map_err(ServiceError::Storage)?
            {
                bail!(ServiceError::SlotConflict);
            }

            diesel::update(appointments::table.filter(appointments::aid.eq(aid)))
                .set((appointments::date.eq(date), appointments::time.eq(time)))
                .execute(&conn)
                .map_err(ServiceError::from_slot_write)?;

            Ok(())
        })
    })
    .await
    .map_err(block_err)?;

    Ok(SimpleResponse::ok())
}

async fn delete_patient_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeletePatientRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::{appointments, patients};

    let info = info.into_inner();
    let pid = info.pid;

    let conn = get_db_conn(&pool)?;
    let removed = web::block(move || {
        conn.transaction(|| {
            let res = patients::table
                .filter(patients::pid.eq(pid))
                .count()
                .get_result::<i64>(&conn)
                .map_err(ServiceError::Storage)?;
            if res == 0 {
                bail!(ServiceError::PatientNotFound(pid));
            }

            // appointments go first, the patient row owns them
            let removed = diesel::delete(appointments::table.filter(appointments::pid.eq(pid)))
                .execute(&conn)
                .map_err(ServiceError::Storage)?;
            diesel::delete(patients::table.filter(patients::pid.eq(pid)))
                .execute(&conn)
                .map_err(ServiceError::Storage)?;

            Ok(removed)
        })
    })
    .await
    .map_err(block_err)?;

    tracing::info!(pid, appointments = removed, "patient deleted");

    Ok(SimpleResponse::ok())
}

async fn search_patient_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchPatientRequest>,
) -> anyhow::Result<SearchPatientResponse> {
    use crate::schema::patients;

    let info = info.into_inner();
    let pattern = crate::utils::get_str_pattern(&info.query);

    let conn = get_db_conn(&pool)?;
    let pats = web::block(move || {
        patients::table
            .filter(
                patients::name
                    .like(pattern.clone())
                    .or(patients::email.like(pattern)),
            )
            .order(patients::pid.asc())
            .get_results::<PatientData>(&conn)
    })
    .await
    .map_err(block_err)?;

    let pats = pats
        .into_iter()
        .map(|data| SearchPatientItem {
            pid: data.pid,
            name: data.name,
            email: data.email,
            dob: data.dob.map(|d| d.to_string()).unwrap_or_default(),
            gender: data.gender,
            contact: data.contact,
            address: data.address,
        })
        .collect();

    Ok(SearchPatientResponse {
        success: true,
        err: "".to_string(),
        patients: pats,
    })
}

async fn list_appointments_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ListAppointmentsRequest>,
) -> anyhow::Result<ListAppointmentsResponse> {
    use crate::schema::{appointments, patients};

    let info = info.into_inner();
    let (start_date, end_date) = match info.date {
        Some(date) => {
            let date = crate::utils::parse_date_str(&date)?;
            (date, date)
        }
        None => (
            NaiveDate::from_ymd(1901, 1, 1),
            NaiveDate::from_ymd(2901, 1, 1),
        ),
    };

    let conn = get_db_conn(&pool)?;
    let appos = web::block(move || {
        appointments::table
            .filter(appointments::date.between(start_date, end_date))
            .inner_join(patients::table.on(appointments::pid.eq(patients::pid)))
            .order(appointments::date.asc())
            .then_order_by(appointments::time.asc())
            .get_results::<(Appointment, PatientData)>(&conn)
    })
    .await
    .map_err(block_err)?;

    let appos = appos
        .into_iter()
        .map(|(appo_data, patient_data)| ListAppointmentItem {
            aid: appo_data.aid,
            pid: appo_data.pid,
            patient_name: patient_data.name,
            date: appo_data.date.to_string(),
            time: appo_data.time.to_string(),
        })
        .collect();

    Ok(ListAppointmentsResponse {
        success: true,
        err: "".to_string(),
        appointments: appos,
    })
}

async fn list_patients_impl(
    pool: web::Data<DbPool>,
    _info: web::Json<ListPatientsRequest>,
) -> anyhow::Result<ListPatientsResponse> {
    use crate::schema::patients;

    let conn = get_db_conn(&pool)?;
    let pats = web::block(move || {
        patients::table
            .select((patients::pid, patients::name))
            .order(patients::pid.asc())
            .get_results::<(u64, String)>(&conn)
    })
    .await
    .map_err(block_err)?;

    let pats = pats
        .into_iter()
        .map(|(pid, name)| ListPatientItem { pid, name })
        .collect();

    Ok(ListPatientsResponse {
        success: true,
        err: "".to_string(),
        patients: pats,
    })
}
