#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use actix_web::error::BlockingError;
use anyhow::bail;
use chrono::{NaiveDate, NaiveTime};

use crate::error::ServiceError;
use crate::models::appointments::APPOINTMENT_SLOTS;
use crate::models::patients::{GENDER_FEMALE, GENDER_MALE};

pub fn assert_gender_str(gender: &str) -> anyhow::Result<()> {
    if gender != GENDER_MALE && gender != GENDER_FEMALE {
        bail!(ServiceError::Validation(
            "Gender must be either Male or Female".to_string()
        ));
    }
    Ok(())
}

/// Contact numbers are exactly 10 decimal digits. Checked at creation only.
pub fn assert_contact_str(contact: &str) -> anyhow::Result<()> {
    if contact.len() != 10 || !contact.bytes().all(|b| b.is_ascii_digit()) {
        bail!(ServiceError::Validation(
            "Contact number must be exactly 10 digits".to_string()
        ));
    }
    Ok(())
}

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.as_ref(), "%Y-%m-%d")
        .map_err(|_| ServiceError::Validation("Wrong format on date".to_string()).into())
}

/// Appointment times come from the fixed hourly slot table, nothing else.
pub fn parse_slot_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveTime> {
    let s = s.as_ref();
    if !APPOINTMENT_SLOTS.contains(&s) {
        bail!(ServiceError::Validation(
            "Appointment time must be one of the fixed hourly slots".to_string()
        ));
    }
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .map_err(|_| ServiceError::Validation("Wrong format on time".to_string()).into())
}

pub fn get_str_pattern<S: AsRef<str>>(s: S) -> String {
    format!("%{}%", s.as_ref())
}

/// The panel's edit form posts every field; an empty string means
/// "leave this one alone".
pub fn non_empty_opt(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

/// Collapse `web::block` wrapping so the inner error's message reaches the
/// response untouched.
pub fn block_err<E>(err: BlockingError<E>) -> anyhow::Error
where
    E: Into<anyhow::Error> + std::fmt::Debug,
{
    match err {
        BlockingError::Error(err) => err.into(),
        BlockingError::Canceled => anyhow::anyhow!("Blocking task was canceled"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_must_be_ten_digits() {
        assert!(assert_contact_str("5551234567").is_ok());
        assert!(assert_contact_str("0000000000").is_ok());

        assert!(assert_contact_str("").is_err());
        assert!(assert_contact_str("123456789").is_err());
        assert!(assert_contact_str("12345678901").is_err());
        assert!(assert_contact_str("55512345a7").is_err());
        assert!(assert_contact_str("555-123-45").is_err());
    }

    #[test]
    fn contact_error_is_a_validation_error() {
        let err = assert_contact_str("nope").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ServiceError>(),
            Some(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn gender_is_a_closed_enum() {
        assert!(assert_gender_str("Male").is_ok());
        assert!(assert_gender_str("Female").is_ok());
        assert!(assert_gender_str("male").is_err());
        assert!(assert_gender_str("Other").is_err());
        assert!(assert_gender_str("").is_err());
    }

    #[test]
    fn every_fixed_slot_parses() {
        for slot in APPOINTMENT_SLOTS.iter() {
            assert!(parse_slot_str(slot).is_ok(), "slot {} should parse", slot);
        }
    }

    #[test]
    fn off_grid_times_are_rejected() {
        assert!(parse_slot_str("09:00:00").is_err());
        assert!(parse_slot_str("17:00:00").is_err());
        assert!(parse_slot_str("10:30:00").is_err());
        assert!(parse_slot_str("10:00").is_err());
        assert!(parse_slot_str("noon").is_err());
    }

    #[test]
    fn dates_parse_as_iso() {
        assert_eq!(
            parse_date_str("2025-01-10").unwrap(),
            chrono::NaiveDate::from_ymd(2025, 1, 10)
        );
        assert!(parse_date_str("10/01/2025").is_err());
        assert!(parse_date_str("2025-13-01").is_err());
        assert!(parse_date_str("").is_err());
    }

    #[test]
    fn search_patterns_get_both_wildcards() {
        assert_eq!(get_str_pattern("ann"), "%ann%");
        assert_eq!(get_str_pattern(""), "%%");
    }

    #[test]
    fn empty_form_fields_count_as_absent() {
        assert_eq!(non_empty_opt(None), None);
        assert_eq!(non_empty_opt(Some("".to_string())), None);
        assert_eq!(
            non_empty_opt(Some("Ann".to_string())),
            Some("Ann".to_string())
        );
    }
}
