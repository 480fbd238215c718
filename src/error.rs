use thiserror::Error;

/// Everything a request can fail with. All variants are recovered into a
/// `SimpleResponse` at the handler boundary; `Storage` keeps the backend
/// message verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("This appointment slot is already booked")]
    SlotConflict,
    #[error("Patient with ID {0} does not exist")]
    PatientNotFound(u64),
    #[error("{0}")]
    Storage(#[from] diesel::result::Error),
}

impl ServiceError {
    /// The UNIQUE KEY on appointments (date, time) is the authoritative
    /// double-booking guard; the pre-insert check only exists for a friendly
    /// fast-path message.
    pub fn from_slot_write(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ServiceError::SlotConflict
            }
            err => ServiceError::Storage(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error};

    #[test]
    fn unique_violation_on_slot_write_is_a_conflict() {
        let err = Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("Duplicate entry".to_string()),
        );
        assert!(matches!(
            ServiceError::from_slot_write(err),
            ServiceError::SlotConflict
        ));
    }

    #[test]
    fn other_write_errors_stay_storage_errors() {
        let err = Error::NotFound;
        assert!(matches!(
            ServiceError::from_slot_write(err),
            ServiceError::Storage(_)
        ));
    }

    #[test]
    fn display_messages_are_user_facing() {
        assert_eq!(
            ServiceError::SlotConflict.to_string(),
            "This appointment slot is already booked"
        );
        assert_eq!(
            ServiceError::PatientNotFound(42).to_string(),
            "Patient with ID 42 does not exist"
        );
        assert_eq!(
            ServiceError::Validation("bad contact".to_string()).to_string(),
            "bad contact"
        );
    }
}
