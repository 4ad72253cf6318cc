use thiserror::Error;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `check_violation`.
const CHECK_VIOLATION: &str = "23514";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Not enough tickets available for event {event_id}: requested {requested}, available {available}")]
    InsufficientInventory {
        event_id: i32,
        requested: i16,
        available: i32,
    },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error")]
    Database(#[source] sqlx::Error),
}

impl LedgerError {
    pub fn event_not_found(id: i32) -> Self {
        LedgerError::NotFound { entity: "Event", id }
    }

    pub fn user_not_found(id: i32) -> Self {
        LedgerError::NotFound { entity: "User", id }
    }
}

impl From<sqlx::Error> for LedgerError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    let message = match db_err.constraint() {
                        Some("unique_email") => {
                            "A user with this email already exists.".to_string()
                        }
                        Some(constraint) => {
                            format!("Duplicate value violates unique constraint: {constraint}")
                        }
                        None => "Duplicate value violates a unique constraint.".to_string(),
                    };
                    return LedgerError::ConstraintViolation(message);
                }
                // Last line of defence behind the conditional decrement.
                Some(CHECK_VIOLATION) => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    return LedgerError::Validation(format!(
                        "Value violates check constraint: {constraint}"
                    ));
                }
                _ => {}
            }
        }
        LedgerError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        assert_eq!(
            LedgerError::event_not_found(7).to_string(),
            "Event with id 7 not found"
        );
        assert_eq!(
            LedgerError::user_not_found(3).to_string(),
            "User with id 3 not found"
        );
    }

    #[test]
    fn test_insufficient_inventory_message() {
        let err = LedgerError::InsufficientInventory {
            event_id: 1,
            requested: 50,
            available: 40,
        };
        assert_eq!(
            err.to_string(),
            "Not enough tickets available for event 1: requested 50, available 40"
        );
    }

    #[test]
    fn test_non_database_sqlx_errors_stay_database_errors() {
        assert!(matches!(
            LedgerError::from(sqlx::Error::RowNotFound),
            LedgerError::Database(sqlx::Error::RowNotFound)
        ));
        assert!(matches!(
            LedgerError::from(sqlx::Error::PoolTimedOut),
            LedgerError::Database(_)
        ));
    }
}
