use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::ledger::LedgerError;

use super::user::validate_email;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub booking_id: i32,
    pub ts: NaiveDateTime,
    pub event_id: i32,
    pub user_id: i32,
    pub number_of_tickets: i16,
}

/// Books tickets for an existing user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub event_id: i32,
    pub user_id: i32,
    pub number_of_tickets: i32,
}

/// Books tickets for a user identified by email, registering them on the fly.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuestBooking {
    pub event_id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub number_of_tickets: i32,
}

impl CreateGuestBooking {
    pub fn validate(&self) -> Result<i16, LedgerError> {
        validate_email(&self.email)?;
        validate_ticket_count(self.number_of_tickets)
    }
}

/// Checks that a requested ticket count is positive and fits the
/// `smallint` column, returning it narrowed.
pub fn validate_ticket_count(count: i32) -> Result<i16, LedgerError> {
    if count <= 0 {
        return Err(LedgerError::Validation(
            "Number of tickets has to be larger than 0.".into(),
        ));
    }
    i16::try_from(count).map_err(|_| {
        LedgerError::Validation(format!(
            "Number of tickets cannot exceed {} per booking.",
            i16::MAX
        ))
    })
}
