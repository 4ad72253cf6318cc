use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::ledger::LedgerError;

/// ASCII `local@domain.tld` with a 2 to 7 letter top-level domain.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,7}$").expect("valid regex")
});

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub created_at: NaiveDateTime,
    pub active: bool,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Null until the account is activated. Never sent to clients.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CreateUser {
    pub fn validate(&self) -> Result<(), LedgerError> {
        validate_email(&self.email)
    }
}

/// Surrounding whitespace is ignored; it is trimmed before storage.
pub fn validate_email(email: &str) -> Result<(), LedgerError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(LedgerError::Validation("Email not valid.".into()))
    }
}
