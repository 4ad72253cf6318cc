use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::ledger::LedgerError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub event_id: i32,
    pub event_name: String,
    pub event_start: NaiveDateTime,
    pub event_location: String,
    pub total_ticket_amount: i32,
    pub available_tickets: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub event_name: String,
    pub event_start: NaiveDateTime,
    pub event_location: String,
    pub total_ticket_amount: i32,
    /// Defaults to `total_ticket_amount` when omitted.
    pub available_tickets: Option<i32>,
}

impl CreateEvent {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.event_name.trim().is_empty() {
            return Err(LedgerError::Validation("Event name is required.".into()));
        }
        if self.event_location.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Event location is required.".into(),
            ));
        }
        if self.total_ticket_amount <= 0 {
            return Err(LedgerError::Validation(
                "The total number of tickets has to be larger than 0.".into(),
            ));
        }
        let available = self.initial_available_tickets();
        if available < 0 || available > self.total_ticket_amount {
            return Err(LedgerError::Validation(format!(
                "Available tickets must be between 0 and {}.",
                self.total_ticket_amount
            )));
        }
        Ok(())
    }

    pub fn initial_available_tickets(&self) -> i32 {
        self.available_tickets.unwrap_or(self.total_ticket_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn concert(total: i32, available: Option<i32>) -> CreateEvent {
        CreateEvent {
            event_name: "Concert".to_string(),
            event_start: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap(),
            event_location: "Main Hall".to_string(),
            total_ticket_amount: total,
            available_tickets: available,
        }
    }

    #[test]
    fn test_available_defaults_to_total() {
        let input = concert(100, None);
        assert!(input.validate().is_ok());
        assert_eq!(input.initial_available_tickets(), 100);
    }

    #[test]
    fn test_rejects_non_positive_total() {
        assert!(matches!(
            concert(0, None).validate(),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            concert(-5, None).validate(),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_available_above_total() {
        assert!(matches!(
            concert(10, Some(11)).validate(),
            Err(LedgerError::Validation(_))
        ));
        assert!(concert(10, Some(10)).validate().is_ok());
        assert!(concert(10, Some(0)).validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut input = concert(10, None);
        input.event_name = "   ".to_string();
        assert!(matches!(input.validate(), Err(LedgerError::Validation(_))));
    }
}
