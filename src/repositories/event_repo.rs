use sqlx::PgPool;

use crate::models::{CreateEvent, Event};

/// Column list for `events` queries.
const EVENT_COLUMNS: &str = "\
    event_id, event_name, event_start, event_location, \
    total_ticket_amount, available_tickets";

pub struct EventRepo;

impl EventRepo {
    /// Insert a new event. Callers validate `input` first.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (\
                event_name, event_start, event_location, \
                total_ticket_amount, available_tickets\
             ) VALUES ($1, $2, $3, $4, $5) \
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.event_name.trim())
            .bind(input.event_start)
            .bind(input.event_location.trim())
            .bind(input.total_ticket_amount)
            .bind(input.initial_available_tickets())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, event_id: i32) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// All events, soonest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY event_start, event_id");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }
}
