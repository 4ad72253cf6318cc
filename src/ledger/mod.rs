//! The booking ledger: the only place ticket inventory is mutated.
//!
//! Every booking runs in a single transaction that decrements
//! `events.available_tickets` with a conditional `UPDATE` and inserts the
//! booking row. Concurrent writers on the same event serialize on the event
//! row lock, and the `available_tickets >= $n` predicate is re-evaluated
//! against the latest committed value, so inventory can never go negative.

mod error;

pub use error::LedgerError;

use sqlx::{PgConnection, PgPool};
use tracing::{info, warn};

use crate::models::booking::validate_ticket_count;
use crate::models::{Booking, CreateBooking, CreateGuestBooking};
use crate::repositories::booking_repo::BOOKING_COLUMNS;

pub struct BookingLedger;

impl BookingLedger {
    /// Books `number_of_tickets` on an event for an existing, active user.
    pub async fn create_booking(
        pool: &PgPool,
        input: &CreateBooking,
    ) -> Result<Booking, LedgerError> {
        let tickets = validate_ticket_count(input.number_of_tickets)?;

        let mut tx = pool.begin().await?;

        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1 AND active)")
                .bind(input.user_id)
                .fetch_one(&mut *tx)
                .await?;
        if !user_exists {
            warn!(user_id = input.user_id, "Booking rejected: unknown user");
            return Err(LedgerError::user_not_found(input.user_id));
        }

        let booking =
            reserve_and_insert(&mut *tx, input.event_id, input.user_id, tickets).await?;
        tx.commit().await?;

        info!(
            booking_id = booking.booking_id,
            event_id = booking.event_id,
            user_id = booking.user_id,
            number_of_tickets = booking.number_of_tickets,
            "Booking created"
        );
        Ok(booking)
    }

    /// Books tickets for the user owning `email`, registering the user first
    /// if needed. A rejected booking also discards the new user row.
    /// Deactivated accounts cannot book.
    pub async fn create_guest_booking(
        pool: &PgPool,
        input: &CreateGuestBooking,
    ) -> Result<Booking, LedgerError> {
        let tickets = input.validate()?;
        let email = input.email.trim();

        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO users (email, first_name, last_name) VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT unique_email DO NOTHING",
        )
        .bind(email)
        .bind(input.first_name.as_deref())
        .bind(input.last_name.as_deref())
        .execute(&mut *tx)
        .await?;

        let (user_id, active): (i32, bool) =
            sqlx::query_as("SELECT user_id, active FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(&mut *tx)
                .await?;
        if !active {
            warn!(user_id, "Guest booking rejected: inactive user");
            return Err(LedgerError::user_not_found(user_id));
        }

        let booking = reserve_and_insert(&mut *tx, input.event_id, user_id, tickets).await?;
        tx.commit().await?;

        info!(
            booking_id = booking.booking_id,
            event_id = booking.event_id,
            user_id = booking.user_id,
            number_of_tickets = booking.number_of_tickets,
            "Guest booking created"
        );
        Ok(booking)
    }
}

/// Atomically takes `tickets` from the event's inventory and records the
/// booking. Must run inside a transaction so a failed insert gives the
/// tickets back.
async fn reserve_and_insert(
    conn: &mut PgConnection,
    event_id: i32,
    user_id: i32,
    tickets: i16,
) -> Result<Booking, LedgerError> {
    let remaining: Option<i32> = sqlx::query_scalar(
        "UPDATE events SET available_tickets = available_tickets - $2 \
         WHERE event_id = $1 AND available_tickets >= $2 \
         RETURNING available_tickets",
    )
    .bind(event_id)
    .bind(i32::from(tickets))
    .fetch_optional(&mut *conn)
    .await?;

    if remaining.is_none() {
        let available: Option<i32> =
            sqlx::query_scalar("SELECT available_tickets FROM events WHERE event_id = $1")
                .bind(event_id)
                .fetch_optional(&mut *conn)
                .await?;

        return Err(match available {
            None => {
                warn!(event_id, "Booking rejected: unknown event");
                LedgerError::event_not_found(event_id)
            }
            Some(available) => {
                warn!(
                    event_id,
                    user_id,
                    number_of_tickets = tickets,
                    available_tickets = available,
                    "Booking rejected: not enough tickets available"
                );
                LedgerError::InsufficientInventory {
                    event_id,
                    requested: tickets,
                    available,
                }
            }
        });
    }

    let query = format!(
        "INSERT INTO bookings (event_id, user_id, number_of_tickets) \
         VALUES ($1, $2, $3) RETURNING {BOOKING_COLUMNS}"
    );
    let booking = sqlx::query_as::<_, Booking>(&query)
        .bind(event_id)
        .bind(user_id)
        .bind(tickets)
        .fetch_one(&mut *conn)
        .await?;

    Ok(booking)
}
