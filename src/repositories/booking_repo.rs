use sqlx::PgPool;

use crate::models::Booking;

/// Column list for `bookings` queries.
pub(crate) const BOOKING_COLUMNS: &str = "booking_id, ts, event_id, user_id, number_of_tickets";

/// Read-only access to bookings. Bookings are created by the ledger and
/// never updated.
pub struct BookingRepo;

impl BookingRepo {
    pub async fn find_by_id(
        pool: &PgPool,
        booking_id: i32,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE booking_id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(booking_id)
            .fetch_optional(pool)
            .await
    }

    /// All bookings, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query =
            format!("SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY ts DESC, booking_id DESC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    pub async fn list_for_event(pool: &PgPool, event_id: i32) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE event_id = $1 ORDER BY booking_id"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_for_user(pool: &PgPool, user_id: i32) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY booking_id"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Total tickets committed against an event.
    pub async fn tickets_booked(pool: &PgPool, event_id: i32) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(number_of_tickets), 0)::BIGINT FROM bookings WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(pool)
        .await
    }
}
