use axum::extract::{Path, State};
use axum::response::Response;

use crate::ledger::BookingLedger;
use crate::models::{CreateBooking, CreateGuestBooking};
use crate::repositories::BookingRepo;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::AppJson;
use crate::utils::response::{created, success};

pub async fn list_bookings(State(state): State<AppState>) -> Result<Response, AppError> {
    let bookings = BookingRepo::list(&state.pool).await?;
    Ok(success(bookings, "Bookings retrieved"))
}

pub async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> Result<Response, AppError> {
    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No booking with id {booking_id} found.")))?;
    Ok(success(booking, "Booking retrieved"))
}

pub async fn create_booking(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateBooking>,
) -> Result<Response, AppError> {
    let booking = BookingLedger::create_booking(&state.pool, &input).await?;
    Ok(created(booking, "Booking created"))
}

pub async fn create_guest_booking(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateGuestBooking>,
) -> Result<Response, AppError> {
    let booking = BookingLedger::create_guest_booking(&state.pool, &input).await?;
    Ok(created(booking, "Booking created"))
}
