use axum::extract::{Path, State};
use axum::response::Response;

use crate::models::CreateEvent;
use crate::repositories::{BookingRepo, EventRepo};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::AppJson;
use crate::utils::response::{created, success};

pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(success(events, "Events retrieved"))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<Response, AppError> {
    let event = EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No event with id {event_id} found.")))?;
    Ok(success(event, "Event retrieved"))
}

pub async fn create_event(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEvent>,
) -> Result<Response, AppError> {
    input.validate()?;

    let event = EventRepo::create(&state.pool, &input).await?;
    tracing::info!(
        event_id = event.event_id,
        total_ticket_amount = event.total_ticket_amount,
        "Event created"
    );

    Ok(created(event, "Event created"))
}

pub async fn list_event_bookings(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<Response, AppError> {
    if EventRepo::find_by_id(&state.pool, event_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "No event with id {event_id} found."
        )));
    }

    let bookings = BookingRepo::list_for_event(&state.pool, event_id).await?;
    Ok(success(bookings, "Bookings retrieved"))
}
