use axum::response::Response;
use serde::Serialize;

use crate::utils::response::{empty_success, success};

pub mod bookings;
pub mod events;
pub mod users;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "booking-api",
    };

    success(payload, "Health check successful")
}

pub async fn welcome() -> Response {
    empty_success(
        "Welcome to the booking service. List events with GET /events, \
         inspect one with GET /events/{id} and book tickets with POST /bookings.",
    )
}
