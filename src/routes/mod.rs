use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::handlers::{bookings, events, health_check, users, welcome};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/:event_id", get(events::get_event))
        .route(
            "/events/:event_id/bookings",
            get(events::list_event_bookings),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/bookings", get(users::list_user_bookings))
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/bookings/guest", post(bookings::create_guest_booking))
        .route("/bookings/:booking_id", get(bookings::get_booking))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(config.production))
        .layer(create_cors_layer(&config.cors_allowed_origins))
}
