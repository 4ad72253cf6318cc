#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use booking_server::config::Config;
use booking_server::models::{CreateEvent, CreateUser, Event, User};
use booking_server::repositories::{EventRepo, UserRepo};
use booking_server::routes::create_routes;
use booking_server::state::AppState;

/// Build the full application router against `pool`, as `main.rs` does.
pub fn build_test_app(pool: PgPool) -> Router {
    create_routes(AppState::new(pool), &Config::default())
}

pub fn new_event(name: &str, total: i32) -> CreateEvent {
    CreateEvent {
        event_name: name.to_string(),
        event_start: NaiveDate::from_ymd_opt(2030, 5, 17)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap(),
        event_location: "Paradiso, Amsterdam".to_string(),
        total_ticket_amount: total,
        available_tickets: None,
    }
}

pub fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
    }
}

pub async fn seed_event(pool: &PgPool, total: i32) -> Event {
    EventRepo::create(pool, &new_event("Concert", total))
        .await
        .unwrap()
}

pub async fn seed_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(pool, &new_user(email)).await.unwrap()
}

pub async fn available_tickets(pool: &PgPool, event_id: i32) -> i32 {
    EventRepo::find_by_id(pool, event_id)
        .await
        .unwrap()
        .expect("event exists")
        .available_tickets
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw_json(app, uri, body.to_string()).await
}

/// POST a body as `application/json` without checking that it parses.
pub async fn post_raw_json(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
