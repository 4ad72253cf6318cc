use axum::extract::{Path, State};
use axum::response::Response;

use crate::models::CreateUser;
use crate::repositories::{BookingRepo, UserRepo};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::AppJson;
use crate::utils::response::{created, success};

pub async fn list_users(State(state): State<AppState>) -> Result<Response, AppError> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(success(users, "Users retrieved"))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Response, AppError> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No user with id {user_id} found.")))?;
    Ok(success(user, "User retrieved"))
}

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> Result<Response, AppError> {
    input.validate()?;

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, "User created");

    Ok(created(user, "User created"))
}

pub async fn list_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Response, AppError> {
    if UserRepo::find_by_id(&state.pool, user_id).await?.is_none() {
        return Err(AppError::NotFound(format!("No user with id {user_id} found.")));
    }

    let bookings = BookingRepo::list_for_user(&state.pool, user_id).await?;
    Ok(success(bookings, "Bookings retrieved"))
}
