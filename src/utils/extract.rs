use axum::extract::FromRequest;

use crate::utils::error::AppError;

/// `axum::Json` whose rejections use the API error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
