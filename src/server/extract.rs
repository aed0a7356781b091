use axum::extract::FromRequest;

use crate::server::errors::ApiError;

/// `axum::Json` whose rejections render as `ApiError` (422 with a `detail` body).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
