use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";
pub const INVALID_CONTACT_INQUIRY_DETAIL: &str = "Invalid contact inquiry";
pub const SUBMISSION_IN_PROGRESS_DETAIL: &str = "Submission already in progress";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_DETAIL)
}

pub fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}
