//! Standard error responses.
//!
//! Every failure surfaces to the client as a JSON body with a single
//! `detail` string; internal state and backtraces never leak.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub type ErrorResponse = (StatusCode, Json<ErrorBody>);

fn error(status: StatusCode, detail: impl Into<String>) -> ErrorResponse {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
}

pub fn bad_request(detail: impl Into<String>) -> ErrorResponse {
    error(StatusCode::BAD_REQUEST, detail)
}

pub fn unauthorized(detail: impl Into<String>) -> ErrorResponse {
    error(StatusCode::UNAUTHORIZED, detail)
}

pub fn too_many_requests(detail: impl Into<String>) -> ErrorResponse {
    error(StatusCode::TOO_MANY_REQUESTS, detail)
}

pub fn internal_error(detail: impl Into<String>) -> ErrorResponse {
    error(StatusCode::INTERNAL_SERVER_ERROR, detail)
}

pub fn service_unavailable(detail: impl Into<String>) -> ErrorResponse {
    error(StatusCode::SERVICE_UNAVAILABLE, detail)
}
