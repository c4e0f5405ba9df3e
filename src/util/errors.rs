//! Error types for the request/response lifecycle.
//!
//! All user-facing failures render the same JSON shape,
//! `{"errors": [{"detail": "..."}]}`, and differ only in status code and
//! detail string. Handlers return [`AppResult`] and construct errors through
//! the helpers below.

use std::fmt;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;

pub type BoxedAppError = Box<dyn AppError>;
pub type AppResult<T> = Result<T, BoxedAppError>;

pub trait AppError: Send + fmt::Display + fmt::Debug + 'static {
    /// Generate the HTTP response for this error.
    fn response(&self) -> Response;
}

impl AppError for BoxedAppError {
    fn response(&self) -> Response {
        (**self).response()
    }
}

impl IntoResponse for BoxedAppError {
    fn into_response(self) -> Response {
        self.response()
    }
}

fn json_error(detail: &str, status: StatusCode) -> Response {
    let json = json!({ "errors": [{ "detail": detail }] });
    (status, Json(json)).into_response()
}

/// Returns a 404 with the uniform "Not Found" body.
pub fn not_found() -> BoxedAppError {
    Box::new(NotFound)
}

/// Returns a 403 for requests that require a logged-in caller.
pub fn forbidden() -> BoxedAppError {
    Box::new(Forbidden)
}

/// Returns a 400 with the provided description as JSON.
pub fn bad_request<S: ToString + ?Sized>(error: &S) -> BoxedAppError {
    Box::new(BadRequest(error.to_string()))
}

/// Returns the error body for a version lookup miss on a known crate.
///
/// The production API responds with status 200 here instead of 404, and
/// clients depend on it, so the mock reproduces the same behavior.
pub fn version_not_found(krate: &str, version: &str) -> BoxedAppError {
    Box::new(VersionNotFound(format!(
        "crate `{krate}` does not have a version `{version}`"
    )))
}

#[derive(Debug)]
struct NotFound;

impl AppError for NotFound {
    fn response(&self) -> Response {
        json_error("Not Found", StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "Not Found".fmt(f)
    }
}

#[derive(Debug)]
struct Forbidden;

impl AppError for Forbidden {
    fn response(&self) -> Response {
        let detail = "must be logged in to perform that action";
        json_error(detail, StatusCode::FORBIDDEN)
    }
}

impl fmt::Display for Forbidden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "must be logged in to perform that action".fmt(f)
    }
}

#[derive(Debug)]
struct BadRequest(String);

impl AppError for BadRequest {
    fn response(&self) -> Response {
        json_error(&self.0, StatusCode::BAD_REQUEST)
    }
}

impl fmt::Display for BadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug)]
struct VersionNotFound(String);

impl AppError for VersionNotFound {
    fn response(&self) -> Response {
        json_error(&self.0, StatusCode::OK)
    }
}

impl fmt::Display for VersionNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
