use axum::response::{IntoResponse, Response};
use axum_extra::json;

use crate::util::errors::AppResult;

pub mod pagination;

pub use self::pagination::Paginate;

pub fn ok_true() -> AppResult<Response> {
    let json = json!({ "ok": true });
    Ok(json.into_response())
}
