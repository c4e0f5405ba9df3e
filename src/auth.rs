//! Caller identification.
//!
//! Real authentication is out of scope for the mock: the caller's fixture
//! user id travels verbatim in the `Authorization` header, the way frontend
//! test harnesses impersonate a user. A missing or malformed header, or an
//! id that resolves to no fixture user, is the same as being logged out.

use http::header::AUTHORIZATION;
use http::request::Parts;

use crate::fixtures::FixtureStore;
use crate::util::errors::{AppResult, forbidden};

#[derive(Debug, Default)]
pub struct AuthCheck;

impl AuthCheck {
    /// Resolves the caller to a fixture user or fails with the uniform
    /// 403 error.
    pub fn check(&self, req: &Parts, store: &FixtureStore) -> AppResult<Authentication> {
        let user_id = req
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<i32>().ok())
            .filter(|id| store.user(*id).is_some())
            .ok_or_else(forbidden)?;

        Ok(Authentication { user_id })
    }
}

#[derive(Debug)]
pub struct Authentication {
    user_id: i32,
}

impl Authentication {
    pub fn user_id(&self) -> i32 {
        self.user_id
    }
}
