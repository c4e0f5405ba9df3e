//! In-memory fixture database and record builders.
//!
//! The store replaces the database of the real backend: every collection is
//! a `Vec` in insertion order, ids are assigned 1, 2, 3, … per collection
//! and never reused, and relations are resolved by id lookup. Builders
//! apply deterministic defaults so that tests can create batches of records
//! and still assert exact response payloads; any field can be overridden
//! before [`build`](CrateBuilder::build) inserts the record.
//!
//! Misuse of the fixture layer (version for a missing crate, duplicate
//! download date, ownership without an owner) is a programmer error in test
//! setup and panics instead of surfacing through the API.

mod category;
mod dependency;
mod download;
mod krate;
mod store;
mod user;
mod version;

pub use self::category::{CategoryBuilder, KeywordBuilder};
pub use self::dependency::DependencyBuilder;
pub use self::download::VersionDownloadBuilder;
pub use self::krate::CrateBuilder;
pub use self::store::FixtureStore;
pub use self::user::{TeamBuilder, UserBuilder};
pub use self::version::VersionBuilder;

use chrono::{DateTime, Utc};

pub const DEFAULT_AVATAR: &str = "https://avatars1.githubusercontent.com/u/14631425?v=4";

/// Parses a fixture timestamp literal. Panics on malformed input.
pub fn timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap_or_else(|e| panic!("invalid fixture timestamp `{s}`: {e}"))
        .with_timezone(&Utc)
}

/// `created_at` used by all fixture records unless overridden.
pub fn default_created_at() -> DateTime<Utc> {
    timestamp("2010-06-16T21:30:45Z")
}

/// `updated_at` used by all fixture records unless overridden.
pub fn default_updated_at() -> DateTime<Utc> {
    timestamp("2017-02-24T12:34:56Z")
}
