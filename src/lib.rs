//! Mock implementation of the crates.io API, backed by an in-memory
//! fixture store instead of a database.
//!
//! The HTTP surface mirrors the read endpoints of the production API
//! (crate search, crate metadata, versions, owners, downloads, reverse
//! dependencies) plus the follow/unfollow toggle. Tests and development
//! servers seed the [`fixtures::FixtureStore`] with deterministic records
//! and issue requests against the [`router::build_axum_router`] output.

pub mod app;
pub mod auth;
pub mod controllers;
pub mod fixtures;
pub mod models;
pub mod router;
pub mod util;
pub mod views;
