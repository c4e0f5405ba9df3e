//! Endpoints for managing a per user list of followed crates

use axum::extract::{Path, State};
use axum::response::Response;
use axum_extra::json;
use axum_extra::response::ErasedJson;
use http::request::Parts;

use crate::app::AppState;
use crate::auth::AuthCheck;
use crate::controllers::helpers::ok_true;
use crate::controllers::krate::CratePath;
use crate::fixtures::FixtureStore;
use crate::util::errors::{AppResult, not_found};

fn follow_target(crate_name: &str, store: &FixtureStore) -> AppResult<i32> {
    store
        .crate_by_name(crate_name)
        .map(|k| k.id)
        .ok_or_else(not_found)
}

/// Follow a crate. Idempotent.
pub async fn follow_crate(
    State(state): State<AppState>,
    Path(path): Path<CratePath>,
    req: Parts,
) -> AppResult<Response> {
    let mut store = state.store.write();
    let user_id = AuthCheck::default().check(&req, &store)?.user_id();
    let crate_id = follow_target(&path.name, &store)?;
    store.follow(user_id, crate_id);

    ok_true()
}

/// Unfollow a crate. Idempotent.
pub async fn unfollow_crate(
    State(state): State<AppState>,
    Path(path): Path<CratePath>,
    req: Parts,
) -> AppResult<Response> {
    let mut store = state.store.write();
    let user_id = AuthCheck::default().check(&req, &store)?.user_id();
    let crate_id = follow_target(&path.name, &store)?;
    store.unfollow(user_id, crate_id);

    ok_true()
}

/// Check if a crate is followed by the authenticated caller.
pub async fn get_following_crate(
    State(state): State<AppState>,
    Path(path): Path<CratePath>,
    req: Parts,
) -> AppResult<ErasedJson> {
    let store = state.store.read();
    let user_id = AuthCheck::default().check(&req, &store)?.user_id();
    let crate_id = follow_target(&path.name, &store)?;
    let following = store
        .user(user_id)
        .is_some_and(|u| u.is_following(crate_id));

    Ok(json!({ "following": following }))
}
