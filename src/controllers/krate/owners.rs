//! Endpoints for listing the owners of a crate. User and team owners are
//! served separately, mirroring the public API.

use axum::extract::{Path, State};
use axum_extra::json;
use axum_extra::response::ErasedJson;

use crate::app::AppState;
use crate::controllers::krate::CratePath;
use crate::util::errors::AppResult;
use crate::views::EncodableOwner;

/// List the users that own a crate.
pub async fn get_user_owners(
    State(state): State<AppState>,
    Path(path): Path<CratePath>,
) -> AppResult<ErasedJson> {
    let store = state.store.read();
    let krate = path.load_crate(&store)?;

    let users: Vec<_> = store
        .owners(krate.id)
        .into_iter()
        .filter(|o| o.user_id.is_some())
        .filter_map(|o| EncodableOwner::from_ownership(o, &store))
        .collect();

    Ok(json!({ "users": users }))
}

/// List the teams that own a crate.
pub async fn get_team_owners(
    State(state): State<AppState>,
    Path(path): Path<CratePath>,
) -> AppResult<ErasedJson> {
    let store = state.store.read();
    let krate = path.load_crate(&store)?;

    let teams: Vec<_> = store
        .owners(krate.id)
        .into_iter()
        .filter(|o| o.team_id.is_some())
        .filter_map(|o| EncodableOwner::from_ownership(o, &store))
        .collect();

    Ok(json!({ "teams": teams }))
}
