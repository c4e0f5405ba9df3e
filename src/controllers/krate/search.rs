//! Endpoint for searching and discovery functionality

use axum::extract::State;
use axum_extra::extract::Query;
use axum_extra::json;
use axum_extra::response::ErasedJson;
use http::request::Parts;
use serde::Deserialize;

use crate::app::AppState;
use crate::auth::AuthCheck;
use crate::controllers::helpers::Paginate;
use crate::controllers::helpers::pagination::{PaginationOptions, PaginationQueryParams};
use crate::models::Crate;
use crate::util::errors::AppResult;
use crate::views::EncodableCrate;

#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    /// Restrict to crates whose name starts with this character,
    /// case-insensitively.
    pub letter: Option<String>,
    /// Substring match on the crate name. Numeric-looking names are matched
    /// as strings like any other.
    pub q: Option<String>,
    /// Restrict to crates owned by this user.
    pub user_id: Option<i32>,
    /// Restrict to crates owned by this team.
    pub team_id: Option<i32>,
    /// Restrict to crates the authenticated caller follows. The value is
    /// not inspected; the frontend sends `following=1`.
    pub following: Option<String>,
}

/// List crates, filtered then paginated in insertion order.
pub async fn list_crates(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
    req: Parts,
) -> AppResult<ErasedJson> {
    let options = PaginationOptions::new(&PaginationQueryParams {
        page: params.page.clone(),
        per_page: params.per_page.clone(),
    })?;

    let store = state.store.read();
    let mut crates: Vec<&Crate> = store.crates().iter().collect();

    if let Some(letter) = params.letter.as_deref().and_then(|l| l.chars().next()) {
        crates.retain(|k| {
            k.name
                .chars()
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&letter))
        });
    }

    if let Some(q) = params.q.as_deref() {
        crates.retain(|k| k.name.contains(q));
    }

    if let Some(user_id) = params.user_id {
        crates.retain(|k| {
            store
                .owners(k.id)
                .iter()
                .any(|o| o.user_id == Some(user_id))
        });
    }

    if let Some(team_id) = params.team_id {
        crates.retain(|k| {
            store
                .owners(k.id)
                .iter()
                .any(|o| o.team_id == Some(team_id))
        });
    }

    if params.following.is_some() {
        let user_id = AuthCheck::default().check(&req, &store)?.user_id();
        let followed = store
            .user(user_id)
            .map(|u| u.followed_crate_ids.clone())
            .unwrap_or_default();
        crates.retain(|k| followed.contains(&k.id));
    }

    let page = crates.paginate(&options);
    let total = page.total();
    let crates: Vec<_> = page
        .into_iter()
        .map(|k| EncodableCrate::from_fixture(k, &store))
        .collect();

    Ok(json!({
        "crates": crates,
        "meta": { "total": total },
    }))
}
