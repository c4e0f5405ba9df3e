use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;
use http::{Method, StatusCode};

use crate::app::AppState;
use crate::controllers::{krate, version};
use crate::util::errors::not_found;

pub fn build_axum_router(state: AppState) -> Router<()> {
    Router::new()
        .route("/api/v1/crates", get(krate::search::list_crates))
        .route("/api/v1/crates/{name}", get(krate::metadata::find_crate))
        .route(
            "/api/v1/crates/{name}/following",
            get(krate::follow::get_following_crate),
        )
        .route(
            "/api/v1/crates/{name}/follow",
            axum::routing::put(krate::follow::follow_crate)
                .delete(krate::follow::unfollow_crate),
        )
        .route(
            "/api/v1/crates/{name}/versions",
            get(krate::versions::list_versions),
        )
        .route(
            "/api/v1/crates/{name}/downloads",
            get(krate::downloads::get_crate_downloads),
        )
        .route(
            "/api/v1/crates/{name}/owner_user",
            get(krate::owners::get_user_owners),
        )
        .route(
            "/api/v1/crates/{name}/owner_team",
            get(krate::owners::get_team_owners),
        )
        .route(
            "/api/v1/crates/{name}/reverse_dependencies",
            get(krate::rev_deps::list_reverse_dependencies),
        )
        .route(
            "/api/v1/crates/{name}/{version}/authors",
            get(version::authors::get_version_authors),
        )
        .route(
            "/api/v1/crates/{name}/{version}/dependencies",
            get(version::dependencies::get_version_dependencies),
        )
        .route(
            "/api/v1/crates/{name}/{version}/downloads",
            get(version::downloads::get_version_downloads),
        )
        .fallback(|method: Method| async move {
            match method {
                Method::HEAD => StatusCode::NOT_FOUND.into_response(),
                _ => not_found().into_response(),
            }
        })
        .with_state(state)
}
