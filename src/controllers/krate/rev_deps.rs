use axum::extract::{Path, State};
use axum_extra::extract::Query;
use axum_extra::json;
use axum_extra::response::ErasedJson;

use crate::app::AppState;
use crate::controllers::helpers::Paginate;
use crate::controllers::helpers::pagination::{PaginationOptions, PaginationQueryParams};
use crate::controllers::krate::CratePath;
use crate::util::errors::AppResult;
use crate::views::{EncodableDependency, EncodableVersion};

/// List reverse dependencies of a crate: every dependency record that
/// targets it, plus the versions declaring those dependencies, both cut to
/// the same page window.
pub async fn list_reverse_dependencies(
    State(state): State<AppState>,
    Path(path): Path<CratePath>,
    Query(params): Query<PaginationQueryParams>,
) -> AppResult<ErasedJson> {
    let options = PaginationOptions::new(&params)?;

    let store = state.store.read();
    let krate = path.load_crate(&store)?;

    let page = store.reverse_dependencies(&krate.name).paginate(&options);
    let total = page.total();

    let versions: Vec<_> = page
        .iter()
        .filter_map(|dep| store.version(dep.version_id))
        .filter_map(|version| {
            let owner = store.krate(version.crate_id)?;
            Some(EncodableVersion::from_fixture(version, &owner.name, &store))
        })
        .collect();

    let dependencies: Vec<_> = page
        .into_iter()
        .map(EncodableDependency::from_fixture)
        .collect();

    Ok(json!({
        "dependencies": dependencies,
        "versions": versions,
        "meta": { "total": total },
    }))
}
