use axum::extract::{Path, State};
use axum_extra::json;
use axum_extra::response::ErasedJson;

use crate::app::AppState;
use crate::controllers::version::CrateVersionPath;
use crate::util::errors::AppResult;
use crate::views::EncodableDependency;

/// List the dependencies of a crate version, in insertion order.
pub async fn get_version_dependencies(
    State(state): State<AppState>,
    Path(path): Path<CrateVersionPath>,
) -> AppResult<ErasedJson> {
    let store = state.store.read();
    let (version, _) = path.load_version_and_crate(&store)?;

    let dependencies: Vec<_> = store
        .dependencies_of(version.id)
        .into_iter()
        .map(EncodableDependency::from_fixture)
        .collect();

    Ok(json!({ "dependencies": dependencies }))
}
