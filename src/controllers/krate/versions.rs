use axum::extract::{Path, State};
use axum_extra::json;
use axum_extra::response::ErasedJson;

use crate::app::AppState;
use crate::controllers::krate::CratePath;
use crate::util::errors::AppResult;
use crate::views::EncodableVersion;

/// List all versions of a crate, in insertion order.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(path): Path<CratePath>,
) -> AppResult<ErasedJson> {
    let store = state.store.read();
    let krate = path.load_crate(&store)?;

    let versions: Vec<_> = store
        .versions_of(krate.id)
        .into_iter()
        .map(|v| EncodableVersion::from_fixture(v, &krate.name, &store))
        .collect();

    Ok(json!({ "versions": versions }))
}
