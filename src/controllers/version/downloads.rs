use axum::extract::{Path, State};
use axum_extra::json;
use axum_extra::response::ErasedJson;

use crate::app::AppState;
use crate::controllers::version::CrateVersionPath;
use crate::util::errors::AppResult;
use crate::views::EncodableVersionDownload;

/// Get the per-day download counts of a crate version, in insertion order.
pub async fn get_version_downloads(
    State(state): State<AppState>,
    Path(path): Path<CrateVersionPath>,
) -> AppResult<ErasedJson> {
    let store = state.store.read();
    let (version, _) = path.load_version_and_crate(&store)?;

    let downloads: Vec<_> = store
        .downloads_of_version(version.id)
        .into_iter()
        .map(EncodableVersionDownload::from_fixture)
        .collect();

    Ok(json!({ "version_downloads": downloads }))
}
