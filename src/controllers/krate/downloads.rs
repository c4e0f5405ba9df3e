//! Endpoint for exposing crate-level download counts
//!
//! Version specific download counts are served by `version::downloads`.

use axum::extract::{Path, State};
use axum_extra::json;
use axum_extra::response::ErasedJson;

use crate::app::AppState;
use crate::controllers::krate::CratePath;
use crate::util::errors::AppResult;
use crate::views::EncodableVersionDownload;

/// Get the download counts for all of a crate's versions.
///
/// The `extra_downloads` bucket exists for API compatibility and is always
/// empty here: the mock keeps per-version rows for every version.
pub async fn get_crate_downloads(
    State(state): State<AppState>,
    Path(path): Path<CratePath>,
) -> AppResult<ErasedJson> {
    let store = state.store.read();
    let krate = path.load_crate(&store)?;

    let downloads: Vec<_> = store
        .downloads_of_crate(krate.id)
        .into_iter()
        .map(EncodableVersionDownload::from_fixture)
        .collect();

    Ok(json!({
        "version_downloads": downloads,
        "meta": { "extra_downloads": [] },
    }))
}
