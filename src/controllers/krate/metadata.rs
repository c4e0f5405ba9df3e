//! Endpoint for serving crate metadata together with the crate's versions,
//! categories, and keywords.

use axum::extract::{Path, State};
use axum_extra::json;
use axum_extra::response::ErasedJson;

use crate::app::AppState;
use crate::controllers::krate::CratePath;
use crate::util::errors::AppResult;
use crate::views::{EncodableCategory, EncodableCrate, EncodableKeyword, EncodableVersion};

/// Get crate metadata.
pub async fn find_crate(
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

    let categories: Vec<_> = krate
        .category_ids
        .iter()
        .filter_map(|id| store.category(*id))
        .map(|c| EncodableCategory::from_fixture(c, &store))
        .collect();

    let keywords: Vec<_> = krate
        .keyword_ids
        .iter()
        .filter_map(|id| store.keyword(*id))
        .map(|k| EncodableKeyword::from_fixture(k, &store))
        .collect();

    Ok(json!({
        "crate": EncodableCrate::from_fixture(krate, &store),
        "versions": versions,
        "keywords": keywords,
        "categories": categories,
    }))
}
