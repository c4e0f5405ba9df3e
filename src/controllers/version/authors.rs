use axum::extract::{Path, State};
use axum_extra::json;
use axum_extra::response::ErasedJson;

use crate::app::AppState;
use crate::controllers::version::CrateVersionPath;
use crate::util::errors::AppResult;

/// Get the authors of a crate version.
///
/// Author strings are free text from the package manifest; the resolved
/// `users` list is always empty, matching the public API since authors
/// stopped being linked to accounts.
pub async fn get_version_authors(
    State(state): State<AppState>,
    Path(path): Path<CrateVersionPath>,
) -> AppResult<ErasedJson> {
    let store = state.store.read();
    let (version, _) = path.load_version_and_crate(&store)?;

    Ok(json!({
        "meta": { "names": version.authors.clone() },
        "users": [],
    }))
}
