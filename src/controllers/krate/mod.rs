pub mod downloads;
pub mod follow;
pub mod metadata;
pub mod owners;
pub mod rev_deps;
pub mod search;
pub mod versions;

use serde::Deserialize;

use crate::fixtures::FixtureStore;
use crate::models::Crate;
use crate::util::errors::{AppResult, not_found};

#[derive(Debug, Deserialize)]
pub struct CratePath {
    /// The name of the crate.
    pub name: String,
}

impl CratePath {
    pub fn load_crate<'a>(&self, store: &'a FixtureStore) -> AppResult<&'a Crate> {
        store.crate_by_name(&self.name).ok_or_else(not_found)
    }
}
