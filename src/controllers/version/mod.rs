pub mod authors;
pub mod dependencies;
pub mod downloads;

use serde::Deserialize;

use crate::fixtures::FixtureStore;
use crate::models::{Crate, Version};
use crate::util::errors::{AppResult, not_found, version_not_found};

#[derive(Debug, Deserialize)]
pub struct CrateVersionPath {
    /// The name of the crate.
    pub name: String,
    /// The version number.
    pub version: String,
}

impl CrateVersionPath {
    /// Looks up the crate and version addressed by the path.
    ///
    /// An unknown crate is a 404; an unknown version on a known crate is
    /// the soft status-200 error, preserving the asymmetry of the
    /// production API.
    pub fn load_version_and_crate<'a>(
        &self,
        store: &'a FixtureStore,
    ) -> AppResult<(&'a Version, &'a Crate)> {
        let krate = store.crate_by_name(&self.name).ok_or_else(not_found)?;
        let version = store
            .version_by_num(krate.id, &self.version)
            .ok_or_else(|| version_not_found(&self.name, &self.version))?;

        Ok((version, krate))
    }
}
