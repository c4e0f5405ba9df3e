use chrono::{DateTime, Utc};

use crate::models::{User, Version};

use super::{FixtureStore, default_created_at, default_updated_at};

/// License default sequence, cycled over the global version index.
const LICENSES: &[&str] = &["MIT/Apache-2.0", "MIT", "Apache-2.0"];

/// Builder for version records. The parent crate must already exist.
///
/// Defaults are keyed off the global version index `i` (0-based) so that
/// batch-created fixtures stay deterministic: `num = 1.0.{i}`,
/// `crate_size = i * 162_963`, `downloads = i * 3_702`, and the license
/// cycles through `MIT/Apache-2.0`, `MIT`, `Apache-2.0`.
#[derive(Debug)]
pub struct VersionBuilder {
    crate_id: i32,
    num: Option<String>,
    crate_size: Option<i32>,
    license: Option<String>,
    downloads: Option<i32>,
    yanked: bool,
    published_by: Option<i32>,
    authors: Vec<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl VersionBuilder {
    pub fn new(crate_id: i32) -> Self {
        VersionBuilder {
            crate_id,
            num: None,
            crate_size: None,
            license: None,
            downloads: None,
            yanked: false,
            published_by: None,
            authors: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn num(mut self, num: impl Into<String>) -> Self {
        self.num = Some(num.into());
        self
    }

    pub fn crate_size(mut self, crate_size: i32) -> Self {
        self.crate_size = Some(crate_size);
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn downloads(mut self, downloads: i32) -> Self {
        self.downloads = Some(downloads);
        self
    }

    pub fn yanked(mut self, yanked: bool) -> Self {
        self.yanked = yanked;
        self
    }

    pub fn published_by(mut self, user: &User) -> Self {
        self.published_by = Some(user.id);
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn build(self, store: &mut FixtureStore) -> Version {
        assert!(
            store.krate(self.crate_id).is_some(),
            "fixture version references missing crate id {}",
            self.crate_id,
        );

        let i = store.versions.len();
        let version = Version {
            id: i as i32 + 1,
            crate_id: self.crate_id,
            num: self.num.unwrap_or_else(|| format!("1.0.{i}")),
            crate_size: self.crate_size.unwrap_or(i as i32 * 162_963),
            license: Some(
                self.license
                    .unwrap_or_else(|| LICENSES[i % LICENSES.len()].to_string()),
            ),
            downloads: self.downloads.unwrap_or(i as i32 * 3_702),
            yanked: self.yanked,
            published_by: self.published_by,
            authors: self.authors,
            created_at: self.created_at.unwrap_or_else(default_created_at),
            updated_at: self.updated_at.unwrap_or_else(default_updated_at),
        };
        store.versions.push(version.clone());
        version
    }
}
