use chrono::{DateTime, Utc};

use crate::models::Version;
use crate::models::version;

/// A publishable package unit. The public identifier is the (unique,
/// case-sensitive) name; the numeric id only links records inside the store.
#[derive(Debug, Clone)]
pub struct Crate {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub homepage: Option<String>,
    pub documentation: Option<String>,
    pub repository: Option<String>,
    pub downloads: i32,
    pub category_ids: Vec<i32>,
    pub keyword_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Crate {
    /// Highest semver among the crate's versions, `"0.0.0"` if it has none.
    ///
    /// Always recomputed from the live version set; the value is never
    /// cached on the record.
    pub fn max_version(&self, versions: &[&Version]) -> String {
        version::max_version(versions)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "0.0.0".to_string())
    }

    /// Highest non-prerelease semver, or `None` if every version is a
    /// prerelease (or there are no versions).
    pub fn max_stable_version(&self, versions: &[&Version]) -> Option<String> {
        version::max_stable_version(versions).map(|v| v.to_string())
    }

    /// The num of the most recently published version, which may not be
    /// the semver maximum.
    pub fn newest_version(&self, versions: &[&Version]) -> String {
        version::newest_version(versions)
            .map(|v| v.num.clone())
            .unwrap_or_else(|| "0.0.0".to_string())
    }
}
