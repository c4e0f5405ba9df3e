use chrono::{DateTime, Utc};

/// A published release of a crate. `published_by` is `None` for versions
/// published before publisher tracking existed.
#[derive(Debug, Clone)]
pub struct Version {
    pub id: i32,
    pub crate_id: i32,
    pub num: String,
    pub crate_size: i32,
    pub license: Option<String>,
    pub downloads: i32,
    pub yanked: bool,
    pub published_by: Option<i32>,
    pub authors: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Version {
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.num).ok()
    }
}

pub fn max_version(versions: &[&Version]) -> Option<semver::Version> {
    versions.iter().filter_map(|v| v.semver()).max()
}

pub fn max_stable_version(versions: &[&Version]) -> Option<semver::Version> {
    versions
        .iter()
        .filter_map(|v| v.semver())
        .filter(|v| v.pre.is_empty())
        .max()
}

/// The most recently created version, i.e. the one with the highest id.
pub fn newest_version<'a>(versions: &[&'a Version]) -> Option<&'a Version> {
    versions.iter().max_by_key(|v| v.id).copied()
}
