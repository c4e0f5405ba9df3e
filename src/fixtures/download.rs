use crate::models::VersionDownload;

use super::FixtureStore;

/// Builder for per-day download rows. At most one row may exist per
/// `(version, date)` pair; a duplicate is a setup bug and panics.
///
/// The default count follows the sequence `9_380 + i * 7_035` over the
/// global download-row index.
#[derive(Debug)]
pub struct VersionDownloadBuilder {
    version_id: i32,
    date: String,
    downloads: Option<i32>,
}

impl VersionDownloadBuilder {
    pub fn new(version_id: i32, date: impl Into<String>) -> Self {
        VersionDownloadBuilder {
            version_id,
            date: date.into(),
            downloads: None,
        }
    }

    pub fn downloads(mut self, downloads: i32) -> Self {
        self.downloads = Some(downloads);
        self
    }

    pub fn build(self, store: &mut FixtureStore) -> VersionDownload {
        assert!(
            store.version(self.version_id).is_some(),
            "fixture download references missing version id {}",
            self.version_id,
        );
        assert!(
            !store
                .version_downloads
                .iter()
                .any(|d| d.version_id == self.version_id && d.date == self.date),
            "duplicate fixture download for version {} on {}",
            self.version_id,
            self.date,
        );

        let i = store.version_downloads.len();
        let download = VersionDownload {
            id: i as i32 + 1,
            version_id: self.version_id,
            date: self.date,
            downloads: self.downloads.unwrap_or(9_380 + i as i32 * 7_035),
        };
        store.version_downloads.push(download.clone());
        download
    }
}
