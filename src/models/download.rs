/// A per-day download count for one version. The store guarantees at most
/// one record per `(version_id, date)` pair.
#[derive(Debug, Clone)]
pub struct VersionDownload {
    pub id: i32,
    pub version_id: i32,
    pub date: String,
    pub downloads: i32,
}
