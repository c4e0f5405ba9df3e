use serde::Serialize;

/// A dependency declared by one version on another crate, referenced by
/// the target crate's name.
#[derive(Debug, Clone)]
pub struct Dependency {
    pub id: i32,
    pub version_id: i32,
    pub crate_name: String,
    pub req: String,
    pub optional: bool,
    pub default_features: bool,
    pub features: Vec<String>,
    pub target: Option<String>,
    pub kind: DependencyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Normal,
    Build,
    Dev,
}
