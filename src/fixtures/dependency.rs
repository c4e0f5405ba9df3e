use crate::models::{Dependency, DependencyKind};

use super::FixtureStore;

/// Requirement default sequence, cycled over the global dependency index.
const REQS: &[&str] = &["^0.1.0", "^2.1.3", "0.3.7"];

const KINDS: &[DependencyKind] = &[
    DependencyKind::Dev,
    DependencyKind::Normal,
    DependencyKind::Normal,
];

/// Builder for dependency records: a version of some crate depending on a
/// target crate, referenced by name. The parent version must exist; the
/// target crate does not have to.
#[derive(Debug)]
pub struct DependencyBuilder {
    version_id: i32,
    crate_name: String,
    req: Option<String>,
    kind: Option<DependencyKind>,
    optional: bool,
    default_features: bool,
    features: Vec<String>,
    target: Option<String>,
}

impl DependencyBuilder {
    pub fn new(version_id: i32, crate_name: impl Into<String>) -> Self {
        DependencyBuilder {
            version_id,
            crate_name: crate_name.into(),
            req: None,
            kind: None,
            optional: true,
            default_features: false,
            features: Vec::new(),
            target: None,
        }
    }

    pub fn req(mut self, req: impl Into<String>) -> Self {
        self.req = Some(req.into());
        self
    }

    pub fn kind(mut self, kind: DependencyKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn default_features(mut self, default_features: bool) -> Self {
        self.default_features = default_features;
        self
    }

    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn build(self, store: &mut FixtureStore) -> Dependency {
        assert!(
            store.version(self.version_id).is_some(),
            "fixture dependency references missing version id {}",
            self.version_id,
        );

        let i = store.dependencies.len();
        let dependency = Dependency {
            id: i as i32 + 1,
            version_id: self.version_id,
            crate_name: self.crate_name,
            req: self
                .req
                .unwrap_or_else(|| REQS[i % REQS.len()].to_string()),
            optional: self.optional,
            default_features: self.default_features,
            features: self.features,
            target: self.target,
            kind: self.kind.unwrap_or(KINDS[i % KINDS.len()]),
        };
        store.dependencies.push(dependency.clone());
        dependency
    }
}
