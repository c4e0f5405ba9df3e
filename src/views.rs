//! JSON projections of fixture records.
//!
//! The shapes mirror the public API serializers, including their quirks:
//! version and dependency ids (and the crate's `versions` id list) are
//! serialized as strings, while user and team ids stay numeric. `links`
//! objects are derived from the crate name and version number on every
//! request.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::fixtures::FixtureStore;
use crate::models::{
    Category, Crate, CrateOwnership, Dependency, DependencyKind, Keyword, Team, User, Version,
    VersionDownload,
};
use crate::util::rfc3339;

#[derive(Serialize, Debug)]
pub struct EncodableBadge {
    pub badge_type: String,
    pub attributes: HashMap<String, Option<String>>,
}

#[derive(Serialize, Debug)]
pub struct EncodableCrate {
    pub id: String,
    pub name: String,
    #[serde(with = "rfc3339")]
    pub updated_at: DateTime<Utc>,
    pub versions: Vec<String>,
    pub keywords: Vec<String>,
    pub categories: Vec<String>,
    pub badges: Vec<EncodableBadge>,
    #[serde(with = "rfc3339")]
    pub created_at: DateTime<Utc>,
    pub downloads: i32,
    pub max_version: String,
    pub max_stable_version: Option<String>,
    pub newest_version: String,
    pub description: String,
    pub homepage: Option<String>,
    pub documentation: Option<String>,
    pub repository: Option<String>,
    pub links: EncodableCrateLinks,
}

#[derive(Serialize, Debug)]
pub struct EncodableCrateLinks {
    pub version_downloads: String,
    pub versions: String,
    pub owner_user: String,
    pub owner_team: String,
    pub reverse_dependencies: String,
}

impl EncodableCrate {
    pub fn from_fixture(krate: &Crate, store: &FixtureStore) -> Self {
        let versions = store.versions_of(krate.id);
        let name = &krate.name;

        EncodableCrate {
            id: name.clone(),
            name: name.clone(),
            updated_at: krate.updated_at,
            versions: versions.iter().map(|v| v.id.to_string()).collect(),
            keywords: krate
                .keyword_ids
                .iter()
                .filter_map(|id| store.keyword(*id))
                .map(keyword_id)
                .collect(),
            categories: krate
                .category_ids
                .iter()
                .filter_map(|id| store.category(*id))
                .map(|c| c.slug.clone())
                .collect(),
            badges: Vec::new(),
            created_at: krate.created_at,
            downloads: krate.downloads,
            max_version: krate.max_version(&versions),
            max_stable_version: krate.max_stable_version(&versions),
            newest_version: krate.newest_version(&versions),
            description: krate.description.clone(),
            homepage: krate.homepage.clone(),
            documentation: krate.documentation.clone(),
            repository: krate.repository.clone(),
            links: EncodableCrateLinks {
                version_downloads: format!("/api/v1/crates/{name}/downloads"),
                versions: format!("/api/v1/crates/{name}/versions"),
                owner_user: format!("/api/v1/crates/{name}/owner_user"),
                owner_team: format!("/api/v1/crates/{name}/owner_team"),
                reverse_dependencies: format!("/api/v1/crates/{name}/reverse_dependencies"),
            },
        }
    }
}

#[derive(Serialize, Debug)]
pub struct EncodableVersion {
    pub id: String,
    #[serde(rename = "crate")]
    pub krate: String,
    pub num: String,
    pub dl_path: String,
    #[serde(with = "rfc3339")]
    pub updated_at: DateTime<Utc>,
    #[serde(with = "rfc3339")]
    pub created_at: DateTime<Utc>,
    pub downloads: i32,
    pub yanked: bool,
    pub license: Option<String>,
    pub links: EncodableVersionLinks,
    pub crate_size: i32,
    pub published_by: Option<EncodablePublicUser>,
}

#[derive(Serialize, Debug)]
pub struct EncodableVersionLinks {
    pub dependencies: String,
    pub version_downloads: String,
    pub authors: String,
}

impl EncodableVersion {
    pub fn from_fixture(version: &Version, crate_name: &str, store: &FixtureStore) -> Self {
        let num = &version.num;
        let published_by = version
            .published_by
            .and_then(|id| store.user(id))
            .map(EncodablePublicUser::from_fixture);

        EncodableVersion {
            id: version.id.to_string(),
            krate: crate_name.to_string(),
            num: num.clone(),
            dl_path: format!("/api/v1/crates/{crate_name}/{num}/download"),
            updated_at: version.updated_at,
            created_at: version.created_at,
            downloads: version.downloads,
            yanked: version.yanked,
            license: version.license.clone(),
            links: EncodableVersionLinks {
                dependencies: format!("/api/v1/crates/{crate_name}/{num}/dependencies"),
                version_downloads: format!("/api/v1/crates/{crate_name}/{num}/downloads"),
                authors: format!("/api/v1/crates/{crate_name}/{num}/authors"),
            },
            crate_size: version.crate_size,
            published_by,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct EncodableDependency {
    pub id: String,
    pub version_id: String,
    pub crate_id: String,
    pub req: String,
    pub optional: bool,
    pub default_features: bool,
    pub features: Vec<String>,
    pub target: Option<String>,
    pub kind: DependencyKind,
}

impl EncodableDependency {
    pub fn from_fixture(dependency: &Dependency) -> Self {
        EncodableDependency {
            id: dependency.id.to_string(),
            version_id: dependency.version_id.to_string(),
            crate_id: dependency.crate_name.clone(),
            req: dependency.req.clone(),
            optional: dependency.optional,
            default_features: dependency.default_features,
            features: dependency.features.clone(),
            target: dependency.target.clone(),
            kind: dependency.kind,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct EncodableVersionDownload {
    pub version: String,
    pub downloads: i32,
    pub date: String,
}

impl EncodableVersionDownload {
    pub fn from_fixture(download: &VersionDownload) -> Self {
        EncodableVersionDownload {
            version: download.version_id.to_string(),
            downloads: download.downloads,
            date: download.date.clone(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct EncodablePublicUser {
    pub id: i32,
    pub login: String,
    pub name: String,
    pub avatar: String,
    pub url: String,
}

impl EncodablePublicUser {
    pub fn from_fixture(user: &User) -> Self {
        EncodablePublicUser {
            id: user.id,
            login: user.login.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            url: user.url.clone(),
        }
    }
}

/// Owner representation shared by the `owner_user` and `owner_team`
/// endpoints; `kind` distinguishes the two.
#[derive(Serialize, Debug)]
pub struct EncodableOwner {
    pub id: i32,
    pub login: String,
    pub kind: String,
    pub name: String,
    pub avatar: String,
    pub url: String,
}

impl EncodableOwner {
    pub fn from_user(user: &User) -> Self {
        EncodableOwner {
            id: user.id,
            login: user.login.clone(),
            kind: "user".to_string(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            url: user.url.clone(),
        }
    }

    pub fn from_team(team: &Team) -> Self {
        EncodableOwner {
            id: team.id,
            login: team.login.clone(),
            kind: "team".to_string(),
            name: team.name.clone(),
            avatar: team.avatar.clone(),
            url: team.url.clone(),
        }
    }

    pub fn from_ownership(ownership: &CrateOwnership, store: &FixtureStore) -> Option<Self> {
        match (ownership.user_id, ownership.team_id) {
            (Some(user_id), _) => store.user(user_id).map(Self::from_user),
            (None, Some(team_id)) => store.team(team_id).map(Self::from_team),
            (None, None) => None,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct EncodableCategory {
    pub id: String,
    pub category: String,
    pub slug: String,
    pub description: String,
    #[serde(with = "rfc3339")]
    pub created_at: DateTime<Utc>,
    pub crates_cnt: i32,
}

impl EncodableCategory {
    pub fn from_fixture(category: &Category, store: &FixtureStore) -> Self {
        EncodableCategory {
            id: category.slug.clone(),
            category: category.category.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
            created_at: category.created_at,
            crates_cnt: store.category_crates_cnt(category.id),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct EncodableKeyword {
    pub id: String,
    pub keyword: String,
    pub crates_cnt: i32,
}

impl EncodableKeyword {
    pub fn from_fixture(keyword: &Keyword, store: &FixtureStore) -> Self {
        EncodableKeyword {
            id: keyword_id(keyword),
            keyword: keyword.keyword.clone(),
            crates_cnt: store.keyword_crates_cnt(keyword.id),
        }
    }
}

fn keyword_id(keyword: &Keyword) -> String {
    crate::util::dasherize(&keyword.keyword)
}
