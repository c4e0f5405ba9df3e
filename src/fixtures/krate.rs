use crate::models::{Category, Crate, Keyword};

use super::{FixtureStore, default_created_at, default_updated_at};

/// Builder for crate records.
///
/// Without a name the crate is called `crate-{id}`; the default description
/// embeds the final name.
#[derive(Debug, Default)]
pub struct CrateBuilder {
    name: Option<String>,
    description: Option<String>,
    homepage: Option<String>,
    documentation: Option<String>,
    repository: Option<String>,
    downloads: i32,
    category_ids: Vec<i32>,
    keyword_ids: Vec<i32>,
}

impl CrateBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        CrateBuilder {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn downloads(mut self, downloads: i32) -> Self {
        self.downloads = downloads;
        self
    }

    pub fn category(mut self, category: &Category) -> Self {
        self.category_ids.push(category.id);
        self
    }

    pub fn keyword(mut self, keyword: &Keyword) -> Self {
        self.keyword_ids.push(keyword.id);
        self
    }

    pub fn build(self, store: &mut FixtureStore) -> Crate {
        let id = store.crates.len() as i32 + 1;
        let name = self.name.unwrap_or_else(|| format!("crate-{id}"));
        assert!(
            store.crate_by_name(&name).is_none(),
            "fixture crate `{name}` already exists",
        );

        let description = self
            .description
            .unwrap_or_else(|| format!("This is the description for the crate called \"{name}\""));

        let krate = Crate {
            id,
            name,
            description,
            homepage: self.homepage,
            documentation: self.documentation,
            repository: self.repository,
            downloads: self.downloads,
            category_ids: self.category_ids,
            keyword_ids: self.keyword_ids,
            created_at: default_created_at(),
            updated_at: default_updated_at(),
        };
        store.crates.push(krate.clone());
        krate
    }
}
