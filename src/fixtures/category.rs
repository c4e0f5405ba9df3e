use crate::models::{Category, Keyword};
use crate::util::dasherize;

use super::{FixtureStore, default_created_at};

/// Builder for category records. The slug is the dasherized name and also
/// serves as the public identifier.
#[derive(Debug)]
pub struct CategoryBuilder {
    category: String,
    description: Option<String>,
}

impl CategoryBuilder {
    pub fn new(category: impl Into<String>) -> Self {
        CategoryBuilder {
            category: category.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self, store: &mut FixtureStore) -> Category {
        let id = store.categories.len() as i32 + 1;
        let slug = dasherize(&self.category);
        let description = self.description.unwrap_or_else(|| {
            format!(
                "This is the description for the category called \"{}\"",
                self.category
            )
        });

        let category = Category {
            id,
            category: self.category,
            slug,
            description,
            created_at: default_created_at(),
        };
        store.categories.push(category.clone());
        category
    }
}

/// Builder for keyword records.
#[derive(Debug)]
pub struct KeywordBuilder {
    keyword: String,
}

impl KeywordBuilder {
    pub fn new(keyword: impl Into<String>) -> Self {
        KeywordBuilder {
            keyword: keyword.into(),
        }
    }

    pub fn build(self, store: &mut FixtureStore) -> Keyword {
        let keyword = Keyword {
            id: store.keywords.len() as i32 + 1,
            keyword: self.keyword,
        };
        store.keywords.push(keyword.clone());
        keyword
    }
}
