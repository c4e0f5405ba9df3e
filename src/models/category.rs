use chrono::{DateTime, Utc};

/// A browsing category. The public identifier is the slug; `crates_cnt`
/// is computed at read time from the crates linking to the category.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i32,
    pub category: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
