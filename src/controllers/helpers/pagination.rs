use serde::Deserialize;

use crate::util::errors::{AppResult, bad_request};

/// Raw `page`/`per_page` query parameters, validated by
/// [`PaginationOptions::new`]. Kept as strings so that parse failures turn
/// into a 400 with the parser's message rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQueryParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct PaginationOptions {
    page: u32,
    pub per_page: u32,
}

impl PaginationOptions {
    pub fn new(params: &PaginationQueryParams) -> AppResult<Self> {
        const DEFAULT_PER_PAGE: u32 = 10;
        const MAX_PER_PAGE: u32 = 100;

        let page = match params.page.as_deref() {
            Some(s) => {
                let numeric_page: u32 = s.parse().map_err(|e| bad_request(&e))?;
                if numeric_page < 1 {
                    return Err(bad_request(&format_args!(
                        "page indexing starts from 1, page {numeric_page} is invalid",
                    )));
                }
                numeric_page
            }
            None => 1,
        };

        let per_page = match params.per_page.as_deref() {
            Some(s) => s.parse().map_err(|e| bad_request(&e))?,
            None => DEFAULT_PER_PAGE,
        };

        if per_page > MAX_PER_PAGE {
            return Err(bad_request(&format_args!(
                "cannot request more than {MAX_PER_PAGE} items",
            )));
        }

        Ok(Self { page, per_page })
    }

    pub fn offset(&self) -> usize {
        ((self.page - 1) * self.per_page) as usize
    }
}

/// A page window over an already-filtered record list, plus the total
/// match count from before the window was applied.
#[derive(Debug)]
pub struct Paginated<T> {
    records: Vec<T>,
    total: usize,
}

impl<T> Paginated<T> {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

pub trait Paginate<T>: Sized {
    fn paginate(self, options: &PaginationOptions) -> Paginated<T>;
}

impl<T> Paginate<T> for Vec<T> {
    fn paginate(self, options: &PaginationOptions) -> Paginated<T> {
        let total = self.len();
        let records = self
            .into_iter()
            .skip(options.offset())
            .take(options.per_page as usize)
            .collect();
        Paginated { records, total }
    }
}
