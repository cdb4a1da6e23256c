//! Paginated list envelope shared by every list-shaped catalog endpoint.

use serde::{Deserialize, Serialize};

/// Types carrying the integer identity the aggregator de-duplicates on.
///
/// Fields other than the id may differ between pages for the same entity;
/// the first-seen copy wins.
pub trait Identified {
    /// Catalog identifier, unique within an entity kind.
    fn id(&self) -> u64;
}

/// One page of catalog results.
///
/// Immutable once received from the wire. `Page::default()` is the empty
/// page-0 state an aggregator starts from and resets to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page: 0,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

impl<T> Page<T> {
    /// Whether pages beyond `self.page` exist on the server.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::Movie;

    #[test]
    fn default_page_is_empty_page_zero() {
        let page = Page::<Movie>::default();
        assert_eq!(page.page, 0);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_results, 0);
        assert!(!page.has_more());
    }

    #[test]
    fn has_more_compares_page_against_total() {
        let page = Page::<Movie> {
            page: 2,
            results: Vec::new(),
            total_pages: 5,
            total_results: 100,
        };
        assert!(page.has_more());

        let last = Page::<Movie> { page: 5, ..page };
        assert!(!last.has_more());
    }

    #[test]
    fn missing_results_field_deserializes_as_empty() {
        let page: Page<Movie> =
            serde_json::from_str(r#"{"page":1,"total_pages":0,"total_results":0}"#).unwrap();
        assert!(page.is_empty());
    }
}
