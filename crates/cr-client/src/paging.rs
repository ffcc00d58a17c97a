//! Cursor paging shared by every list-shaped endpoint.
//!
//! The client holds no paging state: each page is an independent request,
//! and callers hand the cursors of one page back through [`PagedQuery`] to
//! fetch the next.

use serde::{Deserialize, Serialize};

use crate::query::{QueryField, QueryParams};

/// A page of results: `{items: [...], paging: {cursors: {before, after}}}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Page<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Cursors for the neighbouring pages.
    #[serde(default)]
    pub paging: Paging,
}

impl<T> Page<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor for the following page, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.paging.cursors.after.as_deref().filter(|c| !c.is_empty())
    }

    /// Cursor for the preceding page, if there is one.
    pub fn previous_cursor(&self) -> Option<&str> {
        self.paging.cursors.before.as_deref().filter(|c| !c.is_empty())
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Paging block of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Cursors,
}

/// Opaque continuation tokens. Either may be absent at the ends of a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Cursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// Paging parameters for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagedQuery {
    /// Maximum number of items to return.
    pub limit: Option<u32>,
    /// Return items after this cursor.
    pub after: Option<String>,
    /// Return items before this cursor.
    pub before: Option<String>,
}

impl PagedQuery {
    /// Query with no paging parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue after the given cursor.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Continue before the given cursor.
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Query for the page following `page`, or `None` on the last page.
    pub fn next_of<T>(&self, page: &Page<T>) -> Option<Self> {
        page.next_cursor().map(|cursor| Self {
            limit: self.limit,
            after: Some(cursor.to_string()),
            before: None,
        })
    }

    /// Append the guarded paging fields to `params`.
    pub fn apply(&self, params: QueryParams) -> QueryParams {
        params
            .number(QueryField::Limit, self.limit.map(i64::from))
            .text(QueryField::After, self.after.as_deref())
            .text(QueryField::Before, self.before.as_deref())
    }

    /// The guarded paging fields on their own.
    pub fn to_params(&self) -> QueryParams {
        self.apply(QueryParams::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_decodes_wire_shape() {
        let json = r#"{
            "items": [1, 2, 3],
            "paging": {"cursors": {"before": "b1", "after": "a1"}}
        }"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page.previous_cursor(), Some("b1"));
        assert_eq!(page.next_cursor(), Some("a1"));
    }

    #[test]
    fn test_page_without_paging_block() {
        let page: Page<u32> = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.paging, Paging::default());
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn test_empty_cursor_objects() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"items": [7], "paging": {"cursors": {}}}"#).unwrap();
        assert_eq!(page.next_cursor(), None);
        assert_eq!(page.previous_cursor(), None);
        assert_eq!(page.into_iter().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_paged_query_params() {
        let params = PagedQuery::new()
            .with_limit(25)
            .after("eyJwb3MiOjI1fQ")
            .to_params();
        assert_eq!(params.get(QueryField::Limit), Some("25"));
        assert_eq!(params.get(QueryField::After), Some("eyJwb3MiOjI1fQ"));
        assert_eq!(params.get(QueryField::Before), None);
    }

    #[test]
    fn test_zero_limit_is_omitted() {
        let params = PagedQuery::new().with_limit(0).to_params();
        assert!(params.is_empty());
    }

    #[test]
    fn test_next_of_uses_after_cursor() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"items": [1], "paging": {"cursors": {"before": "b", "after": "a"}}}"#,
        )
        .unwrap();

        let query = PagedQuery::new().with_limit(1).before("old");
        let next = query.next_of(&page).unwrap();
        assert_eq!(next.limit, Some(1));
        assert_eq!(next.after.as_deref(), Some("a"));
        assert_eq!(next.before, None);

        let last: Page<u32> = serde_json::from_str(r#"{"items": [1]}"#).unwrap();
        assert!(query.next_of(&last).is_none());
    }
}
