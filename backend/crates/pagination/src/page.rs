//! Result envelope pairing one window of items with the total match count.

use serde::{Deserialize, Serialize};

/// One window of results plus the number of records matching the query.
///
/// `total` ignores pagination, so `items.len()` may be smaller than `total`
/// for every page but the last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
}

impl<T> Page<T> {
    /// Pair a window of items with the total match count.
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Items in this window.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total number of matching records across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Split the envelope into its items and total.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, u64) {
        (self.items, self.total)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn into_parts_returns_items_and_total() {
        let page = Page::new(vec!["a", "b"], 11);
        let (items, total) = page.into_parts();
        assert_eq!(items, vec!["a", "b"]);
        assert_eq!(total, 11);
    }

    #[rstest]
    fn serialises_items_and_total() {
        let page = Page::new(vec![1_u8], 3);
        let value = serde_json::to_value(&page).expect("serialise page");
        assert_eq!(value, serde_json::json!({ "items": [1], "total": 3 }));
    }
}
