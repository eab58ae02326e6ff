use std::cmp::Ordering;

use crate::models::token::{SortOrder, TokenRecord};

/// Default number of records retained
pub const DEFAULT_CAPACITY: usize = 512;

/// State transitions applied to the store
#[derive(Debug)]
pub enum StoreEvent {
    /// A token announced on the launch feed
    Listed(TokenRecord),
    /// A token created through the local wallet
    Created(TokenRecord),
}

/// Display view parameters: name search plus sort mode
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: String,
    pub sort: SortOrder,
}

/// In-memory backing store for the token list
///
/// Insertion order is newest-first by construction and independent of the
/// display sort. Repeated feed ids stay as separate entries. The record
/// count is bounded: past `capacity`, the oldest entries drop.
pub struct TokenStore {
    records: Vec<TokenRecord>,
    capacity: usize,
}

impl TokenStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Apply one state transition
    pub fn apply(&mut self, event: StoreEvent) {
        let record = match event {
            StoreEvent::Listed(record) | StoreEvent::Created(record) => record,
        };
        self.records.insert(0, record);
        self.records.truncate(self.capacity);
    }

    /// Raw records in insertion order (newest first)
    pub fn records(&self) -> &[TokenRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive the rendered list: filter by name substring, then sort
    ///
    /// Pure with respect to the backing store; recomputed on every call.
    /// An empty search term matches everything.
    pub fn view(&self, query: &ListQuery) -> Vec<TokenRecord> {
        let needle = query.search.to_lowercase();
        let mut view: Vec<TokenRecord> = self
            .records
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        match query.sort {
            SortOrder::Newest => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::HighestValue => {
                view.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
            }
            SortOrder::LowestValue => {
                view.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal))
            }
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn record(name: &str, value: f64, age_secs: i64) -> TokenRecord {
        TokenRecord {
            id: format!("mint-{}", name),
            name: name.to_string(),
            symbol: name.to_uppercase(),
            description: "test".to_string(),
            image_url: String::new(),
            value,
            change: "0".to_string(),
            created_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    fn store_with(records: Vec<TokenRecord>) -> TokenStore {
        let mut store = TokenStore::new(DEFAULT_CAPACITY);
        for r in records {
            store.apply(StoreEvent::Listed(r));
        }
        store
    }

    #[test]
    fn filter_matches_name_substring_case_insensitively() {
        let store = store_with(vec![
            record("Alpha", 1.0, 30),
            record("alphabet", 2.0, 20),
            record("Beta", 3.0, 10),
        ]);

        let view = store.view(&ListQuery {
            search: "ALPHA".to_string(),
            sort: SortOrder::Newest,
        });
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alphabet", "Alpha"]);
    }

    #[test]
    fn empty_search_matches_all() {
        let store = store_with(vec![
            record("Alpha", 1.0, 30),
            record("Beta", 2.0, 20),
            record("Gamma", 3.0, 10),
        ]);

        assert_eq!(store.view(&ListQuery::default()).len(), 3);
    }

    #[test]
    fn highest_value_sort_is_non_increasing() {
        let store = store_with(vec![
            record("A", 5.0, 40),
            record("B", 1.0, 30),
            record("C", 9.0, 20),
            record("D", 9.0, 10),
        ]);

        let view = store.view(&ListQuery {
            search: String::new(),
            sort: SortOrder::HighestValue,
        });
        assert!(view.windows(2).all(|pair| pair[0].value >= pair[1].value));
    }

    #[test]
    fn lowest_value_sort_is_non_decreasing() {
        let store = store_with(vec![
            record("A", 5.0, 40),
            record("B", 1.0, 30),
            record("C", 9.0, 20),
        ]);

        let view = store.view(&ListQuery {
            search: String::new(),
            sort: SortOrder::LowestValue,
        });
        assert!(view.windows(2).all(|pair| pair[0].value <= pair[1].value));
    }

    #[test]
    fn newest_sort_orders_by_created_at_descending() {
        let store = store_with(vec![
            record("Old", 1.0, 300),
            record("New", 2.0, 10),
            record("Middle", 3.0, 100),
        ]);

        let view = store.view(&ListQuery::default());
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["New", "Middle", "Old"]);
        assert!(view.windows(2).all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[test]
    fn apply_prepends_newest_first() {
        let mut store = TokenStore::new(DEFAULT_CAPACITY);
        store.apply(StoreEvent::Listed(record("First", 0.0, 20)));
        store.apply(StoreEvent::Created(record("Second", 0.0, 10)));

        assert_eq!(store.records()[0].name, "Second");
        assert_eq!(store.records()[1].name, "First");
    }

    #[test]
    fn capacity_drops_the_oldest_records() {
        let mut store = TokenStore::new(2);
        store.apply(StoreEvent::Listed(record("A", 0.0, 30)));
        store.apply(StoreEvent::Listed(record("B", 0.0, 20)));
        store.apply(StoreEvent::Listed(record("C", 0.0, 10)));

        assert_eq!(store.len(), 2);
        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
    }

    #[test]
    fn duplicate_ids_are_kept_as_separate_entries() {
        let mut store = TokenStore::new(DEFAULT_CAPACITY);
        let mut duplicate = record("Dup", 0.0, 20);
        duplicate.id = "same-id".to_string();
        store.apply(StoreEvent::Listed(duplicate.clone()));
        store.apply(StoreEvent::Listed(duplicate));

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].id, store.records()[1].id);
    }

    #[test]
    fn view_never_mutates_the_backing_store() {
        let store = store_with(vec![
            record("A", 5.0, 30),
            record("B", 1.0, 20),
            record("C", 9.0, 10),
        ]);

        let before: Vec<String> = store.records().iter().map(|r| r.name.clone()).collect();
        let _ = store.view(&ListQuery {
            search: String::new(),
            sort: SortOrder::HighestValue,
        });
        let after: Vec<String> = store.records().iter().map(|r| r.name.clone()).collect();
        assert_eq!(before, after);
    }
}
