use std::collections::BTreeMap;

use super::record::GridRecord;

/// Value held by one per-field filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Substring match (text fields and choice fields).
    Text(String),
    /// Exact match on a boolean field.
    Flag(bool),
}

impl FilterValue {
    fn is_blank(&self) -> bool {
        matches!(self, FilterValue::Text(text) if text.trim().is_empty())
    }
}

/// Global search text plus per-field filters. All active parts are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    fields: BTreeMap<&'static str, FilterValue>,
}

impl FilterState {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.fields.get(key)
    }

    /// Replaces the search text. Returns `true` when it changed.
    pub fn set_search(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if self.search == query {
            return false;
        }
        self.search = query;
        true
    }

    /// Sets or clears (`None` / blank text) the filter on `key`.
    /// Returns `true` when the stored state changed.
    pub fn set(&mut self, key: &'static str, value: Option<FilterValue>) -> bool {
        match value.filter(|value| !value.is_blank()) {
            Some(value) => self.fields.insert(key, value.clone()) != Some(value),
            None => self.fields.remove(key).is_some(),
        }
    }

    pub fn clear(&mut self) -> bool {
        let had_any = !self.is_empty();
        self.search.clear();
        self.fields.clear();
        had_any
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.fields.is_empty()
    }

    pub fn matches<R: GridRecord>(&self, record: &R) -> bool {
        let query = self.search.trim();
        if !query.is_empty()
            && !record
                .search_haystack()
                .iter()
                .any(|field| contains_ignore_case(field, query))
        {
            return false;
        }

        self.fields.iter().all(|(key, value)| match value {
            FilterValue::Text(needle) => record
                .text_field(key)
                .is_some_and(|field| contains_ignore_case(&field, needle.trim())),
            FilterValue::Flag(expected) => record.flag_field(key) == Some(*expected),
        })
    }
}

/// The subset of `records` that passes every active filter, in input order.
pub fn apply<'a, R: GridRecord>(records: &'a [R], filters: &FilterState) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| filters.matches(*record))
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::subscriber::NewsletterSubscriber;
    use crate::model::RecordId;

    fn subscriber(id: u32, email: &str, active: bool) -> NewsletterSubscriber {
        NewsletterSubscriber {
            id: RecordId::new(id.to_string()),
            email: email.to_string(),
            name: None,
            is_active: active,
            source: None,
            subscribed_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = vec![
            subscriber(1, "Jane@Example.com", true),
            subscriber(2, "bob@example.com", true),
        ];
        let mut filters = FilterState::default();
        filters.set_search("JANE");
        let hits = apply(&records, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "1");
    }

    #[test]
    fn filters_are_combined_with_and() {
        let records = vec![
            subscriber(1, "test1@example.com", true),
            subscriber(2, "test2@example.com", false),
            subscriber(3, "other@example.com", false),
        ];
        let mut filters = FilterState::default();
        filters.set("email", Some(FilterValue::Text("test".into())));
        filters.set("status", Some(FilterValue::Flag(false)));
        let ids: Vec<_> = apply(&records, &filters)
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn blank_text_clears_the_filter() {
        let mut filters = FilterState::default();
        assert!(filters.set("email", Some(FilterValue::Text("a".into()))));
        assert!(!filters.set("email", Some(FilterValue::Text("a".into()))));
        assert!(filters.set("email", Some(FilterValue::Text("  ".into()))));
        assert!(filters.get("email").is_none());
        assert!(filters.is_empty());
    }

    #[test]
    fn missing_field_never_matches_a_text_filter() {
        let records = vec![subscriber(1, "a@example.com", true)];
        let mut filters = FilterState::default();
        filters.set("source", Some(FilterValue::Text("blog".into())));
        assert!(apply(&records, &filters).is_empty());
    }
}
