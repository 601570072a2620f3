//! In-memory query cache keyed by request path.
//!
//! Bodies are stored as raw JSON text so one cache serves every record
//! type. Timestamps are milliseconds (the browser's `Date.now()`).

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    body: String,
    stored_at: f64,
}

/// Result of looking a key up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Young enough to use without a request.
    Fresh(&'a str),
    /// Usable for an immediate render, but should be revalidated.
    Stale(&'a str),
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryCache {
    entries: HashMap<String, Entry>,
    stale_after_ms: f64,
}

impl QueryCache {
    pub fn new(stale_after_ms: f64) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after_ms,
        }
    }

    pub fn lookup(&self, key: &str, now_ms: f64) -> Lookup<'_> {
        match self.entries.get(key) {
            Some(entry) if now_ms - entry.stored_at < self.stale_after_ms => {
                Lookup::Fresh(&entry.body)
            }
            Some(entry) => Lookup::Stale(&entry.body),
            None => Lookup::Missing,
        }
    }

    pub fn store(&mut self, key: impl Into<String>, body: impl Into<String>, now_ms: f64) {
        self.entries.insert(
            key.into(),
            Entry {
                body: body.into(),
                stored_at: now_ms,
            },
        );
    }

    /// Forces the next lookup of `key` to be `Stale`, keeping the body so
    /// the view does not flash empty while refetching.
    pub fn invalidate(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stored_at = f64::NEG_INFINITY;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Numbers overlapping fetches of one query so that only the response of
/// the most recently started fetch is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchGeneration(u64);

impl FetchGeneration {
    /// Starts a fetch. Every earlier ticket stops being current.
    pub fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_go_stale_after_the_configured_age() {
        let mut cache = QueryCache::new(1_000.0);
        cache.store("/admin/newsletter", "[]", 5_000.0);
        assert_eq!(cache.lookup("/admin/newsletter", 5_500.0), Lookup::Fresh("[]"));
        assert_eq!(cache.lookup("/admin/newsletter", 6_000.0), Lookup::Stale("[]"));
        assert_eq!(cache.lookup("/auth/me", 5_500.0), Lookup::Missing);
    }

    #[test]
    fn invalidate_keeps_body_but_marks_stale() {
        let mut cache = QueryCache::new(60_000.0);
        cache.store("k", "[1]", 0.0);
        cache.invalidate("k");
        assert_eq!(cache.lookup("k", 1.0), Lookup::Stale("[1]"));
    }

    #[test]
    fn clear_drops_everything() {
        let mut cache = QueryCache::new(60_000.0);
        cache.store("a", "1", 0.0);
        cache.store("b", "2", 0.0);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn only_the_latest_fetch_is_current() {
        let mut generation = FetchGeneration::default();
        let revalidate = generation.next();
        let after_delete = generation.next();
        // The older response arrives last and must be ignored.
        assert!(generation.is_current(after_delete));
        assert!(!generation.is_current(revalidate));
    }
}
