//! Filter / paginate / mutate model behind the admin data grid.
//!
//! `GridState` holds everything the user controls (filters and page). The
//! rows on screen are always recomputed from the full record set through
//! `GridState::project`; nothing here mutates the records themselves.

pub mod actions;
pub mod filter;
pub mod inflight;
pub mod pagination;
pub mod record;

use num_format::{Locale, ToFormattedString};

use filter::{FilterState, FilterValue};
use pagination::Pagination;
use record::GridRecord;

/// Rows per page in every admin table.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    filters: FilterState,
    pagination: Pagination,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl GridState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: FilterState::default(),
            pagination: Pagination::new(page_size),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Updates the search text and returns to page 1.
    pub fn set_search(&mut self, query: impl Into<String>) -> bool {
        let changed = self.filters.set_search(query);
        self.pagination.reset() || changed
    }

    /// Updates one field filter and returns to page 1.
    pub fn set_filter(&mut self, key: &'static str, value: Option<FilterValue>) -> bool {
        let changed = self.filters.set(key, value);
        self.pagination.reset() || changed
    }

    pub fn reset_filters(&mut self) -> bool {
        let changed = self.filters.clear();
        self.pagination.reset() || changed
    }

    pub fn go_to_page(&mut self, page: usize, filtered_rows: usize) -> bool {
        self.pagination.go_to(page, filtered_rows)
    }

    /// Keeps the stored page valid after the record set changed.
    pub fn clamp_to<R: GridRecord>(&mut self, records: &[R]) -> bool {
        let filtered = filter::apply(records, &self.filters).len();
        self.pagination.clamp(filtered)
    }

    /// The visible page for `records` under the current state.
    pub fn project<'a, R: GridRecord>(&self, records: &'a [R]) -> GridPage<'a, R> {
        let filtered = filter::apply(records, &self.filters);
        let filtered_count = filtered.len();
        let rows = self.pagination.slice(&filtered).to_vec();

        GridPage {
            rows,
            total: records.len(),
            filtered: filtered_count,
            page: self.pagination.effective_page(filtered_count),
            total_pages: self.pagination.total_pages(filtered_count),
            has_prev: self.pagination.has_prev(filtered_count),
            has_next: self.pagination.has_next(filtered_count),
            show_pagination: self.pagination.is_visible(filtered_count),
            window: self.pagination.window(filtered_count),
            row_range: self.pagination.row_range(filtered_count),
        }
    }
}

/// One rendered page of the grid.
#[derive(Debug, PartialEq)]
pub struct GridPage<'a, R> {
    pub rows: Vec<&'a R>,
    pub total: usize,
    pub filtered: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub show_pagination: bool,
    pub window: Vec<Option<usize>>,
    pub row_range: Option<(usize, usize)>,
}

impl<R> GridPage<'_, R> {
    /// Placeholder row for a page without rows, `None` when there are rows.
    ///
    /// A failed first load is reported as such rather than as an empty
    /// collection.
    pub fn empty_message(&self, loading: bool, load_failed: bool, noun_plural: &str) -> Option<String> {
        if !self.rows.is_empty() {
            return None;
        }
        let message = if self.total > 0 {
            format!("No {} match the current filters.", noun_plural)
        } else if loading {
            format!("Loading {}…", noun_plural)
        } else if load_failed {
            format!("Could not load {}.", noun_plural)
        } else {
            format!("No {} yet.", noun_plural)
        };
        Some(message)
    }
}

/// "1,204 subscribers" or "3 of 1,204 subscribers" when filtered.
pub fn count_label(filtered: usize, total: usize, noun_plural: &str) -> String {
    let total_text = total.to_formatted_string(&Locale::en);
    if filtered == total {
        format!("{} {}", total_text, noun_plural)
    } else {
        format!(
            "{} of {} {}",
            filtered.to_formatted_string(&Locale::en),
            total_text,
            noun_plural
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_uses_thousands_separators() {
        assert_eq!(count_label(1204, 1204, "subscribers"), "1,204 subscribers");
        assert_eq!(count_label(3, 1204, "subscribers"), "3 of 1,204 subscribers");
    }

    #[test]
    fn failed_first_load_is_not_reported_as_empty() {
        let records: Vec<crate::model::subscriber::NewsletterSubscriber> = Vec::new();
        let page = GridState::default().project(&records);
        assert_eq!(
            page.empty_message(false, true, "subscribers").as_deref(),
            Some("Could not load subscribers.")
        );
        assert_eq!(
            page.empty_message(false, false, "subscribers").as_deref(),
            Some("No subscribers yet.")
        );
        assert_eq!(
            page.empty_message(true, false, "subscribers").as_deref(),
            Some("Loading subscribers…")
        );
    }
}
