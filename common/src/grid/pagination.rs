//! Client-side pagination over an already filtered slice.
//!
//! Pages are 1-based. The total page count is always derived from the number
//! of filtered rows, never stored.

/// Current page and fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `0` when there are no rows.
    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size)
    }

    /// Controls are only shown when there is more than one page.
    pub fn is_visible(&self, total_rows: usize) -> bool {
        self.total_pages(total_rows) > 1
    }

    /// The page actually displayed for `total_rows`: the stored page clamped
    /// into `1..=total_pages`.
    pub fn effective_page(&self, total_rows: usize) -> usize {
        self.page.clamp(1, self.total_pages(total_rows).max(1))
    }

    pub fn has_prev(&self, total_rows: usize) -> bool {
        self.effective_page(total_rows) > 1
    }

    pub fn has_next(&self, total_rows: usize) -> bool {
        self.effective_page(total_rows) < self.total_pages(total_rows)
    }

    pub fn reset(&mut self) -> bool {
        let changed = self.page != 1;
        self.page = 1;
        changed
    }

    /// Moves to `page`, clamped to the valid range. Returns `true` on change.
    pub fn go_to(&mut self, page: usize, total_rows: usize) -> bool {
        let target = page.clamp(1, self.total_pages(total_rows).max(1));
        let changed = self.page != target;
        self.page = target;
        changed
    }

    /// Pulls the stored page back inside the range after the row count shrank.
    pub fn clamp(&mut self, total_rows: usize) -> bool {
        let page = self.effective_page(total_rows);
        self.go_to(page, total_rows)
    }

    /// Rows of the effective page.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.effective_page(rows.len()) - 1) * self.page_size;
        let end = (start + self.page_size).min(rows.len());
        &rows[start.min(rows.len())..end]
    }

    /// 1-based inclusive range of the rows on the effective page, `None` when
    /// there are no rows.
    pub fn row_range(&self, total_rows: usize) -> Option<(usize, usize)> {
        if total_rows == 0 {
            return None;
        }
        let start = (self.effective_page(total_rows) - 1) * self.page_size;
        Some((start + 1, (start + self.page_size).min(total_rows)))
    }

    /// Page numbers to render, `None` marking an elided gap.
    pub fn window(&self, total_rows: usize) -> Vec<Option<usize>> {
        page_window(
            self.total_pages(total_rows),
            self.effective_page(total_rows),
            1,
            2,
            2,
            1,
        )
    }
}

fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(3), 1);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(11), 2);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let rows: Vec<u32> = (1..=23).collect();
        let mut pagination = Pagination::new(10);
        assert!(pagination.go_to(3, rows.len()));
        assert_eq!(pagination.slice(&rows), &[21, 22, 23]);
        assert_eq!(pagination.row_range(rows.len()), Some((21, 23)));
        assert!(!pagination.has_next(rows.len()));
        assert!(pagination.has_prev(rows.len()));
    }

    #[test]
    fn go_to_is_clamped() {
        let mut pagination = Pagination::new(10);
        pagination.go_to(99, 25);
        assert_eq!(pagination.page(), 3);
        pagination.go_to(0, 25);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn shrinking_row_count_clamps_the_page() {
        let mut pagination = Pagination::new(10);
        pagination.go_to(3, 30);
        assert_eq!(pagination.effective_page(12), 2);
        assert!(pagination.clamp(12));
        assert_eq!(pagination.page(), 2);
    }

    #[test]
    fn empty_rows_slice_to_nothing() {
        let rows: Vec<u32> = Vec::new();
        let pagination = Pagination::new(10);
        assert!(pagination.slice(&rows).is_empty());
        assert_eq!(pagination.row_range(0), None);
        assert!(!pagination.is_visible(0));
        assert!(pagination.window(0).is_empty());
    }

    #[test]
    fn window_elides_distant_pages() {
        let mut pagination = Pagination::new(10);
        pagination.go_to(10, 200);
        assert_eq!(
            pagination.window(200),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn window_lists_every_page_when_short() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.window(35), vec![Some(1), Some(2), Some(3), Some(4)]);
    }
}
