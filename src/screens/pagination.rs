use serde::{Deserialize, Serialize};

pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Client-side paging over rows already held by a list screen. Never triggers a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1))
    }

    /// Rows of the current page; empty when the index is past the end
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let size = self.page_size.max(1);
        let start = self.page_index.saturating_mul(size).min(rows.len());
        let end = start.saturating_add(size).min(rows.len());
        &rows[start..end]
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    pub fn go_to(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Pull the index back inside the data after the row set shrank
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page_index = self.page_index.min(last);
    }
}
