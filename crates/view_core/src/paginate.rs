use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page cursor over the ordered working subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current: usize,
    pub size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(size: usize) -> Self {
        Self {
            current: 1,
            size: size.max(1),
        }
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Advances unless already on the last page. Returns whether it moved.
    pub fn next(&mut self, total_pages: usize) -> bool {
        let target = (self.current + 1).min(total_pages.max(1));
        let moved = target != self.current;
        self.current = target;
        moved
    }

    /// Steps back unless already on page 1. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        let target = self.current.saturating_sub(1).max(1);
        let moved = target != self.current;
        self.current = target;
        moved
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.size)
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// The `[(current-1)*size, current*size)` window of `items`, cut short at the end.
pub fn page_slice<'a, T>(items: &'a [T], page: &PageState) -> &'a [T] {
    let start = (page.current.max(1) - 1)
        .saturating_mul(page.size)
        .min(items.len());
    let end = start.saturating_add(page.size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
#[path = "tests/paginate_tests.rs"]
mod tests;
