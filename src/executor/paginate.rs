/// Page index plus page size (LIMIT / OFFSET in page units).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Slice `[page*size, page*size+size)`; past the end gives an empty page.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        if self.page_size == 0 {
            return Vec::new();
        }
        items
            .into_iter()
            .skip(self.offset())
            .take(self.page_size)
            .collect()
    }
}

/// Number of pages needed for `total` items; zero items need zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Highest page index that still shows something
pub fn last_page(total: usize, page_size: usize) -> usize {
    page_count(total, page_size).saturating_sub(1)
}
