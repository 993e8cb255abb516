/// Page window over the public post listing (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Pagination {
    /// Posts shown per page on the public blog.
    pub const DEFAULT_PER_PAGE: u64 = 9;

    /// Build a window, clamping `page` and `per_page` to at least 1.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(page: u64) -> Self {
        Self::new(page, Self::DEFAULT_PER_PAGE)
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Whether another page exists after this one.
    pub fn has_more(&self, total: u64) -> bool {
        self.page.saturating_mul(self.per_page) < total
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::page(1)
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn test_paginate_offset() {
        let mut paginate = Pagination::new(1, 9);
        assert_eq!(paginate.offset(), 0);

        paginate.page = 2;
        assert_eq!(paginate.offset(), 9);

        paginate.per_page = 5;
        assert_eq!(paginate.offset(), 5);

        paginate.page = 3;
        assert_eq!(paginate.offset(), 10);
    }

    #[test]
    fn test_paginate_clamps_zero() {
        let paginate = Pagination::new(0, 0);
        assert_eq!(paginate.page, 1);
        assert_eq!(paginate.limit(), 1);
        assert_eq!(paginate.offset(), 0);
    }

    #[test]
    fn test_has_more() {
        assert!(Pagination::page(1).has_more(10));
        assert!(!Pagination::page(1).has_more(9));
        assert!(!Pagination::page(2).has_more(18));
        assert!(Pagination::page(2).has_more(19));
        assert!(!Pagination::page(1).has_more(0));
    }
}
