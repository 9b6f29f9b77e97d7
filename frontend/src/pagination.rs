//! Bounded paging over the cached image list.
//!
//! The pager only ever derives a window of whatever list the caller hands it;
//! it never triggers a fetch. Page numbers are 1-based and navigation past a
//! boundary is refused rather than wrapped or clamped.

/// Gallery window size for the end-user dashboard.
pub const GALLERY_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 1,
            page_size,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// The visible window of `items` for the current page. Empty when the
    /// page starts past the end of the list.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current < self.total_pages(len)
    }

    /// Advances one page. Refused (returns `false`) at the last page.
    pub fn next(&mut self, len: usize) -> bool {
        if self.has_next(len) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one page. Refused (returns `false`) at page 1.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Pulls the current page back into range after the underlying list
    /// shrank (wholesale cache replacement). Never drops below page 1.
    pub fn clamp(&mut self, len: usize) {
        let last = self.total_pages(len).max(1);
        if self.current > last {
            self.current = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img-{i}.png")).collect()
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        let pager = Pager::new(GALLERY_PAGE_SIZE);
        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.total_pages(1), 1);
        assert_eq!(pager.total_pages(6), 1);
        assert_eq!(pager.total_pages(7), 2);
        assert_eq!(pager.total_pages(12), 2);
        assert_eq!(pager.total_pages(13), 3);
    }

    #[test]
    fn slice_length_matches_remaining_items() {
        for n in 0..20 {
            let items = names(n);
            let mut pager = Pager::new(GALLERY_PAGE_SIZE);
            let total = pager.total_pages(n);
            for p in 1..=total.max(1) {
                assert_eq!(pager.current(), p);
                let expected = if p <= total {
                    GALLERY_PAGE_SIZE.min(n - GALLERY_PAGE_SIZE * (p - 1))
                } else {
                    0
                };
                assert_eq!(pager.slice(&items).len(), expected, "n={n} p={p}");
                pager.next(n);
            }
        }
    }

    #[test]
    fn seven_images_paginate_into_six_and_one() {
        let items: Vec<&str> = vec!["a", "b", "c", "d", "e", "f", "g"];
        let mut pager = Pager::new(GALLERY_PAGE_SIZE);

        assert_eq!(pager.total_pages(items.len()), 2);
        assert_eq!(pager.slice(&items), ["a", "b", "c", "d", "e", "f"]);
        assert!(!pager.has_prev());
        assert!(pager.has_next(items.len()));

        assert!(pager.next(items.len()));
        assert_eq!(pager.current(), 2);
        assert_eq!(pager.slice(&items), ["g"]);
        assert!(!pager.has_next(items.len()));
    }

    #[test]
    fn navigation_is_refused_at_the_bounds() {
        let items = names(7);
        let mut pager = Pager::new(GALLERY_PAGE_SIZE);

        assert!(!pager.prev());
        assert_eq!(pager.current(), 1);

        assert!(pager.next(items.len()));
        assert!(!pager.next(items.len()));
        assert_eq!(pager.current(), 2);
    }

    #[test]
    fn next_is_disabled_on_an_empty_list() {
        let pager = Pager::new(GALLERY_PAGE_SIZE);
        assert!(!pager.has_next(0));
        assert!(!pager.has_prev());
        assert_eq!(pager.slice::<String>(&[]).len(), 0);
    }

    #[test]
    fn clamp_pulls_page_back_after_shrink() {
        let mut pager = Pager::new(GALLERY_PAGE_SIZE);
        pager.next(13); // page 2 of 3
        pager.next(13); // page 3 of 3
        assert_eq!(pager.current(), 3);

        pager.clamp(7);
        assert_eq!(pager.current(), 2);

        pager.clamp(0);
        assert_eq!(pager.current(), 1);
    }
}
