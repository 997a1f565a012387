// catalog/controller/pagination.rs - Current page, totals and the page bar
//
// Pages are 0-indexed everywhere in code. Only labels shown to the learner
// are 1-based.

/// Number of consecutive page buttons around the current page
pub const PAGE_WINDOW: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    total_pages: u32,
    total_elements: u64,
}

/// One slot of the page bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// What a pagination control points at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTarget {
    Previous,
    Next,
    Page(u32),
}

impl PaginationState {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 0,
            page_size: page_size.max(1),
            total_pages: 0,
            total_elements: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Move to `page` if it lies in `[0, total_pages - 1]`
    ///
    /// Out-of-range pages, negative ones included, leave the state untouched.
    pub fn set_current_page(&mut self, page: i64) -> bool {
        if page < 0 || page >= i64::from(self.total_pages) {
            return false;
        }
        let page = page as u32;
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    /// Store server-reported totals
    ///
    /// Keeps `current_page < max(total_pages, 1)` when the result set shrank.
    pub fn apply_totals(&mut self, total_pages: u32, total_elements: u64) {
        self.total_pages = total_pages;
        self.total_elements = total_elements;
        let last = total_pages.max(1) - 1;
        if self.current_page > last {
            tracing::debug!("Clamping page {} to last page {}", self.current_page, last);
            self.current_page = last;
        }
    }

    pub fn resolve(&self, target: PageTarget) -> Option<u32> {
        let page = match target {
            PageTarget::Previous => self.current_page.checked_sub(1)?,
            PageTarget::Next => self.current_page + 1,
            PageTarget::Page(page) => page,
        };
        (page < self.total_pages).then_some(page)
    }

    /// Controls are disabled while a section reload runs, when they point at
    /// the current page, or when they would leave the valid range.
    pub fn is_disabled(&self, target: PageTarget, section_loading: bool) -> bool {
        if section_loading {
            return true;
        }
        match self.resolve(target) {
            Some(page) => page == self.current_page,
            None => true,
        }
    }

    pub fn window(&self) -> Vec<PageItem> {
        page_window(self.current_page, self.total_pages)
    }

    /// 1-based first and last item shown on the current page
    pub fn visible_range(&self) -> Option<(u64, u64)> {
        if self.total_elements == 0 {
            return None;
        }
        let size = u64::from(self.page_size);
        let first = u64::from(self.current_page) * size + 1;
        if first > self.total_elements {
            return None;
        }
        let last = (first + size - 1).min(self.total_elements);
        Some((first, last))
    }
}

/// Up to `PAGE_WINDOW` consecutive pages centered on `current`, clamped to
/// the valid range, plus the first and last page as anchors. An ellipsis
/// marks each gap between an anchor and the window.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }

    let width = PAGE_WINDOW.min(total_pages);
    let current = current.min(total_pages - 1);
    let start = current.saturating_sub(width / 2).min(total_pages - width);
    let end = start + width;

    let mut items = Vec::with_capacity(width as usize + 4);
    if start > 0 {
        items.push(PageItem::Page(0));
        if start > 1 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..end).map(PageItem::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages - 1));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn with_totals(total_pages: u32) -> PaginationState {
        let mut state = PaginationState::new(6);
        state.apply_totals(total_pages, u64::from(total_pages) * 6);
        state
    }

    #[test]
    fn test_set_current_page_bounds() {
        let mut state = with_totals(5);
        assert!(!state.set_current_page(10));
        assert!(!state.set_current_page(-1));
        assert!(!state.set_current_page(5));
        assert_eq!(state.current_page(), 0);

        assert!(state.set_current_page(4));
        assert_eq!(state.current_page(), 4);
    }

    #[test]
    fn test_no_pages_means_no_moves() {
        let mut state = PaginationState::new(6);
        assert!(!state.set_current_page(0));
        assert!(state.window().is_empty());
    }

    #[test]
    fn test_apply_totals_clamps_current_page() {
        let mut state = with_totals(5);
        state.set_current_page(4);
        state.apply_totals(2, 8);
        assert_eq!(state.current_page(), 1);

        state.apply_totals(0, 0);
        assert_eq!(state.current_page(), 0);
    }

    #[test]
    fn test_window_small_totals() {
        assert_eq!(page_window(0, 1), vec![Page(0)]);
        assert_eq!(page_window(1, 3), vec![Page(0), Page(1), Page(2)]);
        assert_eq!(page_window(2, 5), vec![Page(0), Page(1), Page(2), Page(3), Page(4)]);
    }

    #[test]
    fn test_window_centered_with_anchors() {
        assert_eq!(
            page_window(5, 12),
            vec![Page(0), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(11)]
        );
    }

    #[test]
    fn test_window_clamped_at_edges() {
        assert_eq!(
            page_window(0, 10),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]
        );
        assert_eq!(
            page_window(9, 10),
            vec![Page(0), Ellipsis, Page(5), Page(6), Page(7), Page(8), Page(9)]
        );
    }

    #[test]
    fn test_window_adjacent_anchor_has_no_ellipsis() {
        assert_eq!(
            page_window(3, 6),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_controls_disabled_states() {
        let mut state = with_totals(3);
        assert!(state.is_disabled(PageTarget::Previous, false));
        assert!(state.is_disabled(PageTarget::Page(0), false));
        assert!(!state.is_disabled(PageTarget::Next, false));
        assert!(state.is_disabled(PageTarget::Next, true));

        state.set_current_page(2);
        assert!(state.is_disabled(PageTarget::Next, false));
        assert!(!state.is_disabled(PageTarget::Previous, false));
        assert!(state.is_disabled(PageTarget::Page(7), false));
    }

    #[test]
    fn test_visible_range() {
        let mut state = PaginationState::new(6);
        assert_eq!(state.visible_range(), None);

        state.apply_totals(2, 7);
        assert_eq!(state.visible_range(), Some((1, 6)));
        state.set_current_page(1);
        assert_eq!(state.visible_range(), Some((7, 7)));
    }
}
