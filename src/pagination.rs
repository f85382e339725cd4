//! Sliding window of page buttons for the memo list.
//!
//! The window starts two pages before the current one (never before page 1) and spans at
//! most [`WINDOW_SIZE`] pages, clamped to the last page. `Prev`/`Next` are only offered when
//! there is somewhere to go. Page counts come from the backend and are not validated, but
//! the window never contains page 0 or a page past `total_pages` whatever it is given.

/// Maximum number of numbered page buttons shown at once
pub const WINDOW_SIZE: usize = 5;

/// Pages shown before the current page when there is room
const LEAD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Prev(usize),
    Page { number: usize, current: bool },
    Next(usize),
}

impl PageButton {
    /// Page this button navigates to
    pub fn target(&self) -> usize {
        match *self {
            PageButton::Prev(n) | PageButton::Next(n) => n,
            PageButton::Page { number, .. } => number,
        }
    }

    pub fn label(&self) -> String {
        match *self {
            PageButton::Prev(_) => "Prev".into(),
            PageButton::Next(_) => "Next".into(),
            PageButton::Page { number, .. } => number.to_string(),
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, PageButton::Page { current: true, .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    /// First numbered page (inclusive)
    pub start: usize,
    /// Last numbered page (inclusive); below `start` when the window is empty
    pub end: usize,
}

impl PageWindow {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let start = current_page.saturating_sub(LEAD).max(1);
        let end = (start + WINDOW_SIZE - 1).min(total_pages);
        Self { current_page, total_pages, start, end }
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Buttons in display order: `Prev`, numbered pages, `Next`.
    pub fn buttons(&self) -> Vec<PageButton> {
        let mut out = Vec::with_capacity(WINDOW_SIZE + 2);
        if self.has_prev() {
            out.push(PageButton::Prev(self.current_page - 1));
        }
        for number in self.pages() {
            out.push(PageButton::Page { number, current: number == self.current_page });
        }
        if self.has_next() {
            out.push(PageButton::Next(self.current_page + 1));
        }
        out
    }
}

pub fn page_window(current_page: usize, total_pages: usize) -> PageWindow {
    PageWindow::new(current_page, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(w: &PageWindow) -> Vec<usize> {
        w.pages().collect()
    }

    #[test]
    fn test_window_centred_on_current_page() {
        let w = page_window(6, 10);
        assert_eq!(numbers(&w), vec![4, 5, 6, 7, 8]);
        assert!(w.has_prev());
        assert!(w.has_next());
    }

    #[test]
    fn test_window_clamped_at_start() {
        let w = page_window(1, 10);
        assert_eq!(numbers(&w), vec![1, 2, 3, 4, 5]);
        assert!(!w.has_prev());
        assert!(w.has_next());

        let w = page_window(2, 10);
        assert_eq!(numbers(&w), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_clamped_at_end() {
        // start stays anchored at current - 2, so the tail shrinks instead of sliding back
        let w = page_window(10, 10);
        assert_eq!(numbers(&w), vec![8, 9, 10]);
        assert!(w.has_prev());
        assert!(!w.has_next());
    }

    #[test]
    fn test_single_page() {
        let w = page_window(1, 1);
        assert_eq!(numbers(&w), vec![1]);
        assert!(!w.has_prev());
        assert!(!w.has_next());
        assert_eq!(w.buttons(), vec![PageButton::Page { number: 1, current: true }]);
    }

    #[test]
    fn test_buttons_order_and_current_marker() {
        let w = page_window(3, 4);
        let buttons = w.buttons();
        assert_eq!(buttons.first(), Some(&PageButton::Prev(2)));
        assert_eq!(buttons.last(), Some(&PageButton::Next(4)));
        let current: Vec<usize> = buttons.iter().filter(|b| b.is_current()).map(|b| b.target()).collect();
        assert_eq!(current, vec![3]);
        let labels: Vec<String> = buttons.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["Prev", "1", "2", "3", "4", "Next"]);
    }

    #[test]
    fn test_window_bounds_hold_for_any_input() {
        for total in 0..=15 {
            for current in 0..=17 {
                let w = page_window(current, total);
                let pages = numbers(&w);
                assert!(pages.len() <= WINDOW_SIZE, "current={} total={}", current, total);
                assert!(pages.iter().all(|p| *p >= 1 && *p <= total), "current={} total={}", current, total);
            }
        }
    }

    #[test]
    fn test_out_of_range_current_page_yields_empty_window() {
        let w = page_window(9, 3);
        assert!(numbers(&w).is_empty());
        assert!(w.has_prev());
        assert!(!w.has_next());
    }
}
