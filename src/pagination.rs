//! Paginated View Window
//!
//! Page math for the admin user table. Pages are 1-based; the marker
//! strip collapses long ranges with ellipses while always keeping the
//! first and last page reachable.

/// Allowed rows-per-page choices
pub const PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];

/// One slot in the pager strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

/// Current window over a paginated result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub page_size: u32,
    pub total_items: u32,
}

impl PageWindow {
    pub fn new(current: u32, page_size: u32, total_items: u32) -> Self {
        Self { current, page_size, total_items }
    }

    /// Number of pages; zero for an empty result set.
    pub fn total_pages(&self) -> u32 {
        self.total_items.div_ceil(self.page_size)
    }

    /// Inclusive 1-based item range shown on the current page.
    pub fn item_range(&self) -> (u32, u32) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let first = (self.current - 1) * self.page_size + 1;
        let last = (self.current * self.page_size).min(self.total_items);
        (first, last)
    }

    /// Clamp the current page after the page size or total changes.
    pub fn clamped(self) -> Self {
        let total = self.total_pages().max(1);
        Self {
            current: self.current.clamp(1, total),
            ..self
        }
    }

    /// Markers for the pager strip.
    ///
    /// Seven or fewer pages show everything. Otherwise the strip pins
    /// page 1 and the last page, elides the far side, and shows four
    /// pages near an edge or a three-page band around the middle.
    pub fn page_markers(&self) -> Vec<PageMarker> {
        use PageMarker::*;

        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }
        if total <= 7 {
            return (1..=total).map(Page).collect();
        }

        let mut markers = Vec::new();
        if self.current <= 3 {
            markers.extend((1..=4).map(Page));
            markers.push(Ellipsis);
            markers.push(Page(total));
        } else if self.current >= total - 2 {
            markers.push(Page(1));
            markers.push(Ellipsis);
            markers.extend((total - 3..=total).map(Page));
        } else {
            markers.push(Page(1));
            markers.push(Ellipsis);
            markers.extend((self.current - 1..=self.current + 1).map(Page));
            markers.push(Ellipsis);
            markers.push(Page(total));
        }
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Page};
    use super::*;

    #[test]
    fn few_pages_show_all_markers() {
        let w = PageWindow::new(2, 10, 65);
        assert_eq!(
            w.page_markers(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn near_start_pins_first_four() {
        let w = PageWindow::new(1, 10, 100);
        assert_eq!(
            w.page_markers(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn near_end_pins_last_four() {
        let w = PageWindow::new(10, 10, 100);
        assert_eq!(
            w.page_markers(),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn middle_shows_band_with_both_ellipses() {
        let w = PageWindow::new(5, 10, 100);
        assert_eq!(
            w.page_markers(),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn boundary_between_start_and_middle() {
        // current = 4 is the first page that uses the middle band
        let w = PageWindow::new(4, 10, 100);
        assert_eq!(
            w.page_markers(),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn partial_last_page_range() {
        let w = PageWindow::new(4, 25, 95);
        assert_eq!(w.total_pages(), 4);
        assert_eq!(w.item_range(), (76, 95));
    }

    #[test]
    fn empty_set_has_no_pages() {
        let w = PageWindow::new(1, 25, 0);
        assert_eq!(w.total_pages(), 0);
        assert_eq!(w.item_range(), (0, 0));
        assert!(w.page_markers().is_empty());
    }

    #[test]
    fn clamp_after_page_size_growth() {
        // On page 9 of 10 at size 10; switching to size 100 leaves one page
        let w = PageWindow::new(9, 100, 95).clamped();
        assert_eq!(w.current, 1);
    }

    #[test]
    fn clamp_keeps_valid_page() {
        let w = PageWindow::new(3, 10, 95).clamped();
        assert_eq!(w.current, 3);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let w = PageWindow::new(1, 25, 100);
        assert_eq!(w.total_pages(), 4);
    }
}
