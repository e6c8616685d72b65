//! Listing pagination with a bounded page-number window.
//!
//! Category listings paginate in memory over the already-sorted SKU
//! rows. The policy is deliberately forgiving: any page index that
//! cannot be served (garbage, zero, past the end) resets to the first
//! page instead of erroring, so stale bookmarks keep working after a
//! category shrinks.
//!
//! The pager strip never shows more than [`MAX_VISIBLE_PAGES`] numbers.
//! [`WindowMarker`] tells the template on which side the hidden pages
//! are, so it can render ellipsis gaps.

/// Upper bound on page numbers shown in the pager strip.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Which side of the visible window has hidden pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMarker {
    /// Every page number is visible.
    None,
    /// Pages beyond the right edge are hidden.
    TruncatedRight,
    /// Pages before the left edge are hidden.
    TruncatedLeft,
    /// Hidden pages on both sides.
    TruncatedBoth,
}

/// The visible slice of the pager strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Consecutive page numbers to render, ascending.
    pub pages: Vec<u32>,
    pub marker: WindowMarker,
}

impl PageWindow {
    /// True when an ellipsis gap belongs before the first visible number.
    pub fn truncated_left(&self) -> bool {
        matches!(
            self.marker,
            WindowMarker::TruncatedLeft | WindowMarker::TruncatedBoth
        )
    }

    /// True when an ellipsis gap belongs after the last visible number.
    pub fn truncated_right(&self) -> bool {
        matches!(
            self.marker,
            WindowMarker::TruncatedRight | WindowMarker::TruncatedBoth
        )
    }
}

/// A pager-strip entry, precomputed for the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub current: bool,
}

/// One page of a listing plus everything the pager strip needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The items on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// The page actually served (1-based, after any reset).
    pub number: u32,
    /// Total pages in the listing; an empty listing still has one page.
    pub total_pages: u32,
    pub window: PageWindow,
}

impl<T> Page<T> {
    /// Pager entries with the current page flagged.
    pub fn window_links(&self) -> Vec<PageLink> {
        self.window
            .pages
            .iter()
            .map(|&number| PageLink {
                number,
                current: number == self.number,
            })
            .collect()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn previous_number(&self) -> u32 {
        self.number.saturating_sub(1).max(1)
    }

    pub fn next_number(&self) -> u32 {
        (self.number + 1).min(self.total_pages)
    }
}

/// Parses a raw page-index path segment.
///
/// Non-numeric input and zero both reset to page 1; range checking
/// against the listing happens later in [`paginate`].
pub fn parse_page_index(raw: &str) -> u32 {
    raw.parse::<u32>().ok().filter(|&p| p >= 1).unwrap_or(1)
}

/// Slices one page out of a fully sorted listing.
///
/// `requested_page` outside `1..=total_pages` serves page 1. An empty
/// listing produces a single empty page rather than zero pages, so the
/// pager strip always has something to render.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, requested_page: u32) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = (items.len().div_ceil(page_size)).max(1) as u32;

    let number = if requested_page < 1 || requested_page > total_pages {
        1
    } else {
        requested_page
    };

    let start = (number as usize - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let page_items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: page_items,
        number,
        total_pages,
        window: visible_window(total_pages, number),
    }
}

/// Computes the visible pager window around `current`.
///
/// With five or fewer total pages everything is shown. Otherwise the
/// window pins to the nearest edge until the current page is deep
/// enough to center, which keeps the strip a stable five numbers wide
/// while scrolling.
pub fn visible_window(total_pages: u32, current: u32) -> PageWindow {
    if total_pages <= MAX_VISIBLE_PAGES {
        return PageWindow {
            pages: (1..=total_pages).collect(),
            marker: WindowMarker::None,
        };
    }

    if current <= 3 {
        PageWindow {
            pages: (1..=MAX_VISIBLE_PAGES).collect(),
            marker: WindowMarker::TruncatedRight,
        }
    } else if total_pages - current <= 2 {
        PageWindow {
            pages: (total_pages - 4..=total_pages).collect(),
            marker: WindowMarker::TruncatedLeft,
        }
    } else {
        PageWindow {
            pages: (current - 2..=current + 2).collect(),
            marker: WindowMarker::TruncatedBoth,
        }
    }
}
