//! Page-based view state over the eligible add-on list.

/// Number of add-on rows shown per page.
pub const PAGE_SIZE: usize = 7;

/// Current page index over an ordered list of items.
///
/// The pager holds only the index; the item count is passed in by the caller
/// because the underlying list is recomputed on every locale change.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pager {
    /// Zero-based index of the page currently shown.
    current_page: usize,
}

impl Pager {
    /// Zero-based index of the page currently shown.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Reset to the first page. Called whenever the underlying list changes.
    pub const fn reset(&mut self) {
        self.current_page = 0;
    }

    /// What: Largest valid page index for `item_count` items.
    ///
    /// Inputs:
    /// - `item_count`: Length of the paged list.
    ///
    /// Output:
    /// - `(item_count - 1) / PAGE_SIZE` for a non-empty list, `0` for an
    ///   empty one so an empty list still renders as page "1/1".
    #[must_use]
    pub const fn max_page_index(item_count: usize) -> usize {
        if item_count == 0 {
            0
        } else {
            (item_count - 1) / PAGE_SIZE
        }
    }

    /// Total number of pages for `item_count` items (never zero).
    #[must_use]
    pub const fn page_count(item_count: usize) -> usize {
        Self::max_page_index(item_count) + 1
    }

    /// What: Move the page index by `delta`, rejecting out-of-bounds moves.
    ///
    /// Inputs:
    /// - `delta`: Signed page offset (e.g., -1 or +1 from the chevrons).
    /// - `item_count`: Current length of the paged list.
    ///
    /// Output:
    /// - `true` if the page changed; `false` when the proposed index falls
    ///   outside `0..=max_page_index` and the state is left untouched.
    pub fn navigate(&mut self, delta: isize, item_count: usize) -> bool {
        let proposed = self.current_page as isize + delta;
        if proposed < 0 || proposed as usize > Self::max_page_index(item_count) {
            return false;
        }
        self.current_page = proposed as usize;
        true
    }

    /// Whether the item at `index` falls on the current page.
    #[must_use]
    pub const fn is_visible(&self, index: usize) -> bool {
        index / PAGE_SIZE == self.current_page
    }

    /// One-based "current/total" label for the page indicator.
    #[must_use]
    pub fn label(&self, item_count: usize) -> String {
        format!("{}/{}", self.current_page + 1, Self::page_count(item_count))
    }
}
