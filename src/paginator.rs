//! Pagination state for collection views.
//!
//! This component only does the page arithmetic; it never touches items. The
//! owning view feeds it the filtered item count and asks for the slice
//! bounds of the current page.
//!
//! Pages are 1-based and always clamped: no matter what a caller stores,
//! `page` stays inside `[1, total_pages]`, and `total_pages` is at least 1
//! even for an empty collection (an empty page 1 rather than a page 0 that
//! does not exist).

/// A paginator model holding the current page, page size, and derived page
/// count.
///
/// The default page size is `usize::MAX`, which effectively disables
/// pagination; non-paged hosts (popup menus, comboboxes) keep that default
/// and always see a single page holding everything.
///
/// # Examples
///
/// ```
/// use listview_core::paginator::Paginator;
///
/// let mut paginator = Paginator::new().with_per_page(10);
/// paginator.set_total_items(95);
/// assert_eq!(paginator.total_pages(), 10);
///
/// paginator.set_page(3);
/// assert_eq!(paginator.slice_bounds(95), (20, 30));
///
/// // Out-of-range pages clamp instead of failing.
/// paginator.set_page(9999);
/// assert_eq!(paginator.page(), 10);
/// paginator.set_page(0);
/// assert_eq!(paginator.page(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: usize,
    total_pages: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: usize::MAX,
            total_pages: 1,
        }
    }
}

impl Paginator {
    /// Creates a paginator with the default "no pagination" page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). Values below 1 clamp to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the page size. Values below 1 clamp to 1.
    ///
    /// The page count is not touched here; the owning view re-derives it by
    /// calling [`set_total_items`](Self::set_total_items) right after.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Returns the page size.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Recalculates the page count from an item count and re-clamps the
    /// current page.
    ///
    /// Zero items still yield one (empty) page.
    ///
    /// # Examples
    ///
    /// ```
    /// use listview_core::paginator::Paginator;
    ///
    /// let mut paginator = Paginator::new().with_per_page(10);
    /// paginator.set_total_items(0);
    /// assert_eq!(paginator.total_pages(), 1);
    /// paginator.set_total_items(95);
    /// assert_eq!(paginator.total_pages(), 10);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = if items == 0 {
            1
        } else {
            items.div_ceil(self.per_page)
        };
        self.page = self.page.clamp(1, self.total_pages);
    }

    /// Sets the current page, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages);
    }

    /// Returns the current page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the page count (at least 1).
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Moves to the next page, staying on the last one at the end.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Moves to the previous page, staying on the first one at the start.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Returns whether the current page is the first.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns whether the current page is the last.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages
    }

    /// Returns the `(start, end)` slice bounds of the current page for a
    /// sequence of `length` items. `end` is exclusive and never exceeds
    /// `length`; the arithmetic saturates so the "no pagination" page size
    /// cannot overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use listview_core::paginator::Paginator;
    ///
    /// let items: Vec<i32> = (1..=25).collect();
    /// let mut paginator = Paginator::new().with_per_page(10);
    /// paginator.set_total_items(items.len());
    /// paginator.set_page(3);
    ///
    /// let (start, end) = paginator.slice_bounds(items.len());
    /// assert_eq!(&items[start..end], &[21, 22, 23, 24, 25]);
    /// ```
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.per_page).min(length);
        let end = start.saturating_add(self.per_page).min(length);
        (start, end)
    }

    /// Returns the number of items on the current page, which is smaller
    /// than the page size on the last page of an uneven collection.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.slice_bounds(total_items);
        end - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_effectively_unpaginated() {
        let mut paginator = Paginator::new();
        paginator.set_total_items(1_000_000);
        assert_eq!(paginator.total_pages(), 1);
        assert_eq!(paginator.slice_bounds(1_000_000), (0, 1_000_000));
    }

    #[test]
    fn page_clamps_on_every_mutation() {
        let mut paginator = Paginator::new().with_per_page(2);
        paginator.set_total_items(3);
        assert_eq!(paginator.total_pages(), 2);

        paginator.set_page(0);
        assert_eq!(paginator.page(), 1);
        paginator.set_page(50);
        assert_eq!(paginator.page(), 2);

        // Shrinking the collection pulls the page back in range.
        paginator.set_total_items(1);
        assert_eq!(paginator.page(), 1);
    }

    #[test]
    fn empty_collection_is_one_empty_page() {
        let mut paginator = Paginator::new().with_per_page(10);
        paginator.set_total_items(0);
        paginator.set_page(7);
        assert_eq!(paginator.page(), 1);
        assert_eq!(paginator.slice_bounds(0), (0, 0));
        assert_eq!(paginator.items_on_page(0), 0);
    }

    #[test]
    fn navigation_stops_at_the_edges() {
        let mut paginator = Paginator::new().with_per_page(10);
        paginator.set_total_items(30);

        assert!(paginator.on_first_page());
        paginator.prev_page();
        assert_eq!(paginator.page(), 1);

        paginator.next_page();
        paginator.next_page();
        assert!(paginator.on_last_page());
        paginator.next_page();
        assert_eq!(paginator.page(), 3);
    }

    #[test]
    fn last_page_can_be_partial() {
        let mut paginator = Paginator::new().with_per_page(10);
        paginator.set_total_items(95);
        paginator.set_page(10);
        assert_eq!(paginator.slice_bounds(95), (90, 95));
        assert_eq!(paginator.items_on_page(95), 5);
    }
}
