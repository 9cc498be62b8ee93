//! Mutation and query surface of the collection view model.
//!
//! Everything here follows the same shape: validate the input against the
//! store, delegate to the owning engine, then recompute the derived views.
//! No operation returns an error; references to ids that do not exist are
//! absorbed as no-ops because in the calling widgets a click or keystroke
//! can always race a data reload.

use log::{debug, trace};

use super::Model;
use crate::filter::{Filter, FilterOp};
use crate::item::{FieldValue, Item};
use crate::sort::Order;

impl<I: Item> Model<I> {
    // -------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------

    /// Installs or replaces the filter for `field` (at most one filter per
    /// field) and recomputes the views.
    ///
    /// # Examples
    ///
    /// ```
    /// use listview_core::filter::FilterOp;
    /// use listview_core::item::{FieldValue, Item};
    /// use listview_core::list::Model;
    ///
    /// # #[derive(Clone)]
    /// # struct Row(String, String);
    /// # impl Item for Row {
    /// #     fn id(&self) -> &str { &self.0 }
    /// #     fn field(&self, name: &str) -> Option<FieldValue> {
    /// #         (name == "name").then(|| self.1.as_str().into())
    /// #     }
    /// # }
    /// let mut model = Model::new().with_items(vec![
    ///     Row("1".into(), "Alice".into()),
    ///     Row("2".into(), "Bob".into()),
    ///     Row("3".into(), "Carol".into()),
    /// ]);
    ///
    /// model.set_filter("name", "a".into(), FilterOp::Like, false);
    /// assert_eq!(model.filtered_item_ids(), ["1", "3"]);
    /// assert_eq!(model.num_filtered_items(), 2);
    /// ```
    pub fn set_filter(
        &mut self,
        field: &str,
        value: FieldValue,
        op: FilterOp,
        normalize_diacritics: bool,
    ) {
        self.filters
            .set(Filter::new(field, value, op).with_diacritic_folding(normalize_diacritics));
        self.refresh();
        debug!(
            "filter on {:?} set, {}/{} items filtered in",
            field,
            self.filtered_ids.len(),
            self.store.len()
        );
    }

    /// Removes the filter on `field`, if any.
    pub fn remove_filter(&mut self, field: &str) {
        self.filters.remove(field);
        self.refresh();
    }

    /// Removes the filters on each of `fields`.
    pub fn remove_filters(&mut self, fields: &[&str]) {
        self.filters.remove_many(fields);
        self.refresh();
    }

    /// Removes every filter.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.refresh();
    }

    /// Replaces the whole filter set atomically.
    pub fn filter_by(&mut self, filters: Vec<Filter>) {
        self.filters.replace_all(filters);
        self.refresh();
        debug!(
            "filter set replaced ({} filters), {}/{} items filtered in",
            self.filters.filters().len(),
            self.filtered_ids.len(),
            self.store.len()
        );
    }

    /// Returns the installed filters in install order.
    pub fn filters(&self) -> &[Filter] {
        self.filters.filters()
    }

    // -------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------

    /// Installs the sort keys and recomputes the views. An empty sequence
    /// reverts every view to store insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use listview_core::item::{FieldValue, Item};
    /// use listview_core::list::Model;
    /// use listview_core::sort::Order;
    ///
    /// # #[derive(Clone)]
    /// # struct Row(String, String);
    /// # impl Item for Row {
    /// #     fn id(&self) -> &str { &self.0 }
    /// #     fn field(&self, name: &str) -> Option<FieldValue> {
    /// #         (name == "name").then(|| self.1.as_str().into())
    /// #     }
    /// # }
    /// let mut model = Model::new().with_items(vec![
    ///     Row("1".into(), "Alice".into()),
    ///     Row("2".into(), "Bob".into()),
    ///     Row("3".into(), "Carol".into()),
    /// ]);
    ///
    /// model.order_by(vec![Order::desc("name")]);
    /// assert_eq!(model.ordered_item_ids(), ["2", "3", "1"]);
    /// ```
    pub fn order_by(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.refresh();
        debug!("ordering by {} keys", self.orders.len());
    }

    /// Returns the installed sort keys, verbatim.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // -------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------

    /// Sets the page size and recomputes the views; the current page is
    /// re-clamped against the new page count.
    pub fn set_items_per_page(&mut self, per_page: usize) {
        self.paginator.set_per_page(per_page);
        self.refresh();
    }

    /// Returns the page size.
    pub fn items_per_page(&self) -> usize {
        self.paginator.per_page()
    }

    /// Sets the current page, clamped into `[1, num_pages]`, and
    /// recomputes the visible window.
    pub fn set_page(&mut self, page: usize) {
        self.paginator.set_page(page);
        if self.paginator.page() != page {
            trace!("page {} clamped to {}", page, self.paginator.page());
        }
        self.refresh();
    }

    /// Returns the current page (1-based).
    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    /// Moves to the next page, staying on the last one at the end.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
        self.refresh();
    }

    /// Moves to the previous page, staying on the first one at the start.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
        self.refresh();
    }

    /// Returns whether the current page is the first.
    pub fn on_first_page(&self) -> bool {
        self.paginator.on_first_page()
    }

    /// Returns whether the current page is the last.
    pub fn on_last_page(&self) -> bool {
        self.paginator.on_last_page()
    }

    // -------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------

    /// Sets the selection mode. Switching from multi to single with
    /// several items selected keeps the active one if set, otherwise the
    /// first selected.
    pub fn set_allow_multiple(&mut self, allow_multiple: bool) {
        self.selection.set_allow_multiple(allow_multiple);
        self.refresh();
    }

    /// Returns whether multiple items may be selected at once.
    pub fn allow_multiple(&self) -> bool {
        self.selection.allow_multiple()
    }

    /// Returns the selected ids in selection order.
    pub fn selected_item_ids(&self) -> &[String] {
        self.selection.ids()
    }

    /// Returns the selected items in selection order.
    pub fn selected_items(&self) -> Vec<I> {
        self.store.get_many(self.selection.ids())
    }

    /// Returns whether `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Returns the active id, the current keyboard/focus target. When set
    /// it is always a member of the selection.
    pub fn active_item_id(&self) -> Option<&str> {
        self.selection.active()
    }

    /// Returns the active item.
    pub fn active_item(&self) -> Option<&I> {
        self.selection.active().and_then(|id| self.store.get(id))
    }

    /// Returns the pivot id, the anchor for range selection.
    pub fn pivot_item_id(&self) -> Option<&str> {
        self.selection.pivot()
    }

    /// Selects exactly `id`: clears any prior selection and moves the
    /// active id and pivot to `id`. Unknown ids are a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use listview_core::item::{FieldValue, Item};
    /// use listview_core::list::Model;
    ///
    /// # #[derive(Clone)]
    /// # struct Row(String);
    /// # impl Item for Row {
    /// #     fn id(&self) -> &str { &self.0 }
    /// #     fn field(&self, _: &str) -> Option<FieldValue> { None }
    /// # }
    /// let mut model = Model::new().with_items(vec![Row("1".into()), Row("2".into())]);
    ///
    /// model.select_item_by_id("1");
    /// assert_eq!(model.selected_item_ids(), ["1"]);
    /// assert_eq!(model.active_item_id(), Some("1"));
    ///
    /// // A click racing a reload resolves to nothing instead of failing.
    /// model.select_item_by_id("99");
    /// assert_eq!(model.selected_item_ids(), ["1"]);
    /// ```
    pub fn select_item_by_id(&mut self, id: &str) {
        if !self.store.contains(id) {
            trace!("select ignored, unknown id {:?}", id);
            return;
        }
        self.selection.select(id);
        self.refresh();
    }

    /// Toggles the selection of `id`. Removing the active id clears it;
    /// adding moves the active id and pivot to `id`, replacing any prior
    /// selection in single mode. Unknown ids are a no-op.
    pub fn toggle_selection_by_id(&mut self, id: &str) {
        if !self.store.contains(id) {
            trace!("toggle ignored, unknown id {:?}", id);
            return;
        }
        self.selection.toggle(id);
        self.refresh();
    }

    /// Adds `id` to the selection without removing existing selections.
    /// In single mode this degrades to [`select_item_by_id`](Self::select_item_by_id).
    pub fn add_selection_by_id(&mut self, id: &str) {
        if !self.store.contains(id) {
            trace!("add ignored, unknown id {:?}", id);
            return;
        }
        self.selection.add(id);
        self.refresh();
    }

    /// Adds every existing id of `ids` to the selection. In single mode
    /// the last existing id wins.
    pub fn add_selections_by_ids(&mut self, ids: &[String]) {
        let existing: Vec<String> = ids
            .iter()
            .filter(|id| self.store.contains(id.as_str()))
            .cloned()
            .collect();
        self.selection.add_many(&existing);
        self.refresh();
    }

    /// Removes `id` from the selection; the active id is cleared when it
    /// was `id`.
    pub fn remove_selection_by_id(&mut self, id: &str) {
        self.selection.remove(id);
        self.refresh();
    }

    /// Removes every id of `ids` from the selection.
    pub fn remove_selections_by_ids(&mut self, ids: &[String]) {
        self.selection.remove_many(ids);
        self.refresh();
    }

    /// Selects every enabled, filtered-in item, keeping whatever else was
    /// already selected. Disabled or filtered-out items are never
    /// auto-selected. In single mode this degrades to selecting the first
    /// enabled filtered-in item.
    pub fn select_all_items(&mut self) {
        let enabled: Vec<String> = self
            .filtered_ids
            .iter()
            .filter(|id| self.is_enabled(id.as_str()))
            .cloned()
            .collect();
        if self.selection.allow_multiple() {
            self.selection.add_range(&enabled);
        } else if let Some(first) = enabled.first() {
            self.selection.select(first);
        }
        self.refresh();
        debug!("select all: {} items selected", self.selection.len());
    }

    /// Empties the selection and clears the active id and pivot.
    pub fn unselect_all_items(&mut self) {
        self.selection.clear();
        self.refresh();
    }

    /// Selects the contiguous run of ids between the pivot and `id`,
    /// inclusive, in the current filtered+ordered view; the pivot stays
    /// where it is so repeated shift-clicks re-extend from the same
    /// anchor.
    ///
    /// The literal index range is selected, disabled members included;
    /// callers that skip disabled items pick the endpoint with
    /// [`next_enabled_item_id`](Self::next_enabled_item_id) first. The
    /// operation is additive: ids outside the range stay selected.
    ///
    /// Degrades to [`select_item_by_id`](Self::select_item_by_id) in
    /// single mode, when no pivot is set, or when either endpoint is not
    /// in the current view. Unknown ids are a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use listview_core::item::{FieldValue, Item};
    /// use listview_core::list::Model;
    ///
    /// # #[derive(Clone)]
    /// # struct Row(String);
    /// # impl Item for Row {
    /// #     fn id(&self) -> &str { &self.0 }
    /// #     fn field(&self, _: &str) -> Option<FieldValue> { None }
    /// # }
    /// let mut model = Model::new()
    ///     .with_items(vec![Row("1".into()), Row("2".into()), Row("3".into())])
    ///     .with_multiple_selection(true);
    ///
    /// model.select_item_by_id("1"); // pivot = "1"
    /// model.select_all_items_from_pivot_to_item_by_id("3");
    /// assert_eq!(model.selected_item_ids(), ["1", "2", "3"]);
    /// assert_eq!(model.pivot_item_id(), Some("1"));
    /// ```
    pub fn select_all_items_from_pivot_to_item_by_id(&mut self, id: &str) {
        if !self.store.contains(id) {
            trace!("range select ignored, unknown id {:?}", id);
            return;
        }
        if !self.selection.allow_multiple() {
            self.select_item_by_id(id);
            return;
        }
        let pivot_pos = self
            .selection
            .pivot()
            .and_then(|pivot| self.view_ids.iter().position(|v| v == pivot));
        let target_pos = self.view_ids.iter().position(|v| v == id);
        match (pivot_pos, target_pos) {
            (Some(p), Some(t)) => {
                let (start, end) = if p <= t { (p, t) } else { (t, p) };
                let range: Vec<String> = self.view_ids[start..=end].to_vec();
                self.selection.add_range(&range);
                self.refresh();
                debug!(
                    "range select [{}..={}]: {} items selected",
                    start,
                    end,
                    self.selection.len()
                );
            }
            _ => self.select_item_by_id(id),
        }
    }

    /// Resolves `index` against the ordered (not filtered) view and
    /// selects that item like [`select_item_by_id`](Self::select_item_by_id).
    /// Out-of-range indices are a no-op.
    pub fn select_item_by_index(&mut self, index: usize) {
        match self.ordered_ids.get(index).cloned() {
            Some(id) => self.select_item_by_id(&id),
            None => trace!("select ignored, index {} out of range", index),
        }
    }

    /// Resolves every valid index of `indexes` against the ordered view
    /// and replaces the selection with the resolved items, anchoring the
    /// active id and pivot on the last one. Invalid indices are skipped;
    /// when none resolve the selection is left untouched. In single mode
    /// only the last resolved item is selected.
    pub fn select_items_by_indexes(&mut self, indexes: &[usize]) {
        let resolved: Vec<String> = indexes
            .iter()
            .filter_map(|&i| self.ordered_ids.get(i).cloned())
            .collect();
        if resolved.is_empty() {
            trace!("select ignored, no index in range");
            return;
        }
        self.selection.select_many(&resolved);
        self.refresh();
    }

    // -------------------------------------------------------------------
    // Enabled-item traversal
    // -------------------------------------------------------------------

    /// Returns the nearest enabled id after `id` in the current
    /// filtered+ordered view, or `None` at the end or when `id` is not in
    /// the view.
    pub fn next_enabled_item_id(&self, id: &str) -> Option<&str> {
        let pos = self.view_ids.iter().position(|v| v == id)?;
        self.view_ids[pos + 1..]
            .iter()
            .find(|v| self.is_enabled(v.as_str()))
            .map(String::as_str)
    }

    /// Returns the nearest enabled id before `id` in the current
    /// filtered+ordered view, or `None` at the start or when `id` is not
    /// in the view.
    pub fn prev_enabled_item_id(&self, id: &str) -> Option<&str> {
        let pos = self.view_ids.iter().position(|v| v == id)?;
        self.view_ids[..pos]
            .iter()
            .rev()
            .find(|v| self.is_enabled(v.as_str()))
            .map(String::as_str)
    }

    /// Returns the first enabled id of the current filtered+ordered view.
    pub fn first_enabled_item_id(&self) -> Option<&str> {
        self.view_ids
            .iter()
            .find(|v| self.is_enabled(v.as_str()))
            .map(String::as_str)
    }

    /// Returns the last enabled id of the current filtered+ordered view.
    pub fn last_enabled_item_id(&self) -> Option<&str> {
        self.view_ids
            .iter()
            .rev()
            .find(|v| self.is_enabled(v.as_str()))
            .map(String::as_str)
    }
}
