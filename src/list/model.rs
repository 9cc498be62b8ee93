//! Main Model struct and derived-view recomputation for collection views.
//!
//! This module contains the primary Model struct that owns the item store
//! and the filter, sort, pagination, and selection engines, together with
//! the eager recompute pass that keeps the derived views consistent after
//! every mutation.

use std::collections::HashSet;

use log::debug;

use crate::filter::FilterSet;
use crate::item::Item;
use crate::paginator::Paginator;
use crate::selection::Selection;
use crate::sort::{self, Order};
use crate::store::Store;

/// A collection view engine: one keyed item set with four coordinated
/// derived views over it (filtered, ordered, visible, selected).
///
/// Widgets bind to one `Model` per logical list and delegate every data
/// question to it; the widget renders, the model decides. All operations
/// are synchronous and total: unknown ids are absorbed as no-ops, unknown
/// fields match nothing, and out-of-range pages clamp.
///
/// # Derived views
///
/// After every mutation the model recomputes, in order:
///
/// 1. **filtered** — ids passing all installed filters, in store order;
/// 2. **ordered** — all ids under the installed sort keys;
/// 3. **visible** — the current page window of the filtered ids under the
///    installed sort keys;
/// 4. selection recheck — selected/active/pivot ids that no longer exist
///    in the store are dropped.
///
/// That ordering guarantees `visible ⊆ filtered ⊆ all` and keeps every
/// count consistent with every other.
///
/// # Examples
///
/// ```
/// use listview_core::item::{FieldValue, Item};
/// use listview_core::list::Model;
///
/// #[derive(Clone)]
/// struct Fruit {
///     id: String,
///     name: String,
/// }
///
/// impl Item for Fruit {
///     fn id(&self) -> &str {
///         &self.id
///     }
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         (name == "name").then(|| self.name.as_str().into())
///     }
/// }
///
/// let fruit = |id: &str, name: &str| Fruit { id: id.into(), name: name.into() };
/// let model = Model::new().with_items(vec![fruit("1", "Apple"), fruit("2", "Banana")]);
/// assert_eq!(model.num_items(), 2);
/// assert_eq!(model.visible_item_ids(), ["1", "2"]);
/// ```
#[derive(Debug, Clone)]
pub struct Model<I: Item> {
    pub(super) store: Store<I>,
    pub(super) filters: FilterSet,
    pub(super) orders: Vec<Order>,
    pub(super) paginator: Paginator,
    pub(super) selection: Selection,

    // Derived views, rebuilt by refresh() after every mutation.
    pub(super) filtered_ids: Vec<String>,
    pub(super) ordered_ids: Vec<String>,
    /// Filtered ids under the current sort keys; the visible window is a
    /// slice of this sequence and range selection indexes into it.
    pub(super) view_ids: Vec<String>,
    pub(super) visible_ids: Vec<String>,
}

impl<I: Item> Model<I> {
    /// Creates an empty model: no items, no filters, no sort keys, the
    /// "no pagination" page size, and single-selection mode.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            filters: FilterSet::new(),
            orders: Vec::new(),
            paginator: Paginator::new(),
            selection: Selection::new(),
            filtered_ids: Vec::new(),
            ordered_ids: Vec::new(),
            view_ids: Vec::new(),
            visible_ids: Vec::new(),
        }
    }

    /// Loads `items` into the model (builder pattern).
    pub fn with_items(mut self, items: Vec<I>) -> Self {
        self.load(items);
        self
    }

    /// Sets the page size (builder pattern).
    pub fn with_items_per_page(mut self, per_page: usize) -> Self {
        self.set_items_per_page(per_page);
        self
    }

    /// Sets the selection mode (builder pattern).
    pub fn with_multiple_selection(mut self, allow_multiple: bool) -> Self {
        self.set_allow_multiple(allow_multiple);
        self
    }

    /// Replaces the whole collection, in array order, deduplicating by id
    /// (last write wins).
    ///
    /// Selection, active id, pivot, and page reset to their initial state;
    /// installed filters and sort keys survive and apply to the new items
    /// immediately.
    pub fn load(&mut self, items: Vec<I>) {
        let requested = items.len();
        self.store.load(items);
        self.selection.clear();
        self.paginator.set_page(1);
        // The new collection starts from store order; nothing of the old
        // derived sequences is a meaningful tie-break seed anymore.
        self.ordered_ids.clear();
        self.view_ids.clear();
        self.refresh();
        debug!(
            "loaded {} items ({} unique ids), {} filtered in",
            requested,
            self.store.len(),
            self.filtered_ids.len()
        );
    }

    /// Empties the collection. Same resets as [`load`](Self::load) with no
    /// items.
    pub fn clear(&mut self) {
        self.store.clear();
        self.selection.clear();
        self.paginator.set_page(1);
        self.ordered_ids.clear();
        self.view_ids.clear();
        self.refresh();
    }

    // -------------------------------------------------------------------
    // Counts
    // -------------------------------------------------------------------

    /// Returns the number of items in the store.
    pub fn num_items(&self) -> usize {
        self.store.len()
    }

    /// Returns the number of filtered-in items.
    pub fn num_filtered_items(&self) -> usize {
        self.filtered_ids.len()
    }

    /// Returns the number of filtered-in items that are not disabled.
    pub fn num_enabled_filtered_items(&self) -> usize {
        self.filtered_ids
            .iter()
            .filter(|id| self.is_enabled(id.as_str()))
            .count()
    }

    /// Returns the number of selected items.
    pub fn num_selected_items(&self) -> usize {
        self.selection.len()
    }

    /// Returns the number of items on the current page.
    pub fn num_visible_items(&self) -> usize {
        self.visible_ids.len()
    }

    /// Returns the number of pages over the filtered items (at least 1).
    pub fn num_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    /// Returns whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // -------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------

    /// Returns the item with the given id, or `None`.
    pub fn get(&self, id: &str) -> Option<&I> {
        self.store.get(id)
    }

    /// Returns clones of the items for `ids` that exist, in the order of
    /// `ids`, silently skipping unknown ones.
    pub fn get_many(&self, ids: &[String]) -> Vec<I> {
        self.store.get_many(ids)
    }

    /// Returns every id in store (insertion) order.
    pub fn item_ids(&self) -> &[String] {
        self.store.ids()
    }

    /// Returns every item in store order.
    pub fn items(&self) -> Vec<I> {
        self.store.get_many(self.store.ids())
    }

    /// Returns the filtered-in ids, in store order.
    pub fn filtered_item_ids(&self) -> &[String] {
        &self.filtered_ids
    }

    /// Returns the filtered-in items, in store order.
    pub fn filtered_items(&self) -> Vec<I> {
        self.store.get_many(&self.filtered_ids)
    }

    /// Returns every id under the current sort keys, ignoring filters.
    pub fn ordered_item_ids(&self) -> &[String] {
        &self.ordered_ids
    }

    /// Returns every item under the current sort keys, ignoring filters.
    pub fn ordered_items(&self) -> Vec<I> {
        self.store.get_many(&self.ordered_ids)
    }

    /// Returns the ids on the current page: filtered, sorted, and sliced
    /// to the page window.
    pub fn visible_item_ids(&self) -> &[String] {
        &self.visible_ids
    }

    /// Returns the items on the current page.
    pub fn visible_items(&self) -> Vec<I> {
        self.store.get_many(&self.visible_ids)
    }

    // -------------------------------------------------------------------
    // Recompute
    // -------------------------------------------------------------------

    pub(super) fn is_enabled(&self, id: &str) -> bool {
        self.store.get(id).is_some_and(|item| !item.is_disabled())
    }

    /// Recomputes every derived view. Runs after each mutation, in the
    /// fixed order filter, sort, page window, selection recheck, so the
    /// views can never be observed mid-update.
    pub(super) fn refresh(&mut self) {
        self.filtered_ids = self
            .store
            .iter()
            .filter(|item| self.filters.matches(*item))
            .map(|item| item.id().to_string())
            .collect();

        if self.orders.is_empty() {
            // No explicit order: store insertion order everywhere.
            self.ordered_ids = self.store.ids().to_vec();
            self.view_ids = self.filtered_ids.clone();
        } else {
            // Re-sort the previously derived sequences so fully tied keys
            // keep their relative position across repeated sorts.
            self.ordered_ids = resync(&self.ordered_ids, self.store.ids());
            sort::apply(&self.orders, &self.store, &mut self.ordered_ids);
            self.view_ids = resync(&self.view_ids, &self.filtered_ids);
            sort::apply(&self.orders, &self.store, &mut self.view_ids);
        }

        self.paginator.set_total_items(self.filtered_ids.len());
        let (start, end) = self.paginator.slice_bounds(self.view_ids.len());
        self.visible_ids = self.view_ids[start..end].to_vec();

        let store = &self.store;
        self.selection.retain(|id| store.contains(id));
    }
}

impl<I: Item> Default for Model<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuilds a derived id sequence after membership changed: survivors keep
/// their previous relative order, newcomers append in `wanted` order.
fn resync(prev: &[String], wanted: &[String]) -> Vec<String> {
    let want: HashSet<&str> = wanted.iter().map(String::as_str).collect();
    let mut out: Vec<String> = prev
        .iter()
        .filter(|id| want.contains(id.as_str()))
        .cloned()
        .collect();
    if out.len() < wanted.len() {
        let have: HashSet<&str> = out.iter().map(String::as_str).collect();
        let newcomers: Vec<String> = wanted
            .iter()
            .filter(|id| !have.contains(id.as_str()))
            .cloned()
            .collect();
        out.extend(newcomers);
    }
    out
}
