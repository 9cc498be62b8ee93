//! Multi-key ordering for collection views.
//!
//! A sequence of [`Order`]s forms the comparator: keys are evaluated left to
//! right and ties fall through to the next key. Sorting is stable, so items
//! whose keys are fully equal keep their relative position from the sequence
//! being sorted. An empty sequence means "no explicit order" and leaves the
//! store's insertion order untouched.

use std::cmp::Ordering;

use crate::item::Item;
use crate::store::Store;

/// Direction of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// One sort key: a field name and a direction.
///
/// # Examples
///
/// ```
/// use listview_core::sort::{Order, SortMode};
///
/// let by_name = Order::asc("name");
/// let by_age = Order::new("age", SortMode::Descending);
/// assert_eq!(by_name.mode, SortMode::Ascending);
/// assert_eq!(by_age.field, "age");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// The field name handed to [`Item::field`].
    pub field: String,
    /// The direction.
    pub mode: SortMode,
}

impl Order {
    /// Creates a sort key.
    pub fn new(field: &str, mode: SortMode) -> Self {
        Self {
            field: field.to_string(),
            mode,
        }
    }

    /// Shorthand for an ascending key.
    pub fn asc(field: &str) -> Self {
        Self::new(field, SortMode::Ascending)
    }

    /// Shorthand for a descending key.
    pub fn desc(field: &str) -> Self {
        Self::new(field, SortMode::Descending)
    }
}

/// Compares two items under a sequence of sort keys.
///
/// Items missing a key's field order after items that have it; a
/// `Descending` key reverses that like any other comparison. Returns
/// `Ordering::Equal` when every key ties, leaving the decision to the
/// stable sort.
pub fn compare<I: Item>(orders: &[Order], a: &I, b: &I) -> Ordering {
    for order in orders {
        let ord = match (a.field(&order.field), b.field(&order.field)) {
            (Some(x), Some(y)) => x.compare(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        let ord = match order.mode {
            SortMode::Ascending => ord,
            SortMode::Descending => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Stable-sorts `ids` in place under `orders`, resolving each id against
/// `store`. With an empty `orders` the sequence is left as-is. Ids without a
/// backing item keep their position (they tie with everything).
pub fn apply<I: Item>(orders: &[Order], store: &Store<I>, ids: &mut [String]) {
    if orders.is_empty() {
        return;
    }
    ids.sort_by(|a, b| match (store.get(a), store.get(b)) {
        (Some(x), Some(y)) => compare(orders, x, y),
        _ => Ordering::Equal,
    });
}
