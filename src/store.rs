//! Keyed item storage with stable insertion order.
//!
//! The store is replaced wholesale by [`Store::load`]; there is no
//! incremental insert/remove in the consumer contract. Insertion order is
//! the base order every view falls back to when no explicit sort is
//! installed.

use std::collections::HashMap;

use crate::item::Item;

/// An ordered mapping from id to item.
///
/// Ids are unique: loading two items with the same id keeps the position of
/// the first occurrence and the value of the last (last write wins). All
/// lookups are total; unknown ids yield `None` or are skipped.
///
/// # Examples
///
/// ```
/// use listview_core::item::{FieldValue, Item};
/// use listview_core::store::Store;
///
/// #[derive(Clone)]
/// struct Row(String);
///
/// impl Item for Row {
///     fn id(&self) -> &str {
///         &self.0
///     }
///     fn field(&self, _name: &str) -> Option<FieldValue> {
///         None
///     }
/// }
///
/// let mut store = Store::new();
/// store.load(vec![Row("a".into()), Row("b".into()), Row("a".into())]);
/// assert_eq!(store.len(), 2); // duplicate "a" collapsed
/// assert_eq!(store.ids(), ["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Store<I: Item> {
    order: Vec<String>,
    items: HashMap<String, I>,
}

impl<I: Item> Store<I> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            items: HashMap::new(),
        }
    }

    /// Replaces the whole collection with `items`, in array order.
    ///
    /// Duplicate ids collapse to a single entry: the first occurrence fixes
    /// the position, the last occurrence provides the value.
    pub fn load(&mut self, items: Vec<I>) {
        self.order.clear();
        self.items.clear();
        for item in items {
            let id = item.id().to_string();
            if self.items.insert(id.clone(), item).is_none() {
                self.order.push(id);
            }
        }
    }

    /// Returns the item with the given id, or `None`.
    pub fn get(&self, id: &str) -> Option<&I> {
        self.items.get(id)
    }

    /// Returns clones of the items for `ids` that exist, preserving the
    /// order of `ids` and silently skipping unknown ones.
    pub fn get_many(&self, ids: &[String]) -> Vec<I> {
        ids.iter()
            .filter_map(|id| self.items.get(id.as_str()).cloned())
            .collect()
    }

    /// Returns whether an item with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Returns the ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Iterates the items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &I> {
        self.order.iter().filter_map(|id| self.items.get(id.as_str()))
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.order.clear();
        self.items.clear();
    }
}

impl<I: Item> Default for Store<I> {
    fn default() -> Self {
        Self::new()
    }
}
