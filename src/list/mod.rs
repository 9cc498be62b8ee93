//! Collection view model: filtering, sorting, pagination, and selection
//! behind one façade.
//!
//! This module exposes a generic [`Model<I: Item>`](Model) that data-bearing
//! widgets (grids, comboboxes, popup menus) bind to. The widget layer owns
//! rendering and event decoding; the model owns every data question:
//!
//! - which items pass the installed per-field filters,
//! - how the collection orders under the installed sort keys,
//! - which slice of the filtered+ordered sequence is on the current page,
//! - which ids are selected, which one is active, and where the range
//!   selection pivot sits.
//!
//! ## Architecture
//!
//! The model composes one engine per concern ([`crate::store`],
//! [`crate::filter`], [`crate::sort`], [`crate::paginator`],
//! [`crate::selection`]) and recomputes the derived views eagerly after
//! every mutation, in a fixed dependency order (filter, sort, page window,
//! selection recheck). Consumers pull the views and counts after mutating;
//! there are no change events at this layer.
//!
//! ## Identity
//!
//! Everything is keyed on caller-assigned string ids. Ids are never
//! inferred, rewritten, or invented by the model, and referencing an id
//! that does not exist is always absorbed (no-op or empty result), never an
//! error: in the calling widgets a click can legitimately race a reload.
//!
//! # Examples
//!
//! ```
//! use listview_core::item::{FieldValue, Item};
//! use listview_core::list::Model;
//! use listview_core::sort::Order;
//!
//! #[derive(Clone)]
//! struct Contact {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Item for Contact {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         (name == "name").then(|| self.name.as_str().into())
//!     }
//! }
//!
//! let contact = |id: &str, name: &str| Contact { id: id.into(), name: name.into() };
//! let mut model = Model::new()
//!     .with_items(vec![
//!         contact("1", "Alice"),
//!         contact("2", "Bob"),
//!         contact("3", "Carol"),
//!     ])
//!     .with_items_per_page(2);
//!
//! model.order_by(vec![Order::desc("name")]);
//! assert_eq!(model.visible_item_ids(), ["3", "2"]);
//!
//! model.set_page(2);
//! assert_eq!(model.visible_item_ids(), ["1"]);
//! ```

mod api;
mod model;

#[cfg(test)]
mod tests;

pub use model::Model;
