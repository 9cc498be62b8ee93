#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/listview-core/")]

//! # listview-core
//!
//! A headless collection view engine for list-style widgets: one keyed item
//! set with coordinated filtered, ordered, paginated, and selected views
//! over it.
//!
//! ## Overview
//!
//! Data-bearing widgets (data grids, comboboxes, popup buttons, popup
//! menus) all answer the same questions: which rows match the search box,
//! in what order do they appear, which slice is on the current page, and
//! which rows are selected. This crate answers those questions once, behind
//! a single [`list::Model`], so the widget layer is only a renderer bound
//! to it. No rendering, focus handling, or event decoding lives here.
//!
//! ## Components
//!
//! - [`list::Model`] — the façade widgets bind to; recomputes every derived
//!   view eagerly after each mutation
//! - [`store`] — keyed item storage with stable insertion order
//! - [`filter`] — per-field predicates (`Equal`, `Like`, `Fuzzy`) with
//!   optional diacritic folding, AND-combined
//! - [`sort`] — stable multi-key ordering over runtime-typed field values
//! - [`paginator`] — 1-based, always-clamped page windowing
//! - [`selection`] — selected-id set, active id, and range-selection pivot
//!
//! Every operation is synchronous and total: unknown ids no-op, unknown
//! fields match nothing, out-of-range pages clamp. The calling widget can
//! always race a click against a reload without a crash path.
//!
//! ## Quick start
//!
//! ```rust
//! use listview_core::prelude::*;
//!
//! #[derive(Clone)]
//! struct Task {
//!     id: String,
//!     title: String,
//!     done: bool,
//! }
//!
//! impl Item for Task {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         match name {
//!             "title" => Some(self.title.as_str().into()),
//!             "done" => Some(self.done.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let task = |id: &str, title: &str, done: bool| Task {
//!     id: id.into(),
//!     title: title.into(),
//!     done,
//! };
//!
//! let mut tasks = Model::new()
//!     .with_items(vec![
//!         task("1", "Write docs", false),
//!         task("2", "Review patches", true),
//!         task("3", "Cut release", false),
//!     ])
//!     .with_multiple_selection(true);
//!
//! // Filter, sort, select; then re-read the views and render.
//! tasks.set_filter("done", false.into(), FilterOp::Equal, false);
//! tasks.order_by(vec![Order::asc("title")]);
//! tasks.select_all_items();
//!
//! assert_eq!(tasks.visible_item_ids(), ["3", "1"]);
//! assert_eq!(tasks.num_selected_items(), 2);
//! ```
//!
//! ## Identity contract
//!
//! Items are keyed by caller-assigned string ids. The engine never infers,
//! rewrites, or generates ids; selection and the active item stay keyed on
//! identity so they survive filtering and re-sorting unchanged.

pub mod filter;
pub mod item;
pub mod list;
pub mod paginator;
pub mod selection;
pub mod sort;
pub mod store;

pub use filter::{Filter, FilterOp};
pub use item::{FieldValue, Item};
pub use list::Model as List;
pub use paginator::Paginator;
pub use selection::Selection;
pub use sort::{Order, SortMode};
pub use store::Store;

/// Convenient re-exports of the types most consumers need.
///
/// # Examples
///
/// ```rust
/// use listview_core::prelude::*;
///
/// # #[derive(Clone)]
/// # struct Row(String);
/// # impl Item for Row {
/// #     fn id(&self) -> &str { &self.0 }
/// #     fn field(&self, _: &str) -> Option<FieldValue> { None }
/// # }
/// let model: Model<Row> = Model::new();
/// assert_eq!(model.num_items(), 0);
/// ```
pub mod prelude {
    pub use crate::filter::{Filter, FilterOp};
    pub use crate::item::{FieldValue, Item};
    pub use crate::list::Model;
    pub use crate::sort::{Order, SortMode};
}
