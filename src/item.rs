//! Item identity and field access for collection views.
//!
//! The engine is generic over the item shape. Callers implement [`Item`] to
//! hand the engine three things: a stable string id, an optional disabled
//! flag, and a by-name accessor returning a [`FieldValue`]. The accessor is
//! what makes runtime-selected filter and sort fields possible without any
//! reflection: the engine asks for `item.field("name")` and the item decides
//! what that means.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// A runtime-typed scalar produced by [`Item::field`].
///
/// Filters compare the stringified form (see the `Display` impl); sort keys
/// compare typed where both sides agree on a kind, so numbers order
/// numerically and timestamps chronologically rather than as text.
///
/// # Examples
///
/// ```
/// use listview_core::item::FieldValue;
///
/// let a = FieldValue::from(2);
/// let b = FieldValue::from(10);
/// // Numeric, not lexicographic: 2 < 10.
/// assert!(a.compare(&b).is_lt());
/// assert_eq!(b.to_string(), "10");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A text value. Compares lexicographically.
    Text(String),
    /// An integer value. Compares numerically, also against `Float`.
    Integer(i64),
    /// A floating-point value. Compares via `f64::total_cmp`.
    Float(f64),
    /// A boolean value. `false` orders before `true`.
    Bool(bool),
    /// A point in time. Compares chronologically.
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// Compares two values with a total order.
    ///
    /// Same-kind pairs compare typed. `Integer` and `Float` compare with
    /// each other numerically. Any other mixed pair compares by stringified
    /// form, so the order is always defined no matter what a caller's
    /// `field` accessor returns for different items.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Text(a), Text(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Bool(a), Bool(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::DateTime(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Integer(n as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Float(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::DateTime(t)
    }
}

/// Trait for items managed by a collection view.
///
/// The id is assigned by the caller and never inferred or rewritten by the
/// engine; it only needs to be unique within one loaded collection. Disabled
/// items stay visible and filterable but are excluded from "select all" and
/// from enabled-item traversal.
///
/// # Examples
///
/// ```
/// use listview_core::item::{FieldValue, Item};
///
/// #[derive(Clone)]
/// struct Employee {
///     id: String,
///     name: String,
///     salary: i64,
/// }
///
/// impl Item for Employee {
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         match name {
///             "name" => Some(self.name.as_str().into()),
///             "salary" => Some(self.salary.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Item: Clone {
    /// Returns the caller-assigned, stable id of this item.
    fn id(&self) -> &str;

    /// Returns whether this item is disabled.
    ///
    /// Disabled items remain in the filtered and ordered views but are
    /// skipped by `select_all_items` and by enabled-item traversal.
    fn is_disabled(&self) -> bool {
        false
    }

    /// Returns the value of the named field, or `None` when the item does
    /// not expose a field by that name.
    ///
    /// A filter or sort key naming an unknown field degrades to "no match"
    /// / "sorts last" instead of failing.
    fn field(&self, name: &str) -> Option<FieldValue>;
}
