//! Per-field filtering for collection views.
//!
//! A [`FilterSet`] holds at most one [`Filter`] per field; an item is
//! filtered-in when it satisfies every installed filter (logical AND). All
//! matching happens on stringified [`FieldValue`]s, so filters work the same
//! on text, numbers, and timestamps.
//!
//! Matching never fails: a filter on a field the item does not expose simply
//! does not match, mirroring how a stale column filter behaves after the
//! host widget swaps its data source.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::borrow::Cow;

use crate::item::{FieldValue, Item};

/// How a filter value is matched against an item's field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact, case-sensitive equality of the stringified values.
    Equal,
    /// Case-insensitive substring containment, "search box" style. An empty
    /// filter value matches every item.
    Like,
    /// Case-insensitive fuzzy subsequence match, find-as-you-type style. An
    /// empty filter value matches every item.
    Fuzzy,
}

/// A single per-field predicate.
///
/// # Examples
///
/// ```
/// use listview_core::filter::{Filter, FilterOp};
/// use listview_core::item::{FieldValue, Item};
///
/// #[derive(Clone)]
/// struct Person {
///     id: String,
///     name: String,
/// }
///
/// impl Item for Person {
///     fn id(&self) -> &str {
///         &self.id
///     }
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         (name == "name").then(|| self.name.as_str().into())
///     }
/// }
///
/// let alice = Person { id: "1".into(), name: "Alice".into() };
/// let filter = Filter::new("name", "li".into(), FilterOp::Like);
/// assert!(filter.matches(&alice));
/// ```
#[derive(Debug, Clone)]
pub struct Filter {
    /// The field name handed to [`Item::field`].
    pub field: String,
    /// The value matched against the item's field value.
    pub value: FieldValue,
    /// The matching operator.
    pub op: FilterOp,
    /// Fold diacritics on both sides before matching ("é" matches "e").
    pub normalize_diacritics: bool,
}

impl Filter {
    /// Creates a filter without diacritic folding.
    pub fn new(field: &str, value: FieldValue, op: FilterOp) -> Self {
        Self {
            field: field.to_string(),
            value,
            op,
            normalize_diacritics: false,
        }
    }

    /// Sets diacritic folding (builder pattern).
    pub fn with_diacritic_folding(mut self, fold: bool) -> Self {
        self.normalize_diacritics = fold;
        self
    }

    /// Evaluates this filter against one item.
    ///
    /// An empty `Like` or `Fuzzy` value matches unconditionally; otherwise
    /// an item missing the field never matches.
    pub fn matches<I: Item>(&self, item: &I) -> bool {
        let wanted = self.value.to_string();
        if wanted.is_empty() && matches!(self.op, FilterOp::Like | FilterOp::Fuzzy) {
            return true;
        }
        let Some(actual) = item.field(&self.field) else {
            return false;
        };
        let actual = actual.to_string();
        let (actual, wanted) = if self.normalize_diacritics {
            (
                fold_diacritics(&actual).into_owned(),
                fold_diacritics(&wanted).into_owned(),
            )
        } else {
            (actual, wanted)
        };
        match self.op {
            FilterOp::Equal => actual == wanted,
            FilterOp::Like => actual.to_lowercase().contains(&wanted.to_lowercase()),
            FilterOp::Fuzzy => SkimMatcherV2::default()
                .fuzzy_match(&actual, &wanted)
                .is_some(),
        }
    }
}

/// The set of installed filters, at most one per field.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `filter`, replacing any existing filter on the same field.
    pub fn set(&mut self, filter: Filter) {
        match self.filters.iter_mut().find(|f| f.field == filter.field) {
            Some(slot) => *slot = filter,
            None => self.filters.push(filter),
        }
    }

    /// Removes the filter on `field`. Unknown fields are a no-op.
    pub fn remove(&mut self, field: &str) {
        self.filters.retain(|f| f.field != field);
    }

    /// Removes the filters on each of `fields`.
    pub fn remove_many(&mut self, fields: &[&str]) {
        self.filters.retain(|f| !fields.contains(&f.field.as_str()));
    }

    /// Removes every filter.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Replaces the whole set atomically. Later entries on the same field
    /// win, keeping the one-filter-per-field invariant.
    pub fn replace_all(&mut self, filters: Vec<Filter>) {
        self.filters.clear();
        for filter in filters {
            self.set(filter);
        }
    }

    /// Returns the installed filters in install order.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Returns whether no filter is installed.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns whether `item` satisfies every installed filter.
    pub fn matches<I: Item>(&self, item: &I) -> bool {
        self.filters.iter().all(|f| f.matches(item))
    }
}

/// Strips diacritic marks from `s`: precomposed Latin letters map to their
/// base letter and combining marks (U+0300..=U+036F) are removed, so both
/// "é" and "e\u{301}" fold to "e". ASCII input is returned as-is without
/// allocating.
pub fn fold_diacritics(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if ('\u{0300}'..='\u{036f}').contains(&c) {
            continue;
        }
        out.push(fold_char(c));
    }
    Cow::Owned(out)
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => 'c',
        'Ç' | 'Ć' | 'Č' | 'Ĉ' | 'Ċ' => 'C',
        'ď' | 'đ' => 'd',
        'Ď' | 'Đ' => 'D',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => 'G',
        'í' | 'ì' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'I',
        'ĺ' | 'ļ' | 'ľ' | 'ł' => 'l',
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ł' => 'L',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => 'N',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => 'O',
        'ŕ' | 'ř' => 'r',
        'Ŕ' | 'Ř' => 'R',
        'ś' | 'š' | 'ş' | 'ŝ' => 's',
        'Ś' | 'Š' | 'Ş' | 'Ŝ' => 'S',
        'ť' | 'ţ' | 'ŧ' => 't',
        'Ť' | 'Ţ' | 'Ŧ' => 'T',
        'ú' | 'ù' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' | 'Ÿ' => 'Y',
        'ź' | 'ż' | 'ž' => 'z',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        other => other,
    }
}
