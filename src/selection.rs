//! Selection state for collection views.
//!
//! Tracks three coupled pieces of state by id: the ordered set of selected
//! ids, the *active* id (the current keyboard/focus target), and the *pivot*
//! id (the anchor of shift-click range selection). Ids stay valid across
//! filtering and re-sorting because selection is keyed on item identity, not
//! on view positions.
//!
//! Invariants kept by every operation:
//! - with `allow_multiple == false`, at most one id is selected;
//! - the active id, when set, is a member of the selected set.
//!
//! This component trusts its caller on id existence; the owning view checks
//! ids against the store before delegating here and drops stale ids after a
//! reload via [`Selection::retain`].

/// Selection, active-id, and pivot state for one collection view.
///
/// # Examples
///
/// ```
/// use listview_core::selection::Selection;
///
/// let mut selection = Selection::new().with_multiple(true);
/// selection.select("a");
/// selection.toggle("b");
/// assert_eq!(selection.ids(), ["a", "b"]);
/// assert_eq!(selection.active(), Some("b"));
///
/// selection.clear();
/// assert!(selection.is_empty());
/// assert_eq!(selection.active(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Vec<String>,
    active: Option<String>,
    pivot: Option<String>,
    allow_multiple: bool,
}

impl Selection {
    /// Creates an empty single-selection state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection mode (builder pattern).
    pub fn with_multiple(mut self, allow_multiple: bool) -> Self {
        self.set_allow_multiple(allow_multiple);
        self
    }

    /// Sets the selection mode.
    ///
    /// Switching from multi to single with several ids selected keeps the
    /// active one if set, otherwise the first selected id.
    pub fn set_allow_multiple(&mut self, allow_multiple: bool) {
        self.allow_multiple = allow_multiple;
        if !allow_multiple && self.selected.len() > 1 {
            let keep = self
                .active
                .clone()
                .unwrap_or_else(|| self.selected[0].clone());
            self.selected.retain(|id| *id == keep);
        }
    }

    /// Returns whether multiple ids may be selected at once.
    pub fn allow_multiple(&self) -> bool {
        self.allow_multiple
    }

    /// Returns the selected ids in selection order.
    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    /// Returns the number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns whether `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Returns the active id.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Returns the pivot id.
    pub fn pivot(&self) -> Option<&str> {
        self.pivot.as_deref()
    }

    /// Selects exactly `id`: any prior selection is cleared and both the
    /// active id and the pivot move to `id`.
    pub fn select(&mut self, id: &str) {
        self.selected.clear();
        self.selected.push(id.to_string());
        self.active = Some(id.to_string());
        self.pivot = Some(id.to_string());
    }

    /// Toggles `id`.
    ///
    /// Removing clears the active id (and the pivot) when `id` held that
    /// role. Adding sets the active id and pivot to `id`; in single mode the
    /// add replaces any prior selection.
    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.selected.retain(|s| s != id);
            if self.active.as_deref() == Some(id) {
                self.active = None;
            }
            if self.pivot.as_deref() == Some(id) {
                self.pivot = None;
            }
        } else if self.allow_multiple {
            self.selected.push(id.to_string());
            self.active = Some(id.to_string());
            self.pivot = Some(id.to_string());
        } else {
            self.select(id);
        }
    }

    /// Adds `id` without removing existing selections. In single mode this
    /// degrades to [`select`](Self::select).
    pub fn add(&mut self, id: &str) {
        if !self.allow_multiple {
            self.select(id);
        } else if !self.contains(id) {
            self.selected.push(id.to_string());
        }
    }

    /// Adds every id of `ids`. In single mode the last one wins.
    pub fn add_many(&mut self, ids: &[String]) {
        for id in ids {
            self.add(id);
        }
    }

    /// Removes `id` from the selection. The active id is cleared when it
    /// was `id`; the pivot is left in place so a running range gesture still
    /// has its anchor.
    pub fn remove(&mut self, id: &str) {
        self.selected.retain(|s| s != id);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }

    /// Removes every id of `ids`.
    pub fn remove_many(&mut self, ids: &[String]) {
        for id in ids {
            self.remove(id);
        }
    }

    /// Empties the selection and clears the active id and pivot.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.active = None;
        self.pivot = None;
    }

    /// Replaces the selection with `ids` and anchors the active id and
    /// pivot on the last one. In single mode only the last id survives.
    /// An empty `ids` behaves like [`clear`](Self::clear).
    pub fn select_many(&mut self, ids: &[String]) {
        self.clear();
        match ids.last() {
            Some(last) if !self.allow_multiple => self.select(last),
            Some(last) => {
                for id in ids {
                    if !self.contains(id) {
                        self.selected.push(id.clone());
                    }
                }
                self.active = Some(last.clone());
                self.pivot = Some(last.clone());
            }
            None => {}
        }
    }

    /// Adds a contiguous range of ids without touching the active id or
    /// pivot. Used for pivot-based range selection, which is additive.
    pub fn add_range(&mut self, ids: &[String]) {
        for id in ids {
            if !self.contains(id) {
                self.selected.push(id.clone());
            }
        }
    }

    /// Drops every selected id for which `keep` returns false, clearing the
    /// active id and pivot when their id is dropped. Called by the owning
    /// view after a reload so selection never points at items that no
    /// longer exist.
    pub fn retain<F: Fn(&str) -> bool>(&mut self, keep: F) {
        self.selected.retain(|id| keep(id));
        if matches!(self.active.as_deref(), Some(id) if !keep(id)) {
            self.active = None;
        }
        if matches!(self.pivot.as_deref(), Some(id) if !keep(id)) {
            self.pivot = None;
        }
    }
}
