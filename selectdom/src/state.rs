//! The value state machine: the single source of truth for what is selected.
//!
//! Fully headless: it knows nothing about rendering or events. Every
//! operation either fully applies or fully no-ops, and the caller learns
//! which through the return value so it can decide about notification.

use crate::registry::Registry;

/// Current selection, scalar in single mode, ordered set in multi mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue {
    Single(Option<String>),
    Multi(Vec<String>),
}

impl SelectValue {
    pub fn is_empty(&self) -> bool {
        match self {
            SelectValue::Single(value) => value.is_none(),
            SelectValue::Multi(values) => values.is_empty(),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            SelectValue::Single(value) => value.as_deref(),
            SelectValue::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> &[String] {
        match self {
            SelectValue::Single(_) => &[],
            SelectValue::Multi(values) => values,
        }
    }
}

/// Result of a multi-mode mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Selection changed; the caller should notify.
    Changed,
    /// Requested state equals current state, or every candidate was
    /// unknown/disabled. No notification.
    Unchanged,
    /// The candidate set would exceed the configured limit; selection is
    /// untouched and the caller should report the limit instead.
    LimitExceeded,
}

#[derive(Debug, Clone)]
pub struct SelectState {
    multiple: bool,
    limit: Option<usize>,
    single: Option<String>,
    multi: Vec<String>,
}

impl SelectState {
    /// Single-mode state. An invalid or missing initial value falls back to
    /// the first non-disabled option in registry order (initialization, so
    /// the caller must not notify).
    pub fn new_single(registry: &Registry, initial: Option<&str>) -> Self {
        let single = initial
            .filter(|value| registry.is_selectable(value))
            .map(String::from)
            .or_else(|| registry.first_enabled().map(|option| option.value.clone()));
        Self {
            multiple: false,
            limit: None,
            single,
            multi: Vec::new(),
        }
    }

    /// Multi-mode state. Unknown and disabled initial values are dropped,
    /// duplicates deduplicated in first-seen order, and anything past the
    /// limit trimmed.
    pub fn new_multi(registry: &Registry, initial: &[String], limit: Option<usize>) -> Self {
        let mut multi = sanitize(registry, initial);
        if let Some(limit) = limit {
            multi.truncate(limit);
        }
        Self {
            multiple: true,
            limit,
            single: None,
            multi,
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn value(&self) -> SelectValue {
        if self.multiple {
            SelectValue::Multi(self.multi.clone())
        } else {
            SelectValue::Single(self.single.clone())
        }
    }

    pub fn single(&self) -> Option<&str> {
        self.single.as_deref()
    }

    pub fn selected(&self) -> &[String] {
        &self.multi
    }

    pub fn is_selected(&self, value: &str) -> bool {
        if self.multiple {
            self.multi.iter().any(|v| v == value)
        } else {
            self.single.as_deref() == Some(value)
        }
    }

    /// Set the single-mode value. `None` (or empty string) clears.
    /// Returns true when the selection changed; false on a no-op (equal
    /// value) or a silent rejection (disabled or unknown value).
    pub fn set_single(&mut self, registry: &Registry, value: Option<&str>) -> bool {
        let value = value.filter(|v| !v.is_empty());

        if let Some(v) = value {
            if !registry.is_selectable(v) {
                log::debug!("rejected single-select of `{v}` (disabled or unknown)");
                return false;
            }
        }

        if self.single.as_deref() == value {
            return false;
        }

        self.single = value.map(String::from);
        true
    }

    /// Replace the multi-mode selection. Candidates are filtered to known,
    /// non-disabled values and deduplicated in first-seen order; the whole
    /// operation is rejected when the result would exceed the limit.
    pub fn set_multiple(&mut self, registry: &Registry, values: &[String]) -> SetOutcome {
        let candidates = sanitize(registry, values);

        if let Some(limit) = self.limit {
            if candidates.len() > limit {
                log::debug!(
                    "rejected multi-select of {} values (limit {limit})",
                    candidates.len()
                );
                return SetOutcome::LimitExceeded;
            }
        }

        if candidates == self.multi {
            return SetOutcome::Unchanged;
        }

        self.multi = candidates;
        SetOutcome::Changed
    }

    /// Toggle one value in multi mode. Removal is always allowed, even for
    /// values that are disabled in the registry; addition goes through
    /// `set_multiple` so the limit and disabled checks apply.
    pub fn toggle(&mut self, registry: &Registry, value: &str) -> SetOutcome {
        if let Some(pos) = self.multi.iter().position(|v| v == value) {
            self.multi.remove(pos);
            return SetOutcome::Changed;
        }

        let mut candidates = self.multi.clone();
        candidates.push(value.to_string());
        self.set_multiple(registry, candidates.as_slice())
    }

    /// Clear to "no selection". The caller always notifies after a reset.
    pub fn reset(&mut self) {
        self.single = None;
        self.multi.clear();
    }

    /// Drop most-recently-added entries until the selection fits `limit`.
    /// Returns whether anything was removed. Never notifies by itself, so
    /// it is safe to call from inside a change handler.
    pub fn trim(&mut self, limit: usize) -> bool {
        if self.multi.len() <= limit {
            return false;
        }
        self.multi.truncate(limit);
        true
    }
}

/// Filter to selectable values, deduplicating in first-seen order.
fn sanitize(registry: &Registry, values: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if registry.is_selectable(value) && !result.contains(value) {
            result.push(value.clone());
        }
    }
    result
}
