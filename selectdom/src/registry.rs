//! The option registry: the ordered set of choices behind one widget.
//!
//! Built once at widget creation and immutable afterwards, except for the
//! `hidden` overlay which the autocomplete filter toggles. Hiding an option
//! only affects rendering; it never changes what may be selected.

use std::collections::{HashMap, HashSet};

use crate::encode::SEPARATOR;
use crate::error::ConfigError;

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Ordered, immutable collection of options with O(1) lookup by value.
#[derive(Debug, Clone)]
pub struct Registry {
    options: Vec<SelectOption>,
    index: HashMap<String, usize>,
    hidden: HashSet<String>,
}

impl Registry {
    /// Validates uniqueness of values and, in multi mode, that no value
    /// contains the serialization separator.
    pub fn new(options: Vec<SelectOption>, multiple: bool) -> Result<Self, ConfigError> {
        let mut index = HashMap::with_capacity(options.len());
        for (i, option) in options.iter().enumerate() {
            if multiple && option.value.contains(SEPARATOR) {
                return Err(ConfigError::ReservedSeparator(option.value.clone()));
            }
            if index.insert(option.value.clone(), i).is_some() {
                return Err(ConfigError::DuplicateValue(option.value.clone()));
            }
        }
        Ok(Self {
            options,
            index,
            hidden: HashSet::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    pub fn at(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        self.index.get(value).map(|&i| &self.options[i])
    }

    /// Position of a value in registry order.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    /// Known and not disabled.
    pub fn is_selectable(&self, value: &str) -> bool {
        self.get(value).is_some_and(|option| !option.disabled)
    }

    /// Used for default selection in single mode.
    pub fn first_enabled(&self) -> Option<&SelectOption> {
        self.options.iter().find(|option| !option.disabled)
    }

    pub fn is_hidden(&self, value: &str) -> bool {
        self.hidden.contains(value)
    }

    /// Re-derive the hidden overlay from a filter query: an option stays
    /// visible when its label contains the query, case-insensitively.
    pub fn apply_filter(&mut self, query: &str) {
        let query = query.to_lowercase();
        self.hidden.clear();
        if query.is_empty() {
            return;
        }
        for option in &self.options {
            if !option.label.to_lowercase().contains(&query) {
                self.hidden.insert(option.value.clone());
            }
        }
    }

    pub fn clear_filter(&mut self) {
        self.hidden.clear();
    }
}
