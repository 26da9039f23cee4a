//! Backing form fields.
//!
//! Every select widget is paired with one plain text-valued field. The
//! widget keeps the field's value consistent with its selection state and
//! fires the field's change subscribers on every user-driven change; host
//! logic observes the field, not the widget.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
    Hidden,
}

type ChangeListener = Box<dyn FnMut(&str)>;

pub struct FormField {
    name: String,
    kind: FieldKind,
    value: String,
    listeners: Vec<ChangeListener>,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            listeners: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Register a change observer. Subscribers see the new value after it
    /// has been stored, so reading the field from inside one is consistent.
    pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Set the value and fire change subscribers (user-driven change).
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        let value = self.value.clone();
        for listener in &mut self.listeners {
            listener(&value);
        }
    }

    /// Set the value without notifying. Used for initialization, where
    /// widget construction must not look like a user action.
    pub fn set_silent(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
