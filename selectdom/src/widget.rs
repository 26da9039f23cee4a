//! The select widget: interaction controller plus the public handle.
//!
//! Owns one registry, one value state machine and one backing field. All
//! event handling is synchronous: a click or key press mutates state,
//! updates the backing field and fires callbacks before the next event is
//! looked at.

use crate::config::{ChangeCallback, LimitCallback, SelectConfig};
use crate::error::ConfigError;
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::field::{FieldKind, FormField};
use crate::filter::{FilterEdit, FilterInput};
use crate::hit::hit_test;
use crate::layout::Layout;
use crate::registry::{Registry, SelectOption};
use crate::state::{SelectState, SelectValue, SetOutcome};
use crate::style::SelectPalette;

pub(crate) const REGION_SELECT: &str = "select";
pub(crate) const REGION_FILTER: &str = "filter";
pub(crate) const OPTION_PREFIX: &str = "option:";
pub(crate) const TAG_PREFIX: &str = "tag:";

const DEFAULT_ICON: char = '×';

/// Build a select widget over a backing text field.
///
/// Fails fast with a `ConfigError` on a non-text field, duplicate option
/// values, or (multi mode) values containing the reserved separator. After
/// construction the backing field already reflects the initial selection,
/// without any change notification having fired.
pub fn create_select(
    field: FormField,
    options: Vec<SelectOption>,
    config: SelectConfig,
) -> Result<SelectWidget, ConfigError> {
    if field.kind() != FieldKind::Text {
        return Err(ConfigError::WrongFieldKind {
            name: field.name().to_string(),
            kind: field.kind(),
            expected: FieldKind::Text,
        });
    }

    let registry = Registry::new(options, config.multiple)?;

    let state = if config.multiple {
        let initial: Vec<String> = match &config.initial {
            Some(SelectValue::Multi(values)) => values.clone(),
            Some(SelectValue::Single(Some(value))) => vec![value.clone()],
            _ => Vec::new(),
        };
        SelectState::new_multi(&registry, &initial, config.limit)
    } else {
        let initial = match &config.initial {
            Some(SelectValue::Single(value)) => value.as_deref(),
            Some(SelectValue::Multi(values)) => values.first().map(String::as_str),
            None => None,
        };
        SelectState::new_single(&registry, initial)
    };

    let mut widget = SelectWidget {
        registry,
        state,
        field,
        placeholder: config.placeholder,
        autocomplete: config.autocomplete,
        short_tags: config.short_tags,
        icon: config.icon.unwrap_or(DEFAULT_ICON),
        palette: config.palette.unwrap_or_default(),
        on_change: config.on_change,
        on_limit: config.on_limit,
        opened: false,
        filter: FilterInput::new(),
        layout: Layout::new(),
    };
    widget.sync_field(false);
    Ok(widget)
}

pub struct SelectWidget {
    pub(crate) registry: Registry,
    pub(crate) state: SelectState,
    pub(crate) field: FormField,
    pub(crate) placeholder: String,
    pub(crate) autocomplete: bool,
    pub(crate) short_tags: bool,
    pub(crate) icon: char,
    pub(crate) palette: SelectPalette,
    on_change: Option<ChangeCallback>,
    on_limit: Option<LimitCallback>,
    pub(crate) opened: bool,
    pub(crate) filter: FilterInput,
    pub(crate) layout: Layout,
}

impl std::fmt::Debug for SelectWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectWidget").finish_non_exhaustive()
    }
}

impl SelectWidget {
    pub fn value(&self) -> SelectValue {
        self.state.value()
    }

    /// Set the value through the state machine rules. Counts as a user
    /// action: a successful change updates the backing field and notifies.
    /// Returns false on a no-op or a rejection.
    pub fn set_value(&mut self, value: &SelectValue) -> bool {
        match value {
            SelectValue::Single(v) if !self.state.is_multiple() => {
                if self.state.set_single(&self.registry, v.as_deref()) {
                    self.after_change();
                    true
                } else {
                    false
                }
            }
            SelectValue::Multi(values) if self.state.is_multiple() => {
                match self.state.set_multiple(&self.registry, values) {
                    SetOutcome::Changed => {
                        self.after_change();
                        true
                    }
                    SetOutcome::LimitExceeded => {
                        self.fire_limit();
                        false
                    }
                    SetOutcome::Unchanged => false,
                }
            }
            _ => {
                log::debug!(
                    "mismatched value mode for select `{}`",
                    self.field.name()
                );
                false
            }
        }
    }

    /// Clear the selection. Always notifies, regardless of prior state.
    pub fn reset(&mut self) {
        self.state.reset();
        self.after_change();
    }

    /// Enforce an upper bound on the multi selection without notifying.
    /// The backing field is still kept consistent (silently), so this is
    /// safe to call from inside a change observer.
    pub fn trim(&mut self, limit: usize) -> bool {
        if self.state.trim(limit) {
            self.sync_field(false);
            true
        } else {
            false
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn open(&mut self) {
        if self.opened {
            return;
        }
        self.opened = true;
        if self.autocomplete {
            self.filter.clear();
            self.registry.clear_filter();
        }
        log::debug!("select `{}` opened", self.field.name());
    }

    pub fn close(&mut self) {
        if !self.opened {
            return;
        }
        self.opened = false;
        log::debug!("select `{}` closed", self.field.name());
    }

    /// Advance to the next non-disabled option in registry order (single
    /// mode). No wrap-around: returns false at the last option.
    pub fn next(&mut self) -> bool {
        if self.state.is_multiple() {
            return false;
        }
        let from = self
            .state
            .single()
            .and_then(|value| self.registry.position(value))
            .map_or(0, |pos| pos + 1);
        let target = (from..self.registry.len()).find_map(|i| {
            let option = self.registry.at(i)?;
            (!option.disabled).then(|| option.value.clone())
        });
        match target {
            Some(value) => {
                if self.state.set_single(&self.registry, Some(&value)) {
                    self.after_change();
                }
                true
            }
            None => false,
        }
    }

    /// Mirror of `next`: previous non-disabled option, no wrap-around.
    pub fn prev(&mut self) -> bool {
        if self.state.is_multiple() {
            return false;
        }
        let Some(pos) = self
            .state
            .single()
            .and_then(|value| self.registry.position(value))
        else {
            return false;
        };
        let target = (0..pos).rev().find_map(|i| {
            let option = self.registry.at(i)?;
            (!option.disabled).then(|| option.value.clone())
        });
        match target {
            Some(value) => {
                if self.state.set_single(&self.registry, Some(&value)) {
                    self.after_change();
                }
                true
            }
            None => false,
        }
    }

    pub fn field(&self) -> &FormField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut FormField {
        &mut self.field
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn filter_text(&self) -> &str {
        self.filter.text()
    }

    /// Region layout from the last render, for hit testing.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Process one input event. Returns whether the widget consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(x, y),
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::FocusLost => {
                // The autocomplete variant keeps its text box focused and
                // only closes on an outside click.
                if self.opened && !self.autocomplete {
                    self.close();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) -> bool {
        let Some(region) = hit_test(&self.layout, x, y).map(str::to_string) else {
            if self.opened {
                self.close();
                return true;
            }
            return false;
        };

        if let Some(value) = region.strip_prefix(TAG_PREFIX) {
            // Removal never bubbles into the container; the dropdown stays
            // in whatever state it was in.
            let value = value.to_string();
            self.remove_tag(&value);
            return true;
        }

        if let Some(value) = region.strip_prefix(OPTION_PREFIX) {
            let value = value.to_string();
            self.activate_option(&value);
            return true;
        }

        match region.as_str() {
            REGION_FILTER => true,
            REGION_SELECT => {
                if self.opened {
                    self.close();
                } else {
                    self.open();
                }
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        // While open with autocomplete, the filter box has keyboard focus.
        if self.opened && self.autocomplete {
            match self.filter.handle_key(key, modifiers) {
                FilterEdit::Changed => {
                    let query = self.filter.text().to_string();
                    self.registry.apply_filter(&query);
                    return true;
                }
                FilterEdit::Handled => return true,
                FilterEdit::Ignored => {}
            }
        }

        if !modifiers.none() {
            return false;
        }

        match key {
            Key::Escape | Key::PageUp => {
                if self.opened {
                    self.close();
                    true
                } else {
                    false
                }
            }
            Key::PageDown => {
                if self.opened {
                    false
                } else {
                    self.open();
                    true
                }
            }
            Key::Down | Key::Right => {
                if self.state.is_multiple() {
                    if self.opened {
                        false
                    } else {
                        self.open();
                        true
                    }
                } else if self.next() {
                    true
                } else {
                    // At the last option: open the dropdown as the fallback
                    // affordance instead of wrapping.
                    self.open();
                    true
                }
            }
            Key::Up | Key::Left => !self.state.is_multiple() && self.prev(),
            _ => false,
        }
    }

    fn activate_option(&mut self, value: &str) {
        if !self.state.is_multiple() {
            if self.state.is_selected(value) {
                // Re-clicking the selected option: no state change, no
                // notification, but selection still closes the dropdown.
                self.close();
                return;
            }
            if !self.registry.is_selectable(value) {
                return;
            }
            if self.state.set_single(&self.registry, Some(value)) {
                self.after_change();
            }
            self.close();
            return;
        }

        match self.state.toggle(&self.registry, value) {
            SetOutcome::Changed => {
                self.after_change();
                if let Some(limit) = self.state.limit() {
                    if self.state.is_selected(value) && self.state.selected().len() >= limit {
                        self.close();
                    }
                }
            }
            SetOutcome::LimitExceeded => self.fire_limit(),
            SetOutcome::Unchanged => {}
        }
    }

    fn remove_tag(&mut self, value: &str) {
        if !self.state.is_selected(value) {
            return;
        }
        if self.state.toggle(&self.registry, value) == SetOutcome::Changed {
            self.after_change();
        }
    }

    /// Push the new selection into the backing field, then run the change
    /// callback. Both observers see a field already consistent with state.
    fn after_change(&mut self) {
        self.sync_field(true);
        if let Some(callback) = self.on_change.as_mut() {
            let value = self.state.value();
            callback(&value);
        }
    }

    pub(crate) fn sync_field(&mut self, notify: bool) {
        let encoded = if self.state.is_multiple() {
            crate::encode::encode_values(self.state.selected())
        } else {
            self.state.single().unwrap_or("").to_string()
        };
        if notify {
            self.field.set_value(encoded);
        } else {
            self.field.set_silent(encoded);
        }
    }

    fn fire_limit(&mut self) {
        let Some(limit) = self.state.limit() else {
            return;
        };
        log::debug!("select `{}` hit limit {limit}", self.field.name());
        if let Some(callback) = self.on_limit.as_mut() {
            callback(limit);
        }
    }
}
