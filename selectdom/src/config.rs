use crate::state::SelectValue;
use crate::style::SelectPalette;

pub(crate) type ChangeCallback = Box<dyn FnMut(&SelectValue)>;
pub(crate) type LimitCallback = Box<dyn FnMut(usize)>;

/// Configuration for a select widget.
///
/// Built once and handed to `create_select`; defaults are merged with the
/// caller's overrides here rather than read from any shared table.
#[derive(Default)]
pub struct SelectConfig {
    pub(crate) multiple: bool,
    pub(crate) initial: Option<SelectValue>,
    pub(crate) placeholder: String,
    pub(crate) autocomplete: bool,
    pub(crate) limit: Option<usize>,
    pub(crate) short_tags: bool,
    pub(crate) icon: Option<char>,
    pub(crate) palette: Option<SelectPalette>,
    pub(crate) on_change: Option<ChangeCallback>,
    pub(crate) on_limit: Option<LimitCallback>,
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multi mode: the widget holds an ordered set of values rendered as
    /// removable tags.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Initial single-mode value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(SelectValue::Single(Some(value.into())));
        self
    }

    /// Initial multi-mode values.
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial = Some(SelectValue::Multi(
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Text shown while nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Show a live text filter above the options while open.
    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    /// Upper bound on the multi-mode selection size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render tag text as the option value instead of its label.
    pub fn short_tags(mut self, short_tags: bool) -> Self {
        self.short_tags = short_tags;
        self
    }

    /// Removal icon shown on each tag.
    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn palette(mut self, palette: SelectPalette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Invoked after every user-driven selection change, once the backing
    /// field has been updated.
    pub fn on_change(mut self, callback: impl FnMut(&SelectValue) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Invoked when a multi-mode operation is rejected for exceeding the
    /// configured limit.
    pub fn on_limit(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_limit = Some(Box::new(callback));
        self
    }
}
