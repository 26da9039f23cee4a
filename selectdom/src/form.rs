use crate::config::SelectConfig;
use crate::error::ConfigError;
use crate::field::{FieldKind, FormField};
use crate::registry::SelectOption;
use crate::widget::{create_select, SelectWidget};

/// Minimal host-form model: a set of named fields.
///
/// Attaching a select widget hands the backing field over to the widget;
/// the host reads it back through `SelectWidget::field`.
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, field: FormField) -> &mut FormField {
        self.fields.push(field);
        self.fields.last_mut().unwrap()
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|field| field.name() == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// Build a select widget over the named field.
    ///
    /// Fails fast when the field is missing or not a plain text field;
    /// both are host bugs, not runtime conditions.
    pub fn attach_select(
        &mut self,
        name: &str,
        options: Vec<SelectOption>,
        config: SelectConfig,
    ) -> Result<SelectWidget, ConfigError> {
        let pos = self
            .fields
            .iter()
            .position(|field| field.name() == name)
            .ok_or_else(|| ConfigError::MissingField(name.to_string()))?;

        if self.fields[pos].kind() != FieldKind::Text {
            return Err(ConfigError::WrongFieldKind {
                name: name.to_string(),
                kind: self.fields[pos].kind(),
                expected: FieldKind::Text,
            });
        }

        let field = self.fields.remove(pos);
        create_select(field, options, config)
    }
}
