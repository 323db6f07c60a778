//! Declarative definitions of user-authored custom history fields.

use outfield_core::ScreenFormat;

use crate::error::RegistryError;
use crate::record::HistoryField;

/// Group assigned to custom fields that do not name one.
pub const DEFAULT_CUSTOM_GROUP: &str = "CUSTOM";

/// Input for registering one custom history field.
///
/// ```
/// use outfield_core::ScreenFormat;
/// use outfield_registry::{CustomFieldDef, HistoryFieldCollection};
///
/// let def = CustomFieldDef::new("LD", "CL / CD")
///     .with_group("PERFORMANCE")
///     .with_screen_format(ScreenFormat::Scientific);
/// let mut history = HistoryFieldCollection::new();
/// history.register_custom(&def).unwrap();
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CustomFieldDef {
    /// Field name; becomes the collection key.
    pub name: String,
    /// Group label. Default: [`DEFAULT_CUSTOM_GROUP`].
    pub group: String,
    /// Free-form documentation.
    pub description: String,
    /// Expression source text.
    pub expression: String,
    /// Screen format. Default: [`ScreenFormat::Fixed`].
    pub screen_format: ScreenFormat,
}

impl CustomFieldDef {
    /// A definition with default group, format, and an empty description.
    pub fn new(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: DEFAULT_CUSTOM_GROUP.to_string(),
            description: String::new(),
            expression: expression.into(),
            screen_format: ScreenFormat::default(),
        }
    }

    /// Set the group label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the screen format.
    pub fn with_screen_format(mut self, screen_format: ScreenFormat) -> Self {
        self.screen_format = screen_format;
        self
    }

    /// Check structural invariants without compiling the expression.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::InvalidConfig {
                reason: "custom field name is empty".to_string(),
            });
        }
        if self.expression.trim().is_empty() {
            return Err(RegistryError::InvalidConfig {
                reason: format!("custom field '{}' has an empty expression", self.name),
            });
        }
        Ok(())
    }

    /// Validate and compile into a custom [`HistoryField`].
    pub fn compile(&self) -> Result<HistoryField, RegistryError> {
        self.validate()?;
        let expression = outfield_expr::compile(&self.expression).map_err(|source| {
            RegistryError::InvalidExpression {
                field: self.name.clone(),
                expression: self.expression.clone(),
                source,
            }
        })?;
        Ok(HistoryField::custom(
            self.name.clone(),
            self.screen_format,
            self.group.clone(),
            Box::new(expression),
            self.description.clone(),
        ))
    }
}
