//! Output field records.
//!
//! Every record carries a [`FieldInfo`] (name, group, description,
//! classification, optional expression). [`HistoryField`] adds a scalar
//! value and a screen format; [`VolumeField`] adds a per-node offset.

use std::fmt;

use outfield_core::{Expression, FieldType, ScreenFormat};

use crate::error::RegistryError;

/// Common description of one reportable quantity.
///
/// A field classified as [`FieldType::Custom`] always holds an expression;
/// any other classification never does. The constructors enforce this.
pub struct FieldInfo {
    name: String,
    group: String,
    description: String,
    field_type: FieldType,
    expression: Option<Box<dyn Expression>>,
}

impl FieldInfo {
    /// Describe a directly-written (non-custom) field.
    ///
    /// Returns [`RegistryError::MissingExpression`] for
    /// [`FieldType::Custom`]; use [`FieldInfo::custom`] instead.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        description: impl Into<String>,
        field_type: FieldType,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        if field_type.is_custom() {
            return Err(RegistryError::MissingExpression { field: name });
        }
        Ok(Self {
            name,
            group: group.into(),
            description: description.into(),
            field_type,
            expression: None,
        })
    }

    /// Describe a custom field derived from `expression`.
    pub fn custom(
        name: impl Into<String>,
        group: impl Into<String>,
        description: impl Into<String>,
        expression: Box<dyn Expression>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            description: description.into(),
            field_type: FieldType::Custom,
            expression: Some(expression),
        }
    }

    /// The field name; unique within a collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The (non-unique) group label.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Free-form documentation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The classification.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The compiled expression, present exactly when the field is custom.
    pub fn expression(&self) -> Option<&dyn Expression> {
        self.expression.as_deref()
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("field_type", &self.field_type)
            .field("expression", &self.expression.as_ref().map(|e| e.source()))
            .finish()
    }
}

/// Access to the shared [`FieldInfo`] of a record type stored in a
/// [`FieldCollection`](crate::FieldCollection).
pub trait OutputField {
    /// The record's common description.
    fn info(&self) -> &FieldInfo;

    /// Shorthand for `info().name()`.
    fn name(&self) -> &str {
        self.info().name()
    }

    /// Shorthand for `info().group()`.
    fn group(&self) -> &str {
        self.info().group()
    }

    /// Shorthand for `info().field_type()`.
    fn field_type(&self) -> FieldType {
        self.info().field_type()
    }
}

/// A scalar printed to screen and written as one history-file column.
#[derive(Debug)]
pub struct HistoryField {
    info: FieldInfo,
    /// Current value. Written by the owner for direct fields and by the
    /// evaluation pass for custom fields.
    pub value: f64,
    /// How the value is printed to screen.
    pub screen_format: ScreenFormat,
}

impl HistoryField {
    /// A directly-written history field with value `0.0`.
    pub fn new(
        name: impl Into<String>,
        screen_format: ScreenFormat,
        group: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            info: FieldInfo::new(name, group, description, field_type)?,
            value: 0.0,
            screen_format,
        })
    }

    /// A custom history field computed from `expression`.
    pub fn custom(
        name: impl Into<String>,
        screen_format: ScreenFormat,
        group: impl Into<String>,
        expression: Box<dyn Expression>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            info: FieldInfo::custom(name, group, description, expression),
            value: 0.0,
            screen_format,
        }
    }
}

impl OutputField for HistoryField {
    fn info(&self) -> &FieldInfo {
        &self.info
    }
}

/// A per-node quantity written to the volume solution file.
///
/// The record holds no values; `offset` locates the field's data in the
/// external per-node buffer.
#[derive(Debug)]
pub struct VolumeField {
    info: FieldInfo,
    /// Position of this field's data within each node's slice of the
    /// output buffer.
    pub offset: usize,
}

impl VolumeField {
    /// A volume field classified as [`FieldType::Default`].
    pub fn new(
        name: impl Into<String>,
        offset: usize,
        group: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            info: FieldInfo {
                name: name.into(),
                group: group.into(),
                description: description.into(),
                field_type: FieldType::Default,
                expression: None,
            },
            offset,
        }
    }
}

impl OutputField for VolumeField {
    fn info(&self) -> &FieldInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outfield_test_utils::MockExpression;

    #[test]
    fn custom_without_expression_is_rejected() {
        let err = HistoryField::new("C", ScreenFormat::Fixed, "G", FieldType::Custom, "")
            .unwrap_err();
        assert_eq!(err, RegistryError::MissingExpression { field: "C".into() });
    }

    #[test]
    fn direct_fields_have_no_expression() {
        for ty in FieldType::ALL.into_iter().filter(|t| !t.is_custom()) {
            let field = HistoryField::new("X", ScreenFormat::Scientific, "G", ty, "").unwrap();
            assert!(field.info().expression().is_none());
            assert_eq!(field.field_type(), ty);
            assert_eq!(field.value, 0.0);
        }
    }

    #[test]
    fn custom_fields_carry_their_expression() {
        let field = HistoryField::custom(
            "LD",
            ScreenFormat::Fixed,
            "CUSTOM",
            Box::new(MockExpression::constant("CL / CD", 12.0)),
            "lift over drag",
        );
        assert_eq!(field.field_type(), FieldType::Custom);
        assert_eq!(field.info().expression().map(|e| e.source()), Some("CL / CD"));
        assert_eq!(field.info().description(), "lift over drag");
    }

    #[test]
    fn volume_fields_are_default_classified() {
        let field = VolumeField::new("Density", 3, "SOLUTION", "conservative density");
        assert_eq!(field.field_type(), FieldType::Default);
        assert_eq!(field.group(), "SOLUTION");
        assert_eq!(field.offset, 3);
        assert!(field.info().expression().is_none());
    }

    #[test]
    fn debug_shows_expression_source() {
        let field = FieldInfo::custom("C", "G", "", Box::new(MockExpression::constant("A+B", 0.0)));
        assert!(format!("{field:?}").contains("A+B"));
    }
}
