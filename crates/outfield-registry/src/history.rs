//! History field collections and the derived-value evaluation pass.
//!
//! Each reporting cycle the owner writes fresh values into the direct
//! (non-custom) fields, then calls
//! [`evaluate_custom_fields`](HistoryFieldCollection::evaluate_custom_fields).
//! The pass is one flat layer:
//!
//! 1. If no custom field exists, return without touching anything.
//! 2. Rebuild the scope from scratch with every direct field's value.
//!    Custom fields are not published, so one custom field can never
//!    read another.
//! 3. Evaluate every custom expression against that snapshot, in
//!    registration order, assigning each result as it is produced.
//!
//! The first failing expression ends the pass. Custom fields registered
//! before it hold this cycle's values; it and every later custom field
//! keep their previous values.

use outfield_core::FieldType;

use crate::collection::{EvaluationPass, FieldCollection};
use crate::config::CustomFieldDef;
use crate::error::RegistryError;
use crate::record::{HistoryField, OutputField};

/// Registry of history fields: one scalar per field per cycle.
pub type HistoryFieldCollection = FieldCollection<HistoryField>;

impl FieldCollection<HistoryField> {
    /// Overwrite the value of the field named `key`.
    ///
    /// Does not run the evaluation pass.
    pub fn set_value_by_key(&mut self, key: &str, value: f64) -> Result<(), RegistryError> {
        let field = self
            .entries
            .get_mut(key)
            .ok_or_else(|| RegistryError::KeyNotFound {
                key: key.to_string(),
            })?;
        field.value = value;
        Ok(())
    }

    /// Overwrite the value of the field at registration position `index`.
    ///
    /// Does not run the evaluation pass.
    pub fn set_value_by_index(&mut self, index: usize, value: f64) -> Result<(), RegistryError> {
        let len = self.entries.len();
        let (_, field) = self
            .entries
            .get_index_mut(index)
            .ok_or(RegistryError::IndexOutOfRange { index, len })?;
        field.value = value;
        Ok(())
    }

    /// Current value of the field named `key`.
    pub fn value_by_key(&self, key: &str) -> Option<f64> {
        self.entries.get(key).map(|f| f.value)
    }

    /// Current values of every field, in registration order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.values().map(|f| f.value).collect()
    }

    /// Validate, compile, and register a custom field definition.
    ///
    /// Returns the new field's registration position.
    pub fn register_custom(&mut self, def: &CustomFieldDef) -> Result<usize, RegistryError> {
        let field = def.compile()?;
        self.insert(field)
    }

    /// Recompute every custom field from the current direct values.
    pub fn evaluate_custom_fields(&mut self) -> Result<(), RegistryError> {
        let custom_count = self.fields_by_type(&[FieldType::Custom]).len();
        if custom_count == 0 {
            return Ok(());
        }

        self.scope.clear();
        for (name, field) in &self.entries {
            if field.field_type() != FieldType::Custom {
                self.scope.set(name.as_str(), field.value);
            }
        }

        for (name, field) in &mut self.entries {
            let Some(expression) = field.info().expression() else {
                continue;
            };
            let value = expression.eval(&self.scope).map_err(|source| {
                tracing::warn!(
                    field = %name,
                    expression = %expression.source(),
                    error = %source,
                    "custom field evaluation failed"
                );
                RegistryError::ExpressionEvaluation {
                    field: name.clone(),
                    expression: expression.source().to_string(),
                    source,
                }
            })?;
            tracing::trace!(field = %name, value, "evaluated custom field");
            field.value = value;
        }

        tracing::debug!(
            scope_entries = self.scope.len(),
            custom_fields = custom_count,
            "evaluation pass complete"
        );
        Ok(())
    }
}

impl EvaluationPass for FieldCollection<HistoryField> {
    fn evaluate(&mut self) -> Result<(), RegistryError> {
        self.evaluate_custom_fields()
    }
}
