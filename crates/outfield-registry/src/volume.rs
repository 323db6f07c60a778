//! Volume field collections.
//!
//! A volume collection indexes names, groups, and classifications over
//! per-node offsets. Values live in an external per-node buffer, so the
//! evaluation pass has nothing to do.

use crate::collection::{EvaluationPass, FieldCollection};
use crate::error::RegistryError;
use crate::record::VolumeField;

/// Registry of volume fields: one offset per field.
pub type VolumeFieldCollection = FieldCollection<VolumeField>;

impl FieldCollection<VolumeField> {
    /// Offset of the field named `key`.
    pub fn offset_by_key(&self, key: &str) -> Option<usize> {
        self.entries.get(key).map(|f| f.offset)
    }
}

impl EvaluationPass for FieldCollection<VolumeField> {
    fn evaluate(&mut self) -> Result<(), RegistryError> {
        Ok(())
    }
}
