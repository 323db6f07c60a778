//! Benchmark profiles for the outfield registry.
//!
//! - [`reference_profile`]: 200 direct fields and 20 custom fields, the
//!   size of a large multi-zone history output.
//! - [`stress_profile`]: 10x the reference size.
//! - [`cycle`]: one reporting cycle (write every direct value, evaluate).

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use outfield_core::FieldType;
use outfield_registry::{HistoryFieldCollection, OutputField, RegistryError};
use outfield_test_utils::fixtures::synthetic_history;

/// 200 direct fields, 20 custom fields.
pub fn reference_profile() -> HistoryFieldCollection {
    synthetic_history(200, 20)
}

/// 2000 direct fields, 200 custom fields.
pub fn stress_profile() -> HistoryFieldCollection {
    synthetic_history(2000, 200)
}

/// Write a fresh value into every direct field by position, then run the
/// evaluation pass.
pub fn cycle(history: &mut HistoryFieldCollection, iteration: u64) -> Result<(), RegistryError> {
    let direct: Vec<usize> = history
        .iter()
        .enumerate()
        .filter(|(_, f)| f.field_type() != FieldType::Custom)
        .map(|(i, _)| i)
        .collect();
    for i in direct {
        history.set_value_by_index(i, (iteration + i as u64) as f64)?;
    }
    history.evaluate_custom_fields()
}
