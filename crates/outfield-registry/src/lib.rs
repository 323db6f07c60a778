//! Insertion-ordered registry of named output fields.
//!
//! A simulation's output driver registers every reportable quantity once,
//! then on each reporting cycle writes fresh values into the directly
//! computed fields and runs the evaluation pass, which derives every
//! custom field from an expression over the others.
//!
//! # Architecture
//!
//! ```text
//! FieldCollection<T: OutputField>
//! ├── IndexMap<String, T>    keyed lookup + registration order
//! ├── Scope                  name → value, rebuilt by each pass
//! ├── fields_by_keys / fields_by_groups / fields_by_type
//! └── select_by_*            same queries over an explicit subset
//!
//! HistoryFieldCollection = FieldCollection<HistoryField>
//!     value per field, evaluation pass, set_value_by_{key,index}
//! VolumeFieldCollection  = FieldCollection<VolumeField>
//!     offset per field, no-op evaluation pass
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod config;
pub mod error;
pub mod history;
pub mod record;
pub mod volume;

pub use collection::{EvaluationPass, FieldCollection, Lookup};
pub use config::{CustomFieldDef, DEFAULT_CUSTOM_GROUP};
pub use error::RegistryError;
pub use history::HistoryFieldCollection;
pub use record::{FieldInfo, HistoryField, OutputField, VolumeField};
pub use volume::VolumeFieldCollection;
