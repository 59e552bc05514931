#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Centralized constants for label fields and the dataset layout.
pub mod constants;
/// Record, annotation, and table types.
pub mod data;
/// Label field keys, tokenization, and the multi-valued field map.
pub mod fields;
/// Canonical label operations: sorting, parsing, and serialization.
pub mod labels;
/// Dataset loading for partition input and expected-label files.
pub mod loader;
/// Partition identifiers and their on-disk layout.
pub mod partitions;
/// Structured label schema value objects.
pub mod schema;
/// Per-record and per-table label transforms.
pub mod transform;
/// Shared type aliases.
pub mod types;

mod errors;

pub use data::{LabelAnnotations, Record, RecordTable};
pub use errors::DatasetError;
pub use fields::{tokenize, BareTokenPolicy, FieldKey, FieldMap};
pub use labels::canonicalize;
pub use loader::DatasetLoader;
pub use partitions::{Partition, ALL_PARTITIONS};
pub use schema::{Nda, Party};
pub use transform::{annotate_labels, transform_table};
pub use types::{FieldName, FieldValue, LabelString, PartyName};
