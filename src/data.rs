use crate::schema::Nda;

pub use crate::types::{FieldName, FieldValue, LabelString};

/// Annotation columns derived from one record's raw label string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelAnnotations {
    /// Raw label string reordered into canonical field order.
    pub canonical: LabelString,
    /// Structured schema parsed from the canonical string.
    pub schema: Nda,
    /// Canonical string rendered back from the schema.
    pub serialized: LabelString,
}

/// One dataset row: input features plus optional label state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    /// Feature values aligned with the owning table's column header.
    pub features: Vec<FieldValue>,
    /// Raw expected-label string; present for labeled partitions only.
    pub labels: Option<LabelString>,
    /// Derived label columns, populated by the transform.
    pub annotations: Option<LabelAnnotations>,
}

impl Record {
    /// Create an unlabeled record from feature values.
    pub fn new(features: Vec<FieldValue>) -> Self {
        Self {
            features,
            labels: None,
            annotations: None,
        }
    }

    /// Create a labeled record from feature values and a raw label string.
    pub fn labeled(features: Vec<FieldValue>, labels: impl Into<LabelString>) -> Self {
        Self {
            features,
            labels: Some(labels.into()),
            annotations: None,
        }
    }
}

/// In-memory table of records sharing one column header.
///
/// Row order is meaningful: row `i` corresponds to line `i` of the
/// partition input file, and transforms preserve it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordTable {
    /// Column names shared by every record's features.
    pub columns: Vec<FieldName>,
    /// Table rows in input order.
    pub records: Vec<Record>,
}

impl RecordTable {
    /// Create an empty table over `columns`.
    pub fn new(columns: Vec<FieldName>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of `name` in the column header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Number of rows carrying a raw label string.
    pub fn labeled_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.labels.is_some())
            .count()
    }
}
