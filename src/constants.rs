use crate::fields::FieldKey;
use crate::partitions::Partition;

/// Constants used by label tokenization and canonical field ordering.
pub mod labels {
    use super::FieldKey;

    /// Separator between keys and values in label tokens (for example `term=2_years`).
    pub const LABEL_DELIMITER: &str = "=";
    /// Canonical field key for the agreement effective date.
    pub const FIELD_EFFECTIVE_DATE: FieldKey = FieldKey::new("effective_date");
    /// Canonical field key for the governing jurisdiction.
    pub const FIELD_JURISDICTION: FieldKey = FieldKey::new("jurisdiction");
    /// Canonical field key for contracting parties (may repeat within a label).
    pub const FIELD_PARTY: FieldKey = FieldKey::new("party");
    /// Canonical field key for the agreement term.
    pub const FIELD_TERM: FieldKey = FieldKey::new("term");
    /// Canonical schema emission order used when sorting label strings.
    pub const SCHEMA_FIELD_ORDER: [FieldKey; 4] = [
        FIELD_EFFECTIVE_DATE,
        FIELD_JURISDICTION,
        FIELD_PARTY,
        FIELD_TERM,
    ];
}

/// Constants describing the on-disk dataset layout.
pub mod dataset {
    use super::Partition;

    /// Canonical partition iteration order used when processing all partitions.
    pub const ALL_PARTITIONS: [Partition; 3] =
        [Partition::Train, Partition::Dev0, Partition::TestA];

    /// Filename of the shared column header at the dataset root.
    pub const HEADER_FILENAME: &str = "in-header.tsv";
    /// Filename of the per-partition input table.
    pub const INPUT_FILENAME: &str = "in.tsv";
    /// Filename of the per-partition expected-label file.
    pub const LABELS_FILENAME: &str = "expected.tsv";
    /// Column separator shared by the header and input tables.
    pub const COLUMN_SEPARATOR: char = '\t';
}
