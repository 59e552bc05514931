use rayon::prelude::*;
use tracing::{debug, warn};

use crate::data::{LabelAnnotations, Record, RecordTable};
use crate::labels;
use crate::partitions::Partition;

/// Derive the canonical, schema, and serialized forms for one raw label
/// string.
///
/// Stages chain: the schema is parsed from the canonical (sorted) string,
/// and the serialized form is rendered from that schema. Sorting drops bare
/// tokens, so they never reach the schema even though the parser on its own
/// would keep them.
pub fn annotate_labels(raw: &str) -> LabelAnnotations {
    let canonical = labels::sort_fields(raw);
    let schema = labels::parse(&canonical);
    let serialized = labels::serialize(&schema);
    LabelAnnotations {
        canonical,
        schema,
        serialized,
    }
}

/// Annotate every record of `table` with derived label columns.
///
/// The held-out partition has no labels to transform and passes through
/// unchanged. Records are independent, so annotation runs as a parallel
/// in-place map; row order is untouched. A labeled partition row that
/// somehow lacks a raw label annotates as if its label were empty.
pub fn transform_table(mut table: RecordTable, partition: Partition) -> RecordTable {
    if !partition.has_labels() {
        debug!(partition = %partition, "skipping label transform for unlabeled partition");
        return table;
    }
    let unlabeled = table.len() - table.labeled_count();
    if unlabeled > 0 {
        warn!(
            partition = %partition,
            rows = unlabeled,
            "annotating rows without a raw label as empty"
        );
    }
    table.records.par_iter_mut().for_each(annotate_record);
    debug!(
        partition = %partition,
        rows = table.len(),
        "annotated partition labels"
    );
    table
}

fn annotate_record(record: &mut Record) {
    let raw = record.labels.as_deref().unwrap_or_default();
    record.annotations = Some(annotate_labels(raw));
}
