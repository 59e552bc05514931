//! Dataset loading for the partitioned on-disk layout.
//!
//! A dataset root holds one shared `in-header.tsv` naming the input columns,
//! plus one directory per partition containing `in.tsv` (headerless,
//! tab-separated) and, for labeled partitions, `expected.tsv` with one raw
//! label string per line aligned positionally with the input rows.

use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::dataset::{
    COLUMN_SEPARATOR, HEADER_FILENAME, INPUT_FILENAME, LABELS_FILENAME,
};
use crate::data::{Record, RecordTable};
use crate::errors::DatasetError;
use crate::partitions::Partition;
use crate::types::FieldName;

/// Reads partition input tables and joins expected labels when available.
#[derive(Debug)]
pub struct DatasetLoader {
    data_dir: PathBuf,
    columns: Vec<FieldName>,
}

impl DatasetLoader {
    /// Open a loader rooted at `data_dir`, reading the shared column header.
    pub fn open<P: Into<PathBuf>>(data_dir: P) -> Result<Self, DatasetError> {
        let data_dir = data_dir.into();
        let columns = read_header(&data_dir.join(HEADER_FILENAME))?;
        debug!(
            root = %data_dir.display(),
            columns = columns.len(),
            "opened dataset root"
        );
        Ok(Self { data_dir, columns })
    }

    /// Column names shared by every partition input table.
    pub fn columns(&self) -> &[FieldName] {
        &self.columns
    }

    /// Load the input table for `partition`, joining expected labels when
    /// the partition ships them.
    ///
    /// The expected-label file is never opened for the held-out partition,
    /// so its absence there is not an error.
    pub fn load(&self, partition: Partition) -> Result<RecordTable, DatasetError> {
        let mut table = self.read_records(partition)?;
        if partition.has_labels() {
            self.attach_labels(&mut table, partition)?;
        }
        debug!(
            partition = %partition,
            rows = table.len(),
            labeled = table.labeled_count(),
            "loaded partition"
        );
        Ok(table)
    }

    fn partition_dir(&self, partition: Partition) -> PathBuf {
        self.data_dir.join(partition.as_str())
    }

    fn read_records(&self, partition: Partition) -> Result<RecordTable, DatasetError> {
        let path = self.partition_dir(partition).join(INPUT_FILENAME);
        let reader = open_buffered(&path, partition)?;

        let mut table = RecordTable::new(self.columns.clone());
        for (row, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| read_failure(partition, &path, err))?;
            let features: Vec<String> =
                line.split(COLUMN_SEPARATOR).map(str::to_string).collect();
            if features.len() != self.columns.len() {
                return Err(DatasetError::RowShape {
                    row,
                    expected: self.columns.len(),
                    found: features.len(),
                });
            }
            table.records.push(Record::new(features));
        }
        Ok(table)
    }

    fn attach_labels(
        &self,
        table: &mut RecordTable,
        partition: Partition,
    ) -> Result<(), DatasetError> {
        let path = self.partition_dir(partition).join(LABELS_FILENAME);
        let reader = open_buffered(&path, partition)?;

        let mut labels: Vec<String> = Vec::with_capacity(table.len());
        for line in reader.lines() {
            labels.push(line.map_err(|err| read_failure(partition, &path, err))?);
        }
        if labels.len() != table.len() {
            return Err(DatasetError::LabelMisalignment {
                partition: partition.to_string(),
                details: format!(
                    "{} label lines for {} input rows",
                    labels.len(),
                    table.len()
                ),
            });
        }
        for (record, label) in table.records.iter_mut().zip(labels) {
            record.labels = Some(label);
        }
        Ok(())
    }
}

fn read_header(path: &Path) -> Result<Vec<FieldName>, DatasetError> {
    let file = File::open(path).map_err(|err| {
        DatasetError::Configuration(format!("failed opening header {}: {err}", path.display()))
    })?;
    let mut header = String::new();
    BufReader::new(file).read_line(&mut header)?;
    let columns: Vec<FieldName> = header
        .trim_end_matches(['\r', '\n'])
        .split(COLUMN_SEPARATOR)
        .map(str::to_string)
        .collect();
    if columns.iter().all(String::is_empty) {
        return Err(DatasetError::Configuration(format!(
            "header {} defines no columns",
            path.display()
        )));
    }
    Ok(columns)
}

fn open_buffered(path: &Path, partition: Partition) -> Result<BufReader<File>, DatasetError> {
    let file = File::open(path).map_err(|err| DatasetError::PartitionUnavailable {
        partition: partition.to_string(),
        reason: format!("failed opening {}: {err}", path.display()),
    })?;
    Ok(BufReader::new(file))
}

fn read_failure(partition: Partition, path: &Path, err: io::Error) -> DatasetError {
    DatasetError::PartitionUnavailable {
        partition: partition.to_string(),
        reason: format!("failed reading {}: {err}", path.display()),
    }
}
