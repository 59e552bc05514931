use std::fs;
use std::path::Path;

use tempfile::{tempdir, TempDir};

use nda_canon::{transform_table, DatasetError, DatasetLoader, Partition, ALL_PARTITIONS};

const HEADER: &str = "filename\tkeys\ttext\n";

const TRAIN_ROWS: &[(&str, &str)] = &[
    (
        "3a1f0c6b.pdf\teffective_date jurisdiction party term\tThis Mutual Nondisclosure Agreement is entered into...",
        "effective_date=2017-03-27 jurisdiction=New_York party=Kaleyra_Inc party=Vonage_Holdings_Corp term=2_years",
    ),
    (
        "88d204ee.pdf\teffective_date party\tCONFIDENTIALITY AGREEMENT dated as of...",
        "party=Harlow_Ridge_LLC effective_date=2015-01-02",
    ),
];

const DEV_ROWS: &[(&str, &str)] = &[(
    "bb7a91c0.pdf\tjurisdiction party term\tTHIS AGREEMENT is made between...",
    "term=1_year party=Evergreen_Partners jurisdiction=California",
)];

fn write_partition(root: &Path, partition: Partition, rows: &[(&str, &str)], with_labels: bool) {
    let dir = root.join(partition.as_str());
    fs::create_dir_all(&dir).unwrap();

    let inputs: Vec<&str> = rows.iter().map(|(input, _)| *input).collect();
    fs::write(dir.join("in.tsv"), format!("{}\n", inputs.join("\n"))).unwrap();

    if with_labels {
        let labels: Vec<&str> = rows.iter().map(|(_, label)| *label).collect();
        fs::write(dir.join("expected.tsv"), format!("{}\n", labels.join("\n"))).unwrap();
    }
}

fn write_dataset() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in-header.tsv"), HEADER).unwrap();
    write_partition(dir.path(), Partition::Train, TRAIN_ROWS, true);
    write_partition(dir.path(), Partition::Dev0, DEV_ROWS, true);
    write_partition(dir.path(), Partition::TestA, DEV_ROWS, false);
    dir
}

#[test]
fn loader_reads_header_once_for_all_partitions() {
    let dataset = write_dataset();
    let loader = DatasetLoader::open(dataset.path()).unwrap();
    assert_eq!(loader.columns(), ["filename", "keys", "text"]);

    for partition in ALL_PARTITIONS {
        let table = loader.load(partition).unwrap();
        assert_eq!(table.columns, loader.columns());
    }
}

#[test]
fn labels_join_input_rows_positionally() {
    let dataset = write_dataset();
    let loader = DatasetLoader::open(dataset.path()).unwrap();
    let table = loader.load(Partition::Train).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.labeled_count(), 2);
    assert_eq!(table.records[0].features[0], "3a1f0c6b.pdf");
    assert_eq!(table.records[0].labels.as_deref(), Some(TRAIN_ROWS[0].1));
    assert_eq!(table.records[1].features[0], "88d204ee.pdf");
    assert_eq!(table.records[1].labels.as_deref(), Some(TRAIN_ROWS[1].1));
}

#[test]
fn held_out_partition_loads_without_expected_labels() {
    let dataset = write_dataset();
    let loader = DatasetLoader::open(dataset.path()).unwrap();
    let table = loader.load(Partition::TestA).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.labeled_count(), 0);
    assert!(table.records[0].labels.is_none());
}

#[test]
fn pipeline_annotates_labeled_partitions_end_to_end() {
    let dataset = write_dataset();
    let loader = DatasetLoader::open(dataset.path()).unwrap();

    let table = transform_table(loader.load(Partition::Train).unwrap(), Partition::Train);
    let first = table.records[0].annotations.as_ref().unwrap();
    assert_eq!(
        first.canonical,
        "effective_date=2017-03-27 jurisdiction=New_York \
         party=Kaleyra_Inc party=Vonage_Holdings_Corp term=2_years"
    );
    assert_eq!(first.serialized, first.canonical);
    assert_eq!(first.schema.jurisdiction, "New_York");

    let second = table.records[1].annotations.as_ref().unwrap();
    assert_eq!(
        second.canonical,
        "effective_date=2015-01-02 party=Harlow_Ridge_LLC"
    );
    assert_eq!(second.schema.term, None);
}

#[test]
fn pipeline_passes_held_out_partition_through() {
    let dataset = write_dataset();
    let loader = DatasetLoader::open(dataset.path()).unwrap();

    let loaded = loader.load(Partition::TestA).unwrap();
    let transformed = transform_table(loaded.clone(), Partition::TestA);
    assert_eq!(transformed, loaded);
}

#[test]
fn ragged_input_row_fails_with_row_shape() {
    let dataset = write_dataset();
    let train_input = dataset.path().join("train").join("in.tsv");
    fs::write(&train_input, "only_one_column\n").unwrap();

    let loader = DatasetLoader::open(dataset.path()).unwrap();
    let err = loader.load(Partition::Train).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::RowShape {
            row: 0,
            expected: 3,
            found: 1,
        }
    ));
}

#[test]
fn label_count_mismatch_fails_with_misalignment() {
    let dataset = write_dataset();
    let train_labels = dataset.path().join("train").join("expected.tsv");
    fs::write(&train_labels, "party=Only_One\n").unwrap();

    let loader = DatasetLoader::open(dataset.path()).unwrap();
    let err = loader.load(Partition::Train).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::LabelMisalignment { partition, details }
            if partition == "train" && details.contains("1 label lines for 2 input rows")
    ));
}

#[test]
fn missing_labels_for_labeled_partition_is_an_error() {
    let dataset = write_dataset();
    fs::remove_file(dataset.path().join("dev-0").join("expected.tsv")).unwrap();

    let loader = DatasetLoader::open(dataset.path()).unwrap();
    let err = loader.load(Partition::Dev0).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::PartitionUnavailable { partition, reason }
            if partition == "dev-0" && reason.contains("expected.tsv")
    ));
}

#[test]
fn missing_partition_directory_is_an_error() {
    let dataset = tempdir().unwrap();
    fs::write(dataset.path().join("in-header.tsv"), HEADER).unwrap();

    let loader = DatasetLoader::open(dataset.path()).unwrap();
    let err = loader.load(Partition::Dev0).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::PartitionUnavailable { partition, .. } if partition == "dev-0"
    ));
}

#[test]
fn empty_partition_input_yields_empty_table() {
    let dataset = tempdir().unwrap();
    fs::write(dataset.path().join("in-header.tsv"), HEADER).unwrap();
    let dir = dataset.path().join("test-A");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("in.tsv"), "").unwrap();

    let loader = DatasetLoader::open(dataset.path()).unwrap();
    let table = loader.load(Partition::TestA).unwrap();
    assert!(table.is_empty());

    let transformed = transform_table(table, Partition::TestA);
    assert!(transformed.is_empty());
}
