use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use nda_canon::{transform_table, DatasetLoader, Partition, Record, RecordTable, ALL_PARTITIONS};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PartitionArg {
    Train,
    #[value(name = "dev-0")]
    Dev0,
    #[value(name = "test-A")]
    TestA,
}

impl From<PartitionArg> for Partition {
    fn from(value: PartitionArg) -> Self {
        match value {
            PartitionArg::Train => Partition::Train,
            PartitionArg::Dev0 => Partition::Dev0,
            PartitionArg::TestA => Partition::TestA,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nda-canon",
    disable_help_subcommand = true,
    about = "Canonicalize NDA dataset label strings",
    long_about = "Load partition input tables, join expected labels, and derive canonical, schema, and serialized label columns for each record.",
    after_help = "Set RUST_LOG=debug for loader and transform diagnostics."
)]
struct Cli {
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        help = "Dataset root containing in-header.tsv and the partition directories"
    )]
    data_dir: PathBuf,
    #[arg(
        long,
        value_enum,
        help = "Single partition to process (defaults to all partitions)"
    )]
    partition: Option<PartitionArg>,
    #[arg(
        long = "emit-labels",
        help = "Print one serialized canonical label per record instead of the summary"
    )]
    emit_labels: bool,
    #[arg(
        long,
        value_name = "N",
        default_value_t = 0,
        help = "Show the first N annotated records per partition"
    )]
    sample: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    let loader = DatasetLoader::open(&cli.data_dir)?;

    let selected: Vec<Partition> = match cli.partition {
        Some(arg) => vec![arg.into()],
        None => ALL_PARTITIONS.to_vec(),
    };

    for partition in selected {
        let table = loader.load(partition)?;
        let table = transform_table(table, partition);

        if cli.emit_labels {
            if !partition.has_labels() {
                eprintln!("partition '{partition}' ships no expected labels; nothing to emit");
                continue;
            }
            emit_labels(&table);
        } else {
            print_summary(partition, &table, cli.sample)?;
        }
    }

    Ok(())
}

fn emit_labels(table: &RecordTable) {
    for record in &table.records {
        let serialized = record
            .annotations
            .as_ref()
            .map(|annotations| annotations.serialized.as_str())
            .unwrap_or_default();
        println!("{serialized}");
    }
}

fn print_summary(
    partition: Partition,
    table: &RecordTable,
    sample: usize,
) -> Result<(), Box<dyn Error>> {
    println!("=== {partition} ===");
    println!("rows          : {}", table.len());
    println!("labeled rows  : {}", table.labeled_count());
    println!("columns       : {}", table.columns.join(", "));
    for (idx, record) in table.records.iter().take(sample).enumerate() {
        print_record_block(idx, record)?;
    }
    println!();
    Ok(())
}

fn print_record_block(idx: usize, record: &Record) -> Result<(), Box<dyn Error>> {
    println!("--- record #{idx} ---");
    println!("features   : {}", record.features.join(" | "));
    let Some(annotations) = record.annotations.as_ref() else {
        println!("labels     : <none>");
        return Ok(());
    };
    println!("raw        : {}", record.labels.as_deref().unwrap_or_default());
    println!("canonical  : {}", annotations.canonical);
    println!("serialized : {}", annotations.serialized);
    println!("schema     : {}", serde_json::to_string(&annotations.schema)?);
    Ok(())
}
