use std::fmt;
use std::str::FromStr;

use crate::errors::DatasetError;

pub use crate::constants::dataset::ALL_PARTITIONS;

/// Logical dataset partitions shipped with the challenge layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Training partition.
    Train,
    /// Validation partition.
    Dev0,
    /// Held-out test partition, shipped without expected labels.
    TestA,
}

impl Partition {
    /// Directory name of this partition under the dataset root.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Dev0 => "dev-0",
            Partition::TestA => "test-A",
        }
    }

    /// Whether expected labels ship with this partition.
    pub const fn has_labels(&self) -> bool {
        !matches!(self, Partition::TestA)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partition {
    type Err = DatasetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "train" => Ok(Partition::Train),
            "dev-0" => Ok(Partition::Dev0),
            "test-A" => Ok(Partition::TestA),
            other => Err(DatasetError::Configuration(format!(
                "unknown partition '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_names_round_trip() {
        for partition in ALL_PARTITIONS {
            let parsed: Partition = partition.as_str().parse().unwrap();
            assert_eq!(parsed, partition);
            assert_eq!(partition.to_string(), partition.as_str());
        }
    }

    #[test]
    fn unknown_partition_name_is_rejected() {
        let err = "dev-1".parse::<Partition>().unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Configuration(msg) if msg.contains("dev-1")
        ));
    }

    #[test]
    fn only_the_held_out_partition_lacks_labels() {
        assert!(Partition::Train.has_labels());
        assert!(Partition::Dev0.has_labels());
        assert!(!Partition::TestA.has_labels());
    }
}
