use serde::{Deserialize, Serialize};

pub use crate::types::{FieldValue, PartyName};

/// One contracting party named by an agreement label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Party name exactly as annotated (underscores stand in for spaces).
    pub name: PartyName,
}

impl Party {
    /// Wrap a name as a party.
    pub fn new(name: impl Into<PartyName>) -> Self {
        Self { name: name.into() }
    }
}

/// Structured form of one agreement's label string.
///
/// Scalar fields default to the empty string when unannotated. `term` is
/// the exception: it distinguishes an absent field (`None`) from an
/// annotated empty value (`Some("")`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nda {
    /// Effective date of the agreement.
    pub effective_date: FieldValue,
    /// Governing jurisdiction.
    pub jurisdiction: FieldValue,
    /// Contracting parties in label encounter order.
    pub party: Vec<Party>,
    /// Agreement term, when the label carries one.
    pub term: Option<FieldValue>,
}
