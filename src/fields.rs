use std::fmt::Display;

use indexmap::IndexMap;

use crate::types::FieldValue;

pub use crate::constants::labels::{
    FIELD_EFFECTIVE_DATE, FIELD_JURISDICTION, FIELD_PARTY, FIELD_TERM, LABEL_DELIMITER,
    SCHEMA_FIELD_ORDER,
};

/// Canonical identifier for label schema fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldKey {
    name: &'static str,
}

impl FieldKey {
    /// Create a field key with a canonical static name.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Return the raw key name.
    pub const fn as_str(&self) -> &'static str {
        self.name
    }

    /// Encode a value using the shared delimiter (e.g., "term=2_years").
    pub fn encode(&self, value: impl Display) -> String {
        format!("{}{}{}", self.name, LABEL_DELIMITER, value)
    }

    /// Strip the field prefix from a serialized label token.
    pub fn strip<'a>(&self, token: &'a str) -> Option<&'a str> {
        token
            .strip_prefix(self.name)
            .and_then(|rest| rest.strip_prefix(LABEL_DELIMITER))
    }
}

/// How tokens lacking a key/value delimiter are treated during tokenization.
///
/// Schema parsing keeps a bare token as a key with an empty value, while
/// canonical sorting discards it. Both paths route through [`tokenize`] so
/// the divergence lives in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BareTokenPolicy {
    /// Keep a bare token as `(token, "")`.
    KeepEmptyValue,
    /// Drop a bare token entirely.
    Drop,
}

/// Split a raw label string into `(key, value)` pairs in token order.
///
/// Tokens are whitespace-delimited and split on the first delimiter only,
/// so values may themselves contain the delimiter character.
pub fn tokenize(input: &str, policy: BareTokenPolicy) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    for token in input.split_whitespace() {
        match token.split_once(LABEL_DELIMITER) {
            Some((key, value)) => pairs.push((key, value)),
            None => {
                if policy == BareTokenPolicy::KeepEmptyValue {
                    pairs.push((token, ""));
                }
            }
        }
    }
    pairs
}

/// Multi-valued field mapping preserving first-seen key order and per-key
/// value encounter order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: IndexMap<String, Vec<FieldValue>>,
}

impl FieldMap {
    /// Build a field map by tokenizing `input` under `policy`.
    pub fn parse(input: &str, policy: BareTokenPolicy) -> Self {
        let mut map = Self::default();
        for (key, value) in tokenize(input, policy) {
            map.push(key, value);
        }
        map
    }

    /// Append one value under `key`, creating the key slot on first sight.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// First value recorded under `key`, if the key occurred at all.
    pub fn first(&self, key: &FieldKey) -> Option<&str> {
        self.entries
            .get(key.as_str())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value recorded under `key`, in encounter order.
    pub fn values(&self, key: &FieldKey) -> &[FieldValue] {
        self.entries
            .get(key.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no token produced an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, values)` groups in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldValue])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }
}
