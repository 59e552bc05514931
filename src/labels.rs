//! Canonical label string operations: field sorting, schema parsing, and
//! schema serialization.
//!
//! All three operations are total over arbitrary input strings; malformed
//! tokens never abort a record.

use crate::fields::{
    tokenize, BareTokenPolicy, FieldMap, FIELD_EFFECTIVE_DATE, FIELD_JURISDICTION, FIELD_PARTY,
    FIELD_TERM, LABEL_DELIMITER, SCHEMA_FIELD_ORDER,
};
use crate::schema::{Nda, Party};
use crate::types::LabelString;

/// Reorder a raw label string so schema fields come first in canonical order.
///
/// Tokens group by key: the four schema fields emit first in their fixed
/// order, then every remaining key in original relative order. Duplicate
/// keys keep their multiplicity and within-key order. Bare tokens (no `=`)
/// are dropped.
pub fn sort_fields(input: &str) -> LabelString {
    let pairs = tokenize(input, BareTokenPolicy::Drop);

    let mut schema_groups: Vec<Vec<String>> = vec![Vec::new(); SCHEMA_FIELD_ORDER.len()];
    let mut others: Vec<String> = Vec::new();
    for (key, value) in pairs {
        let token = format!("{}{}{}", key, LABEL_DELIMITER, value);
        match SCHEMA_FIELD_ORDER
            .iter()
            .position(|field| field.as_str() == key)
        {
            Some(slot) => schema_groups[slot].push(token),
            None => others.push(token),
        }
    }

    let mut tokens: Vec<String> = Vec::new();
    for group in schema_groups {
        tokens.extend(group);
    }
    tokens.extend(others);
    tokens.join(" ")
}

/// Parse a raw label string into the structured schema.
///
/// Scalar fields take their first occurrence; parties keep every occurrence
/// in encounter order. Bare tokens are kept as empty-valued keys, so a
/// stray `term` token parses as an annotated empty term rather than an
/// absent one.
pub fn parse(input: &str) -> Nda {
    let fields = FieldMap::parse(input, BareTokenPolicy::KeepEmptyValue);

    Nda {
        effective_date: fields
            .first(&FIELD_EFFECTIVE_DATE)
            .unwrap_or_default()
            .to_string(),
        jurisdiction: fields
            .first(&FIELD_JURISDICTION)
            .unwrap_or_default()
            .to_string(),
        party: fields
            .values(&FIELD_PARTY)
            .iter()
            .map(|name| Party::new(name.clone()))
            .collect(),
        term: fields.first(&FIELD_TERM).map(str::to_string),
    }
}

/// Render the structured schema back into canonical string form.
///
/// Emission order is effective date, jurisdiction, parties, term. Fields
/// with empty values are skipped, as are parties with empty names.
pub fn serialize(nda: &Nda) -> LabelString {
    let mut tokens: Vec<String> = Vec::new();

    if !nda.effective_date.is_empty() {
        tokens.push(FIELD_EFFECTIVE_DATE.encode(&nda.effective_date));
    }
    if !nda.jurisdiction.is_empty() {
        tokens.push(FIELD_JURISDICTION.encode(&nda.jurisdiction));
    }
    for party in &nda.party {
        if !party.name.is_empty() {
            tokens.push(FIELD_PARTY.encode(&party.name));
        }
    }
    if let Some(term) = nda.term.as_deref() {
        if !term.is_empty() {
            tokens.push(FIELD_TERM.encode(term));
        }
    }

    tokens.join(" ")
}

/// Run the full canonical pipeline: sort, parse, and re-serialize.
///
/// The output is a fixed point of the pipeline: canonicalizing it again
/// returns the same string.
pub fn canonicalize(input: &str) -> LabelString {
    serialize(&parse(&sort_fields(input)))
}
