/// Raw whitespace-delimited `key=value` annotation string attached to a record.
/// Example: `effective_date=2017-03-27 jurisdiction=New_York party=Kaleyra_Inc term=2_years`
pub type LabelString = String;
/// Column name drawn from the dataset's shared header file.
/// Examples: `filename`, `keys`
pub type FieldName = String;
/// Value payload of a single label field occurrence (underscores stand in for spaces).
/// Examples: `2017-03-27`, `New_York`, `2_years`
pub type FieldValue = String;
/// Name of a contracting party extracted from a label string.
/// Example: `Vonage_Holdings_Corp`
pub type PartyName = String;
