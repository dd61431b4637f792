use once_cell::sync::Lazy;
use regex::Regex;

use crate::{errors::Violation, rules::Rule, types::FieldValue};

static HEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Fa-f0-9]+$").unwrap());

/// Valid iff non-empty, hex digits only, even length. The empty string
/// fails the regex since it requires at least one digit.
fn check_hex(field: &str, raw: &str) -> Result<(), Violation> {
    if !HEX_RE.is_match(raw) || raw.len() % 2 != 0 {
        return Err(Violation::InvalidHex(field.to_string()));
    }

    Ok(())
}

/// Validates an even-length string of hexadecimal digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexRule;

impl Rule for HexRule {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation> {
        let FieldValue::String(raw) = value else {
            return Err(Violation::NotAString(field.to_string()));
        };

        check_hex(field, raw)
    }
}

/// Validates a non-empty list where every element is valid hexadecimal.
///
/// Element errors carry the zero-based index in the field name
/// (`rows[1]`); the first failing element stops evaluation.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexListRule;

impl Rule for HexListRule {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation> {
        let FieldValue::StringList(rows) = value else {
            return Err(Violation::NotAStringArray(field.to_string()));
        };

        if rows.is_empty() {
            return Err(Violation::NotEnoughElements(field.to_string()));
        }

        for (i, row) in rows.iter().enumerate() {
            check_hex(&format!("{field}[{i}]"), row)?;
        }

        Ok(())
    }
}

/// Validates a 64-character hexadecimal transaction id.
///
/// The hexadecimal check runs first, so an odd-length or non-hex input
/// reports the hexadecimal message rather than the length one.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionIdRule;

impl Rule for TransactionIdRule {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation> {
        let FieldValue::String(raw) = value else {
            return Err(Violation::NotAString(field.to_string()));
        };

        check_hex(field, raw)?;

        if raw.len() != 64 {
            return Err(Violation::InvalidTrxIdLength(field.to_string()));
        }

        Ok(())
    }
}
