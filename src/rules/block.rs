use crate::{errors::Violation, rules::Rule, types::FieldValue};

/// Validates that a string parses as a base-10, 64-bit block number.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockNumRule;

impl Rule for BlockNumRule {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation> {
        let FieldValue::String(raw) = value else {
            return Err(Violation::NotAString(field.to_string()));
        };

        if raw.parse::<i64>().is_err() {
            return Err(Violation::InvalidBlockNum(field.to_string()));
        }

        Ok(())
    }
}
