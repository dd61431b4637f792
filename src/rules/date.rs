use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{errors::Violation, rules::Rule, types::FieldValue};

/// Parses strings against a chrono `strftime` layout captured at
/// construction time. The layout is echoed verbatim in the error message
/// so callers can tell which format was expected.
#[derive(Debug, Clone)]
pub struct DateTimeRule {
    layout: String,
}

impl DateTimeRule {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
        }
    }

    /// The layout this rule parses against.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    // A layout may describe a zoned date-time, a naive one, a bare date or
    // a bare time; each chrono parser only accepts layouts that consume the
    // tokens it knows, so trying them in order keeps one rule type working
    // for all four shapes.
    fn parses(&self, raw: &str) -> bool {
        DateTime::<FixedOffset>::parse_from_str(raw, &self.layout).is_ok()
            || NaiveDateTime::parse_from_str(raw, &self.layout).is_ok()
            || NaiveDate::parse_from_str(raw, &self.layout).is_ok()
            || NaiveTime::parse_from_str(raw, &self.layout).is_ok()
    }
}

impl Rule for DateTimeRule {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation> {
        let FieldValue::String(raw) = value else {
            return Err(Violation::NotAString(field.to_string()));
        };

        if !self.parses(raw) {
            return Err(Violation::InvalidDateTime(
                field.to_string(),
                self.layout.clone(),
            ));
        }

        Ok(())
    }
}
