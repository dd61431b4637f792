use crate::{
    errors::Violation,
    names::explode_names,
    rules::{
        Rule,
        name::{ExtendedNameRule, NameRule},
    },
    types::FieldValue,
};

/// Splits a delimited string and applies an element rule to each entry.
///
/// Elements that trim to empty are discarded before counting, but the
/// element rule receives the original untrimmed substring. Callers depend
/// on that asymmetry; do not fold trimming into the element check.
///
/// The first failing element short-circuits evaluation and reports under
/// the index-suffixed field name (`accounts[2]`).
pub struct DelimitedListRule {
    separator: String,
    max_count: usize,
    element_rule: Box<dyn Rule>,
}

impl DelimitedListRule {
    pub fn new(
        separator: impl Into<String>,
        max_count: usize,
        element_rule: Box<dyn Rule>,
    ) -> Self {
        Self {
            separator: separator.into(),
            max_count,
            element_rule,
        }
    }

    /// A delimited list of account names.
    pub fn names(separator: impl Into<String>, max_count: usize) -> Self {
        Self::new(separator, max_count, Box::new(NameRule))
    }

    /// A delimited list of account names, symbols or symbol codes.
    pub fn extended_names(separator: impl Into<String>, max_count: usize) -> Self {
        Self::new(separator, max_count, Box::new(ExtendedNameRule))
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }
}

impl Rule for DelimitedListRule {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation> {
        let FieldValue::String(raw) = value else {
            return Err(Violation::NotAString(field.to_string()));
        };

        let elements = explode_names(raw, &self.separator);
        if elements.is_empty() {
            return Err(Violation::NotEnoughElements(field.to_string()));
        }

        if elements.len() > self.max_count {
            return Err(Violation::TooManyElements(
                field.to_string(),
                self.max_count,
            ));
        }

        for (i, element) in elements.iter().enumerate() {
            let element_value = FieldValue::from(*element);
            self.element_rule
                .validate(&format!("{field}[{i}]"), &element_value)?;
        }

        Ok(())
    }
}
