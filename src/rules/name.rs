use crate::{errors::Violation, names, rules::Rule, types::FieldValue};

/// Validates account, permission, action and table identifiers.
///
/// Accepts a plain string or a [`crate::Name`]; every other kind is
/// reported as an unknown type for a name.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameRule;

impl Rule for NameRule {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation> {
        let raw = match value {
            FieldValue::String(s) => s.as_str(),
            FieldValue::Name(n) => n.as_str(),
            _ => return Err(Violation::UnknownNameType(field.to_string())),
        };

        if !names::is_valid_name(raw) {
            return Err(Violation::InvalidName(field.to_string()));
        }

        Ok(())
    }
}

/// Like [`NameRule`] but also accepts symbol (`4,EOS`) and symbol code
/// (`EOS`) shapes, in string or typed form.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtendedNameRule;

impl Rule for ExtendedNameRule {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation> {
        let rendered;
        let raw = match value {
            FieldValue::String(s) => s.as_str(),
            FieldValue::Name(n) => n.as_str(),
            FieldValue::SymbolCode(c) => c.as_str(),
            FieldValue::Symbol(s) => {
                rendered = s.to_string();
                rendered.as_str()
            }
            _ => return Err(Violation::UnknownNameType(field.to_string())),
        };

        if !names::is_valid_extended_name(raw) {
            return Err(Violation::InvalidName(field.to_string()));
        }

        Ok(())
    }
}
