use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use crate::{errors::Violation, rules::Rule, types::FieldValue};

/// Validates an opaque pagination cursor.
///
/// The empty string is valid and means "no cursor". Anything else must
/// decode as an unpadded URL-safe base64 token.
#[derive(Debug, Default, Clone, Copy)]
pub struct CursorRule;

impl Rule for CursorRule {
    fn validate(&self, field: &str, value: &FieldValue) -> Result<(), Violation> {
        let FieldValue::String(raw) = value else {
            return Err(Violation::NotAString(field.to_string()));
        };

        if raw.is_empty() {
            return Ok(());
        }

        if URL_SAFE_NO_PAD.decode(raw).is_err() {
            return Err(Violation::InvalidCursor(field.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    use super::*;

    fn check(value: &str) -> Result<(), Violation> {
        CursorRule.validate("cursor", &FieldValue::from(value))
    }

    #[test]
    fn test_empty_cursor_is_valid() {
        assert_eq!(check(""), Ok(()));
    }

    #[test]
    fn test_opaque_token_round_trip() {
        let token = URL_SAFE_NO_PAD.encode("block:123:trx:9");
        assert_eq!(check(&token), Ok(()));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(
            check("!!not base64!!"),
            Err(Violation::InvalidCursor("cursor".to_string()))
        );
    }

    #[test]
    fn test_non_string_is_rejected() {
        assert_eq!(
            CursorRule.validate("cursor", &FieldValue::Bool(true)),
            Err(Violation::NotAString("cursor".to_string()))
        );
    }
}
