use thiserror::Error;

/// A failed validation outcome for a single field.
///
/// Each variant renders the format-stable message returned to API callers.
/// These are expected results of checking bad input, not crashes; rules
/// return them instead of panicking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("The {0} field must be a string")]
    NotAString(String),

    #[error("The {0} field must be a string array")]
    NotAStringArray(String),

    #[error("The {0} field must be a valid EOS block num")]
    InvalidBlockNum(String),

    #[error("The {0} field must be a valid EOS name")]
    InvalidName(String),

    #[error("The {0} field is not a known type for an EOS name")]
    UnknownNameType(String),

    #[error("The {0} field must be a valid hexadecimal")]
    InvalidHex(String),

    #[error("The {0} field must have exactly 64 characters")]
    InvalidTrxIdLength(String),

    #[error("The {0} field is not a valid cursor")]
    InvalidCursor(String),

    #[error("The {0} field is not a valid date time string according to layout {1}")]
    InvalidDateTime(String, String),

    #[error("The {0} field must have at least 1 element")]
    NotEnoughElements(String),

    #[error("The {0} field must have at most {1} elements")]
    TooManyElements(String, usize),
}

/// Configuration or engine-level failure.
///
/// Unlike [`Violation`], these indicate a broken validation setup or an
/// undecodable payload. They surface under the reserved `_error` key of a
/// [`crate::ValidationErrors`] collection rather than under a field.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("rule '{0}' is not registered for field '{1}'")]
    UnknownRuleTag(String, String),

    #[error("failed to serialize data: {0}")]
    Serialization(#[from] serde_json::Error),
}
