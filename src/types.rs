use std::fmt;

use serde_json::Value;

/// An on-chain identifier: account, permission, action or table name.
///
/// The empty name is the string form of a zero-valued numeric name and is
/// accepted by the name classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// A token code: 1 to 7 uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCode(String);

impl SymbolCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SymbolCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// A token symbol: decimal precision plus the token code, rendered `4,EOS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    precision: u8,
    code: String,
}

impl Symbol {
    pub fn new(precision: u8, code: impl Into<String>) -> Self {
        Self {
            precision,
            code: code.into(),
        }
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

/// The value handed to a rule, constructed explicitly at the call boundary.
///
/// A closed set of kinds replaces dynamic type inspection: rules match on
/// the variants they classify and report everything else as a type
/// mismatch or an unknown type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    StringList(Vec<String>),
    Name(Name),
    Symbol(Symbol),
    SymbolCode(SymbolCode),
    Number(serde_json::Number),
    Bool(bool),
    Null,
    /// A JSON object or heterogeneous array; no rule classifies it.
    Other,
}

impl FieldValue {
    /// Total mapping from a JSON value. An array qualifies as a string list
    /// only when every element is a string.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => list.push(s.clone()),
                        _ => return Self::Other,
                    }
                }
                Self::StringList(list)
            }
            Value::Number(n) => Self::Number(n.clone()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Null => Self::Null,
            Value::Object(_) => Self::Other,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

impl From<Name> for FieldValue {
    fn from(value: Name) -> Self {
        Self::Name(value)
    }
}

impl From<Symbol> for FieldValue {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<SymbolCode> for FieldValue {
    fn from(value: SymbolCode) -> Self {
        Self::SymbolCode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new(4, "EOS").to_string(), "4,EOS");
        assert_eq!(Symbol::new(0, "BOID").to_string(), "0,BOID");
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(
            FieldValue::from_json(&json!("abc")),
            FieldValue::String("abc".to_string())
        );
        assert_eq!(FieldValue::from_json(&json!(true)), FieldValue::Bool(true));
        assert_eq!(FieldValue::from_json(&json!(null)), FieldValue::Null);
        assert!(matches!(
            FieldValue::from_json(&json!(42)),
            FieldValue::Number(_)
        ));
    }

    #[test]
    fn test_from_json_string_array() {
        assert_eq!(
            FieldValue::from_json(&json!(["ab", "cd"])),
            FieldValue::StringList(vec!["ab".to_string(), "cd".to_string()])
        );
    }

    #[test]
    fn test_from_json_mixed_array_is_other() {
        assert_eq!(FieldValue::from_json(&json!(["ab", 1])), FieldValue::Other);
        assert_eq!(FieldValue::from_json(&json!({"a": 1})), FieldValue::Other);
    }
}
