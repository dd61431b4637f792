pub mod errors;
pub mod names;
pub mod registry;
pub mod rules;
pub mod types;
pub mod validator;

pub use errors::{RuleError, Violation};
pub use registry::Registry;
pub use rules::{
    BlockNumRule, CursorRule, DateTimeRule, DelimitedListRule, ExtendedNameRule, HexListRule,
    HexRule, NameRule, Rule, TransactionIdRule,
};
pub use types::{FieldValue, Name, Symbol, SymbolCode};
pub use validator::{
    Options, RuleSet, ValidationErrors, validate_json_body, validate_query_params, validate_struct,
};
