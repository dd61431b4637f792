mod path;
mod validation;

pub use validation::{
    Options, RuleSet, ValidationErrors, validate_json_body, validate_query_params, validate_struct,
};
