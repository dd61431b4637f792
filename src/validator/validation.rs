use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::path;
use crate::{errors::RuleError, registry::Registry, types::FieldValue};

/// Field path to ordered rule tags. Rules for a field run in order; the
/// first failure stops that field's remaining rules.
pub type RuleSet = BTreeMap<String, Vec<String>>;

/// Field-keyed validation error messages. Empty means the input passed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Reserved key for failures that are not tied to a single field, such
    /// as an undecodable payload.
    pub const ENGINE_ERROR_FIELD: &'static str = "_error";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    fn add_engine_error(&mut self, message: impl Into<String>) {
        self.add(Self::ENGINE_ERROR_FIELD, message);
    }

    fn engine_error(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add_engine_error(message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

/// Per-call configuration for the validation entry points.
#[derive(Debug, Default, Clone)]
pub struct Options {
    messages: HashMap<String, String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the message reported when `tag` fails on `field`.
    pub fn message(
        mut self,
        field: impl Into<String>,
        tag: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.messages
            .insert(override_key(&field.into(), &tag.into()), message.into());
        self
    }

    fn override_for(&self, field: &str, tag: &str) -> Option<&str> {
        self.messages
            .get(&override_key(field, tag))
            .map(String::as_str)
    }
}

fn override_key(field: &str, tag: &str) -> String {
    format!("{field}:{tag}")
}

fn apply_rules(
    registry: &Registry,
    field: &str,
    tags: &[String],
    value: &FieldValue,
    options: &Options,
    errors: &mut ValidationErrors,
) {
    for tag in tags {
        let Some(rule) = registry.get(tag) else {
            let err = RuleError::UnknownRuleTag(tag.clone(), field.to_string());
            errors.add_engine_error(err.to_string());
            return;
        };

        if let Err(violation) = rule.validate(field, value) {
            let message = match options.override_for(field, tag) {
                Some(message) => message.to_string(),
                None => violation.to_string(),
            };
            errors.add(field, message);
            return;
        }
    }
}

fn validate_value(
    registry: &Registry,
    data: &Value,
    rules: &RuleSet,
    options: &Options,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (field, tags) in rules {
        // An absent field is not an error; rules run only on present values.
        let Some(value) = path::lookup(data, field) else {
            continue;
        };
        let value = FieldValue::from_json(value);
        apply_rules(registry, field, tags, &value, options, &mut errors);
    }
    errors
}

/// Validates decoded query parameters against a rule set.
///
/// A missing parameter validates as the empty string, matching how decoded
/// query sources report absent keys.
pub fn validate_query_params(
    registry: &Registry,
    params: &HashMap<String, String>,
    rules: &RuleSet,
    options: &Options,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (field, tags) in rules {
        let raw = params.get(field).cloned().unwrap_or_default();
        let value = FieldValue::String(raw);
        apply_rules(registry, field, tags, &value, options, &mut errors);
    }
    errors
}

/// Serializes `data` and validates the resulting JSON tree field by field.
/// Field paths follow the serde names of the serialized form.
pub fn validate_struct<T: Serialize>(
    registry: &Registry,
    data: &T,
    rules: &RuleSet,
    options: &Options,
) -> ValidationErrors {
    match serde_json::to_value(data) {
        Ok(value) => validate_value(registry, &value, rules, options),
        Err(err) => ValidationErrors::engine_error(RuleError::Serialization(err).to_string()),
    }
}

/// Decodes a JSON payload into `T` and validates it.
///
/// A decode failure short-circuits all field rules: the decoder's message
/// is reported under [`ValidationErrors::ENGINE_ERROR_FIELD`] and no data
/// is returned. The payload is parsed once; `T` is built from the same
/// tree the rules ran against.
pub fn validate_json_body<T: DeserializeOwned>(
    registry: &Registry,
    body: &[u8],
    rules: &RuleSet,
    options: &Options,
) -> (Option<T>, ValidationErrors) {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => return (None, ValidationErrors::engine_error(err.to_string())),
    };

    let data = match serde_json::from_value::<T>(value.clone()) {
        Ok(data) => data,
        Err(err) => return (None, ValidationErrors::engine_error(err.to_string())),
    };

    let errors = validate_value(registry, &value, rules, options);
    (Some(data), errors)
}
