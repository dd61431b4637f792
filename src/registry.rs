use std::collections::HashMap;

use crate::rules::{
    BlockNumRule, CursorRule, ExtendedNameRule, HexListRule, HexRule, NameRule, Rule,
    TransactionIdRule,
};

/// Maps rule tags to executable rules.
///
/// Built once at startup and passed by reference into validation calls;
/// there is no process-global registration. Registering twice under the
/// same tag keeps the last rule.
pub struct Registry {
    rules: HashMap<String, Box<dyn Rule>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// A registry pre-loaded with every built-in rule under its
    /// conventional tag. Configured rules (date layouts, delimited lists)
    /// are registered by the caller with whatever tag its rule sets use.
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        registry.register("eos_block_num", BlockNumRule);
        registry.register("eos_name", NameRule);
        registry.register("eos_extended_name", ExtendedNameRule);
        registry.register("hex", HexRule);
        registry.register("hex_slice", HexListRule);
        registry.register("eos_trx_id", TransactionIdRule);
        registry.register("cursor", CursorRule);
        registry
    }

    pub fn register(&mut self, tag: impl Into<String>, rule: impl Rule + 'static) {
        self.rules.insert(tag.into(), Box::new(rule));
    }

    pub fn get(&self, tag: &str) -> Option<&dyn Rule> {
        self.rules.get(tag).map(|rule| rule.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Violation, types::FieldValue};

    #[test]
    fn test_builtin_tags_are_registered() {
        let registry = Registry::with_builtin_rules();
        for tag in [
            "eos_block_num",
            "eos_name",
            "eos_extended_name",
            "hex",
            "hex_slice",
            "eos_trx_id",
            "cursor",
        ] {
            assert!(registry.contains(tag), "missing builtin tag '{tag}'");
        }
    }

    #[test]
    fn test_register_last_writer_wins() {
        let mut registry = Registry::new();
        registry.register("check", HexRule);
        registry.register("check", NameRule);

        // The name message proves the second registration replaced the first.
        let outcome = registry
            .get("check")
            .unwrap()
            .validate("test", &FieldValue::from("ZZ"));
        assert_eq!(outcome, Err(Violation::InvalidName("test".to_string())));
    }

    #[test]
    fn test_unknown_tag() {
        let registry = Registry::new();
        assert!(registry.get("nope").is_none());
    }
}
