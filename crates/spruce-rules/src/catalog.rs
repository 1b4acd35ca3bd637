//! The built-in rule catalogue.

use crate::{NoSliceCopy, NoWithAssign, UseIn};
use spruce_core::{Registry, RuleBox};

/// Returns all built-in rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(UseIn::new()),
        Box::new(NoWithAssign::new()),
        Box::new(NoSliceCopy::new()),
    ]
}

/// Builds the registry of built-in rules.
///
/// # Panics
///
/// Panics if the catalogue declares a duplicate code or name, which is a
/// programming error in this crate.
#[must_use]
pub fn registry() -> Registry {
    Registry::from_rules(all_rules())
        .unwrap_or_else(|e| panic!("spruce: built-in rule catalogue is inconsistent: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spruce_core::Rule;

    #[test]
    fn catalogue_codes_are_unique_and_ordered() {
        let reg = registry();
        let codes: Vec<u32> = reg.rules().map(Rule::code).collect();
        assert_eq!(codes, [108, 127, 145]);
    }

    #[test]
    fn every_rule_documents_itself() {
        for rule in registry().rules() {
            assert!(!rule.name().is_empty());
            assert!(!rule.message().is_empty());
            assert!(!rule.categories().is_empty());
            assert!(!rule.explanation().is_empty(), "{} lacks docs", rule.name());
        }
    }
}
