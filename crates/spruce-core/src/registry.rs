//! The rule registry and rule selection.
//!
//! The registry is the static catalogue of all rules: append-only during
//! process startup, read-only thereafter. Enumeration order is ascending
//! rule code, so listings are deterministic.

use crate::rule::{Rule, RuleBox};
use crate::types::RuleInfo;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two rules declared the same code.
    #[error("duplicate rule code {0}")]
    DuplicateCode(u32),

    /// Two rules declared the same name.
    #[error("duplicate rule name `{0}`")]
    DuplicateName(String),
}

/// A caller-facing configuration error in a selection request.
///
/// Unknown selectors are reported, never fatal: the remaining valid
/// selectors still take effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Selector named a code no registered rule has.
    #[error("unknown rule code {0}")]
    UnknownCode(u32),

    /// Selector named a category no registered rule has.
    #[error("unknown rule category `{0}`")]
    UnknownCategory(String),
}

/// One enable request: an exact rule code or a category tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Enable the rule with this code.
    Code(u32),
    /// Enable every rule carrying this category tag.
    Category(String),
}

/// A set of selectors. An empty selection enables every registered rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selectors: Vec<Selector>,
}

impl Selection {
    /// Selection enabling all rules.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Selection from explicit selectors.
    #[must_use]
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    /// Selection from exact rule codes.
    #[must_use]
    pub fn codes(codes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            selectors: codes.into_iter().map(Selector::Code).collect(),
        }
    }

    /// Selection from category tags.
    #[must_use]
    pub fn categories<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self {
            selectors: categories
                .into_iter()
                .map(|c| Selector::Category(c.into()))
                .collect(),
        }
    }

    /// True when this selection enables every rule.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.selectors.is_empty()
    }

    /// The individual selectors.
    #[must_use]
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }
}

/// The static rule catalogue, keyed by unique code.
#[derive(Default)]
pub struct Registry {
    // Sorted ascending by code; insertion enforces uniqueness.
    rules: Vec<RuleBox>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a rule list.
    ///
    /// # Errors
    ///
    /// Returns an error if two rules share a code or a name.
    pub fn from_rules(rules: Vec<RuleBox>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for rule in rules {
            registry.register(rule)?;
        }
        Ok(registry)
    }

    /// Adds one rule, keeping ascending code order.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule's code or name is already taken.
    pub fn register(&mut self, rule: RuleBox) -> Result<(), RegistryError> {
        if self.rules.iter().any(|r| r.code() == rule.code()) {
            return Err(RegistryError::DuplicateCode(rule.code()));
        }
        if self.rules.iter().any(|r| r.name() == rule.name()) {
            return Err(RegistryError::DuplicateName(rule.name().to_string()));
        }
        let at = self.rules.partition_point(|r| r.code() < rule.code());
        self.rules.insert(at, rule);
        Ok(())
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in ascending code order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| &**r)
    }

    /// Looks up a rule by exact code.
    #[must_use]
    pub fn by_code(&self, code: u32) -> Option<&dyn Rule> {
        self.rules.iter().find(|r| r.code() == code).map(|r| &**r)
    }

    /// All category tags carried by registered rules, sorted.
    #[must_use]
    pub fn category_tags(&self) -> BTreeSet<&'static str> {
        self.rules
            .iter()
            .flat_map(|r| r.categories().iter().copied())
            .collect()
    }

    /// Catalogue entries in ascending code order.
    #[must_use]
    pub fn infos(&self) -> Vec<RuleInfo> {
        self.rules.iter().map(|r| r.info()).collect()
    }

    /// Resolves a selection into the enabled rule set.
    ///
    /// Returns the enabled rules in ascending code order (deduplicated)
    /// plus one [`SelectionError`] per unknown selector. Unknown selectors
    /// never abort the valid remainder.
    #[must_use]
    pub fn select(&self, selection: &Selection) -> (Vec<&dyn Rule>, Vec<SelectionError>) {
        if selection.is_all() {
            return (self.rules().collect(), Vec::new());
        }

        let mut enabled: BTreeSet<u32> = BTreeSet::new();
        let mut errors = Vec::new();

        for selector in selection.selectors() {
            match selector {
                Selector::Code(code) => {
                    if self.by_code(*code).is_some() {
                        enabled.insert(*code);
                    } else {
                        errors.push(SelectionError::UnknownCode(*code));
                    }
                }
                Selector::Category(category) => {
                    let mut matched = false;
                    for rule in &self.rules {
                        if rule.categories().contains(&category.as_str()) {
                            enabled.insert(rule.code());
                            matched = true;
                        }
                    }
                    if !matched {
                        errors.push(SelectionError::UnknownCategory(category.clone()));
                    }
                }
            }
        }

        let rules = self
            .rules()
            .filter(|r| enabled.contains(&r.code()))
            .collect();
        (rules, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Module;
    use crate::types::Diagnostic;

    struct FakeRule {
        code: u32,
        name: &'static str,
        categories: &'static [&'static str],
    }

    impl Rule for FakeRule {
        fn code(&self) -> u32 {
            self.code
        }
        fn name(&self) -> &'static str {
            self.name
        }
        fn message(&self) -> &'static str {
            "fake"
        }
        fn categories(&self) -> &'static [&'static str] {
            self.categories
        }
        fn check(&self, _module: &Module) -> Vec<Diagnostic> {
            Vec::new()
        }
    }

    fn registry() -> Registry {
        Registry::from_rules(vec![
            Box::new(FakeRule {
                code: 145,
                name: "no-slice-copy",
                categories: &["readability"],
            }),
            Box::new(FakeRule {
                code: 108,
                name: "use-in",
                categories: &["logical", "readability"],
            }),
            Box::new(FakeRule {
                code: 127,
                name: "no-with-assign",
                categories: &["readability"],
            }),
        ])
        .unwrap()
    }

    #[test]
    fn enumeration_is_ascending_by_code() {
        let codes: Vec<u32> = registry().rules().map(Rule::code).collect();
        assert_eq!(codes, [108, 127, 145]);
    }

    #[test]
    fn duplicate_code_is_rejected() {
        let mut reg = registry();
        let err = reg
            .register(Box::new(FakeRule {
                code: 108,
                name: "other-name",
                categories: &[],
            }))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCode(108)));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut reg = registry();
        let err = reg
            .register(Box::new(FakeRule {
                code: 999,
                name: "use-in",
                categories: &[],
            }))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(_)));
    }

    #[test]
    fn empty_selection_enables_everything() {
        let reg = registry();
        let (rules, errors) = reg.select(&Selection::all());
        assert_eq!(rules.len(), 3);
        assert!(errors.is_empty());
    }

    #[test]
    fn selection_by_code() {
        let reg = registry();
        let (rules, errors) = reg.select(&Selection::codes([127]));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name(), "no-with-assign");
        assert!(errors.is_empty());
    }

    #[test]
    fn selection_by_category_dedups_and_orders() {
        let reg = registry();
        let (rules, errors) = reg.select(&Selection::new(vec![
            Selector::Category("readability".into()),
            Selector::Code(108),
        ]));
        let codes: Vec<u32> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(codes, [108, 127, 145]);
        assert!(errors.is_empty());
    }

    #[test]
    fn unknown_selectors_reported_without_dropping_valid_ones() {
        let reg = registry();
        let (rules, errors) = reg.select(&Selection::new(vec![
            Selector::Code(9999),
            Selector::Category("nonexistent".into()),
            Selector::Code(145),
        ]));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].code(), 145);
        assert_eq!(
            errors,
            [
                SelectionError::UnknownCode(9999),
                SelectionError::UnknownCategory("nonexistent".into()),
            ]
        );
    }

    #[test]
    fn category_tags_are_sorted_and_unique() {
        let tags: Vec<&str> = registry().category_tags().into_iter().collect();
        assert_eq!(tags, ["logical", "readability"]);
    }
}
