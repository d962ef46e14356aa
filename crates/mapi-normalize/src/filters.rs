//! Ordered literal substring rewriting.

use mapi_model::OriginKind;

/// Replace every occurrence of `pattern` with `replacement`.
///
/// Matching is literal and non-overlapping, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

pub const fn rule(pattern: &'static str, replacement: &'static str) -> FilterRule {
    FilterRule {
        pattern,
        replacement,
    }
}

impl FilterRule {
    pub fn apply(&self, s: &str) -> String {
        s.replace(self.pattern, self.replacement)
    }
}

/// Runs every rule once, in order, each on the output of the previous one.
pub fn apply_rules(rules: &[FilterRule], s: &str) -> String {
    rules
        .iter()
        .fold(s.to_string(), |acc, rule| rule.apply(&acc))
}

/// Rules scoped to an origin kind plus a list that applies to every kind.
#[derive(Debug)]
pub struct FilterBank {
    scoped: &'static [(OriginKind, &'static [FilterRule])],
    any: &'static [FilterRule],
}

impl FilterBank {
    pub const fn new(
        scoped: &'static [(OriginKind, &'static [FilterRule])],
        any: &'static [FilterRule],
    ) -> Self {
        Self { scoped, any }
    }

    /// Rules scoped to `kind`; empty when the bank has none for it.
    pub fn scoped_rules(&self, kind: OriginKind) -> &'static [FilterRule] {
        self.scoped
            .iter()
            .find(|(scope, _)| *scope == kind)
            .map(|&(_, rules)| rules)
            .unwrap_or(&[])
    }

    pub fn any_rules(&self) -> &'static [FilterRule] {
        self.any
    }

    /// Scoped rules, then `middle`, then the "any" rules.
    pub fn apply_with<F>(&self, kind: OriginKind, s: &str, middle: F) -> String
    where
        F: FnOnce(String) -> String,
    {
        let scoped = apply_rules(self.scoped_rules(kind), s);
        let fixed = middle(scoped);
        apply_rules(self.any, &fixed)
    }

    pub fn apply(&self, kind: OriginKind, s: &str) -> String {
        self.apply_with(kind, s, |s| s)
    }
}
