//! Ordered pattern/replacement rule tables.
//!
//! A [`Rule`] pairs a compiled regex with either a `$`-template or a
//! function of the captures. Tables are applied with [`apply_rules`]: each
//! rule sweeps the whole text once, replacing every match, and the next rule
//! sees its output. Order is part of the contract.
//!
//! All patterns are compiled once on first use via `LazyLock`. The `regex`
//! crate searches in linear time, so lazy "anything up to the closing tag"
//! patterns cannot backtrack catastrophically on adversarial input.

use std::borrow::Cow;
use std::fmt;

use regex::{Captures, Regex};

mod cleanup;
mod structural;

pub use cleanup::cleanup_rules;
pub use structural::{structural_rules, CLAN_IMAGE_CDN};

/// What a [`Rule`] substitutes for each match.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// Fixed template; `${n}` expands to capture group `n`.
    Template(&'static str),
    /// Computed from the captures of each match.
    With(fn(&Captures<'_>) -> String),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::With(_) => f.write_str("With(..)"),
        }
    }
}

/// A single named rewrite step.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    /// Builds a rule from an already-compiled pattern.
    #[must_use]
    pub fn new(name: &'static str, pattern: Regex, replacement: Replacement) -> Self {
        Self {
            name,
            pattern,
            replacement,
        }
    }

    /// Short identifier used in trace logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The compiled match pattern.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Replaces every match in `text`. Borrows when nothing matched.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::With(render) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| render(caps)),
        }
    }
}

/// Applies `rules` in table order, each over the output of the previous one.
#[must_use]
pub fn apply_rules(mut text: String, rules: &[Rule]) -> String {
    for rule in rules {
        let rewritten = match rule.apply(&text) {
            Cow::Owned(rewritten) => Some(rewritten),
            Cow::Borrowed(_) => None,
        };
        if let Some(rewritten) = rewritten {
            log::trace!("rule `{}` rewrote text ({} bytes)", rule.name, rewritten.len());
            text = rewritten;
        }
    }
    text
}

/// Compiles a table pattern. Patterns are literals checked by the unit tests.
#[allow(clippy::expect_used)]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule table pattern must compile")
}

/// Shorthand for a template rule.
pub(crate) fn template(name: &'static str, pattern: &str, template: &'static str) -> Rule {
    Rule::new(name, compile(pattern), Replacement::Template(template))
}

/// Shorthand for a computed rule.
pub(crate) fn computed(
    name: &'static str,
    pattern: &str,
    render: fn(&Captures<'_>) -> String,
) -> Rule {
    Rule::new(name, compile(pattern), Replacement::With(render))
}
