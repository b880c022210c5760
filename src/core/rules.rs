use crate::utils::error::Result;
use regex::{Captures, NoExpand, Regex};
use std::borrow::Cow;
use std::fmt;

/// How the text matched by a rule is rewritten.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// `${1}` style capture expansion.
    Template(&'static str),
    /// Inserted verbatim, `$` has no meaning.
    Literal(&'static str),
    /// Built from the captures. Returning the whole match leaves the text as is.
    Computed(fn(&Captures<'_>) -> String),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RewriteRule {
    label: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl RewriteRule {
    pub fn new(label: &'static str, pattern: &str, replacement: Replacement) -> Result<Self> {
        Ok(Self {
            label,
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }

    pub fn template(label: &'static str, pattern: &str, template: &'static str) -> Result<Self> {
        Self::new(label, pattern, Replacement::Template(template))
    }

    /// Plain substring replacement.
    pub fn literal(label: &'static str, from: &str, to: &'static str) -> Result<Self> {
        Self::new(label, &regex::escape(from), Replacement::Literal(to))
    }

    pub fn computed(
        label: &'static str,
        pattern: &str,
        build: fn(&Captures<'_>) -> String,
    ) -> Result<Self> {
        Self::new(label, pattern, Replacement::Computed(build))
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Replaces every non-overlapping match. Borrowed means nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Literal(literal) => self.pattern.replace_all(text, NoExpand(literal)),
            Replacement::Computed(build) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| build(caps)),
        }
    }
}

/// Ordered rules. Each rule sees the output of the rules before it.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: &'static str,
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn new(name: &'static str, rules: Vec<RewriteRule>) -> Self {
        Self { name, rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(RewriteRule::label)
    }

    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();

        for rule in &self.rules {
            let next = match rule.apply(&current) {
                Cow::Owned(rewritten) => Some(rewritten),
                Cow::Borrowed(_) => None,
            };

            if let Some(rewritten) = next {
                tracing::debug!("[{}] rule '{}' matched", self.name, rule.label());
                current = rewritten;
            }
        }

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_rule_expands_captures() {
        let rule = RewriteRule::template("swap", r"(\w+)=(\w+)", "${2}=${1}").unwrap();
        assert_eq!(rule.apply("a=b c=d"), "b=a d=c");
    }

    #[test]
    fn test_literal_rule_ignores_dollar_and_metachars() {
        let rule = RewriteRule::literal("lit", "f(x).y", "$1 z").unwrap();
        assert_eq!(rule.apply("f(x).y and fax.y"), "$1 z and fax.y");
    }

    #[test]
    fn test_computed_rule_can_keep_match() {
        let rule = RewriteRule::computed("upper-unless-skip", r"\w+", |caps| {
            let word = &caps[0];
            if word == "skip" {
                word.to_string()
            } else {
                word.to_uppercase()
            }
        })
        .unwrap();
        assert_eq!(rule.apply("one skip two"), "ONE skip TWO");
    }

    #[test]
    fn test_apply_without_match_borrows() {
        let rule = RewriteRule::template("none", r"zzz", "y").unwrap();
        assert!(matches!(rule.apply("abc"), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_rule_set_is_order_dependent() {
        let rules = RuleSet::new(
            "chain",
            vec![
                RewriteRule::literal("a-to-b", "a", "b").unwrap(),
                RewriteRule::literal("b-to-c", "b", "c").unwrap(),
            ],
        );
        assert_eq!(rules.apply("ab"), "cc");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.labels().collect::<Vec<_>>(), vec!["a-to-b", "b-to-c"]);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(RewriteRule::template("bad", r"(unclosed", "x").is_err());
    }
}
