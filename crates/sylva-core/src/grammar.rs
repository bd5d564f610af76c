//! The rule registry and its builder.
//!
//! Construction is two-phase. Rules are registered by name in declaration
//! order; patterns may reference rules that have not been registered yet
//! (that is the forward reference). [`GrammarBuilder::finish`] then binds
//! the graph: every referenced name must resolve, every terminal regex is
//! compiled, and zero-width terminals are rejected from unbounded
//! repetition positions. After binding, the grammar is immutable.

use std::collections::HashMap;

use indexmap::IndexMap;
use regex_automata::meta;

use crate::matcher::Matcher;
use crate::pattern::Pattern;
use crate::terminal::{self, Terminal};
use crate::tree::{NodeKind, ParseNode};
use crate::{Error, Result};

/// A registered production: a name, its composed pattern, and the node kind
/// bound to matches of it.
#[derive(Debug, Clone)]
pub(crate) struct RuleDef {
    pub(crate) name: &'static str,
    pub(crate) pattern: Pattern,
    pub(crate) kind: NodeKind,
}

/// Accumulates rule registrations before binding.
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    rules: IndexMap<&'static str, RuleDef>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `pattern` under `name`. The node kind bound to the rule is
    /// the rule name itself.
    ///
    /// Panics on a duplicate name: two rules competing for one name is a
    /// grammar-authoring defect, not a runtime condition.
    pub fn rule(&mut self, name: &'static str, pattern: Pattern) -> &mut Self {
        let previous = self.rules.insert(
            name,
            RuleDef {
                name,
                pattern,
                kind: NodeKind::new(name),
            },
        );
        assert!(previous.is_none(), "rule {name:?} registered twice");
        self
    }

    /// Binds the rule graph into an immutable [`Grammar`].
    pub fn finish(self) -> Result<Grammar> {
        let mut regexes = HashMap::new();
        for def in self.rules.values() {
            check_pattern(&def.pattern, &self.rules, &mut regexes, false)?;
        }
        Ok(Grammar {
            rules: self.rules,
            regexes,
        })
    }
}

/// Walks a pattern checking rule references and compiling terminals.
/// `unbounded` is true when the walk is inside an unbounded repetition,
/// where a zero-width terminal would stall the matcher.
fn check_pattern(
    pattern: &Pattern,
    rules: &IndexMap<&'static str, RuleDef>,
    regexes: &mut HashMap<String, meta::Regex>,
    unbounded: bool,
) -> Result<()> {
    match pattern {
        Pattern::Terminal(Terminal::Regex(src)) => {
            if unbounded && terminal::matches_empty(src) {
                return Err(Error::InvalidTerminal {
                    pattern: src.clone(),
                    reason: "may match the empty string inside an unbounded repetition".into(),
                });
            }
            if !regexes.contains_key(src) {
                let compiled = terminal::compile_regex(src)?;
                regexes.insert(src.clone(), compiled);
            }
            Ok(())
        }
        Pattern::Terminal(_) => Ok(()),
        Pattern::Rule(name) => {
            if rules.contains_key(name) {
                Ok(())
            } else {
                Err(Error::UnknownRule {
                    name: (*name).to_owned(),
                })
            }
        }
        Pattern::Sequence(items) => {
            for item in items {
                check_pattern(item, rules, regexes, unbounded)?;
            }
            Ok(())
        }
        Pattern::Choice { alts, .. } => {
            for alt in alts {
                check_pattern(alt, rules, regexes, unbounded)?;
            }
            Ok(())
        }
        Pattern::Optional(inner) | Pattern::NotFollowedBy(inner) => {
            check_pattern(inner, rules, regexes, unbounded)
        }
        Pattern::Repeat { max, pattern, .. } => {
            check_pattern(pattern, rules, regexes, unbounded || max.is_none())
        }
        Pattern::SeparatedList { item, sep } => {
            assert!(!sep.is_empty(), "separated list with empty separator");
            check_pattern(item, rules, regexes, unbounded)
        }
        Pattern::Label { pattern, .. } => check_pattern(pattern, rules, regexes, unbounded),
    }
}

/// An immutable, bound grammar: the rule registry plus its compiled
/// terminals.
#[derive(Debug)]
pub struct Grammar {
    rules: IndexMap<&'static str, RuleDef>,
    regexes: HashMap<String, meta::Regex>,
}

impl Grammar {
    /// Parses `text` as an instance of the named rule.
    ///
    /// The match is anchored at both ends: leading/trailing whitespace is
    /// tolerated, anything else unconsumed is a syntax error. No partial
    /// tree is ever returned.
    pub fn parse(&self, rule_name: &str, text: &str) -> Result<ParseNode> {
        let def = self.get(rule_name).ok_or_else(|| Error::UnknownRule {
            name: rule_name.to_owned(),
        })?;
        Matcher::new(self, text).parse_to_end(def)
    }

    /// The node kind for a registered rule name.
    pub fn kind(&self, name: &str) -> Option<NodeKind> {
        self.get(name).map(|def| def.kind)
    }

    /// True if a rule with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in declaration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&RuleDef> {
        self.rules.get(name)
    }

    pub(crate) fn regex(&self, src: &str) -> &meta::Regex {
        self.regexes
            .get(src)
            .expect("terminal regexes are compiled when the grammar is bound")
    }
}

#[cfg(test)]
mod tests {
    use crate::pattern::{lit, re, rule, seq, star};
    use crate::{Error, GrammarBuilder};

    #[test]
    fn forward_reference_resolves_at_finish() {
        let mut g = GrammarBuilder::new();
        g.rule("A", seq([lit("("), rule("B"), lit(")")]));
        g.rule("B", re("[0-9]+"));
        let g = g.finish().unwrap();
        assert!(g.contains("A"));
        assert_eq!(g.kind("B").unwrap().as_str(), "B");
    }

    #[test]
    fn dangling_reference_is_a_build_error() {
        let mut g = GrammarBuilder::new();
        g.rule("A", rule("Missing"));
        match g.finish() {
            Err(Error::UnknownRule { name }) => assert_eq!(name, "Missing"),
            other => panic!("expected UnknownRule, got {other:?}"),
        }
    }

    #[test]
    fn zero_width_terminal_rejected_under_star() {
        let mut g = GrammarBuilder::new();
        g.rule("A", star(re("[0-9]*")));
        assert!(matches!(g.finish(), Err(Error::InvalidTerminal { .. })));
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn duplicate_rule_panics() {
        let mut g = GrammarBuilder::new();
        g.rule("A", lit("a"));
        g.rule("A", lit("b"));
    }

    #[test]
    fn declaration_order_is_preserved() {
        let mut g = GrammarBuilder::new();
        g.rule("Z", lit("z"));
        g.rule("A", lit("a"));
        g.rule("M", lit("m"));
        let g = g.finish().unwrap();
        let names: Vec<_> = g.rule_names().collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }
}
