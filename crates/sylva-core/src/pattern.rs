//! The pattern algebra grammars are composed from.
//!
//! A [`Pattern`] is plain data; nothing is compiled or validated until the
//! owning [`GrammarBuilder`](crate::GrammarBuilder) is finished. Rules refer
//! to each other with [`Pattern::Rule`], which doubles as the forward
//! reference: a name may be used before the rule carrying it is registered,
//! and the builder checks that every name resolves when the grammar is bound.
//!
//! The free functions at the bottom are the construction DSL; grammar
//! definitions read as `seq([rule("LPAR"), opt(label("distinct",
//! rule("DISTINCT"))), ...])`.

use crate::terminal::Terminal;

/// How an ordered choice resolves when several alternatives match.
///
/// The two modes are not interchangeable: a grammar that is locally
/// ambiguous (e.g. a prefixed name with a local part vs. a bare namespace
/// prefix) needs [`Longest`](ChoiceMode::Longest), while lexically disjoint
/// alternatives use [`First`](ChoiceMode::First). Source grammars specify
/// the mode per production and it must be preserved as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMode {
    /// Alternatives are tried in declaration order; the first match wins.
    First,
    /// Every alternative is tried at the same position; the one consuming
    /// the most input wins, ties broken by declaration order.
    Longest,
}

/// A composed grammar pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// A leaf matcher producing a literal string item.
    Terminal(Terminal),
    /// All sub-patterns must match contiguously, in order. An empty
    /// sequence matches zero input (the grammar's epsilon).
    Sequence(Vec<Pattern>),
    /// Ordered alternation, resolved per `mode`.
    Choice { mode: ChoiceMode, alts: Vec<Pattern> },
    /// Zero-or-one occurrence.
    Optional(Box<Pattern>),
    /// Greedy bounded repetition. `max: None` means unbounded.
    Repeat {
        min: u32,
        max: Option<u32>,
        pattern: Box<Pattern>,
    },
    /// Reference to another rule by name. Produces one child node of that
    /// rule's kind. Resolution happens through the registry at match time,
    /// which is what makes mutual recursion expressible.
    Rule(&'static str),
    /// One-or-more `item`s joined by the literal `sep`. Separators are
    /// retained in the output as terminal items between the children, so
    /// rendering reproduces their placement.
    SeparatedList {
        item: Box<Pattern>,
        sep: &'static str,
    },
    /// Assigns `name` as the parent-relative label of every child node the
    /// inner pattern produces (one node in the common case; every element
    /// for a separated list).
    Label {
        name: &'static str,
        pattern: Box<Pattern>,
    },
    /// Zero-width negative lookahead: succeeds without consuming input iff
    /// the inner pattern does not match here.
    NotFollowedBy(Box<Pattern>),
}

/// Literal text, matched exactly.
pub fn lit(text: &'static str) -> Pattern {
    Pattern::Terminal(Terminal::Literal(text))
}

/// Case-sensitive keyword: literal text that must not be followed by an
/// identifier character.
pub fn kw(text: &'static str) -> Pattern {
    Pattern::Terminal(Terminal::Keyword {
        text,
        caseless: false,
    })
}

/// Case-insensitive keyword. The declared spelling is what the match
/// produces, so rendering canonicalizes case.
pub fn ckw(text: &'static str) -> Pattern {
    Pattern::Terminal(Terminal::Keyword {
        text,
        caseless: true,
    })
}

/// Regular-expression terminal (anchored prefix match).
pub fn re(pattern: impl Into<String>) -> Pattern {
    Pattern::Terminal(Terminal::Regex(pattern.into()))
}

/// Reference to the rule registered under `name`.
pub fn rule(name: &'static str) -> Pattern {
    Pattern::Rule(name)
}

/// Contiguous sequence of patterns.
pub fn seq(items: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::Sequence(items.into_iter().collect())
}

/// The empty match.
pub fn empty() -> Pattern {
    Pattern::Sequence(Vec::new())
}

/// First-match ordered choice.
pub fn first(alts: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::Choice {
        mode: ChoiceMode::First,
        alts: alts.into_iter().collect(),
    }
}

/// Longest-match ordered choice.
pub fn longest(alts: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::Choice {
        mode: ChoiceMode::Longest,
        alts: alts.into_iter().collect(),
    }
}

/// Zero-or-one occurrence.
pub fn opt(pattern: Pattern) -> Pattern {
    Pattern::Optional(Box::new(pattern))
}

/// Zero-or-more occurrences.
pub fn star(pattern: Pattern) -> Pattern {
    Pattern::Repeat {
        min: 0,
        max: None,
        pattern: Box::new(pattern),
    }
}

/// One-or-more occurrences.
pub fn plus(pattern: Pattern) -> Pattern {
    Pattern::Repeat {
        min: 1,
        max: None,
        pattern: Box::new(pattern),
    }
}

/// Bounded repetition.
pub fn repeat(min: u32, max: Option<u32>, pattern: Pattern) -> Pattern {
    Pattern::Repeat {
        min,
        max,
        pattern: Box::new(pattern),
    }
}

/// One-or-more `item`s separated by the literal `sep`, separators kept.
pub fn sep_list(item: Pattern, sep: &'static str) -> Pattern {
    Pattern::SeparatedList {
        item: Box::new(item),
        sep,
    }
}

/// Labels the child node(s) produced by `pattern`.
pub fn label(name: &'static str, pattern: Pattern) -> Pattern {
    Pattern::Label {
        name,
        pattern: Box::new(pattern),
    }
}

/// Negative lookahead.
pub fn not_next(pattern: Pattern) -> Pattern {
    Pattern::NotFollowedBy(Box::new(pattern))
}
