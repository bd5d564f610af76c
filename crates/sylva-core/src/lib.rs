//! Grammar engine and labeled concrete syntax tree.
//!
//! This crate provides the reusable machinery that language crates build on:
//! - `pattern` - the pattern algebra (sequence, choice, repetition, labels) and its DSL
//! - `terminal` - regex, literal, and keyword leaf matchers
//! - `grammar` - the named-rule registry and its two-phase builder
//! - `matcher` - the recursive matcher that derives trees from text
//! - `tree` - `ParseNode` and its operation surface (render, search, update, validate)
//! - `json` - lossless JSON encoding of trees
//! - `diag` - error rendering against source text
//!
//! Grammars are data: rules are registered by name into a [`Grammar`], and
//! rules reference each other by name, which is also how mutual recursion is
//! expressed. A successful match of a rule produces exactly one [`ParseNode`]
//! tagged with that rule's [`NodeKind`]; rendering a node and reparsing it
//! under its own rule yields a structurally equal node.

pub mod diag;
pub mod grammar;
pub mod json;
pub mod pattern;
pub mod terminal;
pub mod tree;

mod matcher;


pub use grammar::{Grammar, GrammarBuilder};
pub use pattern::{ChoiceMode, Pattern};
pub use terminal::Terminal;
pub use tree::{Item, NodeKind, ParseNode, Search};

/// Maximum number of nested rule entries during a single match.
///
/// Matching is recursive and input nesting drives the recursion depth; the
/// limit converts a stack overflow on pathologically nested input into an
/// ordinary [`Error::RecursionLimitExceeded`].
pub const MAX_RULE_DEPTH: u32 = 512;

/// Errors produced by grammar construction and matching.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The text does not match the rule, or matches only a prefix.
    /// `position` is the byte offset of the furthest failure point.
    #[error("{text:?} is not a valid string for rule {rule} (failure at offset {position})")]
    Syntax {
        rule: String,
        text: String,
        position: usize,
    },

    /// Input nested deeper than [`MAX_RULE_DEPTH`] rule entries.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// A single-value label accessor found zero or several occurrences.
    #[error("label {label:?} occurs {count} times, expected exactly one")]
    LabelCardinality { label: String, count: usize },

    /// A rule name was referenced but never registered.
    #[error("unknown rule {name:?}")]
    UnknownRule { name: String },

    /// A terminal's regular expression is invalid or unusable.
    #[error("invalid terminal pattern {pattern:?}: {reason}")]
    InvalidTerminal { pattern: String, reason: String },

    /// A serialized tree could not be decoded back into a `ParseNode`.
    #[error("malformed tree encoding: {reason}")]
    MalformedTree { reason: String },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
