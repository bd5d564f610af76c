//! SPARQL 1.1 concrete syntax trees.
//!
//! The full query and update grammar (productions [1] through [173] of the
//! SPARQL 1.1 specification) registered on the sylva engine, plus the two
//! pieces that sit in front of it:
//!
//! - [`strip::strip_comments`] - the preprocessor that removes trailing
//!   `#` comments while leaving string literals and IRI references intact
//! - [`parse_top_level`] - the dispatcher that tries the query root rule,
//!   falls back to the update root rule, and unifies the failures
//!
//! [`parse`] accepts any production name, so trees for fragments
//! (an `RDFLiteral`, a `Path`, a `GroupGraphPattern`) can be built and
//! manipulated directly. The grammar itself is built once, lazily, and
//! shared.

use std::sync::LazyLock;

use sylva_core::{Grammar, ParseNode};

mod grammar;
pub mod strip;

pub use strip::strip_comments;
pub use sylva_core::{Item, NodeKind, Search};

static GRAMMAR: LazyLock<Grammar> =
    LazyLock::new(|| grammar::build().expect("the SPARQL grammar is well-formed"));

/// Errors from parsing SPARQL text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// An engine-level failure: a syntax error against a specific rule,
    /// the recursion bound, or a label accessor misuse.
    #[error(transparent)]
    Engine(#[from] sylva_core::Error),

    /// Neither the query root rule nor the update root rule matched.
    /// The per-attempt errors are deliberately not surfaced: reporting
    /// the query failure for an update (or vice versa) misleads more
    /// than it helps.
    #[error("text cannot be parsed as a query or update: {text:?}")]
    NoViableRoot { text: String },
}

/// Result type for SPARQL parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The bound SPARQL grammar. Needed by tree operations that reparse:
/// `update_with`, `validate`, and friends.
pub fn grammar() -> &'static Grammar {
    &GRAMMAR
}

/// Parses `text` as an instance of the named production.
pub fn parse(rule_name: &str, text: &str) -> Result<ParseNode> {
    Ok(GRAMMAR.parse(rule_name, text)?)
}

/// Parses a complete query or update: strips comments, tries the
/// `QueryUnit` root, then the `UpdateUnit` root. Failures of both roots
/// collapse into a single [`Error::NoViableRoot`] carrying the original
/// text; no partial tree is ever returned.
pub fn parse_top_level(text: &str) -> Result<ParseNode> {
    let prepared = strip_comments(text)?;

    match GRAMMAR.parse("QueryUnit", &prepared) {
        Ok(tree) => return Ok(tree),
        Err(sylva_core::Error::Syntax { .. }) => {}
        Err(fatal) => return Err(fatal.into()),
    }
    match GRAMMAR.parse("UpdateUnit", &prepared) {
        Ok(tree) => Ok(tree),
        Err(sylva_core::Error::Syntax { .. }) => Err(Error::NoViableRoot {
            text: text.to_owned(),
        }),
        Err(fatal) => Err(fatal.into()),
    }
}
