//! RFC 3987 IRI grammar for the sylva engine.
//!
//! A companion grammar: much smaller than the query grammar, scannerless,
//! and first-match throughout (the RFC's productions are prefix-ordered by
//! construction). Character-level productions are composed at the regex
//! level so that components like paths and host names stay single tokens;
//! the structural productions above them are ordinary rules.
//!
//! Entry points: [`parse`] with any registered rule name, or
//! [`parse_iri_reference`] for the grammar root.

use std::sync::LazyLock;

use sylva_core::{Grammar, ParseNode, Result};

mod grammar;

static GRAMMAR: LazyLock<Grammar> =
    LazyLock::new(|| grammar::build().expect("the IRI grammar is well-formed"));

/// The bound IRI grammar.
pub fn grammar() -> &'static Grammar {
    &GRAMMAR
}

/// Parses `text` as an instance of the named rule.
pub fn parse(rule_name: &str, text: &str) -> Result<ParseNode> {
    GRAMMAR.parse(rule_name, text)
}

/// Parses `text` as an `IRI-reference` (an IRI or a relative reference).
pub fn parse_iri_reference(text: &str) -> Result<ParseNode> {
    parse("IRI_reference", text)
}
