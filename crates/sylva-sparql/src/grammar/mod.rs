//! The SPARQL 1.1 grammar, registered production by production.
//!
//! Rule names are the production names of the SPARQL 1.1 grammar; each
//! module covers one region of it. Choice modes are reproduced per production
//! exactly as specified: longest-match where the grammar is locally
//! ambiguous (prefixed names, string and numeric forms, term-versus-node
//! positions), first-match where a leading keyword or symbol already
//! decides the alternative. Normalizing either way silently changes which
//! alternative wins on ambiguous input.

use sylva_core::{Grammar, GrammarBuilder, Result};

mod expressions;
mod literals;
mod paths;
mod patterns;
mod query;
mod terminals;
mod tokens;
mod update;

/// Builds and binds the full grammar. Called once, from the crate's lazy
/// static.
pub(crate) fn build() -> Result<Grammar> {
    let mut g = GrammarBuilder::new();
    tokens::register(&mut g);
    terminals::register(&mut g);
    literals::register(&mut g);
    expressions::register(&mut g);
    paths::register(&mut g);
    patterns::register(&mut g);
    query::register(&mut g);
    update::register(&mut g);
    g.finish()
}

#[cfg(test)]
mod tests {
    use super::build;

    #[test]
    fn grammar_binds() {
        let g = build().unwrap();
        // Tokens, terminals, and non-terminals together; the census guards
        // against a module silently dropping out of `build`.
        assert!(g.len() > 280, "only {} rules registered", g.len());
        for root in ["QueryUnit", "UpdateUnit"] {
            assert!(g.contains(root), "missing root rule {root}");
        }
        for fragment in ["Expression", "Path", "GroupGraphPattern", "RDFLiteral", "IRIREF"] {
            assert!(g.contains(fragment), "missing rule {fragment}");
        }
    }

    #[test]
    fn keywords_are_their_own_kinds() {
        let g = build().unwrap();
        assert_eq!(g.parse("DISTINCT", "distinct").unwrap().to_string(), "DISTINCT");
        assert_eq!(g.parse("TYPE", "a").unwrap().to_string(), "a");
        assert!(g.parse("TYPE", "A").is_err());
        // NOT is only bare NOT; the compound forms are their own tokens.
        assert!(g.parse("NOT", "NOT").is_ok());
        assert!(g.parse("NOT", "NOT EXISTS").is_err());
        assert!(g.parse("NOT_EXISTS", "NOT EXISTS").is_ok());
    }
}
