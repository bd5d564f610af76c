//! A toy integer-expression language built on the engine, end to end.
//!
//! Small enough to read in one sitting, but it exercises forward
//! references, mutual recursion, separated lists, and the round-trip
//! contract without any of the big grammars.

use sylva_core::pattern::{first, label, re, rule, sep_list, seq};
use sylva_core::{Error, Grammar, GrammarBuilder, Search};

fn intexp() -> Grammar {
    let mut g = GrammarBuilder::new();
    g.rule("LPAR", re(r"\("));
    g.rule("RPAR", re(r"\)"));
    g.rule("INTEGER", re("[0-9]+"));
    // References Expression before it is registered: the forward reference
    // resolves when the builder finishes.
    g.rule(
        "BracketedExpression",
        seq([rule("LPAR"), rule("Expression"), rule("RPAR")]),
    );
    g.rule(
        "BaseExpression",
        first([rule("INTEGER"), rule("BracketedExpression")]),
    );
    g.rule(
        "AdditiveExpression",
        label("term", sep_list(rule("BaseExpression"), "+")),
    );
    g.rule("Expression", rule("AdditiveExpression"));
    g.finish().unwrap()
}

/// Sums every integer leaf; navigation stands in for evaluation.
fn compute(g: &Grammar, text: &str) -> u64 {
    let tree = g.parse("Expression", text).unwrap();
    tree.search_elements(
        &Search::new()
            .kind(g.kind("INTEGER").unwrap())
            .labeled_only(false),
    )
    .iter()
    .map(|n| n.to_string().parse::<u64>().unwrap())
    .sum()
}

#[test]
fn flat_sum() {
    let g = intexp();
    assert_eq!(compute(&g, "123 + 456"), 579);
    assert_eq!(compute(&g, "123 + 456 + 789"), 1368);
    assert_eq!(compute(&g, "12345"), 12345);
}

#[test]
fn nested_sum() {
    let g = intexp();
    assert_eq!(compute(&g, "(123 + 456)"), 579);
    assert_eq!(compute(&g, "1 + (2 + (3 + 4)) + 5"), 15);
}

#[test]
fn terms_are_labeled_and_separators_kept() {
    let g = intexp();
    let tree = g.parse("AdditiveExpression", "1 + 2 + 3").unwrap();
    assert_eq!(tree.values_for_label("term").len(), 3);
    assert_eq!(tree.to_string(), "1 + 2 + 3");
}

#[test]
fn round_trip_is_idempotent() {
    let g = intexp();
    for text in ["7", "1 + 2", "(1 + 2) + (3 + 4)", "((((5))))"] {
        let tree = g.parse("Expression", text).unwrap();
        let reparsed = g.parse("Expression", &tree.to_string()).unwrap();
        assert_eq!(reparsed, tree, "{text}");
        assert!(tree.validate(&g), "{text}");
    }
}

#[test]
fn update_replaces_subtree_in_place() {
    let g = intexp();
    let mut tree = g.parse("Expression", "1 + (2 + 3)").unwrap();
    assert_eq!(compute(&g, &tree.to_string()), 6);

    // Rewrite the whole expression under its own rule.
    tree.update_with(&g, "(10 + 20) + 30").unwrap();
    assert_eq!(tree.to_string(), "( 10 + 20 ) + 30");

    // An invalid replacement leaves the tree untouched.
    let before = tree.clone();
    assert!(tree.update_with(&g, "1 + + 2").is_err());
    assert_eq!(tree, before);
}

#[test]
fn pathological_nesting_is_bounded() {
    let g = intexp();
    let deep = format!("{}{}{}", "(".repeat(400), "1", ")".repeat(400));
    assert!(matches!(
        g.parse("Expression", &deep),
        Err(Error::RecursionLimitExceeded)
    ));
}
