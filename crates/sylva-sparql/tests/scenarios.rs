//! Behavioral scenarios for the tree model against the SPARQL grammar:
//! labeled children, dumps, search, in-place updates, and the dispatcher.

use sylva_core::json;
use sylva_sparql::{grammar, parse, parse_top_level, Error, Search};

#[test]
fn rdf_literal_labels_and_rendering() {
    let lit = parse("RDFLiteral", "'work' ^^<work>").unwrap();

    assert_eq!(lit.to_string(), "'work' ^^ <work>");
    assert!(lit.is_branch());
    assert!(lit.is_label_consistent());
    assert!(lit.validate(grammar()));

    let lexical = lit.value_for_label("lexical_form").unwrap();
    assert_eq!(lexical.to_string(), "'work'");
    assert_eq!(lexical.kind().as_str(), "String");

    // The datatype IRI child carries no label; only lexical_form does.
    assert_eq!(lit.labels(), vec!["lexical_form"]);
    let iri = lit.children().last().unwrap();
    assert_eq!(iri.kind().as_str(), "iri");
    assert_eq!(iri.label(), None);
}

#[test]
fn copies_diverge_without_touching_the_original() {
    let original = parse("RDFLiteral", "'work' ^^<work>").unwrap();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.value_for_label_mut("lexical_form")
        .unwrap()
        .update_with(grammar(), "'work2'")
        .unwrap();

    assert_ne!(copy, original);
    assert_eq!(copy.to_string(), "'work2' ^^ <work>");
    assert_eq!(original.to_string(), "'work' ^^ <work>");
    assert!(copy.validate(grammar()));
}

#[test]
fn update_with_rejects_invalid_text_atomically() {
    let mut lit = parse("RDFLiteral", "'work' ^^<work>").unwrap();
    let before = lit.clone();

    let err = lit.update_with(grammar(), "not ^^ a ^^ literal").unwrap_err();
    match err {
        sylva_core::Error::Syntax { rule, text, .. } => {
            assert_eq!(rule, "RDFLiteral");
            assert_eq!(text, "not ^^ a ^^ literal");
        }
        other => panic!("expected Syntax, got {other:?}"),
    }
    assert_eq!(lit, before);
}

#[test]
fn arg_list_distinct_and_arguments() {
    let args = parse(
        "ArgList",
        r#"(DISTINCT "*Expression*",  "*Expression*",   "*Expression*" )"#,
    )
    .unwrap();

    assert!(args.has_label("distinct"));
    assert_eq!(args.values_for_label("argument").len(), 3);
    assert!(args.validate(grammar()));
    assert_eq!(args.descend(), &args);

    // Repeated labels fail the single-value accessor loudly.
    assert!(matches!(
        args.value_for_label("argument"),
        Err(sylva_core::Error::LabelCardinality { count: 3, .. })
    ));
}

#[test]
fn arg_list_dump_interleaves_separators() {
    let args = parse(
        "ArgList",
        r#"(DISTINCT "*Expression*",  "*Expression*",   "*Expression*" )"#,
    )
    .unwrap();

    insta::assert_snapshot!(args.dump(), @r#"
    [ArgList] /( DISTINCT "*Expression*" , "*Expression*" , "*Expression*" )/
    |  [LPAR] /(/
    |  |  (
    |  > distinct:
    |  [DISTINCT] /DISTINCT/
    |  |  DISTINCT
    |  > argument:
    |  [Expression] /"*Expression*"/
    |  |  [ConditionalOrExpression] /"*Expression*"/
    |  |  |  [ConditionalAndExpression] /"*Expression*"/
    |  |  |  |  [ValueLogical] /"*Expression*"/
    |  |  |  |  |  [RelationalExpression] /"*Expression*"/
    |  |  |  |  |  |  [NumericExpression] /"*Expression*"/
    |  |  |  |  |  |  |  [AdditiveExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  [MultiplicativeExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  [UnaryExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  [PrimaryExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  [RDFLiteral] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  |  > lexical_form:
    |  |  |  |  |  |  |  |  |  |  |  |  [String] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  |  |  [STRING_LITERAL2] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  |  |  |  "*Expression*"
    |  ,
    |  > argument:
    |  [Expression] /"*Expression*"/
    |  |  [ConditionalOrExpression] /"*Expression*"/
    |  |  |  [ConditionalAndExpression] /"*Expression*"/
    |  |  |  |  [ValueLogical] /"*Expression*"/
    |  |  |  |  |  [RelationalExpression] /"*Expression*"/
    |  |  |  |  |  |  [NumericExpression] /"*Expression*"/
    |  |  |  |  |  |  |  [AdditiveExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  [MultiplicativeExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  [UnaryExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  [PrimaryExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  [RDFLiteral] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  |  > lexical_form:
    |  |  |  |  |  |  |  |  |  |  |  |  [String] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  |  |  [STRING_LITERAL2] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  |  |  |  "*Expression*"
    |  ,
    |  > argument:
    |  [Expression] /"*Expression*"/
    |  |  [ConditionalOrExpression] /"*Expression*"/
    |  |  |  [ConditionalAndExpression] /"*Expression*"/
    |  |  |  |  [ValueLogical] /"*Expression*"/
    |  |  |  |  |  [RelationalExpression] /"*Expression*"/
    |  |  |  |  |  |  [NumericExpression] /"*Expression*"/
    |  |  |  |  |  |  |  [AdditiveExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  [MultiplicativeExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  [UnaryExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  [PrimaryExpression] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  [RDFLiteral] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  |  > lexical_form:
    |  |  |  |  |  |  |  |  |  |  |  |  [String] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  |  |  [STRING_LITERAL2] /"*Expression*"/
    |  |  |  |  |  |  |  |  |  |  |  |  |  |  "*Expression*"
    |  [RPAR] /)/
    |  |  )
    "#);
}

#[test]
fn search_and_update_through_a_primary_expression() {
    let mut expr = parse("PrimaryExpression", "<check#22?> ( $var, ?var )").unwrap();
    assert_eq!(expr.to_string(), "<check#22?> ( $var , ?var )");

    // Only labeled elements by default; the raw IRIREF leaf under `iri`
    // is structural and excluded.
    let hits = expr.search_elements(&Search::new().value("<check#22?>"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].label(), Some("iri"));
    assert_eq!(hits[0].kind(), grammar().kind("iri").unwrap());

    let all_hits = expr.search_elements(&Search::new().value("<check#22?>").labeled_only(false));
    assert_eq!(all_hits.len(), 2);

    let arglists = expr.search_elements(&Search::new().kind(grammar().kind("ArgList").unwrap()));
    assert_eq!(arglists.len(), 1);
    assert_eq!(arglists[0].values_for_label("argument").len(), 2);

    // descend() skips the single-alternative precedence wrapper.
    assert_eq!(expr.descend().kind().as_str(), "iriOrFunction");

    // Replace the function IRI in place and re-check the whole tree.
    expr.value_for_label_mut("iriOrFunction")
        .unwrap()
        .value_for_label_mut("iri")
        .unwrap()
        .update_with(grammar(), "<9xx9!>")
        .unwrap();

    assert_eq!(expr.to_string(), "<9xx9!> ( $var , ?var )");
    assert!(expr.search_elements(&Search::new().value("<check#22?>")).is_empty());
    assert!(expr.validate(grammar()));
}

#[test]
fn prefixed_name_prefers_the_longer_alternative() {
    let name = parse("PrefixedName", "foo:bar").unwrap();
    let kinds: Vec<_> = name.children().map(|c| c.kind().as_str()).collect();
    assert_eq!(kinds, vec!["PNAME_LN"]);

    let bare = parse("PrefixedName", "foo:").unwrap();
    let kinds: Vec<_> = bare.children().map(|c| c.kind().as_str()).collect();
    assert_eq!(kinds, vec!["PNAME_NS"]);

    // Same ambiguity one level up: an absolute reference versus a
    // prefixed name inside `iri`.
    let iri = parse("iri", "foo:bar").unwrap();
    assert_eq!(iri.descend().kind().as_str(), "PNAME_LN");
}

#[test]
fn dispatcher_tries_query_then_update() {
    let query = parse_top_level(
        "BASE <work:22?> SELECT REDUCED $var1 ?var2 ((\"*Expression*\") AS $var3) \
         { SELECT * {} } GROUP BY ROUND ( \"*Expression*\") \
         VALUES $S { <testIri> <testIri> }",
    )
    .unwrap();
    assert_eq!(query.kind().as_str(), "QueryUnit");

    let update = parse_top_level(
        "BASE <prologue:22> PREFIX prologue: <prologue:33> LOAD <testIri> ; \
         BASE <prologue:22> PREFIX prologue: <prologue:33>",
    )
    .unwrap();
    assert_eq!(update.kind().as_str(), "UpdateUnit");
}

#[test]
fn dispatcher_failure_is_one_combined_error() {
    let text = "neither a query nor an update ~~~";
    match parse_top_level(text).unwrap_err() {
        Error::NoViableRoot { text: reported } => assert_eq!(reported, text),
        other => panic!("expected NoViableRoot, got {other:?}"),
    }
}

#[test]
fn comments_are_stripped_before_dispatch() {
    let tree = parse_top_level(
        "SELECT ?s # project the subject\nWHERE { ?s ?p 'x# not a comment' }",
    )
    .unwrap();
    assert_eq!(
        tree.to_string(),
        "SELECT ?s WHERE { ?s ?p 'x# not a comment' }"
    );
}

#[test]
fn trees_round_trip_through_json() {
    let tree = parse("RDFLiteral", "'work' ^^<work>").unwrap();
    let encoded = json::to_json_string(&tree);

    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["kind"], "RDFLiteral");
    assert_eq!(value["items"][0]["Child"]["label"], "lexical_form");

    let decoded = json::from_json_str(grammar(), &encoded).unwrap();
    assert_eq!(decoded, tree);
    assert!(decoded.is_label_consistent());
    assert_eq!(
        decoded.value_for_label("lexical_form").unwrap().to_string(),
        "'work'"
    );
}
