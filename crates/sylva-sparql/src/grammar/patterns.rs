//! Graph patterns: groups, optionals, unions, filters, inline data, and the
//! triple-block plumbing shared with templates
//! ([52] TriplesTemplate through [68] Filter).

use sylva_core::pattern::{first, label, opt, rule, sep_list, seq, star};
use sylva_core::GrammarBuilder;

pub(super) fn register(g: &mut GrammarBuilder) {
    // [68] Filter ::= 'FILTER' Constraint
    g.rule("Filter", seq([rule("FILTER"), rule("Constraint")]));

    // [67] GroupOrUnionGraphPattern ::= GroupGraphPattern
    //      ( 'UNION' GroupGraphPattern )*
    g.rule(
        "GroupOrUnionGraphPattern",
        seq([
            rule("GroupGraphPattern"),
            star(seq([rule("UNION"), rule("GroupGraphPattern")])),
        ]),
    );

    // [66] MinusGraphPattern ::= 'MINUS' GroupGraphPattern
    g.rule(
        "MinusGraphPattern",
        seq([rule("SUBTRACT"), rule("GroupGraphPattern")]),
    );

    // [65] DataBlockValue ::= iri | RDFLiteral | NumericLiteral |
    //                         BooleanLiteral | 'UNDEF'
    g.rule(
        "DataBlockValue",
        first([
            rule("iri"),
            rule("RDFLiteral"),
            rule("NumericLiteral"),
            rule("BooleanLiteral"),
            rule("UNDEF"),
        ]),
    );

    // [64] InlineDataFull ::= ( NIL | '(' Var* ')' ) '{'
    //      ( '(' DataBlockValue* ')' | NIL )* '}'
    g.rule(
        "InlineDataFull",
        seq([
            first([
                rule("NIL"),
                seq([rule("LPAR"), star(rule("Var")), rule("RPAR")]),
            ]),
            rule("LCURL"),
            star(first([
                seq([rule("LPAR"), star(rule("DataBlockValue")), rule("RPAR")]),
                rule("NIL"),
            ])),
            rule("RCURL"),
        ]),
    );

    // [63] InlineDataOneVar ::= Var '{' DataBlockValue* '}'
    g.rule(
        "InlineDataOneVar",
        seq([
            rule("Var"),
            rule("LCURL"),
            star(rule("DataBlockValue")),
            rule("RCURL"),
        ]),
    );

    // [62] DataBlock ::= InlineDataOneVar | InlineDataFull
    g.rule(
        "DataBlock",
        first([rule("InlineDataOneVar"), rule("InlineDataFull")]),
    );

    // [61] InlineData ::= 'VALUES' DataBlock
    g.rule("InlineData", seq([rule("VALUES"), rule("DataBlock")]));

    // [60] Bind ::= 'BIND' '(' Expression 'AS' Var ')'
    g.rule(
        "Bind",
        seq([
            rule("BIND"),
            rule("LPAR"),
            rule("Expression"),
            rule("AS"),
            rule("Var"),
            rule("RPAR"),
        ]),
    );

    // [59] ServiceGraphPattern ::= 'SERVICE' 'SILENT'? VarOrIri
    //                              GroupGraphPattern
    g.rule(
        "ServiceGraphPattern",
        seq([
            rule("SERVICE"),
            opt(rule("SILENT")),
            rule("VarOrIri"),
            rule("GroupGraphPattern"),
        ]),
    );

    // [58] GraphGraphPattern ::= 'GRAPH' VarOrIri GroupGraphPattern
    g.rule(
        "GraphGraphPattern",
        seq([rule("GRAPH"), rule("VarOrIri"), rule("GroupGraphPattern")]),
    );

    // [57] OptionalGraphPattern ::= 'OPTIONAL' GroupGraphPattern
    g.rule(
        "OptionalGraphPattern",
        seq([rule("OPTIONAL"), rule("GroupGraphPattern")]),
    );

    // [56] GraphPatternNotTriples ::= GroupOrUnionGraphPattern |
    //      OptionalGraphPattern | MinusGraphPattern | GraphGraphPattern |
    //      ServiceGraphPattern | Filter | Bind | InlineData
    g.rule(
        "GraphPatternNotTriples",
        first([
            rule("GroupOrUnionGraphPattern"),
            rule("OptionalGraphPattern"),
            rule("MinusGraphPattern"),
            rule("GraphGraphPattern"),
            rule("ServiceGraphPattern"),
            rule("Filter"),
            rule("Bind"),
            rule("InlineData"),
        ]),
    );

    // [55] TriplesBlock ::= TriplesSameSubjectPath ( '.' TriplesBlock? )?
    g.rule(
        "TriplesBlock",
        seq([
            label("subjpath", sep_list(rule("TriplesSameSubjectPath"), ".")),
            opt(rule("PERIOD")),
        ]),
    );

    // [54] GroupGraphPatternSub ::= TriplesBlock?
    //      ( GraphPatternNotTriples '.'? TriplesBlock? )*
    g.rule(
        "GroupGraphPatternSub",
        seq([
            opt(rule("TriplesBlock")),
            star(seq([
                rule("GraphPatternNotTriples"),
                opt(rule("PERIOD")),
                opt(rule("TriplesBlock")),
            ])),
        ]),
    );

    // [53] GroupGraphPattern ::= '{' ( SubSelect | GroupGraphPatternSub ) '}'
    g.rule(
        "GroupGraphPattern",
        seq([
            rule("LCURL"),
            label(
                "pattern",
                first([rule("SubSelect"), rule("GroupGraphPatternSub")]),
            ),
            rule("RCURL"),
        ]),
    );

    // [74] ConstructTriples ::= TriplesSameSubject ( '.' ConstructTriples? )?
    g.rule(
        "ConstructTriples",
        seq([
            sep_list(rule("TriplesSameSubject"), "."),
            opt(rule("PERIOD")),
        ]),
    );

    // [73] ConstructTemplate ::= '{' ConstructTriples? '}'
    g.rule(
        "ConstructTemplate",
        seq([
            rule("LCURL"),
            opt(rule("ConstructTriples")),
            rule("RCURL"),
        ]),
    );

    // [52] TriplesTemplate ::= TriplesSameSubject ( '.' TriplesTemplate? )?
    g.rule(
        "TriplesTemplate",
        seq([
            sep_list(rule("TriplesSameSubject"), "."),
            opt(rule("PERIOD")),
        ]),
    );
}
