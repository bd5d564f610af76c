//! Update forms ([3] UpdateUnit through [51] QuadsNotTriples).

use sylva_core::pattern::{first, opt, rule, seq, star};
use sylva_core::GrammarBuilder;

pub(super) fn register(g: &mut GrammarBuilder) {
    // [51] QuadsNotTriples ::= 'GRAPH' VarOrIri '{' TriplesTemplate? '}'
    g.rule(
        "QuadsNotTriples",
        seq([
            rule("GRAPH"),
            rule("VarOrIri"),
            rule("LCURL"),
            opt(rule("TriplesTemplate")),
            rule("RCURL"),
        ]),
    );

    // [50] Quads ::= TriplesTemplate? ( QuadsNotTriples '.'? TriplesTemplate? )*
    g.rule(
        "Quads",
        seq([
            opt(rule("TriplesTemplate")),
            star(seq([
                rule("QuadsNotTriples"),
                opt(rule("PERIOD")),
                opt(rule("TriplesTemplate")),
            ])),
        ]),
    );

    // [49] QuadData ::= '{' Quads '}'
    g.rule(
        "QuadData",
        seq([rule("LCURL"), rule("Quads"), rule("RCURL")]),
    );

    // [48] QuadPattern ::= '{' Quads '}'
    g.rule(
        "QuadPattern",
        seq([rule("LCURL"), rule("Quads"), rule("RCURL")]),
    );

    // [46] GraphRef ::= 'GRAPH' iri
    g.rule("GraphRef", seq([rule("GRAPH"), rule("iri")]));

    // [47] GraphRefAll ::= GraphRef | 'DEFAULT' | 'NAMED' | 'ALL'
    g.rule(
        "GraphRefAll",
        first([
            rule("GraphRef"),
            rule("DEFAULT"),
            rule("NAMED"),
            rule("ALL"),
        ]),
    );

    // [45] GraphOrDefault ::= 'DEFAULT' | 'GRAPH'? iri
    g.rule(
        "GraphOrDefault",
        first([rule("DEFAULT"), seq([opt(rule("GRAPH")), rule("iri")])]),
    );

    // [44] UsingClause ::= 'USING' ( iri | 'NAMED' iri )
    g.rule(
        "UsingClause",
        seq([
            rule("USING"),
            first([rule("iri"), seq([rule("NAMED"), rule("iri")])]),
        ]),
    );

    // [43] InsertClause ::= 'INSERT' QuadPattern
    g.rule("InsertClause", seq([rule("INSERT"), rule("QuadPattern")]));

    // [42] DeleteClause ::= 'DELETE' QuadPattern
    g.rule("DeleteClause", seq([rule("DELETE"), rule("QuadPattern")]));

    // [41] Modify ::= ( 'WITH' iri )? ( DeleteClause InsertClause? |
    //                 InsertClause ) UsingClause* 'WHERE' GroupGraphPattern
    g.rule(
        "Modify",
        seq([
            opt(seq([rule("WITH"), rule("iri")])),
            first([
                seq([rule("DeleteClause"), opt(rule("InsertClause"))]),
                rule("InsertClause"),
            ]),
            star(rule("UsingClause")),
            rule("WHERE"),
            rule("GroupGraphPattern"),
        ]),
    );

    // [40] DeleteWhere ::= 'DELETE WHERE' QuadPattern
    g.rule(
        "DeleteWhere",
        seq([rule("DELETE_WHERE"), rule("QuadPattern")]),
    );

    // [39] DeleteData ::= 'DELETE DATA' QuadData
    g.rule("DeleteData", seq([rule("DELETE_DATA"), rule("QuadData")]));

    // [38] InsertData ::= 'INSERT DATA' QuadData
    g.rule("InsertData", seq([rule("INSERT_DATA"), rule("QuadData")]));

    // [37] Copy ::= 'COPY' 'SILENT'? GraphOrDefault 'TO' GraphOrDefault
    g.rule(
        "Copy",
        seq([
            rule("COPY"),
            opt(rule("SILENT")),
            rule("GraphOrDefault"),
            rule("TO"),
            rule("GraphOrDefault"),
        ]),
    );

    // [36] Move ::= 'MOVE' 'SILENT'? GraphOrDefault 'TO' GraphOrDefault
    g.rule(
        "Move",
        seq([
            rule("MOVE"),
            opt(rule("SILENT")),
            rule("GraphOrDefault"),
            rule("TO"),
            rule("GraphOrDefault"),
        ]),
    );

    // [35] Add ::= 'ADD' 'SILENT'? GraphOrDefault 'TO' GraphOrDefault
    g.rule(
        "Add",
        seq([
            rule("ADD"),
            opt(rule("SILENT")),
            rule("GraphOrDefault"),
            rule("TO"),
            rule("GraphOrDefault"),
        ]),
    );

    // [34] Create ::= 'CREATE' 'SILENT'? GraphRef
    g.rule(
        "Create",
        seq([rule("CREATE"), opt(rule("SILENT")), rule("GraphRef")]),
    );

    // [33] Drop ::= 'DROP' 'SILENT'? GraphRefAll
    g.rule(
        "Drop",
        seq([rule("DROP"), opt(rule("SILENT")), rule("GraphRefAll")]),
    );

    // [32] Clear ::= 'CLEAR' 'SILENT'? GraphRefAll
    g.rule(
        "Clear",
        seq([rule("CLEAR"), opt(rule("SILENT")), rule("GraphRefAll")]),
    );

    // [31] Load ::= 'LOAD' 'SILENT'? iri ( 'INTO' GraphRef )?
    g.rule(
        "Load",
        seq([
            rule("LOAD"),
            opt(rule("SILENT")),
            rule("iri"),
            opt(seq([rule("INTO"), rule("GraphRef")])),
        ]),
    );

    // [30] Update1 ::= Load | Clear | Drop | Add | Move | Copy | Create |
    //                  InsertData | DeleteData | DeleteWhere | Modify
    g.rule(
        "Update1",
        first([
            rule("Load"),
            rule("Clear"),
            rule("Drop"),
            rule("Add"),
            rule("Move"),
            rule("Copy"),
            rule("Create"),
            rule("InsertData"),
            rule("DeleteData"),
            rule("DeleteWhere"),
            rule("Modify"),
        ]),
    );

    // [29] Update ::= Prologue ( Update1 ( ';' Update )? )?
    g.rule(
        "Update",
        seq([
            rule("Prologue"),
            opt(seq([
                rule("Update1"),
                opt(seq([rule("SEMICOL"), rule("Update")])),
            ])),
        ]),
    );

    // [3] UpdateUnit ::= Update
    g.rule("UpdateUnit", rule("Update"));
}
