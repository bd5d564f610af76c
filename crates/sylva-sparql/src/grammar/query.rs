//! Query forms, solution modifiers, and the prologue
//! ([1] QueryUnit through [28] ValuesClause).

use sylva_core::pattern::{first, opt, plus, rule, seq, star};
use sylva_core::GrammarBuilder;

pub(super) fn register(g: &mut GrammarBuilder) {
    // [28] ValuesClause ::= ( 'VALUES' DataBlock )?
    g.rule(
        "ValuesClause",
        opt(seq([rule("VALUES"), rule("DataBlock")])),
    );

    // [27] OffsetClause ::= 'OFFSET' INTEGER
    g.rule("OffsetClause", seq([rule("OFFSET"), rule("INTEGER")]));

    // [26] LimitClause ::= 'LIMIT' INTEGER
    g.rule("LimitClause", seq([rule("LIMIT"), rule("INTEGER")]));

    // [25] LimitOffsetClauses ::= LimitClause OffsetClause? |
    //                             OffsetClause LimitClause?
    g.rule(
        "LimitOffsetClauses",
        first([
            seq([rule("LimitClause"), opt(rule("OffsetClause"))]),
            seq([rule("OffsetClause"), opt(rule("LimitClause"))]),
        ]),
    );

    // [24] OrderCondition ::= ( ( 'ASC' | 'DESC' ) BrackettedExpression ) |
    //                         ( Constraint | Var )
    g.rule(
        "OrderCondition",
        first([
            seq([
                first([rule("ASC"), rule("DESC")]),
                rule("BracketedExpression"),
            ]),
            rule("Constraint"),
            rule("Var"),
        ]),
    );

    // [23] OrderClause ::= 'ORDER' 'BY' OrderCondition+
    g.rule(
        "OrderClause",
        seq([rule("ORDER_BY"), plus(rule("OrderCondition"))]),
    );

    // [22] HavingCondition ::= Constraint
    g.rule("HavingCondition", rule("Constraint"));

    // [21] HavingClause ::= 'HAVING' HavingCondition+
    g.rule(
        "HavingClause",
        seq([rule("HAVING"), plus(rule("HavingCondition"))]),
    );

    // [20] GroupCondition ::= BuiltInCall | FunctionCall |
    //      '(' Expression ( 'AS' Var )? ')' | Var
    g.rule(
        "GroupCondition",
        first([
            rule("BuiltInCall"),
            rule("FunctionCall"),
            seq([
                rule("LPAR"),
                rule("Expression"),
                opt(seq([rule("AS"), rule("Var")])),
                rule("RPAR"),
            ]),
            rule("Var"),
        ]),
    );

    // [19] GroupClause ::= 'GROUP' 'BY' GroupCondition+
    g.rule(
        "GroupClause",
        seq([rule("GROUP_BY"), plus(rule("GroupCondition"))]),
    );

    // [18] SolutionModifier ::= GroupClause? HavingClause? OrderClause?
    //                           LimitOffsetClauses?
    g.rule(
        "SolutionModifier",
        seq([
            opt(rule("GroupClause")),
            opt(rule("HavingClause")),
            opt(rule("OrderClause")),
            opt(rule("LimitOffsetClauses")),
        ]),
    );

    // [17] WhereClause ::= 'WHERE'? GroupGraphPattern
    g.rule(
        "WhereClause",
        seq([opt(rule("WHERE")), rule("GroupGraphPattern")]),
    );

    // [16] SourceSelector ::= iri
    g.rule("SourceSelector", rule("iri"));

    // [15] NamedGraphClause ::= 'NAMED' SourceSelector
    g.rule(
        "NamedGraphClause",
        seq([rule("NAMED"), rule("SourceSelector")]),
    );

    // [14] DefaultGraphClause ::= SourceSelector
    g.rule("DefaultGraphClause", rule("SourceSelector"));

    // [13] DatasetClause ::= 'FROM' ( DefaultGraphClause | NamedGraphClause )
    g.rule(
        "DatasetClause",
        seq([
            rule("FROM"),
            first([rule("DefaultGraphClause"), rule("NamedGraphClause")]),
        ]),
    );

    // [12] AskQuery ::= 'ASK' DatasetClause* WhereClause SolutionModifier
    g.rule(
        "AskQuery",
        seq([
            rule("ASK"),
            star(rule("DatasetClause")),
            rule("WhereClause"),
            rule("SolutionModifier"),
        ]),
    );

    // [11] DescribeQuery ::= 'DESCRIBE' ( VarOrIri+ | '*' ) DatasetClause*
    //                        WhereClause? SolutionModifier
    g.rule(
        "DescribeQuery",
        seq([
            rule("DESCRIBE"),
            first([plus(rule("VarOrIri")), rule("ALL_VALUES")]),
            star(rule("DatasetClause")),
            opt(rule("WhereClause")),
            rule("SolutionModifier"),
        ]),
    );

    // [10] ConstructQuery ::= 'CONSTRUCT'
    //      ( ConstructTemplate DatasetClause* WhereClause SolutionModifier |
    //        DatasetClause* 'WHERE' '{' TriplesTemplate? '}' SolutionModifier )
    g.rule(
        "ConstructQuery",
        seq([
            rule("CONSTRUCT"),
            first([
                seq([
                    rule("ConstructTemplate"),
                    star(rule("DatasetClause")),
                    rule("WhereClause"),
                    rule("SolutionModifier"),
                ]),
                seq([
                    star(rule("DatasetClause")),
                    rule("WHERE"),
                    rule("LCURL"),
                    opt(rule("TriplesTemplate")),
                    rule("RCURL"),
                    rule("SolutionModifier"),
                ]),
            ]),
        ]),
    );

    // [9] SelectClause ::= 'SELECT' ( 'DISTINCT' | 'REDUCED' )?
    //     ( ( Var | ( '(' Expression 'AS' Var ')' ) )+ | '*' )
    g.rule(
        "SelectClause",
        seq([
            rule("SELECT"),
            opt(first([rule("DISTINCT"), rule("REDUCED")])),
            first([
                plus(first([
                    rule("Var"),
                    seq([
                        rule("LPAR"),
                        rule("Expression"),
                        rule("AS"),
                        rule("Var"),
                        rule("RPAR"),
                    ]),
                ])),
                rule("ALL_VALUES"),
            ]),
        ]),
    );

    // [8] SubSelect ::= SelectClause WhereClause SolutionModifier ValuesClause
    g.rule(
        "SubSelect",
        seq([
            rule("SelectClause"),
            rule("WhereClause"),
            rule("SolutionModifier"),
            rule("ValuesClause"),
        ]),
    );

    // [7] SelectQuery ::= SelectClause DatasetClause* WhereClause
    //                     SolutionModifier
    g.rule(
        "SelectQuery",
        seq([
            rule("SelectClause"),
            star(rule("DatasetClause")),
            rule("WhereClause"),
            rule("SolutionModifier"),
        ]),
    );

    // [6] PrefixDecl ::= 'PREFIX' PNAME_NS IRIREF
    g.rule(
        "PrefixDecl",
        seq([rule("PREFIX"), rule("PNAME_NS"), rule("IRIREF")]),
    );

    // [5] BaseDecl ::= 'BASE' IRIREF
    g.rule("BaseDecl", seq([rule("BASE"), rule("IRIREF")]));

    // [4] Prologue ::= ( BaseDecl | PrefixDecl )*
    g.rule(
        "Prologue",
        star(first([rule("BaseDecl"), rule("PrefixDecl")])),
    );

    // [2] Query ::= Prologue ( SelectQuery | ConstructQuery | DescribeQuery |
    //               AskQuery ) ValuesClause
    g.rule(
        "Query",
        seq([
            rule("Prologue"),
            first([
                rule("SelectQuery"),
                rule("ConstructQuery"),
                rule("DescribeQuery"),
                rule("AskQuery"),
            ]),
            rule("ValuesClause"),
        ]),
    );

    // [1] QueryUnit ::= Query
    g.rule("QueryUnit", rule("Query"));
}
