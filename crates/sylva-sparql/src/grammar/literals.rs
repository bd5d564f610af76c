//! Terms: IRIs, prefixed names, literals, variables.
//!
//! The longest-match choices here are load-bearing. A prefixed name with a
//! local part shares a prefix with the bare namespace form (`foo:bar` vs
//! `foo:`), a decimal shares its integer part with an integer, and the
//! string forms share their opening quotes, so these productions take the
//! alternative that consumes the most input. `NumericLiteral` itself is
//! first-match, as in the source grammar: its alternatives are
//! distinguished by their leading sign.

use sylva_core::pattern::{first, label, lit, longest, opt, rule, seq};
use sylva_core::GrammarBuilder;

pub(super) fn register(g: &mut GrammarBuilder) {
    // [138] BlankNode ::= BLANK_NODE_LABEL | ANON
    g.rule(
        "BlankNode",
        first([rule("BLANK_NODE_LABEL"), rule("ANON")]),
    );

    // [137] PrefixedName ::= PNAME_LN | PNAME_NS
    g.rule(
        "PrefixedName",
        longest([rule("PNAME_LN"), rule("PNAME_NS")]),
    );

    // [136] iri ::= IRIREF | PrefixedName
    g.rule("iri", longest([rule("IRIREF"), rule("PrefixedName")]));

    // [135] String ::= STRING_LITERAL1 | STRING_LITERAL2 |
    //                  STRING_LITERAL_LONG1 | STRING_LITERAL_LONG2
    g.rule(
        "String",
        longest([
            rule("STRING_LITERAL1"),
            rule("STRING_LITERAL2"),
            rule("STRING_LITERAL_LONG1"),
            rule("STRING_LITERAL_LONG2"),
        ]),
    );

    // [134] BooleanLiteral ::= 'true' | 'false'
    g.rule("BooleanLiteral", first([lit("true"), lit("false")]));

    // [133] NumericLiteralNegative ::= INTEGER_NEGATIVE | DECIMAL_NEGATIVE |
    //                                  DOUBLE_NEGATIVE
    g.rule(
        "NumericLiteralNegative",
        longest([
            rule("INTEGER_NEGATIVE"),
            rule("DECIMAL_NEGATIVE"),
            rule("DOUBLE_NEGATIVE"),
        ]),
    );

    // [132] NumericLiteralPositive ::= INTEGER_POSITIVE | DECIMAL_POSITIVE |
    //                                  DOUBLE_POSITIVE
    g.rule(
        "NumericLiteralPositive",
        longest([
            rule("INTEGER_POSITIVE"),
            rule("DECIMAL_POSITIVE"),
            rule("DOUBLE_POSITIVE"),
        ]),
    );

    // [131] NumericLiteralUnsigned ::= INTEGER | DECIMAL | DOUBLE
    g.rule(
        "NumericLiteralUnsigned",
        longest([rule("INTEGER"), rule("DECIMAL"), rule("DOUBLE")]),
    );

    // [130] NumericLiteral ::= NumericLiteralUnsigned |
    //                          NumericLiteralPositive | NumericLiteralNegative
    g.rule(
        "NumericLiteral",
        first([
            rule("NumericLiteralUnsigned"),
            rule("NumericLiteralPositive"),
            rule("NumericLiteralNegative"),
        ]),
    );

    // [129] RDFLiteral ::= String ( LANGTAG | ( '^^' iri ) )?
    g.rule(
        "RDFLiteral",
        seq([
            label("lexical_form", rule("String")),
            opt(longest([
                label("langtag", rule("LANGTAG")),
                seq([lit("^^"), rule("iri")]),
            ])),
        ]),
    );

    // [108] Var ::= VAR1 | VAR2
    g.rule("Var", first([rule("VAR1"), rule("VAR2")]));

    // [97] Integer ::= INTEGER
    g.rule("Integer", rule("INTEGER"));
}
