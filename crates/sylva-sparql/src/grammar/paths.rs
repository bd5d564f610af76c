//! Property paths, triple patterns, and the node forms they connect
//! ([75] TriplesSameSubject through [105] GraphNodePath).
//!
//! The `...Path` rules mirror their plain counterparts; both families are
//! kept because query patterns allow paths where templates do not. The
//! ambiguity between a term and a bracketed node (`[` starting an ANON
//! versus a blank node property list) is resolved by longest match, as is
//! a collection versus NIL.

use sylva_core::pattern::{first, label, lit, longest, not_next, opt, plus, re, rule, sep_list, seq, star};
use sylva_core::GrammarBuilder;

use super::terminals::var1_e;

pub(super) fn register(g: &mut GrammarBuilder) {
    // [109] GraphTerm ::= iri | RDFLiteral | NumericLiteral | BooleanLiteral
    //                   | BlankNode | NIL
    g.rule(
        "GraphTerm",
        first([
            rule("iri"),
            rule("RDFLiteral"),
            rule("NumericLiteral"),
            rule("BooleanLiteral"),
            rule("BlankNode"),
            rule("NIL"),
        ]),
    );

    // [107] VarOrIri ::= Var | iri
    g.rule("VarOrIri", first([rule("Var"), rule("iri")]));

    // [106] VarOrTerm ::= Var | GraphTerm
    g.rule("VarOrTerm", first([rule("Var"), rule("GraphTerm")]));

    // [105] GraphNodePath ::= VarOrTerm | TriplesNodePath
    g.rule(
        "GraphNodePath",
        longest([rule("VarOrTerm"), rule("TriplesNodePath")]),
    );

    // [104] GraphNode ::= VarOrTerm | TriplesNode
    g.rule(
        "GraphNode",
        longest([rule("VarOrTerm"), rule("TriplesNode")]),
    );

    // [103] CollectionPath ::= '(' GraphNodePath+ ')'
    g.rule(
        "CollectionPath",
        seq([rule("LPAR"), plus(rule("GraphNodePath")), rule("RPAR")]),
    );

    // [102] Collection ::= '(' GraphNode+ ')'
    g.rule(
        "Collection",
        seq([rule("LPAR"), plus(rule("GraphNode")), rule("RPAR")]),
    );

    // [101] BlankNodePropertyListPath ::= '[' PropertyListPathNotEmpty ']'
    g.rule(
        "BlankNodePropertyListPath",
        seq([
            rule("LBRACK"),
            rule("PropertyListPathNotEmpty"),
            rule("RBRACK"),
        ]),
    );

    // [100] TriplesNodePath ::= CollectionPath | BlankNodePropertyListPath
    g.rule(
        "TriplesNodePath",
        first([rule("CollectionPath"), rule("BlankNodePropertyListPath")]),
    );

    // [99] BlankNodePropertyList ::= '[' PropertyListNotEmpty ']'
    g.rule(
        "BlankNodePropertyList",
        seq([rule("LBRACK"), rule("PropertyListNotEmpty"), rule("RBRACK")]),
    );

    // [98] TriplesNode ::= Collection | BlankNodePropertyList
    g.rule(
        "TriplesNode",
        first([rule("Collection"), rule("BlankNodePropertyList")]),
    );

    // [96] PathOneInPropertySet ::= iri | 'a' | '^' ( iri | 'a' )
    g.rule(
        "PathOneInPropertySet",
        first([
            rule("iri"),
            rule("TYPE"),
            seq([rule("INVERSE"), first([rule("iri"), rule("TYPE")])]),
        ]),
    );

    // [95] PathNegatedPropertySet ::= PathOneInPropertySet |
    //      '(' ( PathOneInPropertySet ( '|' PathOneInPropertySet )* )? ')'
    g.rule(
        "PathNegatedPropertySet",
        first([
            rule("PathOneInPropertySet"),
            seq([
                rule("LPAR"),
                opt(label(
                    "pathinone",
                    sep_list(rule("PathOneInPropertySet"), "|"),
                )),
                rule("RPAR"),
            ]),
        ]),
    );

    // [94] PathPrimary ::= iri | 'a' | '!' PathNegatedPropertySet | '(' Path ')'
    g.rule(
        "PathPrimary",
        first([
            rule("iri"),
            rule("TYPE"),
            seq([rule("NEGATE"), rule("PathNegatedPropertySet")]),
            seq([rule("LPAR"), rule("Path"), rule("RPAR")]),
        ]),
    );

    // [93] PathMod ::= '?' | '*' | '+'
    // A bare '?' only, so a variable like `?x` is not split apart.
    g.rule(
        "PathMod",
        first([
            seq([not_next(re(var1_e())), lit("?")]),
            lit("*"),
            lit("+"),
        ]),
    );

    // [91] PathElt ::= PathPrimary PathMod?
    g.rule(
        "PathElt",
        seq([rule("PathPrimary"), opt(rule("PathMod"))]),
    );

    // [92] PathEltOrInverse ::= PathElt | '^' PathElt
    g.rule(
        "PathEltOrInverse",
        first([rule("PathElt"), seq([rule("INVERSE"), rule("PathElt")])]),
    );

    // [90] PathSequence ::= PathEltOrInverse ( '/' PathEltOrInverse )*
    g.rule("PathSequence", sep_list(rule("PathEltOrInverse"), "/"));

    // [89] PathAlternative ::= PathSequence ( '|' PathSequence )*
    g.rule("PathAlternative", sep_list(rule("PathSequence"), "|"));

    // [88] Path ::= PathAlternative
    g.rule("Path", rule("PathAlternative"));

    // [87] ObjectPath ::= GraphNodePath
    g.rule("ObjectPath", rule("GraphNodePath"));

    // [86] ObjectListPath ::= ObjectPath ( ',' ObjectPath )*
    g.rule("ObjectListPath", sep_list(rule("ObjectPath"), ","));

    // [85] VerbSimple ::= Var
    g.rule("VerbSimple", rule("Var"));

    // [84] VerbPath ::= Path
    g.rule("VerbPath", rule("Path"));

    // [80] Object ::= GraphNode
    g.rule("Object", rule("GraphNode"));

    // [79] ObjectList ::= Object ( ',' Object )*
    g.rule("ObjectList", sep_list(rule("Object"), ","));

    // [83] PropertyListPathNotEmpty ::= ( VerbPath | VerbSimple )
    //      ObjectListPath ( ';' ( ( VerbPath | VerbSimple ) ObjectList )? )*
    g.rule(
        "PropertyListPathNotEmpty",
        seq([
            first([rule("VerbPath"), rule("VerbSimple")]),
            rule("ObjectListPath"),
            star(seq([
                rule("SEMICOL"),
                opt(seq([
                    first([rule("VerbPath"), rule("VerbSimple")]),
                    rule("ObjectList"),
                ])),
            ])),
        ]),
    );

    // [82] PropertyListPath ::= PropertyListPathNotEmpty?
    g.rule("PropertyListPath", opt(rule("PropertyListPathNotEmpty")));

    // [81] TriplesSameSubjectPath ::= VarOrTerm PropertyListPathNotEmpty |
    //                                 TriplesNodePath PropertyListPath
    g.rule(
        "TriplesSameSubjectPath",
        first([
            seq([rule("VarOrTerm"), rule("PropertyListPathNotEmpty")]),
            seq([rule("TriplesNodePath"), rule("PropertyListPath")]),
        ]),
    );

    // [78] Verb ::= VarOrIri | 'a'
    g.rule("Verb", first([rule("VarOrIri"), rule("TYPE")]));

    // [77] PropertyListNotEmpty ::= Verb ObjectList ( ';' ( Verb ObjectList )? )*
    g.rule(
        "PropertyListNotEmpty",
        seq([
            rule("Verb"),
            rule("ObjectList"),
            star(seq([
                rule("SEMICOL"),
                opt(seq([rule("Verb"), rule("ObjectList")])),
            ])),
        ]),
    );

    // [76] PropertyList ::= PropertyListNotEmpty?
    g.rule("PropertyList", opt(rule("PropertyListNotEmpty")));

    // [75] TriplesSameSubject ::= VarOrTerm PropertyListNotEmpty |
    //                             TriplesNode PropertyList
    g.rule(
        "TriplesSameSubject",
        first([
            seq([rule("VarOrTerm"), rule("PropertyListNotEmpty")]),
            seq([rule("TriplesNode"), rule("PropertyList")]),
        ]),
    );
}
