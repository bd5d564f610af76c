//! The expression tower ([110] Expression down to [119] PrimaryExpression),
//! function-call forms, and aggregates.
//!
//! The precedence chain is encoded as single-child rules; consumers use
//! `descend()` to skip the tower when they only care about the operand.

use sylva_core::pattern::{first, label, lit, longest, opt, rule, sep_list, seq, star};
use sylva_core::GrammarBuilder;

/// A call body of the shape `'(' Expression ')'` with the given label on
/// the argument.
fn unary_call(keyword: &'static str, arg_label: &'static str) -> sylva_core::Pattern {
    seq([
        rule(keyword),
        rule("LPAR"),
        label(arg_label, rule("Expression")),
        rule("RPAR"),
    ])
}

/// A call body of the shape `'(' Expression ',' Expression ')'` with the
/// given labels.
fn binary_call(
    keyword: &'static str,
    first_label: &'static str,
    second_label: &'static str,
) -> sylva_core::Pattern {
    seq([
        rule(keyword),
        rule("LPAR"),
        label(first_label, rule("Expression")),
        rule("COMMA"),
        label(second_label, rule("Expression")),
        rule("RPAR"),
    ])
}

/// An aggregate body: `KEYWORD '(' 'DISTINCT'? ( '*' | Expression ) ')'`.
fn aggregate_body(keyword: &'static str, keyword_label: &'static str) -> sylva_core::Pattern {
    seq([
        label(keyword_label, rule(keyword)),
        rule("LPAR"),
        opt(label("distinct", rule("DISTINCT"))),
        longest([
            label("all", rule("ALL_VALUES")),
            label("expression", rule("Expression")),
        ]),
        rule("RPAR"),
    ])
}

pub(super) fn register(g: &mut GrammarBuilder) {
    // [71] ArgList ::= NIL | '(' 'DISTINCT'? Expression ( ',' Expression )* ')'
    g.rule(
        "ArgList",
        first([
            label("nil", rule("NIL")),
            seq([
                rule("LPAR"),
                opt(label("distinct", rule("DISTINCT"))),
                label("argument", sep_list(rule("Expression"), ",")),
                rule("RPAR"),
            ]),
        ]),
    );

    // [128] iriOrFunction ::= iri ArgList?
    g.rule(
        "iriOrFunction",
        seq([
            label("iri", rule("iri")),
            opt(label("ArgList", rule("ArgList"))),
        ]),
    );

    // [127] Aggregate
    g.rule(
        "Aggregate",
        first([
            aggregate_body("COUNT", "count"),
            aggregate_body("SUM", "sum"),
            aggregate_body("MIN", "min"),
            aggregate_body("MAX", "max"),
            aggregate_body("AVG", "avg"),
            aggregate_body("SAMPLE", "sample"),
            seq([
                label("group_concat", rule("GROUP_CONCAT")),
                rule("LPAR"),
                opt(label("distinct", rule("DISTINCT"))),
                label("expression", rule("Expression")),
                opt(seq([
                    rule("SEMICOL"),
                    rule("SEPARATOR"),
                    lit("="),
                    label("separator", rule("String")),
                ])),
                rule("RPAR"),
            ]),
        ]),
    );

    // [126] NotExistsFunc ::= 'NOT' 'EXISTS' GroupGraphPattern
    g.rule(
        "NotExistsFunc",
        seq([
            rule("NOT_EXISTS"),
            label("groupgraph", rule("GroupGraphPattern")),
        ]),
    );

    // [125] ExistsFunc ::= 'EXISTS' GroupGraphPattern
    g.rule(
        "ExistsFunc",
        seq([
            rule("EXISTS"),
            label("groupgraph", rule("GroupGraphPattern")),
        ]),
    );

    // [124] StrReplaceExpression ::= 'REPLACE' '(' Expression ',' Expression
    //                               ',' Expression ( ',' Expression )? ')'
    g.rule(
        "StrReplaceExpression",
        seq([
            rule("REPLACE"),
            rule("LPAR"),
            label("arg", rule("Expression")),
            rule("COMMA"),
            label("pattern", rule("Expression")),
            rule("COMMA"),
            label("replacement", rule("Expression")),
            opt(seq([rule("COMMA"), label("flags", rule("Expression"))])),
            rule("RPAR"),
        ]),
    );

    // [123] SubstringExpression ::= 'SUBSTR' '(' Expression ',' Expression
    //                              ( ',' Expression )? ')'
    g.rule(
        "SubstringExpression",
        seq([
            rule("SUBSTR"),
            rule("LPAR"),
            label("source", rule("Expression")),
            rule("COMMA"),
            label("startloc", rule("Expression")),
            opt(seq([rule("COMMA"), label("length", rule("Expression"))])),
            rule("RPAR"),
        ]),
    );

    // [122] RegexExpression ::= 'REGEX' '(' Expression ',' Expression
    //                          ( ',' Expression )? ')'
    g.rule(
        "RegexExpression",
        seq([
            rule("REGEX"),
            rule("LPAR"),
            label("text", rule("Expression")),
            rule("COMMA"),
            label("pattern", rule("Expression")),
            opt(seq([rule("COMMA"), label("flags", rule("Expression"))])),
            rule("RPAR"),
        ]),
    );

    // [72] ExpressionList ::= NIL | '(' Expression ( ',' Expression )* ')'
    g.rule(
        "ExpressionList",
        first([
            rule("NIL"),
            seq([
                rule("LPAR"),
                sep_list(rule("Expression"), ","),
                rule("RPAR"),
            ]),
        ]),
    );

    // [121] BuiltInCall, alternatives in grammar order.
    g.rule(
        "BuiltInCall",
        first([
            rule("Aggregate"),
            unary_call("STR", "expression"),
            unary_call("LANG", "expression"),
            binary_call("LANGMATCHES", "language-tag", "language-range"),
            unary_call("DATATYPE", "expression"),
            seq([
                rule("BOUND"),
                rule("LPAR"),
                label("var", rule("Var")),
                rule("RPAR"),
            ]),
            unary_call("IRI", "expression"),
            unary_call("URI", "expression"),
            seq([
                rule("BNODE"),
                first([
                    seq([
                        rule("LPAR"),
                        label("expression", rule("Expression")),
                        rule("RPAR"),
                    ]),
                    rule("NIL"),
                ]),
            ]),
            seq([rule("RAND"), rule("NIL")]),
            unary_call("ABS", "expression"),
            unary_call("CEIL", "expression"),
            unary_call("FLOOR", "expression"),
            unary_call("ROUND", "expression"),
            seq([
                rule("CONCAT"),
                label("expressionList", rule("ExpressionList")),
            ]),
            rule("SubstringExpression"),
            unary_call("STRLEN", "expression"),
            rule("StrReplaceExpression"),
            unary_call("UCASE", "expression"),
            unary_call("LCASE", "expression"),
            unary_call("ENCODE_FOR_URI", "expression"),
            binary_call("CONTAINS", "arg1", "arg2"),
            binary_call("STRSTARTS", "arg1", "arg2"),
            binary_call("STRENDS", "arg1", "arg2"),
            binary_call("STRBEFORE", "arg1", "arg2"),
            binary_call("STRAFTER", "arg1", "arg2"),
            unary_call("YEAR", "expression"),
            unary_call("MONTH", "expression"),
            unary_call("DAY", "expression"),
            unary_call("HOURS", "expression"),
            unary_call("MINUTES", "expression"),
            unary_call("SECONDS", "expression"),
            unary_call("TIMEZONE", "expression"),
            unary_call("TZ", "expression"),
            seq([rule("NOW"), rule("NIL")]),
            seq([rule("UUID"), rule("NIL")]),
            seq([rule("STRUUID"), rule("NIL")]),
            unary_call("MD5", "expression"),
            unary_call("SHA1", "expression"),
            unary_call("SHA256", "expression"),
            unary_call("SHA384", "expression"),
            unary_call("SHA512", "expression"),
            seq([
                rule("COALESCE"),
                label("expressionList", rule("ExpressionList")),
            ]),
            seq([
                rule("IF"),
                rule("LPAR"),
                label("expression1", rule("Expression")),
                rule("COMMA"),
                label("expression2", rule("Expression")),
                rule("COMMA"),
                label("expression3", rule("Expression")),
                rule("RPAR"),
            ]),
            binary_call("STRLANG", "lexicalForm", "langTag"),
            binary_call("STRDT", "lexicalForm", "datatypeIRI"),
            binary_call("sameTerm", "term1", "term2"),
            unary_call("isIRI", "expression"),
            unary_call("isURI", "expression"),
            unary_call("isBLANK", "expression"),
            unary_call("isLITERAL", "expression"),
            unary_call("isNUMERIC", "expression"),
            rule("RegexExpression"),
            rule("ExistsFunc"),
            rule("NotExistsFunc"),
        ]),
    );

    // [120] BrackettedExpression ::= '(' Expression ')'
    g.rule(
        "BracketedExpression",
        seq([
            rule("LPAR"),
            label("expression", rule("Expression")),
            rule("RPAR"),
        ]),
    );

    // [119] PrimaryExpression ::= BrackettedExpression | BuiltInCall |
    //       iriOrFunction | RDFLiteral | NumericLiteral | BooleanLiteral | Var
    g.rule(
        "PrimaryExpression",
        first([
            rule("BracketedExpression"),
            rule("BuiltInCall"),
            label("iriOrFunction", rule("iriOrFunction")),
            rule("RDFLiteral"),
            rule("NumericLiteral"),
            rule("BooleanLiteral"),
            rule("Var"),
        ]),
    );

    // [118] UnaryExpression ::= '!' PrimaryExpression | '+' PrimaryExpression
    //                         | '-' PrimaryExpression | PrimaryExpression
    g.rule(
        "UnaryExpression",
        first([
            seq([rule("NEGATE"), rule("PrimaryExpression")]),
            seq([rule("PLUS"), rule("PrimaryExpression")]),
            seq([rule("MINUS"), rule("PrimaryExpression")]),
            rule("PrimaryExpression"),
        ]),
    );

    // [117] MultiplicativeExpression ::= UnaryExpression
    //       ( '*' UnaryExpression | '/' UnaryExpression )*
    g.rule(
        "MultiplicativeExpression",
        seq([
            rule("UnaryExpression"),
            star(first([
                seq([rule("TIMES"), rule("UnaryExpression")]),
                seq([rule("DIV"), rule("UnaryExpression")]),
            ])),
        ]),
    );

    // [116] AdditiveExpression ::= MultiplicativeExpression
    //       ( '+' MultiplicativeExpression | '-' MultiplicativeExpression |
    //         ( NumericLiteralPositive | NumericLiteralNegative )
    //         ( ( '*' UnaryExpression ) | ( '/' UnaryExpression ) )* )*
    g.rule(
        "AdditiveExpression",
        seq([
            rule("MultiplicativeExpression"),
            star(first([
                seq([rule("PLUS"), rule("MultiplicativeExpression")]),
                seq([rule("MINUS"), rule("MultiplicativeExpression")]),
                seq([
                    first([
                        rule("NumericLiteralPositive"),
                        rule("NumericLiteralNegative"),
                    ]),
                    star(first([
                        seq([rule("TIMES"), rule("UnaryExpression")]),
                        seq([rule("DIV"), rule("UnaryExpression")]),
                    ])),
                ]),
            ])),
        ]),
    );

    // [115] NumericExpression ::= AdditiveExpression
    g.rule("NumericExpression", rule("AdditiveExpression"));

    // [114] RelationalExpression ::= NumericExpression ( '=' NumericExpression
    //       | '!=' ... | '<' ... | '>' ... | '<=' ... | '>=' ...
    //       | 'IN' ExpressionList | 'NOT' 'IN' ExpressionList )?
    g.rule(
        "RelationalExpression",
        seq([
            rule("NumericExpression"),
            opt(first([
                seq([rule("EQ"), rule("NumericExpression")]),
                seq([rule("NE"), rule("NumericExpression")]),
                seq([rule("LT"), rule("NumericExpression")]),
                seq([rule("GT"), rule("NumericExpression")]),
                seq([rule("LE"), rule("NumericExpression")]),
                seq([rule("GE"), rule("NumericExpression")]),
                seq([rule("IN"), rule("ExpressionList")]),
                seq([rule("NOT_IN"), rule("ExpressionList")]),
            ])),
        ]),
    );

    // [113] ValueLogical ::= RelationalExpression
    g.rule("ValueLogical", rule("RelationalExpression"));

    // [112] ConditionalAndExpression ::= ValueLogical ( '&&' ValueLogical )*
    g.rule(
        "ConditionalAndExpression",
        seq([
            rule("ValueLogical"),
            star(seq([rule("AND"), rule("ValueLogical")])),
        ]),
    );

    // [111] ConditionalOrExpression ::= ConditionalAndExpression
    //       ( '||' ConditionalAndExpression )*
    g.rule(
        "ConditionalOrExpression",
        seq([
            rule("ConditionalAndExpression"),
            star(seq([rule("OR"), rule("ConditionalAndExpression")])),
        ]),
    );

    // [110] Expression ::= ConditionalOrExpression
    g.rule("Expression", rule("ConditionalOrExpression"));

    // [70] FunctionCall ::= iri ArgList
    g.rule("FunctionCall", seq([rule("iri"), rule("ArgList")]));

    // [69] Constraint ::= BrackettedExpression | BuiltInCall | FunctionCall
    g.rule(
        "Constraint",
        first([
            rule("BracketedExpression"),
            rule("BuiltInCall"),
            rule("FunctionCall"),
        ]),
    );
}
