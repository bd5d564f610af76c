//! Punctuation, operator, and keyword rules.
//!
//! Every token is its own rule producing its own node kind, so punctuation
//! appears in the tree as child nodes and rendering reproduces it. Keywords
//! are case-insensitive and render in their canonical spelling; compound
//! keywords (`DELETE WHERE`, `ORDER BY`, ...) are sequences of their parts.

use sylva_core::pattern::{ckw, first, kw, lit, not_next, seq};
use sylva_core::GrammarBuilder;

/// Keywords whose rule name is also their canonical spelling.
const PLAIN_KEYWORDS: &[&str] = &[
    "DISTINCT",
    "COUNT",
    "SUM",
    "MIN",
    "MAX",
    "AVG",
    "SAMPLE",
    "GROUP_CONCAT",
    "SEPARATOR",
    "EXISTS",
    "REPLACE",
    "SUBSTR",
    "REGEX",
    "STR",
    "LANG",
    "LANGMATCHES",
    "DATATYPE",
    "BOUND",
    "IRI",
    "URI",
    "BNODE",
    "RAND",
    "ABS",
    "CEIL",
    "FLOOR",
    "ROUND",
    "CONCAT",
    "STRLEN",
    "UCASE",
    "LCASE",
    "ENCODE_FOR_URI",
    "CONTAINS",
    "STRSTARTS",
    "STRENDS",
    "STRBEFORE",
    "STRAFTER",
    "YEAR",
    "MONTH",
    "DAY",
    "HOURS",
    "MINUTES",
    "SECONDS",
    "TIMEZONE",
    "TZ",
    "NOW",
    "UUID",
    "STRUUID",
    "MD5",
    "SHA1",
    "SHA256",
    "SHA384",
    "SHA512",
    "COALESCE",
    "IF",
    "STRLANG",
    "STRDT",
    "sameTerm",
    "isIRI",
    "isURI",
    "isBLANK",
    "isLITERAL",
    "isNUMERIC",
    "IN",
    "FILTER",
    "UNION",
    "UNDEF",
    "VALUES",
    "BIND",
    "AS",
    "SERVICE",
    "SILENT",
    "GRAPH",
    "OPTIONAL",
    "DEFAULT",
    "NAMED",
    "ALL",
    "USING",
    "INSERT",
    "DELETE",
    "WITH",
    "WHERE",
    "COPY",
    "MOVE",
    "ADD",
    "CREATE",
    "DROP",
    "CLEAR",
    "LOAD",
    "TO",
    "INTO",
    "OFFSET",
    "LIMIT",
    "ASC",
    "DESC",
    "HAVING",
    "FROM",
    "ASK",
    "DESCRIBE",
    "CONSTRUCT",
    "SELECT",
    "REDUCED",
    "PREFIX",
    "BASE",
];

pub(super) fn register(g: &mut GrammarBuilder) {
    // Brackets and interpunction.
    g.rule("LPAR", lit("("));
    g.rule("RPAR", lit(")"));
    g.rule("LBRACK", lit("["));
    g.rule("RBRACK", lit("]"));
    g.rule("LCURL", lit("{"));
    g.rule("RCURL", lit("}"));
    g.rule("SEMICOL", lit(";"));
    g.rule("PERIOD", lit("."));
    g.rule("COMMA", lit(","));

    // Operators.
    g.rule("NEGATE", lit("!"));
    g.rule("PLUS", lit("+"));
    g.rule("MINUS", lit("-"));
    g.rule("TIMES", lit("*"));
    g.rule("DIV", lit("/"));
    g.rule("EQ", lit("="));
    g.rule("NE", lit("!="));
    g.rule("GT", lit(">"));
    g.rule("LT", lit("<"));
    g.rule("GE", lit(">="));
    g.rule("LE", lit("<="));
    g.rule("AND", lit("&&"));
    g.rule("OR", lit("||"));
    g.rule("INVERSE", lit("^"));

    for &name in PLAIN_KEYWORDS {
        g.rule(name, ckw(name));
    }

    // The `*` projection and the `a` type verb are not keywords lexically.
    g.rule("ALL_VALUES", lit("*"));
    g.rule("TYPE", kw("a"));

    // `MINUS` the pattern operator, named apart from the arithmetic sign.
    g.rule("SUBTRACT", ckw("MINUS"));

    // Bare NOT exists only where EXISTS/IN does not follow; the compound
    // forms are separate tokens.
    g.rule(
        "NOT",
        seq([ckw("NOT"), not_next(first([ckw("EXISTS"), ckw("IN")]))]),
    );
    g.rule("NOT_EXISTS", seq([ckw("NOT"), ckw("EXISTS")]));
    g.rule("NOT_IN", seq([ckw("NOT"), ckw("IN")]));

    g.rule("DELETE_WHERE", seq([ckw("DELETE"), ckw("WHERE")]));
    g.rule("DELETE_DATA", seq([ckw("DELETE"), ckw("DATA")]));
    g.rule("INSERT_DATA", seq([ckw("INSERT"), ckw("DATA")]));
    g.rule("ORDER_BY", seq([ckw("ORDER"), ckw("BY")]));
    g.rule("GROUP_BY", seq([ckw("GROUP"), ckw("BY")]));
}
