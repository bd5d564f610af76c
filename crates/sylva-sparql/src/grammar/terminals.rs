//! Lexical terminals, composed as regular expressions.
//!
//! The character-class productions build on each other the same way the
//! SPARQL EBNF does ([164] PN_CHARS_BASE up to [141] PNAME_LN), so the
//! composed expressions stay literally comparable with the W3C grammar.
//! Each fragment function returns the expression; the rules register the
//! fragments under the production names.

use sylva_core::pattern::{lit, re, seq};
use sylva_core::GrammarBuilder;

// [173] PN_LOCAL_ESC ::= '\' ( '_' | '~' | '.' | '-' | '!' | '$' | '&' |
//                        "'" | '(' | ')' | '*' | '+' | ',' | ';' | '=' |
//                        '/' | '?' | '#' | '@' | '%' )
const PN_LOCAL_ESC_E: &str = r"\\[_~.\-!$&'()*+,;=/?#@%]";

// [172] HEX ::= [0-9] | [A-F] | [a-f]
const HEX_E: &str = "[0-9A-Fa-f]";

// [171] PERCENT ::= '%' HEX HEX
const PERCENT_E: &str = "%[0-9A-Fa-f][0-9A-Fa-f]";

// [164] PN_CHARS_BASE ::= [A-Z] | [a-z] | [#x00C0-#x00D6] | ...
const PN_CHARS_BASE_E: &str = "[A-Za-z\\x{C0}-\\x{D6}\\x{D8}-\\x{F6}\\x{F8}-\\x{2FF}\
\\x{370}-\\x{37D}\\x{37F}-\\x{1FFF}\\x{200C}-\\x{200D}\\x{2070}-\\x{218F}\
\\x{2C00}-\\x{2FEF}\\x{3001}-\\x{D7FF}\\x{F900}-\\x{FDCF}\\x{FDF0}-\\x{FFFD}\
\\x{10000}-\\x{EFFFF}]";

// [160] ECHAR ::= '\' [tbnrf\"']
const ECHAR_E: &str = "\\\\[tbnrf\\\\\"']";

// [155] EXPONENT ::= [eE] [+-]? [0-9]+
const EXPONENT_E: &str = "[eE][+-]?[0-9]+";

// [147] DECIMAL ::= [0-9]* '.' [0-9]+
const DECIMAL_E: &str = r"[0-9]*\.[0-9]+";

// [146] INTEGER ::= [0-9]+
const INTEGER_E: &str = "[0-9]+";

// [145] LANGTAG ::= '@' [a-zA-Z]+ ('-' [a-zA-Z0-9]+)*
const LANGTAG_E: &str = "@[a-zA-Z]+(?:-[a-zA-Z0-9]+)*";

// [139] IRIREF ::= '<' ([^<>"{}|^`\] - [#x00-#x20])* '>'
const IRIREF_E: &str = "<[^<>\"{}|^`\\\\\\x{0}-\\x{20}]*>";

// [170] PLX ::= PERCENT | PN_LOCAL_ESC
fn plx_e() -> String {
    format!("(?:{PERCENT_E}|{PN_LOCAL_ESC_E})")
}

// [165] PN_CHARS_U ::= PN_CHARS_BASE | '_'
fn pn_chars_u_e() -> String {
    format!("(?:{PN_CHARS_BASE_E}|_)")
}

// [167] PN_CHARS ::= PN_CHARS_U | '-' | [0-9] | #x00B7 | [#x0300-#x036F] |
//                    [#x203F-#x2040]
fn pn_chars_e() -> String {
    format!(
        "(?:{}|-|[0-9]|\\x{{B7}}|[\\x{{300}}-\\x{{36F}}]|[\\x{{203F}}-\\x{{2040}}])",
        pn_chars_u_e()
    )
}

// [169] PN_LOCAL ::= (PN_CHARS_U | ':' | [0-9] | PLX)
//                    ((PN_CHARS | '.' | ':' | PLX)* (PN_CHARS | ':' | PLX))?
fn pn_local_e() -> String {
    let u = pn_chars_u_e();
    let c = pn_chars_e();
    let plx = plx_e();
    format!("(?:{u}|:|[0-9]|{plx})(?:(?:{c}|\\.|:|{plx})*(?:{c}|:|{plx}))?")
}

// [168] PN_PREFIX ::= PN_CHARS_BASE ((PN_CHARS | '.')* PN_CHARS)?
fn pn_prefix_e() -> String {
    let c = pn_chars_e();
    format!("{PN_CHARS_BASE_E}(?:(?:{c}|\\.)*{c})?")
}

// [166] VARNAME ::= (PN_CHARS_U | [0-9]) (PN_CHARS_U | [0-9] | #x00B7 |
//                   [#x0300-#x036F] | [#x203F-#x2040])*
fn varname_e() -> String {
    let u = pn_chars_u_e();
    format!("(?:{u}|[0-9])(?:{u}|[0-9]|\\x{{B7}}|[\\x{{300}}-\\x{{36F}}]|[\\x{{203F}}-\\x{{2040}}])*")
}

// [143] VAR1 ::= '?' VARNAME
pub(super) fn var1_e() -> String {
    format!("\\?{}", varname_e())
}

// [144] VAR2 ::= '$' VARNAME
fn var2_e() -> String {
    format!("\\${}", varname_e())
}

// [148] DOUBLE ::= [0-9]+ '.' [0-9]* EXPONENT | '.' [0-9]+ EXPONENT |
//                  [0-9]+ EXPONENT
fn double_e() -> String {
    format!(
        "(?:[0-9]+\\.[0-9]*{EXPONENT_E})|(?:\\.[0-9]+{EXPONENT_E})|(?:[0-9]+{EXPONENT_E})"
    )
}

// [159] STRING_LITERAL_LONG2 ::= '"""' (('"' | '""')? ([^"\] | ECHAR))* '"""'
fn string_literal_long2_e() -> String {
    format!("\"\"\"(?:(?:\"\"|\")?(?:[^\"\\\\]|{ECHAR_E}))*\"\"\"")
}

// [158] STRING_LITERAL_LONG1 ::= "'''" (("'" | "''")? ([^'\] | ECHAR))* "'''"
fn string_literal_long1_e() -> String {
    format!("'''(?:(?:''|')?(?:[^'\\\\]|{ECHAR_E}))*'''")
}

// [157] STRING_LITERAL2 ::= '"' (([^#x22#x5C#xA#xD]) | ECHAR)* '"'
fn string_literal2_e() -> String {
    format!("\"(?:{ECHAR_E}|[^\\x{{22}}\\x{{5C}}\\x{{A}}\\x{{D}}])*\"")
}

// [156] STRING_LITERAL1 ::= "'" (([^#x27#x5C#xA#xD]) | ECHAR)* "'"
fn string_literal1_e() -> String {
    format!("'(?:{ECHAR_E}|[^\\x{{27}}\\x{{5C}}\\x{{A}}\\x{{D}}])*'")
}

// [142] BLANK_NODE_LABEL ::= '_:' (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')*
//                            PN_CHARS)?
fn blank_node_label_e() -> String {
    let u = pn_chars_u_e();
    let c = pn_chars_e();
    format!("_:(?:{u}|[0-9])(?:(?:{c}|\\.)*{c})?")
}

// [140] PNAME_NS ::= PN_PREFIX? ':'
fn pname_ns_e() -> String {
    format!("(?:{})?:", pn_prefix_e())
}

// [141] PNAME_LN ::= PNAME_NS PN_LOCAL
fn pname_ln_e() -> String {
    format!("{}{}", pname_ns_e(), pn_local_e())
}

pub(super) fn register(g: &mut GrammarBuilder) {
    g.rule("PN_LOCAL_ESC", re(PN_LOCAL_ESC_E));
    g.rule("HEX", re(HEX_E));
    g.rule("PERCENT", re(PERCENT_E));
    g.rule("PLX", re(plx_e()));
    g.rule("PN_CHARS_BASE", re(PN_CHARS_BASE_E));
    g.rule("PN_CHARS_U", re(pn_chars_u_e()));
    g.rule("PN_CHARS", re(pn_chars_e()));
    g.rule("PN_LOCAL", re(pn_local_e()));
    g.rule("PN_PREFIX", re(pn_prefix_e()));
    g.rule("VARNAME", re(varname_e()));

    // [163] ANON and [161] NIL admit interior whitespace, which the
    // matcher's token-boundary skipping already provides.
    g.rule("ANON", seq([lit("["), lit("]")]));
    g.rule("NIL", seq([lit("("), lit(")")]));

    g.rule("ECHAR", re(ECHAR_E));
    g.rule("STRING_LITERAL_LONG2", re(string_literal_long2_e()));
    g.rule("STRING_LITERAL_LONG1", re(string_literal_long1_e()));
    g.rule("STRING_LITERAL2", re(string_literal2_e()));
    g.rule("STRING_LITERAL1", re(string_literal1_e()));

    g.rule("EXPONENT", re(EXPONENT_E));
    g.rule("DOUBLE", re(double_e()));
    g.rule("DOUBLE_NEGATIVE", re(format!("-(?:{})", double_e())));
    g.rule("DOUBLE_POSITIVE", re(format!("\\+(?:{})", double_e())));
    g.rule("DECIMAL", re(DECIMAL_E));
    g.rule("DECIMAL_NEGATIVE", re(format!("-(?:{DECIMAL_E})")));
    g.rule("DECIMAL_POSITIVE", re(format!("\\+(?:{DECIMAL_E})")));
    g.rule("INTEGER", re(INTEGER_E));
    g.rule("INTEGER_NEGATIVE", re(format!("-(?:{INTEGER_E})")));
    g.rule("INTEGER_POSITIVE", re(format!("\\+(?:{INTEGER_E})")));

    g.rule("LANGTAG", re(LANGTAG_E));
    g.rule("VAR2", re(var2_e()));
    g.rule("VAR1", re(var1_e()));
    g.rule("BLANK_NODE_LABEL", re(blank_node_label_e()));
    g.rule("PNAME_NS", re(pname_ns_e()));
    g.rule("PNAME_LN", re(pname_ln_e()));
    g.rule("IRIREF", re(IRIREF_E));
}
