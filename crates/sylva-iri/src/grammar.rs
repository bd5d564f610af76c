//! The RFC 3987 productions.
//!
//! Character-class productions (`iunreserved`, `ipchar`, the path and
//! segment forms) are regex fragments composed bottom-up, mirroring the
//! RFC's ABNF; everything from `IP_literal` upward is a structural rule.
//! Alternation order follows the RFC's first-match-wins reading.

use sylva_core::pattern::{empty, first, lit, opt, re, rule, seq};
use sylva_core::{Grammar, GrammarBuilder, Result};

const SUB_DELIMS: &str = r"[!$&'()*+,;=]";
const UNRESERVED: &str = r"[A-Za-z0-9\-._~]";
const PCT_ENCODED: &str = "%[0-9A-Fa-f][0-9A-Fa-f]";
const H16: &str = "[0-9A-Fa-f]{1,4}";
const DEC_OCTET: &str = "(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])";
const SCHEME: &str = r"[A-Za-z][A-Za-z0-9+\-.]*";

/// ucschar = %xA0-D7FF / %xF900-FDCF / %xFDF0-FFEF / %x10000-1FFFD / ...
const UCSCHAR: &str = "[\\x{A0}-\\x{D7FF}\\x{F900}-\\x{FDCF}\\x{FDF0}-\\x{FFEF}\
\\x{10000}-\\x{1FFFD}\\x{20000}-\\x{2FFFD}\\x{30000}-\\x{3FFFD}\
\\x{40000}-\\x{4FFFD}\\x{50000}-\\x{5FFFD}\\x{60000}-\\x{6FFFD}\
\\x{70000}-\\x{7FFFD}\\x{80000}-\\x{8FFFD}\\x{90000}-\\x{9FFFD}\
\\x{A0000}-\\x{AFFFD}\\x{B0000}-\\x{BFFFD}\\x{C0000}-\\x{CFFFD}\
\\x{D0000}-\\x{DFFFD}\\x{E1000}-\\x{EFFFD}]";

/// iprivate = %xE000-F8FF / %xF0000-FFFFD / %x100000-10FFFD
const IPRIVATE: &str = "[\\x{E000}-\\x{F8FF}\\x{F0000}-\\x{FFFFD}\\x{100000}-\\x{10FFFD}]";

fn iunreserved() -> String {
    format!("(?:{UNRESERVED}|{UCSCHAR})")
}

fn ipchar() -> String {
    format!("(?:{}|{PCT_ENCODED}|{SUB_DELIMS}|[:@])", iunreserved())
}

fn isegment() -> String {
    format!("(?:{})*", ipchar())
}

fn isegment_nz() -> String {
    format!("(?:{})+", ipchar())
}

fn isegment_nz_nc() -> String {
    format!("(?:{}|{PCT_ENCODED}|{SUB_DELIMS}|@)+", iunreserved())
}

fn ipv4address() -> String {
    format!("{DEC_OCTET}\\.{DEC_OCTET}\\.{DEC_OCTET}\\.{DEC_OCTET}")
}

fn ls32() -> String {
    format!("(?:{H16}:{H16}|{})", ipv4address())
}

/// The nine ABNF branches of IPv6address, longest forms first.
fn ipv6address() -> String {
    let ls32 = ls32();
    format!(
        "(?:(?:{H16}:){{6}}{ls32})\
        |(?:::(?:{H16}:){{5}}{ls32})\
        |(?:{H16}?::(?:{H16}:){{4}}{ls32})\
        |(?:(?:(?:{H16}:){{0,1}}{H16})?::(?:{H16}:){{3}}{ls32})\
        |(?:(?:(?:{H16}:){{0,2}}{H16})?::(?:{H16}:){{2}}{ls32})\
        |(?:(?:(?:{H16}:){{0,3}}{H16})?::{H16}:{ls32})\
        |(?:(?:(?:{H16}:){{0,4}}{H16})?::{ls32})\
        |(?:(?:(?:{H16}:){{0,5}}{H16})?::{H16})\
        |(?:(?:(?:{H16}:){{0,6}}{H16})?::)"
    )
}

pub(crate) fn build() -> Result<Grammar> {
    let mut g = GrammarBuilder::new();

    // Character-level terminals.
    g.rule("pct_encoded", re(PCT_ENCODED));
    g.rule("dec_octet", re(DEC_OCTET));
    g.rule("IPv4address", re(ipv4address()));
    g.rule("h16", re(H16));
    g.rule("ls32", re(ls32()));
    g.rule("IPv6address", re(ipv6address()));
    g.rule(
        "IPvFuture",
        re(format!("v[0-9A-Fa-f]+\\.(?:{UNRESERVED}|{SUB_DELIMS}|:)+")),
    );
    g.rule("scheme", re(SCHEME));
    g.rule("port", re("[0-9]*"));
    g.rule("iprivate", re(IPRIVATE));
    g.rule("ucschar", re(UCSCHAR));
    g.rule(
        "iuserinfo",
        re(format!("(?:{}|{PCT_ENCODED}|{SUB_DELIMS}|:)*", iunreserved())),
    );
    g.rule(
        "ireg_name",
        re(format!("(?:{}|{PCT_ENCODED}|{SUB_DELIMS})*", iunreserved())),
    );
    g.rule("iquery", re(format!("(?:{}|{IPRIVATE}|[/?])*", ipchar())));
    g.rule("ifragment", re(format!("(?:{}|[/?])*", ipchar())));

    // Path forms. Each is a single token; the distinctions are about what
    // the first characters may be.
    g.rule("ipath_abempty", re(format!("(?:/{})*", isegment())));
    g.rule(
        "ipath_absolute",
        re(format!("/(?:{}(?:/{})*)?", isegment_nz(), isegment())),
    );
    g.rule(
        "ipath_noscheme",
        re(format!("{}(?:/{})*", isegment_nz_nc(), isegment())),
    );
    g.rule(
        "ipath_rootless",
        re(format!("{}(?:/{})*", isegment_nz(), isegment())),
    );
    g.rule("ipath_empty", empty());
    g.rule(
        "ipath",
        first([
            rule("ipath_abempty"),
            rule("ipath_absolute"),
            rule("ipath_noscheme"),
            rule("ipath_rootless"),
            rule("ipath_empty"),
        ]),
    );

    // Structural productions.
    g.rule(
        "IP_literal",
        seq([
            lit("["),
            first([rule("IPv6address"), rule("IPvFuture")]),
            lit("]"),
        ]),
    );
    g.rule(
        "ihost",
        first([rule("IP_literal"), rule("IPv4address"), rule("ireg_name")]),
    );
    g.rule(
        "iauthority",
        seq([
            opt(seq([rule("iuserinfo"), lit("@")])),
            rule("ihost"),
            opt(seq([lit(":"), rule("port")])),
        ]),
    );
    g.rule(
        "ihier_part",
        first([
            seq([lit("//"), rule("iauthority"), rule("ipath_abempty")]),
            rule("ipath_absolute"),
            rule("ipath_rootless"),
            rule("ipath_empty"),
        ]),
    );
    g.rule(
        "irelative_part",
        first([
            seq([lit("//"), rule("iauthority"), rule("ipath_abempty")]),
            rule("ipath_absolute"),
            rule("ipath_noscheme"),
            rule("ipath_empty"),
        ]),
    );
    g.rule(
        "absolute_IRI",
        seq([
            rule("scheme"),
            lit(":"),
            rule("ihier_part"),
            opt(seq([lit("?"), rule("iquery")])),
        ]),
    );
    g.rule(
        "IRI",
        seq([
            rule("scheme"),
            lit(":"),
            rule("ihier_part"),
            opt(seq([lit("?"), rule("iquery")])),
            opt(seq([lit("#"), rule("ifragment")])),
        ]),
    );
    g.rule(
        "irelative_ref",
        seq([
            rule("irelative_part"),
            opt(seq([lit("?"), rule("iquery")])),
            opt(seq([lit("#"), rule("ifragment")])),
        ]),
    );
    g.rule(
        "IRI_reference",
        first([rule("IRI"), rule("irelative_ref")]),
    );

    g.finish()
}
