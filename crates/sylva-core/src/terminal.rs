//! Terminal matchers: the grammar's leaves.
//!
//! Every terminal is a pure function from remaining input to a matched
//! length plus the literal value it contributes, or failure. Terminals never
//! produce labeled children, only literal strings.

use regex_automata::meta;

use crate::{Error, Result};

/// A leaf matcher.
#[derive(Debug, Clone)]
pub enum Terminal {
    /// Exact text.
    Literal(&'static str),
    /// Word that must not run into a following identifier character.
    /// With `caseless`, matching ignores ASCII case and the declared
    /// spelling is the produced value.
    Keyword { text: &'static str, caseless: bool },
    /// Regular expression, matched as an anchored prefix. Compiled once
    /// when the owning grammar is bound.
    Regex(String),
}

/// Characters a keyword may not run into (identifier continuation set).
fn is_keyword_tail(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Matches `text` as a literal prefix of `input`.
pub(crate) fn match_literal(text: &str, input: &str) -> Option<usize> {
    input.starts_with(text).then_some(text.len())
}

/// Matches `text` as a keyword prefix of `input`: the spelling (exactly, or
/// ASCII-caselessly) followed by end-of-input or a non-identifier character.
pub(crate) fn match_keyword(text: &str, caseless: bool, input: &str) -> Option<usize> {
    let head = input.get(..text.len())?;
    let hit = if caseless {
        head.eq_ignore_ascii_case(text)
    } else {
        head == text
    };
    if !hit {
        return None;
    }
    match input[text.len()..].chars().next() {
        Some(c) if is_keyword_tail(c) => None,
        _ => Some(text.len()),
    }
}

/// Validates and compiles a terminal regex for anchored prefix searches.
///
/// Validation goes through `regex-syntax` first so authoring mistakes
/// surface with a precise syntax error rather than a compiler artifact.
pub(crate) fn compile_regex(pattern: &str) -> Result<meta::Regex> {
    regex_syntax::parse(pattern).map_err(|e| Error::InvalidTerminal {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })?;
    meta::Regex::new(pattern).map_err(|e| Error::InvalidTerminal {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })
}

/// True if the regex can match the empty string. Used by the grammar
/// builder to reject zero-width terminals in unbounded repetition
/// positions, where they would stall the matcher.
pub(crate) fn matches_empty(pattern: &str) -> bool {
    regex_syntax::parse(pattern)
        .map(|hir| hir.properties().minimum_len() == Some(0))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_is_exact() {
        assert_eq!(match_literal("^^", "^^<x>"), Some(2));
        assert_eq!(match_literal("^^", "^<x>"), None);
    }

    #[test]
    fn keyword_boundary() {
        assert_eq!(match_keyword("a", false, "a ?x"), Some(1));
        assert_eq!(match_keyword("a", false, "abc"), None);
        assert_eq!(match_keyword("NOT", true, "not("), Some(3));
        assert_eq!(match_keyword("NOT", true, "nothing"), None);
        assert_eq!(match_keyword("IN", true, "IN"), Some(2));
    }

    #[test]
    fn keyword_multibyte_tail() {
        // A non-ASCII follower is not an identifier tail and must not panic.
        assert_eq!(match_keyword("STR", true, "str\u{00E9}"), None);
        assert_eq!(match_keyword("a", false, "a\u{00B7}"), Some(1));
    }

    #[test]
    fn compile_rejects_garbage() {
        assert!(compile_regex("[0-9]+").is_ok());
        assert!(compile_regex("[0-9").is_err());
    }

    #[test]
    fn empty_detection() {
        assert!(matches_empty("[0-9]*"));
        assert!(!matches_empty("[0-9]+"));
    }
}
