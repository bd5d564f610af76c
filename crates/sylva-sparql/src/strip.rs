//! Comment stripping.
//!
//! Comments run from a bare `#` to end of line, and never cross line
//! boundaries. A `#` inside a string literal or an IRI reference is
//! ordinary character data, so the scanner must recognize those spans as
//! opaque before it can decide what a `#` means. Each line is tokenized
//! with a small logos lexer, the trailing comment (if any) is dropped, and
//! the surviving tokens are rejoined with single spaces.

use logos::Logos;

use crate::Result;
use sylva_core::Error;

/// One lexical region of a line. Longest match disambiguates the string
/// forms (a long quote beats an adjacent pair of short quotes).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    #[regex(r#""""(("|"")?([^"\\]|\\.))*""""#)]
    #[regex(r"'''(('|'')?([^'\\]|\\.))*'''")]
    LongString,

    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    #[regex(r"'([^'\\\n\r]|\\.)*'")]
    String,

    #[regex(r"<[^<>\x22{}|^`\\\x00-\x20]*>")]
    IriRef,

    /// A `<` that does not open a well-formed IRI reference (e.g. the
    /// less-than operator).
    #[token("<")]
    Lt,

    /// Comment start, only meaningful outside the regions above.
    #[token("#")]
    Hash,

    #[regex(r#"[^#<'"]+"#)]
    Text,
}

/// Strips trailing comments from every line of `text`, preserving string
/// and IRI contents. Inter-token spacing is normalized to single spaces,
/// matching what rendering produces anyway.
pub fn strip_comments(text: &str) -> Result<String> {
    let lines: Vec<String> = text
        .lines()
        .map(strip_line)
        .collect::<Result<_>>()?;
    Ok(lines.join("\n"))
}

fn strip_line(line: &str) -> Result<String> {
    let mut kept: Vec<&str> = Vec::new();
    let mut lexer = Region::lexer(line);
    while let Some(token) = lexer.next() {
        match token {
            Ok(Region::Hash) => break,
            Ok(_) => {
                let piece = lexer.slice().trim();
                if !piece.is_empty() {
                    kept.push(piece);
                }
            }
            Err(()) => {
                return Err(Error::Syntax {
                    rule: "CommentStrip".to_owned(),
                    text: line.to_owned(),
                    position: lexer.span().start,
                }
                .into());
            }
        }
    }
    Ok(kept.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn hash_inside_string_is_data() {
        assert_eq!(
            strip_comments("'sdfasf# sdfsfd' # comment").unwrap(),
            "'sdfasf# sdfsfd'"
        );
    }

    #[test]
    fn hash_inside_iri_is_data() {
        assert_eq!(
            strip_comments("<check#22?> ( $var, ?var )").unwrap(),
            "<check#22?> ( $var, ?var )"
        );
    }

    #[test]
    fn comment_only_line_becomes_empty() {
        let input = indoc! {"
            <check#22?> ( $var, ?var )
            # bla
            'sdfasf# sdfsfd' # comment
        "};
        let expected = "<check#22?> ( $var, ?var )\n\n'sdfasf# sdfsfd'";
        assert_eq!(strip_comments(input.trim_end()).unwrap(), expected);
    }

    #[test]
    fn long_strings_survive() {
        assert_eq!(
            strip_comments("'''multi # line''' # gone").unwrap(),
            "'''multi # line'''"
        );
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(strip_comments("'unterminated # oops").is_err());
    }

    #[test]
    fn bare_less_than_passes_through() {
        assert_eq!(strip_comments("?x < 3 # cmp").unwrap(), "?x < 3");
    }
}
