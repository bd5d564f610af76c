//! Rendering of syntax errors against their source text.
//!
//! Reporting convenience only; nothing here participates in matching.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::Error;

/// Renders a [`Error::Syntax`] as an annotated snippet pointing at the
/// failure offset in `source`. Other error variants fall back to their
/// `Display` form.
pub fn render_syntax_error(error: &Error, source: &str) -> String {
    let Error::Syntax {
        rule, position, ..
    } = error
    else {
        return error.to_string();
    };

    let title = format!("text does not match rule {rule}");
    let label = format!("no {rule} derivation past this point");
    let span = annotation_span(*position, source.len());

    let snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(span).label(&label));
    let report: Vec<Group> = vec![Level::ERROR.primary_title(&title).element(snippet)];

    Renderer::plain().render(&report).to_string()
}

/// Widens an offset into a one-character span, clamped to the source.
fn annotation_span(position: usize, limit: usize) -> std::ops::Range<usize> {
    if position >= limit {
        let start = limit.saturating_sub(1);
        start..limit
    } else {
        position..(position + 1).min(limit)
    }
}
