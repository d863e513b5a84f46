//! Pretty-printing of parse and evaluation diagnostics.
//!
//! Renders diagnostics as an [`ariadne::Report`] built against the source
//! text, falling back to plain text if rendering itself fails.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::gc::Gc;
use crate::object::Value;

/// Parse diagnostics are plain strings with no attached span (the parser
/// records *what* went wrong, not a byte range); each is reported against
/// the whole source so ariadne still has something to underline.
pub fn report_parse_errors(filename: &str, source: &str, errors: &[String]) {
    for message in errors {
        report_one(filename, source, message);
    }
}

/// Reports a single evaluation error value's message the same way.
pub fn report_eval_error(filename: &str, source: &str, error: Value, gc: &Gc) {
    report_one(filename, source, &error.inspect(gc));
}

fn report_one(filename: &str, source: &str, message: &str) {
    let span = whole_source_span(source);
    let result = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(message)
        .with_label(
            Label::new((filename, span))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)));

    if result.is_err() {
        eprintln!("{filename}: {message}");
    }
}

fn whole_source_span(source: &str) -> std::ops::Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        0..source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_source_span_is_empty_for_empty_source() {
        assert_eq!(whole_source_span(""), 0..0);
    }

    #[test]
    fn whole_source_span_covers_the_entire_source() {
        assert_eq!(whole_source_span("let x = 5;"), 0..10);
    }
}
