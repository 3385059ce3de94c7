//! Edge case tests for lexa-util

use crate::{Diagnostic, DiagnosticBuilder, Handler, SourceSnippet, Span};

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_span_contains_nothing() {
    let span = Span::point(5, 1, 6);
    assert!(!span.contains(5));
    assert_eq!(span.len(), 0);
}

#[test]
fn test_edge_snippet_inverted_columns() {
    // end before start still underlines one column
    let snippet = SourceSnippet::new("abc", 1, 3, 1, None::<String>);
    assert_eq!(snippet.format().matches('^').count(), 1);
}

#[test]
fn test_edge_wide_line_numbers() {
    let snippet = SourceSnippet::point("x", 123_456, 1);
    assert!(snippet.format().starts_with("123456 | x"));
}

#[test]
fn test_edge_render_empty_message() {
    let diag = Diagnostic::error("", Span::new(0, 0, 1, 1));
    assert_eq!(diag.render("f"), "f:1:1: error: ");
}

#[test]
fn test_edge_handler_keeps_emission_order() {
    let handler = Handler::new();
    for i in 0..5 {
        DiagnosticBuilder::warning(format!("w{}", i)).emit(&handler);
    }
    let messages: Vec<_> = handler
        .diagnostics()
        .into_iter()
        .map(|d| d.message)
        .collect();
    assert_eq!(messages, vec!["w0", "w1", "w2", "w3", "w4"]);
}
