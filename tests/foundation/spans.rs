//! Integration tests for Span

use fieldtrace_foundation::Span;

#[test]
fn span_construction() {
    let span = Span::new(8, 23, 1, 9);
    assert_eq!(span.len(), 15);
    assert!(!span.is_empty());
}

#[test]
fn span_at_start_is_empty() {
    let span = Span::at_start();
    assert!(span.is_empty());
    assert_eq!(span.line, 1);
    assert_eq!(span.column, 1);
}

#[test]
fn span_positions_are_carried_through_nodes() {
    let span = Span::new(10, 28, 1, 11);
    let node = fieldtrace_foundation::ParsedNode::new("BinCommand").with_span(span);
    assert_eq!(node.span.start, 10);
    assert_eq!(node.span.end, 28);
    assert_eq!(node.span.column, 11);
}
