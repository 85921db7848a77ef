//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use fieldtrace_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_duplicate_command() {
    let err = Error::duplicate_command("stats", "aggregation");
    assert!(matches!(err.kind, ErrorKind::DuplicateCommand { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("stats"));
    assert!(msg.contains("aggregation"));
}

#[test]
fn error_dangling_alias() {
    let err = Error::dangling_alias("bucket", "bin");
    assert!(matches!(err.kind, ErrorKind::DanglingAlias { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("bucket"));
    assert!(msg.contains("bin"));
}

#[test]
fn error_invalid_declaration() {
    let err = Error::invalid_declaration("rename", "sequence has no patterns");
    assert!(matches!(err.kind, ErrorKind::InvalidDeclaration { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("rename"));
    assert!(msg.contains("sequence has no patterns"));
}

#[test]
fn error_internal() {
    let err = Error::internal("should not happen");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    assert!(format!("{err}").contains("should not happen"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_is_carried() {
    let err = Error::invalid_declaration("convert", "empty sequence").with_context(
        ErrorContext::new()
            .with_source("field-modifiers")
            .with_path("patterns[1]"),
    );
    let ctx = err.context.expect("context");
    assert_eq!(ctx.source.as_deref(), Some("field-modifiers"));
    assert_eq!(ctx.path.as_deref(), Some("patterns[1]"));
}

#[test]
fn error_context_display() {
    let ctx = ErrorContext::new().with_source("results").with_path("options[0]");
    assert_eq!(format!("{ctx}"), "in results at options[0]");
}
