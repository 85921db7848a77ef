//! Fieldtrace - Field-lineage analysis for pipe-delimited query languages
//!
//! This crate re-exports all layers of the Fieldtrace system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: fieldtrace_interpreter — Pattern interpretation, lineage reports
//! Layer 2: fieldtrace_registry    — Built-in command set, registry lookup
//! Layer 1: fieldtrace_syntax      — Pattern algebra, semantics, validation
//! Layer 0: fieldtrace_foundation  — Core types (ParsedNode, Span, Error)
//! ```

pub use fieldtrace_foundation as foundation;
pub use fieldtrace_interpreter as interpreter;
pub use fieldtrace_registry as registry;
pub use fieldtrace_syntax as syntax;
