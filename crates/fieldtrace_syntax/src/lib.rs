//! Pattern algebra, command semantics, and structural validation for Fieldtrace.
//!
//! This crate provides:
//! - [`SyntaxPattern`] - The recursive pattern algebra describing one
//!   command's grammar and field semantics
//! - [`CommandSemantics`] - Command-level field-survival rules and
//!   per-variant overrides
//! - [`CommandSyntax`] - One command's complete declaration
//! - [`validate`] - Structural validation of declarations, run ahead of any
//!   interpretation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod command;
mod pattern;
mod semantics;
pub mod validate;

pub use command::{CommandCategory, CommandSyntax, GrammarSupport};
pub use pattern::{
    FieldEffect, Literal, ParamType, Quantifier, SyntaxPattern, TypedParam, alt, anon, field,
    field_list, group, lit, param, seq,
};
pub use semantics::{
    CommandSemantics, ResolvedSemantics, RetainClass, SemanticsOverride, StaticCreate,
};
