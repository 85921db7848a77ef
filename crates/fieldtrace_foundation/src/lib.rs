//! Core types, errors, and parsed-node values for Fieldtrace.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Span`] - Source location tracking for parsed nodes
//! - [`NodeValue`] - The property-bag value type for command node properties
//! - [`ParsedNode`] - One already-parsed pipeline command, as handed over by
//!   the external query parser

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod node;
mod span;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use node::{NodeValue, ParsedNode};
pub use span::Span;
