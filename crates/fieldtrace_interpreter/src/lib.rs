//! Pattern interpreter producing per-command field-lineage reports.
//!
//! This crate provides:
//! - [`interpret_pattern`] - Matches one command declaration against one
//!   parsed node and reports which fields the command creates, consumes,
//!   modifies, groups by, or drops
//! - [`PatternMatchResult`] - The lineage report for one pipe stage
//!
//! The interpreter is a pure, synchronous tree walk. It never panics and
//! never returns `Err`: a node that does not satisfy the declared pattern
//! yields `matched = false` plus a human-readable message, so pipeline-level
//! consumers can mark the stage "lineage unknown" and keep going.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod interpret;
mod result;

pub use interpret::interpret_pattern;
pub use result::{DerivedField, PatternMatchResult};
