//! Immutable command syntax registry for Fieldtrace.
//!
//! This crate provides:
//! - [`CommandRegistry`] - Case-insensitive lookup from any command name,
//!   alias, or variant to its shared declaration
//! - [`RegistryBuilder`] - One-shot construction with collision detection
//! - [`default_registry`] - The built-in SPL command set, grouped into
//!   category declaration modules
//! - [`validate_registry`] - Registry-wide structural validation, intended
//!   to run in CI over the built-in set

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod commands;
mod registry;

pub use registry::{
    CommandRegistry, RegistryBuilder, is_registry_valid, validate_registry, validation_summary,
};

/// Builds the registry of built-in command declarations.
///
/// # Panics
///
/// Panics if the built-in declaration modules collide on a command name.
/// That is a bug in this crate, not a caller error, and is caught by the
/// registry test suite.
#[must_use]
pub fn default_registry() -> CommandRegistry {
    let mut builder = RegistryBuilder::new();
    for module in commands::modules() {
        if let Err(error) = builder.register_module(module) {
            panic!("built-in command set is inconsistent: {error}");
        }
    }
    builder.build()
}
