//! Built-in command declarations, one module per category.
//!
//! Each module exposes `declarations()`, returning the authored
//! [`CommandSyntax`] records for its category. Declarations are data, not
//! code: the interpreter gives them meaning, and the validator checks them
//! in CI before any query is analyzed.

use fieldtrace_syntax::{CommandSyntax, ParamType, SyntaxPattern, anon, lit, seq};

pub(crate) mod aggregation;
pub(crate) mod field_creators;
pub(crate) mod field_modifiers;
pub(crate) mod filters;
pub(crate) mod generators;
pub(crate) mod metrics;
pub(crate) mod misc;
pub(crate) mod output;
pub(crate) mod pipeline;
pub(crate) mod results;

/// Returns every declaration module, in registration order.
pub(crate) fn modules() -> Vec<Vec<CommandSyntax>> {
    vec![
        aggregation::declarations(),
        field_creators::declarations(),
        field_modifiers::declarations(),
        filters::declarations(),
        generators::declarations(),
        metrics::declarations(),
        misc::declarations(),
        output::declarations(),
        pipeline::declarations(),
        results::declarations(),
    ]
}

/// An optional `key=<value>` option clause.
pub(crate) fn opt_kv(key: &str, value: SyntaxPattern) -> SyntaxPattern {
    seq([lit(key), lit("="), value]).optional()
}

/// Arguments recognized by name only; nothing in them names fields.
pub(crate) fn opaque_args() -> SyntaxPattern {
    anon(ParamType::Str).zero_or_more()
}
