//! Integration tests for registry construction and lookup

use std::sync::Arc;

use fieldtrace_foundation::ErrorKind;
use fieldtrace_registry::RegistryBuilder;
use fieldtrace_syntax::{
    CommandCategory, CommandSyntax, FieldEffect, ParamType, field, field_list, lit, param, seq,
};

fn stats_decl() -> CommandSyntax {
    CommandSyntax::new(
        "stats",
        CommandCategory::Aggregation,
        seq([
            param(ParamType::StatsFunc, "aggregations")
                .with_effect(FieldEffect::Creates)
                .one_or_more(),
            seq([
                lit("by"),
                field_list("by_fields").with_effect(FieldEffect::GroupsBy),
            ])
            .optional(),
        ]),
    )
    .with_variant("eventstats")
}

fn bin_decl() -> CommandSyntax {
    CommandSyntax::new(
        "bin",
        CommandCategory::FieldModifiers,
        field("field").with_effect(FieldEffect::Modifies),
    )
    .with_alias("bucket")
}

// =============================================================================
// Name Resolution
// =============================================================================

#[test]
fn canonical_alias_and_variant_resolve_to_one_declaration() {
    let mut builder = RegistryBuilder::new();
    builder.register(stats_decl()).expect("stats");
    builder.register(bin_decl()).expect("bin");
    let registry = builder.build();

    let stats = registry.get_command_pattern("stats").expect("stats");
    let eventstats = registry.get_command_pattern("eventstats").expect("eventstats");
    assert!(Arc::ptr_eq(&stats, &eventstats));

    let bin = registry.get_command_pattern("bin").expect("bin");
    let bucket = registry.get_command_pattern("bucket").expect("bucket");
    assert!(Arc::ptr_eq(&bin, &bucket));
}

#[test]
fn lookup_is_case_insensitive() {
    let mut builder = RegistryBuilder::new();
    builder.register(bin_decl()).expect("bin");
    let registry = builder.build();

    assert!(registry.has_pattern("BIN"));
    assert!(registry.has_pattern("Bucket"));
    assert!(!registry.has_pattern("binning"));
}

#[test]
fn unknown_names_return_none() {
    let registry = RegistryBuilder::new().build();
    assert!(registry.get_command_pattern("stats").is_none());
    assert!(registry.is_empty());
}

#[test]
fn extra_alias_shares_the_declaration() {
    let mut builder = RegistryBuilder::new();
    builder.register(bin_decl()).expect("bin");
    builder.register_alias("discretize", "bin").expect("alias");
    let registry = builder.build();

    let bin = registry.get_command_pattern("bin").expect("bin");
    let discretize = registry
        .get_command_pattern("discretize")
        .expect("discretize");
    assert!(Arc::ptr_eq(&bin, &discretize));
    // Alias registration adds a name, not a declaration.
    assert_eq!(registry.len(), 1);
}

// =============================================================================
// Collisions
// =============================================================================

#[test]
fn duplicate_canonical_name_is_rejected() {
    let mut builder = RegistryBuilder::new();
    builder.register(stats_decl()).expect("stats");
    let err = builder.register(stats_decl()).expect_err("duplicate");
    assert!(matches!(err.kind, ErrorKind::DuplicateCommand { .. }));
}

#[test]
fn variant_colliding_with_existing_name_is_rejected() {
    let mut builder = RegistryBuilder::new();
    builder.register(stats_decl()).expect("stats");
    let err = builder
        .register(
            CommandSyntax::new(
                "eventstats",
                CommandCategory::Aggregation,
                field("f").with_effect(FieldEffect::Consumes),
            ),
        )
        .expect_err("collision");
    match err.kind {
        ErrorKind::DuplicateCommand { name, first_module } => {
            assert_eq!(name, "eventstats");
            assert_eq!(first_module, "aggregation");
        }
        other => panic!("expected duplicate command, got {other:?}"),
    }
}

#[test]
fn alias_to_missing_target_is_rejected() {
    let mut builder = RegistryBuilder::new();
    let err = builder.register_alias("bucket", "bin").expect_err("dangling");
    assert!(matches!(err.kind, ErrorKind::DanglingAlias { .. }));
}

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn all_command_names_sorted() {
    let mut builder = RegistryBuilder::new();
    builder.register(stats_decl()).expect("stats");
    builder.register(bin_decl()).expect("bin");
    let registry = builder.build();
    assert_eq!(
        registry.all_command_names(),
        vec!["bin", "bucket", "eventstats", "stats"]
    );
}

#[test]
fn commands_in_category() {
    let mut builder = RegistryBuilder::new();
    builder.register(stats_decl()).expect("stats");
    builder.register(bin_decl()).expect("bin");
    let registry = builder.build();

    let aggregation = registry.commands_in_category(CommandCategory::Aggregation);
    assert_eq!(aggregation.len(), 1);
    assert_eq!(aggregation[0].command, "stats");
    assert!(
        registry
            .commands_in_category(CommandCategory::Output)
            .is_empty()
    );
}
