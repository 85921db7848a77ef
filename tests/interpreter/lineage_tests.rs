//! Integration tests for lineage buckets
//!
//! End-to-end checks that commands report the right creates/consumes/
//! modifies/groups-by/drops sets, with dependency edges resolved to the
//! actual field names on the node.

use std::collections::HashMap;

use fieldtrace_foundation::{NodeValue, ParsedNode};
use fieldtrace_interpreter::{DerivedField, interpret_pattern};
use fieldtrace_registry::default_registry;
use fieldtrace_syntax::RetainClass;

fn record(entries: &[(&str, &str)]) -> NodeValue {
    let mut props = HashMap::new();
    for (key, value) in entries {
        props.insert((*key).to_string(), NodeValue::from(*value));
    }
    NodeValue::Record(props)
}

// =============================================================================
// Bin
// =============================================================================

#[test]
fn bin_without_alias_modifies_in_place() {
    let registry = default_registry();
    let bin = registry.get_command_pattern("bin").expect("bin");
    let node = ParsedNode::new("BinCommand")
        .with_prop("span", "100")
        .with_prop("field", "size");

    let result = interpret_pattern(&bin, &node);
    assert!(result.matched, "error: {:?}", result.error);
    assert_eq!(result.modifies, vec![DerivedField::new("size")]);
    assert!(result.creates.is_empty());
    assert!(result.drops.is_empty());
}

#[test]
fn bin_with_alias_creates_a_derived_field() {
    let registry = default_registry();
    let bin = registry.get_command_pattern("bin").expect("bin");
    let node = ParsedNode::new("BinCommand")
        .with_prop("field", "age")
        .with_prop("alias", "age_bucket");

    let result = interpret_pattern(&bin, &node);
    assert!(result.matched, "error: {:?}", result.error);
    assert_eq!(result.modifies, vec![DerivedField::new("age")]);
    assert_eq!(
        result.creates,
        vec![DerivedField::new("age_bucket").with_depends_on(["age"])]
    );
}

// =============================================================================
// Rename
// =============================================================================

#[test]
fn rename_pairs_drop_sources_and_create_targets() {
    let registry = default_registry();
    let rename = registry.get_command_pattern("rename").expect("rename");
    let node = ParsedNode::new("RenameCommand").with_prop(
        "renames",
        NodeValue::List(vec![
            record(&[("source", "src_ip"), ("target", "source_ip")]),
            record(&[("source", "dst_ip"), ("target", "dest_ip")]),
        ]),
    );

    let result = interpret_pattern(&rename, &node);
    assert!(result.matched, "error: {:?}", result.error);
    assert_eq!(result.drops, vec!["src_ip", "dst_ip"]);
    assert_eq!(
        result.creates,
        vec![
            DerivedField::new("source_ip").with_depends_on(["src_ip"]),
            DerivedField::new("dest_ip").with_depends_on(["dst_ip"]),
        ]
    );
    assert!(result.modifies.is_empty());
}

// =============================================================================
// Stats Family
// =============================================================================

#[test]
fn stats_narrows_to_by_fields_and_creates() {
    let registry = default_registry();
    let stats = registry.get_command_pattern("stats").expect("stats");
    let node = ParsedNode::new("StatsCommand")
        .with_variant("stats")
        .with_prop(
            "aggregations",
            NodeValue::List(vec![NodeValue::from("count"), NodeValue::from("avg(bytes)")]),
        )
        .with_prop("by_fields", "host");

    let result = interpret_pattern(&stats, &node);
    assert!(result.matched, "error: {:?}", result.error);
    assert_eq!(
        result.creates,
        vec![
            DerivedField::new("count"),
            DerivedField::new("avg(bytes)"),
        ]
    );
    assert_eq!(result.groups_by, vec!["host"]);

    let semantics = result.semantics.expect("stats semantics");
    assert!(semantics.narrows());
    assert_eq!(
        semantics.drops_all_except,
        Some(vec![RetainClass::ByFields, RetainClass::Creates])
    );
}

#[test]
fn eventstats_preserves_the_field_set() {
    let registry = default_registry();
    let stats = registry.get_command_pattern("eventstats").expect("eventstats");
    let node = ParsedNode::new("StatsCommand")
        .with_variant("eventstats")
        .with_prop("aggregations", "count")
        .with_prop("by_fields", "host");

    let result = interpret_pattern(&stats, &node);
    assert!(result.matched, "error: {:?}", result.error);
    let semantics = result.semantics.expect("eventstats semantics");
    assert!(semantics.preserves_all);
    assert!(semantics.drops_all_except.is_none());
    // Same buckets as stats; only the survival rule changes.
    assert_eq!(result.groups_by, vec!["host"]);
}

// =============================================================================
// Eval
// =============================================================================

#[test]
fn eval_assignments_create_fields_with_expression_dependencies() {
    let registry = default_registry();
    let eval = registry.get_command_pattern("eval").expect("eval");
    let node = ParsedNode::new("EvalCommand").with_prop(
        "assignments",
        NodeValue::List(vec![
            record(&[("target", "speed"), ("expression", "distance/elapsed")]),
            record(&[("target", "kb"), ("expression", "bytes/1024")]),
        ]),
    );

    let result = interpret_pattern(&eval, &node);
    assert!(result.matched, "error: {:?}", result.error);
    assert_eq!(
        result.creates,
        vec![
            DerivedField::new("speed").with_depends_on(["distance/elapsed"]),
            DerivedField::new("kb").with_depends_on(["bytes/1024"]),
        ]
    );
}

// =============================================================================
// Static Creates
// =============================================================================

#[test]
fn top_reports_count_and_percent() {
    let registry = default_registry();
    let top = registry.get_command_pattern("top").expect("top");
    let node = ParsedNode::new("TopCommand").with_prop("fields", "user");

    let result = interpret_pattern(&top, &node);
    assert!(result.matched, "error: {:?}", result.error);
    assert_eq!(result.groups_by, vec!["user"]);
    assert_eq!(
        result.creates,
        vec![
            DerivedField::new("count").with_depends_on(["user"]),
            DerivedField::new("percent").with_depends_on(["user"]),
        ]
    );
}

#[test]
fn addinfo_reports_its_fixed_outputs() {
    let registry = default_registry();
    let addinfo = registry.get_command_pattern("addinfo").expect("addinfo");
    let node = ParsedNode::new("AddinfoCommand");

    let result = interpret_pattern(&addinfo, &node);
    assert!(result.matched, "error: {:?}", result.error);
    let created: Vec<&str> = result.creates.iter().map(|f| f.field_name.as_str()).collect();
    assert_eq!(
        created,
        vec!["info_min_time", "info_max_time", "info_search_time", "info_sid"]
    );
}

// =============================================================================
// Projection
// =============================================================================

#[test]
fn table_narrows_to_its_listed_fields() {
    let registry = default_registry();
    let table = registry.get_command_pattern("table").expect("table");
    let node = ParsedNode::new("TableCommand").with_prop(
        "fields",
        NodeValue::List(vec![NodeValue::from("host"), NodeValue::from("count")]),
    );

    let result = interpret_pattern(&table, &node);
    assert!(result.matched, "error: {:?}", result.error);
    assert_eq!(result.consumes, vec!["host", "count"]);
    let semantics = result.semantics.expect("table semantics");
    assert_eq!(semantics.drops_all_except, Some(vec![RetainClass::Consumes]));
}
