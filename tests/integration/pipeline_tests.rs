//! Folding lineage reports across a whole query
//!
//! The availability fold below is the minimal pipeline-level consumer:
//! apply the survival rule, then drops, then creates/modifies. It lives
//! here rather than in a crate because real consumers carry their own
//! pipeline state.

use std::collections::BTreeSet;
use std::collections::HashMap;

use fieldtrace_foundation::{NodeValue, ParsedNode};
use fieldtrace_interpreter::{PatternMatchResult, interpret_pattern};
use fieldtrace_registry::{CommandRegistry, default_registry};
use fieldtrace_syntax::RetainClass;

fn record(entries: &[(&str, &str)]) -> NodeValue {
    let mut props = HashMap::new();
    for (key, value) in entries {
        props.insert((*key).to_string(), NodeValue::from(*value));
    }
    NodeValue::Record(props)
}

/// Applies one stage's report to the running set of available fields.
fn fold(available: &mut BTreeSet<String>, report: &PatternMatchResult) {
    if let Some(semantics) = &report.semantics {
        if let Some(classes) = &semantics.drops_all_except {
            let mut survivors = BTreeSet::new();
            for class in classes {
                match class {
                    RetainClass::ByFields => {
                        survivors.extend(report.groups_by.iter().cloned());
                    }
                    RetainClass::Creates => {
                        survivors.extend(report.creates.iter().map(|f| f.field_name.clone()));
                    }
                    RetainClass::Consumes => {
                        survivors.extend(report.consumes.iter().cloned());
                    }
                }
            }
            available.retain(|f| survivors.contains(f));
        }
    }
    for dropped in &report.drops {
        available.remove(dropped);
    }
    for created in &report.creates {
        available.insert(created.field_name.clone());
    }
    for modified in &report.modifies {
        available.insert(modified.field_name.clone());
    }
}

fn interpret_stage(
    registry: &CommandRegistry,
    name: &str,
    node: &ParsedNode,
) -> PatternMatchResult {
    let decl = registry
        .get_command_pattern(name)
        .unwrap_or_else(|| panic!("{name} not registered"));
    let report = interpret_pattern(&decl, node);
    assert!(report.matched, "{name}: {:?}", report.error);
    report
}

// =============================================================================
// Whole-Query Scenarios
// =============================================================================

#[test]
fn stats_pipeline_tracks_field_availability() {
    let registry = default_registry();
    let mut available: BTreeSet<String> =
        ["_time", "host", "bytes", "elapsed"].iter().map(ToString::to_string).collect();

    // ... | eval kb=bytes/1024
    let eval = ParsedNode::new("EvalCommand").with_prop(
        "assignments",
        NodeValue::List(vec![record(&[("target", "kb"), ("expression", "bytes/1024")])]),
    );
    fold(&mut available, &interpret_stage(&registry, "eval", &eval));
    assert!(available.contains("kb"));
    assert!(available.contains("bytes"));

    // ... | stats avg(kb) by host
    let stats = ParsedNode::new("StatsCommand")
        .with_variant("stats")
        .with_prop("aggregations", "avg(kb)")
        .with_prop("by_fields", "host");
    fold(&mut available, &interpret_stage(&registry, "stats", &stats));
    assert_eq!(
        available,
        ["avg(kb)", "host"].iter().map(ToString::to_string).collect()
    );

    // ... | rename avg(kb) as average_kb
    let rename = ParsedNode::new("RenameCommand").with_prop(
        "renames",
        NodeValue::List(vec![record(&[("source", "avg(kb)"), ("target", "average_kb")])]),
    );
    fold(&mut available, &interpret_stage(&registry, "rename", &rename));
    assert_eq!(
        available,
        ["average_kb", "host"].iter().map(ToString::to_string).collect()
    );
}

#[test]
fn eventstats_keeps_fields_that_stats_would_drop() {
    let registry = default_registry();
    let base: BTreeSet<String> =
        ["_time", "host", "bytes"].iter().map(ToString::to_string).collect();

    let node = |variant: &str| {
        ParsedNode::new("StatsCommand")
            .with_variant(variant)
            .with_prop("aggregations", "count")
            .with_prop("by_fields", "host")
    };

    let mut after_stats = base.clone();
    fold(
        &mut after_stats,
        &interpret_stage(&registry, "stats", &node("stats")),
    );
    assert!(!after_stats.contains("bytes"));
    assert!(after_stats.contains("host"));

    let mut after_eventstats = base;
    fold(
        &mut after_eventstats,
        &interpret_stage(&registry, "eventstats", &node("eventstats")),
    );
    assert!(after_eventstats.contains("bytes"));
    assert!(after_eventstats.contains("count"));
}

#[test]
fn generator_then_projection() {
    let registry = default_registry();
    let mut available = BTreeSet::new();

    // | makeresults count=5
    let makeresults = ParsedNode::new("MakeresultsCommand").with_prop("count", NodeValue::Int(5));
    fold(
        &mut available,
        &interpret_stage(&registry, "makeresults", &makeresults),
    );
    assert_eq!(available, ["_time".to_string()].into_iter().collect());

    // ... | eval x=1
    let eval = ParsedNode::new("EvalCommand").with_prop(
        "assignments",
        NodeValue::List(vec![record(&[("target", "x"), ("expression", "1")])]),
    );
    fold(&mut available, &interpret_stage(&registry, "eval", &eval));

    // ... | table x
    let table = ParsedNode::new("TableCommand").with_prop("fields", "x");
    fold(&mut available, &interpret_stage(&registry, "table", &table));
    assert_eq!(available, ["x".to_string()].into_iter().collect());
}

#[test]
fn unknown_stage_is_reported_not_fatal() {
    let registry = default_registry();
    assert!(registry.get_command_pattern("frobnicate").is_none());

    // A known command against the wrong stage node degrades to an
    // unmatched report; analysis of later stages can continue.
    let bin = registry.get_command_pattern("bin").expect("bin");
    let wrong = ParsedNode::new("SortCommand").with_prop("sort_fields", "host");
    let report = interpret_pattern(&bin, &wrong);
    assert!(!report.matched);
    assert!(report.error.expect("message").contains("does not match"));
}

#[test]
fn variant_and_alias_stages_resolve_through_the_registry() {
    let registry = default_registry();

    // `bucket` is an alias spelling of `bin`.
    let node = ParsedNode::new("BucketCommand")
        .with_prop("field", "age")
        .with_prop("alias", "age_bucket");
    let report = interpret_stage(&registry, "bucket", &node);
    assert_eq!(report.creates[0].field_name, "age_bucket");

    // `timechart` shares the chart declaration.
    let chart = ParsedNode::new("TimechartCommand")
        .with_variant("timechart")
        .with_prop("aggregations", "avg(cpu)");
    let report = interpret_stage(&registry, "timechart", &chart);
    assert_eq!(report.creates[0].field_name, "avg(cpu)");
    assert!(report.semantics.expect("semantics").narrows());
}
