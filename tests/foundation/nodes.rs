//! Integration tests for ParsedNode and NodeValue
//!
//! Tests the node shapes the interpreter consumes: scalar properties,
//! repeated-value lists, and record arrays for repeated clause groups.

use std::collections::HashMap;

use fieldtrace_foundation::{NodeValue, ParsedNode, Span};

// =============================================================================
// Node Construction
// =============================================================================

#[test]
fn node_carries_type_variant_and_props() {
    let node = ParsedNode::new("StatsCommand")
        .with_variant("eventstats")
        .with_span(Span::new(0, 25, 1, 1))
        .with_prop("aggregations", "count")
        .with_prop("by_fields", "host");

    assert_eq!(node.node_type, "StatsCommand");
    assert_eq!(node.variant.as_deref(), Some("eventstats"));
    assert_eq!(node.span.end, 25);
    assert!(node.has("aggregations"));
    assert!(!node.has("span"));
}

#[test]
fn props_are_addressed_by_name() {
    let node = ParsedNode::new("BinCommand")
        .with_prop("field", "size")
        .with_prop("bins", NodeValue::Int(10));

    assert_eq!(node.get("field").and_then(NodeValue::as_str), Some("size"));
    assert_eq!(node.get("bins").and_then(NodeValue::as_int), Some(10));
    assert!(node.get("alias").is_none());
}

// =============================================================================
// Value Shapes
// =============================================================================

#[test]
fn scalar_text_items() {
    assert_eq!(NodeValue::from("host").text_items(), vec!["host"]);
    assert_eq!(NodeValue::Int(7).text_items(), vec!["7"]);
    assert_eq!(NodeValue::from(true).text_items(), vec!["true"]);
}

#[test]
fn list_text_items_flatten_in_order() {
    let value = NodeValue::List(vec![
        NodeValue::from("host"),
        NodeValue::from("source"),
        NodeValue::List(vec![NodeValue::from("sourcetype")]),
    ]);
    assert_eq!(value.text_items(), vec!["host", "source", "sourcetype"]);
}

#[test]
fn record_values_are_opaque_to_flattening() {
    let mut props = HashMap::new();
    props.insert("source".to_string(), NodeValue::from("src_ip"));
    props.insert("target".to_string(), NodeValue::from("source_ip"));
    let record = NodeValue::Record(props);

    assert!(record.text_items().is_empty());
    let fields = record.as_record().expect("record");
    assert_eq!(
        fields.get("source").and_then(NodeValue::as_str),
        Some("src_ip")
    );
}

#[test]
fn value_type_names() {
    assert_eq!(NodeValue::from("x").type_name(), "string");
    assert_eq!(NodeValue::Num(1.5).type_name(), "num");
    assert_eq!(NodeValue::List(Vec::new()).type_name(), "list");
}
