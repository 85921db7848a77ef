//! Property tests for the interpreter
//!
//! The interpreter is a pure function of (declaration, node): same inputs,
//! same report, and no input shape may panic it.

use std::collections::HashMap;

use fieldtrace_foundation::{NodeValue, ParsedNode};
use fieldtrace_interpreter::interpret_pattern;
use fieldtrace_registry::default_registry;
use proptest::prelude::*;

fn scalar_value() -> impl Strategy<Value = NodeValue> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,12}".prop_map(NodeValue::from),
        any::<i64>().prop_map(NodeValue::Int),
        any::<bool>().prop_map(NodeValue::Bool),
    ]
}

fn node_value() -> impl Strategy<Value = NodeValue> {
    scalar_value().prop_recursive(2, 8, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(NodeValue::List),
            prop::collection::hash_map("[a-z]{1,8}", inner, 0..4).prop_map(NodeValue::Record),
        ]
    })
}

fn arbitrary_props() -> impl Strategy<Value = HashMap<String, NodeValue>> {
    prop::collection::hash_map(
        prop_oneof![
            Just("field".to_string()),
            Just("alias".to_string()),
            Just("span".to_string()),
            Just("fields".to_string()),
            Just("aggregations".to_string()),
            "[a-z]{1,8}",
        ],
        node_value(),
        0..5,
    )
}

proptest! {
    #[test]
    fn interpretation_never_panics(props in arbitrary_props(), node_type in "[A-Za-z]{1,16}") {
        let registry = default_registry();
        let mut node = ParsedNode::new(node_type);
        node.props = props;

        for decl in registry.declarations() {
            let _ = interpret_pattern(decl, &node);
        }
    }

    #[test]
    fn interpretation_is_deterministic(props in arbitrary_props()) {
        let registry = default_registry();
        let bin = registry.get_command_pattern("bin").expect("bin");
        let mut node = ParsedNode::new("BinCommand");
        node.props = props;

        let first = interpret_pattern(&bin, &node);
        let second = interpret_pattern(&bin, &node);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn matched_and_error_are_mutually_exclusive(props in arbitrary_props()) {
        let registry = default_registry();
        let stats = registry.get_command_pattern("stats").expect("stats");
        let mut node = ParsedNode::new("StatsCommand");
        node.props = props;

        let result = interpret_pattern(&stats, &node);
        if result.matched {
            prop_assert!(result.error.is_none());
        } else {
            prop_assert!(result.error.is_some());
            prop_assert!(result.is_empty());
        }
    }

    #[test]
    fn bin_modifies_exactly_the_named_field(name in "[a-z_][a-z0-9_]{0,12}") {
        let registry = default_registry();
        let bin = registry.get_command_pattern("bin").expect("bin");
        let node = ParsedNode::new("BinCommand").with_prop("field", name.as_str());

        let result = interpret_pattern(&bin, &node);
        prop_assert!(result.matched);
        prop_assert_eq!(result.modifies.len(), 1);
        prop_assert_eq!(result.modifies[0].field_name.as_str(), name.as_str());
    }
}
