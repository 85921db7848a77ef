//! The pattern interpreter.
//!
//! Matches one command's declared [`SyntaxPattern`] against one parsed node
//! and classifies the node's named properties into lineage buckets. This is
//! name-addressed matching over an already-built tree: properties are looked
//! up by the parameter names in the declaration, never re-tokenized.
//!
//! Matching is a single recursive pass. The only choice point is
//! [`SyntaxPattern::Alternation`], resolved by taking the first declared
//! option whose required named parameters are present on the node; there is
//! no backtracking into later options once one is selected.

use std::collections::HashMap;

use fieldtrace_foundation::{NodeValue, ParsedNode};
use fieldtrace_syntax::{CommandSyntax, FieldEffect, Quantifier, SyntaxPattern, TypedParam};

use crate::result::{DerivedField, PatternMatchResult};

/// Interprets one command declaration against one parsed node.
///
/// Returns the field-lineage report for this pipe stage. Mismatches are
/// reported, never thrown: a wrong node type or a missing mandatory
/// parameter yields `matched = false` with a message, and the caller is
/// expected to continue with the next stage.
#[must_use]
pub fn interpret_pattern(decl: &CommandSyntax, node: &ParsedNode) -> PatternMatchResult {
    if !node_answers_to(decl, node) {
        return PatternMatchResult::mismatch(format!(
            "node type {} does not match command {}",
            node.node_type, decl.command
        ));
    }

    let scope = Scope {
        props: &node.props,
        parent: None,
    };
    let mut result = PatternMatchResult::matched();
    if let Err(message) = apply(&decl.syntax, &scope, &mut result) {
        return PatternMatchResult::mismatch(message);
    }

    if let Some(semantics) = &decl.semantics {
        let resolved = semantics.resolve(node.variant.as_deref());
        for create in &resolved.static_creates {
            let depends_on = resolve_names(&create.depends_on, &scope);
            result.creates.push(DerivedField {
                field_name: create.field_name.clone(),
                depends_on,
            });
        }
        result.semantics = Some(resolved);
    }

    result
}

/// Checks that the node's type discriminator (or variant tag) refers to
/// this declaration. Parser node types are command-class names like
/// `StatsCommand`; command names, aliases, and variants are lowercase.
fn node_answers_to(decl: &CommandSyntax, node: &ParsedNode) -> bool {
    let node_name = normalize_name(&node.node_type);
    if decl
        .all_names()
        .iter()
        .any(|n| normalize_name(n) == node_name)
    {
        return true;
    }
    node.variant.as_deref().is_some_and(|variant| {
        let variant = normalize_name(variant);
        decl.all_names().iter().any(|n| normalize_name(n) == variant)
    })
}

fn normalize_name(raw: &str) -> String {
    let lower: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match lower.strip_suffix("command") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => lower,
    }
}

/// Property lookup chain. Repetition over record arrays pushes the record
/// as an inner scope, so sibling references (`depends_on`) bind to the
/// current repetition first and fall back to the enclosing node.
struct Scope<'a> {
    props: &'a HashMap<String, NodeValue>,
    parent: Option<&'a Scope<'a>>,
}

impl Scope<'_> {
    fn get(&self, name: &str) -> Option<&NodeValue> {
        self.props
            .get(name)
            .or_else(|| self.parent.and_then(|p| p.get(name)))
    }

    /// Finds a record-array property whose records carry at least one of
    /// the given parameter names. Parsers store repeated clauses under a
    /// clause-level property (`renames`, `assignments`) rather than under
    /// any single parameter name, so the lookup goes by record keys.
    fn find_record_list(&self, names: &[String]) -> Option<&[NodeValue]> {
        for value in self.props.values() {
            if let NodeValue::List(items) = value {
                let all_records = !items.is_empty()
                    && items.iter().all(|item| item.as_record().is_some());
                let keys_match = items.iter().any(|item| {
                    item.as_record()
                        .is_some_and(|r| names.iter().any(|n| r.contains_key(n)))
                });
                if all_records && keys_match {
                    return Some(items);
                }
            }
        }
        self.parent.and_then(|p| p.find_record_list(names))
    }
}

/// Applies one pattern node, accumulating lineage buckets.
///
/// `Err` carries the mismatch message; the public entry point converts it
/// into an unmatched result.
fn apply(
    pattern: &SyntaxPattern,
    scope: &Scope<'_>,
    result: &mut PatternMatchResult,
) -> Result<(), String> {
    match pattern {
        SyntaxPattern::TypedParam(p) => apply_param(p, scope, result),
        // Literals are structural only; with name-addressed matching there
        // is nothing to verify on the node.
        SyntaxPattern::Literal(_) => Ok(()),
        SyntaxPattern::Sequence(patterns) => {
            for p in patterns {
                apply(p, scope, result)?;
            }
            Ok(())
        }
        SyntaxPattern::Alternation(options) => apply_alternation(options, scope, result),
        SyntaxPattern::Group {
            pattern,
            quantifier,
        } => apply_group(pattern, *quantifier, scope, result),
    }
}

fn apply_param(
    p: &TypedParam,
    scope: &Scope<'_>,
    result: &mut PatternMatchResult,
) -> Result<(), String> {
    // Unnamed slots are structural only.
    let Some(name) = &p.name else {
        return Ok(());
    };

    let Some(value) = scope.get(name) else {
        if p.quantifier.is_required() {
            return Err(format!("required parameter {name} not found on node"));
        }
        return Ok(());
    };

    // An empty list is zero occurrences; for a required parameter that is
    // the same as absence.
    if p.quantifier.is_required() && value.as_list().is_some_and(<[NodeValue]>::is_empty) {
        return Err(format!("required parameter {name} not found on node"));
    }

    let Some(effect) = p.effect else {
        return Ok(());
    };

    let fields = value.text_items();
    match effect {
        FieldEffect::Creates => {
            let depends_on = resolve_dependencies(p, scope);
            for field_name in fields {
                result.creates.push(DerivedField {
                    field_name,
                    depends_on: depends_on.clone(),
                });
            }
        }
        FieldEffect::Modifies => {
            let depends_on = resolve_dependencies(p, scope);
            for field_name in fields {
                result.modifies.push(DerivedField {
                    field_name,
                    depends_on: depends_on.clone(),
                });
            }
        }
        FieldEffect::Consumes => result.consumes.extend(fields),
        FieldEffect::GroupsBy => result.groups_by.extend(fields),
        FieldEffect::Drops => result.drops.extend(fields),
    }
    Ok(())
}

/// Resolves declared dependency parameter names to the *values* those
/// sibling parameters hold on this node, innermost scope first.
fn resolve_dependencies(p: &TypedParam, scope: &Scope<'_>) -> Vec<String> {
    let mut depends_on = resolve_names(&p.depends_on, scope);
    if let Some(expr) = &p.depends_on_expression {
        if let Some(value) = scope.get(expr) {
            depends_on.extend(value.text_items());
        }
    }
    depends_on
}

fn resolve_names(names: &[String], scope: &Scope<'_>) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| scope.get(name))
        .flat_map(NodeValue::text_items)
        .collect()
}

fn apply_alternation(
    options: &[SyntaxPattern],
    scope: &Scope<'_>,
    result: &mut PatternMatchResult,
) -> Result<(), String> {
    // First declared option whose required named parameters are all
    // present wins; no backtracking after selection.
    for option in options {
        if option_is_present(option, scope) {
            return apply(option, scope, result);
        }
    }
    Err("no alternation option matched the node".to_string())
}

/// Presence check used for option selection: are all of this pattern's
/// required named parameters available on the node? Literal-only options
/// are vacuously present, so authors order them last.
fn option_is_present(pattern: &SyntaxPattern, scope: &Scope<'_>) -> bool {
    match pattern {
        SyntaxPattern::TypedParam(p) => match (&p.name, p.quantifier.is_required()) {
            (Some(name), true) => scope
                .get(name)
                .is_some_and(|v| v.as_list().is_none_or(|l| !l.is_empty())),
            _ => true,
        },
        SyntaxPattern::Literal(_) => true,
        SyntaxPattern::Sequence(patterns) => {
            patterns.iter().all(|p| option_is_present(p, scope))
        }
        SyntaxPattern::Alternation(options) => {
            options.iter().any(|o| option_is_present(o, scope))
        }
        SyntaxPattern::Group {
            pattern,
            quantifier,
        } => !quantifier.is_required() || option_is_present(pattern, scope),
    }
}

fn apply_group(
    pattern: &SyntaxPattern,
    quantifier: Quantifier,
    scope: &Scope<'_>,
    result: &mut PatternMatchResult,
) -> Result<(), String> {
    let names = param_names(pattern);

    // A repeated clause group surfaces on the node as an array property:
    // either bound directly to one of the group's parameter names, or a
    // clause-level record array whose record keys are the parameter names.
    let direct_binding = names
        .iter()
        .find_map(|name| scope.get(name).and_then(NodeValue::as_list));
    let record_list = match direct_binding {
        Some(items) if items.iter().all(|item| item.as_record().is_some()) && !items.is_empty() => {
            Some(items)
        }
        Some(_) => None,
        None => scope.find_record_list(&names),
    };

    if let Some(items) = record_list {
        // One record per repetition: each record becomes the innermost
        // scope, so depends_on binds per repetition.
        for item in items {
            if let Some(record) = item.as_record() {
                let child = Scope {
                    props: record,
                    parent: Some(scope),
                };
                apply(pattern, &child, result)?;
            }
        }
        return Ok(());
    }

    if direct_binding.is_some() {
        // Parallel scalar arrays: element i of every list-bound parameter
        // forms repetition i.
        let lists: Vec<(&String, &[NodeValue])> = names
            .iter()
            .filter_map(|name| scope.get(name).and_then(NodeValue::as_list).map(|l| (name, l)))
            .collect();
        let longest = lists.iter().map(|(_, l)| l.len()).max().unwrap_or(0);
        for i in 0..longest {
            let mut element_props = HashMap::new();
            for (name, list) in &lists {
                if let Some(value) = list.get(i) {
                    element_props.insert((*name).clone(), value.clone());
                }
            }
            let child = Scope {
                props: &element_props,
                parent: Some(scope),
            };
            apply(pattern, &child, result)?;
        }
        return Ok(());
    }

    // Scalar group: apply once when any of its parameters is present.
    let any_present = names.iter().any(|name| scope.get(name).is_some());
    if any_present || names.is_empty() {
        return apply(pattern, scope, result);
    }
    if quantifier.is_required() {
        return Err(format!(
            "required clause not found on node (expected one of: {})",
            names.join(", ")
        ));
    }
    Ok(())
}

/// Collects the named parameters in a pattern subtree, in declaration order.
fn param_names(pattern: &SyntaxPattern) -> Vec<String> {
    fn collect(pattern: &SyntaxPattern, names: &mut Vec<String>) {
        match pattern {
            SyntaxPattern::TypedParam(p) => {
                if let Some(name) = &p.name {
                    if !names.iter().any(|n| n == name) {
                        names.push(name.clone());
                    }
                }
            }
            SyntaxPattern::Literal(_) => {}
            SyntaxPattern::Sequence(patterns) | SyntaxPattern::Alternation(patterns) => {
                for p in patterns {
                    collect(p, names);
                }
            }
            SyntaxPattern::Group { pattern, .. } => collect(pattern, names),
        }
    }

    let mut names = Vec::new();
    collect(pattern, &mut names);
    names
}
