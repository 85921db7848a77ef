//! Structural validation of pattern declarations.
//!
//! The validator runs over authored declarations at build/CI time, before
//! any query is analyzed. It is purely structural and AST-independent:
//! the interpreter assumes patterns reaching it have passed validation and
//! does not re-check them. Fatal problems (empty sequences, effects without
//! a property name, dangling `depends_on` references) are errors; stylistic
//! oddities that still interpret correctly are warnings.
//!
//! Each diagnostic carries a `path` pinpointing the offending node, e.g.
//! `patterns[2].pattern.options[0]`, so tooling can report precisely.

use std::collections::HashSet;

use crate::command::CommandSyntax;
use crate::pattern::{FieldEffect, Literal, SyntaxPattern, TypedParam};

/// One validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// What is wrong.
    pub message: String,
    /// Dotted path to the offending pattern node. Empty for the root.
    pub path: String,
}

impl Diagnostic {
    fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }
}

/// The outcome of validating one pattern or declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    /// Fatal structural problems.
    pub errors: Vec<Diagnostic>,
    /// Non-fatal stylistic findings.
    pub warnings: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Returns true if no errors were found. Warnings do not fail validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>, path: &str) {
        self.errors.push(Diagnostic::new(message, path));
    }

    fn warning(&mut self, message: impl Into<String>, path: &str) {
        self.warnings.push(Diagnostic::new(message, path));
    }
}

/// Validates one syntax pattern tree.
#[must_use]
pub fn validate_pattern(pattern: &SyntaxPattern) -> ValidationReport {
    let mut report = ValidationReport::default();
    walk(pattern, "", &mut report, &HashSet::new());
    report
}

/// Validates one complete command declaration: its pattern tree plus the
/// cross-cutting invariants a single pattern node cannot see (dangling
/// `depends_on` references, contradictory semantics, variant bookkeeping).
#[must_use]
pub fn validate_command_syntax(decl: &CommandSyntax) -> ValidationReport {
    let mut report = ValidationReport::default();

    if decl.command.is_empty() {
        report.error("command name is empty", "");
    }
    if decl.aliases.iter().any(String::is_empty) {
        report.error("alias name is empty", "");
    }
    if decl.variants.iter().any(String::is_empty) {
        report.error("variant name is empty", "");
    }

    let mut declared = HashSet::new();
    collect_param_names(&decl.syntax, &mut declared);
    walk(&decl.syntax, "", &mut report, &declared);

    if let Some(semantics) = &decl.semantics {
        if semantics.preserves_all && semantics.drops_all_except.is_some() {
            report.error(
                "semantics both preserve all fields and drop all except a retained set",
                "",
            );
        }
        if let Some(classes) = &semantics.drops_all_except {
            if classes.is_empty() {
                report.warning("dropsAllExcept retains nothing; every field is dropped", "");
            }
        }
        for (variant, rules) in &semantics.variant_rules {
            if variant != &decl.command && !decl.variants.iter().any(|v| v == variant) {
                report.warning(
                    format!("variant rule for undeclared variant {variant}"),
                    "",
                );
            }
            if rules.preserves_all == Some(true) && rules.drops_all_except.is_some() {
                report.warning(
                    format!("variant {variant} override sets contradictory survival rules"),
                    "",
                );
            }
        }
    }

    report
}

fn join(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}

fn walk(pattern: &SyntaxPattern, path: &str, report: &mut ValidationReport, declared: &HashSet<String>) {
    match pattern {
        SyntaxPattern::TypedParam(p) => check_typed_param(p, path, report, declared),
        SyntaxPattern::Literal(l) => check_literal(l, path, report),
        SyntaxPattern::Sequence(patterns) => {
            if patterns.is_empty() {
                report.error("sequence has no patterns", path);
            } else if patterns.len() == 1 {
                report.warning("single-pattern sequence", path);
            }
            for (i, p) in patterns.iter().enumerate() {
                walk(p, &join(path, &format!("patterns[{i}]")), report, declared);
            }
        }
        SyntaxPattern::Alternation(options) => {
            if options.is_empty() {
                report.error("alternation has no options", path);
            } else if options.len() < 2 {
                report.warning("alternation with fewer than two options", path);
            }
            for (i, o) in options.iter().enumerate() {
                walk(o, &join(path, &format!("options[{i}]")), report, declared);
            }
        }
        SyntaxPattern::Group {
            pattern,
            quantifier,
        } => {
            if !quantifier.is_repeating() && *quantifier != crate::pattern::Quantifier::Optional {
                report.warning("group without an explicit quantifier", path);
            }
            walk(pattern, &join(path, "pattern"), report, declared);
        }
    }
}

fn check_typed_param(
    p: &TypedParam,
    path: &str,
    report: &mut ValidationReport,
    declared: &HashSet<String>,
) {
    if p.effect.is_some() && p.name.is_none() {
        report.error("parameter with a field effect must be named", path);
    }
    if p.param_type.is_field_like() && p.effect.is_none() && p.name.is_some() {
        report.warning("field-typed parameter has no declared effect", path);
    }

    let carries_dependencies = !p.depends_on.is_empty() || p.depends_on_expression.is_some();
    if carries_dependencies
        && !matches!(
            p.effect,
            Some(FieldEffect::Creates | FieldEffect::Modifies)
        )
    {
        report.warning(
            "dependsOn is only meaningful on creates/modifies parameters",
            path,
        );
    }

    // Cross-pattern check: dependency targets must be declared siblings.
    // Skipped when called through validate_pattern with no declaration scope.
    if !declared.is_empty() {
        for dep in &p.depends_on {
            if !declared.contains(dep) {
                report.error(
                    format!("dependsOn references undeclared parameter {dep}"),
                    path,
                );
            }
        }
        if let Some(expr) = &p.depends_on_expression {
            if !declared.contains(expr) {
                report.error(
                    format!("dependsOnExpression references undeclared parameter {expr}"),
                    path,
                );
            }
        }
    }
}

fn check_literal(l: &Literal, path: &str, report: &mut ValidationReport) {
    if l.value.is_empty() {
        report.error("literal has empty text", path);
    }
    if l.quantifier.is_repeating() {
        report.warning("literal with a repetition quantifier; only ? is idiomatic", path);
    }
}

fn collect_param_names(pattern: &SyntaxPattern, names: &mut HashSet<String>) {
    match pattern {
        SyntaxPattern::TypedParam(p) => {
            if let Some(name) = &p.name {
                names.insert(name.clone());
            }
        }
        SyntaxPattern::Literal(_) => {}
        SyntaxPattern::Sequence(patterns) | SyntaxPattern::Alternation(patterns) => {
            for p in patterns {
                collect_param_names(p, names);
            }
        }
        SyntaxPattern::Group { pattern, .. } => collect_param_names(pattern, names),
    }
}
