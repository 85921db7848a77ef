//! The immutable command registry.
//!
//! A [`CommandRegistry`] maps every name a command answers to (canonical
//! name, aliases, variants) onto a shared declaration. Registries are built
//! once through [`RegistryBuilder`], which rejects name collisions, and are
//! never mutated afterwards; lookups hand out `Arc` clones of the shared
//! declarations.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use fieldtrace_foundation::{Error, Result};
use fieldtrace_syntax::validate::{ValidationReport, validate_command_syntax};
use fieldtrace_syntax::{CommandCategory, CommandSyntax};

/// An immutable lookup table of command declarations.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    /// Every answering name (lowercase) to its shared declaration.
    by_name: im::HashMap<String, Arc<CommandSyntax>>,
    /// Unique declarations in registration order.
    declarations: im::Vector<Arc<CommandSyntax>>,
}

impl CommandRegistry {
    /// Looks up the declaration a name resolves to.
    ///
    /// Lookup is case-insensitive and answers for canonical names, aliases,
    /// and variants alike: `bucket` and `BIN` both return the `bin`
    /// declaration.
    #[must_use]
    pub fn get_command_pattern(&self, name: &str) -> Option<Arc<CommandSyntax>> {
        self.by_name.get(&name.to_ascii_lowercase()).cloned()
    }

    /// Returns true if the name resolves to a declaration.
    #[must_use]
    pub fn has_pattern(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// Returns every name the registry answers to, sorted.
    #[must_use]
    pub fn all_command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_name.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the unique declarations in one category, in registration
    /// order.
    #[must_use]
    pub fn commands_in_category(&self, category: CommandCategory) -> Vec<Arc<CommandSyntax>> {
        self.declarations
            .iter()
            .filter(|decl| decl.category == category)
            .cloned()
            .collect()
    }

    /// Iterates the unique declarations in registration order.
    pub fn declarations(&self) -> impl Iterator<Item = &Arc<CommandSyntax>> {
        self.declarations.iter()
    }

    /// Returns the number of unique declarations (not answering names).
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if no declarations are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Builds a [`CommandRegistry`], rejecting name collisions as they happen.
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    by_name: im::HashMap<String, Arc<CommandSyntax>>,
    declarations: im::Vector<Arc<CommandSyntax>>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one declaration under every name it answers to.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if any of the declaration's names (canonical,
    /// alias, or variant) is already taken, naming the category module that
    /// registered it first.
    pub fn register(&mut self, decl: CommandSyntax) -> Result<()> {
        let decl = Arc::new(decl);
        for name in decl.all_names() {
            let key = name.to_ascii_lowercase();
            if let Some(existing) = self.by_name.get(&key) {
                return Err(Error::duplicate_command(
                    key,
                    existing.category.name(),
                ));
            }
            self.by_name.insert(key, Arc::clone(&decl));
        }
        self.declarations.push_back(decl);
        Ok(())
    }

    /// Registers a whole declaration module.
    ///
    /// # Errors
    ///
    /// Returns the first collision encountered.
    pub fn register_module<I>(&mut self, decls: I) -> Result<()>
    where
        I: IntoIterator<Item = CommandSyntax>,
    {
        for decl in decls {
            self.register(decl)?;
        }
        Ok(())
    }

    /// Registers an extra alias for an already-registered command.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the target command is unknown or the alias name
    /// is already taken.
    pub fn register_alias(&mut self, alias: &str, target: &str) -> Result<()> {
        let alias_key = alias.to_ascii_lowercase();
        let Some(decl) = self.by_name.get(&target.to_ascii_lowercase()).cloned() else {
            return Err(Error::dangling_alias(alias, target));
        };
        if let Some(existing) = self.by_name.get(&alias_key) {
            return Err(Error::duplicate_command(
                alias_key,
                existing.category.name(),
            ));
        }
        self.by_name.insert(alias_key, decl);
        Ok(())
    }

    /// Finalizes the registry.
    #[must_use]
    pub fn build(self) -> CommandRegistry {
        CommandRegistry {
            by_name: self.by_name,
            declarations: self.declarations,
        }
    }
}

/// Validates every unique declaration in the registry.
///
/// Returns a report per canonical command name, including clean ones, so
/// callers can distinguish "validated clean" from "never validated".
#[must_use]
pub fn validate_registry(registry: &CommandRegistry) -> BTreeMap<String, ValidationReport> {
    registry
        .declarations()
        .map(|decl| (decl.command.clone(), validate_command_syntax(decl)))
        .collect()
}

/// Returns true if no declaration in the registry has validation errors.
/// Warnings do not fail registry validation.
#[must_use]
pub fn is_registry_valid(registry: &CommandRegistry) -> bool {
    registry
        .declarations()
        .all(|decl| validate_command_syntax(decl).is_valid())
}

/// Renders a one-line-per-finding validation summary for CI logs.
#[must_use]
pub fn validation_summary(registry: &CommandRegistry) -> String {
    let reports = validate_registry(registry);
    let error_count: usize = reports.values().map(|r| r.errors.len()).sum();
    let warning_count: usize = reports.values().map(|r| r.warnings.len()).sum();

    let mut summary = format!(
        "{} commands: {error_count} errors, {warning_count} warnings",
        reports.len()
    );
    for (command, report) in &reports {
        for diagnostic in &report.errors {
            let _ = write!(
                summary,
                "\nerror [{command}] {}: {}",
                diagnostic.path, diagnostic.message
            );
        }
        for diagnostic in &report.warnings {
            let _ = write!(
                summary,
                "\nwarning [{command}] {}: {}",
                diagnostic.path, diagnostic.message
            );
        }
    }
    summary
}
