//! Command syntax declarations.
//!
//! A [`CommandSyntax`] is the authored record for one command name: its
//! grammar pattern, optional command-level semantics, and registry metadata
//! (aliases, variants sharing the definition, grammar-support level).
//! Declarations are authored once and immutable after registry construction.

use crate::pattern::SyntaxPattern;
use crate::semantics::CommandSemantics;

/// The declaration module family a command belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandCategory {
    /// Aggregating and reporting commands (stats, chart, top, ...).
    Aggregation,
    /// Commands that introduce new fields (eval, rex, lookup, ...).
    FieldCreators,
    /// Commands that rewrite existing fields (bin, convert, fillnull, ...).
    FieldModifiers,
    /// Row filters (search, where, dedup, head, ...).
    Filters,
    /// Pipeline combinators (append, join, union, map, ...).
    Pipeline,
    /// Result reshaping (table, fields, rename, sort, transpose, ...).
    Results,
    /// Event-generating commands (makeresults, inputlookup, tstats, ...).
    Generators,
    /// Metrics commands (mstats, mcollect, ...).
    Metrics,
    /// Output sinks (outputlookup, collect, sendemail, ...).
    Output,
    /// Everything else (highlight, format, history, ...).
    Misc,
}

impl CommandCategory {
    /// Returns the declaration module name for this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aggregation => "aggregation",
            Self::FieldCreators => "field-creators",
            Self::FieldModifiers => "field-modifiers",
            Self::Filters => "filters",
            Self::Pipeline => "pipeline",
            Self::Results => "results",
            Self::Generators => "generators",
            Self::Metrics => "metrics",
            Self::Output => "output",
            Self::Misc => "misc",
        }
    }
}

/// How completely the declared pattern models the real command grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrammarSupport {
    /// The pattern covers the command's full documented grammar.
    #[default]
    Full,
    /// The pattern covers the lineage-relevant clauses only.
    Partial,
    /// The command is recognized by name; its arguments are opaque.
    Recognized,
}

/// One command's complete authored declaration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandSyntax {
    /// Canonical lowercase command name.
    pub command: String,
    /// Declaration category.
    pub category: CommandCategory,
    /// How completely the pattern models the real grammar.
    pub grammar_support: GrammarSupport,
    /// Alternate names resolving to this same declaration (`bucket` → `bin`).
    pub aliases: Vec<String>,
    /// Additional command names sharing this declaration with their own
    /// semantics overrides (`eventstats` on the `stats` declaration).
    pub variants: Vec<String>,
    /// The grammar pattern.
    pub syntax: SyntaxPattern,
    /// Command-level field-survival semantics, if any.
    pub semantics: Option<CommandSemantics>,
}

impl CommandSyntax {
    /// Creates a declaration with full grammar support and no aliases.
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        category: CommandCategory,
        syntax: SyntaxPattern,
    ) -> Self {
        Self {
            command: command.into(),
            category,
            grammar_support: GrammarSupport::Full,
            aliases: Vec::new(),
            variants: Vec::new(),
            syntax,
            semantics: None,
        }
    }

    /// Adds an alias name.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Adds a variant name sharing this declaration.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    /// Attaches command-level semantics.
    #[must_use]
    pub fn with_semantics(mut self, semantics: CommandSemantics) -> Self {
        self.semantics = Some(semantics);
        self
    }

    /// Sets the grammar-support level.
    #[must_use]
    pub fn with_grammar_support(mut self, support: GrammarSupport) -> Self {
        self.grammar_support = support;
        self
    }

    /// Returns every name this declaration answers to: the canonical
    /// command, its aliases, and its variants.
    #[must_use]
    pub fn all_names(&self) -> Vec<&str> {
        let mut names = vec![self.command.as_str()];
        names.extend(self.aliases.iter().map(String::as_str));
        names.extend(self.variants.iter().map(String::as_str));
        names
    }

    /// Checks whether a lowercase name refers to this declaration.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.all_names().iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}
