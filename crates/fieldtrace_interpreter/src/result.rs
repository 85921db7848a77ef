//! Lineage reports for one pipe stage.

use fieldtrace_syntax::ResolvedSemantics;

/// A field together with the source fields its value is computed from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedField {
    /// The created or modified field name.
    pub field_name: String,
    /// Field names (or opaque expression text) the value derives from.
    pub depends_on: Vec<String>,
}

impl DerivedField {
    /// Creates a derived field with no dependencies.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            depends_on: Vec::new(),
        }
    }

    /// Adds dependency edges.
    #[must_use]
    pub fn with_depends_on<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = names.into_iter().map(Into::into).collect();
        self
    }
}

/// The interpreter's report for one command occurrence.
///
/// Constructed fresh per call and never mutated after return. A pipeline
/// consumer folds a sequence of these into a running field-availability
/// set; that folding is outside this crate.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternMatchResult {
    /// Fields this command introduces, with dependency edges.
    pub creates: Vec<DerivedField>,
    /// Fields this command reads without changing.
    pub consumes: Vec<String>,
    /// Fields this command rewrites in place, with dependency edges.
    pub modifies: Vec<DerivedField>,
    /// Fields this command groups results by.
    pub groups_by: Vec<String>,
    /// Fields this command removes.
    pub drops: Vec<String>,
    /// The resolved command-level survival rule, if the declaration has one.
    pub semantics: Option<ResolvedSemantics>,
    /// Whether the node satisfied the declared pattern.
    pub matched: bool,
    /// Human-readable mismatch description when `matched` is false.
    pub error: Option<String>,
}

impl PatternMatchResult {
    /// Creates an empty matched result.
    #[must_use]
    pub fn matched() -> Self {
        Self {
            matched: true,
            ..Self::default()
        }
    }

    /// Creates an unmatched result carrying a mismatch description.
    #[must_use]
    pub fn mismatch(error: impl Into<String>) -> Self {
        Self {
            matched: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Returns true if the report carries no lineage entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creates.is_empty()
            && self.consumes.is_empty()
            && self.modifies.is_empty()
            && self.groups_by.is_empty()
            && self.drops.is_empty()
    }
}
