//! Command-level field-survival semantics.
//!
//! Per-parameter effects describe what each matched field does; semantics
//! describe what the command does to every *other* field. Aggregating
//! commands narrow the field set to their grouping keys plus what they
//! create; enriching commands keep everything. Several command names can
//! share one declaration, with per-variant overrides merged over the base
//! rules (`stats` narrows, `eventstats` preserves, from one definition).

use std::collections::HashMap;

/// A class of fields retained by a narrowing command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RetainClass {
    /// The grouping keys (`by` clause fields).
    ByFields,
    /// The fields the command itself creates.
    Creates,
    /// The fields the command explicitly reads (projection commands).
    Consumes,
}

/// A field the command always produces, regardless of matched parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticCreate {
    /// The produced field name.
    pub field_name: String,
    /// Parameter names the produced value is computed from.
    pub depends_on: Vec<String>,
}

impl StaticCreate {
    /// Creates a static-create entry with no dependencies.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            depends_on: Vec::new(),
        }
    }

    /// Declares the parameters the produced value is computed from.
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

/// Command-level semantics overlay, not expressible per-parameter.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandSemantics {
    /// When set, every pre-existing field outside these classes is dropped.
    pub drops_all_except: Option<Vec<RetainClass>>,
    /// When true, every pre-existing field survives this command.
    pub preserves_all: bool,
    /// Fields always produced regardless of matched parameters.
    pub static_creates: Vec<StaticCreate>,
    /// Per-variant overrides, keyed by variant command name.
    pub variant_rules: HashMap<String, SemanticsOverride>,
}

impl CommandSemantics {
    /// Creates empty semantics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that this command narrows the field set to the given classes.
    #[must_use]
    pub fn drops_all_except<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = RetainClass>,
    {
        self.drops_all_except = Some(classes.into_iter().collect());
        self
    }

    /// Declares that this command keeps every pre-existing field.
    #[must_use]
    pub fn preserves_all(mut self) -> Self {
        self.preserves_all = true;
        self
    }

    /// Adds a field the command always produces.
    #[must_use]
    pub fn with_static_create(mut self, create: StaticCreate) -> Self {
        self.static_creates.push(create);
        self
    }

    /// Adds a per-variant override.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>, rules: SemanticsOverride) -> Self {
        self.variant_rules.insert(variant.into(), rules);
        self
    }

    /// Resolves the semantics for one command occurrence.
    ///
    /// When the node carries a variant with declared override rules, the
    /// override merges over the base. `preserves_all` and
    /// `drops_all_except` are contradictory, so whichever the override sets
    /// clears the other.
    #[must_use]
    pub fn resolve(&self, variant: Option<&str>) -> ResolvedSemantics {
        let mut resolved = ResolvedSemantics {
            drops_all_except: self.drops_all_except.clone(),
            preserves_all: self.preserves_all,
            static_creates: self.static_creates.clone(),
        };

        let Some(rules) = variant.and_then(|v| self.variant_rules.get(v)) else {
            return resolved;
        };

        if let Some(classes) = &rules.drops_all_except {
            resolved.drops_all_except = Some(classes.clone());
            resolved.preserves_all = false;
        }
        if let Some(preserves) = rules.preserves_all {
            resolved.preserves_all = preserves;
            if preserves {
                resolved.drops_all_except = None;
            }
        }
        if let Some(creates) = &rules.static_creates {
            resolved.static_creates = creates.clone();
        }

        resolved
    }
}

/// A partial semantics overlay for one variant of a shared declaration.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SemanticsOverride {
    /// Replaces the base narrowing rule when set.
    pub drops_all_except: Option<Vec<RetainClass>>,
    /// Replaces the base preservation flag when set.
    pub preserves_all: Option<bool>,
    /// Replaces the base static creates when set.
    pub static_creates: Option<Vec<StaticCreate>>,
}

impl SemanticsOverride {
    /// Creates an empty override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the narrowing rule.
    #[must_use]
    pub fn drops_all_except<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = RetainClass>,
    {
        self.drops_all_except = Some(classes.into_iter().collect());
        self
    }

    /// Overrides the preservation flag.
    #[must_use]
    pub fn preserves_all(mut self) -> Self {
        self.preserves_all = Some(true);
        self
    }

    /// Overrides the static creates.
    #[must_use]
    pub fn with_static_creates<I>(mut self, creates: I) -> Self
    where
        I: IntoIterator<Item = StaticCreate>,
    {
        self.static_creates = Some(creates.into_iter().collect());
        self
    }
}

/// The semantics reported for one concrete command occurrence.
///
/// The interpreter reports the *rule*, not the surviving field set:
/// computing survivors needs the incoming fields, which is pipeline-level
/// state outside this crate.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedSemantics {
    /// When set, pre-existing fields outside these classes are dropped.
    pub drops_all_except: Option<Vec<RetainClass>>,
    /// When true, every pre-existing field survives.
    pub preserves_all: bool,
    /// Fields always produced by this occurrence.
    pub static_creates: Vec<StaticCreate>,
}

impl ResolvedSemantics {
    /// Returns true if this occurrence narrows the field set.
    #[must_use]
    pub fn narrows(&self) -> bool {
        self.drops_all_except.is_some()
    }
}
