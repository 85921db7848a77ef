//! The syntax pattern algebra.
//!
//! A [`SyntaxPattern`] is a small recursive tree describing one command's
//! grammar and field semantics: typed parameter slots, literal keywords,
//! ordered sequences, alternations, and quantified groups. Patterns are
//! pure values; the interpreter crate gives quantifiers their runtime
//! meaning, and the validator checks the invariants the type system cannot
//! express (non-empty sequences, named effects, and so on).

use std::fmt;

/// Repetition arity of a pattern node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantifier {
    /// Exactly one occurrence (the default).
    #[default]
    One,
    /// Zero or one occurrence.
    Optional,
    /// One or more occurrences.
    OneOrMore,
    /// Zero or more occurrences.
    ZeroOrMore,
}

impl Quantifier {
    /// Returns true if at least one occurrence is required.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::One | Self::OneOrMore)
    }

    /// Returns true if more than one occurrence is allowed.
    #[must_use]
    pub const fn is_repeating(self) -> bool {
        matches!(self, Self::OneOrMore | Self::ZeroOrMore)
    }

    /// Returns the conventional symbol for this quantifier.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Optional => "?",
            Self::OneOrMore => "+",
            Self::ZeroOrMore => "*",
        }
    }
}

/// The value type a parameter slot accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamType {
    /// A plain field name.
    Field,
    /// A field name that may contain wildcards.
    WcField,
    /// A field produced by evaluating an expression.
    EvaledField,
    /// A comma-separated list of field names.
    FieldList,
    /// An integer argument.
    Int,
    /// A numeric argument.
    Num,
    /// A string argument (including opaque expressions).
    Str,
    /// An aggregation function term (e.g. `count`, `avg(x)`).
    StatsFunc,
    /// A boolean argument.
    Bool,
    /// A relative time modifier (e.g. `-1h@h`).
    TimeModifier,
}

impl ParamType {
    /// Returns true for parameter types that name fields.
    ///
    /// Field-typed parameters are expected to carry a field effect; the
    /// validator flags ones that do not.
    #[must_use]
    pub const fn is_field_like(self) -> bool {
        matches!(
            self,
            Self::Field | Self::WcField | Self::EvaledField | Self::FieldList
        )
    }

    /// Returns the declaration name for this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::WcField => "wc-field",
            Self::EvaledField => "evaled-field",
            Self::FieldList => "field-list",
            Self::Int => "int",
            Self::Num => "num",
            Self::Str => "string",
            Self::StatsFunc => "stats-func",
            Self::Bool => "bool",
            Self::TimeModifier => "time-modifier",
        }
    }
}

/// The semantic role a matched field plays for lineage purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldEffect {
    /// The command introduces this field.
    Creates,
    /// The command reads this field without changing it.
    Consumes,
    /// The command rewrites this field in place.
    Modifies,
    /// The command groups results by this field.
    GroupsBy,
    /// The command removes this field.
    Drops,
}

/// A named, typed parameter slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedParam {
    /// The value type this slot accepts.
    pub param_type: ParamType,
    /// The node property this slot reads. Unnamed slots are purely
    /// structural and contribute no lineage.
    pub name: Option<String>,
    /// Repetition arity.
    pub quantifier: Quantifier,
    /// Lineage role of the matched field, if any.
    pub effect: Option<FieldEffect>,
    /// Sibling parameter names whose values this field is computed from.
    pub depends_on: Vec<String>,
    /// Sibling parameter holding an opaque expression this field is
    /// computed from.
    pub depends_on_expression: Option<String>,
}

/// A fixed keyword or symbol.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// The keyword text.
    pub value: String,
    /// Repetition arity. Only `?` is idiomatic beyond the default.
    pub quantifier: Quantifier,
    /// Whether the keyword matches case-insensitively.
    pub case_insensitive: bool,
}

/// A recursive command-grammar pattern.
///
/// Closed sum type: every traversal site matches exhaustively, so adding a
/// new pattern kind is a compile-time exercise.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyntaxPattern {
    /// A named, typed slot.
    TypedParam(TypedParam),
    /// A fixed keyword.
    Literal(Literal),
    /// Ordered composition. Must be non-empty.
    Sequence(Vec<SyntaxPattern>),
    /// A choice among options, tried in declared order.
    Alternation(Vec<SyntaxPattern>),
    /// A nested pattern with its own repetition.
    Group {
        /// The grouped pattern.
        pattern: Box<SyntaxPattern>,
        /// Repetition arity of the whole group.
        quantifier: Quantifier,
    },
}

impl SyntaxPattern {
    /// Returns true if this is a typed parameter slot.
    #[must_use]
    pub const fn is_typed_param(&self) -> bool {
        matches!(self, Self::TypedParam(_))
    }

    /// Returns true if this is a literal keyword.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns true if this is an ordered sequence.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns true if this is an alternation.
    #[must_use]
    pub const fn is_alternation(&self) -> bool {
        matches!(self, Self::Alternation(_))
    }

    /// Returns true if this is a quantified group.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Returns the typed parameter, if this is one.
    #[must_use]
    pub const fn as_typed_param(&self) -> Option<&TypedParam> {
        match self {
            Self::TypedParam(p) => Some(p),
            _ => None,
        }
    }

    /// Returns a human-readable name for this pattern kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::TypedParam(_) => "typed-param",
            Self::Literal(_) => "literal",
            Self::Sequence(_) => "sequence",
            Self::Alternation(_) => "alternation",
            Self::Group { .. } => "group",
        }
    }

    /// Sets the field effect. Applies to typed parameters only.
    #[must_use]
    pub fn with_effect(mut self, effect: FieldEffect) -> Self {
        if let Self::TypedParam(p) = &mut self {
            p.effect = Some(effect);
        }
        self
    }

    /// Declares the sibling parameters this field's value is computed from.
    /// Applies to typed parameters only.
    #[must_use]
    pub fn with_depends_on<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Self::TypedParam(p) = &mut self {
            p.depends_on = names.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Declares the sibling parameter holding the opaque expression this
    /// field is computed from. Applies to typed parameters only.
    #[must_use]
    pub fn with_depends_on_expression(mut self, name: impl Into<String>) -> Self {
        if let Self::TypedParam(p) = &mut self {
            p.depends_on_expression = Some(name.into());
        }
        self
    }

    /// Makes the literal match case-insensitively. Applies to literals only.
    #[must_use]
    pub fn case_insensitive(mut self) -> Self {
        if let Self::Literal(l) = &mut self {
            l.case_insensitive = true;
        }
        self
    }

    /// Sets the quantifier to `?` (zero or one).
    ///
    /// Sequences and alternations have no quantifier of their own, so they
    /// are wrapped in an optional [`SyntaxPattern::Group`].
    #[must_use]
    pub fn optional(self) -> Self {
        self.with_quantifier(Quantifier::Optional)
    }

    /// Sets the quantifier to `+` (one or more), wrapping sequences and
    /// alternations in a group.
    #[must_use]
    pub fn one_or_more(self) -> Self {
        self.with_quantifier(Quantifier::OneOrMore)
    }

    /// Sets the quantifier to `*` (zero or more), wrapping sequences and
    /// alternations in a group.
    #[must_use]
    pub fn zero_or_more(self) -> Self {
        self.with_quantifier(Quantifier::ZeroOrMore)
    }

    fn with_quantifier(mut self, quantifier: Quantifier) -> Self {
        match &mut self {
            Self::TypedParam(p) => {
                p.quantifier = quantifier;
                self
            }
            Self::Literal(l) => {
                l.quantifier = quantifier;
                self
            }
            Self::Group { quantifier: q, .. } => {
                *q = quantifier;
                self
            }
            Self::Sequence(_) | Self::Alternation(_) => Self::Group {
                pattern: Box::new(self),
                quantifier,
            },
        }
    }
}

/// Creates a typed parameter slot reading the given node property.
#[must_use]
pub fn param(param_type: ParamType, name: impl Into<String>) -> SyntaxPattern {
    SyntaxPattern::TypedParam(TypedParam {
        param_type,
        name: Some(name.into()),
        quantifier: Quantifier::One,
        effect: None,
        depends_on: Vec::new(),
        depends_on_expression: None,
    })
}

/// Creates an unnamed, purely structural parameter slot.
#[must_use]
pub fn anon(param_type: ParamType) -> SyntaxPattern {
    SyntaxPattern::TypedParam(TypedParam {
        param_type,
        name: None,
        quantifier: Quantifier::One,
        effect: None,
        depends_on: Vec::new(),
        depends_on_expression: None,
    })
}

/// Creates a `field`-typed parameter slot.
#[must_use]
pub fn field(name: impl Into<String>) -> SyntaxPattern {
    param(ParamType::Field, name)
}

/// Creates a `field-list`-typed parameter slot.
#[must_use]
pub fn field_list(name: impl Into<String>) -> SyntaxPattern {
    param(ParamType::FieldList, name)
}

/// Creates a literal keyword.
#[must_use]
pub fn lit(value: impl Into<String>) -> SyntaxPattern {
    SyntaxPattern::Literal(Literal {
        value: value.into(),
        quantifier: Quantifier::One,
        case_insensitive: false,
    })
}

/// Creates an ordered sequence of patterns.
#[must_use]
pub fn seq<I>(patterns: I) -> SyntaxPattern
where
    I: IntoIterator<Item = SyntaxPattern>,
{
    SyntaxPattern::Sequence(patterns.into_iter().collect())
}

/// Creates an alternation over the given options, tried in declared order.
#[must_use]
pub fn alt<I>(options: I) -> SyntaxPattern
where
    I: IntoIterator<Item = SyntaxPattern>,
{
    SyntaxPattern::Alternation(options.into_iter().collect())
}

/// Creates a quantified group around a pattern.
#[must_use]
pub fn group(pattern: SyntaxPattern, quantifier: Quantifier) -> SyntaxPattern {
    SyntaxPattern::Group {
        pattern: Box::new(pattern),
        quantifier,
    }
}

impl fmt::Display for SyntaxPattern {
    /// Renders the pattern in SPL help notation, e.g.
    /// `bin [span=<int>] <field> [as <field>]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypedParam(p) => {
                let rendered = match &p.name {
                    Some(name) => format!("<{name}:{}>", p.param_type.name()),
                    None => format!("<{}>", p.param_type.name()),
                };
                write_quantified(f, &rendered, p.quantifier)
            }
            Self::Literal(l) => write_quantified(f, &l.value, l.quantifier),
            Self::Sequence(patterns) => {
                for (i, p) in patterns.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{p}")?;
                }
                Ok(())
            }
            Self::Alternation(options) => {
                write!(f, "(")?;
                for (i, o) in options.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{o}")?;
                }
                write!(f, ")")
            }
            Self::Group {
                pattern,
                quantifier,
            } => write_quantified(f, &format!("{pattern}"), *quantifier),
        }
    }
}

fn write_quantified(f: &mut fmt::Formatter<'_>, inner: &str, q: Quantifier) -> fmt::Result {
    match q {
        Quantifier::One => write!(f, "{inner}"),
        Quantifier::Optional => write!(f, "[{inner}]"),
        Quantifier::OneOrMore => write!(f, "{inner}..."),
        Quantifier::ZeroOrMore => write!(f, "[{inner}]..."),
    }
}
