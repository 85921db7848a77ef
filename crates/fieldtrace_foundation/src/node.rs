//! Parsed command nodes and their property values.
//!
//! The external query parser turns one pipe-delimited command into a
//! [`ParsedNode`]: a type tag, an optional variant tag, and a flat bag of
//! named properties. Fieldtrace never re-tokenizes text; the interpreter
//! re-classifies these already-built nodes against declared syntax patterns,
//! addressing properties by the parameter names in the declaration.

use std::collections::HashMap;
use std::fmt;

use crate::span::Span;

/// A property value carried by a parsed command node.
///
/// The shape mirrors what a recursive-descent SPL parser produces: scalars
/// for single parameters, lists for repeated parameters, and records for
/// repeated clause groups (e.g. one record per `old as new` pair in
/// `rename`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeValue {
    /// A string value (field names, keywords, opaque expressions).
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Num(f64),
    /// A boolean value.
    Bool(bool),
    /// A repeated value: one entry per occurrence in the query.
    List(Vec<NodeValue>),
    /// A nested clause: named sub-properties of one repeated group element.
    Record(HashMap<String, NodeValue>),
}

impl NodeValue {
    /// Returns the string content, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the list elements, if this is a list value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[NodeValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the record properties, if this is a record value.
    #[must_use]
    pub fn as_record(&self) -> Option<&HashMap<String, NodeValue>> {
        match self {
            Self::Record(props) => Some(props),
            _ => None,
        }
    }

    /// Flattens this value into text items, one per scalar occurrence.
    ///
    /// A scalar yields one item; a list yields one item per element,
    /// recursively. Records yield nothing: their sub-properties are
    /// addressed by name, not flattened.
    #[must_use]
    pub fn text_items(&self) -> Vec<String> {
        match self {
            Self::Str(s) => vec![s.clone()],
            Self::Int(n) => vec![n.to_string()],
            Self::Num(n) => vec![n.to_string()],
            Self::Bool(b) => vec![b.to_string()],
            Self::List(items) => items.iter().flat_map(NodeValue::text_items).collect(),
            Self::Record(_) => Vec::new(),
        }
    }

    /// Returns a human-readable name for this value's shape.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Num(_) => "num",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }
}

impl From<&str> for NodeValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for NodeValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for NodeValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for NodeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<NodeValue>> for NodeValue {
    fn from(items: Vec<NodeValue>) -> Self {
        Self::List(items)
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Num(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Record(props) => {
                let mut keys: Vec<_> = props.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", props[*key])?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// One already-parsed pipeline command.
///
/// `node_type` is the parser's command-class discriminator (e.g.
/// `StatsCommand`); `variant` carries the concrete command name when several
/// names share one class (e.g. `eventstats`). Property names line up with
/// the parameter names declared in the matching `CommandSyntax`.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedNode {
    /// The parser's type discriminator for this command.
    pub node_type: String,
    /// The concrete command variant, when one definition covers several names.
    pub variant: Option<String>,
    /// Where this command sits in the query text.
    pub span: Span,
    /// Named properties produced by the parser.
    pub props: HashMap<String, NodeValue>,
}

impl ParsedNode {
    /// Creates a new node with the given type discriminator.
    #[must_use]
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            variant: None,
            span: Span::at_start(),
            props: HashMap::new(),
        }
    }

    /// Sets the variant tag.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Sets the source span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Adds a named property.
    #[must_use]
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<NodeValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Gets a property by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NodeValue> {
        self.props.get(name)
    }

    /// Checks whether a property is present.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }
}
