//! Error types for the Fieldtrace system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Interpretation mismatches are deliberately *not* errors: the interpreter
//! reports them as unmatched results so that lineage analysis can continue
//! with the next pipe stage. `Error` is reserved for structural problems
//! such as registry construction collisions.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Fieldtrace operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a duplicate command error.
    #[must_use]
    pub fn duplicate_command(name: impl Into<String>, first_module: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateCommand {
            name: name.into(),
            first_module: first_module.into(),
        })
    }

    /// Creates an unknown alias target error.
    #[must_use]
    pub fn dangling_alias(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ErrorKind::DanglingAlias {
            alias: alias.into(),
            target: target.into(),
        })
    }

    /// Creates an invalid declaration error.
    #[must_use]
    pub fn invalid_declaration(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDeclaration {
            command: command.into(),
            message: message.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Two declaration modules registered the same command name.
    #[error("duplicate command registration: {name} (first registered by {first_module})")]
    DuplicateCommand {
        /// The colliding command name.
        name: String,
        /// The module that registered the name first.
        first_module: String,
    },

    /// An alias points at a command name that was never registered.
    #[error("alias {alias} targets unregistered command {target}")]
    DanglingAlias {
        /// The alias name.
        alias: String,
        /// The missing target command.
        target: String,
    },

    /// A command declaration failed structural validation.
    #[error("invalid declaration for {command}: {message}")]
    InvalidDeclaration {
        /// The offending command name.
        command: String,
        /// Description of the structural problem.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Declaration module or source description.
    pub source: Option<String>,
    /// Pattern path within a declaration (e.g. `patterns[2].pattern`).
    pub path: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            path: None,
        }
    }

    /// Sets the source description.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the pattern path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(path) = &self.path {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at {path}")?;
        }
        Ok(())
    }
}
