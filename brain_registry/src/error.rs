//! Registry errors.

use thiserror::Error;

/// Kinds of entities held by the registry, used to name what a lookup missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Language,
    Module,
    Knowledge,
    Command,
}

impl EntityKind {
    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Language => "language",
            EntityKind::Module => "module",
            EntityKind::Knowledge => "knowledge item",
            EntityKind::Command => "command",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Conditions raised by the entity graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A lookup by id found nothing.
    #[error("unknown {kind} {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A language code was linked before being registered.
    #[error("language {code} must be registered before linking to a module")]
    UnregisteredLanguage { code: String },

    /// Creation input is missing a required field.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl RegistryError {
    /// Creates a not-found error.
    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Creates an unregistered-language error.
    pub fn unregistered_language(code: impl Into<String>) -> Self {
        Self::UnregisteredLanguage { code: code.into() }
    }

    /// Creates a validation error for a field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for the most common validation failure.
    pub fn blank(field: &'static str) -> Self {
        Self::validation(field, "must not be blank")
    }
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Reject a blank (empty or whitespace-only) required field.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(RegistryError::blank(field))
    } else {
        Ok(())
    }
}
