//! Brain errors.

use brain_registry::RegistryError;
use thiserror::Error;

/// Conditions raised by brain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrainError {
    /// A registry lookup or mutation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A response was requested before any language exists.
    #[error("no languages registered in the brain yet")]
    NoLanguagesRegistered,
}

/// Result alias for brain operations.
pub type BrainResult<T> = std::result::Result<T, BrainError>;
