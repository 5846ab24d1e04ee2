//! Entity definitions for the brain registry.

mod command;
mod knowledge;
mod language;
mod module;

pub use command::*;
pub use knowledge::*;
pub use language::*;
pub use module::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EntityKind, RegistryError};

/// Unique identifier for modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub Uuid);

impl ModuleId {
    /// Create a new random module ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a caller-supplied id.
    ///
    /// A string that is not a UUID cannot name an existing module, so it is
    /// reported as not found rather than as a format error.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| RegistryError::not_found(EntityKind::Module, raw))
    }
}

impl Default for ModuleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for knowledge items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnowledgeId(pub Uuid);

impl KnowledgeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| RegistryError::not_found(EntityKind::Knowledge, raw))
    }
}

impl Default for KnowledgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for KnowledgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(pub Uuid);

impl CommandId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| RegistryError::not_found(EntityKind::Command, raw))
    }
}

impl Default for CommandId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ModuleId::new(), ModuleId::new());
        assert_ne!(KnowledgeId::new(), KnowledgeId::new());
        assert_ne!(CommandId::new(), CommandId::new());
    }

    #[test]
    fn test_parse_round_trips_display() {
        let id = ModuleId::new();
        assert_eq!(ModuleId::parse(&id.to_string()), Ok(id));
    }

    #[test]
    fn test_parse_garbage_is_not_found() {
        let err = ModuleId::parse("not-a-module").unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotFound {
                kind: EntityKind::Module,
                id: "not-a-module".to_string(),
            }
        );
    }

    #[test]
    fn test_id_serializes_as_bare_uuid() {
        let id = CommandId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
