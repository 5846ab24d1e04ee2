//! Command specs - documented actions a module exposes.

use serde::{Deserialize, Serialize};

use super::{CommandId, ModuleId};
use crate::error::{require_text, Result};

/// An invocable command owned by a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandSpec {
    pub id: CommandId,
    pub module_id: ModuleId,
    pub name: String,
    pub description: String,
    /// Usage template, e.g. `register-player --name <playerName>`.
    pub syntax: String,
    pub example: String,
}

impl CommandSpec {
    /// Create a new command owned by `module_id`.
    pub fn new(module_id: ModuleId, name: impl Into<String>, syntax: impl Into<String>) -> Self {
        Self {
            id: CommandId::new(),
            module_id,
            name: name.into(),
            description: String::new(),
            syntax: syntax.into(),
            example: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }
}

/// Caller input for a new command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub syntax: String,
    #[serde(default)]
    pub example: String,
}

impl CommandDraft {
    pub fn new(name: impl Into<String>, syntax: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            syntax: syntax.into(),
            example: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    pub(crate) fn into_command(self, module_id: ModuleId) -> Result<CommandSpec> {
        require_text("name", &self.name)?;
        require_text("syntax", &self.syntax)?;

        Ok(CommandSpec::new(module_id, self.name, self.syntax)
            .with_description(self.description)
            .with_example(self.example))
    }
}
