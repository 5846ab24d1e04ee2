//! Read-only dump of the graph.

use serde::{Deserialize, Serialize};

use crate::entities::{CommandId, CommandSpec, KnowledgeId, KnowledgeItem, LanguageProfile, Module, ModuleId};

/// Every collection of the graph, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GraphSnapshot {
    pub languages: Vec<LanguageProfile>,
    pub modules: Vec<Module>,
    pub knowledge: Vec<KnowledgeItem>,
    pub commands: Vec<CommandSpec>,
}

impl GraphSnapshot {
    /// Modules whose ownership list contains a knowledge id.
    pub fn knowledge_owners(&self, id: KnowledgeId) -> Vec<ModuleId> {
        self.modules
            .iter()
            .filter(|m| m.owns_knowledge(id))
            .map(|m| m.id)
            .collect()
    }

    /// Modules whose ownership list contains a command id.
    pub fn command_owners(&self, id: CommandId) -> Vec<ModuleId> {
        self.modules
            .iter()
            .filter(|m| m.owns_command(id))
            .map(|m| m.id)
            .collect()
    }
}
