//! Module definitions - topic domains owning languages, knowledge and commands.

use serde::{Deserialize, Serialize};

use super::{CommandId, KnowledgeId, ModuleId};

/// A named topic domain.
///
/// Ownership lists keep insertion order so snapshots are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    pub description: String,
    /// Linked language codes, unique, in link order.
    pub languages: Vec<String>,
    pub knowledge_ids: Vec<KnowledgeId>,
    pub command_ids: Vec<CommandId>,
}

impl Module {
    /// Create an empty module with a fresh id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ModuleId::new(),
            title: title.into(),
            description: description.into(),
            languages: Vec::new(),
            knowledge_ids: Vec::new(),
            command_ids: Vec::new(),
        }
    }

    /// Check if a language code is linked.
    pub fn speaks(&self, code: &str) -> bool {
        self.languages.iter().any(|c| c == code)
    }

    /// Link a language code. Returns false if it was already linked.
    pub(crate) fn link_language(&mut self, code: &str) -> bool {
        if self.speaks(code) {
            return false;
        }
        self.languages.push(code.to_string());
        true
    }

    /// Check if this module owns a knowledge item.
    pub fn owns_knowledge(&self, id: KnowledgeId) -> bool {
        self.knowledge_ids.contains(&id)
    }

    /// Check if this module owns a command.
    pub fn owns_command(&self, id: CommandId) -> bool {
        self.command_ids.contains(&id)
    }

    pub(crate) fn detach_knowledge(&mut self, id: KnowledgeId) {
        self.knowledge_ids.retain(|owned| *owned != id);
    }

    pub(crate) fn detach_command(&mut self, id: CommandId) {
        self.command_ids.retain(|owned| *owned != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_module_is_empty() {
        let module = Module::new("Stake Engine", "Staking gameplay brain");
        assert_eq!(module.title, "Stake Engine");
        assert!(module.languages.is_empty());
        assert!(module.knowledge_ids.is_empty());
        assert!(module.command_ids.is_empty());
    }

    #[test]
    fn test_link_language_is_idempotent() {
        let mut module = Module::new("M", "");
        assert!(module.link_language("en"));
        assert!(module.link_language("fr"));
        assert!(!module.link_language("en"));

        assert_eq!(module.languages, vec!["en".to_string(), "fr".to_string()]);
    }

    #[test]
    fn test_detach_keeps_order_of_the_rest() {
        let mut module = Module::new("M", "");
        let ids: Vec<_> = (0..3).map(|_| KnowledgeId::new()).collect();
        module.knowledge_ids.extend(ids.iter().copied());

        module.detach_knowledge(ids[1]);

        assert_eq!(module.knowledge_ids, vec![ids[0], ids[2]]);
        assert!(!module.owns_knowledge(ids[1]));
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let module = Module::new("M", "d");
        let value = serde_json::to_value(&module).unwrap();
        assert!(value.get("knowledgeIds").is_some());
        assert!(value.get("commandIds").is_some());
        assert_eq!(value["id"], module.id.to_string());
    }
}
