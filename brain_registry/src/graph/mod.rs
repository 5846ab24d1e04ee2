//! Entity Graph - the repository holding every registered entity.
//!
//! The graph owns four insertion-ordered collections (languages by code,
//! modules, knowledge items and commands by id) and is the only place where
//! ownership between them changes. Every mutation takes `&mut self` and
//! completes without suspending, so no caller can observe a module whose
//! ownership list disagrees with the global collections.

mod snapshot;

pub use snapshot::*;

use indexmap::IndexMap;
use tracing::debug;

use crate::entities::{
    CommandDraft, CommandId, CommandSpec, KnowledgeDraft, KnowledgeId, KnowledgeItem,
    LanguageProfile, Module, ModuleId,
};
use crate::error::{require_text, EntityKind, RegistryError, Result};

/// The main registry structure.
#[derive(Debug, Clone, Default)]
pub struct EntityGraph {
    /// Registered languages by code, in first-registration order.
    languages: IndexMap<String, LanguageProfile>,

    /// All modules by id, in creation order.
    modules: IndexMap<ModuleId, Module>,

    /// All knowledge items by id, in creation order.
    knowledge: IndexMap<KnowledgeId, KnowledgeItem>,

    /// All commands by id, in creation order.
    commands: IndexMap<CommandId, CommandSpec>,
}

impl EntityGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language profile.
    ///
    /// Re-registering a code overwrites the profile but keeps the position it
    /// was first registered at, so the global default language never moves.
    pub fn register_language(&mut self, profile: LanguageProfile) -> Result<LanguageProfile> {
        let profile = profile.validated()?;
        debug!(code = %profile.code, "language registered");
        self.languages.insert(profile.code.clone(), profile.clone());
        Ok(profile)
    }

    /// Create an empty module.
    pub fn create_module(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Module> {
        let title = title.into();
        require_text("title", &title)?;

        let module = Module::new(title, description);
        debug!(module_id = %module.id, title = %module.title, "module created");
        self.modules.insert(module.id, module.clone());
        Ok(module)
    }

    /// Link a registered language to a module.
    ///
    /// Returns `false` when the code was already linked (no-op).
    pub fn link_language(&mut self, module_id: &ModuleId, code: &str) -> Result<bool> {
        let module = self
            .modules
            .get_mut(module_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Module, module_id))?;

        if !self.languages.contains_key(code) {
            return Err(RegistryError::unregistered_language(code));
        }

        let linked = module.link_language(code);
        debug!(module_id = %module_id, code, linked, "language link requested");
        Ok(linked)
    }

    /// Add a knowledge item to a module.
    pub fn add_knowledge(
        &mut self,
        module_id: &ModuleId,
        draft: KnowledgeDraft,
    ) -> Result<KnowledgeItem> {
        let module = self
            .modules
            .get_mut(module_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Module, module_id))?;

        let item = draft.into_item(*module_id)?;

        module.knowledge_ids.push(item.id);
        self.knowledge.insert(item.id, item.clone());
        debug!(module_id = %module_id, knowledge_id = %item.id, topic = %item.topic, "knowledge added");
        Ok(item)
    }

    /// Add a command to a module.
    pub fn add_command(&mut self, module_id: &ModuleId, draft: CommandDraft) -> Result<CommandSpec> {
        let module = self
            .modules
            .get_mut(module_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Module, module_id))?;

        let command = draft.into_command(*module_id)?;

        module.command_ids.push(command.id);
        self.commands.insert(command.id, command.clone());
        debug!(module_id = %module_id, command_id = %command.id, name = %command.name, "command added");
        Ok(command)
    }

    /// Remove a knowledge item and detach it from its module.
    pub fn remove_knowledge(&mut self, id: &KnowledgeId) -> Result<KnowledgeItem> {
        let item = self
            .knowledge
            .shift_remove(id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Knowledge, id))?;

        if let Some(module) = self.modules.get_mut(&item.module_id) {
            module.detach_knowledge(item.id);
        }
        debug!(knowledge_id = %id, "knowledge removed");
        Ok(item)
    }

    /// Remove a command and detach it from its module.
    pub fn remove_command(&mut self, id: &CommandId) -> Result<CommandSpec> {
        let command = self
            .commands
            .shift_remove(id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Command, id))?;

        if let Some(module) = self.modules.get_mut(&command.module_id) {
            module.detach_command(command.id);
        }
        debug!(command_id = %id, "command removed");
        Ok(command)
    }

    /// Get a module by id.
    pub fn module(&self, id: &ModuleId) -> Result<&Module> {
        self.modules
            .get(id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Module, id))
    }

    /// Get a knowledge item by id.
    pub fn knowledge_item(&self, id: &KnowledgeId) -> Result<&KnowledgeItem> {
        self.knowledge
            .get(id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Knowledge, id))
    }

    /// Get a command by id.
    pub fn command(&self, id: &CommandId) -> Result<&CommandSpec> {
        self.commands
            .get(id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Command, id))
    }

    /// Get a registered language by code.
    pub fn language(&self, code: &str) -> Option<&LanguageProfile> {
        self.languages.get(code)
    }

    /// The first language ever registered.
    pub fn first_language(&self) -> Option<&LanguageProfile> {
        self.languages.first().map(|(_, profile)| profile)
    }

    /// All registered languages, in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.languages.values()
    }

    /// All modules, in creation order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Knowledge in scope: the module's items in ownership order, or every
    /// item in creation order when no module is given.
    pub fn knowledge_pool(&self, module: Option<&Module>) -> Result<Vec<&KnowledgeItem>> {
        match module {
            Some(module) => module
                .knowledge_ids
                .iter()
                .map(|id| self.knowledge_item(id))
                .collect(),
            None => Ok(self.knowledge.values().collect()),
        }
    }

    /// Commands in scope, with the same rules as [`Self::knowledge_pool`].
    pub fn command_pool(&self, module: Option<&Module>) -> Result<Vec<&CommandSpec>> {
        match module {
            Some(module) => module.command_ids.iter().map(|id| self.command(id)).collect(),
            None => Ok(self.commands.values().collect()),
        }
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn knowledge_count(&self) -> usize {
        self.knowledge.len()
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Full read-only dump, every collection in insertion order.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            languages: self.languages.values().cloned().collect(),
            modules: self.modules.values().cloned().collect(),
            knowledge: self.knowledge.values().cloned().collect(),
            commands: self.commands.values().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Proficiency;

    fn english() -> LanguageProfile {
        LanguageProfile::new("en", "English", Proficiency::Native)
    }

    fn french() -> LanguageProfile {
        LanguageProfile::new("fr", "French", Proficiency::Fluent)
    }

    #[test]
    fn test_create_and_get_module() {
        let mut graph = EntityGraph::new();
        let module = graph.create_module("Stake Engine", "Staking brain").unwrap();

        let retrieved = graph.module(&module.id).unwrap();
        assert_eq!(retrieved.title, "Stake Engine");
        assert_eq!(graph.module_count(), 1);
    }

    #[test]
    fn test_create_module_requires_title() {
        let mut graph = EntityGraph::new();
        let err = graph.create_module("", "no title").unwrap_err();
        assert_eq!(err, RegistryError::blank("title"));
        assert_eq!(graph.module_count(), 0);
    }

    #[test]
    fn test_unknown_module_is_not_found() {
        let graph = EntityGraph::new();
        let missing = ModuleId::new();
        assert_eq!(
            graph.module(&missing).unwrap_err(),
            RegistryError::NotFound {
                kind: EntityKind::Module,
                id: missing.to_string(),
            }
        );
    }

    #[test]
    fn test_reregistration_overwrites_in_place() {
        let mut graph = EntityGraph::new();
        graph.register_language(english()).unwrap();
        graph.register_language(french()).unwrap();
        graph
            .register_language(LanguageProfile::new("en", "English (UK)", Proficiency::Fluent))
            .unwrap();

        assert_eq!(graph.language_count(), 2);
        assert_eq!(graph.first_language().unwrap().name, "English (UK)");
        let codes: Vec<_> = graph.languages().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "fr"]);
    }

    #[test]
    fn test_link_language_twice_is_noop() {
        let mut graph = EntityGraph::new();
        graph.register_language(english()).unwrap();
        let module = graph.create_module("M", "").unwrap();

        assert!(graph.link_language(&module.id, "en").unwrap());
        assert!(!graph.link_language(&module.id, "en").unwrap());

        assert_eq!(graph.module(&module.id).unwrap().languages, vec!["en".to_string()]);
    }

    #[test]
    fn test_link_unregistered_language_fails() {
        let mut graph = EntityGraph::new();
        let module = graph.create_module("M", "").unwrap();

        let err = graph.link_language(&module.id, "de").unwrap_err();
        assert_eq!(err, RegistryError::unregistered_language("de"));
        assert!(graph.module(&module.id).unwrap().languages.is_empty());
    }

    #[test]
    fn test_link_language_checks_module_first() {
        let mut graph = EntityGraph::new();
        let err = graph.link_language(&ModuleId::new(), "de").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { kind: EntityKind::Module, .. }));
    }

    #[test]
    fn test_add_knowledge_appends_ownership() {
        let mut graph = EntityGraph::new();
        let module = graph.create_module("M", "").unwrap();

        let first = graph
            .add_knowledge(&module.id, KnowledgeDraft::new("match flow", "Create matches"))
            .unwrap();
        let second = graph
            .add_knowledge(&module.id, KnowledgeDraft::new("payouts", "Winners reclaim"))
            .unwrap();

        let module = graph.module(&module.id).unwrap();
        assert_eq!(module.knowledge_ids, vec![first.id, second.id]);
        assert_eq!(graph.knowledge_item(&first.id).unwrap().module_id, module.id);
    }

    #[test]
    fn test_add_to_unknown_module_leaves_graph_untouched() {
        let mut graph = EntityGraph::new();
        let result = graph.add_command(&ModuleId::new(), CommandDraft::new("noop", "noop"));

        assert!(result.is_err());
        assert_eq!(graph.command_count(), 0);
    }

    #[test]
    fn test_invalid_draft_leaves_module_untouched() {
        let mut graph = EntityGraph::new();
        let module = graph.create_module("M", "").unwrap();

        let result = graph.add_knowledge(&module.id, KnowledgeDraft::new(" ", "content"));

        assert_eq!(result, Err(RegistryError::blank("topic")));
        assert!(graph.module(&module.id).unwrap().knowledge_ids.is_empty());
        assert_eq!(graph.knowledge_count(), 0);
    }

    #[test]
    fn test_pools_follow_scope() {
        let mut graph = EntityGraph::new();
        let a = graph.create_module("A", "").unwrap();
        let b = graph.create_module("B", "").unwrap();

        graph.add_knowledge(&a.id, KnowledgeDraft::new("one", "1")).unwrap();
        graph.add_knowledge(&b.id, KnowledgeDraft::new("two", "2")).unwrap();
        graph.add_knowledge(&a.id, KnowledgeDraft::new("three", "3")).unwrap();

        let module_a = graph.module(&a.id).unwrap();
        let scoped: Vec<_> = graph
            .knowledge_pool(Some(module_a))
            .unwrap()
            .into_iter()
            .map(|k| k.topic.as_str())
            .collect();
        assert_eq!(scoped, vec!["one", "three"]);

        let global: Vec<_> = graph
            .knowledge_pool(None)
            .unwrap()
            .into_iter()
            .map(|k| k.topic.as_str())
            .collect();
        assert_eq!(global, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_remove_knowledge_detaches_from_module() {
        let mut graph = EntityGraph::new();
        let module = graph.create_module("M", "").unwrap();
        let item = graph
            .add_knowledge(&module.id, KnowledgeDraft::new("voice", "Narrates"))
            .unwrap();

        let removed = graph.remove_knowledge(&item.id).unwrap();

        assert_eq!(removed.id, item.id);
        assert!(graph.knowledge_item(&item.id).is_err());
        assert!(!graph.module(&module.id).unwrap().owns_knowledge(item.id));
        assert!(graph.remove_knowledge(&item.id).is_err());
    }

    #[test]
    fn test_remove_command_detaches_from_module() {
        let mut graph = EntityGraph::new();
        let module = graph.create_module("M", "").unwrap();
        let keep = graph
            .add_command(&module.id, CommandDraft::new("open-match", "open-match"))
            .unwrap();
        let drop = graph
            .add_command(&module.id, CommandDraft::new("settle-match", "settle-match"))
            .unwrap();

        graph.remove_command(&drop.id).unwrap();

        assert_eq!(graph.module(&module.id).unwrap().command_ids, vec![keep.id]);
        assert_eq!(graph.command_count(), 1);
    }

    #[test]
    fn test_snapshot_preserves_creation_order() {
        let mut graph = EntityGraph::new();
        graph.register_language(french()).unwrap();
        graph.register_language(english()).unwrap();
        let first = graph.create_module("First", "").unwrap();
        let second = graph.create_module("Second", "").unwrap();

        let snapshot = graph.snapshot();

        let codes: Vec<_> = snapshot.languages.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["fr", "en"]);
        let ids: Vec<_> = snapshot.modules.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}
