//! Knowledge items - tagged, prioritized snippets owned by a module.

use serde::{Deserialize, Serialize};

use super::{KnowledgeId, ModuleId};
use crate::error::{require_text, Result};

/// A piece of knowledge stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeItem {
    pub id: KnowledgeId,

    /// Owning module. Never reassigned.
    pub module_id: ModuleId,

    /// Short label, also matched against prompt terms.
    pub topic: String,

    /// Human-readable content.
    pub content: String,

    /// Tags, duplicates collapsed, first-seen order.
    pub tags: Vec<String>,

    /// Baseline relevance; higher ranks first.
    pub priority: i64,
}

impl KnowledgeItem {
    /// Create a new item owned by `module_id`.
    pub fn new(module_id: ModuleId, topic: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: KnowledgeId::new(),
            module_id,
            topic: topic.into(),
            content: content.into(),
            tags: Vec::new(),
            priority: 0,
        }
    }

    /// Add a tag (ignored if already present).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Add multiple tags.
    pub fn with_tags<T: Into<String>>(self, tags: impl IntoIterator<Item = T>) -> Self {
        tags.into_iter().fold(self, |item, tag| item.with_tag(tag))
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Check if this item has a tag, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Caller input for a new knowledge item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeDraft {
    pub topic: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: i64,
}

impl KnowledgeDraft {
    pub fn new(topic: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            content: content.into(),
            tags: Vec::new(),
            priority: 0,
        }
    }

    pub fn with_tags<T: Into<String>>(mut self, tags: impl IntoIterator<Item = T>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Validate and turn the draft into an item owned by `module_id`.
    pub(crate) fn into_item(self, module_id: ModuleId) -> Result<KnowledgeItem> {
        require_text("topic", &self.topic)?;
        require_text("content", &self.content)?;

        Ok(KnowledgeItem::new(module_id, self.topic, self.content)
            .with_tags(self.tags)
            .with_priority(self.priority))
    }
}
