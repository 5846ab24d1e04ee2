//! Build readiness - rule-based diagnostics over the registry.
//!
//! Rules are checked in a fixed order and each failing rule appends its own
//! gap, so the same graph always yields the same report.

use std::sync::LazyLock;

use brain_registry::{EntityGraph, Module};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::BrainResult;

/// Topic categories a module must cover before it can build stake games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicCategory {
    PlayerOnboarding,
    MatchFlow,
    Payouts,
}

impl TopicCategory {
    /// All categories, in reporting order.
    pub const ALL: [TopicCategory; 3] = [
        TopicCategory::PlayerOnboarding,
        TopicCategory::MatchFlow,
        TopicCategory::Payouts,
    ];

    /// Check whether a knowledge topic falls in this category (case-insensitive).
    pub fn matches(&self, topic: &str) -> bool {
        self.pattern().is_match(topic)
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            TopicCategory::PlayerOnboarding => &ONBOARDING_TOPIC,
            TopicCategory::MatchFlow => &MATCH_FLOW_TOPIC,
            TopicCategory::Payouts => &PAYOUT_TOPIC,
        }
    }
}

static ONBOARDING_TOPIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)player|register|onboarding").expect("onboarding topic pattern"));
static MATCH_FLOW_TOPIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)match|flow|round").expect("match flow topic pattern"));
static PAYOUT_TOPIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)payout|settle|slash").expect("payout topic pattern"));

/// A single reason the brain is not ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadinessGap {
    NoLanguages,
    ModuleWithoutLanguage { title: String },
    NoKnowledge { scoped: bool },
    NoCommands { scoped: bool },
    MissingTopic(TopicCategory),
}

impl std::fmt::Display for ReadinessGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadinessGap::NoLanguages => f.write_str("register at least one language profile"),
            ReadinessGap::ModuleWithoutLanguage { title } => {
                write!(f, "link a language to module '{}'", title)
            }
            ReadinessGap::NoKnowledge { scoped: true } => f.write_str("add module knowledge"),
            ReadinessGap::NoKnowledge { scoped: false } => f.write_str("add knowledge items"),
            ReadinessGap::NoCommands { scoped: true } => f.write_str("add module commands"),
            ReadinessGap::NoCommands { scoped: false } => f.write_str("add commands"),
            ReadinessGap::MissingTopic(TopicCategory::PlayerOnboarding) => {
                f.write_str("module is missing player onboarding knowledge")
            }
            ReadinessGap::MissingTopic(TopicCategory::MatchFlow) => {
                f.write_str("module is missing match flow knowledge")
            }
            ReadinessGap::MissingTopic(TopicCategory::Payouts) => {
                f.write_str("module is missing payouts/settlement knowledge")
            }
        }
    }
}

/// The readiness report returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReadiness {
    pub ready: bool,
    pub summary: String,
    pub missing: Vec<String>,
}

/// Collect every gap for the given scope, in rule order.
pub fn readiness_gaps(graph: &EntityGraph, module: Option<&Module>) -> BrainResult<Vec<ReadinessGap>> {
    let mut gaps = Vec::new();
    let scoped = module.is_some();

    if graph.language_count() == 0 {
        gaps.push(ReadinessGap::NoLanguages);
    }

    if let Some(module) = module {
        if module.languages.is_empty() {
            gaps.push(ReadinessGap::ModuleWithoutLanguage {
                title: module.title.clone(),
            });
        }
    }

    let knowledge = graph.knowledge_pool(module)?;
    if knowledge.is_empty() {
        gaps.push(ReadinessGap::NoKnowledge { scoped });
    }

    if graph.command_pool(module)?.is_empty() {
        gaps.push(ReadinessGap::NoCommands { scoped });
    }

    if scoped {
        for category in TopicCategory::ALL {
            if !knowledge.iter().any(|item| category.matches(&item.topic)) {
                gaps.push(ReadinessGap::MissingTopic(category));
            }
        }
    }

    Ok(gaps)
}

/// Build the readiness report for a module, or for the whole graph.
pub fn build_readiness(graph: &EntityGraph, module: Option<&Module>) -> BrainResult<BuildReadiness> {
    let gaps = readiness_gaps(graph, module)?;

    let ready = gaps.is_empty();
    let context = match module {
        Some(module) => format!("module '{}'", module.title),
        None => "global brain".to_string(),
    };
    let summary = if ready {
        format!("Ready to build stake games with {}", context)
    } else {
        format!("Not ready to build stake games with {}", context)
    };

    Ok(BuildReadiness {
        ready,
        summary,
        missing: gaps.iter().map(ToString::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_registry::{CommandDraft, KnowledgeDraft, LanguageProfile, Proficiency};

    #[test]
    fn test_empty_graph_global() {
        let graph = EntityGraph::new();

        let report = build_readiness(&graph, None).unwrap();

        assert!(!report.ready);
        assert_eq!(
            report.missing,
            vec![
                "register at least one language profile",
                "add knowledge items",
                "add commands",
            ]
        );
        assert_eq!(report.summary, "Not ready to build stake games with global brain");
    }

    #[test]
    fn test_empty_module_lists_every_gap_in_order() {
        let mut graph = EntityGraph::new();
        let module = graph.create_module("Stake Engine", "").unwrap();

        let gaps = readiness_gaps(&graph, Some(&module)).unwrap();

        assert_eq!(
            gaps,
            vec![
                ReadinessGap::NoLanguages,
                ReadinessGap::ModuleWithoutLanguage {
                    title: "Stake Engine".to_string()
                },
                ReadinessGap::NoKnowledge { scoped: true },
                ReadinessGap::NoCommands { scoped: true },
                ReadinessGap::MissingTopic(TopicCategory::PlayerOnboarding),
                ReadinessGap::MissingTopic(TopicCategory::MatchFlow),
                ReadinessGap::MissingTopic(TopicCategory::Payouts),
            ]
        );
    }

    #[test]
    fn test_missing_onboarding_only() {
        let mut graph = EntityGraph::new();
        graph
            .register_language(LanguageProfile::new("en", "English", Proficiency::Native))
            .unwrap();
        let module = graph.create_module("Stake Engine", "").unwrap();
        graph.link_language(&module.id, "en").unwrap();
        graph
            .add_knowledge(&module.id, KnowledgeDraft::new("match flow", "Create matches"))
            .unwrap();
        graph
            .add_knowledge(&module.id, KnowledgeDraft::new("payouts", "Winners reclaim stakes"))
            .unwrap();
        graph
            .add_command(&module.id, CommandDraft::new("open-match", "open-match --entry 25"))
            .unwrap();
        let module = graph.module(&module.id).unwrap();

        let report = build_readiness(&graph, Some(module)).unwrap();

        assert!(!report.ready);
        assert_eq!(report.missing, vec!["module is missing player onboarding knowledge"]);
    }

    #[test]
    fn test_topic_categories_ignore_case() {
        assert!(TopicCategory::PlayerOnboarding.matches("Player Onboarding"));
        assert!(TopicCategory::MatchFlow.matches("ROUNDS"));
        assert!(TopicCategory::Payouts.matches("Settlement"));
        assert!(!TopicCategory::Payouts.matches("voice"));
    }

    #[test]
    fn test_ready_module() {
        let mut graph = EntityGraph::new();
        graph
            .register_language(LanguageProfile::new("en", "English", Proficiency::Native))
            .unwrap();
        let module = graph.create_module("Arena", "").unwrap();
        graph.link_language(&module.id, "en").unwrap();
        for topic in ["player onboarding", "match flow", "payouts"] {
            graph
                .add_knowledge(&module.id, KnowledgeDraft::new(topic, "details"))
                .unwrap();
        }
        graph
            .add_command(&module.id, CommandDraft::new("settle-match", "settle-match --id <matchId>"))
            .unwrap();
        let module = graph.module(&module.id).unwrap();

        let report = build_readiness(&graph, Some(module)).unwrap();

        assert!(report.ready);
        assert!(report.missing.is_empty());
        assert_eq!(report.summary, "Ready to build stake games with module 'Arena'");
    }

    #[test]
    fn test_global_scope_ignores_topic_categories() {
        let mut graph = EntityGraph::new();
        graph
            .register_language(LanguageProfile::new("en", "English", Proficiency::Native))
            .unwrap();
        let module = graph.create_module("Misc", "").unwrap();
        graph
            .add_knowledge(&module.id, KnowledgeDraft::new("voice", "Narrates"))
            .unwrap();
        graph
            .add_command(&module.id, CommandDraft::new("narrate", "narrate"))
            .unwrap();

        let report = build_readiness(&graph, None).unwrap();

        assert!(report.ready);
    }
}
