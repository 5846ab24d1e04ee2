//! Ranking Engine - keyword scoring of knowledge items and commands.
//!
//! Both rankings share one tokenizer ([`TermSet`]) and are scored as follows:
//! 1. **Knowledge**: `priority + 2 × matching tags + 1 if the topic is a term`
//! 2. **Commands**: number of distinct terms found in the name or description
//!
//! Ties keep the order of the candidate pool.

mod terms;

pub use terms::*;

use std::cmp::Reverse;

use brain_registry::{CommandSpec, KnowledgeItem};
use serde::{Deserialize, Serialize};

/// Configuration for ranking.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Shortest token kept as a term.
    pub min_term_len: usize,

    /// How many ranked knowledge items a response shows.
    pub max_related: usize,

    /// Maximum number of suggested commands.
    pub max_suggestions: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_term_len: 3,
            max_related: 3,
            max_suggestions: 3,
        }
    }
}

/// A knowledge item with its effective score.
///
/// `item.priority` holds the score, not the stored baseline, so consumers
/// see the computed relevance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedKnowledge {
    pub item: KnowledgeItem,
    pub score: i64,
}

/// Scores knowledge and commands against prompts.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    config: RankingConfig,
}

impl RankingEngine {
    /// Create a ranking engine with the given configuration.
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Create a ranking engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RankingConfig::default())
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Tokenize a prompt with this engine's term length.
    pub fn terms(&self, prompt: &str) -> TermSet {
        TermSet::from_prompt(prompt, self.config.min_term_len)
    }

    /// Score a single knowledge item against a term set. Saturates at the `i64` bounds.
    pub fn knowledge_score(item: &KnowledgeItem, terms: &TermSet) -> i64 {
        let tag_hits = item.tags.iter().filter(|tag| terms.contains(tag)).count() as i64;
        let topic_hit = i64::from(terms.contains(&item.topic));
        item.priority
            .saturating_add(tag_hits.saturating_mul(2))
            .saturating_add(topic_hit)
    }

    /// Rank every candidate, highest score first.
    pub fn rank_knowledge(&self, prompt: &str, candidates: &[&KnowledgeItem]) -> Vec<RankedKnowledge> {
        let terms = self.terms(prompt);

        let mut ranked: Vec<RankedKnowledge> = candidates
            .iter()
            .map(|item| {
                let score = Self::knowledge_score(item, &terms);
                let mut item = (*item).clone();
                item.priority = score;
                RankedKnowledge { item, score }
            })
            .collect();

        // `sort_by_key` is stable: equal scores keep pool order.
        ranked.sort_by_key(|r| Reverse(r.score));
        ranked
    }

    /// Score a single command against a term set.
    pub fn command_score(command: &CommandSpec, terms: &TermSet) -> usize {
        terms.overlap(&[command.name.as_str(), command.description.as_str()])
    }

    /// Suggest up to `max_suggestions` commands that share at least one term with the prompt.
    pub fn suggest_commands(&self, prompt: &str, pool: &[&CommandSpec]) -> Vec<CommandSpec> {
        let terms = self.terms(prompt);

        let mut scored: Vec<(usize, &CommandSpec)> = pool
            .iter()
            .map(|command| (Self::command_score(command, &terms), *command))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by_key(|(score, _)| Reverse(*score));

        scored
            .into_iter()
            .take(self.config.max_suggestions)
            .map(|(_, command)| command.clone())
            .collect()
    }
}
