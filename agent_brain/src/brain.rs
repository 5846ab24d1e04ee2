//! Brain - the façade composing ranking, readiness and design over an owned graph.

use brain_registry::{CommandSpec, EntityGraph, KnowledgeId, LanguageProfile, Module, ModuleId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::designer::{design_stake_game, VoiceGameDesign};
use crate::error::{BrainError, BrainResult};
use crate::ranking::{RankedKnowledge, RankingConfig, RankingEngine};
use crate::readiness::{build_readiness, BuildReadiness};

/// Body shown when no knowledge is in scope.
pub const NO_KNOWLEDGE_NOTICE: &str = "No matching knowledge yet, please teach me.";

/// A ranked knowledge reference included in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedKnowledge {
    pub id: KnowledgeId,
    pub topic: String,
    pub score: i64,
}

impl From<&RankedKnowledge> for RelatedKnowledge {
    fn from(ranked: &RankedKnowledge) -> Self {
        Self {
            id: ranked.item.id,
            topic: ranked.item.topic.clone(),
            score: ranked.score,
        }
    }
}

/// The reply to a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub message: String,
    pub chosen_language: String,
    /// Narration marker, present only when voice was requested.
    pub voice_line: Option<String>,
    pub related_knowledge: Vec<RelatedKnowledge>,
    pub suggested_commands: Vec<CommandSpec>,
}

/// A drafted game plus the narrated walkthrough of building it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceDesign {
    pub design: VoiceGameDesign,
    pub narration: AgentResponse,
}

/// The agent brain.
///
/// Owns the entity graph; callers mutate it through [`Brain::graph_mut`] and
/// read it through the prompt, readiness and design operations.
#[derive(Debug, Clone, Default)]
pub struct Brain {
    graph: EntityGraph,
    ranking: RankingEngine,
}

impl Brain {
    /// Create a brain over an existing graph with default ranking.
    pub fn new(graph: EntityGraph) -> Self {
        Self::with_config(graph, RankingConfig::default())
    }

    /// Create a brain with a custom ranking configuration.
    pub fn with_config(graph: EntityGraph, config: RankingConfig) -> Self {
        Self {
            graph,
            ranking: RankingEngine::new(config),
        }
    }

    pub fn graph(&self) -> &EntityGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut EntityGraph {
        &mut self.graph
    }

    pub fn into_graph(self) -> EntityGraph {
        self.graph
    }

    /// Resolve an optional module id.
    fn resolve_module(&self, module_id: Option<&ModuleId>) -> BrainResult<Option<&Module>> {
        module_id
            .map(|id| self.graph.module(id))
            .transpose()
            .map_err(BrainError::from)
    }

    /// Choose the response language.
    ///
    /// Priority: the preferred code if registered, then the module's first
    /// registered language, then the first language ever registered.
    pub fn pick_language(
        &self,
        module: Option<&Module>,
        preferred: Option<&str>,
    ) -> BrainResult<&LanguageProfile> {
        if let Some(profile) = preferred.and_then(|code| self.graph.language(code)) {
            return Ok(profile);
        }

        if let Some(profile) = module
            .into_iter()
            .flat_map(|m| m.languages.iter())
            .find_map(|code| self.graph.language(code))
        {
            return Ok(profile);
        }

        self.graph.first_language().ok_or(BrainError::NoLanguagesRegistered)
    }

    /// Answer a prompt.
    pub fn respond(
        &self,
        prompt: &str,
        module_id: Option<&ModuleId>,
        preferred_language: Option<&str>,
        voice: bool,
    ) -> BrainResult<AgentResponse> {
        let module = self.resolve_module(module_id)?;
        let language = self.pick_language(module, preferred_language)?;

        let pool = self.graph.knowledge_pool(module)?;
        let mut ranked = self.ranking.rank_knowledge(prompt, &pool);
        ranked.truncate(self.ranking.config().max_related);

        let suggested_commands = match module {
            Some(module) => {
                let commands = self.graph.command_pool(Some(module))?;
                self.ranking.suggest_commands(prompt, &commands)
            }
            None => Vec::new(),
        };

        let body = if ranked.is_empty() {
            NO_KNOWLEDGE_NOTICE.to_string()
        } else {
            ranked
                .iter()
                .map(|r| format!("• {}: {}", r.item.topic, r.item.content))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let module_line = match module {
            Some(module) => format!("Module: {}", module.title),
            None => "Module: general".to_string(),
        };

        let message = [
            format!("Language: {} ({})", language.name, language.code),
            module_line,
            "Response:".to_string(),
            body,
        ]
        .join("\n");

        let voice_line = voice.then(|| format!("Narration ready in {}", language.name));

        debug!(
            language = %language.code,
            related = ranked.len(),
            suggested = suggested_commands.len(),
            "prompt answered"
        );

        Ok(AgentResponse {
            message,
            chosen_language: language.code.clone(),
            voice_line,
            related_knowledge: ranked.iter().map(RelatedKnowledge::from).collect(),
            suggested_commands,
        })
    }

    /// Diagnose whether a module (or the whole brain) can build stake games.
    pub fn build_readiness(&self, module_id: Option<&ModuleId>) -> BrainResult<BuildReadiness> {
        let module = self.resolve_module(module_id)?;
        let report = build_readiness(&self.graph, module)?;
        debug!(ready = report.ready, missing = report.missing.len(), "readiness built");
        Ok(report)
    }

    /// Draft a stake game from a spoken request.
    pub fn design_stake_game(
        &self,
        prompt: &str,
        module_id: Option<&ModuleId>,
    ) -> BrainResult<VoiceGameDesign> {
        let module = self.resolve_module(module_id)?;
        Ok(design_stake_game(prompt, module.map(|m| m.title.as_str())))
    }

    /// Draft a stake game and narrate how to build it.
    pub fn voice_design(
        &self,
        prompt: &str,
        module_id: Option<&ModuleId>,
        preferred_language: Option<&str>,
    ) -> BrainResult<VoiceDesign> {
        let design = self.design_stake_game(prompt, module_id)?;
        let narration = self.respond(
            &format!("Narrate how to build this: {}", design.summary),
            module_id,
            preferred_language,
            true,
        )?;
        info!(title = %design.title, players = design.player_names.len(), "voice design drafted");
        Ok(VoiceDesign { design, narration })
    }
}
