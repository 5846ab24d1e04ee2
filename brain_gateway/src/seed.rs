//! The Stake Engine demo brain.
//!
//! The same data can be loaded straight into a graph at start-up or pushed
//! through an [`AdminClient`] against a running gateway.

use brain_registry::{
    CommandDraft, EntityGraph, KnowledgeDraft, LanguageProfile, Modality, ModuleId, Proficiency,
    RegistryError,
};
use tracing::info;

use crate::client::{AdminClient, ClientResult};

pub const DEMO_MODULE_TITLE: &str = "Stake Engine";
pub const DEMO_MODULE_DESCRIPTION: &str =
    "End-to-end staking gameplay brain with admin controls and player UX hooks.";

pub fn demo_languages() -> Vec<LanguageProfile> {
    vec![
        LanguageProfile::new("en", "English", Proficiency::Native)
            .with_modality(Modality::Voice)
            .with_focus_area("stake engine orchestration")
            .with_focus_area("gameplay narration"),
        LanguageProfile::new("ts", "TypeScript", Proficiency::Fluent)
            .with_focus_area("SDK code")
            .with_focus_area("Node runtimes")
            .with_focus_area("tooling"),
    ]
}

pub fn demo_knowledge() -> Vec<KnowledgeDraft> {
    vec![
        KnowledgeDraft::new(
            "player onboarding",
            "Register players, top up balances, and audit every action to a player-centric ledger.",
        )
        .with_tags(["registration", "ledger", "balances"])
        .with_priority(3),
        KnowledgeDraft::new(
            "match flow",
            "Create matches with entry fees, deterministic RNG seeds, and multi-round scoring before settlement.",
        )
        .with_tags(["matches", "rng", "rounds"])
        .with_priority(4),
        KnowledgeDraft::new(
            "payouts",
            "Winners reclaim stakes plus rewards, losers unlock stakes with optional slashing for penalties.",
        )
        .with_tags(["payouts", "slashing", "rewards"])
        .with_priority(2),
        KnowledgeDraft::new(
            "voice",
            "Voice mode narrates decisions and exposes intents while keeping JSON APIs unchanged for UI clients.",
        )
        .with_tags(["voice", "ux", "modality"])
        .with_priority(1),
    ]
}

pub fn demo_commands() -> Vec<CommandDraft> {
    vec![
        CommandDraft::new("register-player", "register-player --name <playerName>")
            .with_description("Create a new player with an initial ledger entry.")
            .with_example("register-player --name Ava"),
        CommandDraft::new(
            "open-match",
            "open-match --entry 25 --reward 70 --slash 20 --rounds 5 --seed demo",
        )
        .with_description("Start a pending match with entry fee, reward pool %, slash %, and RNG seed.")
        .with_example("open-match --entry 10 --reward 80 --slash 10 --rounds 3 --seed training"),
        CommandDraft::new("settle-match", "settle-match --id <matchId>")
            .with_description("Lock in scores, distribute rewards, and release locked balances.")
            .with_example("settle-match --id match-123"),
    ]
}

/// Load the demo into a graph and return the module id.
pub fn seed_stake_engine(graph: &mut EntityGraph) -> Result<ModuleId, RegistryError> {
    let codes: Vec<String> = demo_languages()
        .into_iter()
        .map(|profile| graph.register_language(profile).map(|p| p.code))
        .collect::<Result<_, _>>()?;

    let module = graph.create_module(DEMO_MODULE_TITLE, DEMO_MODULE_DESCRIPTION)?;
    for code in &codes {
        graph.link_language(&module.id, code)?;
    }
    for draft in demo_knowledge() {
        graph.add_knowledge(&module.id, draft)?;
    }
    for draft in demo_commands() {
        graph.add_command(&module.id, draft)?;
    }

    info!(module_id = %module.id, "stake engine demo loaded");
    Ok(module.id)
}

/// Push the demo through the admin routes of a running gateway.
pub async fn seed_via_admin(admin: &AdminClient) -> ClientResult<ModuleId> {
    let mut codes = Vec::new();
    for profile in demo_languages() {
        codes.push(admin.add_language(&profile).await?.code);
    }

    let module = admin
        .create_module(DEMO_MODULE_TITLE, DEMO_MODULE_DESCRIPTION)
        .await?;
    for code in &codes {
        admin.connect_language(&module.id, code).await?;
    }
    for draft in demo_knowledge() {
        admin.add_knowledge(&module.id, draft).await?;
    }
    for draft in demo_commands() {
        admin.add_command(&module.id, draft).await?;
    }

    info!(module_id = %module.id, "stake engine demo pushed");
    Ok(module.id)
}
