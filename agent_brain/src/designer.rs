//! Game Designer - drafts a stake game configuration from a spoken request.
//!
//! Extraction is a table of independent rules, each a pattern over the
//! lowercased prompt paired with a fallback, so an unparseable request still
//! yields a complete design:
//!
//! | Field | Keywords | Default |
//! |-------|----------|---------|
//! | entry fee | entry, bet, wager, buy-in | 25 |
//! | reward pool % | reward, payout, pool | 70 |
//! | slash % | slash, penalty, rake | 15 |
//! | rounds | round | 3 |

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Title used when no module is given.
pub const DEFAULT_GAME_TITLE: &str = "Stake Engine";

/// Seed used when the prompt has no alphanumeric content.
pub const DEFAULT_SEED: &str = "voice-seed";

/// Roster used when the prompt names nobody.
pub const DEFAULT_PLAYERS: [&str; 3] = ["Nova", "Rex", "Mira"];

/// Capitalized words that start requests rather than name players.
pub const NAME_STOPLIST: [&str; 4] = ["Build", "Design", "Voice", "Stake"];

/// Maximum number of players taken from a prompt.
pub const MAX_PLAYERS: usize = 4;

/// A numeric extraction rule: the first capture of `pattern`, or `default`.
pub struct NumericRule {
    pub field: &'static str,
    pattern: LazyLock<Regex>,
    pub default: f64,
}

impl NumericRule {
    /// Extract the value from an already lowercased prompt.
    pub fn extract(&self, lowered: &str) -> f64 {
        self.pattern
            .captures(lowered)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(self.default)
    }
}

pub static ENTRY_FEE_RULE: NumericRule = NumericRule {
    field: "entry fee",
    pattern: LazyLock::new(|| {
        Regex::new(r"(?:entry|bet|wager|buy[- ]in)[^0-9]*([0-9]+(?:\.[0-9]+)?)").expect("entry fee pattern")
    }),
    default: 25.0,
};

pub static REWARD_POOL_RULE: NumericRule = NumericRule {
    field: "reward pool percent",
    pattern: LazyLock::new(|| {
        Regex::new(r"([0-9]{1,3})%[^%]*?(?:reward|payout|pool)").expect("reward pool pattern")
    }),
    default: 70.0,
};

pub static SLASH_RULE: NumericRule = NumericRule {
    field: "slash percent",
    pattern: LazyLock::new(|| {
        Regex::new(r"([0-9]{1,3})%[^%]*?(?:slash|penalty|penalties|rake)").expect("slash pattern")
    }),
    default: 15.0,
};

pub static ROUNDS_RULE: NumericRule = NumericRule {
    field: "rounds",
    pattern: LazyLock::new(|| Regex::new(r"([0-9]{1,2})\s+round").expect("rounds pattern")),
    default: 3.0,
};

// ASCII word boundaries: "Renée" yields "Ren".
static PLAYER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[A-Z][a-z]{2,}(?-u:\b)").expect("player name pattern")
});

static SEED_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("seed separator pattern"));

/// A structured match configuration drafted from a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceGameDesign {
    pub title: String,
    pub summary: String,
    pub entry_fee: f64,
    pub reward_pool_percent: u32,
    pub slash_percent: u32,
    pub rounds: u32,
    pub rng_seed: String,
    pub player_names: Vec<String>,
    pub voice_over: Vec<String>,
    pub commands: Vec<String>,
}

/// Capitalized names from the prompt as written: stoplist removed, the first
/// [`MAX_PLAYERS`] matches kept, then duplicates collapsed. Falls back to the
/// default roster.
pub fn extract_player_names(prompt: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let candidates = PLAYER_NAME
        .find_iter(prompt)
        .map(|found| found.as_str())
        .filter(|name| !NAME_STOPLIST.contains(name))
        .take(MAX_PLAYERS);
    for name in candidates {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        DEFAULT_PLAYERS.iter().map(|n| n.to_string()).collect()
    } else {
        names
    }
}

/// Derive a deterministic seed: lowercase, hyphen-joined alphanumeric runs.
pub fn derive_seed(prompt: &str) -> String {
    let lowered = prompt.to_lowercase();
    let seed = SEED_SEPARATOR.replace_all(&lowered, "-");
    let seed = seed.trim_matches('-');
    if seed.is_empty() {
        DEFAULT_SEED.to_string()
    } else {
        seed.to_string()
    }
}

/// Draft a stake game from a free-text request. Never fails.
pub fn design_stake_game(prompt: &str, module_title: Option<&str>) -> VoiceGameDesign {
    let lowered = prompt.to_lowercase();

    let entry_fee = ENTRY_FEE_RULE.extract(&lowered);
    let reward_pool_percent = REWARD_POOL_RULE.extract(&lowered) as u32;
    let slash_percent = SLASH_RULE.extract(&lowered) as u32;
    let rounds = ROUNDS_RULE.extract(&lowered) as u32;
    let player_names = extract_player_names(prompt);
    let rng_seed = derive_seed(prompt);
    let module_title = module_title.unwrap_or(DEFAULT_GAME_TITLE);

    let voice_over = vec![
        "Opening match and locking stakes".to_string(),
        format!("Playing {} rounds with narrated rolls and scorekeeping", rounds),
        "Settling rewards, handling penalties, and unlocking balances".to_string(),
    ];

    let mut commands: Vec<String> = player_names
        .iter()
        .map(|name| format!("register-player --name {}", name))
        .collect();
    commands.push(format!(
        "open-match --entry {} --reward {} --slash {} --rounds {} --seed {}",
        entry_fee, reward_pool_percent, slash_percent, rounds, rng_seed
    ));
    commands.push("settle-match --id <matchId>".to_string());

    let summary = format!(
        "{}: voice designed match with {} players ({}), entry {}, reward {}% pool, {}% slash, {} rounds, seed {}.",
        module_title,
        player_names.len(),
        player_names.join(", "),
        entry_fee,
        reward_pool_percent,
        slash_percent,
        rounds,
        rng_seed
    );

    VoiceGameDesign {
        title: format!("{} voice-designed match", module_title),
        summary,
        entry_fee,
        reward_pool_percent,
        slash_percent,
        rounds,
        rng_seed,
        player_names,
        voice_over,
        commands,
    }
}
