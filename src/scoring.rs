//! Quest Scoring Engine
//!
//! Converts one raw campaign into a non-negative desirability score via
//! an additive keyword/category heuristic:
//! - Trust: verified space bonus, unverified penalty
//! - Reward: tiered by reward-keyword strength, penalty when absent
//! - Chain: top/mid tier bonus, unlisted penalty
//! - Quest-type keyword density (capped)
//! - Social-farming, bait-phrase, and inflated-reward penalties
//! - Payout-signal adjustments (near-term, active-build, lottery, cosmetic)
//! - Per-space blacklist short-circuits to 0
//!
//! Scoring is a pure function of the campaign fields and the rule
//! tables. The final score is floored at 0.

use serde::{Deserialize, Serialize};

use crate::types::Campaign;

/// Identifier of the active heuristic rule table, stamped into reports.
pub const RULESET_VERSION: &str = "ruleset.v2";

/// Chains treated as top tier (+2).
pub const TOP_CHAINS: &[&str] = &["ETHEREUM", "ARBITRUM", "OPTIMISM", "BASE", "POLYGON"];

/// Chains treated as mid tier (+1); anything unlisted scores -1.
pub const MID_CHAINS: &[&str] = &["BSC", "AVALANCHE", "SOLANA"];

/// Reward keywords by strength; checked in order, strongest first.
pub const STRONG_REWARDS: &[&str] = &["usdt", "usdc", "eth", "btc"];
pub const MID_REWARDS: &[&str] = &["token", "airdrop"];
pub const WEAK_REWARDS: &[&str] = &["points", "nft", "whitelist"];

/// Quest-type keywords that indicate real value (+1 each, capped at +3).
pub const GOOD_TYPES: &[&str] = &[
    "airdrop", "testnet", "early", "whitelist", "incentive", "reward", "points",
];

/// Engagement-farming task keywords.
pub const SOCIAL_ONLY: &[&str] = &[
    "follow", "retweet", "like", "join discord", "invite", "comment",
];

/// Bait phrases (-2 each).
pub const SCAM_PHRASES: &[&str] = &[
    "guaranteed", "instant reward", "100% free",
    "limited now", "act now", "claim now", "hurry up",
];

/// Reward tokens that look too good to be true from an unverified space.
pub const INFLATED_REWARD_TOKENS: &[&str] = &["btc", "eth", "1000", "5000", "100000"];

/// Payout-signal groups; each group adjusts the score at most once.
pub const NEAR_TERM_SIGNALS: &[&str] = &["points", "season", "pre-tge", "early access"];
pub const ACTIVE_BUILD_SIGNALS: &[&str] = &["testnet", "beta", "incentive"];
pub const LOTTERY_SIGNALS: &[&str] = &["raffle", "lottery", "chance"];
pub const COSMETIC_SIGNALS: &[&str] = &["nft only", "commemorative"];

/// Keyword tables and blacklist driving the scoring engine. Defaults
/// come from the named constant sets above; any table can be overridden
/// from the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringRules {
    pub top_chains: Vec<String>,
    pub mid_chains: Vec<String>,
    pub strong_rewards: Vec<String>,
    pub mid_rewards: Vec<String>,
    pub weak_rewards: Vec<String>,
    pub good_types: Vec<String>,
    pub social_only: Vec<String>,
    pub scam_phrases: Vec<String>,
    pub inflated_reward_tokens: Vec<String>,
    pub near_term_signals: Vec<String>,
    pub active_build_signals: Vec<String>,
    pub lottery_signals: Vec<String>,
    pub cosmetic_signals: Vec<String>,
    pub blacklisted_spaces: Vec<String>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        ScoringRules {
            top_chains: owned(TOP_CHAINS),
            mid_chains: owned(MID_CHAINS),
            strong_rewards: owned(STRONG_REWARDS),
            mid_rewards: owned(MID_REWARDS),
            weak_rewards: owned(WEAK_REWARDS),
            good_types: owned(GOOD_TYPES),
            social_only: owned(SOCIAL_ONLY),
            scam_phrases: owned(SCAM_PHRASES),
            inflated_reward_tokens: owned(INFLATED_REWARD_TOKENS),
            near_term_signals: owned(NEAR_TERM_SIGNALS),
            active_build_signals: owned(ACTIVE_BUILD_SIGNALS),
            lottery_signals: owned(LOTTERY_SIGNALS),
            cosmetic_signals: owned(COSMETIC_SIGNALS),
            blacklisted_spaces: vec![],
        }
    }
}

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

/// Reward-keyword strength ladder, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardStrength {
    Strong,
    Mid,
    Weak,
    Unrecognized,
    Absent,
}

/// Classify a reward label by keyword strength. Strong keywords win
/// over mid, mid over weak.
pub fn reward_strength(reward: &str, rules: &ScoringRules) -> RewardStrength {
    if reward.is_empty() {
        return RewardStrength::Absent;
    }

    let reward = reward.to_lowercase();
    if contains_any(&reward, &rules.strong_rewards) {
        RewardStrength::Strong
    } else if contains_any(&reward, &rules.mid_rewards) {
        RewardStrength::Mid
    } else if contains_any(&reward, &rules.weak_rewards) {
        RewardStrength::Weak
    } else {
        RewardStrength::Unrecognized
    }
}

/// One additive contribution to the score.
#[derive(Debug, Clone)]
pub struct ScoreComponent {
    pub label: &'static str,
    pub delta: i32,
}

/// Full scoring result: every rule that fired, the raw sum, and the
/// floored total.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub raw: i32,
    pub total: u32,
}

/// Score one campaign against the rule tables.
pub fn score_campaign(campaign: &Campaign, rules: &ScoringRules) -> u32 {
    score_breakdown(campaign, rules).total
}

/// Score one campaign, keeping every contribution for diagnostics.
pub fn score_breakdown(campaign: &Campaign, rules: &ScoringRules) -> ScoreBreakdown {
    let mut components = Vec::new();
    let mut raw = 0i32;

    if rules
        .blacklisted_spaces
        .iter()
        .any(|s| s.eq_ignore_ascii_case(&campaign.space.name))
    {
        components.push(ScoreComponent { label: "blacklisted space", delta: 0 });
        return ScoreBreakdown { components, raw: 0, total: 0 };
    }

    let reward = campaign.reward_name.as_deref().unwrap_or("").to_lowercase();
    let text = searchable_text(campaign);
    let verified = campaign.space.is_verified;

    // === Trust ===
    if verified {
        add(&mut components, &mut raw, "verified space", 4);
    } else {
        add(&mut components, &mut raw, "unverified space", -1);
    }

    // === Reward presence and strength ===
    match reward_strength(&reward, rules) {
        RewardStrength::Strong => add(&mut components, &mut raw, "strong reward", 4),
        RewardStrength::Mid => add(&mut components, &mut raw, "mid-tier reward", 3),
        RewardStrength::Weak => add(&mut components, &mut raw, "weak reward", 1),
        RewardStrength::Unrecognized => {}
        RewardStrength::Absent => add(&mut components, &mut raw, "no reward", -2),
    }

    // === Chain tier ===
    if rules.top_chains.iter().any(|c| c.eq_ignore_ascii_case(&campaign.chain)) {
        add(&mut components, &mut raw, "top-tier chain", 2);
    } else if rules.mid_chains.iter().any(|c| c.eq_ignore_ascii_case(&campaign.chain)) {
        add(&mut components, &mut raw, "mid-tier chain", 1);
    } else {
        add(&mut components, &mut raw, "unlisted chain", -1);
    }

    // === Quest-type keyword density, capped at +3 ===
    let good_hits = count_matches(&text, &rules.good_types) as i32;
    if good_hits > 0 {
        add(&mut components, &mut raw, "quest-type keywords", good_hits.min(3));
    }

    // === Social farming ===
    let social_hits = count_matches(&text, &rules.social_only) as i32;
    if social_hits > 0 && reward.is_empty() {
        add(&mut components, &mut raw, "social-only tasks, no reward", -4);
    } else if social_hits > 0 {
        add(&mut components, &mut raw, "social-only keywords", -social_hits);
    }

    // === Bait phrases ===
    let scam_hits = count_matches(&text, &rules.scam_phrases) as i32;
    if scam_hits > 0 {
        add(&mut components, &mut raw, "bait phrases", -2 * scam_hits);
    }

    // === Too good to be true from an unverified space ===
    if !verified && contains_any(&reward, &rules.inflated_reward_tokens) {
        add(&mut components, &mut raw, "unverified inflated reward", -4);
    }

    // === Orphan: unverified with nothing on offer ===
    if !verified && reward.is_empty() {
        add(&mut components, &mut raw, "unverified with no reward", -3);
    }

    // === Payout signals, one adjustment per group ===
    if contains_any(&text, &rules.near_term_signals) {
        add(&mut components, &mut raw, "near-term payout signal", 3);
    }
    if contains_any(&text, &rules.active_build_signals) {
        add(&mut components, &mut raw, "active-build signal", 2);
    }
    if contains_any(&text, &rules.lottery_signals) {
        add(&mut components, &mut raw, "lottery signal", -2);
    }
    if contains_any(&text, &rules.cosmetic_signals) {
        add(&mut components, &mut raw, "cosmetic reward signal", -2);
    }

    ScoreBreakdown { components, raw, total: raw.max(0) as u32 }
}

fn add(components: &mut Vec<ScoreComponent>, raw: &mut i32, label: &'static str, delta: i32) {
    components.push(ScoreComponent { label, delta });
    *raw += delta;
}

/// Lowercase concatenation of name + description + reward label.
pub fn searchable_text(campaign: &Campaign) -> String {
    format!(
        "{} {} {}",
        campaign.name.to_lowercase(),
        campaign.description.as_deref().unwrap_or("").to_lowercase(),
        campaign.reward_name.as_deref().unwrap_or("").to_lowercase(),
    )
}

/// Check if text contains any of the patterns.
pub(crate) fn contains_any(text: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| text.contains(p.as_str()))
}

/// Count distinct patterns present in the text.
fn count_matches(text: &str, patterns: &[String]) -> usize {
    patterns.iter().filter(|p| text.contains(p.as_str())).count()
}
