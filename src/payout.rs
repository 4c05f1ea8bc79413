//! Payout Estimation Module
//!
//! Estimates the probability that a quest pays out real value, derived
//! from the score plus trust/reward/text signals.

use crate::scoring::{contains_any, reward_strength, searchable_text, RewardStrength, ScoringRules};
use crate::types::Campaign;

/// Percent contributed per score point.
const SCORE_WEIGHT: u32 = 7;
/// Cap on the score-derived base.
const BASE_CAP: u32 = 70;
const VERIFIED_BONUS: i32 = 10;
const NEAR_TERM_BONUS: i32 = 10;
const LOTTERY_PENALTY: i32 = 15;
/// Estimates never leave the [MIN_PAYOUT, MAX_PAYOUT] band.
const MIN_PAYOUT: i32 = 5;
const MAX_PAYOUT: i32 = 95;

/// Estimate the payout probability percent for a campaign with the
/// given score. Monotonic non-decreasing in score for fixed campaign
/// fields; always within [5, 95].
pub fn estimate_payout(campaign: &Campaign, score: u32, rules: &ScoringRules) -> u8 {
    let mut pct = score.saturating_mul(SCORE_WEIGHT).min(BASE_CAP) as i32;

    if campaign.space.is_verified {
        pct += VERIFIED_BONUS;
    }

    let reward = campaign.reward_name.as_deref().unwrap_or("");
    pct += match reward_strength(reward, rules) {
        RewardStrength::Strong => 10,
        RewardStrength::Mid => 6,
        RewardStrength::Weak => 3,
        RewardStrength::Unrecognized | RewardStrength::Absent => 0,
    };

    let text = searchable_text(campaign);
    if contains_any(&text, &rules.near_term_signals) {
        pct += NEAR_TERM_BONUS;
    }
    if contains_any(&text, &rules.lottery_signals) {
        pct -= LOTTERY_PENALTY;
    }

    pct.clamp(MIN_PAYOUT, MAX_PAYOUT) as u8
}
