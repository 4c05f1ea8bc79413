use serde::{Deserialize, Serialize};

use crate::classify::{classify, TierCutoffs};
use crate::payout::estimate_payout;
use crate::scoring::{score_campaign, ScoringRules};
use crate::types::{Campaign, ScoredCampaign};
use crate::urls::quest_url;

/// Score thresholds for reporting and alerting, tunable from the
/// config file. All thresholds are inclusive minimums.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectionThresholds {
    pub min_score: u32,
    pub alert_min_score: u32,
    pub alert_min_payout: u8,
}

impl Default for SelectionThresholds {
    fn default() -> Self {
        SelectionThresholds {
            min_score: 5,
            alert_min_score: 9,
            alert_min_payout: 60,
        }
    }
}

/// Run scoring, payout estimation, classification, and URL derivation
/// over every retrieved campaign, preserving retrieval order.
pub fn evaluate_campaigns(
    campaigns: Vec<Campaign>,
    rules: &ScoringRules,
    cutoffs: &TierCutoffs,
) -> Vec<ScoredCampaign> {
    campaigns
        .into_iter()
        .map(|campaign| evaluate_campaign(campaign, rules, cutoffs))
        .collect()
}

pub fn evaluate_campaign(
    campaign: Campaign,
    rules: &ScoringRules,
    cutoffs: &TierCutoffs,
) -> ScoredCampaign {
    let score = score_campaign(&campaign, rules);
    let payout_chance = estimate_payout(&campaign, score, rules);
    let tier = classify(score, cutoffs);
    let url = quest_url(&campaign.space.name, &campaign.id);

    ScoredCampaign {
        id: campaign.id,
        name: campaign.name,
        description: campaign.description.unwrap_or_default(),
        reward_name: campaign.reward_name.unwrap_or_default(),
        chain: campaign.chain,
        space: campaign.space,
        score,
        payout_chance,
        url,
        tier,
    }
}

/// Keep the campaigns worth reporting and order them best first:
/// score descending, then payout chance descending. The sort is
/// stable, so ties keep their retrieval order.
pub fn select_ranked(
    scored: Vec<ScoredCampaign>,
    thresholds: &SelectionThresholds,
) -> Vec<ScoredCampaign> {
    let mut ranked: Vec<ScoredCampaign> = scored
        .into_iter()
        .filter(|sc| passes_filter(sc, thresholds))
        .collect();

    ranked.sort_by(|a, b| match b.score.cmp(&a.score) {
        std::cmp::Ordering::Equal => b.payout_chance.cmp(&a.payout_chance),
        other => other,
    });

    ranked
}

fn passes_filter(sc: &ScoredCampaign, thresholds: &SelectionThresholds) -> bool {
    sc.score >= thresholds.min_score && (sc.space.is_verified || !sc.reward_name.is_empty())
}

/// Pick the ranked campaigns worth pushing as alerts.
pub fn select_alerts<'a>(
    ranked: &'a [ScoredCampaign],
    thresholds: &SelectionThresholds,
) -> Vec<&'a ScoredCampaign> {
    ranked
        .iter()
        .filter(|sc| {
            sc.score >= thresholds.alert_min_score
                && sc.payout_chance >= thresholds.alert_min_payout
        })
        .collect()
}
