use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "rewardName", default)]
    pub reward_name: Option<String>,
    #[serde(rename = "startTime", default)]
    pub start_time: i64,
    #[serde(rename = "endTime", default)]
    pub end_time: i64,
    #[serde(default)]
    pub chain: String,
    pub space: Space,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Space {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

/// A campaign after one evaluation pass. Field order matches the
/// persisted JSON record; the tier is display-only and not serialized.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCampaign {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "rewardName")]
    pub reward_name: String,
    pub chain: String,
    pub space: Space,
    pub score: u32,
    #[serde(rename = "payoutChance")]
    pub payout_chance: u8,
    pub url: String,
    #[serde(skip)]
    pub tier: Tier,
}

/// Ordinal quality tiers, worst first so that derived ordering follows
/// score ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Poor,
    Mediocre,
    Good,
    Excellent,
    Unmissable,
}

impl Tier {
    pub fn emoji(&self) -> &'static str {
        match self {
            Tier::Unmissable => "🔥",
            Tier::Excellent => "⭐",
            Tier::Good => "✅",
            Tier::Mediocre => "⚠️",
            Tier::Poor => "❌",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Unmissable => "Unmissable",
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Mediocre => "Mediocre",
            Tier::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}
