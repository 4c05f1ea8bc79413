//! Tier Classification Module
//!
//! Maps a score to one of five ordinal tiers via descending cut points:
//! - Unmissable: score >= 10
//! - Excellent:  score >= 8
//! - Good:       score >= 6
//! - Mediocre:   score >= 4
//! - Poor:       everything below

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::types::Tier;

/// Score cut points for each tier, tunable from the config file.
/// Must be strictly descending for classification to stay monotonic.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TierCutoffs {
    pub unmissable: u32,
    pub excellent: u32,
    pub good: u32,
    pub mediocre: u32,
}

impl Default for TierCutoffs {
    fn default() -> Self {
        TierCutoffs {
            unmissable: 10,
            excellent: 8,
            good: 6,
            mediocre: 4,
        }
    }
}

impl TierCutoffs {
    pub fn validate(&self) -> Result<()> {
        if self.unmissable > self.excellent
            && self.excellent > self.good
            && self.good > self.mediocre
        {
            Ok(())
        } else {
            bail!(
                "tier cut points must be strictly descending, got {}/{}/{}/{}",
                self.unmissable,
                self.excellent,
                self.good,
                self.mediocre
            )
        }
    }
}

/// Classify a score into its tier.
pub fn classify(score: u32, cutoffs: &TierCutoffs) -> Tier {
    if score >= cutoffs.unmissable {
        Tier::Unmissable
    } else if score >= cutoffs.excellent {
        Tier::Excellent
    } else if score >= cutoffs.good {
        Tier::Good
    } else if score >= cutoffs.mediocre {
        Tier::Mediocre
    } else {
        Tier::Poor
    }
}
