//! Radar Configuration
//!
//! Loads the optional operator config from config/radar.yml under the
//! working root. Every section falls back to its compiled-in default,
//! so a missing file means "run with defaults".

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::TierCutoffs;
use crate::galxe::FetchConfig;
use crate::ranker::SelectionThresholds;
use crate::scoring::ScoringRules;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RadarConfig {
    pub fetch: FetchConfig,
    pub rules: ScoringRules,
    pub cutoffs: TierCutoffs,
    pub thresholds: SelectionThresholds,
}

/// Load config/radar.yml from the root, or defaults when the file is
/// absent. Cut points are validated here so a bad override fails the
/// run before any network work.
pub fn load_config(root: &str) -> Result<RadarConfig> {
    let path = Path::new(root).join("config").join("radar.yml");

    let config = if path.exists() {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        serde_yaml::from_str(&content)
            .with_context(|| "Failed to parse radar.yml")?
    } else {
        RadarConfig::default()
    };

    config.cutoffs.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(config.fetch.page_size, 20);
        assert_eq!(config.fetch.max_pages, 10);
        assert_eq!(config.thresholds.min_score, 5);
        assert_eq!(config.cutoffs.unmissable, 10);
        assert!(config.rules.blacklisted_spaces.is_empty());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("radar.yml"),
            "thresholds:\n  min_score: 6\nrules:\n  blacklisted_spaces:\n    - Spam Space\n",
        )
        .unwrap();

        let config = load_config(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.thresholds.min_score, 6);
        assert_eq!(config.thresholds.alert_min_score, 9);
        assert_eq!(config.rules.blacklisted_spaces, vec!["Spam Space"]);
        assert_eq!(config.fetch.page_size, 20);
    }

    #[test]
    fn test_bad_cut_points_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("radar.yml"),
            "cutoffs:\n  unmissable: 4\n  excellent: 8\n  good: 6\n  mediocre: 4\n",
        )
        .unwrap();

        assert!(load_config(dir.path().to_str().unwrap()).is_err());
    }
}
