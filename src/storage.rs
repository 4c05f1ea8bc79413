use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::report::{generate_html_report, generate_markdown_report};
use crate::types::ScoredCampaign;

/// Paths of the artifacts written for one run.
#[derive(Debug)]
pub struct RunArtifacts {
    pub json: PathBuf,
    pub dated_json: PathBuf,
    pub html: PathBuf,
    pub markdown: PathBuf,
}

/// Write every artifact for the ranked set: the current JSON record
/// list, a dated copy, the HTML ranking page, and the markdown digest.
pub fn save_run(root: &str, ranked: &[ScoredCampaign]) -> Result<RunArtifacts> {
    let output_dir = PathBuf::from(root).join("output");
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

    let json = output_dir.join("quests.json");
    let dated_json = output_dir.join(format!("quests_{}.json", Utc::now().format("%Y-%m-%d")));
    let html = output_dir.join("quests_ranking.html");
    let markdown = output_dir.join("quests_report.md");

    let records = serde_json::to_string_pretty(ranked)
        .context("Failed to serialize ranked campaigns")?;
    fs::write(&json, &records)
        .with_context(|| format!("Failed to write {:?}", json))?;
    fs::write(&dated_json, &records)
        .with_context(|| format!("Failed to write {:?}", dated_json))?;

    fs::write(&html, generate_html_report(ranked))
        .with_context(|| format!("Failed to write {:?}", html))?;
    fs::write(&markdown, generate_markdown_report(ranked))
        .with_context(|| format!("Failed to write {:?}", markdown))?;

    Ok(RunArtifacts {
        json,
        dated_json,
        html,
        markdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Space, Tier};

    fn make_scored(id: &str) -> ScoredCampaign {
        ScoredCampaign {
            id: id.to_string(),
            name: "Bridge to win".to_string(),
            description: "Bridge once".to_string(),
            reward_name: "200 USDT".to_string(),
            chain: "ARBITRUM".to_string(),
            space: Space {
                name: "Quest Labs".to_string(),
                is_verified: true,
            },
            score: 11,
            payout_chance: 85,
            url: format!("https://app.galxe.com/quest/quest-labs/{}", id),
            tier: Tier::Unmissable,
        }
    }

    #[test]
    fn test_save_run_writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let ranked = vec![make_scored("GC1"), make_scored("GC2")];

        let artifacts = save_run(dir.path().to_str().unwrap(), &ranked).unwrap();

        assert!(artifacts.json.exists());
        assert!(artifacts.dated_json.exists());
        assert!(artifacts.html.exists());
        assert!(artifacts.markdown.exists());

        let records: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&artifacts.json).unwrap()).unwrap();
        let list = records.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["id"], "GC1");
        assert_eq!(list[0]["rewardName"], "200 USDT");
        assert_eq!(list[0]["payoutChance"], 85);
        assert_eq!(list[0]["space"]["isVerified"], true);
        // Tier is display-only and stays out of the record
        assert!(list[0].get("tier").is_none());
    }

    #[test]
    fn test_save_run_handles_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = save_run(dir.path().to_str().unwrap(), &[]).unwrap();

        let records: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&artifacts.json).unwrap()).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 0);
    }
}
