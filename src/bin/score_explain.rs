//! Score Explain Binary
//!
//! Reads one campaign record (JSON) from a file argument or stdin and
//! prints the score breakdown rule by rule, the payout estimate, and
//! the tier. Operator tooling for tuning the rule tables: edit
//! config/radar.yml, re-run, compare.

use std::io::Read;

use anyhow::{Context, Result};

use quest_radar::classify::classify;
use quest_radar::config::load_config;
use quest_radar::payout::estimate_payout;
use quest_radar::scoring::{score_breakdown, RULESET_VERSION};
use quest_radar::types::Campaign;
use quest_radar::urls::quest_url;

fn main() -> Result<()> {
    let root = std::env::var("ROOT").unwrap_or_else(|_| ".".to_string());
    let config = load_config(&root)?;

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read campaign from {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read campaign from stdin")?;
            buf
        }
    };

    let campaign: Campaign =
        serde_json::from_str(&input).context("Failed to parse campaign JSON")?;

    let breakdown = score_breakdown(&campaign, &config.rules);
    let payout = estimate_payout(&campaign, breakdown.total, &config.rules);
    let tier = classify(breakdown.total, &config.cutoffs);

    println!("Campaign: {} ({})", campaign.name, campaign.id);
    println!(
        "Space: {}{}",
        campaign.space.name,
        if campaign.space.is_verified { " ✔️" } else { "" }
    );
    println!("Ruleset: {}", RULESET_VERSION);
    println!();
    for component in &breakdown.components {
        println!("  {:+3}  {}", component.delta, component.label);
    }
    println!();
    println!("Raw sum: {}", breakdown.raw);
    println!("Score: {} (floored at 0)", breakdown.total);
    println!("Payout chance: {}%", payout);
    println!("Tier: {} {}", tier.emoji(), tier);
    println!("URL: {}", quest_url(&campaign.space.name, &campaign.id));

    Ok(())
}
