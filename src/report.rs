use chrono::Utc;

use crate::scoring::RULESET_VERSION;
use crate::types::{ScoredCampaign, Tier};

/// Render the ranked campaigns as a dark-theme HTML table page.
pub fn generate_html_report(ranked: &[ScoredCampaign]) -> String {
    let mut rows = String::new();
    for sc in ranked {
        let reward = if sc.reward_name.is_empty() {
            "-".to_string()
        } else {
            escape_html(&sc.reward_name)
        };
        let verified = if sc.space.is_verified { "✔️" } else { "❌" };

        rows.push_str(&format!(
            "<tr>\n\
             <td>{}</td>\n\
             <td>{} {}</td>\n\
             <td><a href=\"{}\">{}</a></td>\n\
             <td>{}</td>\n\
             <td>{}</td>\n\
             <td>{}</td>\n\
             <td>{}%</td>\n\
             <td>{}</td>\n\
             </tr>\n",
            sc.score,
            sc.tier.emoji(),
            sc.tier,
            sc.url,
            escape_html(&sc.name),
            escape_html(&sc.space.name),
            escape_html(&sc.chain),
            reward,
            sc.payout_chance,
            verified,
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>Galxe Quest Ranking</title>\n\
         <style>\n\
         body {{ font-family: Arial; background: #0d1117; color: #c9d1d9; padding: 20px; }}\n\
         table {{ border-collapse: collapse; width: 100%; }}\n\
         th, td {{ border: 1px solid #30363d; padding: 8px; text-align: left; }}\n\
         th {{ background: #161b22; }}\n\
         tr:nth-child(even) {{ background: #161b22; }}\n\
         h1 {{ color: #58a6ff; }}\n\
         a {{ color: #58a6ff; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>📊 Galxe Quest Ranking</h1>\n\
         <p>Generated: {}</p>\n\
         <table>\n\
         <tr>\n\
         <th>Score</th>\n\
         <th>Classification</th>\n\
         <th>Quest</th>\n\
         <th>Project</th>\n\
         <th>Chain</th>\n\
         <th>Reward</th>\n\
         <th>Payout</th>\n\
         <th>Verified</th>\n\
         </tr>\n\
         {}\
         </table>\n\
         </body>\n\
         </html>\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC"),
        rows,
    )
}

/// Generate the markdown digest: per-tier counts plus the top entries.
pub fn generate_markdown_report(ranked: &[ScoredCampaign]) -> String {
    let mut report = String::from("# QuestRadar Report\n\n");
    report.push_str(&format!(
        "Generated: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));
    report.push_str(&format!("Ruleset: {}\n\n", RULESET_VERSION));

    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Total ranked:** {}\n", ranked.len()));
    for tier in [
        Tier::Unmissable,
        Tier::Excellent,
        Tier::Good,
        Tier::Mediocre,
        Tier::Poor,
    ] {
        let count = ranked.iter().filter(|sc| sc.tier == tier).count();
        if count > 0 {
            report.push_str(&format!("- **{}:** {}\n", tier, count));
        }
    }
    report.push_str("\n---\n\n");

    report.push_str("## Top Quests\n\n");
    if ranked.is_empty() {
        report.push_str("*No quests passed the filter this run*\n");
        return report;
    }

    report.push_str("| # | Quest | Project | Chain | Reward | Score | Payout | Tier |\n");
    report.push_str("|---|-------|---------|-------|--------|-------|--------|------|\n");

    for (i, sc) in ranked.iter().take(20).enumerate() {
        let reward = if sc.reward_name.is_empty() {
            "-".to_string()
        } else {
            truncate_str(&sc.reward_name, 20)
        };

        report.push_str(&format!(
            "| {} | [{}]({}) | {} | {} | {} | {} | {}% | {} |\n",
            i + 1,
            truncate_str(&sc.name, 40),
            sc.url,
            truncate_str(&sc.space.name, 24),
            sc.chain,
            reward,
            sc.score,
            sc.payout_chance,
            sc.tier,
        ));
    }

    if ranked.len() > 20 {
        report.push_str(&format!("\n*... and {} more*\n", ranked.len() - 20));
    }

    report
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Helper to truncate strings for table display (Unicode-safe)
fn truncate_str(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Space;

    fn make_scored(name: &str, reward: &str, verified: bool) -> ScoredCampaign {
        ScoredCampaign {
            id: "GC1".to_string(),
            name: name.to_string(),
            description: String::new(),
            reward_name: reward.to_string(),
            chain: "BASE".to_string(),
            space: Space {
                name: "Quest Labs".to_string(),
                is_verified: verified,
            },
            score: 11,
            payout_chance: 85,
            url: "https://app.galxe.com/quest/quest-labs/GC1".to_string(),
            tier: Tier::Unmissable,
        }
    }

    #[test]
    fn test_html_report_escapes_and_links() {
        let ranked = vec![make_scored("Swap & Earn <fast>", "500 USDC", true)];
        let html = generate_html_report(&ranked);

        assert!(html.contains("Swap &amp; Earn &lt;fast&gt;"));
        assert!(html.contains("href=\"https://app.galxe.com/quest/quest-labs/GC1\""));
        assert!(html.contains("<td>85%</td>"));
        assert!(html.contains("✔️"));
    }

    #[test]
    fn test_html_report_dashes_missing_reward() {
        let ranked = vec![make_scored("Bridge", "", false)];
        let html = generate_html_report(&ranked);

        assert!(html.contains("<td>-</td>"));
        assert!(html.contains("❌"));
    }

    #[test]
    fn test_markdown_report_summarizes_tiers() {
        let ranked = vec![
            make_scored("One", "USDC", true),
            make_scored("Two", "USDC", true),
        ];
        let md = generate_markdown_report(&ranked);

        assert!(md.contains("- **Total ranked:** 2"));
        assert!(md.contains("- **Unmissable:** 2"));
        assert!(md.contains("[One](https://app.galxe.com/quest/quest-labs/GC1)"));
        assert!(md.contains(RULESET_VERSION));
    }

    #[test]
    fn test_markdown_report_handles_empty_run() {
        let md = generate_markdown_report(&[]);
        assert!(md.contains("- **Total ranked:** 0"));
        assert!(md.contains("*No quests passed the filter this run*"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("this is a very long string", 10), "this is...");
    }
}
