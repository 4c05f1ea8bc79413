use anyhow::Result;

use quest_radar::config::load_config;
use quest_radar::galxe::GalxeClient;
use quest_radar::notify::send_alerts;
use quest_radar::ranker::{evaluate_campaigns, select_alerts, select_ranked};
use quest_radar::storage::save_run;

fn main() -> Result<()> {
    let root = std::env::var("ROOT").unwrap_or_else(|_| ".".to_string());

    let config = load_config(&root)?;

    // Fetch every active campaign, page by page
    let client = GalxeClient::new(config.fetch.clone())?;
    println!("Fetching active campaigns from Galxe...");
    let outcome = client.fetch_all();
    if let Some(err) = &outcome.error {
        eprintln!(
            "Fetch stopped early after {} page(s): {:#}",
            outcome.pages_fetched, err
        );
    }
    println!(
        "Retrieved {} campaigns over {} page(s)",
        outcome.campaigns.len(),
        outcome.pages_fetched
    );

    // Score, estimate, classify, then rank
    let scored = evaluate_campaigns(outcome.campaigns, &config.rules, &config.cutoffs);
    let retrieved = scored.len();
    let ranked = select_ranked(scored, &config.thresholds);
    println!("Ranked {} of {} campaigns", ranked.len(), retrieved);

    // Persist and report
    let artifacts = save_run(&root, &ranked)?;
    println!("Wrote {:?}", artifacts.json);
    println!("Wrote {:?}", artifacts.dated_json);
    println!("Wrote {:?}", artifacts.html);
    println!("Wrote {:?}", artifacts.markdown);

    // Push the must-not-miss subset; delivery is best-effort
    let alerts = select_alerts(&ranked, &config.thresholds);
    if alerts.is_empty() {
        println!("No quests crossed the alert thresholds.");
    } else {
        let delivered = send_alerts(&alerts);
        println!("Alerted on {} quest(s), {} delivered", alerts.len(), delivered);
    }

    println!(
        "Done: {} retrieved, {} ranked, {} alerted",
        retrieved,
        ranked.len(),
        alerts.len()
    );

    Ok(())
}
