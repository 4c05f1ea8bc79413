use std::env;

use anyhow::Result;

use crate::types::ScoredCampaign;

/// Format the push message for one alert-worthy quest.
pub fn format_alert(sc: &ScoredCampaign) -> String {
    let reward = if sc.reward_name.is_empty() {
        "-"
    } else {
        sc.reward_name.as_str()
    };
    format!(
        "{} {} | {}\nProject: {}{}\nChain: {} | Reward: {}\nScore: {} | Payout chance: {}%\n{}",
        sc.tier.emoji(),
        sc.tier,
        sc.name,
        sc.space.name,
        if sc.space.is_verified { " ✔️" } else { "" },
        sc.chain,
        reward,
        sc.score,
        sc.payout_chance,
        sc.url,
    )
}

/// Push one message per alert over every configured channel. Delivery
/// is best-effort: failures are logged and never fail the run. Returns
/// the number of messages that reached at least one channel.
pub fn send_alerts(alerts: &[&ScoredCampaign]) -> usize {
    let telegram_token = env::var("TELEGRAM_BOT_TOKEN").ok();
    let telegram_chat = env::var("TELEGRAM_CHAT_ID").ok();
    let slack_webhook = env::var("SLACK_WEBHOOK_URL").ok();
    let discord_webhook = env::var("DISCORD_WEBHOOK_URL").ok();

    let any_channel = (telegram_token.is_some() && telegram_chat.is_some())
        || slack_webhook.is_some()
        || discord_webhook.is_some();

    let mut delivered = 0;
    for alert in alerts {
        let msg = format_alert(alert);

        if !any_channel {
            println!("No notification channels configured. Alert:\n{}", msg);
            continue;
        }

        let mut sent = false;
        if let (Some(token), Some(chat_id)) = (telegram_token.as_deref(), telegram_chat.as_deref())
        {
            match send_telegram(token, chat_id, &msg) {
                Ok(()) => sent = true,
                Err(e) => eprintln!("Telegram delivery failed for {}: {}", alert.id, e),
            }
        }
        if let Some(webhook) = slack_webhook.as_deref() {
            match send_slack(webhook, &msg) {
                Ok(()) => sent = true,
                Err(e) => eprintln!("Slack delivery failed for {}: {}", alert.id, e),
            }
        }
        if let Some(webhook) = discord_webhook.as_deref() {
            match send_discord(webhook, &msg) {
                Ok(()) => sent = true,
                Err(e) => eprintln!("Discord delivery failed for {}: {}", alert.id, e),
            }
        }

        if sent {
            delivered += 1;
        }
    }

    delivered
}

fn send_telegram(token: &str, chat_id: &str, text: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let url = format!("https://api.telegram.org/bot{}/sendMessage", token);
    client
        .post(&url)
        .form(&[("chat_id", chat_id), ("text", text)])
        .send()?
        .error_for_status()?;
    Ok(())
}

fn send_slack(webhook_url: &str, text: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    client
        .post(webhook_url)
        .json(&serde_json::json!({"text": text}))
        .send()?
        .error_for_status()?;
    Ok(())
}

fn send_discord(webhook_url: &str, text: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    client
        .post(webhook_url)
        .json(&serde_json::json!({"content": text}))
        .send()?
        .error_for_status()?;
    Ok(())
}
