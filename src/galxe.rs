//! Galxe Campaign Client
//!
//! Fetches active campaigns from the Galxe GraphQL endpoint using
//! cursor pagination. A seen-cursor set guards against looping or
//! stale cursors, and any transport/decoding/API error ends the fetch
//! early with whatever was accumulated so far.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER};
use serde::{Deserialize, Serialize};

use crate::types::Campaign;

/// Default query endpoint.
pub const GALXE_API_URL: &str = "https://graphigo.prd.galaxy.eco/query";

/// Sentinel cursor requesting the first page.
const FIRST_PAGE_CURSOR: &str = "-1";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

const CAMPAIGN_LIST_QUERY: &str = r#"
query CampaignList($input: ListCampaignInput!) {
  campaigns(input: $input) {
    pageInfo {
      endCursor
      hasNextPage
    }
    list {
      id
      name
      description
      rewardName
      startTime
      endTime
      chain
      space {
        name
        isVerified
      }
    }
  }
}
"#;

/// Fetch settings, tunable from the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    pub endpoint: String,
    pub page_size: u32,
    pub max_pages: u32,
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            endpoint: GALXE_API_URL.to_string(),
            page_size: 20,
            max_pages: 10,
            timeout_secs: 20,
        }
    }
}

/// Result of one full fetch. `error` is set when the fetch stopped on a
/// failure; the campaigns gathered before the failure are still here.
#[derive(Debug)]
pub struct FetchOutcome {
    pub campaigns: Vec<Campaign>,
    pub pages_fetched: u32,
    pub error: Option<anyhow::Error>,
}

pub struct GalxeClient {
    http: Client,
    config: FetchConfig,
}

impl GalxeClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, HeaderValue::from_static("https://app.galxe.com"));
        headers.insert(REFERER, HeaderValue::from_static("https://app.galxe.com/"));
        headers.insert("platform", HeaderValue::from_static("web"));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers)
            .build()
            .context("Failed to build Galxe HTTP client")?;

        Ok(GalxeClient { http, config })
    }

    /// Fetch every active campaign, page by page, newest first.
    pub fn fetch_all(&self) -> FetchOutcome {
        drain_pages(|after| self.fetch_page(after), self.config.max_pages)
    }

    fn fetch_page(&self, after: &str) -> Result<CampaignPage> {
        let payload = serde_json::json!({
            "operationName": "CampaignList",
            "query": CAMPAIGN_LIST_QUERY,
            "variables": {
                "input": {
                    "listType": "Newest",
                    "statuses": ["Active"],
                    "first": self.config.page_size,
                    "after": after,
                    "isRecurring": false,
                }
            }
        });

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .with_context(|| format!("Campaign page request failed (after={})", after))?;

        let status = response.status();
        let body = response
            .text()
            .context("Failed to read campaign page response")?;

        if !status.is_success() {
            bail!("Campaign page request returned HTTP {}: {}", status, body);
        }

        let parsed: QueryResponse = serde_json::from_str(&body)
            .with_context(|| format!("Failed to decode campaign page response: {}", body))?;

        if parsed.errors.is_some() {
            bail!("Galxe API returned an error envelope: {}", body);
        }

        let data = parsed
            .data
            .with_context(|| format!("Campaign page response missing data: {}", body))?;

        Ok(data.campaigns)
    }
}

/// Pull pages until one of the stop conditions hits, in order: empty
/// page, repeated cursor (that page is discarded as a stale re-serve),
/// no next page, or the page ceiling. A fetch error stops the loop and
/// is surfaced alongside the partial result.
fn drain_pages<F>(mut fetch_page: F, max_pages: u32) -> FetchOutcome
where
    F: FnMut(&str) -> Result<CampaignPage>,
{
    let mut campaigns = Vec::new();
    let mut seen_cursors: HashSet<String> = HashSet::new();
    let mut after = FIRST_PAGE_CURSOR.to_string();
    let mut pages_fetched = 0;

    while pages_fetched < max_pages {
        let page = match fetch_page(&after) {
            Ok(page) => page,
            Err(err) => {
                return FetchOutcome {
                    campaigns,
                    pages_fetched,
                    error: Some(err),
                }
            }
        };
        pages_fetched += 1;

        if page.list.is_empty() {
            break;
        }

        let cursor = page.page_info.end_cursor.unwrap_or_default();
        if seen_cursors.contains(&cursor) {
            break;
        }

        campaigns.extend(page.list);

        if !page.page_info.has_next_page {
            break;
        }

        seen_cursors.insert(cursor.clone());
        after = cursor;
    }

    FetchOutcome {
        campaigns,
        pages_fetched,
        error: None,
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    data: Option<QueryData>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    campaigns: CampaignPage,
}

#[derive(Debug, Deserialize)]
struct CampaignPage {
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
    #[serde(default)]
    list: Vec<Campaign>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "endCursor", default)]
    end_cursor: Option<String>,
    #[serde(rename = "hasNextPage", default)]
    has_next_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Space;
    use anyhow::anyhow;

    fn make_campaign(id: &str) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: format!("Quest {}", id),
            description: None,
            reward_name: None,
            start_time: 0,
            end_time: 0,
            chain: "ETHEREUM".to_string(),
            space: Space {
                name: "Space".to_string(),
                is_verified: true,
            },
        }
    }

    fn page(ids: &[&str], cursor: &str, has_next: bool) -> CampaignPage {
        CampaignPage {
            page_info: PageInfo {
                end_cursor: Some(cursor.to_string()),
                has_next_page: has_next,
            },
            list: ids.iter().map(|id| make_campaign(id)).collect(),
        }
    }

    fn ids(campaigns: &[Campaign]) -> Vec<String> {
        campaigns.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_repeated_cursor_stops_and_discards_stale_page() {
        let outcome = drain_pages(
            |after| {
                Ok(match after {
                    "-1" => page(&["q1", "q2"], "A", true),
                    "A" => page(&["q3"], "B", true),
                    "B" => page(&["q4"], "C", true),
                    "C" => page(&["q3"], "B", true),
                    other => panic!("unexpected cursor {}", other),
                })
            },
            10,
        );

        assert_eq!(outcome.pages_fetched, 4);
        assert_eq!(ids(&outcome.campaigns), vec!["q1", "q2", "q3", "q4"]);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_page_ceiling_bounds_the_loop() {
        let mut n = 0;
        let outcome = drain_pages(
            |_after| {
                n += 1;
                let id = format!("q{}", n);
                let cursor = format!("c{}", n);
                Ok(page(&[id.as_str()], &cursor, true))
            },
            3,
        );

        assert_eq!(outcome.pages_fetched, 3);
        assert_eq!(outcome.campaigns.len(), 3);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_empty_page_stops() {
        let outcome = drain_pages(|_after| Ok(page(&[], "A", true)), 10);

        assert_eq!(outcome.pages_fetched, 1);
        assert!(outcome.campaigns.is_empty());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_last_page_is_kept_when_no_next() {
        let outcome = drain_pages(
            |after| {
                Ok(match after {
                    "-1" => page(&["q1"], "A", true),
                    "A" => page(&["q2"], "B", false),
                    other => panic!("unexpected cursor {}", other),
                })
            },
            10,
        );

        assert_eq!(outcome.pages_fetched, 2);
        assert_eq!(ids(&outcome.campaigns), vec!["q1", "q2"]);
    }

    #[test]
    fn test_fetch_error_returns_partial_result() {
        let outcome = drain_pages(
            |after| match after {
                "-1" => Ok(page(&["q1", "q2"], "A", true)),
                _ => Err(anyhow!("connection reset")),
            },
            10,
        );

        assert_eq!(outcome.pages_fetched, 1);
        assert_eq!(ids(&outcome.campaigns), vec!["q1", "q2"]);
        assert!(outcome.error.is_some());
    }

    #[test]
    fn test_decode_campaign_page_response() {
        let body = r#"{
            "data": {
                "campaigns": {
                    "pageInfo": {"endCursor": "WzE3NTQ5", "hasNextPage": true},
                    "list": [
                        {
                            "id": "GChdWUtXX3",
                            "name": "Bridge to win",
                            "description": null,
                            "rewardName": "200 USDT",
                            "startTime": 1754900000,
                            "endTime": 1756000000,
                            "chain": "ARBITRUM",
                            "space": {"name": "Quest Labs", "isVerified": true}
                        }
                    ]
                }
            }
        }"#;

        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.errors.is_none());

        let page = parsed.data.unwrap().campaigns;
        assert_eq!(page.page_info.end_cursor.as_deref(), Some("WzE3NTQ5"));
        assert!(page.page_info.has_next_page);
        assert_eq!(page.list.len(), 1);
        assert_eq!(page.list[0].reward_name.as_deref(), Some("200 USDT"));
        assert!(page.list[0].description.is_none());
    }

    #[test]
    fn test_decode_error_envelope() {
        let body = r#"{"errors": [{"message": "rate limited"}]}"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.errors.is_some());
        assert!(parsed.data.is_none());
    }
}
