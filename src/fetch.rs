use anyhow::{bail, Context, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::ApiResponse;
use crate::config::Config;
use crate::models::TopicRecord;

/// The source formats heat numbers with separators and occasional unit
/// suffixes; strip everything that is not an ASCII digit before parsing.
/// An entry with no digits at all counts as heat 0.
pub fn parse_heat(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Fetch the trending board and map the first `limit` entries into records,
/// assigning `rank = position + 1` in response order.
pub async fn fetch_trending(client: &Client, cfg: &Config, limit: usize) -> Result<Vec<TopicRecord>> {
    let start = std::time::Instant::now();
    debug!("Fetching trending board - limit={}", limit);

    // Deliberately keep the key-bearing URL out of error messages.
    let resp = client
        .get(cfg.trending_url())
        .send()
        .await
        .context("Request to the trending-topics source failed")?
        .error_for_status()
        .context("HTTP error from the trending-topics source")?;

    let body: ApiResponse = resp
        .json()
        .await
        .context("Decoding trending-topics JSON")?;

    if body.code != 200 {
        bail!(
            "Trending-topics source returned code {}: {}",
            body.code,
            body.msg
        );
    }

    let list = body.result.map(|r| r.list).unwrap_or_default();
    let topics: Vec<TopicRecord> = list
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, item)| TopicRecord {
            rank: idx as u32 + 1,
            title: item.hotword.trim().to_string(),
            heat: parse_heat(&item.hotwordnum),
            tag: item.hottag.trim().to_string(),
        })
        .collect();

    let elapsed = start.elapsed();
    info!(
        "Trending fetch completed - duration={:.2}s, topics={}",
        elapsed.as_secs_f32(),
        topics.len()
    );

    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_parses_through_separators_and_suffixes() {
        assert_eq!(parse_heat("1,234,567"), 1_234_567);
        assert_eq!(parse_heat(" 987654 "), 987_654);
        assert_eq!(parse_heat("1234567热度"), 1_234_567);
    }

    #[test]
    fn unparseable_heat_defaults_to_zero() {
        assert_eq!(parse_heat(""), 0);
        assert_eq!(parse_heat("热"), 0);
        assert_eq!(parse_heat("n/a"), 0);
    }
}
