use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::Config;

/// Thin client for an OpenAI-compatible chat-completions endpoint.
/// One request per call, bounded timeout, no retries.
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    /// `None` when no generation key is configured; callers treat that as
    /// "rule-based only".
    pub fn from_config(cfg: &Config) -> Option<Self> {
        let api_key = cfg.llm_api_key.clone()?;
        Some(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_url: cfg.llm_api_url.clone(),
            api_key,
            model: cfg.llm_model.clone(),
        })
    }

    pub async fn chat(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "stream": false
        });

        let url = format!("{}/chat/completions", self.api_url.trim_end_matches('/'));

        debug!("LLM call starting - prompt_length={} chars", prompt.len());
        let start = std::time::Instant::now();

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow!("LLM connection failed: {e}"))?;

        if !res.status().is_success() {
            let status = res.status();
            let error_text = res.text().await.unwrap_or_default();
            warn!("LLM API error {} - {}", status, error_text);
            return Err(anyhow!("LLM API error {status}"));
        }

        let response_json: serde_json::Value = res.json().await?;
        let content = response_json["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("unexpected LLM response shape"))?;

        let elapsed = start.elapsed();
        info!(
            "LLM call completed - duration={:.2}s, response_length={} chars",
            elapsed.as_secs_f32(),
            content.len()
        );

        Ok(content)
    }
}
