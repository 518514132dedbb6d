use anyhow::{Context, Result};

pub const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Runtime configuration, resolved from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Access key for the trending-topics source. Required.
    pub tianapi_key: String,
    /// Access key for the text-generation service. Absent means the
    /// rule-based analyzer handles everything.
    pub llm_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let tianapi_key = std::env::var("TIANAPI_KEY")
            .context("TIANAPI_KEY is not set; the trending-topics source requires an access key")?;

        let llm_api_key = std::env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty());
        let llm_api_url =
            std::env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_LLM_API_URL.to_string());
        let llm_model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string());

        Ok(Self {
            tianapi_key,
            llm_api_key,
            llm_api_url,
            llm_model,
        })
    }

    pub fn trending_url(&self) -> String {
        format!(
            "https://apis.tianapi.com/weibohot/index?key={}",
            self.tianapi_key
        )
    }
}
