use anyhow::Result;
use chrono::Utc;
use chrono_tz::Asia::Shanghai;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::analyzer::ModelAnalyzer;
use crate::config::Config;
use crate::fetch::fetch_trending;
use crate::llm::LlmClient;
use crate::models::{AnalyzedTopic, Engine, TopicRecord};
use crate::render::render_report;
use crate::rules::RuleAnalyzer;

/// Chooses between the model-backed and rule-based analyzers and guarantees
/// one analysis per input topic, in input order. The model capability is a
/// constructor input, not ambient state.
pub struct Orchestrator {
    rules: RuleAnalyzer,
    llm: Option<LlmClient>,
}

impl Orchestrator {
    pub fn new(rules: RuleAnalyzer, llm: Option<LlmClient>) -> Self {
        Self { rules, llm }
    }

    /// Never fails: an absent or broken model backend degrades silently to
    /// the rule engine. The returned engine is the one that actually
    /// produced the batch.
    pub async fn analyze(
        &self,
        topics: &[TopicRecord],
        prefer_model: bool,
    ) -> (Vec<AnalyzedTopic>, Engine) {
        match &self.llm {
            Some(client) if prefer_model => {
                info!("Analyzing batch with the generation service - topics={}", topics.len());
                ModelAnalyzer::new(client, &self.rules).analyze_all(topics).await
            }
            _ => {
                info!("Analyzing batch with the rule engine - topics={}", topics.len());
                (self.rules.analyze_batch(topics), Engine::RuleBased)
            }
        }
    }
}

/// The whole batch run: fetch, analyze, render, print, optionally persist.
/// Only configuration errors abort the process; a dry trending source ends
/// the run quietly with a status message and no report.
pub async fn run(cfg: &Config, limit: usize, use_model: bool, output: Option<&str>) -> Result<()> {
    let pipeline_start = std::time::Instant::now();
    info!("Batch run started - limit={}, use_model={}", limit, use_model);

    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .build()?;

    let topics = match fetch_trending(&client, cfg, limit).await {
        Ok(topics) => topics,
        Err(e) => {
            error!("Trending fetch failed: {e:#}");
            println!("No trending data available; analysis skipped.");
            return Ok(());
        }
    };
    if topics.is_empty() {
        warn!("Trending source returned an empty list");
        println!("No trending data available; analysis skipped.");
        return Ok(());
    }

    let llm = if use_model { LlmClient::from_config(cfg) } else { None };
    if use_model && llm.is_none() {
        warn!("No generation key configured; using the rule engine");
    }

    let orchestrator = Orchestrator::new(RuleAnalyzer::new(), llm);
    let (batch, engine) = orchestrator.analyze(&topics, use_model).await;

    // report timestamps follow the board's home timezone
    let generated_at = Utc::now()
        .with_timezone(&Shanghai)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let report = render_report(&batch, engine, &generated_at);

    println!("{report}");

    if let Some(path) = output {
        let path = std::path::Path::new(path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, report.as_bytes())?;
        info!("Report written - path={}", path.display());
    }

    let pipeline_elapsed = pipeline_start.elapsed();
    info!(
        "Batch run completed - duration={:.2}s, topics={}, engine={}",
        pipeline_elapsed.as_secs_f32(),
        batch.len(),
        engine.label()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(n: u32) -> Vec<TopicRecord> {
        (1..=n)
            .map(|i| TopicRecord {
                rank: i,
                title: format!("话题{i}"),
                heat: 10_000 * i as u64,
                tag: String::new(),
            })
            .collect()
    }

    #[tokio::test]
    async fn output_matches_input_length_and_order() {
        let orchestrator = Orchestrator::new(RuleAnalyzer::new(), None);
        let input = topics(7);
        let (batch, _) = orchestrator.analyze(&input, false).await;
        assert_eq!(batch.len(), input.len());
        for (got, want) in batch.iter().zip(&input) {
            assert_eq!(got.topic.rank, want.rank);
            assert_eq!(got.topic.title, want.title);
        }
    }

    #[tokio::test]
    async fn missing_model_backend_degrades_silently() {
        let orchestrator = Orchestrator::new(RuleAnalyzer::new(), None);
        let input = topics(3);
        // preferring the model without a configured client must not fail
        let (batch, engine) = orchestrator.analyze(&input, true).await;
        assert_eq!(engine, Engine::RuleBased);
        assert_eq!(batch.len(), input.len());
    }
}
