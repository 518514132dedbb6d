use serde::Deserialize;
use tracing::{info, warn};

use crate::llm::LlmClient;
use crate::models::{AnalysisResult, AnalyzedTopic, Engine, Grade, Sentiment, TopicRecord};
use crate::prompts::batch_analysis_prompt;
use crate::rules::RuleAnalyzer;

/// Recognized fields of one model-produced analysis object. Every field is
/// optional and carries its default in [`ModelIdea::into_result`]; adding or
/// removing a recognized field is a change here, not in control flow.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelIdea {
    category: Option<String>,
    sentiment: Option<String>,
    product_name: Option<String>,
    core_functions: Option<String>,
    target_users: Option<String>,
    monetization: Option<String>,
    innovation: Option<String>,
    competitive_barrier: Option<String>,
    hidden_need: Option<String>,
    creative_method: Option<String>,
    insight: Option<String>,
    score: Option<i64>,
    grade: Option<String>,
}

impl ModelIdea {
    fn into_result(self, title: &str) -> AnalysisResult {
        let score = self.score.unwrap_or(75).clamp(0, 100) as u32;
        AnalysisResult {
            category: self.category.unwrap_or_else(|| "Unclassified".to_string()),
            sentiment: self
                .sentiment
                .as_deref()
                .and_then(Sentiment::parse)
                .unwrap_or(Sentiment::Neutral),
            product_name: self
                .product_name
                .unwrap_or_else(|| format!("{title}-idea")),
            core_functions: self
                .core_functions
                .unwrap_or_else(|| "to be analyzed".to_string()),
            target_users: self
                .target_users
                .unwrap_or_else(|| "general audience".to_string()),
            monetization: self
                .monetization
                .unwrap_or_else(|| "to be evaluated".to_string()),
            innovation: self.innovation.unwrap_or_default(),
            competitive_barrier: self.competitive_barrier.unwrap_or_default(),
            hidden_need: self.hidden_need.unwrap_or_default(),
            creative_method: self.creative_method.unwrap_or_default(),
            insight: self.insight.unwrap_or_default(),
            score,
            grade: self
                .grade
                .as_deref()
                .and_then(Grade::parse)
                .unwrap_or(Grade::Good),
        }
    }
}

/// Locate the first bracketed array in free-form model output; the response
/// frequently wraps the JSON in explanatory prose.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Pure response-processing layer. `None` means the response is unusable and
/// the whole batch belongs to the rule engine; `Some` maps each parsed
/// element onto its topic and backfills any missing tail per topic.
pub fn apply_model_response(
    topics: &[TopicRecord],
    raw: &str,
    rules: &RuleAnalyzer,
) -> Option<Vec<AnalyzedTopic>> {
    let json = extract_json_array(raw)?;
    let ideas: Vec<ModelIdea> = serde_json::from_str(json).ok()?;

    let short = topics.len().saturating_sub(ideas.len());
    if short > 0 {
        warn!(
            "Model returned {} of {} analyses; backfilling the tail with the rule engine",
            ideas.len(),
            topics.len()
        );
    }

    let batch = topics
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let analysis = match ideas.get(i) {
                Some(idea) => idea.clone().into_result(&topic.title),
                None => rules.analyze_one(&topic.title, topic.heat),
            };
            AnalyzedTopic {
                topic: topic.clone(),
                analysis,
            }
        })
        .collect();
    Some(batch)
}

/// Batch analysis through the text-generation service. Infallible to the
/// caller: every failure mode degrades the entire batch to the rule engine,
/// and the returned engine says which path actually produced the output.
pub struct ModelAnalyzer<'a> {
    client: &'a LlmClient,
    rules: &'a RuleAnalyzer,
}

impl<'a> ModelAnalyzer<'a> {
    pub fn new(client: &'a LlmClient, rules: &'a RuleAnalyzer) -> Self {
        Self { client, rules }
    }

    pub async fn analyze_all(&self, topics: &[TopicRecord]) -> (Vec<AnalyzedTopic>, Engine) {
        let prompt = batch_analysis_prompt(topics);
        match self.client.chat(&prompt).await {
            Ok(text) => match apply_model_response(topics, &text, self.rules) {
                Some(batch) => {
                    info!("Model-backed analysis completed - topics={}", batch.len());
                    (batch, Engine::ModelBacked)
                }
                None => {
                    warn!("No parsable JSON array in model response; falling back to the rule engine");
                    (self.rules.analyze_batch(topics), Engine::RuleBased)
                }
            },
            Err(e) => {
                warn!("Model call failed ({e}); falling back to the rule engine");
                (self.rules.analyze_batch(topics), Engine::RuleBased)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(rank: u32, title: &str, heat: u64) -> TopicRecord {
        TopicRecord {
            rank,
            title: title.to_string(),
            heat,
            tag: String::new(),
        }
    }

    #[test]
    fn extracts_array_surrounded_by_prose() {
        let raw = "Here is the analysis you asked for:\n[{\"score\": 90}]\nHope it helps!";
        assert_eq!(extract_json_array(raw), Some("[{\"score\": 90}]"));
    }

    #[test]
    fn no_bracketed_array_yields_none() {
        assert_eq!(extract_json_array("no json here"), None);
        assert_eq!(extract_json_array("closing ] before opening ["), None);
    }

    #[test]
    fn unusable_response_means_rule_engine_for_the_whole_batch() {
        let rules = RuleAnalyzer::new();
        let topics = vec![topic(1, "AI产品发布", 0), topic(2, "世界杯决赛", 0)];

        assert!(apply_model_response(&topics, "sorry, I cannot help", &rules).is_none());
        assert!(apply_model_response(&topics, "[not json at all]", &rules).is_none());

        // both titles hit the pure matched branch, so the fallback batch is
        // reproducible and must mirror the rule engine exactly
        let fallback = rules.analyze_batch(&topics);
        assert_eq!(fallback.len(), topics.len());
        assert_eq!(fallback[0].analysis, rules.analyze_one("AI产品发布", 0));
        assert_eq!(fallback[1].analysis, rules.analyze_one("世界杯决赛", 0));
    }

    #[test]
    fn short_array_backfills_exactly_the_tail() {
        let rules = RuleAnalyzer::new();
        let topics = vec![topic(1, "AI产品发布", 0), topic(2, "世界杯决赛", 0)];
        let raw = r#"[{"product_name": "Nebula Tutor", "score": 91, "grade": "exceptional"}]"#;

        let batch = apply_model_response(&topics, raw, &rules).unwrap();
        assert_eq!(batch.len(), 2);

        // leading index keeps the parsed model fields
        assert_eq!(batch[0].analysis.product_name, "Nebula Tutor");
        assert_eq!(batch[0].analysis.score, 91);
        assert_eq!(batch[0].analysis.grade, Grade::Exceptional);

        // trailing index comes from the rule engine (matched branch, pure)
        assert_eq!(batch[1].analysis, rules.analyze_one("世界杯决赛", 0));
    }

    #[test]
    fn missing_fields_take_documented_defaults() {
        let rules = RuleAnalyzer::new();
        let topics = vec![topic(1, "神秘话题", 0)];
        let batch = apply_model_response(&topics, "[{}]", &rules).unwrap();

        let a = &batch[0].analysis;
        assert_eq!(a.product_name, "神秘话题-idea");
        assert_eq!(a.category, "Unclassified");
        assert_eq!(a.sentiment, Sentiment::Neutral);
        assert_eq!(a.core_functions, "to be analyzed");
        assert_eq!(a.target_users, "general audience");
        assert_eq!(a.monetization, "to be evaluated");
        assert_eq!(a.score, 75);
        assert_eq!(a.grade, Grade::Good);
        assert!(a.insight.is_empty());
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let rules = RuleAnalyzer::new();
        let topics = vec![topic(1, "AI产品发布", 0)];

        let high = apply_model_response(&topics, r#"[{"score": 150}]"#, &rules).unwrap();
        assert_eq!(high[0].analysis.score, 100);

        let low = apply_model_response(&topics, r#"[{"score": -5}]"#, &rules).unwrap();
        assert_eq!(low[0].analysis.score, 0);
    }

    #[test]
    fn unrecognized_grade_and_sentiment_fall_back_to_defaults() {
        let rules = RuleAnalyzer::new();
        let topics = vec![topic(1, "AI产品发布", 0)];
        let raw = r#"[{"grade": "stellar", "sentiment": "ambivalent"}]"#;
        let batch = apply_model_response(&topics, raw, &rules).unwrap();
        assert_eq!(batch[0].analysis.grade, Grade::Good);
        assert_eq!(batch[0].analysis.sentiment, Sentiment::Neutral);
    }
}
