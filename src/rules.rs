use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use tracing::debug;

use crate::models::{AnalysisResult, AnalyzedTopic, Grade, TopicRecord};
use crate::templates::{IdeaTemplate, FALLBACK_TEMPLATES, TEMPLATES};

/// Fixed closing line for every template-engine result.
const TEMPLATE_INSIGHT: &str =
    "Produced by the deterministic idea-template engine using cross-domain fusion and inversion heuristics";

static MATCHERS: Lazy<Vec<(Regex, &'static IdeaTemplate)>> = Lazy::new(|| {
    TEMPLATES
        .iter()
        .map(|(pat, tpl)| {
            // patterns are compile-time constants, a bad one is a programmer error
            let re = Regex::new(&format!("(?i){pat}")).unwrap();
            (re, tpl)
        })
        .collect()
});

/// Keyword-template analyzer. Deterministic on every title a pattern
/// recognizes; unrecognized titles draw a generic skeleton through the
/// fallback selector, the one non-deterministic spot.
pub struct RuleAnalyzer {
    pick_fallback: Box<dyn Fn(usize) -> usize + Send + Sync>,
}

impl RuleAnalyzer {
    pub fn new() -> Self {
        Self {
            pick_fallback: Box::new(|n| rand::thread_rng().gen_range(0..n)),
        }
    }

    /// Substitute the fallback selector. The matched branch is unaffected.
    pub fn with_fallback_selector(
        pick: impl Fn(usize) -> usize + Send + Sync + 'static,
    ) -> Self {
        Self {
            pick_fallback: Box::new(pick),
        }
    }

    /// Analyze one topic. Never fails: a title that matches nothing still
    /// yields a well-formed result via the fallback set.
    pub fn analyze_one(&self, title: &str, heat: u64) -> AnalysisResult {
        // linear scan in declaration order; first match wins
        let matched = MATCHERS
            .iter()
            .find(|(re, _)| re.is_match(title))
            .map(|(_, tpl)| *tpl);

        let (tpl, product_name) = match matched {
            Some(tpl) => (tpl, tpl.product_name.to_string()),
            None => {
                let idx = (self.pick_fallback)(FALLBACK_TEMPLATES.len())
                    .min(FALLBACK_TEMPLATES.len() - 1);
                debug!("No pattern matched - title={}, fallback_index={}", title, idx);
                let tpl = &FALLBACK_TEMPLATES[idx];
                (tpl, tpl.product_name.replace("{}", &title_stub(title)))
            }
        };

        let score = heat_adjusted_score(tpl.base_score, heat);
        AnalysisResult {
            category: tpl.category.to_string(),
            sentiment: tpl.sentiment,
            product_name,
            core_functions: tpl.core_functions.to_string(),
            target_users: tpl.target_users.to_string(),
            monetization: tpl.monetization.to_string(),
            innovation: tpl.innovation.to_string(),
            competitive_barrier: tpl.competitive_barrier.to_string(),
            hidden_need: tpl.hidden_need.to_string(),
            creative_method: tpl.creative_method.to_string(),
            insight: TEMPLATE_INSIGHT.to_string(),
            score,
            grade: Grade::from_score(score),
        }
    }

    pub fn analyze_batch(&self, topics: &[TopicRecord]) -> Vec<AnalyzedTopic> {
        topics
            .iter()
            .map(|t| AnalyzedTopic {
                topic: t.clone(),
                analysis: self.analyze_one(&t.title, t.heat),
            })
            .collect()
    }
}

impl Default for RuleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Heat bonus tiers: above one million +8, above half a million +4,
/// clamped to 100.
pub fn heat_adjusted_score(base: u32, heat: u64) -> u32 {
    let bonus = if heat > 1_000_000 {
        8
    } else if heat > 500_000 {
        4
    } else {
        0
    };
    (base + bonus).min(100)
}

fn title_stub(title: &str) -> String {
    title.chars().take(4).collect()
}
