use serde::{Deserialize, Serialize};

/// One entry of the ranked trending board, as ingested. Immutable after
/// construction; `rank` is 1-based and follows response order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub rank: u32,
    pub title: String,
    pub heat: u64,
    pub tag: String, // empty when the source carries no label
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

/// Discrete quality label derived from a numeric score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Weak,
    Fair,
    Good,
    Excellent,
    Exceptional,
}

impl Grade {
    /// Display order for aggregate tables: best first.
    pub const ALL: [Grade; 5] = [
        Grade::Exceptional,
        Grade::Excellent,
        Grade::Good,
        Grade::Fair,
        Grade::Weak,
    ];

    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Grade::Exceptional
        } else if score >= 80 {
            Grade::Excellent
        } else if score >= 70 {
            Grade::Good
        } else if score >= 60 {
            Grade::Fair
        } else {
            Grade::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Exceptional => "exceptional",
            Grade::Excellent => "excellent",
            Grade::Good => "good",
            Grade::Fair => "fair",
            Grade::Weak => "weak",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "exceptional" => Some(Grade::Exceptional),
            "excellent" => Some(Grade::Excellent),
            "good" => Some(Grade::Good),
            "fair" => Some(Grade::Fair),
            "weak" => Some(Grade::Weak),
            _ => None,
        }
    }
}

/// Structured product-idea analysis attached 1:1 to a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: String,
    pub sentiment: Sentiment,
    pub product_name: String,
    pub core_functions: String,
    pub target_users: String,
    pub monetization: String,
    pub innovation: String,
    pub competitive_barrier: String,
    pub hidden_need: String,
    pub creative_method: String,
    pub insight: String,
    pub score: u32, // [0, 100]
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedTopic {
    pub topic: TopicRecord,
    pub analysis: AnalysisResult,
}

/// Which analyzer actually produced a batch. Reported in the document
/// header, so a wholesale fallback is visible there rather than silently
/// labeled as model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    ModelBacked,
    RuleBased,
}

impl Engine {
    pub fn label(self) -> &'static str {
        match self {
            Engine::ModelBacked => "model-backed (LLM)",
            Engine::RuleBased => "rule-based template engine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds_are_a_fixed_step_function() {
        assert_eq!(Grade::from_score(100), Grade::Exceptional);
        assert_eq!(Grade::from_score(90), Grade::Exceptional);
        assert_eq!(Grade::from_score(89), Grade::Excellent);
        assert_eq!(Grade::from_score(80), Grade::Excellent);
        assert_eq!(Grade::from_score(79), Grade::Good);
        assert_eq!(Grade::from_score(70), Grade::Good);
        assert_eq!(Grade::from_score(69), Grade::Fair);
        assert_eq!(Grade::from_score(60), Grade::Fair);
        assert_eq!(Grade::from_score(59), Grade::Weak);
        assert_eq!(Grade::from_score(0), Grade::Weak);
    }

    #[test]
    fn grade_ordering_follows_score_ordering() {
        assert!(Grade::Exceptional > Grade::Excellent);
        assert!(Grade::Excellent > Grade::Good);
        assert!(Grade::Good > Grade::Fair);
        assert!(Grade::Fair > Grade::Weak);
    }

    #[test]
    fn grade_labels_round_trip() {
        for g in Grade::ALL {
            assert_eq!(Grade::parse(g.label()), Some(g));
        }
        assert_eq!(Grade::parse("EXCELLENT"), Some(Grade::Excellent));
        assert_eq!(Grade::parse("remarkable"), None);
    }

    #[test]
    fn sentiment_parse_is_case_insensitive() {
        assert_eq!(Sentiment::parse("Positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::parse(" negative "), Some(Sentiment::Negative));
        assert_eq!(Sentiment::parse("mixed"), None);
    }
}
