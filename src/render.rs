use crate::models::{AnalyzedTopic, Engine, Grade, Sentiment};

/// Arithmetic mean over all scores; 0.0 for an empty batch.
pub fn mean_score(batch: &[AnalyzedTopic]) -> f64 {
    if batch.is_empty() {
        return 0.0;
    }
    batch.iter().map(|r| r.analysis.score as f64).sum::<f64>() / batch.len() as f64
}

/// Count per category, sorted by count descending; the sort is stable over
/// first-seen insertion order, so ties keep the order categories first
/// appeared in the batch.
pub fn category_counts(batch: &[AnalyzedTopic]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in batch {
        match counts.iter_mut().find(|(c, _)| *c == r.analysis.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.analysis.category.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn grade_counts(batch: &[AnalyzedTopic]) -> Vec<(Grade, usize)> {
    Grade::ALL
        .iter()
        .map(|&g| (g, batch.iter().filter(|r| r.analysis.grade == g).count()))
        .collect()
}

fn sentiment_counts(batch: &[AnalyzedTopic]) -> Vec<(Sentiment, usize)> {
    Sentiment::ALL
        .iter()
        .map(|&s| (s, batch.iter().filter(|r| r.analysis.sentiment == s).count()))
        .collect()
}

/// Render the finished batch as a sectioned Markdown document. Pure function
/// of its inputs; the caller supplies the formatted generation timestamp so
/// a fixed clock reproduces the document byte for byte. No I/O here.
pub fn render_report(batch: &[AnalyzedTopic], engine: Engine, generated_at: &str) -> String {
    let mut md = String::new();

    md.push_str("# Trending Topics — Product Idea Report\n\n");
    md.push_str(&format!("> Generated: {generated_at}\n"));
    md.push_str(&format!("> Analysis engine: {}\n", engine.label()));
    md.push_str(&format!("> Topics analyzed: {}\n\n", batch.len()));
    md.push_str("---\n\n");

    md.push_str("## Overview\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    for (grade, n) in grade_counts(batch) {
        md.push_str(&format!("| {} ideas | {} |\n", grade.label(), n));
    }
    md.push_str(&format!("| mean score | {:.1} |\n", mean_score(batch)));
    md.push('\n');

    md.push_str("## Categories\n\n");
    for (category, n) in category_counts(batch) {
        md.push_str(&format!("- **{category}**: {n}\n"));
    }
    md.push('\n');

    md.push_str("## Sentiment\n\n");
    for (sentiment, n) in sentiment_counts(batch) {
        if n > 0 {
            md.push_str(&format!("- **{}**: {}\n", sentiment.label(), n));
        }
    }
    md.push('\n');
    md.push_str("---\n\n");

    for r in batch {
        render_topic_section(&mut md, r);
    }

    md.push_str("## Notes\n\n");
    md.push_str("- Data source: Weibo trending board (TianAPI)\n");
    md.push_str("- Generated by a scheduled batch run; analyses are exploratory, not business advice\n");

    md
}

fn render_topic_section(md: &mut String, r: &AnalyzedTopic) {
    let t = &r.topic;
    let a = &r.analysis;

    md.push_str(&format!("### #{} {}\n\n", t.rank, t.title));

    md.push_str(&format!("**Heat**: {}", t.heat));
    if !t.tag.is_empty() {
        md.push_str(&format!(" | **Tag**: {}", t.tag));
    }
    md.push_str("\n\n");

    md.push_str(&format!(
        "**Category**: {} | **Sentiment**: {}\n\n",
        a.category,
        a.sentiment.label()
    ));

    if !a.target_users.is_empty() {
        md.push_str(&format!("**Target users**: {}\n\n", a.target_users));
    }
    if !a.hidden_need.is_empty() {
        md.push_str(&format!("**Hidden need**: {}\n\n", a.hidden_need));
    }

    md.push_str(&format!("**Product idea**: {}\n", a.product_name));
    if !a.creative_method.is_empty() {
        md.push_str(&format!("- **Creative method**: {}\n", a.creative_method));
    }
    if !a.core_functions.is_empty() {
        md.push_str(&format!("- **Core functions**: {}\n", a.core_functions));
    }
    if !a.monetization.is_empty() {
        md.push_str(&format!("- **Monetization**: {}\n", a.monetization));
    }
    if !a.innovation.is_empty() {
        md.push_str(&format!("- **Innovation**: {}\n", a.innovation));
    }
    if !a.competitive_barrier.is_empty() {
        md.push_str(&format!("- **Competitive barrier**: {}\n", a.competitive_barrier));
    }
    md.push('\n');

    if !a.insight.is_empty() {
        md.push_str(&format!("**Insight**: {}\n\n", a.insight));
    }

    md.push_str(&format!("**Score**: {} ({})\n\n", a.score, a.grade.label()));
    md.push_str("---\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisResult, TopicRecord};
    use crate::rules::RuleAnalyzer;

    fn record(rank: u32, category: &str, score: u32) -> AnalyzedTopic {
        AnalyzedTopic {
            topic: TopicRecord {
                rank,
                title: format!("topic-{rank}"),
                heat: 0,
                tag: String::new(),
            },
            analysis: AnalysisResult {
                category: category.to_string(),
                sentiment: Sentiment::Neutral,
                product_name: "p".to_string(),
                core_functions: "f".to_string(),
                target_users: "u".to_string(),
                monetization: "m".to_string(),
                innovation: String::new(),
                competitive_barrier: String::new(),
                hidden_need: String::new(),
                creative_method: String::new(),
                insight: String::new(),
                score,
                grade: Grade::from_score(score),
            },
        }
    }

    #[test]
    fn mean_score_is_arithmetic_mean() {
        let batch = vec![
            record(1, "Tech", 80),
            record(2, "Tech", 90),
            record(3, "Sports", 70),
        ];
        assert_eq!(mean_score(&batch), 80.0);
    }

    #[test]
    fn empty_batch_means_zero() {
        assert_eq!(mean_score(&[]), 0.0);
    }

    #[test]
    fn categories_sort_by_count_then_first_seen() {
        let batch = vec![
            record(1, "Sports", 80),
            record(2, "Tech", 80),
            record(3, "Finance", 80),
            record(4, "Tech", 80),
        ];
        let counts = category_counts(&batch);
        assert_eq!(
            counts,
            vec![
                ("Tech".to_string(), 2),
                ("Sports".to_string(), 1),
                ("Finance".to_string(), 1),
            ]
        );
    }

    #[test]
    fn report_is_reproducible_under_a_fixed_clock() {
        let batch = vec![record(1, "Tech", 92)];
        let a = render_report(&batch, Engine::RuleBased, "2026-02-06 08:00:00");
        let b = render_report(&batch, Engine::RuleBased, "2026-02-06 08:00:00");
        assert_eq!(a, b);
        assert!(a.contains("> Generated: 2026-02-06 08:00:00"));
        assert!(a.contains("rule-based template engine"));
    }

    #[test]
    fn single_ai_topic_end_to_end() {
        // model-backed disabled: the rule engine picks the AI template,
        // applies the +8 heat bonus and clamps at 100
        let analyzer = RuleAnalyzer::new();
        let topics = vec![TopicRecord {
            rank: 1,
            title: "AI产品发布".to_string(),
            heat: 1_200_000,
            tag: String::new(),
        }];
        let batch = analyzer.analyze_batch(&topics);

        assert_eq!(batch[0].analysis.score, 100);
        assert_eq!(batch[0].analysis.grade, Grade::Exceptional);

        let counts = category_counts(&batch);
        assert_eq!(counts, vec![("Tech".to_string(), 1)]);

        let report = render_report(&batch, Engine::RuleBased, "2026-02-06 08:00:00");
        assert!(report.contains("- **Tech**: 1\n"));
        assert!(report.contains("**Score**: 100 (exceptional)"));
    }

    #[test]
    fn empty_fields_are_omitted_from_topic_sections() {
        let batch = vec![record(1, "Tech", 75)];
        let report = render_report(&batch, Engine::ModelBacked, "t");
        assert!(!report.contains("**Hidden need**"));
        assert!(!report.contains("**Insight**"));
        assert!(report.contains("**Target users**: u"));
    }
}
