use crate::models::TopicRecord;

/// One combined request for the whole batch: the ranked board plus the
/// analysis instruction, demanding a bare JSON array in response order.
pub fn batch_analysis_prompt(topics: &[TopicRecord]) -> String {
    let board: String = topics
        .iter()
        .map(|t| format!("{}. {} (heat: {})", t.rank, t.title, t.heat))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a top-tier creative director, internet product strategist and business-model innovator. Using inversion and cross-domain fusion, dig into the trending board below and surface a genuinely surprising product idea for every topic.

CURRENT TRENDING TOP {n}:
{board}

Apply at least two of these creative methods per topic:
1. SCAMPER - substitute, combine, adapt, modify, put to other uses, eliminate, rearrange.
2. Cross-domain fusion - pair the topic with an unrelated field (heritage + blockchain, food + AR, civic events + game mechanics).
3. Inversion - start from the opposite of the obvious pain point.
4. Edge-user method - design for the most marginal user group's needs.
5. 10x thinking - make the existing answer ten times better, not ten percent.
6. First principles - re-derive the problem from its essentials.

For every topic provide:
- category: sports / entertainment / tech / society / livelihood / consumer / culture / health / education / finance / international, or the closest fit
- sentiment: positive, neutral or negative
- target_users: concrete audience traits (age band, occupation, interests, spending power)
- hidden_need: the deeper need behind the surface attention
- product_name: a distinctive product concept; generic "X community" / "X tracker" / "X discussion platform" shapes are banned, as are plain aggregators, ideas with no revenue model, crowded me-too plays and unbuildable concepts
- creative_method: which method produced the idea
- core_functions: the three key differentiating functions
- monetization: the concrete business model (subscription, transactions, ads, value-added services)
- innovation: the core difference from what exists
- competitive_barrier: why it resists copying
- score: 0-100 (95-100 industry-changing, 85-94 highly innovative with a real moat, 75-84 solid idea with room, 65-74 ordinary, below 65 not worth pursuing)
- grade: exceptional, excellent, good, fair or weak
- insight: your sharpest observation about the topic

Return a bare JSON array, one object per topic in board order, and nothing else:
[
  {{
    "category": "...",
    "sentiment": "positive|neutral|negative",
    "target_users": "...",
    "hidden_need": "...",
    "product_name": "...",
    "creative_method": "...",
    "core_functions": "...",
    "monetization": "...",
    "innovation": "...",
    "competitive_barrier": "...",
    "score": 85,
    "grade": "excellent",
    "insight": "..."
  }}
]"#,
        n = topics.len(),
        board = board
    )
}
