use std::collections::HashMap;
use std::sync::LazyLock;

/// Business image categories mapped to their search keywords, in relevance
/// order. Loaded once at first use; the vocabulary is fixed for the lifetime
/// of the process.
static CATEGORIES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                "business-team",
                &["business", "team", "office", "professional"][..],
            ),
            (
                "technology-consulting",
                &["technology", "consulting", "computer", "business"][..],
            ),
            (
                "business-strategy",
                &["strategy", "planning", "business", "meeting"][..],
            ),
            (
                "digital-transformation",
                &["digital", "technology", "innovation", "business"][..],
            ),
            (
                "professional-team",
                &["team", "business", "professional", "office"][..],
            ),
            (
                "modern-office",
                &["office", "workspace", "modern", "business"][..],
            ),
            (
                "team-meeting",
                &["meeting", "business", "team", "conference"][..],
            ),
            (
                "workspace",
                &["workspace", "office", "desk", "computer"][..],
            ),
            (
                "professional-woman",
                &["business", "woman", "professional", "portrait"][..],
            ),
            (
                "professional-man",
                &["business", "man", "professional", "portrait"][..],
            ),
            (
                "business-woman",
                &["business", "woman", "suit", "professional"][..],
            ),
            (
                "business-consulting",
                &["consulting", "business", "meeting", "professional"][..],
            ),
            (
                "technology-stack",
                &["technology", "computer", "software", "coding"][..],
            ),
            (
                "cloud-computing",
                &["cloud", "technology", "server", "computing"][..],
            ),
            (
                "data-analytics",
                &["data", "analytics", "chart", "business"][..],
            ),
            (
                "cybersecurity",
                &["security", "technology", "protection", "cyber"][..],
            ),
            (
                "mobile-development",
                &["mobile", "app", "development", "technology"][..],
            ),
            (
                "ai-machine-learning",
                &["artificial intelligence", "machine learning", "technology", "future"][..],
            ),
            (
                "business-meeting",
                &["meeting", "business", "conference", "professional"][..],
            ),
            (
                "modern-office-space",
                &["office", "modern", "workspace", "interior"][..],
            ),
            (
                "business-insights",
                &["business", "insights", "data", "analytics"][..],
            ),
            (
                "technology-trends",
                &["technology", "trends", "innovation", "future"][..],
            ),
            (
                "business-growth",
                &["growth", "business", "success", "chart"][..],
            ),
            (
                "digital-innovation",
                &["digital", "innovation", "technology", "future"][..],
            ),
        ])
    });

/// Look up the search keywords for a category.
///
/// Unknown categories degrade to a single keyword: the category name itself.
pub fn keywords_for(category: &str) -> Vec<String> {
    match CATEGORIES.get(category) {
        Some(keywords) => keywords.iter().map(|k| (*k).to_string()).collect(),
        None => vec![category.to_string()],
    }
}
