// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use regex::Regex;

use crate::domain::models::search_result::SearchResult;

// Bonus magnitudes. Only their relative order matters:
// exact > prefix > substring > term frequency, and domain signals
// outrank description-only signals.
pub const EXACT_DOMAIN_BONUS: f64 = 2000.0;
pub const EXACT_TITLE_BONUS: f64 = 1500.0;
pub const DOMAIN_PREFIX_BONUS: f64 = 1000.0;
pub const TITLE_PREFIX_BONUS: f64 = 800.0;
pub const DOMAIN_CONTAINS_BONUS: f64 = 600.0;
pub const DOMAIN_CONTAINS_COM_BONUS: f64 = 100.0;
pub const TITLE_WORD_BONUS: f64 = 400.0;
pub const TITLE_PHRASE_BONUS: f64 = 300.0;
pub const DESCRIPTION_PHRASE_BONUS: f64 = 150.0;
pub const TERM_OCCURRENCE_BONUS: f64 = 50.0;
pub const TERM_FREQUENCY_CAP: f64 = 250.0;

const POPULAR_TLDS: [(&str, f64); 5] = [
    (".com", 30.0),
    (".edu", 20.0),
    (".gov", 20.0),
    (".org", 15.0),
    (".net", 10.0),
];

const TITLE_LENGTH_LIMIT: usize = 100;
const TITLE_PENALTY_PER_CHAR: f64 = 1.0;
const TITLE_PENALTY_CAP: f64 = 100.0;
const DESCRIPTION_LENGTH_LIMIT: usize = 300;
const DESCRIPTION_PENALTY_PER_CHAR: f64 = 0.2;
const DESCRIPTION_PENALTY_CAP: f64 = 50.0;

/// Composite relevance scorer for one query.
///
/// All comparisons are case-insensitive. The query is trimmed and
/// lower-cased; its terms are the whitespace-separated words.
pub struct RelevanceScorer {
    query: String,
    word_regex: Option<Regex>,
    term_regex: Option<Regex>,
}

impl RelevanceScorer {
    pub fn new(query: &str) -> Self {
        let query = query.trim().to_lowercase();

        let word_regex = if query.is_empty() {
            None
        } else {
            // Delimited by non-word characters or the ends of the title,
            // so punctuated queries like `c++` and `.net` still match.
            Regex::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(&query))).ok()
        };

        let mut terms: Vec<&str> = query.split_whitespace().collect();
        // Longest first so the alternation prefers whole terms
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        terms.dedup();
        let term_regex = if terms.is_empty() {
            None
        } else {
            let alternation = terms
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&alternation).ok()
        };

        Self {
            query,
            word_regex,
            term_regex,
        }
    }

    /// Calculate the composite score of a single result
    pub fn calculate_score(&self, result: &SearchResult) -> f64 {
        let mut score = result.relevance;
        if self.query.is_empty() {
            return score;
        }

        let query = self.query.as_str();
        let domain = result.domain.to_lowercase();
        let title = result.title.to_lowercase();
        let description = result.description.to_lowercase();

        if domain == query || domain_name(&domain) == query {
            score += EXACT_DOMAIN_BONUS;
        }
        if title == query {
            score += EXACT_TITLE_BONUS;
        }
        if domain.starts_with(query) {
            score += DOMAIN_PREFIX_BONUS;
        }
        if title.starts_with(query) {
            score += TITLE_PREFIX_BONUS;
        }
        if domain.contains(query) {
            score += DOMAIN_CONTAINS_BONUS;
            if domain.ends_with(".com") {
                score += DOMAIN_CONTAINS_COM_BONUS;
            }
        }
        if self
            .word_regex
            .as_ref()
            .is_some_and(|re| re.is_match(&title))
        {
            score += TITLE_WORD_BONUS;
        }
        if title.contains(query) {
            score += TITLE_PHRASE_BONUS;
        }
        if description.contains(query) {
            score += DESCRIPTION_PHRASE_BONUS;
        }

        if let Some(re) = &self.term_regex {
            let text = format!("{} {}", title, description);
            let occurrences = re.find_iter(&text).count() as f64;
            score += (occurrences * TERM_OCCURRENCE_BONUS).min(TERM_FREQUENCY_CAP);
        }

        if let Some((_, bonus)) = POPULAR_TLDS.iter().find(|(tld, _)| domain.ends_with(tld)) {
            score += bonus;
        }

        score - length_penalty(&result.title, &result.description)
    }

    /// Score every result and sort by descending score.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn rank(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        let mut scored: Vec<SearchResult> = results
            .into_iter()
            .map(|mut result| {
                result.score = self.calculate_score(&result);
                result
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

pub fn rank_results(query: &str, results: Vec<SearchResult>) -> Vec<SearchResult> {
    RelevanceScorer::new(query).rank(results)
}

/// Domain without its top-level suffix, e.g. `github.com` -> `github`.
fn domain_name(domain: &str) -> &str {
    domain.rsplit_once('.').map(|(name, _)| name).unwrap_or(domain)
}

fn length_penalty(title: &str, description: &str) -> f64 {
    let title_excess = title.chars().count().saturating_sub(TITLE_LENGTH_LIMIT) as f64;
    let description_excess = description
        .chars()
        .count()
        .saturating_sub(DESCRIPTION_LENGTH_LIMIT) as f64;

    (title_excess * TITLE_PENALTY_PER_CHAR).min(TITLE_PENALTY_CAP)
        + (description_excess * DESCRIPTION_PENALTY_PER_CHAR).min(DESCRIPTION_PENALTY_CAP)
}
