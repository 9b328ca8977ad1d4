//! Title relevance against the searched text.
//!
//! Scores live in `0.0..=1.0`. Only a title equal to the searched text after
//! normalisation (case, repeated whitespace) reaches the maximum; everything
//! else is a blend of token overlap and edit-distance similarity.

pub const MAX_SCORE: f64 = 1.0;

const TOKEN_OVERLAP_WEIGHT: f64 = 0.6;
const SIMILARITY_WEIGHT: f64 = 0.4;
const PREFIX_TOKEN_CREDIT: f64 = 0.75;
const NON_EXACT_CEILING: f64 = 0.99;

pub fn score_title(title: &str, searched_text: &str) -> f64 {
    let normalized_title = normalize(title);
    let normalized_query = normalize(searched_text);

    if normalized_title.is_empty() || normalized_query.is_empty() {
        return 0.0;
    }

    if normalized_title == normalized_query {
        return MAX_SCORE;
    }

    let title_tokens = tokenize(&normalized_title);
    let query_tokens = tokenize(&normalized_query);
    if title_tokens.is_empty() || query_tokens.is_empty() {
        return 0.0;
    }

    let overlap = token_overlap(&title_tokens, &query_tokens);
    let similarity = strsim::normalized_levenshtein(&normalized_title, &normalized_query);

    (TOKEN_OVERLAP_WEIGHT * overlap + SIMILARITY_WEIGHT * similarity).min(NON_EXACT_CEILING)
}

/// Lowercase with whitespace runs collapsed. Punctuation is kept, so "C" and
/// "C++" stay distinct.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Average best-match credit of each query token against the title tokens.
/// A title token that merely starts with the query token earns partial
/// credit, which favours titles matching a word still being typed.
fn token_overlap(title_tokens: &[&str], query_tokens: &[&str]) -> f64 {
    let total: f64 = query_tokens
        .iter()
        .map(|query_token| {
            title_tokens
                .iter()
                .map(|title_token| {
                    if title_token == query_token {
                        1.0
                    } else if title_token.starts_with(*query_token) {
                        PREFIX_TOKEN_CREDIT
                    } else {
                        0.0
                    }
                })
                .fold(0.0, f64::max)
        })
        .sum();

    total / query_tokens.len() as f64
}
