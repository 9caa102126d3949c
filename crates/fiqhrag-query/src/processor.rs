use std::collections::HashSet;

use crate::normalize::normalize;

/// High-frequency Arabic function words: pronouns, prepositions,
/// conjunctions. Closed set; token matching is whitespace-delimited.
const STOP_WORDS: &[&str] = &[
    "في", "من", "على", "مع", "هو", "هي", "هم", "نحن", "أنت", "ما", "الذي", "التي", "اللذان",
    "اللتان", "وال", "أو", "و", "أن", "إن", "كان", "كانت", "يكون", "تكون", "هناك", "هنا",
];

/// Canonical pre-embedding transform for Arabic queries and chunk text.
pub struct QueryProcessor {
    stop_words: HashSet<&'static str>,
}

impl Default for QueryProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryProcessor {
    pub fn new() -> Self {
        Self { stop_words: STOP_WORDS.iter().copied().collect() }
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    /// Removes stop-word tokens, preserving the order of the rest.
    pub fn remove_stop_words(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.stop_words.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize, then optionally drop stop words. This exact transform runs
    /// at both index-build time and query time.
    pub fn process(&self, query: &str, remove_stops: bool) -> String {
        let query = normalize(query);
        if remove_stops {
            self.remove_stop_words(&query)
        } else {
            query
        }
    }

    /// Returns the original query first, then one variant per (word, synonym)
    /// pair in mapping order. Substitution is single-word, first occurrence.
    pub fn expand_query(&self, query: &str, synonyms: &[(&str, &[&str])]) -> Vec<String> {
        let words: Vec<&str> = query.split_whitespace().collect();
        let mut expanded = vec![query.to_string()];
        for &(word, subs) in synonyms {
            if words.contains(&word) {
                for syn in subs {
                    expanded.push(query.replacen(word, syn, 1));
                }
            }
        }
        expanded
    }

    /// Up to `max_keywords` non-stop-word tokens longer than 2 code points,
    /// in original order. Diagnostics only; vector search never sees these.
    pub fn extract_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        text.split_whitespace()
            .filter(|word| !self.stop_words.contains(word) && word.chars().count() > 2)
            .take(max_keywords)
            .map(str::to_string)
            .collect()
    }
}
