//! Search behaviour log.
//!
//! Records what residents search for: a LIFO history of raw queries, a
//! term-frequency map, and the set of distinct tokens seen. The
//! frequency data outlives history edits so the recommendation engine
//! keeps its "interest memory" even after an undo.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[a-z0-9]+").expect("literal pattern compiles"))
}

/// Lowercase alphanumeric tokens of a query, in order of appearance.
pub fn tokenize(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Accumulated search behaviour. Explicitly constructed and owned by
/// the runtime, like every other store in the workspace.
#[derive(Debug, Default)]
pub struct SearchLog {
    /// Raw queries, last element = most recent.
    history: Vec<String>,
    /// How often each token has been searched.
    term_frequency: HashMap<String, u64>,
    /// Every distinct token seen so far.
    distinct_terms: HashSet<String>,
}

impl SearchLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a query onto the history and counts its tokens.
    pub fn log_search(&mut self, query: &str) {
        let query = query.trim().to_owned();
        for token in tokenize(&query) {
            self.distinct_terms.insert(token.clone());
            *self.term_frequency.entry(token).or_insert(0) += 1;
        }
        self.history.push(query);
    }

    /// Pops the most recent query, if any. Token frequencies are kept.
    pub fn undo_last(&mut self) -> Option<String> {
        self.history.pop()
    }

    /// Up to `n` tokens by descending frequency; equal frequencies are
    /// ordered alphabetically so the ranking is deterministic.
    pub fn top_terms(&self, n: usize) -> Vec<(String, u64)> {
        let mut terms: Vec<(String, u64)> = self
            .term_frequency
            .iter()
            .map(|(t, c)| (t.clone(), *c))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(n);
        terms
    }

    /// Every distinct token seen so far.
    pub fn distinct_terms(&self) -> &HashSet<String> {
        &self.distinct_terms
    }

    /// Number of queries currently on the history stack.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
