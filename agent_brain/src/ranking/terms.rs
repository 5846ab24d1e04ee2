//! Prompt tokenization for keyword ranking.

use std::collections::HashSet;

/// The distinct lowercase terms of a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: HashSet<String>,
}

impl TermSet {
    /// Tokenize a prompt.
    ///
    /// The prompt is lowercased and split on every run of characters outside
    /// `[a-z0-9]`; tokens shorter than `min_len` characters are dropped.
    pub fn from_prompt(prompt: &str, min_len: usize) -> Self {
        let terms = prompt
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|term| term.chars().count() >= min_len)
            .map(str::to_string)
            .collect();
        Self { terms }
    }

    /// Check whether a word is a term, ignoring its case.
    pub fn contains(&self, word: &str) -> bool {
        self.terms.contains(&word.to_lowercase())
    }

    /// Count the terms occurring as a substring of any of `fields` (case-insensitive).
    ///
    /// Each term counts at most once no matter how often it occurs.
    pub fn overlap(&self, fields: &[&str]) -> usize {
        let fields: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();
        self.terms
            .iter()
            .filter(|term| fields.iter().any(|field| field.contains(term.as_str())))
            .count()
    }

    /// Iterate over the terms (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let terms = TermSet::from_prompt("Design a three-player STAKE match!", 3);

        assert!(terms.contains("design"));
        assert!(terms.contains("three"));
        assert!(terms.contains("player"));
        assert!(terms.contains("stake"));
        assert!(terms.contains("Match"));
        assert!(!terms.contains("a"));
        assert_eq!(terms.len(), 5);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let terms = TermSet::from_prompt("go to an rng", 3);
        let collected: Vec<_> = terms.iter().collect();
        assert_eq!(collected, vec!["rng"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let terms = TermSet::from_prompt("round round ROUND", 3);
        assert_eq!(terms.len(), 1);
    }

    #[test]
    fn test_non_ascii_letters_split_tokens() {
        let terms = TermSet::from_prompt("café-payouts", 3);
        assert!(terms.contains("caf"));
        assert!(terms.contains("payouts"));
    }

    #[test]
    fn test_overlap_counts_each_term_once() {
        let terms = TermSet::from_prompt("match match settle", 3);
        let overlap = terms.overlap(&["settle-match", "Settle the match and match again"]);
        assert_eq!(overlap, 2);
    }

    #[test]
    fn test_empty_prompt() {
        let terms = TermSet::from_prompt("", 3);
        assert!(terms.is_empty());
        assert_eq!(terms.overlap(&["anything"]), 0);
    }
}
