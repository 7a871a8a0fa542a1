// Replacement-table correction oracle

use std::sync::Arc;

use hashbrown::HashMap;
use posfilter_core::character::{capitalize_first, is_upper, remove_diacritics, simple_lower};
use posfilter_core::{AnalyzedSentence, AnalyzedTokenReadings, Match, MatchType};
use tracing::trace;

use crate::BoxError;
use crate::oracle::CorrectionOracle;

/// Rule identifier of matches produced by [`SpellerRule`].
pub const SPELLER_RULE_ID: &str = "SPELLER_RULE";

const MESSAGE: &str = "Possible spelling mistake found.";
const SHORT_MESSAGE: &str = "Spelling mistake";

/// Default number of suggestions attached to a match.
const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// A correction oracle backed by a table of ranked replacements.
///
/// Entries are keyed by their folded form (lower case, diacritics
/// removed), so one entry covers every accent and case variant of a word.
/// A token is flagged when its folded form has an entry and the token is
/// not itself one of the listed words. A capitalized token gets its
/// suggestions capitalized.
#[derive(Debug, Clone)]
pub struct SpellerRule {
    entries: HashMap<String, Vec<String>>,
    max_suggestions: usize,
}

impl Default for SpellerRule {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl SpellerRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add replacements, best first, for every variant of `word`.
    /// Repeated inserts for the same folded form append.
    pub fn insert(&mut self, word: &str, replacements: &[&str]) {
        self.entries
            .entry(fold(word))
            .or_default()
            .extend(replacements.iter().map(|r| r.to_string()));
    }

    /// Build a rule from `(word, replacements)` pairs.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut rule = Self::new();
        for (word, replacements) in entries {
            rule.insert(word, replacements);
        }
        rule
    }

    /// Set the maximum number of suggestions per match.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Suggestions for a word, best first, or `None` if the word is correct
    /// or unknown to the table.
    pub fn suggest(&self, word: &str) -> Option<Vec<String>> {
        let listed = self.entries.get(&fold(word))?;
        let capitalize = word.chars().next().is_some_and(is_upper);
        let suggestions: Vec<String> = listed
            .iter()
            .map(|s| if capitalize { capitalize_first(s) } else { s.clone() })
            .collect();
        if suggestions.iter().any(|s| s == word) {
            return None;
        }
        Some(suggestions.into_iter().take(self.max_suggestions).collect())
    }

    fn check_token(
        &self,
        sentence: &Arc<AnalyzedSentence>,
        token: &AnalyzedTokenReadings,
    ) -> Option<Match> {
        let text = token.token();
        if !text.chars().any(char::is_alphabetic) {
            return None;
        }
        let suggestions = self.suggest(text)?;
        trace!(word = text, count = suggestions.len(), "speller suggestions");
        let from = token.start_pos();
        Some(
            Match::new(
                SPELLER_RULE_ID,
                Arc::clone(sentence),
                from,
                from + text.chars().count(),
                MESSAGE,
                SHORT_MESSAGE,
            )
            .with_type(MatchType::UnknownWord)
            .with_suggestions(suggestions),
        )
    }
}

impl CorrectionOracle for SpellerRule {
    fn match_sentence(&self, sentence: &Arc<AnalyzedSentence>) -> Result<Vec<Match>, BoxError> {
        Ok(sentence
            .tokens()
            .iter()
            .filter_map(|token| self.check_token(sentence, token))
            .collect())
    }
}

fn fold(word: &str) -> String {
    remove_diacritics(word).chars().map(simple_lower).collect()
}
