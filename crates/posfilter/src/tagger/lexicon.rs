// In-memory lexicon: word -> readings table

use hashbrown::HashMap;

use posfilter_core::character::is_upper;
use posfilter_core::{AnalyzedToken, AnalyzedTokenReadings};

use crate::BoxError;
use crate::tagger::Tagger;

/// A tagger backed by an in-memory table of full forms.
///
/// Lookup is exact first. A capitalized word that is unknown as written is
/// looked up again with its first letter lowered, so sentence-initial words
/// still receive readings. Unknown words get one untagged reading.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    entries: HashMap<String, Vec<(String, String)>>,
}

impl LexiconTagger {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reading for a full form. Readings keep insertion order.
    pub fn insert(&mut self, word: &str, pos_tag: &str, lemma: &str) {
        self.entries
            .entry(word.to_string())
            .or_default()
            .push((pos_tag.to_string(), lemma.to_string()));
    }

    /// Build a lexicon from `(word, pos_tag, lemma)` triples.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut lexicon = Self::new();
        for (word, pos_tag, lemma) in entries {
            lexicon.insert(word, pos_tag, lemma);
        }
        lexicon
    }

    /// Number of distinct full forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the exact form is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    fn lookup(&self, word: &str) -> Option<&[(String, String)]> {
        if let Some(readings) = self.entries.get(word) {
            return Some(readings.as_slice());
        }
        let first = word.chars().next()?;
        if !is_upper(first) {
            return None;
        }
        let lowered: String = first.to_lowercase().chain(word.chars().skip(1)).collect();
        self.entries.get(&lowered).map(Vec::as_slice)
    }

    fn tag_word(&self, word: &str) -> AnalyzedTokenReadings {
        let readings = self
            .lookup(word)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(pos_tag, lemma)| {
                        AnalyzedToken::new(word, Some(pos_tag.as_str()), Some(lemma.as_str()))
                    })
                    .collect()
            })
            .unwrap_or_default();
        AnalyzedTokenReadings::new(word, 0, readings)
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, words: &[&str]) -> Result<Vec<AnalyzedTokenReadings>, BoxError> {
        Ok(words.iter().map(|w| self.tag_word(w)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> LexiconTagger {
        LexiconTagger::from_entries([
            ("casa", "NCFS000", "casa"),
            ("casa", "VMIP3S0", "casar"),
            ("Madrid", "NPCNG00", "Madrid"),
        ])
    }

    #[test]
    fn known_word_gets_all_readings_in_order() {
        let tagged = lexicon().tag(&["casa"]).unwrap();
        assert_eq!(tagged.len(), 1);
        let tags: Vec<_> = tagged[0]
            .readings()
            .iter()
            .map(|r| r.pos_tag.as_deref().unwrap())
            .collect();
        assert_eq!(tags, vec!["NCFS000", "VMIP3S0"]);
        assert_eq!(tagged[0].readings()[1].lemma.as_deref(), Some("casar"));
    }

    #[test]
    fn unknown_word_is_untagged() {
        let tagged = lexicon().tag(&["cäsa"]).unwrap();
        assert!(!tagged[0].is_tagged());
        assert_eq!(tagged[0].token(), "cäsa");
    }

    #[test]
    fn capitalized_word_falls_back_to_lowercase() {
        let tagged = lexicon().tag(&["Casa"]).unwrap();
        assert!(tagged[0].is_tagged());
        assert_eq!(tagged[0].token(), "Casa");
        assert_eq!(tagged[0].readings()[0].token, "Casa");
    }

    #[test]
    fn one_result_per_input_word() {
        let tagged = lexicon().tag(&["casa", "xyz", "Madrid"]).unwrap();
        let tokens: Vec<_> = tagged.iter().map(|t| t.token()).collect();
        assert_eq!(tokens, vec!["casa", "xyz", "Madrid"]);
    }

    #[test]
    fn len_counts_forms() {
        let lex = lexicon();
        assert_eq!(lex.len(), 2);
        assert!(!lex.is_empty());
        assert!(LexiconTagger::new().is_empty());
    }
}
