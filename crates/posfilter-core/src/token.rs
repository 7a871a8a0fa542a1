// Readings, token readings and analyzed sentences

use std::sync::Arc;

use regex::Regex;

// ---------------------------------------------------------------------------
// AnalyzedToken
// ---------------------------------------------------------------------------

/// One candidate morphological analysis of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    /// Surface text the reading was produced for.
    pub token: String,

    /// Part-of-speech tag, or `None` when the tagger does not know the word.
    pub pos_tag: Option<String>,

    /// Base form, when the tagger provides one.
    pub lemma: Option<String>,
}

impl AnalyzedToken {
    /// Create a new reading.
    pub fn new(token: impl Into<String>, pos_tag: Option<&str>, lemma: Option<&str>) -> Self {
        Self {
            token: token.into(),
            pos_tag: pos_tag.map(str::to_string),
            lemma: lemma.map(str::to_string),
        }
    }

    /// Create a reading without tag or lemma.
    pub fn untagged(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            pos_tag: None,
            lemma: None,
        }
    }
}

// ---------------------------------------------------------------------------
// AnalyzedTokenReadings
// ---------------------------------------------------------------------------

/// A word occurrence in a sentence together with all of its readings.
///
/// The surface text and start offset are fixed at construction. Readings
/// keep the order the tagger produced them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedTokenReadings {
    token: String,
    start_pos: usize,
    readings: Vec<AnalyzedToken>,
}

impl AnalyzedTokenReadings {
    /// Create token readings at the given character offset.
    ///
    /// An empty reading list is replaced by a single untagged reading of the
    /// surface text, so every token has at least one reading.
    pub fn new(token: impl Into<String>, start_pos: usize, readings: Vec<AnalyzedToken>) -> Self {
        let token = token.into();
        let readings = if readings.is_empty() {
            vec![AnalyzedToken::untagged(token.clone())]
        } else {
            readings
        };
        Self {
            token,
            start_pos,
            readings,
        }
    }

    /// Create token readings with one untagged reading.
    pub fn untagged(token: impl Into<String>, start_pos: usize) -> Self {
        Self::new(token, start_pos, Vec::new())
    }

    /// The surface text of the token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Character offset of the token within its sentence.
    pub fn start_pos(&self) -> usize {
        self.start_pos
    }

    /// All readings of the token.
    pub fn readings(&self) -> &[AnalyzedToken] {
        &self.readings
    }

    /// Returns `true` if at least one reading carries a POS tag.
    pub fn is_tagged(&self) -> bool {
        self.readings.iter().any(|r| r.pos_tag.is_some())
    }

    /// Returns `true` if any reading's POS tag matches `pattern`.
    ///
    /// Readings without a tag never match. The pattern is expected to be
    /// anchored at both ends, which makes `is_match` a full match.
    pub fn matches_pos_tag(&self, pattern: &Regex) -> bool {
        self.readings
            .iter()
            .filter_map(|r| r.pos_tag.as_deref())
            .any(|tag| pattern.is_match(tag))
    }
}

// ---------------------------------------------------------------------------
// AnalyzedSentence
// ---------------------------------------------------------------------------

/// A sentence as an ordered sequence of token readings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalyzedSentence {
    tokens: Vec<AnalyzedTokenReadings>,
}

impl AnalyzedSentence {
    /// Create a sentence from its tokens.
    pub fn new(tokens: Vec<AnalyzedTokenReadings>) -> Self {
        Self { tokens }
    }

    /// Create a shared sentence, the form matches refer to.
    pub fn shared(tokens: Vec<AnalyzedTokenReadings>) -> Arc<Self> {
        Arc::new(Self::new(tokens))
    }

    /// The tokens of the sentence.
    pub fn tokens(&self) -> &[AnalyzedTokenReadings] {
        &self.tokens
    }

    /// Concatenated surface text of all tokens.
    pub fn text(&self) -> String {
        self.tokens.iter().map(AnalyzedTokenReadings::token).collect()
    }
}
