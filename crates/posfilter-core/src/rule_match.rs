// Rule match public API type

use std::sync::Arc;

use crate::token::AnalyzedSentence;

/// Classification of a rule match, used by clients to pick a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchType {
    /// A spelling error: the word is not known.
    UnknownWord,
    /// A style hint rather than an error.
    Hint,
    /// Any other grammar or style error.
    #[default]
    Other,
}

/// A flagged span of a sentence produced by a rule.
///
/// The message may contain placeholders that a filter resolves; the
/// suggested replacements are ordered best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Full identifier of the rule that produced the match.
    pub rule_id: String,

    /// The sentence the match was found in.
    pub sentence: Arc<AnalyzedSentence>,

    /// Start of the flagged span (character offset in the sentence).
    pub from_pos: usize,

    /// End of the flagged span (exclusive).
    pub to_pos: usize,

    /// Message shown to the user.
    pub message: String,

    /// Short form of the message, possibly empty.
    pub short_message: String,

    /// Match classification.
    pub match_type: MatchType,

    /// Suggested replacements, or replacement templates before filtering.
    pub suggested_replacements: Vec<String>,
}

impl Match {
    /// Create a match with no suggestions and the default type.
    pub fn new(
        rule_id: impl Into<String>,
        sentence: Arc<AnalyzedSentence>,
        from_pos: usize,
        to_pos: usize,
        message: impl Into<String>,
        short_message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            sentence,
            from_pos,
            to_pos,
            message: message.into(),
            short_message: short_message.into(),
            match_type: MatchType::default(),
            suggested_replacements: Vec::new(),
        }
    }

    /// Set the match type.
    pub fn with_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    /// Set the suggested replacements.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggested_replacements = suggestions;
        self
    }

    /// Suggested replacements in rank order.
    pub fn suggested_replacements(&self) -> &[String] {
        &self.suggested_replacements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::AnalyzedTokenReadings;

    fn sentence() -> Arc<AnalyzedSentence> {
        AnalyzedSentence::shared(vec![AnalyzedTokenReadings::untagged("casa", 0)])
    }

    #[test]
    fn new_match() {
        let m = Match::new("ES_RULE[1]", sentence(), 0, 4, "Message", "Short");
        assert_eq!(m.rule_id, "ES_RULE[1]");
        assert_eq!(m.from_pos, 0);
        assert_eq!(m.to_pos, 4);
        assert_eq!(m.match_type, MatchType::Other);
        assert!(m.suggested_replacements().is_empty());
    }

    #[test]
    fn builders_set_type_and_suggestions() {
        let m = Match::new("SPELLER_RULE", sentence(), 0, 4, "", "")
            .with_type(MatchType::UnknownWord)
            .with_suggestions(vec!["cosa".to_string()]);
        assert_eq!(m.match_type, MatchType::UnknownWord);
        assert_eq!(m.suggested_replacements(), ["cosa".to_string()]);
    }

    #[test]
    fn clone_is_independent() {
        let m = Match::new("R", sentence(), 0, 4, "", "").with_suggestions(vec!["a".into()]);
        let mut cloned = m.clone();
        cloned.suggested_replacements.push("b".into());
        assert_eq!(m.suggested_replacements().len(), 1);
        assert_eq!(cloned.suggested_replacements().len(), 2);
        assert!(Arc::ptr_eq(&m.sentence, &cloned.sentence));
    }
}
