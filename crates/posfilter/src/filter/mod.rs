// SuggestionFilter: POS-constrained replacement suggestions for a rule match.
//
// Given a match that flagged a word, the filter finds the word among the
// pattern tokens, asks the correction oracle for replacements of a
// (possibly corrupted) form of it, keeps the replacements the tagger
// recognizes with the desired POS tag, and substitutes them into the
// match's suggestion templates.

pub mod candidates;
pub mod probe;
pub mod target;
pub mod template;

use std::collections::HashMap;
use std::sync::Arc;

use posfilter_core::character::equal_without_diacritics;
use posfilter_core::{AnalyzedSentence, AnalyzedTokenReadings, Match};
use tracing::{debug, trace};

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::oracle::CorrectionOracle;
use crate::tagger::Tagger;

pub use candidates::CandidateList;
pub use probe::make_wrong;
pub use target::resolve_target;
pub use template::{SUGGESTION_PLACEHOLDER, expand_templates, has_placeholder};

/// Maximum number of candidates, and of candidate-derived suggestions.
pub const MAX_SUGGESTIONS: usize = 10;

/// Boundary between a rule engine and the filters its rules declare.
pub trait RuleFilter {
    /// Decide what to report for a match.
    ///
    /// `arguments` are the filter arguments declared in the rule,
    /// `pattern_tokens` the token readings the rule pattern matched, in
    /// order. Returns the match to report, or `None` to drop it.
    fn accept_rule_match(
        &self,
        rule_match: &Match,
        arguments: &HashMap<String, String>,
        pattern_token_pos: usize,
        pattern_tokens: &[AnalyzedTokenReadings],
    ) -> Result<Option<Match>, FilterError>;
}

/// Why an oracle replacement was not admitted as a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    SameAsOriginal,
    WrongPosTag,
    Duplicate,
    NotDiacriticVariant,
    Excluded,
}

/// Finds replacement words with a desired part-of-speech tag.
///
/// Generic over the tagger and the correction oracle of a language
/// variant. The filter holds no mutable state: `apply` takes `&self` and
/// may run concurrently on many matches.
pub struct SuggestionFilter<T, O> {
    tagger: T,
    oracle: O,
}

impl<T: Tagger, O: CorrectionOracle> SuggestionFilter<T, O> {
    pub fn new(tagger: T, oracle: O) -> Self {
        Self { tagger, oracle }
    }

    /// Validate a rule's filter arguments once, at rule load time.
    ///
    /// The returned handle filters that rule's matches without parsing the
    /// arguments or compiling the patterns again.
    pub fn prepare(
        &self,
        arguments: &HashMap<String, String>,
        rule_id: &str,
    ) -> Result<PreparedFilter<'_, T, O>, FilterError> {
        Ok(PreparedFilter {
            filter: self,
            config: FilterConfig::from_arguments(arguments, rule_id)?,
        })
    }

    /// Filter one match.
    ///
    /// Returns a new match carrying the computed suggestions, or `None`
    /// when diacritics mode finds nothing to correct. The input match is
    /// never modified.
    pub fn apply(
        &self,
        rule_match: &Match,
        config: &FilterConfig,
        pattern_tokens: &[AnalyzedTokenReadings],
    ) -> Result<Option<Match>, FilterError> {
        let index = resolve_target(
            config.word_from(),
            rule_match.from_pos,
            pattern_tokens,
            &rule_match.rule_id,
        )?;
        let target = &pattern_tokens[index];

        let candidates = if self.has_desired_tag(target.token(), config)? {
            if config.diacritics_mode() {
                debug!(
                    rule_id = %rule_match.rule_id,
                    word = target.token(),
                    "word already has the desired tag, match discarded"
                );
                return Ok(None);
            }
            debug!(
                rule_id = %rule_match.rule_id,
                word = target.token(),
                "word already has the desired tag, no suggestions generated"
            );
            if has_placeholder(rule_match.suggested_replacements()) {
                debug!(
                    rule_id = %rule_match.rule_id,
                    "placeholder templates dropped without candidates"
                );
            }
            None
        } else {
            Some(self.find_candidates(target, config)?)
        };

        if config.diacritics_mode() && candidates.as_ref().is_some_and(CandidateList::is_empty) {
            debug!(
                rule_id = %rule_match.rule_id,
                word = target.token(),
                "no diacritic variant found, match discarded"
            );
            return Ok(None);
        }

        let mut result = Match::new(
            rule_match.rule_id.clone(),
            Arc::clone(&rule_match.sentence),
            rule_match.from_pos,
            rule_match.to_pos,
            rule_match.message.clone(),
            rule_match.short_message.clone(),
        )
        .with_type(rule_match.match_type);

        if let Some(candidates) = candidates {
            let suggestions =
                expand_templates(rule_match.suggested_replacements(), candidates.as_slice());
            if !suggestions.is_empty() {
                result = result.with_suggestions(suggestions);
            }
        }
        Ok(Some(result))
    }

    /// Tag the surface text afresh, ignoring any disambiguation the token's
    /// own readings went through.
    fn has_desired_tag(&self, word: &str, config: &FilterConfig) -> Result<bool, FilterError> {
        let tagged = self.tagger.tag(&[word]).map_err(FilterError::Tagger)?;
        Ok(tagged
            .iter()
            .any(|atr| atr.matches_pos_tag(config.desired_postag())))
    }

    fn find_candidates(
        &self,
        target: &AnalyzedTokenReadings,
        config: &FilterConfig,
    ) -> Result<CandidateList, FilterError> {
        let probe = if target.is_tagged() {
            AnalyzedTokenReadings::untagged(make_wrong(target.token()), target.start_pos())
        } else {
            target.clone()
        };
        trace!(word = target.token(), probe = probe.token(), "querying oracle");
        let sentence = AnalyzedSentence::shared(vec![probe]);
        let matches = self
            .oracle
            .match_sentence(&sentence)
            .map_err(FilterError::Oracle)?;

        let mut candidates = CandidateList::new(MAX_SUGGESTIONS);
        let Some(first) = matches.first() else {
            return Ok(candidates);
        };
        let replacements: Vec<&str> = first
            .suggested_replacements()
            .iter()
            .map(String::as_str)
            .collect();
        let tagged = self
            .tagger
            .tag(&replacements)
            .map_err(FilterError::Tagger)?;

        for analyzed in &tagged {
            if candidates.is_full() {
                break;
            }
            match Self::rejection(analyzed, target.token(), &candidates, config) {
                Some(reason) => {
                    trace!(replacement = analyzed.token(), ?reason, "replacement rejected");
                }
                None => {
                    candidates.push(analyzed.token());
                }
            }
        }
        Ok(candidates)
    }

    fn rejection(
        analyzed: &AnalyzedTokenReadings,
        original: &str,
        candidates: &CandidateList,
        config: &FilterConfig,
    ) -> Option<Rejection> {
        let word = analyzed.token();
        if word == original {
            return Some(Rejection::SameAsOriginal);
        }
        if !analyzed.matches_pos_tag(config.desired_postag()) {
            return Some(Rejection::WrongPosTag);
        }
        if candidates.contains(word) {
            return Some(Rejection::Duplicate);
        }
        if config.diacritics_mode() && !equal_without_diacritics(word, original) {
            return Some(Rejection::NotDiacriticVariant);
        }
        if config.remove_suggestions().is_some_and(|re| re.is_match(word)) {
            return Some(Rejection::Excluded);
        }
        None
    }
}

/// A [`SuggestionFilter`] bound to one rule's validated configuration.
pub struct PreparedFilter<'f, T, O> {
    filter: &'f SuggestionFilter<T, O>,
    config: FilterConfig,
}

impl<T: Tagger, O: CorrectionOracle> PreparedFilter<'_, T, O> {
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter one match of the rule; see [`SuggestionFilter::apply`].
    pub fn accept(
        &self,
        rule_match: &Match,
        pattern_tokens: &[AnalyzedTokenReadings],
    ) -> Result<Option<Match>, FilterError> {
        self.filter.apply(rule_match, &self.config, pattern_tokens)
    }
}

/// Validates the arguments on every call. Rule engines that load their
/// rules up front should use [`SuggestionFilter::prepare`] instead.
impl<T: Tagger, O: CorrectionOracle> RuleFilter for SuggestionFilter<T, O> {
    fn accept_rule_match(
        &self,
        rule_match: &Match,
        arguments: &HashMap<String, String>,
        _pattern_token_pos: usize,
        pattern_tokens: &[AnalyzedTokenReadings],
    ) -> Result<Option<Match>, FilterError> {
        let config = FilterConfig::from_arguments(arguments, &rule_match.rule_id)?;
        self.apply(rule_match, &config, pattern_tokens)
    }
}
