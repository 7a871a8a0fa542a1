// Typed filter configuration, validated once from a rule's argument map

use std::collections::HashMap;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error::FilterError;

// ---------------------------------------------------------------------------
// Argument keys
// ---------------------------------------------------------------------------

pub const ARG_WORD_FROM: &str = "wordFrom";
pub const ARG_DESIRED_POSTAG: &str = "desiredPostag";
pub const ARG_REMOVE_SUGGESTIONS_REGEXP: &str = "removeSuggestionsRegexp";
pub const ARG_MODE: &str = "mode";
/// Spelling of the mode key used by older rule files.
pub const ARG_MODE_LEGACY: &str = "Mode";

/// `wordFrom` value selecting the token after the match anchor.
pub const WORD_FROM_MARKER: &str = "marker";
/// `mode` value enabling diacritics-only corrections.
pub const MODE_DIACRITICS: &str = "diacritics";

/// How the filter finds the word to correct among the pattern tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFrom {
    /// Skip to the first token at or after the match start, then take the
    /// token after it.
    Marker,
    /// 1-based position in the pattern tokens.
    Index(usize),
}

impl FromStr for WordFrom {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == WORD_FROM_MARKER {
            return Ok(WordFrom::Marker);
        }
        s.trim().parse::<usize>().map(WordFrom::Index).map_err(|_| ())
    }
}

/// Validated configuration of one suggestion filter use in a rule.
///
/// Patterns are compiled once, anchored at both ends so that matching is
/// always a full match. A compiled `Regex` is immutable and can be shared
/// between threads filtering different sentences.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    word_from: WordFrom,
    desired_postag: Regex,
    remove_suggestions: Option<Regex>,
    diacritics_mode: bool,
}

impl FilterConfig {
    /// Create a configuration with the two required parameters.
    ///
    /// `desired_postag` is matched case-sensitively against POS tags.
    pub fn new(word_from: WordFrom, desired_postag: &str) -> Result<Self, FilterError> {
        Ok(Self {
            word_from,
            desired_postag: compile_full_match(ARG_DESIRED_POSTAG, desired_postag, false)?,
            remove_suggestions: None,
            diacritics_mode: false,
        })
    }

    /// Exclude replacements matching `pattern` (case-insensitive).
    pub fn with_remove_suggestions(mut self, pattern: &str) -> Result<Self, FilterError> {
        self.remove_suggestions = Some(compile_full_match(
            ARG_REMOVE_SUGGESTIONS_REGEXP,
            pattern,
            true,
        )?);
        Ok(self)
    }

    /// Restrict corrections to diacritic variants of the word.
    pub fn with_diacritics_mode(mut self, diacritics_mode: bool) -> Self {
        self.diacritics_mode = diacritics_mode;
        self
    }

    /// Build a configuration from a rule's string arguments.
    ///
    /// `wordFrom` and `desiredPostag` are required. `removeSuggestionsRegexp`
    /// and `mode` are optional; unknown keys are ignored, as are `mode`
    /// values other than `diacritics`.
    pub fn from_arguments(
        args: &HashMap<String, String>,
        rule_id: &str,
    ) -> Result<Self, FilterError> {
        let word_from_value = required(args, ARG_WORD_FROM, rule_id)?;
        let desired_postag = required(args, ARG_DESIRED_POSTAG, rule_id)?;

        let word_from =
            word_from_value
                .parse::<WordFrom>()
                .map_err(|()| FilterError::InvalidWordFrom {
                    value: word_from_value.to_string(),
                    rule_id: rule_id.to_string(),
                })?;

        let mut config = Self::new(word_from, desired_postag)?;
        if let Some(pattern) = args.get(ARG_REMOVE_SUGGESTIONS_REGEXP) {
            config = config.with_remove_suggestions(pattern)?;
        }
        let mode = args
            .get(ARG_MODE)
            .or_else(|| args.get(ARG_MODE_LEGACY))
            .map(String::as_str);
        Ok(config.with_diacritics_mode(mode == Some(MODE_DIACRITICS)))
    }

    pub fn word_from(&self) -> WordFrom {
        self.word_from
    }

    /// Anchored pattern for the desired POS tag.
    pub fn desired_postag(&self) -> &Regex {
        &self.desired_postag
    }

    /// Anchored, case-insensitive exclusion pattern, if configured.
    pub fn remove_suggestions(&self) -> Option<&Regex> {
        self.remove_suggestions.as_ref()
    }

    pub fn diacritics_mode(&self) -> bool {
        self.diacritics_mode
    }
}

fn required<'a>(
    args: &'a HashMap<String, String>,
    name: &'static str,
    rule_id: &str,
) -> Result<&'a str, FilterError> {
    args.get(name)
        .map(String::as_str)
        .ok_or_else(|| FilterError::MissingArgument {
            name,
            rule_id: rule_id.to_string(),
        })
}

/// Compile `pattern` so that `is_match` only succeeds on a full match.
fn compile_full_match(
    name: &'static str,
    pattern: &str,
    case_insensitive: bool,
) -> Result<Regex, FilterError> {
    RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(case_insensitive)
        .unicode(true)
        .build()
        .map_err(|source| FilterError::InvalidPattern { name, source })
}
