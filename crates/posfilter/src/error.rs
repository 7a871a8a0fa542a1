// Error type for suggestion filtering

use crate::BoxError;

/// Errors raised while configuring or running the suggestion filter.
///
/// Configuration errors carry the rule identifier so that a broken rule can
/// be found in the rule files. Collaborator failures keep the original error
/// as their source.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// A required filter argument was not supplied.
    #[error("missing required argument '{name}' in rule {rule_id}")]
    MissingArgument { name: &'static str, rule_id: String },

    /// `wordFrom` is neither a number nor `marker`.
    #[error("invalid wordFrom value '{value}' in rule {rule_id}")]
    InvalidWordFrom { value: String, rule_id: String },

    /// A regular expression argument does not compile.
    #[error("invalid pattern in argument '{name}': {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The resolved token index lies outside the pattern tokens.
    #[error("index out of bounds in {rule_id}, wordFrom resolved to {index}")]
    IndexOutOfRange { rule_id: String, index: usize },

    /// The tagger failed.
    #[error("tagger failure: {0}")]
    Tagger(#[source] BoxError),

    /// The correction oracle failed.
    #[error("correction oracle failure: {0}")]
    Oracle(#[source] BoxError),
}
