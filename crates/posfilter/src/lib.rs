//! POS-constrained suggestion filtering.
//!
//! Given a rule match that flagged a word, the [`SuggestionFilter`] asks a
//! correction oracle for replacements, keeps only those the tagger
//! recognizes with a desired part-of-speech tag, and substitutes them into
//! the match's suggestion templates.
//!
//! # Architecture
//!
//! - [`config`] -- Typed, validated filter configuration
//! - [`filter`] -- The suggestion filter and the rule-engine boundary
//! - [`tagger`] -- Tagger capability (plus an in-memory lexicon tagger)
//! - [`oracle`] -- Correction oracle capability (plus a replacement-table speller rule)

pub mod config;
pub mod error;
pub mod filter;
pub mod oracle;
pub mod tagger;

pub use config::{FilterConfig, WordFrom};
pub use error::FilterError;
pub use filter::{MAX_SUGGESTIONS, PreparedFilter, RuleFilter, SuggestionFilter};
pub use oracle::CorrectionOracle;
pub use tagger::Tagger;

/// Boxed error returned by tagger and oracle implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
