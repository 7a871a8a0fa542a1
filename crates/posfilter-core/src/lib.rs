//! Shared value types for POS-constrained suggestion filtering.
//!
//! This crate carries no algorithms of its own. It defines the data that a
//! rule engine, a morphological tagger and a correction oracle exchange with
//! the suggestion filter in the `posfilter` crate.
//!
//! # Architecture
//!
//! - [`token`] -- Readings, token readings and analyzed sentences
//! - [`rule_match`] -- Rule matches and their type
//! - [`character`] -- Case folding and diacritic stripping

pub mod character;
pub mod rule_match;
pub mod token;

pub use rule_match::{Match, MatchType};
pub use token::{AnalyzedSentence, AnalyzedToken, AnalyzedTokenReadings};
