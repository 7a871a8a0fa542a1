// Correction oracle capability

#[cfg(feature = "lexicon")]
mod speller_rule;

#[cfg(feature = "lexicon")]
pub use speller_rule::{SPELLER_RULE_ID, SpellerRule};

use std::sync::Arc;

use posfilter_core::{AnalyzedSentence, Match};

use crate::BoxError;

/// Trait for spelling-correction oracles.
///
/// An oracle checks a sentence and returns one match per flagged span,
/// each with ranked replacement suggestions. Queries take `&self` only:
/// implementations must be safe to call from concurrent filter invocations
/// without external locking.
pub trait CorrectionOracle: Send + Sync {
    /// Check a sentence and return its matches in text order.
    fn match_sentence(&self, sentence: &Arc<AnalyzedSentence>) -> Result<Vec<Match>, BoxError>;
}

impl<O: CorrectionOracle + ?Sized> CorrectionOracle for &O {
    fn match_sentence(&self, sentence: &Arc<AnalyzedSentence>) -> Result<Vec<Match>, BoxError> {
        (**self).match_sentence(sentence)
    }
}

impl<O: CorrectionOracle + ?Sized> CorrectionOracle for Arc<O> {
    fn match_sentence(&self, sentence: &Arc<AnalyzedSentence>) -> Result<Vec<Match>, BoxError> {
        (**self).match_sentence(sentence)
    }
}
