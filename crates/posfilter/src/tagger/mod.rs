// Morphological tagger capability

#[cfg(feature = "lexicon")]
mod lexicon;

#[cfg(feature = "lexicon")]
pub use lexicon::LexiconTagger;

use posfilter_core::AnalyzedTokenReadings;

use crate::BoxError;

/// Trait for morphological taggers.
///
/// Abstracts over the tagger of each language variant. Implementations
/// return exactly one `AnalyzedTokenReadings` per input word, in input
/// order, with readings in a stable order. Tagging takes `&self` only, so a
/// tagger can be shared by concurrent filter invocations.
pub trait Tagger: Send + Sync {
    /// Tag each word independently of any sentence context.
    fn tag(&self, words: &[&str]) -> Result<Vec<AnalyzedTokenReadings>, BoxError>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, words: &[&str]) -> Result<Vec<AnalyzedTokenReadings>, BoxError> {
        (**self).tag(words)
    }
}

impl<T: Tagger + ?Sized> Tagger for std::sync::Arc<T> {
    fn tag(&self, words: &[&str]) -> Result<Vec<AnalyzedTokenReadings>, BoxError> {
        (**self).tag(words)
    }
}
