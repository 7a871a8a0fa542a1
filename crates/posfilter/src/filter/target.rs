// Resolution of the target token among the pattern tokens

use posfilter_core::AnalyzedTokenReadings;

use crate::config::WordFrom;
use crate::error::FilterError;

/// Find the token the filter should correct.
///
/// With [`WordFrom::Marker`] the filter skips to the first token starting
/// at or after `match_from` and takes the token after it. An explicit
/// index is 1-based. Returns the 0-based position in `tokens`, or
/// `IndexOutOfRange` with the 1-based index if it falls outside
/// `1..=tokens.len()`.
pub fn resolve_target(
    word_from: WordFrom,
    match_from: usize,
    tokens: &[AnalyzedTokenReadings],
    rule_id: &str,
) -> Result<usize, FilterError> {
    let index = match word_from {
        WordFrom::Marker => {
            let anchor = tokens
                .iter()
                .position(|t| t.start_pos() >= match_from)
                .unwrap_or(tokens.len());
            anchor + 2
        }
        WordFrom::Index(index) => index,
    };
    if index < 1 || index > tokens.len() {
        return Err(FilterError::IndexOutOfRange {
            rule_id: rule_id.to_string(),
            index,
        });
    }
    Ok(index - 1)
}
