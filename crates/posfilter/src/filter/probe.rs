// Synthetic misspelling used to elicit suggestions from the oracle

/// Substitutions tried in order; the first whose source is present wins.
const MISSPELLINGS: &[(char, char)] = &[
    ('a', '\u{00E4}'),
    ('e', '\u{00EB}'),
    ('i', '\u{00EF}'),
    ('o', '\u{00F6}'),
    ('u', '\u{00F9}'),
    ('\u{00E1}', '\u{00E4}'),
    ('\u{00E9}', '\u{00EB}'),
    ('\u{00ED}', '\u{00EF}'),
    ('\u{00F3}', '\u{00F6}'),
    ('\u{00FA}', '\u{00F9}'),
];

/// Invent a misspelling of a correctly spelled word.
///
/// A speller returns nothing for a word it already knows, so the filter
/// asks about a corrupted form instead. Only the first occurrence of the
/// chosen character is replaced; a word without any listed vowel gets a
/// trailing hyphen.
pub fn make_wrong(word: &str) -> String {
    for &(from, to) in MISSPELLINGS {
        if let Some(pos) = word.find(from) {
            let mut wrong = String::with_capacity(word.len() + 1);
            wrong.push_str(&word[..pos]);
            wrong.push(to);
            wrong.push_str(&word[pos + from.len_utf8()..]);
            return wrong;
        }
    }
    format!("{word}-")
}
