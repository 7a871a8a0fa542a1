// Shared helpers for integration tests.

#![allow(dead_code)]

use posfilter::oracle::SpellerRule;
use posfilter::tagger::LexiconTagger;
use posfilter_core::{AnalyzedSentence, AnalyzedTokenReadings, Match};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber. Safe to call from every test;
/// only the first call installs it.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// A small Spanish full-form lexicon.
pub fn spanish_lexicon() -> LexiconTagger {
    LexiconTagger::from_entries([
        ("la", "DA0FS0", "el"),
        ("el", "DA0MS0", "el"),
        ("\u{00E9}l", "PP3MS000", "\u{00E9}l"),
        ("esta", "DD0FS0", "este"),
        ("est\u{00E1}", "VMIP3S0", "estar"),
        ("casa", "NCFS000", "casa"),
        ("casa", "VMIP3S0", "casar"),
        ("cosa", "NCFS000", "cosa"),
        ("dijo", "VMIS3S0", "decir"),
        ("que", "CS", "que"),
        ("bien", "RG", "bien"),
    ])
}

/// Replacement table for the lexicon above, best first.
pub fn spanish_replacements() -> SpellerRule {
    SpellerRule::from_entries([
        ("esta", &["esta", "est\u{00E1}"][..]),
        ("el", &["el", "\u{00E9}l"][..]),
        ("la", &["la"][..]),
        ("csaa", &["casa"][..]),
    ])
}

/// Tag a whitespace-separated sentence, assigning character offsets.
pub fn tokens(lexicon: &LexiconTagger, text: &str) -> Vec<AnalyzedTokenReadings> {
    use posfilter::Tagger;

    let words: Vec<&str> = text.split_whitespace().collect();
    let tagged = lexicon.tag(&words).unwrap();
    let mut pos = 0;
    tagged
        .into_iter()
        .map(|atr| {
            let start = pos;
            pos += atr.token().chars().count() + 1;
            AnalyzedTokenReadings::new(atr.token(), start, atr.readings().to_vec())
        })
        .collect()
}

/// A rule match over `tokens`, spanning `from..to`, with suggestion templates.
pub fn rule_match(
    rule_id: &str,
    tokens: &[AnalyzedTokenReadings],
    from: usize,
    to: usize,
    templates: &[&str],
) -> Match {
    Match::new(
        rule_id,
        AnalyzedSentence::shared(tokens.to_vec()),
        from,
        to,
        "Possible confusion",
        "Confusion",
    )
    .with_suggestions(templates.iter().map(|s| s.to_string()).collect())
}
