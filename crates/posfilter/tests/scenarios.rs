//! Table-driven scenarios loaded from `tests/fixtures/scenarios.json`.
//!
//! Each scenario describes a sentence, the match span, the filter arguments
//! and the expected suggestions. `"expected": null` means the match is
//! discarded.
//!
//! Run: cargo test -p posfilter --test scenarios

mod common;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde::Deserialize;

use posfilter::oracle::SpellerRule;
use posfilter::tagger::LexiconTagger;
use posfilter::{RuleFilter, SuggestionFilter};

use common::{init_test_tracing, rule_match, tokens};

#[derive(Debug, Deserialize)]
struct Fixture {
    lexicon: Vec<(String, String, String)>,
    replacements: HashMap<String, Vec<String>>,
    scenarios: Vec<Scenario>,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    sentence: String,
    from: usize,
    to: usize,
    arguments: HashMap<String, String>,
    templates: Vec<String>,
    expected: Option<Vec<String>>,
}

fn load_fixture() -> Fixture {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scenarios.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

fn lexicon(fixture: &Fixture) -> LexiconTagger {
    LexiconTagger::from_entries(
        fixture
            .lexicon
            .iter()
            .map(|(w, p, l)| (w.as_str(), p.as_str(), l.as_str())),
    )
}

fn speller_rule(fixture: &Fixture) -> SpellerRule {
    let mut rule = SpellerRule::new();
    for (word, replacements) in &fixture.replacements {
        let replacements: Vec<&str> = replacements.iter().map(String::as_str).collect();
        rule.insert(word, &replacements);
    }
    rule
}

#[test]
fn fixture_scenarios() {
    init_test_tracing();
    let fixture = load_fixture();
    let lexicon = Arc::new(lexicon(&fixture));
    let filter = SuggestionFilter::new(Arc::clone(&lexicon), speller_rule(&fixture));

    for scenario in &fixture.scenarios {
        let toks = tokens(&lexicon, &scenario.sentence);
        let templates: Vec<&str> = scenario.templates.iter().map(String::as_str).collect();
        let m = rule_match("SCENARIO", &toks, scenario.from, scenario.to, &templates);

        let out = filter
            .accept_rule_match(&m, &scenario.arguments, 0, &toks)
            .unwrap_or_else(|e| panic!("scenario '{}' failed: {}", scenario.name, e));
        let actual = out.map(|m| m.suggested_replacements().to_vec());

        assert_eq!(actual, scenario.expected, "scenario '{}'", scenario.name);
    }
}

#[test]
fn fixture_lexicon_is_consistent_with_helpers() {
    let fixture = load_fixture();
    let from_fixture = lexicon(&fixture);
    let from_helper = common::spanish_lexicon();
    assert_eq!(from_fixture.len(), from_helper.len());
    for (word, _, _) in &fixture.lexicon {
        assert!(from_helper.contains(word), "missing {word}");
    }

    let rule = speller_rule(&fixture);
    let helper_rule = common::spanish_replacements();
    for word in ["est\u{00E4}", "\u{00EB}l", "l\u{00E4}", "csaa"] {
        assert_eq!(rule.suggest(word), helper_rule.suggest(word), "{word}");
    }
}
