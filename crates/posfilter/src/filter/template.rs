// Substitution of candidates into suggestion templates

use super::MAX_SUGGESTIONS;

/// Placeholder replaced by each candidate in a suggestion template.
pub const SUGGESTION_PLACEHOLDER: &str = "{suggestion}";

/// Returns `true` if any template contains the placeholder.
pub fn has_placeholder(templates: &[String]) -> bool {
    templates.iter().any(|t| t.contains(SUGGESTION_PLACEHOLDER))
}

/// Build the final suggestion list from templates and candidates.
///
/// A template with the placeholder expands once per candidate, in
/// candidate order; other templates are carried through verbatim. When no
/// template has the placeholder the candidates are appended as they are.
/// Candidate-derived entries stop once the output holds
/// [`MAX_SUGGESTIONS`] entries.
pub fn expand_templates(templates: &[String], candidates: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut placeholder_used = false;

    for template in templates {
        if template.contains(SUGGESTION_PLACEHOLDER) {
            placeholder_used = true;
            for candidate in candidates {
                if out.len() >= MAX_SUGGESTIONS {
                    break;
                }
                out.push(template.replace(SUGGESTION_PLACEHOLDER, candidate));
            }
        } else {
            out.push(template.clone());
        }
    }

    if !placeholder_used {
        let room = MAX_SUGGESTIONS.saturating_sub(out.len());
        out.extend(candidates.iter().take(room).cloned());
    }
    out
}
