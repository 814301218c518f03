use crate::rules::RULES;
use crate::types::Classification;

/// Classify one line of source text.
///
/// Matching runs against the trimmed line; leading whitespace is never a
/// signal. The walk over the rule table stops at the first match, so rule
/// order is the priority contract. Total: every input yields exactly one
/// classification, with `Generic` as the fallback.
#[must_use]
pub fn classify(text: &str) -> Classification {
    let trimmed = text.trim();
    for rule in RULES {
        if let Some(classification) = (rule.matcher)(trimmed) {
            log::trace!(
                "rule `{}` classified line as {}",
                rule.name,
                classification.category.as_str()
            );
            return classification;
        }
    }
    Classification::generic()
}
