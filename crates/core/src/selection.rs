use crate::classifier::classify;
use crate::types::{Category, SelectionSummary};

/// Tally per-line classifications over a selection span.
///
/// The span is split on `\n`; every piece counts toward `total_lines`,
/// blank lines included, so a selection ending in a line break contributes
/// a final blank line just as it does in an editor. Only function and
/// variable counts survive; per-line identifiers are deliberately
/// discarded.
#[must_use]
pub fn summarize(text: &str) -> SelectionSummary {
    let mut summary = SelectionSummary::default();
    for line in text.split('\n') {
        summary.total_lines += 1;
        match classify(line).category {
            Category::Function => summary.function_count += 1,
            Category::Variable => summary.variable_count += 1,
            _ => {}
        }
    }
    summary
}
