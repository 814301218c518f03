//! Comment synthesis: classification outcomes to literal comment bodies.
//!
//! Bodies carry no comment delimiters; decoration is a placement concern.

use crate::classifier::classify;
use crate::selection::summarize;
use crate::types::{Category, Classification, ControlFlowKind, SelectionSummary};

/// Comment body for a single classified line.
#[must_use]
pub fn line_comment(classification: &Classification) -> String {
    match classification.category {
        Category::Function => match &classification.identifier {
            Some(name) => format!("Function: {name}"),
            None => "Function definition".to_string(),
        },
        Category::Variable => match &classification.identifier {
            Some(name) => format!("Variable: {name}"),
            None => "Variable declaration".to_string(),
        },
        // Interfaces, structs and enums all share the "Class" label.
        Category::TypeDeclaration => match &classification.identifier {
            Some(name) => format!("Class: {name}"),
            None => "Class definition".to_string(),
        },
        Category::ImportExport => "Module import/export".to_string(),
        Category::ControlFlow => {
            let kind = classification
                .control_flow
                .unwrap_or(ControlFlowKind::Other);
            format!("{} statement", kind.label())
        }
        Category::Generic => "TODO: Add description".to_string(),
    }
}

/// Comment body for a multi-line tally.
///
/// Function lines dominate variable lines: a span containing both is
/// reported only by its function count. A span with neither is described by
/// its line count.
#[must_use]
pub fn block_comment(summary: &SelectionSummary) -> String {
    if summary.function_count > 0 {
        format!(
            "Code block with {} function{}",
            summary.function_count,
            plural(summary.function_count)
        )
    } else if summary.variable_count > 0 {
        format!(
            "Code block with {} variable{}",
            summary.variable_count,
            plural(summary.variable_count)
        )
    } else {
        format!("Code block ({} lines)", summary.total_lines)
    }
}

/// Comment body for a selection span.
///
/// A one-line selection is re-classified so a lone function keeps its name;
/// any other single line gets the generic selection label, even where the
/// caret path would have described it more precisely.
#[must_use]
pub fn selection_comment(text: &str) -> String {
    let summary = summarize(text);
    if summary.total_lines == 1 {
        let single = classify(text.split('\n').next().unwrap_or_default());
        if single.category == Category::Function {
            return line_comment(&single);
        }
        return "Selected code block".to_string();
    }
    block_comment(&summary)
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
