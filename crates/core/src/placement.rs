use crate::types::{InsertionPlan, SourceLine};

/// Comment prefix used for every synthesized annotation.
pub const COMMENT_PREFIX: &str = "// ";

/// Build the insertion edit placing `comment` above `target_line`
/// (1-indexed).
///
/// The comment line copies the target line's leading indentation so the
/// annotation aligns with the code it describes. The caret lands at the end
/// of the inserted comment, on the line the comment now occupies. Nothing
/// else in the buffer is touched, and repeated invocations stack comments:
/// the planner has no memory of earlier runs.
#[must_use]
pub fn plan_insertion(target_line: usize, raw_text: &str, comment: &str) -> InsertionPlan {
    let line = SourceLine::new(raw_text);
    let body = format!("{COMMENT_PREFIX}{comment}");
    InsertionPlan {
        insert_at_line: target_line,
        text: format!("{}{body}\n", line.indent),
        caret_line: target_line,
        caret_column: line.indent.len() + body.len() + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_four_space_indentation() {
        let plan = plan_insertion(7, "    const x = 1;", "Variable: x");
        assert_eq!(plan.insert_at_line, 7);
        assert_eq!(plan.text, "    // Variable: x\n");
        assert_eq!(plan.caret_line, 7);
        assert_eq!(plan.caret_column, 4 + "// Variable: x".len() + 1);
    }

    #[test]
    fn flush_left_line_gets_no_indent() {
        let plan = plan_insertion(1, "function main() {", "Function: main");
        assert_eq!(plan.text, "// Function: main\n");
        assert_eq!(plan.caret_column, "// Function: main".len() + 1);
    }

    #[test]
    fn tab_indentation_is_copied_verbatim() {
        let plan = plan_insertion(3, "\t\tlet y = 2;", "Variable: y");
        assert_eq!(plan.text, "\t\t// Variable: y\n");
        // Columns count characters, tabs included.
        assert_eq!(plan.caret_column, 2 + "// Variable: y".len() + 1);
    }

    #[test]
    fn blank_target_line_still_gets_a_plan() {
        let plan = plan_insertion(5, "", "TODO: Add description");
        assert_eq!(plan.text, "// TODO: Add description\n");
        assert_eq!(plan.insert_at_line, 5);
    }
}
