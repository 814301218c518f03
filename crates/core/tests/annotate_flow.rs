use annotator_core::{Annotator, Selection, TextBuffer};
use pretty_assertions::assert_eq;

fn annotate(buf: &mut TextBuffer) {
    Annotator::new()
        .run(buf)
        .expect("apply failed")
        .expect("expected a plan");
}

#[test]
fn caret_annotation_inserts_above_and_keeps_indentation() {
    let mut buf = TextBuffer::from_text(
        "class Router {\n    handleRequest(req, res) {\n        route(req);\n    }\n}\n",
    );
    buf.set_caret(2, 5).unwrap();
    annotate(&mut buf);

    assert_eq!(
        buf.text(),
        "class Router {\n    // Function: handleRequest\n    handleRequest(req, res) {\n        route(req);\n    }\n}\n"
    );
    // Caret sits at the end of the inserted comment.
    assert_eq!(buf.caret(), (2, 4 + "// Function: handleRequest".len() + 1));
}

#[test]
fn selection_annotation_describes_the_block() {
    let mut buf = TextBuffer::from_text(
        "function setup() {\nfunction teardown() {\nconst fixture = 1;\n",
    );
    buf.select_lines(1, 3).unwrap();
    annotate(&mut buf);

    assert_eq!(buf.line(1), Some("// Code block with 2 functions"));
    assert_eq!(buf.line(2), Some("function setup() {"));
    assert_eq!(buf.line_count(), 4);
}

#[test]
fn single_line_selection_of_a_function_keeps_its_name() {
    let mut buf = TextBuffer::from_text("def compute(values):\n    return sum(values)\n");
    buf.select(Selection {
        start_line: 1,
        start_column: 1,
        end_line: 1,
        end_column: 21,
    })
    .unwrap();
    annotate(&mut buf);
    assert_eq!(buf.line(1), Some("// Function: compute"));

    // The same shape over a variable line stays generic.
    let mut buf = TextBuffer::from_text("const limit = 10;\n");
    buf.select(Selection {
        start_line: 1,
        start_column: 1,
        end_line: 1,
        end_column: 18,
    })
    .unwrap();
    annotate(&mut buf);
    assert_eq!(buf.line(1), Some("// Selected code block"));
}

#[test]
fn annotating_twice_stacks_two_comments() {
    let mut buf = TextBuffer::from_text("    let total = 0;\n");
    buf.set_caret(1, 1).unwrap();
    annotate(&mut buf);

    // The target line moved down by one; re-annotate it.
    buf.set_caret(2, 1).unwrap();
    annotate(&mut buf);

    assert_eq!(
        buf.text(),
        "    // Variable: total\n    // Variable: total\n    let total = 0;\n"
    );
}

#[test]
fn generic_line_gets_the_todo_comment() {
    let mut buf = TextBuffer::from_text("x += 1;\n");
    buf.set_caret(1, 1).unwrap();
    annotate(&mut buf);
    assert_eq!(buf.text(), "// TODO: Add description\nx += 1;\n");
}

#[test]
fn import_block_selection_counts_lines() {
    let mut buf = TextBuffer::from_text(
        "import fs from \"fs\";\nimport path from \"path\";\n\nconst cache = {};\n",
    );
    buf.select_lines(1, 3).unwrap();
    annotate(&mut buf);
    // Imports and the blank line carry no function/variable tally.
    assert_eq!(buf.line(1), Some("// Code block (3 lines)"));
}
