//! The host seam and the in-memory reference host.
//!
//! The annotator never mutates an editing surface directly: it reads one
//! target through [`EditorHost::capture_target`] and hands the mutation back
//! as an [`InsertionPlan`] via [`EditorHost::apply`]. Undo history, rendering
//! and buffer ownership stay on the host side of the seam.

use crate::error::{AnnotatorError, Result};
use crate::types::{AnnotationTarget, InsertionPlan};

/// The editing surface the annotator runs against.
pub trait EditorHost {
    /// Current caret line or selection, or `None` when no buffer is active.
    fn capture_target(&self) -> Option<AnnotationTarget>;

    /// Apply the planned edit as one atomic insertion and move the caret.
    fn apply(&mut self, plan: &InsertionPlan) -> Result<()>;
}

/// Selection span inside a [`TextBuffer`]. Columns are 1-indexed and
/// end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// In-memory line buffer implementing [`EditorHost`].
///
/// Lines are stored without terminators; lines and columns are 1-indexed.
/// This is the reference host used by the CLI and the test suite.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    caret: (usize, usize),
    selection: Option<Selection>,
    trailing_newline: bool,
}

impl TextBuffer {
    /// Build a buffer from text. An empty input becomes a single empty line,
    /// matching how editors present an empty document.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(String::from).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            caret: (1, 1),
            selection: None,
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Number of lines in the buffer
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Raw text of a line (1-indexed)
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// Current caret position as `(line, column)`, 1-indexed
    #[must_use]
    pub const fn caret(&self) -> (usize, usize) {
        self.caret
    }

    /// Move the caret, clearing any selection
    pub fn set_caret(&mut self, line: usize, column: usize) -> Result<()> {
        if line == 0 || line > self.lines.len() {
            return Err(AnnotatorError::out_of_range(line, self.lines.len()));
        }
        self.caret = (line, column.max(1));
        self.selection = None;
        Ok(())
    }

    /// Activate a selection span
    pub fn select(&mut self, selection: Selection) -> Result<()> {
        let line_count = self.lines.len();
        for line in [selection.start_line, selection.end_line] {
            if line == 0 || line > line_count {
                return Err(AnnotatorError::out_of_range(line, line_count));
            }
        }
        if selection.start_line > selection.end_line
            || (selection.start_line == selection.end_line
                && selection.start_column >= selection.end_column)
        {
            return Err(AnnotatorError::invalid_selection(format!(
                "start {}:{} does not precede end {}:{}",
                selection.start_line,
                selection.start_column,
                selection.end_line,
                selection.end_column
            )));
        }
        self.selection = Some(selection);
        Ok(())
    }

    /// Select whole lines from `start_line` through `end_line` inclusive
    pub fn select_lines(&mut self, start_line: usize, end_line: usize) -> Result<()> {
        let end_text = self
            .line(end_line)
            .ok_or_else(|| AnnotatorError::out_of_range(end_line, self.lines.len()))?;
        let end_column = end_text.chars().count() + 1;
        self.select(Selection {
            start_line,
            start_column: 1,
            end_line,
            end_column,
        })
    }

    /// Drop the active selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Verbatim text covered by the active selection, internal line breaks
    /// included
    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        let selection = self.selection?;
        if selection.start_line == selection.end_line {
            let line = self.line(selection.start_line)?;
            return Some(slice_columns(
                line,
                selection.start_column,
                Some(selection.end_column),
            ));
        }

        let mut parts = Vec::new();
        parts.push(slice_columns(
            self.line(selection.start_line)?,
            selection.start_column,
            None,
        ));
        for line in (selection.start_line + 1)..selection.end_line {
            parts.push(self.line(line)?.to_string());
        }
        parts.push(slice_columns(
            self.line(selection.end_line)?,
            1,
            Some(selection.end_column),
        ));
        Some(parts.join("\n"))
    }

    /// Render the buffer back to text
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }
}

/// Column slice over characters, 1-indexed, end-exclusive. `None` means the
/// rest of the line.
fn slice_columns(line: &str, from: usize, to: Option<usize>) -> String {
    let skip = from.saturating_sub(1);
    let chars = line.chars().skip(skip);
    match to {
        Some(to) => chars.take(to.saturating_sub(1).saturating_sub(skip)).collect(),
        None => chars.collect(),
    }
}

impl EditorHost for TextBuffer {
    fn capture_target(&self) -> Option<AnnotationTarget> {
        if let Some(selection) = self.selection {
            let text = self.selected_text()?;
            return Some(AnnotationTarget::Selection {
                start_line: selection.start_line,
                start_column: selection.start_column,
                text,
            });
        }
        let (line, column) = self.caret;
        let line_text = self.line(line)?.to_string();
        Some(AnnotationTarget::Caret {
            line,
            column,
            line_text,
        })
    }

    fn apply(&mut self, plan: &InsertionPlan) -> Result<()> {
        if plan.insert_at_line == 0 || plan.insert_at_line > self.lines.len() + 1 {
            return Err(AnnotatorError::out_of_range(
                plan.insert_at_line,
                self.lines.len(),
            ));
        }
        for (offset, piece) in plan.text.split_terminator('\n').enumerate() {
            self.lines
                .insert(plan.insert_at_line - 1 + offset, piece.to_string());
        }
        self.caret = (plan.caret_line, plan.caret_column);
        self.selection = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> TextBuffer {
        TextBuffer::from_text("function one() {\n    let x = 1;\n}\n")
    }

    #[test]
    fn from_text_and_render_round_trip() {
        let buf = buffer();
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line(2), Some("    let x = 1;"));
        assert_eq!(buf.line(4), None);
        assert_eq!(buf.text(), "function one() {\n    let x = 1;\n}\n");

        let no_newline = TextBuffer::from_text("a\nb");
        assert_eq!(no_newline.text(), "a\nb");

        let empty = TextBuffer::from_text("");
        assert_eq!(empty.line_count(), 1);
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn caret_target_carries_the_line_text() {
        let mut buf = buffer();
        buf.set_caret(2, 5).unwrap();
        let target = buf.capture_target().unwrap();
        assert_eq!(
            target,
            AnnotationTarget::Caret {
                line: 2,
                column: 5,
                line_text: "    let x = 1;".to_string(),
            }
        );
    }

    #[test]
    fn selection_target_extracts_verbatim_text() {
        let mut buf = buffer();
        buf.select_lines(1, 3).unwrap();
        let target = buf.capture_target().unwrap();
        let AnnotationTarget::Selection {
            start_line,
            start_column,
            text,
        } = target
        else {
            panic!("expected a selection target");
        };
        assert_eq!(start_line, 1);
        assert_eq!(start_column, 1);
        assert_eq!(text, "function one() {\n    let x = 1;\n}");
    }

    #[test]
    fn selection_honors_columns() {
        let mut buf = TextBuffer::from_text("alpha beta\ngamma delta\n");
        buf.select(Selection {
            start_line: 1,
            start_column: 7,
            end_line: 2,
            end_column: 6,
        })
        .unwrap();
        assert_eq!(buf.selected_text().as_deref(), Some("beta\ngamma"));

        buf.select(Selection {
            start_line: 1,
            start_column: 1,
            end_line: 1,
            end_column: 6,
        })
        .unwrap();
        assert_eq!(buf.selected_text().as_deref(), Some("alpha"));
    }

    #[test]
    fn select_rejects_degenerate_spans() {
        let mut buf = buffer();
        assert!(buf
            .select(Selection {
                start_line: 2,
                start_column: 3,
                end_line: 2,
                end_column: 3,
            })
            .is_err());
        assert!(buf.select_lines(1, 9).is_err());
    }

    #[test]
    fn apply_inserts_above_and_moves_caret() {
        let mut buf = buffer();
        buf.apply(&InsertionPlan {
            insert_at_line: 2,
            text: "    // Variable: x\n".to_string(),
            caret_line: 2,
            caret_column: 19,
        })
        .unwrap();
        assert_eq!(buf.line(2), Some("    // Variable: x"));
        assert_eq!(buf.line(3), Some("    let x = 1;"));
        assert_eq!(buf.line_count(), 4);
        assert_eq!(buf.caret(), (2, 19));
    }

    #[test]
    fn apply_rejects_out_of_range_lines() {
        let mut buf = buffer();
        let err = buf
            .apply(&InsertionPlan {
                insert_at_line: 99,
                text: "// nope\n".to_string(),
                caret_line: 99,
                caret_column: 1,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            AnnotatorError::LineOutOfRange { line: 99, .. }
        ));
    }
}
