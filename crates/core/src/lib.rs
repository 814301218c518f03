//! # Annotator Core
//!
//! Heuristic line classification and comment placement for source text.
//!
//! ## Philosophy
//!
//! The annotator describes code without parsing it. A small, ordered table
//! of regex heuristics assigns each line one category across C-like,
//! Java/C#-like and Python-like surface conventions, extracts an identifier
//! where one is apparent, and synthesizes a one-line comment placed above
//! the target with matching indentation. The heuristics are approximate:
//! misfires on unusual or minified code are tolerated, and anything
//! unrecognized falls back to a generic description instead of an error.
//!
//! ## Architecture
//!
//! ```text
//! Host target (caret line or selection)
//!     │
//!     ├──> Line Classifier (ordered rule table, first match wins)
//!     │        └─> category + optional identifier
//!     │
//!     ├──> Selection Summarizer (per-line tallies for multi-line spans)
//!     │
//!     └──> Comment Synthesis + Placement
//!              └─> InsertionPlan { text, insert line, caret } back to host
//! ```
//!
//! The host editing surface sits behind the [`EditorHost`] trait; the core
//! only ever returns an [`InsertionPlan`] describing the desired edit. An
//! in-memory [`TextBuffer`] host ships for tests and CLI use.
//!
//! ## Example
//!
//! ```rust
//! use annotator_core::{AnnotationTarget, Annotator};
//!
//! let annotator = Annotator::new();
//! let plan = annotator.plan_for(&AnnotationTarget::Caret {
//!     line: 3,
//!     column: 1,
//!     line_text: "    function calculateSum(a, b) {".to_string(),
//! });
//! assert_eq!(plan.text, "    // Function: calculateSum\n");
//! assert_eq!(plan.insert_at_line, 3);
//! ```

mod classifier;
mod comment;
mod engine;
mod error;
mod host;
mod placement;
mod rules;
mod selection;
mod types;

pub use classifier::classify;
pub use comment::{block_comment, line_comment, selection_comment};
pub use engine::Annotator;
pub use error::{AnnotatorError, Result};
pub use host::{EditorHost, Selection, TextBuffer};
pub use placement::{plan_insertion, COMMENT_PREFIX};
pub use selection::summarize;
pub use types::{
    AnnotationTarget, Category, Classification, ControlFlowKind, InsertionPlan, SelectionSummary,
    SourceLine,
};
