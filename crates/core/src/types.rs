use serde::{Deserialize, Serialize};

/// Syntactic category assigned to one line of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Category {
    /// Function declaration, definition head, or function-valued assignment
    Function,
    /// Variable or field declaration
    Variable,
    /// Class, interface, struct or enum declaration
    TypeDeclaration,
    /// Import, export, from or require line
    ImportExport,
    /// Control-flow statement head
    ControlFlow,
    /// No heuristic matched
    Generic,
}

impl Category {
    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Variable => "variable",
            Self::TypeDeclaration => "type",
            Self::ImportExport => "import",
            Self::ControlFlow => "control-flow",
            Self::Generic => "generic",
        }
    }

    /// Check if this category carries an extracted identifier
    #[must_use]
    pub const fn carries_identifier(self) -> bool {
        matches!(
            self,
            Self::Function | Self::Variable | Self::TypeDeclaration
        )
    }
}

/// Flavor of a control-flow statement, derived by fixed keyword lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum ControlFlowKind {
    Conditional,
    Loop,
    Switch,
    ErrorHandling,
    /// Any other keyword in the control-flow class (else, do, case, ...)
    Other,
}

impl ControlFlowKind {
    /// Label used when synthesizing the comment text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conditional => "Conditional",
            Self::Loop => "Loop",
            Self::Switch => "Switch",
            Self::ErrorHandling => "Error handling",
            Self::Other => "Control flow",
        }
    }

    /// Map the leading keyword of a control-flow line to its kind
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "if" => Self::Conditional,
            "for" | "while" => Self::Loop,
            "switch" => Self::Switch,
            "try" => Self::ErrorHandling,
            _ => Self::Other,
        }
    }
}

/// Outcome of classifying one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,

    /// Extracted name; populated only for Function/Variable/TypeDeclaration
    pub identifier: Option<String>,

    /// Populated only for ControlFlow
    pub control_flow: Option<ControlFlowKind>,
}

impl Classification {
    /// The fallback classification: no category matched, no identifier
    #[must_use]
    pub const fn generic() -> Self {
        Self {
            category: Category::Generic,
            identifier: None,
            control_flow: None,
        }
    }

    /// Classification with an extracted identifier
    #[must_use]
    pub fn named(category: Category, identifier: impl Into<String>) -> Self {
        Self {
            category,
            identifier: Some(identifier.into()),
            control_flow: None,
        }
    }

    /// Classification without an identifier (anonymous forms)
    #[must_use]
    pub const fn anonymous(category: Category) -> Self {
        Self {
            category,
            identifier: None,
            control_flow: None,
        }
    }

    /// Control-flow classification of the given kind
    #[must_use]
    pub const fn control_flow(kind: ControlFlowKind) -> Self {
        Self {
            category: Category::ControlFlow,
            identifier: None,
            control_flow: Some(kind),
        }
    }
}

/// Per-line classifications over a span reduced to tallies.
///
/// Only the counts survive the reduction; per-line identifiers are
/// dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    /// Lines classified as Function
    pub function_count: usize,

    /// Lines classified as Variable
    pub variable_count: usize,

    /// Every line in the span, blank lines included
    pub total_lines: usize,
}

/// Borrowed view of one line: raw text, trimmed text, leading indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub raw: &'a str,
    pub trimmed: &'a str,
    pub indent: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Split a raw line into its trimmed text and leading indentation
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        let indent_len = raw.len() - raw.trim_start().len();
        Self {
            raw,
            trimmed,
            indent: &raw[..indent_len],
        }
    }
}

/// The edit handed back to the host: what to insert, where, and where the
/// caret lands afterward. Produced fresh per invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionPlan {
    /// Line the comment is inserted above (1-indexed)
    pub insert_at_line: usize,

    /// Full insertion text, indentation and line terminator included
    pub text: String,

    /// Caret line after the edit (1-indexed)
    pub caret_line: usize,

    /// Caret column after the edit (1-indexed)
    pub caret_column: usize,
}

/// What the host hands the core: a caret position or a selection span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationTarget {
    /// No selection: the line under the caret
    Caret {
        /// Caret line (1-indexed)
        line: usize,
        /// Caret column (1-indexed)
        column: usize,
        /// Raw text of that line
        line_text: String,
    },

    /// Active selection spanning one or more lines
    Selection {
        /// Line where the selection starts (1-indexed)
        start_line: usize,
        /// Column where the selection starts (1-indexed)
        start_column: usize,
        /// Verbatim selected content, internal line breaks included
        text: String,
    },
}
