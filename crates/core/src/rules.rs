//! The heuristic rule table.
//!
//! Each rule is a named `(matcher)` entry; [`RULES`] fixes the evaluation
//! order and the first match wins, so earlier rules take priority wherever
//! patterns overlap (function forms before variable forms, declarations
//! before import/export, import/export before control flow). Every pattern
//! is line-anchored, case-insensitive and runs against the trimmed line.
//!
//! The rules span C-like, Java/C#-like and Python-like surface conventions
//! without parsing any of them; misfires on unusual code are expected and
//! tolerated.

use crate::types::{Category, Classification, ControlFlowKind};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// One heuristic: a stable name for diagnostics plus a matcher that returns
/// the classification when the rule fires.
pub(crate) struct Rule {
    pub name: &'static str,
    pub matcher: fn(&str) -> Option<Classification>,
}

/// Ordered rule table. Evaluation stops at the first match.
pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "function-keyword",
        matcher: function_keyword,
    },
    Rule {
        name: "arrow-assignment",
        matcher: arrow_assignment,
    },
    Rule {
        name: "method-shorthand",
        matcher: method_shorthand,
    },
    Rule {
        name: "bare-definition",
        matcher: bare_definition,
    },
    Rule {
        name: "typed-method",
        matcher: typed_method,
    },
    Rule {
        name: "python-def",
        matcher: python_def,
    },
    Rule {
        name: "keyword-declaration",
        matcher: keyword_declaration,
    },
    Rule {
        name: "typed-field",
        matcher: typed_field,
    },
    Rule {
        name: "type-declaration",
        matcher: type_declaration,
    },
    Rule {
        name: "import-export",
        matcher: import_export,
    },
    Rule {
        name: "control-flow",
        matcher: control_flow,
    },
];

fn insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("rule pattern must compile")
}

/// Statement keywords that can look like a call head or a type name. The
/// regex crate has no lookahead, so captures are vetted after the fact.
const RESERVED: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "try", "catch",
    "finally", "return", "throw", "new", "await", "yield", "typeof", "delete",
    "in", "of", "assert", "elif", "except", "raise", "with", "not",
];

/// Keywords that open a declaration handled by a more specific rule.
const DECLARATION_KEYWORDS: &[&str] =
    &["class", "interface", "struct", "enum", "def", "function"];

fn is_reserved(word: &str) -> bool {
    RESERVED.iter().any(|kw| word.eq_ignore_ascii_case(kw))
}

fn is_declaration_keyword(word: &str) -> bool {
    DECLARATION_KEYWORDS
        .iter()
        .any(|kw| word.eq_ignore_ascii_case(kw))
}

static FUNCTION_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    insensitive(
        r"^(?:export\s+)?(?:async\s+)?function\b\s*\*?\s*([A-Za-z_$][A-Za-z0-9_$]*)?\s*\(",
    )
});

/// `function <name>(`, plus anonymous, exported, async and generator forms.
fn function_keyword(line: &str) -> Option<Classification> {
    let caps = FUNCTION_KEYWORD.captures(line)?;
    Some(match caps.get(1) {
        Some(name) => Classification::named(Category::Function, name.as_str()),
        None => Classification::anonymous(Category::Function),
    })
}

static ARROW_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    insensitive(
        r"^(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s*)?\(",
    )
});

/// `const <name> = (`. The open paren must follow the `=` directly, so a
/// plain value assignment (`const s = "x"`) stays out of the function bucket.
fn arrow_assignment(line: &str) -> Option<Classification> {
    let caps = ARROW_ASSIGNMENT.captures(line)?;
    Some(Classification::named(Category::Function, &caps[1]))
}

static METHOD_SHORTHAND: Lazy<Regex> = Lazy::new(|| {
    insensitive(r"^([A-Za-z_$][A-Za-z0-9_$]*)\s*:\s*(?:async\s+)?function\b")
});

/// Object-method shorthand `<name>: function`.
fn method_shorthand(line: &str) -> Option<Classification> {
    let caps = METHOD_SHORTHAND.captures(line)?;
    Some(Classification::named(Category::Function, &caps[1]))
}

static BARE_DEFINITION: Lazy<Regex> =
    Lazy::new(|| insensitive(r"^([A-Za-z_$][A-Za-z0-9_$]*)\s*\([^)]*\)\s*\{"));

/// Call-shaped definition head `<name>(args) {`. The trailing brace keeps
/// plain call statements (`doSomething();`) unclassified.
fn bare_definition(line: &str) -> Option<Classification> {
    let caps = BARE_DEFINITION.captures(line)?;
    let name = caps.get(1)?.as_str();
    if is_reserved(name) || is_declaration_keyword(name) {
        return None;
    }
    Some(Classification::named(Category::Function, name))
}

static TYPED_METHOD: Lazy<Regex> = Lazy::new(|| {
    insensitive(
        r"^(?:(?:public|private|protected|internal)\s+)?(?:static\s+)?([A-Za-z_][A-Za-z0-9_<>\[\]]*)\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(",
    )
});

/// C-family method declaration `[visibility] [static] <ReturnType> <name>(`.
fn typed_method(line: &str) -> Option<Classification> {
    let caps = TYPED_METHOD.captures(line)?;
    let return_type = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str();
    if is_reserved(return_type) || is_declaration_keyword(return_type) || is_reserved(name) {
        return None;
    }
    Some(Classification::named(Category::Function, name))
}

static PYTHON_DEF: Lazy<Regex> =
    Lazy::new(|| insensitive(r"^(?:async\s+)?def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\("));

/// Python-style `def <name>(`.
fn python_def(line: &str) -> Option<Classification> {
    let caps = PYTHON_DEF.captures(line)?;
    Some(Classification::named(Category::Function, &caps[1]))
}

static KEYWORD_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    insensitive(
        r"^(?:var|let|const|int|uint|long|short|byte|float|double|decimal|char|bool|boolean|string)\s+([A-Za-z_$][A-Za-z0-9_$]*)",
    )
});

/// Keyword-led declaration `(var|let|const|<primitive-type>) <name>`.
fn keyword_declaration(line: &str) -> Option<Classification> {
    let caps = KEYWORD_DECLARATION.captures(line)?;
    Some(Classification::named(Category::Variable, &caps[1]))
}

static TYPED_FIELD: Lazy<Regex> = Lazy::new(|| {
    insensitive(
        r"^(?:(?:public|private|protected|internal)\s+)?(?:static\s+)?(?:final\s+|readonly\s+)?([A-Za-z_][A-Za-z0-9_<>\[\]]*)\s+([A-Za-z_][A-Za-z0-9_]*)\s*[=;]",
    )
});

/// Typed field `[visibility] [static] <Type> <name> =|;`.
fn typed_field(line: &str) -> Option<Classification> {
    let caps = TYPED_FIELD.captures(line)?;
    let field_type = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str();
    if is_reserved(field_type) || is_declaration_keyword(field_type) || is_reserved(name) {
        return None;
    }
    Some(Classification::named(Category::Variable, name))
}

static TYPE_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    insensitive(
        r"^(?:(?:public|private|protected|internal)\s+)?(?:abstract\s+)?(?:final\s+)?(?:class|interface|struct|enum)\s+([A-Za-z_][A-Za-z0-9_]*)",
    )
});

/// `(class|interface|struct|enum) <name>`, with optional modifiers.
fn type_declaration(line: &str) -> Option<Classification> {
    let caps = TYPE_DECLARATION.captures(line)?;
    Some(Classification::named(Category::TypeDeclaration, &caps[1]))
}

static IMPORT_EXPORT: Lazy<Regex> =
    Lazy::new(|| insensitive(r"^(?:import|export|from|require)\b"));

/// Line opening with an import/export keyword. No identifier is extracted.
fn import_export(line: &str) -> Option<Classification> {
    if IMPORT_EXPORT.is_match(line) {
        Some(Classification::anonymous(Category::ImportExport))
    } else {
        None
    }
}

static CONTROL_FLOW: Lazy<Regex> = Lazy::new(|| {
    insensitive(r"^(if|else|for|while|do|switch|case|try|catch|finally)\s*[({]")
});

/// Control-flow keyword followed by `(` or `{`.
fn control_flow(line: &str) -> Option<Classification> {
    let caps = CONTROL_FLOW.captures(line)?;
    Some(Classification::control_flow(ControlFlowKind::from_keyword(
        &caps[1],
    )))
}
