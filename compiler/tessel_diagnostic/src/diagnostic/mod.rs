//! Core diagnostic types for structured error reporting.

use std::fmt;

use tessel_ir::Span;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Replace the text at `span` with `snippet`. An empty snippet is a removal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Substitution {
    pub span: Span,
    pub snippet: String,
}

impl Substitution {
    pub fn new(span: Span, snippet: impl Into<String>) -> Self {
        Substitution {
            span,
            snippet: snippet.into(),
        }
    }

    pub fn is_removal(&self) -> bool {
        self.snippet.is_empty()
    }
}

/// A structured fix. Every suggestion the parser emits is safe to apply
/// mechanically.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggestion {
    pub message: String,
    pub substitutions: Vec<Substitution>,
}

impl Suggestion {
    /// Create a removal of `span`.
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Suggestion {
            message: message.into(),
            substitutions: vec![Substitution::new(span, "")],
        }
    }

    /// Apply every substitution to `source`, returning the edited text.
    ///
    /// Substitutions are applied right to left so earlier spans stay valid.
    /// Returns `None` if any span falls outside `source` or off a char
    /// boundary.
    pub fn apply(&self, source: &str) -> Option<String> {
        let mut subs: Vec<&Substitution> = self.substitutions.iter().collect();
        subs.sort_by_key(|s| std::cmp::Reverse(s.span.start));
        let mut out = source.to_owned();
        for sub in subs {
            let range = sub.span.to_range();
            if range.end > out.len()
                || !out.is_char_boundary(range.start)
                || !out.is_char_boundary(range.end)
            {
                return None;
            }
            out.replace_range(range, &sub.snippet);
        }
        Some(out)
    }
}

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with everything needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: String::new(),
            labels: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// First primary label's span.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {:?}: {}", marker, label.span, label.message)?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {}", suggestion.message)?;
        }

        Ok(())
    }
}

/// Create an "unexpected token" diagnostic.
pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("unexpected token: expected {expected}, found {found}"))
        .with_label(span, format!("expected {expected}"))
}

/// Create an "expected expression" diagnostic.
pub fn expected_expression(span: Span, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("expected expression, found {found}"))
        .with_label(span, "expected expression here")
}

/// Create an "unclosed delimiter" diagnostic.
pub fn unclosed_delimiter(open_span: Span, close_span: Span, delimiter: char) -> Diagnostic {
    let expected = match delimiter {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        _ => delimiter,
    };
    Diagnostic::error(ErrorCode::E1003)
        .with_message(format!("expected `{expected}` to close `{delimiter}`"))
        .with_label(close_span, format!("expected `{expected}`"))
        .with_secondary_label(open_span, format!("`{delimiter}` opened here"))
}
