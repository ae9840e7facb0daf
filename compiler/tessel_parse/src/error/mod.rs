//! Parse errors and the messages attached to "expected type" failures.

use tessel_diagnostic::{Diagnostic, ErrorCode, Suggestion};
use tessel_ir::Span;

/// Which "expected type" message a caller wants when no type can start
/// at the current token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TypeMessage {
    #[default]
    ExpectedType,
    /// After `->`.
    ExpectedFunctionResult,
    /// Inside `<...>`.
    ExpectedGenericArgument,
    /// An unlabeled tuple element.
    ExpectedTupleElement,
}

impl TypeMessage {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeMessage::ExpectedType => "expected type",
            TypeMessage::ExpectedFunctionResult => "expected type for function result",
            TypeMessage::ExpectedGenericArgument => "expected type in generic argument list",
            TypeMessage::ExpectedTupleElement => "expected type in tuple element",
        }
    }
}

/// Which "expected expression" message a caller wants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ExprMessage {
    #[default]
    ExpectedExpr,
    /// Between the brackets of `T[...]`.
    ArraySize,
    /// After `=` in a tuple element.
    Initializer,
}

impl ExprMessage {
    pub fn as_str(self) -> &'static str {
        match self {
            ExprMessage::ExpectedExpr => "expected expression",
            ExprMessage::ArraySize => "expected expression for size of array type",
            ExprMessage::Initializer => "expected initial value after `=`",
        }
    }
}

/// Parse error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Related locations, such as the delimiter a missing close would match.
    pub labels: Vec<(Span, String)>,
    /// Source range the error is about when it differs from `span`.
    pub highlight: Option<Span>,
    /// Source range whose deletion fixes the error.
    pub removal: Option<Span>,
    /// Optional context for the primary label.
    pub context: Option<String>,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            labels: Vec::new(),
            highlight: None,
            removal: None,
            context: None,
        }
    }

    /// Lift a diagnostic built by one of the `tessel_diagnostic` helpers.
    pub fn from_diagnostic(diag: &Diagnostic) -> Self {
        let primary = diag.labels.iter().find(|label| label.is_primary);
        ParseError {
            code: diag.code,
            message: diag.message.clone(),
            span: diag.primary_span().unwrap_or(Span::DUMMY),
            labels: diag
                .labels
                .iter()
                .filter(|label| !label.is_primary)
                .map(|label| (label.span, label.message.clone()))
                .collect(),
            highlight: None,
            removal: None,
            context: primary.map(|label| label.message.clone()),
        }
    }

    /// `close` was expected at `at` to match `open`.
    #[cold]
    pub fn unclosed(open: Span, at: Span, delimiter: char) -> Self {
        Self::from_diagnostic(&tessel_diagnostic::unclosed_delimiter(open, at, delimiter))
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push((span, message.into()));
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, span: Span) -> Self {
        self.highlight = Some(span);
        self
    }

    #[must_use]
    pub fn with_removal(mut self, span: Span) -> Self {
        self.removal = Some(span);
        self
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"));
        for (span, message) in &self.labels {
            diag = diag.with_secondary_label(*span, message);
        }
        if let Some(span) = self.highlight {
            diag = diag.with_secondary_label(span, "");
        }
        if let Some(span) = self.removal {
            diag = diag.with_suggestion(Suggestion::removal("remove this", span));
        }
        diag
    }
}
