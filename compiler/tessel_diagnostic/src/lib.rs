//! Diagnostic system for structured error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels (related locations such as an opening delimiter)
//! - Suggestions (how to fix, including removals)

mod diagnostic;
mod error_code;

pub use diagnostic::{
    expected_expression, unclosed_delimiter, unexpected_token, Diagnostic, Label, Severity,
    Substitution, Suggestion,
};
pub use error_code::ErrorCode;
