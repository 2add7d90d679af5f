//! Parse failure values.
//!
//! Grammar mismatches travel as [`ParseError`] values, never as panics. The
//! same shape carries configuration errors (a misconfigured primitive, an
//! empty `sequence` list) so callers handle every failure uniformly.
//!
//! When the `diagnostics` feature is enabled, [`ParseError`] integrates with
//! `miette` for rich terminal reporting.

use crate::state::{Pos, State};
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// The outcome of running a parser: the matched value paired with the
/// advanced state, or a [`ParseError`] describing the failure point.
pub type ParseResult<'s, T> = Result<(T, State<'s>), ParseError>;

/// A structured parse failure.
///
/// Carries a human-readable message, the ordered set of expected-token
/// descriptions (possibly empty), and the position the failure occurred at.
/// Alternation uses `expected` to report every named option it tried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
#[cfg_attr(feature = "diagnostics", diagnostic(code(quill::parse_error)))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message} at {pos}")]
pub struct ParseError {
    /// What went wrong
    pub message: String,
    /// Descriptions of the tokens that would have been accepted here
    pub expected: Vec<String>,
    /// Where the failure occurred
    pub pos: Pos,
}

impl ParseError {
    /// A grammar mismatch at `pos`.
    pub fn new(message: impl Into<String>, pos: Pos) -> Self {
        Self {
            message: message.into(),
            expected: Vec::new(),
            pos,
        }
    }

    /// A configuration error: the parser itself was constructed with invalid
    /// arguments. Reported as a value rather than a panic so that callers
    /// branch on one channel.
    pub fn config(message: impl Into<String>, pos: Pos) -> Self {
        Self::new(message, pos)
    }

    /// Attach the expected-token descriptions.
    #[must_use]
    pub fn expected(mut self, expected: Vec<String>) -> Self {
        self.expected = expected;
        self
    }
}
