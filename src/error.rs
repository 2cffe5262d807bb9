//! Crate-level error type for the solve pipeline.
//!
//! Each pipeline stage surfaces its own error type; [`SolveError`] wraps
//! them so the single entry point reports exactly which stage failed. No
//! stage retries internally and no failure is patched over.

use crate::render::RenderError;
use crate::table::{ParseError, ValidateError};
use std::fmt;

/// Failure of one stage of the solve pipeline.
///
/// The variants are programmatically distinct so callers can react without
/// string matching. Only a [`SolveError::Render`] carrying a capacity
/// failure is worth retrying, with a larger capacity; the others describe
/// the input or, in the coverage case, the engine itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The input text matched neither grammar or was malformed.
    Parse(ParseError),
    /// The parsed truth table violated a structural invariant.
    Validate(ValidateError),
    /// The cover built by the grouping passes does not account for exactly
    /// the required minterms. A partial cover is never returned; this
    /// indicates an engine defect and is fatal to the call.
    Coverage {
        /// The minterms the table required.
        expected: u64,
        /// The minterms the cover actually accounted for.
        covered: u64,
    },
    /// The expression did not fit the requested capacity, or the variable
    /// count exceeded the renderer's alphabet.
    Render(RenderError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Parse(e) => write!(f, "Parse error: {}", e),
            SolveError::Validate(e) => write!(f, "Validation error: {}", e),
            SolveError::Coverage { expected, covered } => write!(
                f,
                "Cover mismatch: required minterms {:#x} but covered {:#x}",
                expected, covered
            ),
            SolveError::Render(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Parse(e) => Some(e),
            SolveError::Validate(e) => Some(e),
            SolveError::Coverage { .. } => None,
            SolveError::Render(e) => Some(e),
        }
    }
}

impl From<ParseError> for SolveError {
    fn from(err: ParseError) -> Self {
        SolveError::Parse(err)
    }
}

impl From<ValidateError> for SolveError {
    fn from(err: ValidateError) -> Self {
        SolveError::Validate(err)
    }
}

impl From<RenderError> for SolveError {
    fn from(err: RenderError) -> Self {
        SolveError::Render(err)
    }
}
