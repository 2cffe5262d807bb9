//! Error types for expression rendering.

use std::fmt;

/// Failures while rendering a solution into an SOP expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The next token would push the expression past the given capacity.
    ///
    /// Nothing partial is returned; the caller may retry with a capacity of
    /// at least `needed` bytes (more may still be required for the tokens
    /// after the one that failed).
    CapacityExceeded {
        /// Length the expression would have reached with the next token.
        needed: usize,
        /// The capacity the caller supplied.
        capacity: usize,
    },
    /// The variable count exceeds the variable-name alphabet.
    TooManyVariables {
        /// The requested variable count.
        num_vars: u8,
        /// Length of the alphabet.
        max: u8,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::CapacityExceeded { needed, capacity } => write!(
                f,
                "Expression needs at least {} bytes but the capacity is {}",
                needed, capacity
            ),
            RenderError::TooManyVariables { num_vars, max } => write!(
                f,
                "Cannot render {} variables with a {}-name alphabet",
                num_vars, max
            ),
        }
    }
}

impl std::error::Error for RenderError {}
