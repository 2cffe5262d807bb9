//! Error types for truth table parsing and validation.

use std::fmt;
use std::sync::Arc;

/// Errors produced while parsing input text into a truth table.
///
/// Each variant names a distinct way the text can be malformed, so callers
/// can react programmatically instead of matching on messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty after skipping leading whitespace.
    EmptyInput,
    /// The input matched neither the minterm-list nor the pattern grammar.
    UnrecognizedFormat,
    /// A minterm-list token was not a non-negative decimal integer.
    InvalidMinterm {
        /// The offending token, as written.
        token: Arc<str>,
    },
    /// A minterm index does not fit in the largest supported map.
    MintermOutOfRange {
        /// The parsed value.
        value: u64,
        /// The highest valid cell index.
        max: u8,
    },
    /// A pattern string's length is not a supported power of two.
    InvalidPatternLength {
        /// The actual length.
        length: usize,
    },
    /// A pattern string contains a character outside `0`, `1`, `X`, `x`, `-`.
    InvalidPatternCharacter {
        /// The offending character.
        character: char,
        /// Byte position in the pattern, counted from the left.
        position: usize,
    },
    /// The derived variable count exceeds the supported bound.
    TooManyVariables {
        /// The derived variable count.
        num_vars: u8,
        /// The largest supported count.
        max: u8,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Input is empty"),
            ParseError::UnrecognizedFormat => write!(
                f,
                "Input is neither a comma-separated minterm list nor a 0/1/X pattern string"
            ),
            ParseError::InvalidMinterm { token } => {
                write!(f, "Invalid minterm token {:?}", token)
            }
            ParseError::MintermOutOfRange { value, max } => {
                write!(f, "Minterm {} out of range (valid range: 0..={})", value, max)
            }
            ParseError::InvalidPatternLength { length } => write!(
                f,
                "Pattern length {} is not a power of two matching 2 to 6 variables",
                length
            ),
            ParseError::InvalidPatternCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid pattern character '{}' at position {}",
                character, position
            ),
            ParseError::TooManyVariables { num_vars, max } => write!(
                f,
                "Input requires {} variables but at most {} are supported",
                num_vars, max
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Violations of the structural invariants of a constructed truth table.
///
/// These indicate a table that must not be solved; nothing is silently
/// corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// The variable count lies outside the supported range.
    VariableCountOutOfRange {
        /// The recorded variable count.
        num_vars: u8,
    },
    /// A cell is marked both minterm and don't-care.
    MintermDontCareOverlap {
        /// Bitset of the overlapping cells.
        overlap: u64,
    },
    /// A minterm or don't-care bit lies beyond the map's cells.
    CellIndexOutOfRange {
        /// Bitset of the out-of-range bits.
        stray: u64,
        /// The table's variable count.
        num_vars: u8,
    },
    /// The recorded minterm count disagrees with the minterm bitset.
    MintermCountMismatch {
        /// The recorded count.
        recorded: u8,
        /// The population count of the minterm bitset.
        actual: u8,
    },
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateError::VariableCountOutOfRange { num_vars } => {
                write!(f, "Variable count {} outside supported range 2..=6", num_vars)
            }
            ValidateError::MintermDontCareOverlap { overlap } => write!(
                f,
                "Minterms and don't-cares overlap (cells {:#x})",
                overlap
            ),
            ValidateError::CellIndexOutOfRange { stray, num_vars } => write!(
                f,
                "Cells {:#x} lie outside the {}-variable map",
                stray, num_vars
            ),
            ValidateError::MintermCountMismatch { recorded, actual } => write!(
                f,
                "Recorded minterm count {} does not match the minterm set ({} bits)",
                recorded, actual
            ),
        }
    }
}

impl std::error::Error for ValidateError {}
