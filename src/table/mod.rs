//! Truth table parsing and validation.
//!
//! A [`TruthTable`] is built once per solve call from one of the two textual
//! grammars and is immutable afterwards. Parsing and validation are separate
//! stages: the parser only rejects malformed text, while [`TruthTable::validate`]
//! checks the structural invariants of the constructed table and reports any
//! violation instead of correcting it.

mod error;

pub use error::{ParseError, ValidateError};


use crate::bits::popcount;
use crate::{MAX_CELLS, MAX_VARIABLES, MIN_VARIABLES};
use std::sync::Arc;

/// A partially-specified Boolean function over 2 to 6 variables.
///
/// Cells are addressed by their linear index; bit `i` of [`minterms`] marks
/// cell `i` as required-true and bit `i` of [`dont_cares`] marks it as free.
/// A cell in neither set is required-false.
///
/// [`minterms`]: TruthTable::minterms
/// [`dont_cares`]: TruthTable::dont_cares
///
/// # Examples
///
/// ```
/// use kmap_solver::TruthTable;
///
/// let table = TruthTable::parse("10X1")?;
/// assert_eq!(table.num_vars(), 2);
/// assert_eq!(table.minterms(), 0b1001);
/// assert_eq!(table.dont_cares(), 0b0010);
/// # Ok::<(), kmap_solver::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTable {
    minterms: u64,
    dont_cares: u64,
    num_vars: u8,
    minterm_count: u8,
}

impl TruthTable {
    /// Parse an input string in either supported grammar.
    ///
    /// Leading whitespace is skipped and empty input fails. A comma selects
    /// the minterm-list grammar; otherwise the input must be a pattern string
    /// restricted to `0`, `1`, `X`, `x` and `-`. Anything else is an
    /// unrecognized format.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_solver::TruthTable;
    ///
    /// let from_list = TruthTable::parse("1,3")?;
    /// let from_pattern = TruthTable::parse("1010")?;
    /// assert_eq!(from_list, from_pattern);
    /// # Ok::<(), kmap_solver::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim_start();
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if input.contains(',') {
            Self::parse_minterm_list(input)
        } else if input.chars().all(|c| matches!(c, '0' | '1' | 'X' | 'x' | '-')) {
            Self::parse_pattern(input)
        } else {
            Err(ParseError::UnrecognizedFormat)
        }
    }

    /// Pattern grammar: one character per cell, most significant cell first,
    /// so the character at position `i` addresses cell `len - 1 - i`.
    fn parse_pattern(input: &str) -> Result<Self, ParseError> {
        let len = input.len();
        if len > usize::from(MAX_CELLS) {
            return Err(ParseError::InvalidPatternLength { length: len });
        }

        // Smallest variable count whose map is at least as long as the input;
        // the length must then match that map exactly.
        let mut num_vars: u8 = 0;
        while (1usize << num_vars) < len {
            num_vars += 1;
        }
        if (1usize << num_vars) != len || !(MIN_VARIABLES..=MAX_VARIABLES).contains(&num_vars) {
            return Err(ParseError::InvalidPatternLength { length: len });
        }

        let mut minterms = 0u64;
        let mut dont_cares = 0u64;
        let mut minterm_count = 0u8;
        for (position, character) in input.chars().enumerate() {
            let bit = 1u64 << (len - 1 - position);
            match character {
                '1' => {
                    minterms |= bit;
                    minterm_count += 1;
                }
                '0' => {}
                'X' | 'x' | '-' => dont_cares |= bit,
                _ => {
                    return Err(ParseError::InvalidPatternCharacter {
                        character,
                        position,
                    })
                }
            }
        }

        Ok(TruthTable {
            minterms,
            dont_cares,
            num_vars,
            minterm_count,
        })
    }

    /// Minterm-list grammar: comma-separated decimal cell indices.
    ///
    /// Each token may carry leading whitespace; any other non-digit content
    /// fails, as does an index outside the largest supported map. The minterm
    /// count records the number of tokens, so a duplicated index produces a
    /// count mismatch that [`TruthTable::validate`] reports.
    fn parse_minterm_list(input: &str) -> Result<Self, ParseError> {
        let mut minterms = 0u64;
        let mut minterm_count = 0u8;
        let mut max_minterm = 0u8;

        for raw in input.split(',') {
            let token = raw.trim_start();
            let value: u64 = token.parse().map_err(|_| ParseError::InvalidMinterm {
                token: Arc::from(raw),
            })?;
            if value >= u64::from(MAX_CELLS) {
                return Err(ParseError::MintermOutOfRange {
                    value,
                    max: MAX_CELLS - 1,
                });
            }
            let minterm = value as u8;
            max_minterm = max_minterm.max(minterm);
            minterms |= 1u64 << minterm;
            minterm_count = minterm_count.saturating_add(1);
        }

        // Smallest variable count whose map holds the highest listed cell.
        let mut num_vars = MIN_VARIABLES;
        while (1u32 << num_vars) <= u32::from(max_minterm) {
            num_vars += 1;
        }
        if num_vars > MAX_VARIABLES {
            return Err(ParseError::TooManyVariables {
                num_vars,
                max: MAX_VARIABLES,
            });
        }

        Ok(TruthTable {
            minterms,
            dont_cares: 0,
            num_vars,
            minterm_count,
        })
    }

    /// Assemble a table directly from its raw parts.
    ///
    /// No invariant is checked here; call [`TruthTable::validate`] on the
    /// result before handing it to the solver.
    pub fn from_parts(minterms: u64, dont_cares: u64, num_vars: u8, minterm_count: u8) -> Self {
        TruthTable {
            minterms,
            dont_cares,
            num_vars,
            minterm_count,
        }
    }

    /// Check every structural invariant, reporting the first violation.
    ///
    /// Checked in order: the variable count bound, disjointness of minterms
    /// and don't-cares, both bitsets fitting within the map, and the recorded
    /// minterm count matching the population count of the minterm set.
    pub fn validate(&self) -> Result<(), ValidateError> {
        if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&self.num_vars) {
            return Err(ValidateError::VariableCountOutOfRange {
                num_vars: self.num_vars,
            });
        }

        let overlap = self.minterms & self.dont_cares;
        if overlap != 0 {
            return Err(ValidateError::MintermDontCareOverlap { overlap });
        }

        let stray = (self.minterms | self.dont_cares) & !self.cell_mask();
        if stray != 0 {
            return Err(ValidateError::CellIndexOutOfRange {
                stray,
                num_vars: self.num_vars,
            });
        }

        let actual = popcount(self.minterms) as u8;
        if self.minterm_count != actual {
            return Err(ValidateError::MintermCountMismatch {
                recorded: self.minterm_count,
                actual,
            });
        }

        Ok(())
    }

    /// Bitset of required-true cells.
    pub fn minterms(&self) -> u64 {
        self.minterms
    }

    /// Bitset of don't-care cells.
    pub fn dont_cares(&self) -> u64 {
        self.dont_cares
    }

    /// Number of variables, 2 to 6 for a valid table.
    pub fn num_vars(&self) -> u8 {
        self.num_vars
    }

    /// Recorded number of minterms.
    pub fn minterm_count(&self) -> u8 {
        self.minterm_count
    }

    /// Number of cells in this map (`2^num_vars`).
    pub fn num_cells(&self) -> u32 {
        1u32 << self.num_vars
    }

    /// Mask selecting every cell of this map.
    pub fn cell_mask(&self) -> u64 {
        let cells = self.num_cells();
        if cells >= 64 {
            u64::MAX
        } else {
            (1u64 << cells) - 1
        }
    }

    /// Whether `cell` is required-true.
    pub fn is_minterm(&self, cell: u8) -> bool {
        u32::from(cell) < self.num_cells() && self.minterms & (1u64 << cell) != 0
    }

    /// Whether `cell` is a don't-care.
    pub fn is_dont_care(&self, cell: u8) -> bool {
        u32::from(cell) < self.num_cells() && self.dont_cares & (1u64 << cell) != 0
    }
}
