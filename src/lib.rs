//! # K-Map Solver
//!
//! This crate minimizes a partially-specified Boolean function into a compact
//! sum-of-products (SOP) expression, the classic Karnaugh-map reduction. The
//! function is given as a truth table over 2 to 6 variables, where each cell
//! is required-true (a *minterm*), required-false, or a *don't-care* that the
//! minimizer may set either way to enlarge groups.
//!
//! ## Quick Start
//!
//! The whole pipeline is a single call taking a truth-table string and
//! returning the minimized expression:
//!
//! ```
//! let expression = kmap_solver::solve("1010")?;
//! assert_eq!(expression, "A");
//! # Ok::<(), kmap_solver::SolveError>(())
//! ```
//!
//! Don't-cares (`X`, `x` or `-`) let the solver form larger groups:
//!
//! ```
//! // Cells 1 and 3 must be true, cells 0 and 2 may be anything.
//! let expression = kmap_solver::solve("1X1X")?;
//! assert_eq!(expression, "A");
//! # Ok::<(), kmap_solver::SolveError>(())
//! ```
//!
//! ## Input Formats
//!
//! Two grammars are recognized, distinguished by the presence of a comma:
//!
//! - **Minterm list** — comma-separated cell indices that are true, e.g.
//!   `"0,1,3,5"`. The variable count is derived from the highest index.
//! - **Pattern string** — one character per cell, most significant cell
//!   first, e.g. `"10X1"`. `1` marks a minterm, `0` a required zero, and
//!   `X`/`x`/`-` a don't-care. The length must be a power of two matching a
//!   variable count in range.
//!
//! ```
//! let expression = kmap_solver::solve("0,3")?;
//! assert_eq!(expression, "~A&~B + A&B");
//! # Ok::<(), kmap_solver::SolveError>(())
//! ```
//!
//! ## Staged API
//!
//! The pipeline stages are public for callers that want the intermediate
//! artifacts — the parsed [`TruthTable`], the implicant [`Solution`], or a
//! Gray-ordered ASCII rendering of the map:
//!
//! ```
//! use kmap_solver::{Solution, TruthTable};
//!
//! let table = TruthTable::parse("0,1,3,5")?;
//! table.validate().expect("parser output is always structurally valid");
//!
//! let solution = Solution::minimize(&table);
//! assert_eq!(solution.covered_cells(), table.minterms());
//! # Ok::<(), kmap_solver::ParseError>(())
//! ```
//!
//! ## Errors
//!
//! Every failure is reported, never patched: malformed input surfaces a
//! parse error, a broken table invariant a validation error, and an
//! undersized output capacity a render error that the caller may retry with
//! a larger capacity. See [`SolveError`].
//!
//! ## Concurrency
//!
//! Every solve call is synchronous, reentrant and side-effect-free: all
//! working state is call-local and bounded by [`MAX_VARIABLES`] and
//! [`MAX_GROUPS`], so independent calls may run on independent threads
//! without synchronization.
//!
//! ## Minimization Quality
//!
//! The grouping engine is a deterministic greedy heuristic (pairs, then
//! quads, then singles, first-fit in ascending cell order), not exhaustive
//! Quine–McCluskey prime-implicant enumeration. It always produces a valid
//! cover of exactly the required minterms, but not necessarily one with the
//! minimum literal count.

pub mod bits;
pub mod cover;
pub mod display;
pub mod error;
pub mod render;
pub mod solver;
pub mod table;

pub use cover::{Implicant, Solution};
pub use display::ascii_map;
pub use error::SolveError;
pub use render::{RenderError, VARIABLE_NAMES};
pub use solver::{solve, solve_with_capacity};
pub use table::{ParseError, TruthTable, ValidateError};

/// Smallest supported variable count.
pub const MIN_VARIABLES: u8 = 2;

/// Largest supported variable count for a truth table.
pub const MAX_VARIABLES: u8 = 6;

/// Cell count of the largest supported map (`2^MAX_VARIABLES`).
pub const MAX_CELLS: u8 = 1 << MAX_VARIABLES;

/// Upper bound on the number of implicants in one solution.
pub const MAX_GROUPS: usize = 32;

/// Default output capacity, in bytes, used by [`solve`].
pub const MAX_EXPRESSION_LEN: usize = 1024;
