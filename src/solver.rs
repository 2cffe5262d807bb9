//! The solve pipeline.
//!
//! One strictly linear sequence per call: parse, validate, trivial-case
//! shortcuts, grouping, coverage check, rendering. Any stage failure aborts
//! the call with that stage's error; later stages never run on suspect
//! data. All state is local to the call, so concurrent solves need no
//! synchronization.

use crate::cover::Solution;
use crate::error::SolveError;
use crate::render::RenderError;
use crate::table::TruthTable;
use crate::MAX_EXPRESSION_LEN;
use log::{debug, trace};

/// Minimize the function described by `input` into an SOP expression.
///
/// Equivalent to [`solve_with_capacity`] with the default capacity of
/// [`MAX_EXPRESSION_LEN`] bytes, which fits any expression the solver can
/// produce within its variable and group bounds.
///
/// # Examples
///
/// ```
/// assert_eq!(kmap_solver::solve("1010")?, "A");
/// assert_eq!(kmap_solver::solve("0000")?, "0");
/// assert_eq!(kmap_solver::solve("XXXX")?, "0");
/// assert_eq!(kmap_solver::solve("1111")?, "1");
/// # Ok::<(), kmap_solver::SolveError>(())
/// ```
pub fn solve(input: &str) -> Result<String, SolveError> {
    solve_with_capacity(input, MAX_EXPRESSION_LEN)
}

/// Minimize `input` with an explicit bound on the expression length.
///
/// A [`SolveError::Render`] carrying a capacity failure means the result
/// did not fit; the call can be repeated with a larger `capacity`. No
/// partial expression is ever returned.
pub fn solve_with_capacity(input: &str, capacity: usize) -> Result<String, SolveError> {
    let table = TruthTable::parse(input)?;
    table.validate()?;
    trace!(
        "solving {} vars: minterms {:#x}, dont_cares {:#x}",
        table.num_vars(),
        table.minterms(),
        table.dont_cares()
    );

    // Trivial cases need no grouping: nothing required, or everything is.
    if table.minterm_count() == 0 {
        return constant("0", capacity);
    }
    if table.minterms() == table.cell_mask() {
        return constant("1", capacity);
    }

    let solution = Solution::minimize(&table);
    debug!(
        "cover built: {} terms, {} literals",
        solution.term_count(),
        solution.literal_count()
    );

    // Hard post-condition on grouping and elimination: the cover accounts
    // for the required minterms exactly, never more, never less.
    let covered = solution.covered_cells();
    if covered != table.minterms() {
        return Err(SolveError::Coverage {
            expected: table.minterms(),
            covered,
        });
    }

    solution
        .to_sop(table.num_vars(), capacity)
        .map_err(SolveError::from)
}

fn constant(value: &'static str, capacity: usize) -> Result<String, SolveError> {
    if value.len() > capacity {
        return Err(SolveError::Render(RenderError::CapacityExceeded {
            needed: value.len(),
            capacity,
        }));
    }
    Ok(value.to_string())
}
