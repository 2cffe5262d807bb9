//! Sum-of-products rendering of a solution.
//!
//! Each implicant becomes one product term; terms are joined by `" + "` and
//! literals within a term by `"&"`, with `"~"` prefixing a complemented
//! variable. An empty solution renders as `"0"` and a term with no literals
//! as `"1"`. Output is bounded by a caller-supplied capacity and rendering
//! fails — it never truncates — as soon as a token would not fit.

mod error;

pub use error::RenderError;

use crate::cover::Solution;

/// Variable names, variable 0 (the least-significant index bit) first.
///
/// The alphabet is deliberately longer than the truth table's variable
/// bound, leaving the renderer headroom it does not otherwise use.
pub const VARIABLE_NAMES: &str = "ABCDEFGH";

impl Solution {
    /// Render this solution as an SOP expression of `num_vars` variables.
    ///
    /// `capacity` bounds the length of the produced expression in bytes.
    /// The rendering fails with [`RenderError::CapacityExceeded`] before
    /// appending any token that would not fit, and with
    /// [`RenderError::TooManyVariables`] when `num_vars` exceeds the
    /// variable-name alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_solver::{Solution, TruthTable};
    ///
    /// let table = TruthTable::parse("0,3")?;
    /// let solution = Solution::minimize(&table);
    /// let expression = solution.to_sop(table.num_vars(), 1024).unwrap();
    /// assert_eq!(expression, "~A&~B + A&B");
    /// # Ok::<(), kmap_solver::ParseError>(())
    /// ```
    pub fn to_sop(&self, num_vars: u8, capacity: usize) -> Result<String, RenderError> {
        if usize::from(num_vars) > VARIABLE_NAMES.len() {
            return Err(RenderError::TooManyVariables {
                num_vars,
                max: VARIABLE_NAMES.len() as u8,
            });
        }

        let mut out = String::new();

        if self.is_empty() {
            push_checked(&mut out, "0", capacity)?;
            return Ok(out);
        }

        for (index, implicant) in self.implicants().iter().enumerate() {
            if index > 0 {
                push_checked(&mut out, " + ", capacity)?;
            }

            let mut first_literal = true;
            for var in 0..num_vars {
                let bit = 1u8 << var;
                if implicant.literal_mask() & bit == 0 {
                    continue;
                }
                if !first_literal {
                    push_checked(&mut out, "&", capacity)?;
                }
                if implicant.literal_values() & bit == 0 {
                    push_checked(&mut out, "~", capacity)?;
                }
                let var = usize::from(var);
                push_checked(&mut out, &VARIABLE_NAMES[var..var + 1], capacity)?;
                first_literal = false;
            }

            // Every variable eliminated: the term is identically true.
            if first_literal {
                push_checked(&mut out, "1", capacity)?;
            }
        }

        Ok(out)
    }
}

fn push_checked(out: &mut String, token: &str, capacity: usize) -> Result<(), RenderError> {
    let needed = out.len() + token.len();
    if needed > capacity {
        return Err(RenderError::CapacityExceeded { needed, capacity });
    }
    out.push_str(token);
    Ok(())
}
