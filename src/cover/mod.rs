//! Implicant covers built by the grouping engine.
//!
//! A [`Solution`] is the ordered set of implicants covering exactly the
//! required minterms of one truth table. It is produced by the greedy
//! grouping passes, thinned by the subsumption pass, and then consumed
//! read-only by the expression renderer.

mod group;
mod reduce;

#[cfg(test)]
mod tests;

use crate::bits::{count_trailing_zeros, popcount};
use crate::table::TruthTable;
use crate::MAX_GROUPS;
use smallvec::SmallVec;

/// Inline storage for one solve call's implicants; never grows past
/// [`MAX_GROUPS`] because every grouping pass checks the bound before
/// emitting.
pub(crate) type ImplicantVec = SmallVec<[Implicant; MAX_GROUPS]>;

/// One product term of the cover.
///
/// `literal_mask` marks the variables appearing in the term; a variable
/// absent from the mask has been eliminated by grouping. `literal_values`
/// gives the required polarity of each masked variable (1 = uncomplemented).
/// `covered_minterms` records only the *required* minterms the term accounts
/// for — don't-care cells recruited to enlarge a group are never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Implicant {
    covered_minterms: u64,
    literal_mask: u8,
    literal_values: u8,
    size: u8,
}

impl Implicant {
    pub(crate) fn new(covered_minterms: u64, literal_mask: u8, literal_values: u8) -> Self {
        Implicant {
            covered_minterms,
            literal_mask,
            literal_values,
            size: popcount(covered_minterms) as u8,
        }
    }

    /// Bitset of the required minterms this implicant accounts for.
    pub fn covered_minterms(&self) -> u64 {
        self.covered_minterms
    }

    /// Which variables appear in the term, one bit per variable.
    pub fn literal_mask(&self) -> u8 {
        self.literal_mask
    }

    /// Polarity of each masked variable (1 = uncomplemented).
    pub fn literal_values(&self) -> u8 {
        self.literal_values
    }

    /// Number of required minterms covered; 0 marks a removed implicant.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub(crate) fn mark_redundant(&mut self) {
        self.size = 0;
    }
}

/// All variables of a `num_vars`-variable map, one bit each.
pub(crate) fn full_mask(num_vars: u8) -> u8 {
    ((1u16 << num_vars) - 1) as u8
}

/// The ordered implicant cover produced for one truth table.
///
/// Built by [`Solution::minimize`], bounded by [`MAX_GROUPS`] terms, and
/// owned entirely by the calling stack frame.
///
/// # Examples
///
/// ```
/// use kmap_solver::{Solution, TruthTable};
///
/// let table = TruthTable::parse("1X1X")?;
/// let solution = Solution::minimize(&table);
///
/// assert_eq!(solution.term_count(), 1);
/// assert_eq!(solution.covered_cells(), table.minterms());
/// # Ok::<(), kmap_solver::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solution {
    implicants: ImplicantVec,
}

impl Solution {
    /// Build a cover for `table`.
    ///
    /// An empty table yields an empty solution and a lone minterm keeps its
    /// full literal mask directly. Everything else goes through the greedy
    /// grouping passes (pairs, quads, then singles) followed by one
    /// subsumption pass. The caller is expected to have validated `table`.
    pub fn minimize(table: &TruthTable) -> Self {
        let mut implicants = ImplicantVec::new();

        if table.minterm_count() == 0 {
            return Solution { implicants };
        }

        if table.minterm_count() == 1 {
            let cell = count_trailing_zeros(table.minterms()) as u8;
            implicants.push(Implicant::new(
                table.minterms(),
                full_mask(table.num_vars()),
                cell,
            ));
            return Solution { implicants };
        }

        group::find_groups(table, &mut implicants);
        reduce::remove_subsumed(&mut implicants);

        Solution { implicants }
    }

    /// The surviving implicants, in emission order.
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    /// Whether the cover holds no implicants at all.
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// Number of product terms.
    pub fn term_count(&self) -> usize {
        self.implicants.len()
    }

    /// Total number of literals across all terms.
    pub fn literal_count(&self) -> u32 {
        self.implicants
            .iter()
            .map(|implicant| popcount(u64::from(implicant.literal_mask())))
            .sum()
    }

    /// Union of every implicant's covered minterms.
    pub fn covered_cells(&self) -> u64 {
        self.implicants
            .iter()
            .fold(0, |cells, implicant| cells | implicant.covered_minterms())
    }
}
