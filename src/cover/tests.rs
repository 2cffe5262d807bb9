//! Tests for the grouping engine and the subsumption pass.

use super::*;
use crate::table::TruthTable;
use test_log::test;

fn minterm_set(cells: &[u8]) -> u64 {
    cells.iter().fold(0, |set, &cell| set | (1u64 << cell))
}

#[test]
fn test_empty_table_yields_empty_solution() {
    let table = TruthTable::parse("0000").unwrap();
    let solution = Solution::minimize(&table);
    assert!(solution.is_empty());
    assert_eq!(solution.term_count(), 0);
    assert_eq!(solution.covered_cells(), 0);
}

#[test]
fn test_all_dont_cares_need_no_cover() {
    // Don't-cares alone never force an implicant.
    let table = TruthTable::parse("XXXX").unwrap();
    assert_eq!(table.minterm_count(), 0);
    let solution = Solution::minimize(&table);
    assert!(solution.is_empty());
}

#[test]
fn test_single_minterm_keeps_every_literal() {
    let table = TruthTable::parse("0100").unwrap(); // lone minterm at cell 2
    let solution = Solution::minimize(&table);
    assert_eq!(solution.term_count(), 1);

    let implicant = &solution.implicants()[0];
    assert_eq!(implicant.covered_minterms(), 1 << 2);
    assert_eq!(implicant.literal_mask(), 0b11);
    assert_eq!(implicant.literal_values(), 2);
    assert_eq!(implicant.size(), 1);
}

#[test]
fn test_adjacent_pair_eliminates_one_variable() {
    // Cells 1 and 3 differ only in variable B.
    let table = TruthTable::parse("1010").unwrap();
    let solution = Solution::minimize(&table);
    assert_eq!(solution.term_count(), 1);

    let implicant = &solution.implicants()[0];
    assert_eq!(implicant.covered_minterms(), minterm_set(&[1, 3]));
    assert_eq!(implicant.literal_mask(), 0b01);
    assert_eq!(implicant.literal_values(), 0b01);
    assert_eq!(implicant.size(), 2);
}

#[test]
fn test_dont_cares_enlarge_groups_but_never_count_as_covered() {
    let table = TruthTable::parse("10X1").unwrap();
    let solution = Solution::minimize(&table);

    // Cell 0 pairs with the don't-care at cell 1, eliminating variable A,
    // yet the recruited don't-care never counts as covered.
    let first = &solution.implicants()[0];
    assert_eq!(first.covered_minterms(), 1 << 0);
    assert_eq!(first.literal_mask(), 0b10);
    assert_eq!(solution.covered_cells(), table.minterms());
}

#[test]
fn test_classic_dont_care_scenario() {
    // minterms {1, 2, 5} with don't-cares {0, 4, 6} over three variables.
    let table = TruthTable::from_parts(
        minterm_set(&[1, 2, 5]),
        minterm_set(&[0, 4, 6]),
        3,
        3,
    );
    table.validate().unwrap();

    let solution = Solution::minimize(&table);
    assert_eq!(solution.covered_cells(), table.minterms());
    for implicant in solution.implicants() {
        assert_eq!(
            implicant.covered_minterms() & !table.minterms(),
            0,
            "covered cells must be a subset of the required minterms"
        );
    }

    // First-fit pairing: {1, 5} via the don't-care-free axis, then {2, 6}
    // where cell 6 is a recruited don't-care.
    assert_eq!(solution.term_count(), 2);
    assert_eq!(solution.implicants()[0].covered_minterms(), minterm_set(&[1, 5]));
    assert_eq!(solution.implicants()[1].covered_minterms(), minterm_set(&[2]));
}

#[test]
fn test_isolated_minterms_become_singles() {
    // Cells 0 and 3 are diagonal, never adjacent.
    let table = TruthTable::parse("0,3").unwrap();
    let solution = Solution::minimize(&table);
    assert_eq!(solution.term_count(), 2);
    for implicant in solution.implicants() {
        assert_eq!(implicant.size(), 1);
        assert_eq!(implicant.literal_mask(), 0b11);
    }
    assert_eq!(solution.covered_cells(), minterm_set(&[0, 3]));
}

#[test]
fn test_coverage_is_exact_across_inputs() {
    for input in [
        "1010",
        "0,3",
        "10110100",
        "1111000011110000",
        "0,1,2,3,8,9,10,11",
        "1X1X0X1X1X001X1X",
        "0,1,2,3,8,9,10,11,32,33,34,35,60,61,62,63",
    ] {
        let table = TruthTable::parse(input).unwrap();
        table.validate().unwrap();
        let solution = Solution::minimize(&table);
        assert_eq!(
            solution.covered_cells(),
            table.minterms(),
            "cover must equal the minterms exactly for {:?}",
            input
        );
        for implicant in solution.implicants() {
            assert_eq!(implicant.covered_minterms() & !table.minterms(), 0);
            assert!(implicant.size() > 0);
        }
    }
}

#[test]
fn test_checkerboard_needs_one_single_per_minterm() {
    // Even-parity cells of the 6-variable map: 32 pairwise non-adjacent
    // minterms, the worst case for the group bound.
    let minterms = (0u8..64)
        .filter(|cell| cell.count_ones() % 2 == 0)
        .fold(0u64, |set, cell| set | (1 << cell));
    let table = TruthTable::from_parts(minterms, 0, 6, 32);
    table.validate().unwrap();

    let solution = Solution::minimize(&table);
    assert_eq!(solution.term_count(), MAX_GROUPS);
    assert_eq!(solution.covered_cells(), minterms);
    assert_eq!(solution.literal_count(), 32 * 6);
}

#[test]
fn test_solution_counts() {
    let table = TruthTable::parse("0,3").unwrap();
    let solution = Solution::minimize(&table);
    assert_eq!(solution.term_count(), 2);
    // Two singles over two variables keep every literal.
    assert_eq!(solution.literal_count(), 4);
}

#[test]
fn test_subsumption_removes_strictly_smaller_subsets() {
    let mut implicants: ImplicantVec = ImplicantVec::new();
    implicants.push(Implicant::new(minterm_set(&[1, 5]), 0b011, 0b001));
    implicants.push(Implicant::new(minterm_set(&[5]), 0b111, 0b101));
    implicants.push(Implicant::new(minterm_set(&[2]), 0b111, 0b010));

    reduce::remove_subsumed(&mut implicants);

    // The lone {5} is inside {1, 5}; the {2} survives, order preserved.
    assert_eq!(implicants.len(), 2);
    assert_eq!(implicants[0].covered_minterms(), minterm_set(&[1, 5]));
    assert_eq!(implicants[1].covered_minterms(), minterm_set(&[2]));
}

#[test]
fn test_subsumption_keeps_equal_sets() {
    // Equal covered sets are not strictly larger, so neither is removed.
    let mut implicants: ImplicantVec = ImplicantVec::new();
    implicants.push(Implicant::new(minterm_set(&[1, 3]), 0b01, 0b01));
    implicants.push(Implicant::new(minterm_set(&[1, 3]), 0b10, 0b10));

    reduce::remove_subsumed(&mut implicants);
    assert_eq!(implicants.len(), 2);
}

#[test]
fn test_subsumption_is_single_pass() {
    // A chain a ⊂ b ⊂ c resolves the direct links found in one sweep but
    // does not iterate to a fixpoint.
    let mut implicants: ImplicantVec = ImplicantVec::new();
    implicants.push(Implicant::new(minterm_set(&[1]), 0b111, 0b001));
    implicants.push(Implicant::new(minterm_set(&[1, 3]), 0b011, 0b001));
    implicants.push(Implicant::new(minterm_set(&[1, 3, 5, 7]), 0b001, 0b001));

    reduce::remove_subsumed(&mut implicants);

    // Both smaller sets are direct subsets of the largest, so one sweep
    // already removes them here.
    assert_eq!(implicants.len(), 1);
    assert_eq!(
        implicants[0].covered_minterms(),
        minterm_set(&[1, 3, 5, 7])
    );
}

#[test]
fn test_grouping_passes_emit_disjoint_covers() {
    // Cells leave the pool once grouped, so covered sets never overlap.
    for input in ["10110100", "1111000011110000", "1X1X0X1X1X001X1X"] {
        let table = TruthTable::parse(input).unwrap();
        let mut groups = ImplicantVec::new();
        group::find_groups(&table, &mut groups);

        let mut seen = 0u64;
        for implicant in &groups {
            assert_eq!(seen & implicant.covered_minterms(), 0);
            seen |= implicant.covered_minterms();
        }
        assert_eq!(seen, table.minterms());
    }
}
