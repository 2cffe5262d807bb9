//! Greedy don't-care-aware grouping over the map's hypercube.
//!
//! Three passes in fixed order: adjacent pairs, then 4-cell rectangles for
//! whatever the pairs left uncovered, then single cells for the rest. Every
//! pass walks cells in ascending index order and takes the first fit — no
//! backtracking and no search for a better pairing. Don't-care cells may
//! join any group but only required minterms count as covered, so a group
//! is only emitted when it covers at least one of them.

use super::{full_mask, Implicant, ImplicantVec};
use crate::bits::{are_adjacent, popcount};
use crate::table::TruthTable;
use crate::MAX_GROUPS;
use log::debug;

pub(super) fn find_groups(table: &TruthTable, groups: &mut ImplicantVec) {
    let minterms = table.minterms();
    let num_vars = table.num_vars();
    let total_cells = table.num_cells() as u8;
    let all_vars = full_mask(num_vars);

    // Required cells not yet covered, and cells still free to join a group.
    let mut remaining = minterms;
    let mut available = minterms | table.dont_cares();

    // Pass 1: pairs. Each group is seeded on an uncovered required minterm
    // and takes the first adjacent available partner above it.
    'pairs: for cell1 in 0..total_cells {
        if groups.len() >= MAX_GROUPS {
            break;
        }
        if available & (1u64 << cell1) == 0 || remaining & (1u64 << cell1) == 0 {
            continue;
        }
        for cell2 in cell1 + 1..total_cells {
            if available & (1u64 << cell2) == 0 {
                continue;
            }
            if !are_adjacent(cell1, cell2, num_vars) {
                continue;
            }
            let pair = (1u64 << cell1) | (1u64 << cell2);
            let covered = pair & minterms;
            if covered == 0 {
                continue;
            }
            let mask = all_vars & !(cell1 ^ cell2);
            debug!(
                "pair group {{{}, {}}} covers {:#x}, mask {:#04b}",
                cell1, cell2, covered, mask
            );
            groups.push(Implicant::new(covered, mask, cell1 & mask));
            remaining &= !covered;
            // Both cells leave the pool so later groups cannot reuse them.
            available &= !pair;
            continue 'pairs;
        }
    }

    // Pass 2: quads for the minterms the pairs left behind. An ascending
    // 4-tuple qualifies when cell2 is adjacent to cell1, cell3 to either,
    // the four indices flip exactly two variables overall, and the
    // rectangle check below agrees.
    'quads: for cell1 in 0..total_cells {
        if groups.len() >= MAX_GROUPS || remaining == 0 {
            break;
        }
        if remaining & (1u64 << cell1) == 0 {
            continue;
        }
        for cell2 in cell1 + 1..total_cells {
            if !are_adjacent(cell1, cell2, num_vars) {
                continue;
            }
            if available & (1u64 << cell2) == 0 {
                continue;
            }
            for cell3 in cell2 + 1..total_cells {
                if !are_adjacent(cell1, cell3, num_vars) && !are_adjacent(cell2, cell3, num_vars) {
                    continue;
                }
                if available & (1u64 << cell3) == 0 {
                    continue;
                }
                for cell4 in cell3 + 1..total_cells {
                    if available & (1u64 << cell4) == 0 {
                        continue;
                    }
                    let diff_bits = cell1 ^ cell2 ^ cell3 ^ cell4;
                    if popcount(u64::from(diff_bits)) != 2
                        || !is_rectangle(cell1, cell2, cell3, cell4)
                    {
                        continue;
                    }
                    let quad = (1u64 << cell1)
                        | (1u64 << cell2)
                        | (1u64 << cell3)
                        | (1u64 << cell4);
                    let covered = quad & minterms;
                    if covered == 0 {
                        continue;
                    }
                    let mask = all_vars & !diff_bits;
                    debug!(
                        "quad group {{{}, {}, {}, {}}} covers {:#x}, mask {:#04b}",
                        cell1, cell2, cell3, cell4, covered, mask
                    );
                    groups.push(Implicant::new(covered, mask, cell1 & mask));
                    remaining &= !covered;
                    available &= !quad;
                    continue 'quads;
                }
            }
        }
    }

    // Pass 3: whatever is still uncovered stands alone with every literal.
    for cell in 0..total_cells {
        if groups.len() >= MAX_GROUPS {
            break;
        }
        if remaining & (1u64 << cell) != 0 {
            debug!("single cell {} kept as its own implicant", cell);
            groups.push(Implicant::new(1u64 << cell, all_vars, cell));
        }
    }
}

/// Rectangle consistency for a candidate quad: the differences between the
/// anchor cell and each other cell must be non-zero, with at least one of
/// the three difference pairings sharing no bit.
fn is_rectangle(cell1: u8, cell2: u8, cell3: u8, cell4: u8) -> bool {
    let diff2 = cell1 ^ cell2;
    let diff3 = cell1 ^ cell3;
    let diff4 = cell1 ^ cell4;

    diff2 != 0
        && diff3 != 0
        && diff4 != 0
        && (diff2 & diff3 == 0 || diff2 & diff4 == 0 || diff3 & diff4 == 0)
}
