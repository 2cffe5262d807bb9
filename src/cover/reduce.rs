//! Subsumption pass over the implicant list.
//!
//! One O(n²) sweep: an implicant is dropped when its covered minterms are a
//! subset of a strictly larger implicant's. Removal marks the loser first
//! (`size = 0`) and compacts afterwards, preserving the relative order of
//! the survivors. A single sweep only — a subsumption chain longer than one
//! link is left as-is.

use super::ImplicantVec;
use log::debug;

pub(super) fn remove_subsumed(implicants: &mut ImplicantVec) {
    for i in 0..implicants.len() {
        if implicants[i].size() == 0 {
            continue;
        }
        for j in 0..implicants.len() {
            if i == j || implicants[j].size() == 0 {
                continue;
            }
            let small = implicants[i].covered_minterms();
            let large = implicants[j].covered_minterms();
            if small & large == small && implicants[j].size() > implicants[i].size() {
                debug!("implicant covering {:#x} subsumed by {:#x}", small, large);
                implicants[i].mark_redundant();
                break;
            }
        }
    }

    implicants.retain(|implicant| implicant.size() > 0);
}
