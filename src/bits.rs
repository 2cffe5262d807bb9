//! Bit-level utilities over map cell indices.
//!
//! Cells of an `n`-variable map are identified by their linear index in
//! `0..2^n`, one bit per variable with variable 0 in the least-significant
//! position. Two cells are adjacent when their indices differ in exactly one
//! bit — hypercube adjacency is independent of how a map is drawn, so the
//! visual Gray-code layout never enters the minimization itself. The Gray
//! conversions here exist for index mapping and display only.

/// Number of set bits in a 64-bit value.
#[inline]
pub fn popcount(value: u64) -> u32 {
    value.count_ones()
}

/// Index of the lowest set bit (count of trailing zeros).
#[inline]
pub fn count_trailing_zeros(value: u64) -> u32 {
    value.trailing_zeros()
}

// Gray-code lookup tables for the small maps.
const GRAY_2VAR: [u8; 4] = [0, 1, 3, 2];
const GRAY_3VAR: [u8; 8] = [0, 1, 3, 2, 6, 7, 5, 4];
const GRAY_4VAR: [u8; 16] = [0, 1, 3, 2, 6, 7, 5, 4, 12, 13, 15, 14, 10, 11, 9, 8];

// Reverse tables for Gray to linear conversion.
const LINEAR_2VAR: [u8; 4] = [0, 1, 3, 2];
const LINEAR_3VAR: [u8; 8] = [0, 1, 3, 2, 7, 6, 4, 5];
const LINEAR_4VAR: [u8; 16] = [0, 1, 3, 2, 7, 6, 4, 5, 15, 14, 12, 13, 8, 9, 11, 10];

/// Convert a linear cell index to its Gray-code position.
///
/// Tables cover the 2–4 variable maps; 5 and 6 variables use the algorithmic
/// form. An out-of-range index maps to 0.
pub fn linear_to_gray(linear: u8, num_vars: u8) -> u8 {
    if u32::from(linear) >= (1u32 << num_vars) {
        return 0;
    }
    match num_vars {
        2 => GRAY_2VAR[linear as usize],
        3 => GRAY_3VAR[linear as usize],
        4 => GRAY_4VAR[linear as usize],
        5 | 6 => linear ^ (linear >> 1),
        _ => 0,
    }
}

/// Convert a Gray-code position back to its linear cell index.
///
/// Inverse of [`linear_to_gray`] for every index within `0..2^num_vars`.
pub fn gray_to_linear(gray: u8, num_vars: u8) -> u8 {
    if u32::from(gray) >= (1u32 << num_vars) {
        return 0;
    }
    match num_vars {
        2 => LINEAR_2VAR[gray as usize],
        3 => LINEAR_3VAR[gray as usize],
        4 => LINEAR_4VAR[gray as usize],
        5 | 6 => {
            let mut result = gray;
            for i in 1..num_vars {
                result ^= gray >> i;
            }
            result
        }
        _ => 0,
    }
}

/// Whether two cells disagree on exactly one variable.
///
/// Both indices must lie within the `num_vars`-variable map; anything out of
/// range is never adjacent.
pub fn are_adjacent(cell1: u8, cell2: u8, num_vars: u8) -> bool {
    let cells = 1u32 << num_vars;
    if u32::from(cell1) >= cells || u32::from(cell2) >= cells {
        return false;
    }
    popcount(u64::from(cell1 ^ cell2)) == 1
}
