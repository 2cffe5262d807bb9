//! Static ASCII rendering of a map grid.
//!
//! Rows and columns follow Gray-code order, so cells adjacent in the grid
//! are adjacent on the hypercube. Display only — the solver itself never
//! consults the layout.

use crate::bits::linear_to_gray;
use crate::table::TruthTable;

/// Render `table` as a Gray-ordered ASCII grid.
///
/// Cells show `1` for a minterm, `X` for a don't-care and `0` otherwise.
/// Grids are drawn for 2 to 4 variables; larger maps return `None`.
///
/// # Examples
///
/// ```
/// use kmap_solver::{ascii_map, TruthTable};
///
/// let table = TruthTable::parse("10X1")?;
/// let grid = ascii_map(&table).unwrap();
/// assert!(grid.starts_with("K-Map for 2 variables:"));
/// # Ok::<(), kmap_solver::ParseError>(())
/// ```
pub fn ascii_map(table: &TruthTable) -> Option<String> {
    let num_vars = table.num_vars();
    if !(2..=4).contains(&num_vars) {
        return None;
    }

    let cell = |index: u8| {
        if table.is_minterm(index) {
            '1'
        } else if table.is_dont_care(index) {
            'X'
        } else {
            '0'
        }
    };

    let mut out = format!("K-Map for {} variables:\n", num_vars);
    match num_vars {
        2 => {
            out.push_str("   00 01 11 10\n");
            let row: Vec<String> = (0..4)
                .map(|col| cell(linear_to_gray(col, 2)).to_string())
                .collect();
            out.push_str(&format!("0 │ {}\n", row.join("  ")));
        }
        3 => {
            out.push_str("    00 01 11 10\n");
            for row in 0..2u8 {
                let cells: Vec<String> = (0..4)
                    .map(|col| cell(row * 4 + linear_to_gray(col, 2)).to_string())
                    .collect();
                out.push_str(&format!(" {} │ {}\n", row, cells.join("  ")));
            }
        }
        _ => {
            out.push_str("    00 01 11 10\n");
            for row in 0..4u8 {
                let gray_row = linear_to_gray(row, 2);
                let cells: Vec<String> = (0..4)
                    .map(|col| cell(gray_row * 4 + linear_to_gray(col, 2)).to_string())
                    .collect();
                out.push_str(&format!("{:02b} │ {}\n", gray_row, cells.join("  ")));
            }
        }
    }

    Some(out)
}
