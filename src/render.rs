//! Text rendering of the grid.

use inversion_engine::{COLUMN_LABELS, Grid};

/// Formats the grid with column letters across the top and row numbers
/// down the side. Empty cells show as `-`.
///
/// ```text
///    | a | b | c | d | e | f | g | h | i | j
///  1 | X | - | - | - | - | - | - | - | - | -
/// ```
pub fn render_grid(grid: &Grid) -> String {
    let header = COLUMN_LABELS
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" | ");
    let mut out = format!("   | {}", header);

    for (index, row) in grid.rows().iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{:>2}", index + 1));
        for cell in row {
            out.push_str(" | ");
            out.push(cell.symbol());
        }
    }
    out
}
