//! Enumerate every wall layout of a small grid.

use gridstar_kernel::grid::{Coord, Grid};

/// Every valid grid of `width` x `height` with start at the top-left and
/// goal at the bottom-right, one per wall bitmask. Masks that would wall
/// over the start or goal are skipped.
///
/// # Panics
///
/// Panics if the grid has more than 20 cells; the enumeration is exponential.
#[must_use]
pub fn all_wall_layouts(width: usize, height: usize) -> Vec<Grid> {
    let cells = width * height;
    assert!(cells <= 20, "{width}x{height} is too large to enumerate");
    let w = i32::try_from(width).expect("small width");
    let h = i32::try_from(height).expect("small height");
    let start = Coord::new(0, 0);
    let goal = Coord::new(w - 1, h - 1);

    (0u32..1 << cells)
        .filter_map(|mask| {
            let walls: Vec<Coord> = (0..cells)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| {
                    let bit = i32::try_from(bit).expect("small index");
                    Coord::new(bit % w, bit / w)
                })
                .collect();
            Grid::from_walls(width, height, &walls, start, goal).ok()
        })
        .collect()
}
