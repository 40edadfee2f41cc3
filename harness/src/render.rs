//! Text frames of a search in progress.
//!
//! ```text
//! ######
//! #S<O #
//! #^#  #
//! #O  F#
//! ######
//! ```
//!
//! Layering, last wins: the map (`' '` open, `#` wall), `O` for open
//! cells, the arrival-direction glyph for closed cells, then `S` and `F`.
//! Following the arrows from any closed cell leads back to the start.

use gridstar_kernel::grid::{CellKind, Coord, Grid};
use gridstar_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use gridstar_search::{SearchPath, SearchSnapshot};

pub const WALL: char = '#';
pub const OPEN_CELL: char = ' ';
pub const FRONTIER: char = 'O';
pub const START: char = 'S';
pub const GOAL: char = 'F';
pub const PATH: char = '*';

/// Character buffer for one frame, without the border.
struct Canvas {
    width: usize,
    cells: Vec<char>,
}

impl Canvas {
    fn from_grid(grid: &Grid) -> Self {
        let cells = grid
            .cells()
            .map(|(_, kind)| match kind {
                CellKind::Open => OPEN_CELL,
                CellKind::Wall => WALL,
            })
            .collect();
        Self {
            width: grid.width(),
            cells,
        }
    }

    fn put(&mut self, coord: Coord, ch: char) {
        let (Ok(x), Ok(y)) = (usize::try_from(coord.x), usize::try_from(coord.y)) else {
            return;
        };
        if x >= self.width {
            return;
        }
        if let Some(cell) = self.cells.get_mut(y * self.width + x) {
            *cell = ch;
        }
    }

    fn finish(self) -> String {
        let border = WALL.to_string().repeat(self.width + 2);
        let mut out = String::with_capacity((self.width + 3) * (self.cells.len() / self.width + 2));
        out.push_str(&border);
        out.push('\n');
        for row in self.cells.chunks(self.width) {
            out.push(WALL);
            out.extend(row.iter());
            out.push(WALL);
            out.push('\n');
        }
        out.push_str(&border);
        out.push('\n');
        out
    }
}

/// Draw one frame of `snapshot` over `grid`.
#[must_use]
pub fn render(grid: &Grid, snapshot: &SearchSnapshot) -> String {
    let mut canvas = Canvas::from_grid(grid);
    for &coord in &snapshot.frontier {
        canvas.put(coord, FRONTIER);
    }
    for &(coord, direction) in &snapshot.closed {
        if let Some(glyph) = direction.glyph() {
            canvas.put(coord, glyph);
        }
    }
    canvas.put(snapshot.start, START);
    canvas.put(snapshot.goal, GOAL);
    canvas.finish()
}

/// Draw the final route: `*` on every path cell between start and goal.
#[must_use]
pub fn render_path(grid: &Grid, path: &SearchPath) -> String {
    let mut canvas = Canvas::from_grid(grid);
    for &coord in path.start_to_goal() {
        canvas.put(coord, PATH);
    }
    canvas.put(grid.start(), START);
    canvas.put(grid.goal(), GOAL);
    canvas.finish()
}

/// Domain-separated digest of a rendered frame's bytes.
#[must_use]
pub fn frame_digest(frame: &str) -> ContentHash {
    canonical_hash(HashDomain::RenderFrame, frame.as_bytes())
}
