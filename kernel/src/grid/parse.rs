//! Text map loader.
//!
//! One line per row, all rows the same width:
//!
//! | char        | meaning |
//! |-------------|---------|
//! | `' '`, `.`  | open    |
//! | `#`         | wall    |
//! | `S`         | start (open) |
//! | `F`, `G`    | goal (open)  |
//!
//! Trailing empty lines are ignored. Exactly one start and one goal.

use super::{CellKind, Coord, Grid, GridError};

pub(super) fn parse_ascii(text: &str) -> Result<Grid, GridError> {
    let mut rows: Vec<&str> = text.lines().collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }

    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    if width == 0 || height == 0 {
        return Err(GridError::EmptyDimensions { width, height });
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(GridError::DimensionsTooLarge { width, height });
    }

    let mut cells = Vec::with_capacity(width * height);
    let mut start: Option<Coord> = None;
    let mut goal: Option<Coord> = None;

    for (row, line) in rows.iter().enumerate() {
        let actual = line.chars().count();
        if actual != width {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                actual,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let here = Coord::new(col as i32, row as i32);
            let kind = match ch {
                ' ' | '.' => CellKind::Open,
                '#' => CellKind::Wall,
                'S' => {
                    if let Some(first) = start {
                        return Err(GridError::DuplicateStart {
                            first,
                            second: here,
                        });
                    }
                    start = Some(here);
                    CellKind::Open
                }
                'F' | 'G' => {
                    if let Some(first) = goal {
                        return Err(GridError::DuplicateGoal {
                            first,
                            second: here,
                        });
                    }
                    goal = Some(here);
                    CellKind::Open
                }
                other => return Err(GridError::UnknownCell { ch: other, row, col }),
            };
            cells.push(kind);
        }
    }

    let start = start.ok_or(GridError::MissingStart)?;
    let goal = goal.ok_or(GridError::MissingGoal)?;
    Grid::new(width, height, cells, start, goal)
}
