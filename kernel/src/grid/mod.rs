//! The grid a search runs over.
//!
//! A [`Grid`] is validated once at construction, so a bad start or goal is
//! rejected before any search exists. It is immutable afterwards.

mod coord;
mod parse;

pub use coord::{Coord, Direction};

use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// What occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Open,
    Wall,
}

/// Typed failure for grid construction and loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    EmptyDimensions { width: usize, height: usize },
    /// Dimensions do not fit the signed coordinate space.
    DimensionsTooLarge { width: usize, height: usize },
    /// `cells.len()` does not equal `width * height`.
    CellCountMismatch { expected: usize, actual: usize },
    StartOutOfBounds { coord: Coord },
    GoalOutOfBounds { coord: Coord },
    StartOnWall { coord: Coord },
    GoalOnWall { coord: Coord },
    /// A wall listed for [`Grid::from_walls`] lies outside the grid.
    WallOutOfBounds { coord: Coord },
    /// ASCII map row has a different width than the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// ASCII map contains a character with no cell meaning.
    UnknownCell { ch: char, row: usize, col: usize },
    MissingStart,
    MissingGoal,
    DuplicateStart { first: Coord, second: Coord },
    DuplicateGoal { first: Coord, second: Coord },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::DimensionsTooLarge { width, height } => {
                write!(f, "grid dimensions {width}x{height} exceed the coordinate range")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::StartOutOfBounds { coord } => write!(f, "start {coord} is out of bounds"),
            Self::GoalOutOfBounds { coord } => write!(f, "goal {coord} is out of bounds"),
            Self::StartOnWall { coord } => write!(f, "start {coord} is on a wall"),
            Self::GoalOnWall { coord } => write!(f, "goal {coord} is on a wall"),
            Self::WallOutOfBounds { coord } => write!(f, "wall {coord} is out of bounds"),
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has width {actual}, expected {expected}"),
            Self::UnknownCell { ch, row, col } => {
                write!(f, "unknown cell {ch:?} at row {row}, column {col}")
            }
            Self::MissingStart => write!(f, "map has no start cell 'S'"),
            Self::MissingGoal => write!(f, "map has no goal cell 'F'"),
            Self::DuplicateStart { first, second } => {
                write!(f, "map has two start cells: {first} and {second}")
            }
            Self::DuplicateGoal { first, second } => {
                write!(f, "map has two goal cells: {first} and {second}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An immutable 2D map with a start and a goal.
///
/// Invariant: `cells.len() == width * height`, start and goal are in bounds
/// and not walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Build a grid from a row-major cell vector.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the dimensions are empty or too large, the
    /// cell count is wrong, or start/goal are out of bounds or on a wall.
    pub fn new(
        width: usize,
        height: usize,
        cells: Vec<CellKind>,
        start: Coord,
        goal: Coord,
    ) -> Result<Self, GridError> {
        let expected = checked_area(width, height)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let grid = Self {
            width,
            height,
            cells,
            start,
            goal,
        };

        if !grid.in_bounds(start) {
            return Err(GridError::StartOutOfBounds { coord: start });
        }
        if !grid.in_bounds(goal) {
            return Err(GridError::GoalOutOfBounds { coord: goal });
        }
        if grid.cell(start) == Some(CellKind::Wall) {
            return Err(GridError::StartOnWall { coord: start });
        }
        if grid.cell(goal) == Some(CellKind::Wall) {
            return Err(GridError::GoalOnWall { coord: goal });
        }
        Ok(grid)
    }

    /// Build an all-open grid and then place `walls`.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::new`], plus [`GridError::WallOutOfBounds`].
    pub fn from_walls(
        width: usize,
        height: usize,
        walls: &[Coord],
        start: Coord,
        goal: Coord,
    ) -> Result<Self, GridError> {
        let mut cells = vec![CellKind::Open; checked_area(width, height)?];
        for &wall in walls {
            let idx = cell_index(width, height, wall)
                .ok_or(GridError::WallOutOfBounds { coord: wall })?;
            cells[idx] = CellKind::Wall;
        }
        Self::new(width, height, cells, start, goal)
    }

    /// Load a map drawn in text. See the `parse` module for the format.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] describing the first problem found.
    pub fn parse_ascii(text: &str) -> Result<Self, GridError> {
        parse::parse_ascii(text)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// The cell at `coord`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<CellKind> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// False if out of bounds or a wall.
    #[must_use]
    pub fn is_passable(&self, coord: Coord) -> bool {
        self.cell(coord) == Some(CellKind::Open)
    }

    #[must_use]
    pub fn is_goal(&self, coord: Coord) -> bool {
        coord == self.goal
    }

    #[must_use]
    pub fn is_start(&self, coord: Coord) -> bool {
        coord == self.start
    }

    /// Number of open cells. Upper bound on how many cells a search can close.
    #[must_use]
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == CellKind::Open).count()
    }

    /// Row-major iterator over `(coord, kind)`.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells.iter().enumerate().map(move |(idx, kind)| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let coord = Coord::new((idx % self.width) as i32, (idx / self.width) as i32);
            (coord, *kind)
        })
    }

    /// Canonical JSON form: dimensions, one string per row (`#` wall,
    /// `.` open), start and goal.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let rows: Vec<String> = self
            .cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|c| match c {
                        CellKind::Open => '.',
                        CellKind::Wall => '#',
                    })
                    .collect()
            })
            .collect();
        serde_json::json!({
            "goal": self.goal.to_json_value(),
            "height": self.height,
            "rows": rows,
            "start": self.start.to_json_value(),
            "width": self.width,
        })
    }

    /// Domain-separated content hash of [`Grid::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails (it cannot for a
    /// valid grid, since every number is an integer).
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::Grid, &bytes))
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        cell_index(self.width, self.height, coord)
    }
}

fn checked_area(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyDimensions { width, height });
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(GridError::DimensionsTooLarge { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(GridError::DimensionsTooLarge { width, height })
}

fn cell_index(width: usize, height: usize, coord: Coord) -> Option<usize> {
    let x = usize::try_from(coord.x).ok()?;
    let y = usize::try_from(coord.y).ok()?;
    if x >= width || y >= height {
        return None;
    }
    Some(y * width + x)
}
