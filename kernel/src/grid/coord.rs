//! Cell coordinates and the four cardinal directions.
//!
//! Screen orientation: `x` grows to the right, `y` grows downward, so
//! [`Direction::Up`] is `(0, -1)`.

/// A grid cell address.
///
/// Signed so that neighbors of edge cells (e.g. `(-1, 0)`) can be formed and
/// then rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbor one unit away in `dir`. `Direction::None` returns `self`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan (L1) distance.
    #[must_use]
    pub fn manhattan(self, other: Self) -> i64 {
        i64::from(self.x.abs_diff(other.x)) + i64::from(self.y.abs_diff(other.y))
    }

    pub(crate) fn to_json_value(self) -> serde_json::Value {
        serde_json::json!([self.x, self.y])
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cardinal move, or `None` for a node with no parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// The four moves, in no particular search order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(dx, dy)` for one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::None => (0, 0),
        }
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::None => Self::None,
        }
    }

    /// Arrow glyph used by text renderers; `None` has no glyph.
    #[must_use]
    pub const fn glyph(self) -> Option<char> {
        match self {
            Self::Up => Some('^'),
            Self::Down => Some('v'),
            Self::Left => Some('<'),
            Self::Right => Some('>'),
            Self::None => None,
        }
    }

    /// Stable lowercase name for serialized traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::None => "none",
        }
    }
}
