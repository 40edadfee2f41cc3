//! Map fixture contract: the minimal trait a map source must implement.
//!
//! Fixtures provide grid data only. They may NOT step a search, render, or
//! hash; those are engine and runner concerns.

use gridstar_kernel::grid::{Grid, GridError};

/// A named source of a grid.
pub trait MapFixture {
    /// Unique identifier (e.g. `"demo"`, `"open_field_8x8"`).
    fn map_id(&self) -> &str;

    /// Build the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the fixture data does not form a valid grid.
    fn grid(&self) -> Result<Grid, GridError>;
}

/// A map given as ASCII text, e.g. read from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMap {
    id: String,
    text: String,
}

impl TextMap {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl MapFixture for TextMap {
    fn map_id(&self) -> &str {
        &self.id
    }

    fn grid(&self) -> Result<Grid, GridError> {
        Grid::parse_ascii(&self.text)
    }
}
