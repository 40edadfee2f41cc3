//! The 20x10 demo map: a start tucked under a wall, a goal across the field.

use gridstar_kernel::grid::{Grid, GridError};

use crate::contract::MapFixture;

/// Demo map text. Spaces are open cells.
pub const DEMO_MAP: &str = concat!(
    "                    \n",
    "                  F \n",
    "                    \n",
    "                    \n",
    " #########          \n",
    "         #          \n",
    "         #          \n",
    "         #          \n",
    " S       #          \n",
    "         #          \n",
);

/// Fixture wrapper for [`DEMO_MAP`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoMap;

impl MapFixture for DemoMap {
    fn map_id(&self) -> &str {
        "demo"
    }

    fn grid(&self) -> Result<Grid, GridError> {
        Grid::parse_ascii(DEMO_MAP)
    }
}
