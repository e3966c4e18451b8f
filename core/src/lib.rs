#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use hint::*;
pub use reveal::*;
pub use round::*;
pub use tile::*;
pub use types::*;

mod error;
mod generator;
mod hint;
mod reveal;
mod round;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validated configuration, `mines` must leave at least one safe cell.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::EmptyBoard);
        }
        let max = mult(size, size) - 1;
        if mines > max {
            return Err(GameError::TooManyMines { size, mines, max });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    /// Two mines per row, so the mine count grows with the board.
    pub fn with_standard_density(size: Coord) -> Result<Self> {
        Self::new(size, CellCount::from(size) * 2)
    }

    pub const fn grid(&self) -> Grid {
        Grid::new(self.size)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(5, 7)
    }
}

/// Mine layout of one round. Never mutated once built; a new round gets a new field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineField {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineField {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a fixed layout, duplicate coordinates count once.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let grid = Grid::new(size);
        let mut mine_mask: Array2<bool> = Array2::default(grid.dim());

        for &coords in mine_coords {
            if !grid.contains(coords) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let field = Self::from_mine_mask(mine_mask);
        GameConfig::new(size, field.mine_count)?;
        Ok(field)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.size())
    }

    pub fn size(&self) -> Coord {
        // the mask is always built from a `Grid`, so the side fits in `Coord`
        self.mine_mask.dim().0 as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mine coordinates in row-major order.
    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.grid().cells().filter(|&pos| self[pos])
    }
}

impl Index<Coord2> for MineField {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
