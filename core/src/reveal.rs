use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player can see of the board, plus how many cells are still covered.
///
/// `hidden_count` counts every cell that has not been uncovered as safe: plain
/// hidden cells as well as shield and hint marks, which always sit on mines.
/// A round is won when it drops to the mine count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealState {
    cells: Array2<CellTag>,
    hidden_count: CellCount,
}

impl RevealState {
    pub fn new(grid: Grid) -> Self {
        Self {
            cells: Array2::default(grid.dim()),
            hidden_count: grid.total_cells(),
        }
    }

    /// Covers every cell again.
    pub fn reset(&mut self, grid: Grid) {
        *self = Self::new(grid);
    }

    pub fn hidden_count(&self) -> CellCount {
        self.hidden_count
    }

    pub fn cell(&self, coords: Coord2) -> CellTag {
        self.cells[coords.to_nd_index()]
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0 as Coord
    }

    /// Row-major copy of every tag, for renderers.
    pub fn rows(&self) -> Vec<Vec<CellTag>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    pub fn mark_blank(&mut self, coords: Coord2) -> MarkOutcome {
        self.uncover(coords, CellTag::RevealedBlank)
    }

    /// `count` must be in `1..=8`, a zero count is recorded as blank.
    pub fn mark_count(&mut self, coords: Coord2, count: u8) -> MarkOutcome {
        self.uncover(coords, CellTag::from_count(count))
    }

    pub fn mark_shield(&mut self, coords: Coord2) -> MarkOutcome {
        self.retag(coords, CellTag::ShieldMarked)
    }

    pub fn mark_hint(&mut self, coords: Coord2) -> MarkOutcome {
        match self.cell(coords) {
            CellTag::Hidden => self.retag(coords, CellTag::HintMarked),
            _ => MarkOutcome::NoChange,
        }
    }

    /// Puts a hint mark back to hidden, other tags are left alone.
    pub fn unmark_hint(&mut self, coords: Coord2) -> MarkOutcome {
        match self.cell(coords) {
            CellTag::HintMarked => self.retag(coords, CellTag::Hidden),
            _ => MarkOutcome::NoChange,
        }
    }

    fn uncover(&mut self, coords: Coord2, tag: CellTag) -> MarkOutcome {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.is_hidden() {
            return MarkOutcome::NoChange;
        }
        *cell = tag;
        self.hidden_count -= 1;
        MarkOutcome::Changed
    }

    fn retag(&mut self, coords: Coord2, tag: CellTag) -> MarkOutcome {
        let cell = &mut self.cells[coords.to_nd_index()];
        if *cell == tag {
            return MarkOutcome::NoChange;
        }
        *cell = tag;
        MarkOutcome::Changed
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

pub fn count_mine_neighbors(grid: Grid, mine_field: &MineField, coords: Coord2) -> u8 {
    // at most 8 neighbors
    grid.neighbors(coords)
        .filter(|&pos| mine_field.is_mine(pos))
        .count() as u8
}

/// Uncovers `coords` and cascades through every connected zero-count cell.
///
/// The caller must have checked that `coords` is not a mine. Cells that are not
/// hidden are left untouched, so revealing twice is a no-op. Returns the number
/// of cells uncovered.
pub fn reveal(
    grid: Grid,
    mine_field: &MineField,
    state: &mut RevealState,
    coords: Coord2,
) -> CellCount {
    let mut uncovered: CellCount = 0;
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        if !state.cell(visit_coords).is_hidden() {
            continue;
        }

        let adjacent_mines = count_mine_neighbors(grid, mine_field, visit_coords);
        if adjacent_mines == 0 {
            state.mark_blank(visit_coords);
            // no neighbor of a zero cell is a mine
            to_visit.extend(
                grid.neighbors(visit_coords)
                    .filter(|&pos| state.cell(pos).is_hidden()),
            );
        } else {
            state.mark_count(visit_coords, adjacent_mines);
        }
        uncovered += 1;
    }

    log::trace!(
        "reveal {:?} uncovered {} cells, {} still hidden",
        coords,
        uncovered,
        state.hidden_count()
    );
    uncovered
}
