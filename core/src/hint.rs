use alloc::vec::Vec;
use rand::Rng;
use rand::rngs::SmallRng;
use smallvec::SmallVec;

use crate::*;

/// Most mines a single hint can expose.
pub const MAX_HINT_MINES: usize = 3;

pub type HintCells = SmallVec<[Coord2; MAX_HINT_MINES]>;

/// Picks between 1 and 3 distinct covered mines to expose.
///
/// Only mines still tagged `Hidden` qualify. Draws are repeated until they land
/// on a mine not picked yet. Fewer cells come back when fewer mines qualify.
pub fn pick_hint_cells(
    mine_field: &MineField,
    state: &RevealState,
    rng: &mut SmallRng,
) -> HintCells {
    let candidates: Vec<Coord2> = mine_field
        .iter_mines()
        .filter(|&pos| state.cell(pos).is_hidden())
        .collect();

    let wanted = rng.random_range(1..=MAX_HINT_MINES);
    let count = wanted.min(candidates.len());
    if count < wanted {
        log::warn!(
            "Hint wanted {} mines but only {} are covered",
            wanted,
            candidates.len()
        );
    }

    let mut picked = HintCells::new();
    while picked.len() < count {
        let pos = candidates[rng.random_range(0..candidates.len())];
        if !picked.contains(&pos) {
            picked.push(pos);
        }
    }
    picked
}
