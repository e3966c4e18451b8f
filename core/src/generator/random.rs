use super::*;
use rand::Rng;

/// Uniform placement: draws random cells until enough distinct ones hold a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RandomMineFieldGenerator;

impl MineFieldGenerator for RandomMineFieldGenerator {
    fn generate(&mut self, config: GameConfig, rng: &mut SmallRng) -> MineField {
        let grid = config.grid();
        let mut mines: Array2<bool> = Array2::default(grid.dim());

        // a full board would never terminate below
        let wanted = config.mines.min(config.total_cells().saturating_sub(1));
        if wanted != config.mines {
            log::warn!(
                "Cannot place {} mines on a {}x{} board, placing {}",
                config.mines,
                config.size,
                config.size,
                wanted
            );
        }

        let mut mines_placed: CellCount = 0;
        while mines_placed < wanted {
            let coords = (
                rng.random_range(0..config.size),
                rng.random_range(0..config.size),
            );
            let cell = &mut mines[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }

        MineField::from_mine_mask(mines)
    }
}
