use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player intent handed over by the input layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    ArmShield,
    RequestHint,
    RevealAt(Coord2),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a single action did to the round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Out-of-bounds reveal, nothing changed.
    Ignored,
    ShieldArmed,
    /// Mines now tagged `HintMarked`, to be unmarked by the display.
    HintShown(HintCells),
    /// Safe reveal, with the number of cells uncovered (0 if already open).
    Revealed(CellCount),
    ShieldConsumed(Coord2),
    HitMine(Coord2),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub state: RoundState,
    pub outcome: ActionOutcome,
    /// The action first replaced a finished round with a fresh one.
    pub new_round: bool,
}

/// Board state of a single round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    grid: Grid,
    mine_field: MineField,
    reveal_state: RevealState,
    shield_armed: bool,
    triggered_mine: Option<Coord2>,
}

impl Round {
    pub fn new(mine_field: MineField) -> Self {
        let grid = mine_field.grid();
        Self {
            grid,
            mine_field,
            reveal_state: RevealState::new(grid),
            shield_armed: false,
            triggered_mine: None,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn size(&self) -> Coord {
        self.grid.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_field.mine_count()
    }

    pub fn hidden_count(&self) -> CellCount {
        self.reveal_state.hidden_count()
    }

    pub fn shield_armed(&self) -> bool {
        self.shield_armed
    }

    /// Tag at `coords`, which must lie on the board; panics otherwise.
    pub fn cell(&self, coords: Coord2) -> CellTag {
        self.reveal_state.cell(coords)
    }

    /// Tag at `coords`, `None` off the board.
    pub fn get_cell(&self, coords: Coord2) -> Option<CellTag> {
        self.grid
            .contains(coords)
            .then(|| self.reveal_state.cell(coords))
    }

    pub fn reveal_state(&self) -> &RevealState {
        &self.reveal_state
    }

    /// Row-major tags of the whole board.
    pub fn snapshot(&self) -> Vec<Vec<CellTag>> {
        self.reveal_state.rows()
    }

    /// Mine that ended the round, once lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Mine positions, only exposed once the round is lost.
    pub fn mines(&self) -> Option<Vec<Coord2>> {
        self.triggered_mine.map(|_| self.mine_field.iter_mines().collect())
    }

    /// Every safe cell has been uncovered.
    pub fn is_cleared(&self) -> bool {
        self.hidden_count() == self.mine_count()
    }

    fn arm_shield(&mut self) -> ActionOutcome {
        self.shield_armed = true;
        ActionOutcome::ShieldArmed
    }

    fn request_hint(&mut self, rng: &mut SmallRng) -> ActionOutcome {
        let cells = pick_hint_cells(&self.mine_field, &self.reveal_state, rng);
        for &pos in &cells {
            self.reveal_state.mark_hint(pos);
        }
        ActionOutcome::HintShown(cells)
    }

    fn reveal_at(&mut self, coords: Coord2) -> ActionOutcome {
        if !self.grid.contains(coords) {
            log::debug!("reveal at {:?} is off the board, ignored", coords);
            return ActionOutcome::Ignored;
        }

        if !self.mine_field.is_mine(coords) {
            let uncovered = reveal(self.grid, &self.mine_field, &mut self.reveal_state, coords);
            return ActionOutcome::Revealed(uncovered);
        }

        if self.shield_armed {
            self.shield_armed = false;
            self.reveal_state.mark_shield(coords);
            ActionOutcome::ShieldConsumed(coords)
        } else {
            self.triggered_mine = Some(coords);
            ActionOutcome::HitMine(coords)
        }
    }
}

/// Drives rounds one action at a time, starting a fresh round after each win or loss.
pub struct RoundController<G = RandomMineFieldGenerator> {
    config: GameConfig,
    generator: G,
    rng: SmallRng,
    round: Round,
    state: RoundState,
}

impl RoundController {
    /// Random layouts, reproducible from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineFieldGenerator, seed)
    }
}

impl<G: MineFieldGenerator> RoundController<G> {
    pub fn with_generator(config: GameConfig, mut generator: G, seed: u64) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let round = Round::new(generator.generate(config, &mut rng));
        log::debug!(
            "new controller for {}x{} board with {} mines, seed {}",
            config.size,
            config.size,
            config.mines,
            seed
        );
        Ok(Self {
            config,
            generator,
            rng,
            round,
            state: RoundState::InProgress,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn apply_action(&mut self, action: Action) -> RoundResult {
        let new_round = self.state.is_finished();
        if new_round {
            self.reset();
        }

        log::debug!("applying {:?}", action);
        let outcome = match action {
            Action::ArmShield => self.round.arm_shield(),
            Action::RequestHint => self.round.request_hint(&mut self.rng),
            Action::RevealAt(coords) => self.round.reveal_at(coords),
        };

        match outcome {
            ActionOutcome::HitMine(coords) => {
                log::info!("hit mine at {:?}, round lost", coords);
                self.state = RoundState::Lost;
            }
            ActionOutcome::Revealed(_) if self.round.is_cleared() => {
                log::info!("all safe cells uncovered, round won");
                self.state = RoundState::Won;
            }
            _ => {}
        }

        RoundResult {
            state: self.state,
            outcome,
            new_round,
        }
    }

    /// Covers a hint-marked cell again, once the display is done showing it.
    pub fn unmark_hint(&mut self, coords: Coord2) -> MarkOutcome {
        if !self.round.grid.contains(coords) {
            return MarkOutcome::NoChange;
        }
        self.round.reveal_state.unmark_hint(coords)
    }

    /// Covers every hint-marked cell again.
    pub fn clear_hints(&mut self) -> MarkOutcome {
        let grid = self.round.grid;
        grid.cells()
            .map(|pos| self.round.reveal_state.unmark_hint(pos))
            .fold(MarkOutcome::NoChange, |acc, outcome| {
                if outcome.has_update() { outcome } else { acc }
            })
    }

    /// Starts over with a new layout, a covered board and no shield.
    pub fn reset(&mut self) {
        self.round = Round::new(self.generator.generate(self.config, &mut self.rng));
        self.state = RoundState::InProgress;
        log::debug!("round reset");
    }
}
