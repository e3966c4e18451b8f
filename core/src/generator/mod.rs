use crate::*;
use rand::rngs::SmallRng;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of the mine layout for each new round.
pub trait MineFieldGenerator {
    fn generate(&mut self, config: GameConfig, rng: &mut SmallRng) -> MineField;
}
