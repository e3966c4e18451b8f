use super::*;

/// Replays the same layout every round, for scripted play and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineField(pub MineField);

impl MineFieldGenerator for FixedMineField {
    fn generate(&mut self, config: GameConfig, _rng: &mut SmallRng) -> MineField {
        if config != self.0.game_config() {
            log::warn!(
                "Fixed layout {:?} ignores requested config {:?}",
                self.0.game_config(),
                config
            );
        }
        self.0.clone()
    }
}
