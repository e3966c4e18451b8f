use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellTag {
    #[default]
    Hidden,
    RevealedBlank,
    /// Safe cell with `1..=8` adjacent mines.
    RevealedCount(u8),
    /// Mine cell whose hit was absorbed by the shield.
    ShieldMarked,
    /// Mine cell temporarily exposed by a hint.
    HintMarked,
}

impl CellTag {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Safe cell uncovered by a reveal.
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::RevealedBlank | Self::RevealedCount(_))
    }

    /// Adjacent mine count of a revealed cell, if any.
    pub const fn mine_count(self) -> Option<u8> {
        match self {
            Self::RevealedBlank => Some(0),
            Self::RevealedCount(count) => Some(count),
            _ => None,
        }
    }

    pub(crate) const fn from_count(count: u8) -> Self {
        if count == 0 {
            Self::RevealedBlank
        } else {
            Self::RevealedCount(count)
        }
    }
}
