use std::fmt::Write;

use crossterm::style::{Color, Stylize, style};
use sapper_core::{CellTag, Round};

const COL_WIDTH: usize = 2;

fn count_color(count: u8) -> Color {
    match count {
        1 => Color::DarkRed,
        2 => Color::Red,
        3 => Color::DarkYellow,
        4 => Color::Yellow,
        5 => Color::DarkGreen,
        6 => Color::Green,
        7 => Color::Cyan,
        _ => Color::Blue,
    }
}

fn cell_text(tag: CellTag, color: bool) -> String {
    let text = match tag {
        CellTag::Hidden => "+".to_string(),
        CellTag::RevealedBlank => " ".to_string(),
        CellTag::RevealedCount(count) if color => {
            style(count).with(count_color(count)).to_string()
        }
        CellTag::RevealedCount(count) => count.to_string(),
        CellTag::ShieldMarked => "S".to_string(),
        CellTag::HintMarked => "M".to_string(),
    };
    // escape codes would throw off the padding
    let visible = if matches!(tag, CellTag::RevealedCount(_)) && color { 1 } else { text.len() };
    format!("{}{}", " ".repeat(COL_WIDTH.saturating_sub(visible)), text)
}

/// Header, progress line and grid of the current round.
pub fn render_board(round: &Round, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "There are {} mines to be found!", round.mine_count());
    let _ = writeln!(out, "{} cells still covered", round.hidden_count());
    if round.shield_armed() {
        let _ = writeln!(out, "Shield armed");
    }
    let _ = writeln!(out);

    let header: Vec<String> = (0..round.size())
        .map(|col| format!("{col:>COL_WIDTH$}"))
        .collect();
    let _ = writeln!(out, "{}{}", " ".repeat(COL_WIDTH * 2), header.join(" "));
    let _ = writeln!(out);

    for (row, tags) in round.snapshot().into_iter().enumerate() {
        let cells: Vec<String> = tags.into_iter().map(|tag| cell_text(tag, color)).collect();
        let _ = writeln!(out, "{row:>COL_WIDTH$}  {}", cells.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapper_core::{Action, FixedMineField, MineField, RoundController};

    fn controller() -> RoundController<FixedMineField> {
        let field = MineField::from_mine_coords(3, &[(0, 0)]).unwrap();
        RoundController::with_generator(field.game_config(), FixedMineField(field), 0).unwrap()
    }

    #[test]
    fn plain_board_layout() {
        let mut controller = controller();
        controller.apply_action(Action::ArmShield);
        controller.apply_action(Action::RevealAt((0, 0)));
        controller.apply_action(Action::RevealAt((1, 1)));

        let board = render_board(controller.round(), false);
        let expected = "\
There are 1 mines to be found!
8 cells still covered

     0  1  2

 0   S  +  +
 1   +  1  +
 2   +  +  +
";
        assert_eq!(board, expected);
    }

    #[test]
    fn colored_counts_keep_alignment() {
        let plain = cell_text(CellTag::RevealedCount(3), false);
        let colored = cell_text(CellTag::RevealedCount(3), true);
        assert_eq!(plain, " 3");
        assert!(colored.starts_with(' '));
        assert!(colored.contains('3'));
    }

    #[test]
    fn hint_and_blank_cells() {
        assert_eq!(cell_text(CellTag::HintMarked, true), " M");
        assert_eq!(cell_text(CellTag::RevealedBlank, true), "  ");
    }
}
