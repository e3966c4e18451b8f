use sapper_core::{Action, Coord};

/// A line of player input, once parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    /// Only a row was given, the column comes on the next line.
    Row(Coord),
    Quit,
}

/// Parses a command line, `None` for anything unrecognized.
///
/// Coordinates that do not fit a board axis are kept as `Coord::MAX` so the
/// engine ignores them the same way as other off-board reveals.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_uppercase().as_str() {
        "S" => return Some(Command::Play(Action::ArmShield)),
        "H" => return Some(Command::Play(Action::RequestHint)),
        "Q" => return Some(Command::Quit),
        _ => {}
    }

    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parse_coord(parts.next()?)?;
    match (parts.next(), parts.next()) {
        (None, _) => Some(Command::Row(row)),
        (Some(col), None) => {
            let col = parse_coord(col)?;
            Some(Command::Play(Action::RevealAt((row, col))))
        }
        (Some(_), Some(_)) => None,
    }
}

pub fn parse_column(line: &str) -> Option<Coord> {
    parse_coord(line.trim())
}

fn parse_coord(text: &str) -> Option<Coord> {
    let value: u64 = text.parse().ok()?;
    Some(Coord::try_from(value).unwrap_or(Coord::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(parse_command("s"), Some(Command::Play(Action::ArmShield)));
        assert_eq!(parse_command(" H \n"), Some(Command::Play(Action::RequestHint)));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn row_and_column_on_one_line() {
        assert_eq!(parse_command("2 3"), Some(Command::Play(Action::RevealAt((2, 3)))));
        assert_eq!(parse_command("4,0"), Some(Command::Play(Action::RevealAt((4, 0)))));
    }

    #[test]
    fn lone_row_waits_for_column() {
        assert_eq!(parse_command("7"), Some(Command::Row(7)));
        assert_eq!(parse_column(" 1 "), Some(1));
    }

    #[test]
    fn junk_is_rejected() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("x"), None);
        assert_eq!(parse_command("-1 2"), None);
        assert_eq!(parse_command("1 2 3"), None);
        assert_eq!(parse_column("b"), None);
    }

    #[test]
    fn huge_coordinates_saturate() {
        assert_eq!(
            parse_command("1000 1"),
            Some(Command::Play(Action::RevealAt((Coord::MAX, 1))))
        );
    }
}
