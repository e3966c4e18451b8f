//! Line-oriented terminal front end: reads commands, renders the board and
//! owns the hint delay. All game rules live in `sapper-core`.

mod input;
mod render;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use input::{Command, parse_column, parse_command};
use render::render_board;
use sapper_core::{
    Action, ActionOutcome, CellCount, Coord, GameConfig, RoundController, RoundState,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Find the mines on a square grid, with a shield and hints to help")]
struct Cli {
    /// Side length of the square board
    #[arg(long, default_value_t = GameConfig::default().size)]
    size: Coord,

    /// Number of mines, by default 7 on a 5x5 board and two per row otherwise
    #[arg(long)]
    mines: Option<CellCount>,

    /// Seed for mine placement and hints, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// How long hinted mines stay visible
    #[arg(long, default_value_t = 3000)]
    hint_delay_ms: u64,

    /// Print counts without colors
    #[arg(long)]
    no_color: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let config = match self.mines {
            Some(mines) => GameConfig::new(self.size, mines),
            None if self.size == GameConfig::default().size => Ok(GameConfig::default()),
            None => GameConfig::with_standard_density(self.size),
        };
        config.context("invalid board configuration")
    }
}

struct Terminal<R> {
    lines: io::Lines<R>,
    color: bool,
}

impl<R: BufRead> Terminal<R> {
    fn clear(&self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        print!("{text}");
        io::stdout().flush()?;
        self.lines
            .next()
            .transpose()
            .context("failed to read player input")
    }

    fn show(&self, controller: &RoundController, status: Option<&str>) -> Result<()> {
        self.clear()?;
        if let Some(status) = status {
            println!("{status}\n");
        }
        print!("{}", render_board(controller.round(), self.color));
        println!();
        Ok(())
    }
}

const ROW_PROMPT: &str = "Enter row (or 'S' for shield, 'H' for hint, 'Q' to quit): ";

fn status_for(outcome: &ActionOutcome) -> Option<&'static str> {
    match outcome {
        ActionOutcome::Ignored => Some("That cell is not on the board."),
        ActionOutcome::ShieldArmed => Some("Shield activated! Avoiding the next mine."),
        ActionOutcome::ShieldConsumed(_) => Some("Shield used! You avoided the mine!"),
        ActionOutcome::HintShown(cells) if cells.is_empty() => {
            Some("No covered mines left to hint at.")
        }
        _ => None,
    }
}

fn run<R: BufRead>(
    cli: &Cli,
    controller: &mut RoundController,
    terminal: &mut Terminal<R>,
) -> Result<()> {
    let hint_delay = Duration::from_millis(cli.hint_delay_ms);
    let mut status = None;

    loop {
        terminal.show(controller, status.take())?;
        let Some(line) = terminal.prompt(ROW_PROMPT)? else {
            return Ok(());
        };

        let action = match parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Play(action)) => action,
            Some(Command::Row(row)) => {
                let Some(line) = terminal.prompt("Enter column: ")? else {
                    return Ok(());
                };
                match parse_column(&line) {
                    Some(col) => Action::RevealAt((row, col)),
                    None => continue,
                }
            }
            None => {
                log::debug!("discarding input {:?}", line);
                continue;
            }
        };

        let result = controller.apply_action(action);
        status = status_for(&result.outcome);

        if let ActionOutcome::HintShown(cells) = &result.outcome {
            if !cells.is_empty() {
                let text = format!(
                    "Hint: Revealing some mines for {} seconds!",
                    hint_delay.as_secs_f32()
                );
                terminal.show(controller, Some(&text))?;
                thread::sleep(hint_delay);
                controller.clear_hints();
            }
        }

        let announcement = match result.state {
            RoundState::InProgress => continue,
            RoundState::Won => "You Have Won!".to_string(),
            RoundState::Lost => {
                let mines: Vec<String> = controller
                    .round()
                    .mines()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(row, col)| format!("({row}, {col})"))
                    .collect();
                format!("You Hit a Mine, Game Over\nMines were at {}", mines.join(" "))
            }
        };
        terminal.show(controller, Some(&announcement))?;
        if terminal.prompt("Press Enter to try again!")?.is_none() {
            return Ok(());
        }
        // the next board shown must be the one the next move lands on
        controller.reset();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.verbose.tracing_level_filter().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.game_config()?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting {}x{} board with {} mines, seed {}",
        config.size,
        config.size,
        config.mines,
        seed
    );

    let mut controller = RoundController::new(config, seed)?;
    let mut terminal = Terminal {
        lines: io::stdin().lock().lines(),
        color: !cli.no_color,
    };
    run(&cli, &mut controller, &mut terminal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("sapper").chain(args.iter().copied()))
    }

    #[test]
    fn default_board_is_classic() {
        let config = cli(&[]).game_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn other_sizes_use_standard_density() {
        let config = cli(&["--size", "8"]).game_config().unwrap();
        assert_eq!((config.size, config.mines), (8, 16));
        let config = cli(&["--size", "8", "--mines", "3"]).game_config().unwrap();
        assert_eq!(config.mines, 3);
    }

    #[test]
    fn overfull_board_is_rejected() {
        let err = cli(&["--size", "2", "--mines", "4"]).game_config().unwrap_err();
        assert!(err.to_string().contains("invalid board configuration"));
        assert!(cli(&["--size", "0"]).game_config().is_err());
    }

    #[test]
    fn scripted_session_quits_cleanly() {
        let cli = cli(&["--size", "3", "--mines", "0", "--hint-delay-ms", "0", "--seed", "1"]);
        let mut controller = RoundController::new(cli.game_config().unwrap(), 1).unwrap();
        let script = "junk\nS\n1\n1\n\nq\n";
        let mut terminal = Terminal {
            lines: io::Cursor::new(script).lines(),
            color: false,
        };
        run(&cli, &mut controller, &mut terminal).unwrap();
        // the win was acknowledged, so a fresh round is waiting
        assert_eq!(controller.state(), RoundState::InProgress);
        assert!(!controller.round().shield_armed());
        assert_eq!(controller.round().hidden_count(), 9);
    }

    #[test]
    fn finished_round_is_replaced_before_next_prompt() {
        let cli = cli(&["--size", "3", "--mines", "0", "--hint-delay-ms", "0"]);
        let mut controller = RoundController::new(cli.game_config().unwrap(), 4).unwrap();
        let mut terminal = Terminal {
            lines: io::Cursor::new("1 1\n\n").lines(),
            color: false,
        };
        run(&cli, &mut controller, &mut terminal).unwrap();

        assert_eq!(controller.state(), RoundState::InProgress);
        assert_eq!(controller.round().hidden_count(), 9);
        let board = render_board(controller.round(), false);
        let rows: Vec<&str> = board.lines().skip(5).collect();
        assert_eq!(rows, [" 0   +  +  +", " 1   +  +  +", " 2   +  +  +"]);
    }

    #[test]
    fn any_outcome_on_crowded_board_starts_covered_round() {
        // a single safe cell: the first reveal either wins or loses
        let cli = cli(&["--size", "2", "--mines", "3", "--hint-delay-ms", "0"]);
        let mut controller = RoundController::new(cli.game_config().unwrap(), 2).unwrap();
        let mut terminal = Terminal {
            lines: io::Cursor::new("0 0\n\n").lines(),
            color: false,
        };
        run(&cli, &mut controller, &mut terminal).unwrap();

        assert_eq!(controller.state(), RoundState::InProgress);
        assert_eq!(controller.round().hidden_count(), 4);
        assert_eq!(controller.round().triggered_mine(), None);
        let round = controller.round();
        assert!(round.grid().cells().all(|pos| round.cell(pos).is_hidden()));
    }

    #[test]
    fn hint_is_cleared_after_delay() {
        let cli = cli(&["--size", "3", "--mines", "2", "--hint-delay-ms", "0"]);
        let mut controller = RoundController::new(cli.game_config().unwrap(), 9).unwrap();
        let mut terminal = Terminal {
            lines: io::Cursor::new("h\n").lines(),
            color: true,
        };
        run(&cli, &mut controller, &mut terminal).unwrap();
        assert_eq!(controller.round().hidden_count(), 9);
        let round = controller.round();
        assert!(round.grid().cells().all(|pos| round.cell(pos).is_hidden()));
    }
}
