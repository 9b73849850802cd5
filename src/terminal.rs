use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Write};

use gomoku_ai::{advice::ALERT_PREFIX, Board, Cell, Move, BOARD_SIZE};

/// Draws the board with 1-indexed coordinates, highlighting hint cells
/// and the last stone played
pub fn display(board: &Board, hints: &[Move], last_move: Option<Move>) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=BOARD_SIZE).map(|x| format!("{:>3}", x)).collect();
    stdout.queue(PrintStyledContent(style(format!("\n   {}\n", header))))?;

    for y in 0..BOARD_SIZE {
        stdout.queue(PrintStyledContent(style(format!("{:>3}", y + 1))))?;
        for x in 0..BOARD_SIZE {
            let mv = Move::new(x, y);
            let (symbol, colour) = match board.get(mv) {
                Cell::Human => (" X ", Color::Blue),
                Cell::Ai => (" O ", Color::Magenta),
                Cell::Empty if hints.contains(&mv) => (" * ", Color::Green),
                Cell::Empty => (" . ", Color::DarkGrey),
            };
            let cell = if last_move == Some(mv) {
                style(symbol).attribute(Attribute::Bold)
            } else {
                style(symbol)
            };
            stdout.queue(PrintStyledContent(cell.on(Color::Black).with(colour)))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Prints tips, alerts in red
pub fn print_advice(lines: &[String]) -> Result<()> {
    let mut stdout = stdout();
    for line in lines {
        let colour = if line.starts_with(ALERT_PREFIX) {
            Color::Red
        } else {
            Color::DarkCyan
        };
        stdout.queue(PrintStyledContent(style(format!("{}\n", line)).with(colour)))?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn prompt(question: &str) -> Result<String> {
    print!("{}", question);
    stdout().flush()?;

    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

pub fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        match prompt(question)?.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// A spinner shown while the AI searches, ticking on its own thread
pub fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed}")
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    spinner.set_message("AI is thinking...");
    spinner.enable_steady_tick(100);
    spinner
}
