//! Hints and spoken tips for the human player
//!
//! Both follow one priority ladder, stopping at the first rung that applies:
//! the human can win, the AI can win, the human can make an open four, the
//! AI can make an open four, the human can make an open three.

use crate::board::{Board, Move, Player};
use crate::evaluation::Category;
use crate::tactics::{moves_reaching_threshold, winning_moves};

/// Prefix of tips that warn about an opponent threat
pub const ALERT_PREFIX: &str = "Alert:";

const HUMAN_CAN_WIN: &str = "You can win in the next move! Look for the winning spot.";
const AI_CAN_WIN: &str = "Alert: Block the AI from winning in the next move!";
const HUMAN_OPEN_FOUR: &str = "You can create a strong line! Try to build an open four.";
const AI_OPEN_FOUR: &str = "Alert: Prevent the AI from creating a strong line.";
const HUMAN_OPEN_THREE: &str = "Consider building up your line to threaten the AI.";
const GENERAL_TIP: &str = "Think strategically to outmaneuver the AI.";
const AI_THINKING: &str = "AI is thinking...";

/// The highest rung of the ladder that applies to a position
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Situation {
    HumanCanWin(Vec<Move>),
    AiCanWin(Vec<Move>),
    HumanOpenFour(Vec<Move>),
    AiOpenFour(Vec<Move>),
    HumanOpenThree(Vec<Move>),
    Quiet,
}

impl Situation {
    /// The cells the situation is about
    pub fn cells(&self) -> &[Move] {
        match self {
            Situation::HumanCanWin(cells)
            | Situation::AiCanWin(cells)
            | Situation::HumanOpenFour(cells)
            | Situation::AiOpenFour(cells)
            | Situation::HumanOpenThree(cells) => cells.as_slice(),
            Situation::Quiet => &[],
        }
    }

    /// Whether the human has to react to an AI threat
    pub fn is_alert(&self) -> bool {
        matches!(self, Situation::AiCanWin(_) | Situation::AiOpenFour(_))
    }
}

/// Finds the highest rung of the ladder for the position
pub fn assess(board: &mut Board) -> Situation {
    let wins = winning_moves(board, Player::Human);
    if !wins.is_empty() {
        return Situation::HumanCanWin(wins);
    }
    let threats = winning_moves(board, Player::Ai);
    if !threats.is_empty() {
        return Situation::AiCanWin(threats);
    }
    let fours = moves_reaching_threshold(board, Player::Human, Category::OpenFour);
    if !fours.is_empty() {
        return Situation::HumanOpenFour(fours);
    }
    let fours = moves_reaching_threshold(board, Player::Ai, Category::OpenFour);
    if !fours.is_empty() {
        return Situation::AiOpenFour(fours);
    }
    let threes = moves_reaching_threshold(board, Player::Human, Category::OpenThree);
    if !threes.is_empty() {
        return Situation::HumanOpenThree(threes);
    }
    Situation::Quiet
}

/// Cells worth highlighting for the human, possibly none
pub fn hint_cells(board: &mut Board) -> Vec<Move> {
    assess(board).cells().to_vec()
}

/// Tips for the player whose turn it is
pub fn advisory_text(board: &mut Board, turn: Player) -> Vec<String> {
    if turn == Player::Ai {
        return vec![AI_THINKING.to_string()];
    }

    let tip = match assess(board) {
        Situation::HumanCanWin(_) => return vec![HUMAN_CAN_WIN.to_string()],
        Situation::AiCanWin(_) => return vec![AI_CAN_WIN.to_string()],
        Situation::HumanOpenFour(_) => return vec![HUMAN_OPEN_FOUR.to_string()],
        Situation::AiOpenFour(_) => return vec![AI_OPEN_FOUR.to_string()],
        Situation::HumanOpenThree(_) => Some(HUMAN_OPEN_THREE),
        Situation::Quiet => None,
    };

    tip.into_iter()
        .chain(std::iter::once(GENERAL_TIP))
        .map(String::from)
        .collect()
}
