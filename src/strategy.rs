//! The three AI difficulty tiers

use anyhow::{anyhow, Result};
use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Move, Player};
use crate::evaluation::Category;
use crate::search::{SearchConfig, Searcher};
use crate::tactics::{best_move_at_or_above, winning_moves};

/// A way of picking the AI's next move
pub trait Strategy {
    /// Picks a move for the AI, or `None` if the board is full
    ///
    /// The board may be explored in place but is unchanged on return.
    fn choose_move(&mut self, board: &mut Board) -> Option<Move>;

    fn difficulty(&self) -> Difficulty;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Creates the strategy for this tier with an entropy-seeded RNG
    pub fn strategy(self) -> Box<dyn Strategy> {
        self.strategy_from_rng(StdRng::from_entropy())
    }

    /// Creates the strategy for this tier with a reproducible RNG
    pub fn strategy_with_seed(self, seed: u64) -> Box<dyn Strategy> {
        self.strategy_from_rng(StdRng::seed_from_u64(seed))
    }

    fn strategy_from_rng(self, rng: StdRng) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(Easy::new(rng)),
            Difficulty::Medium => Box::new(Medium::new(rng)),
            Difficulty::Hard => Box::new(Hard::new(rng, SearchConfig::default())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "e" | "easy" => Ok(Difficulty::Easy),
            "2" | "m" | "medium" => Ok(Difficulty::Medium),
            "3" | "h" | "hard" => Ok(Difficulty::Hard),
            other => Err(anyhow!("unknown difficulty '{}'", other)),
        }
    }
}

/// Picks an AI move with a fresh strategy for `difficulty`
pub fn choose_ai_move(board: &mut Board, difficulty: Difficulty) -> Option<Move> {
    difficulty.strategy().choose_move(board)
}

/// Picks any empty cell uniformly, `None` on a full board
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    board.empty_cells().choose(rng).copied()
}

// completes our own five, or else stops the opponent's
fn win_or_block(board: &mut Board) -> Option<Move> {
    if let Some(&mv) = winning_moves(board, Player::Ai).first() {
        debug!("taking the win at {}", mv);
        return Some(mv);
    }
    if let Some(&mv) = winning_moves(board, Player::Human).first() {
        debug!("blocking the win at {}", mv);
        return Some(mv);
    }
    None
}

/// Wins or blocks a win when it can, otherwise plays randomly
pub struct Easy {
    rng: StdRng,
}

impl Easy {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for Easy {
    fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        win_or_block(board).or_else(|| random_move(board, &mut self.rng))
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }
}

/// Like [`Easy`], but also blocks and builds open threes greedily
pub struct Medium {
    rng: StdRng,
}

impl Medium {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for Medium {
    fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        let threshold = Category::OpenThree.score();
        win_or_block(board)
            .or_else(|| best_move_at_or_above(board, Player::Human, threshold))
            .or_else(|| best_move_at_or_above(board, Player::Ai, threshold))
            .or_else(|| random_move(board, &mut self.rng))
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }
}

/// Full minimax search, random only when the search finds nothing
pub struct Hard {
    rng: StdRng,
    searcher: Searcher,
}

impl Hard {
    pub fn new(rng: StdRng, config: SearchConfig) -> Self {
        Self {
            rng,
            searcher: Searcher::new(config),
        }
    }
}

impl Strategy for Hard {
    fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        let result = self.searcher.search(board, Player::Ai);
        result
            .best_move
            .or_else(|| random_move(board, &mut self.rng))
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }
}
