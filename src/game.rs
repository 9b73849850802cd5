use anyhow::{anyhow, Result};
use log::info;

use crate::advice::{advisory_text, hint_cells};
use crate::board::{Board, Move, Player};
use crate::strategy::{Difficulty, Strategy};
use crate::BOARD_SIZE;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    HumanWin,
    AiWin,
    Draw,
}

/// A single human-versus-AI game
pub struct Game {
    board: Board,
    strategy: Box<dyn Strategy>,
    turn: Player,
    moves: Vec<Move>,
    state: GameState,
}

impl Game {
    pub fn new(difficulty: Difficulty, first: Player) -> Self {
        Self::with_strategy(difficulty.strategy(), first)
    }

    pub fn with_strategy(strategy: Box<dyn Strategy>, first: Player) -> Self {
        Self {
            board: Board::new(),
            strategy,
            turn: first,
            moves: Vec::new(),
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Every move committed so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Plays a human move, rejecting it if it is not legal right now
    pub fn play_checked(&mut self, mv: Move) -> Result<GameState> {
        self.check_turn(Player::Human)?;
        if !Board::in_bounds(mv.x as i32, mv.y as i32) {
            return Err(anyhow!(
                "Invalid move, cell {} out of range. Coordinates must be between 1 and {}",
                mv,
                BOARD_SIZE
            ));
        }
        if !self.board.is_empty(mv) {
            return Err(anyhow!("Invalid move, cell {} is occupied", mv));
        }

        Ok(self.commit(mv, Player::Human))
    }

    /// Lets the AI choose and play its move
    ///
    /// Returns the move played, or `None` if the board was full and the
    /// game ended in a draw.
    pub fn play_ai(&mut self) -> Result<(Option<Move>, GameState)> {
        self.check_turn(Player::Ai)?;

        match self.strategy.choose_move(&mut self.board) {
            Some(mv) => {
                info!("{} AI plays {}", self.strategy.difficulty(), mv);
                Ok((Some(mv), self.commit(mv, Player::Ai)))
            }
            None => {
                self.state = GameState::Draw;
                Ok((None, self.state))
            }
        }
    }

    /// Cells to highlight for the human in the current position
    pub fn hints(&mut self) -> Vec<Move> {
        hint_cells(&mut self.board)
    }

    /// Tips for whoever is to move in the current position
    pub fn advice(&mut self) -> Vec<String> {
        advisory_text(&mut self.board, self.turn)
    }

    fn check_turn(&self, player: Player) -> Result<()> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is already over"));
        }
        if self.turn != player {
            return Err(anyhow!("Invalid move, it is not the {:?} player's turn", player));
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move, player: Player) -> GameState {
        self.board.apply_move(mv, player);
        self.moves.push(mv);

        self.state = if self.board.has_won(player) {
            match player {
                Player::Human => GameState::HumanWin,
                Player::Ai => GameState::AiWin,
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.turn = player.opponent();
        self.state
    }
}
