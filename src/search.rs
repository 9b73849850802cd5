//! A time-bounded minimax search over candidate moves

use log::debug;

use std::time::{Duration, Instant};

use crate::board::{Board, Move, Player};
use crate::evaluation::evaluate_board;

/// The default search depth in plies, including the root move
pub const DEFAULT_DEPTH: usize = 3;

/// The default wall-clock budget of a single search
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Limits for a search
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    /// Plies searched, the root move counting as the first
    pub depth: usize,
    /// Wall-clock budget measured from the start of the search
    pub time_limit: Duration,
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

/// The outcome of a top-level search
#[derive(Copy, Clone, Debug)]
pub struct SearchResult {
    /// The highest valued root move, `None` if there were no candidates
    pub best_move: Option<Move>,
    /// The value of `best_move` from the searching player's point of view
    pub score: i32,
    pub node_count: usize,
    /// Whether any node fell back to a static evaluation because the
    /// time budget ran out
    pub timed_out: bool,
}

/// A minimax agent with alpha-beta pruning
///
/// # Notes
/// Every node is valued with [`evaluate_board`] from the perspective of the
/// player the top-level search runs for, on maximizing and minimizing layers
/// alike. The search walks the caller's board in place, placing and removing
/// stones as it goes, and leaves it unchanged when it returns.
///
/// # Time Budget
/// The deadline is checked cooperatively on entry to every node. Once it has
/// passed, each remaining node returns its static evaluation instead of
/// searching deeper, so a search overruns its budget by at most the cost of
/// finishing the root loop with static evaluations.
#[derive(Clone, Debug)]
pub struct Searcher {
    config: SearchConfig,
    player: Player,
    deadline: Instant,
    timed_out: bool,

    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            player: Player::Ai,
            deadline: Instant::now(),
            timed_out: false,
            node_count: 0,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Searches every candidate move for `player` and returns the best one
    ///
    /// Each root move gets its own full window, and the first move with the
    /// strictly highest value wins.
    pub fn search(&mut self, board: &mut Board, player: Player) -> SearchResult {
        let start = Instant::now();
        self.deadline = start + self.config.time_limit;
        self.player = player;
        self.timed_out = false;
        self.node_count = 0;

        let depth = self.config.depth.saturating_sub(1);
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for mv in board.candidate_moves() {
            let score = {
                let mut next = board.place_scoped(mv, player);
                // the opponent replies to the root move
                self.minimax(&mut next, depth, i32::MIN, i32::MAX, false)
            };
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        debug!(
            "searched {} nodes in {:.3}s{}, best move {:?} scoring {}",
            self.node_count,
            start.elapsed().as_secs_f64(),
            if self.timed_out { " (out of time)" } else { "" },
            best_move,
            best_score
        );

        SearchResult {
            best_move,
            score: best_score,
            node_count: self.node_count,
            timed_out: self.timed_out,
        }
    }

    /// Values the position `depth` plies deep with alpha-beta pruning
    ///
    /// `maximizing` is true when the searching player is to move.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        if Instant::now() > self.deadline {
            self.timed_out = true;
            return evaluate_board(board, self.player);
        }

        let opponent = self.player.opponent();
        if depth == 0
            || board.has_five_in_a_row(self.player)
            || board.has_five_in_a_row(opponent)
        {
            return evaluate_board(board, self.player);
        }

        let candidates = board.candidate_moves();
        // a full board has nowhere left to explore
        if candidates.is_empty() {
            return evaluate_board(board, self.player);
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in candidates {
                let eval = {
                    let mut next = board.place_scoped(mv, self.player);
                    self.minimax(&mut next, depth - 1, alpha, beta, false)
                };
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for mv in candidates {
                let eval = {
                    let mut next = board.place_scoped(mv, opponent);
                    self.minimax(&mut next, depth - 1, alpha, beta, true)
                };
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
