//! Static evaluation of stone patterns
//!
//! Every stone is scored per axis by the shape of the run it belongs to:
//! how many stones are connected and how many of the run's two ends are
//! blocked by an opponent stone or the edge of the board.

use crate::board::{Board, Cell, Move, Player, DIRECTIONS};

/// The threat taxonomy, from most to least severe
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Category {
    Five,
    OpenFour,
    BlockedFour,
    OpenThree,
    BlockedThree,
    OpenTwo,
    BlockedTwo,
}

impl Category {
    /// All categories in order of decreasing severity
    pub const ALL: [Category; 7] = [
        Category::Five,
        Category::OpenFour,
        Category::BlockedFour,
        Category::OpenThree,
        Category::BlockedThree,
        Category::OpenTwo,
        Category::BlockedTwo,
    ];

    /// The heuristic weight of the category
    pub const fn score(self) -> i32 {
        match self {
            // large enough that no sum of lesser patterns reaches it
            Category::Five => 1_000_000,
            Category::OpenFour => 10_000,
            Category::BlockedFour => 2_000,
            Category::OpenThree => 1_000,
            Category::BlockedThree => 200,
            Category::OpenTwo => 100,
            Category::BlockedTwo => 10,
        }
    }
}

/// The run through a stone along one axis
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LineShape {
    /// Connected stones, including the origin
    pub count: usize,
    /// Number of blocked ends, 0 to 2
    pub block: usize,
}

impl LineShape {
    pub fn category(self) -> Option<Category> {
        classify(self.count, self.block)
    }
}

/// Maps a run length and its blocked ends to a threat category
///
/// A run blocked at both ends is dead unless it already makes five.
pub fn classify(count: usize, block: usize) -> Option<Category> {
    match (count, block) {
        (c, _) if c >= 5 => Some(Category::Five),
        (4, 0) => Some(Category::OpenFour),
        (3, 0) => Some(Category::OpenThree),
        (2, 0) => Some(Category::OpenTwo),
        (4, 1) => Some(Category::BlockedFour),
        (3, 1) => Some(Category::BlockedThree),
        (2, 1) => Some(Category::BlockedTwo),
        _ => None,
    }
}

/// Measures the run of `player` stones through `origin` along `(dx, dy)`
///
/// The origin is assumed to hold a `player` stone.
pub fn line_shape(board: &Board, origin: Move, dx: i32, dy: i32, player: Player) -> LineShape {
    let stone = player.cell();
    let (forward, forward_blocked) = walk(board, origin, dx, dy, stone);
    let (backward, backward_blocked) = walk(board, origin, -dx, -dy, stone);

    LineShape {
        count: 1 + forward + backward,
        block: forward_blocked as usize + backward_blocked as usize,
    }
}

// counts stones past the origin, and whether the run ends blocked
fn walk(board: &Board, origin: Move, dx: i32, dy: i32, stone: Cell) -> (usize, bool) {
    let (mut x, mut y) = (origin.x as i32 + dx, origin.y as i32 + dy);
    let mut count = 0;
    loop {
        match board.cell_at(x, y) {
            Some(cell) if cell == stone => count += 1,
            Some(Cell::Empty) => return (count, false),
            // opponent stone or the edge of the board
            _ => return (count, true),
        }
        x += dx;
        y += dy;
    }
}

/// Scores a single axis through a stone
pub fn evaluate_line(board: &Board, origin: Move, dx: i32, dy: i32, player: Player) -> i32 {
    line_shape(board, origin, dx, dy, player)
        .category()
        .map_or(0, Category::score)
}

/// Scores a stone over all four axes
pub fn evaluate_position(board: &Board, origin: Move, player: Player) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| evaluate_line(board, origin, dx, dy, player))
        .sum()
}

/// Scores the whole board from `player`'s point of view
///
/// The sum over `player`'s stones minus the sum over the opponent's stones.
pub fn evaluate_board(board: &Board, player: Player) -> i32 {
    let opponent = player.opponent();
    let own: i32 = board
        .stones(player)
        .map(|mv| evaluate_position(board, mv, player))
        .sum();
    let theirs: i32 = board
        .stones(opponent)
        .map(|mv| evaluate_position(board, mv, opponent))
        .sum();
    own - theirs
}
