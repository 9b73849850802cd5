use anyhow::{anyhow, Result};

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::{BOARD_SIZE, WIN_LENGTH};

/// The four line axes: horizontal, vertical, diagonal-down and diagonal-up.
/// Their opposites are covered by walking each axis both ways.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// The cell value a stone of this player occupies
    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Ai => Cell::Ai,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    Human,
    Ai,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Ai => Some(Player::Ai),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'X',
            Cell::Ai => 'O',
        }
    }
}

/// A board coordinate, 0-indexed
///
/// Moves order by `x` first, then `y`, which is the order every
/// move generator in this crate yields them in.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, PartialOrd, Ord)]
pub struct Move {
    pub x: u8,
    pub y: u8,
}

impl Move {
    pub fn new(x: usize, y: usize) -> Self {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        Self {
            x: x as u8,
            y: y as u8,
        }
    }

    /// The centre cell, where the first stone of a game is placed
    pub fn center() -> Self {
        Self::new(BOARD_SIZE / 2, BOARD_SIZE / 2)
    }

    fn index(self) -> usize {
        self.x as usize * BOARD_SIZE + self.y as usize
    }

    fn from_index(index: usize) -> Self {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }
}

/// Moves are written 1-indexed as `x y` for people
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x as usize + 1, self.y as usize + 1)
    }
}

/// Parses a 1-indexed `x y` or `x,y` pair
impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let mut coordinate = |name: &str| -> Result<usize> {
            let part = parts
                .next()
                .ok_or_else(|| anyhow!("missing {} coordinate in '{}'", name, s.trim()))?;
            let value = part
                .parse::<usize>()
                .map_err(|_| anyhow!("could not parse '{}' as a coordinate", part))?;
            if value < 1 || value > BOARD_SIZE {
                return Err(anyhow!(
                    "coordinate {} out of range. Coordinates must be between 1 and {}",
                    value,
                    BOARD_SIZE
                ));
            }
            Ok(value - 1)
        };

        let x = coordinate("x")?;
        let y = coordinate("y")?;
        if let Some(extra) = parts.next() {
            return Err(anyhow!("unexpected trailing input '{}'", extra));
        }
        Ok(Move::new(x, y))
    }
}

/// The game grid
///
/// # Notes
/// The board has no move history. Search explores positions by placing a
/// stone and removing it again, always through [`Board::place_scoped`] so
/// that every exploration leaves the board exactly as it found it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    // cells are stored column by column: index = x * BOARD_SIZE + y
    cells: [Cell; NUM_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Parses a board from rows of text, one string per `y`, one character per `x`
    ///
    /// `.` is an empty cell, `X` a human stone and `O` an AI stone.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(anyhow!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            ));
        }

        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != BOARD_SIZE {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    y + 1,
                    row.chars().count(),
                    BOARD_SIZE
                ));
            }
            for (x, symbol) in row.chars().enumerate() {
                let cell = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::Human,
                    'O' | 'o' => Cell::Ai,
                    _ => return Err(anyhow!("could not parse '{}' as a cell", symbol)),
                };
                board.cells[Move::new(x, y).index()] = cell;
            }
        }
        Ok(board)
    }

    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// The cell at signed coordinates, or `None` past the edge of the board
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        if Self::in_bounds(x, y) {
            Some(self.cells[x as usize * BOARD_SIZE + y as usize])
        } else {
            None
        }
    }

    /// Returns whether the cell is on the board and unoccupied
    pub fn is_empty(&self, mv: Move) -> bool {
        self.cell_at(mv.x as i32, mv.y as i32) == Some(Cell::Empty)
    }

    pub fn is_legal_move(&self, x: i32, y: i32) -> bool {
        self.cell_at(x, y) == Some(Cell::Empty)
    }

    /// Puts a stone on the board without any legality check
    pub fn place(&mut self, mv: Move, player: Player) {
        self.cells[mv.index()] = player.cell();
    }

    /// Removes whatever stone is on the cell
    pub fn clear(&mut self, mv: Move) {
        self.cells[mv.index()] = Cell::Empty;
    }

    /// Commits a move permanently. The caller checks legality first.
    pub fn apply_move(&mut self, mv: Move, player: Player) {
        debug_assert!(self.is_empty(mv), "move {} onto an occupied cell", mv);
        self.place(mv, player);
    }

    /// Places a stone for the lifetime of the returned guard
    ///
    /// The guard dereferences to the board, so the placed position can be
    /// inspected and explored further (including nested placements). The
    /// stone is removed when the guard is dropped.
    pub fn place_scoped(&mut self, mv: Move, player: Player) -> Placement<'_> {
        debug_assert!(self.is_empty(mv), "scoped move {} onto an occupied cell", mv);
        self.place(mv, player);
        Placement { board: self, mv }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// All empty cells in move order
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| Move::from_index(index))
            .collect()
    }

    /// Iterates over the cells holding a stone of `player`
    pub fn stones(&self, player: Player) -> impl Iterator<Item = Move> + '_ {
        let stone = player.cell();
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == stone)
            .map(|(index, _)| Move::from_index(index))
    }

    /// Returns whether `player` has `WIN_LENGTH` stones in a line anywhere
    pub fn has_five_in_a_row(&self, player: Player) -> bool {
        let stone = player.cell();
        self.stones(player).any(|mv| {
            DIRECTIONS
                .iter()
                .any(|&(dx, dy)| self.run_length(mv, dx, dy, stone) == WIN_LENGTH)
        })
    }

    pub fn has_won(&self, player: Player) -> bool {
        self.has_five_in_a_row(player)
    }

    // consecutive matching stones from `from` onwards, capped at WIN_LENGTH
    fn run_length(&self, from: Move, dx: i32, dy: i32, stone: Cell) -> usize {
        (0..WIN_LENGTH as i32)
            .take_while(|&i| {
                self.cell_at(from.x as i32 + i * dx, from.y as i32 + i * dy) == Some(stone)
            })
            .count()
    }

    /// Returns the empty cells next to (including diagonally) any stone
    ///
    /// An empty board yields only the centre cell, a full board yields nothing.
    pub fn candidate_moves(&self) -> Vec<Move> {
        let mut marked = [false; NUM_CELLS];
        let mut occupied = false;

        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            occupied = true;
            let origin = Move::from_index(index);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let (x, y) = (origin.x as i32 + dx, origin.y as i32 + dy);
                    if self.cell_at(x, y) == Some(Cell::Empty) {
                        marked[x as usize * BOARD_SIZE + y as usize] = true;
                    }
                }
            }
        }

        if !occupied {
            return vec![Move::center()];
        }
        marked
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m)
            .map(|(index, _)| Move::from_index(index))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            let row: String = (0..BOARD_SIZE)
                .map(|x| self.get(Move::new(x, y)).symbol())
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// A stone placed by [`Board::place_scoped`], removed again on drop
pub struct Placement<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Placement<'_> {
    /// The cell this guard occupies
    pub fn placed(&self) -> Move {
        self.mv
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv);
    }
}
