//! The 4x4x4 board and its query layer.
//!
//! Cells are indexed `[z][y][x]` with `z = 0` the bottom layer. Stones fall
//! under gravity, so the occupied cells of a column always form a contiguous
//! run starting at `z = 0`. Every query here relies on that invariant, and
//! every constructor that accepts outside input checks it.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, COLUMNS, SIZE};
use crate::error::{BoardError, MoveError};
use crate::win::has_four_through;

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Integer code used by the host grid format.
    pub fn code(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "one"),
            Player::Two => write!(f, "two"),
        }
    }
}

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Decode a host grid value (0 = empty, 1 = player one, 2 = player two).
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::PlayerOne),
            2 => Some(Cell::PlayerTwo),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => 2,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the stone in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// A column `(x, y)`: one of the 16 vertical stacks.
pub type Column = (usize, usize);

/// The host's raw board layout, indexed `[z][y][x]`.
pub type Grid = [[[u8; SIZE]; SIZE]; SIZE];

/// True iff all three coordinates lie in `0..SIZE`.
#[inline]
pub fn in_bounds(x: isize, y: isize, z: isize) -> bool {
    let n = SIZE as isize;
    (0..n).contains(&x) && (0..n).contains(&y) && (0..n).contains(&z)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[[Cell; SIZE]; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[[Cell::Empty; SIZE]; SIZE]; SIZE],
        }
    }

    /// Build a board from the host grid, rejecting unknown codes and floating stones.
    pub fn from_grid(grid: &Grid) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for (z, layer) in grid.iter().enumerate() {
            for (y, row) in layer.iter().enumerate() {
                for (x, &value) in row.iter().enumerate() {
                    board.cells[z][y][x] = Cell::from_code(value)
                        .ok_or(BoardError::InvalidCell { value, x, y, z })?;
                }
            }
        }
        board.check_gravity()?;
        Ok(board)
    }

    pub fn to_grid(&self) -> Grid {
        let mut grid = [[[0u8; SIZE]; SIZE]; SIZE];
        for z in 0..SIZE {
            for y in 0..SIZE {
                for x in 0..SIZE {
                    grid[z][y][x] = self.cells[z][y][x].code();
                }
            }
        }
        grid
    }

    /// Cell at `(x, y, z)`. Coordinates must be in range.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Cell {
        self.cells[z][y][x]
    }

    /// Cell at a signed coordinate, or `None` when it is off the board.
    #[inline]
    pub fn cell_at(&self, x: isize, y: isize, z: isize) -> Option<Cell> {
        if in_bounds(x, y, z) {
            Some(self.cells[z as usize][y as usize][x as usize])
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, z: usize, cell: Cell) {
        self.cells[z][y][x] = cell;
    }

    /// The z a stone dropped into `(x, y)` would occupy, or `None` if the column is full.
    pub fn drop_height(&self, x: usize, y: usize) -> Option<usize> {
        (0..SIZE).find(|&z| self.cells[z][y][x].is_empty())
    }

    /// All columns that still accept a stone, `y` outer and `x` inner.
    pub fn legal_columns(&self) -> Vec<Column> {
        let mut columns = Vec::with_capacity(COLUMNS);
        for y in 0..SIZE {
            for x in 0..SIZE {
                if self.drop_height(x, y).is_some() {
                    columns.push((x, y));
                }
            }
        }
        columns
    }

    /// Number of stones `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().flatten().flatten().filter(|&&c| c == cell).count()
    }

    pub fn stones(&self) -> usize {
        self.cells.iter().flatten().flatten().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.stones() == CELLS
    }

    /// The side to move, inferred from stone counts.
    ///
    /// Player one moves first, so player one is on move whenever it has no more
    /// stones than player two.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::One) <= self.count(Player::Two) {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The player owning a line of four anywhere on the board.
    ///
    /// Only one side can have connected four in a real game; if a loaded
    /// position has lines for both, the first found in `z`, `y`, `x` order wins.
    pub fn winner(&self) -> Option<Player> {
        for z in 0..SIZE {
            for y in 0..SIZE {
                for x in 0..SIZE {
                    if let Some(player) = self.cells[z][y][x].player() {
                        if has_four_through(self, x, y, z, player) {
                            return Some(player);
                        }
                    }
                }
            }
        }
        None
    }

    /// Drop a stone for `player` into `(x, y)` and return the z it landed on.
    pub fn play(&mut self, x: usize, y: usize, player: Player) -> Result<usize, MoveError> {
        if x >= SIZE || y >= SIZE {
            return Err(MoveError::OutOfBounds { x, y });
        }
        let z = self.drop_height(x, y).ok_or(MoveError::ColumnFull { x, y })?;
        self.cells[z][y][x] = Cell::from(player);
        Ok(z)
    }

    fn check_gravity(&self) -> Result<(), BoardError> {
        for z in 1..SIZE {
            for y in 0..SIZE {
                for x in 0..SIZE {
                    if !self.cells[z][y][x].is_empty() && self.cells[z - 1][y][x].is_empty() {
                        return Err(BoardError::FloatingStone { x, y, z });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Parses 64 cell symbols in `z`, `y`, `x` order. Whitespace is ignored.
///
/// Accepted symbols: `0`/`.` empty, `1`/`X` player one, `2`/`O` player two.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut codes = Vec::with_capacity(CELLS);
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let code = match ch {
                '0' | '.' => 0,
                '1' | 'X' | 'x' => 1,
                '2' | 'O' | 'o' => 2,
                other => return Err(BoardError::Parse(format!("unexpected symbol '{other}'"))),
            };
            codes.push(code);
        }
        if codes.len() != CELLS {
            return Err(BoardError::Parse(format!(
                "expected {CELLS} cells, got {}",
                codes.len()
            )));
        }

        let mut grid = [[[0u8; SIZE]; SIZE]; SIZE];
        for (i, code) in codes.into_iter().enumerate() {
            grid[i / (SIZE * SIZE)][(i / SIZE) % SIZE][i % SIZE] = code;
        }
        Board::from_grid(&grid)
    }
}

/// Layers are printed top first, so the picture reads like a stack.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in (0..SIZE).rev() {
            writeln!(f, "z={z}")?;
            for y in 0..SIZE {
                for x in 0..SIZE {
                    write!(f, "{} ", self.cells[z][y][x].symbol())?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
