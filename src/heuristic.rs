//! Static positional scoring used to break ties between quiet moves.
//!
//! For each direction through a candidate drop cell the scorer looks at the
//! 7-cell window reaching three steps either way. A direction is "promising"
//! when its window already holds at least two of the player's stones and at
//! least two empty cells. The score of a column is its number of promising
//! directions.

use crate::board::{Board, Cell, Player};
use crate::constants::{
    DIRECTIONS, Direction, ILLEGAL_SCORE, MIN_EMPTY_IN_WINDOW, MIN_OWN_IN_WINDOW, WINDOW_REACH,
};

/// Score dropping `player`'s stone into `(x, y)`.
///
/// Returns [`ILLEGAL_SCORE`] for a full column. The board is only read; the
/// drop cell itself is counted as the empty cell it currently is.
pub fn score_column(board: &Board, x: usize, y: usize, player: Player) -> i32 {
    let Some(z) = board.drop_height(x, y) else {
        return ILLEGAL_SCORE;
    };
    let origin = (x as isize, y as isize, z as isize);
    let own = Cell::from(player);

    DIRECTIONS
        .iter()
        .filter(|&&dir| {
            let (mine, empty) = window_counts(board, origin, dir, own);
            mine >= MIN_OWN_IN_WINDOW && empty >= MIN_EMPTY_IN_WINDOW
        })
        .count() as i32
}

/// Own and empty cells in the window `origin - 3*dir ..= origin + 3*dir`.
/// Offsets that leave the board are skipped.
fn window_counts(
    board: &Board,
    (x, y, z): (isize, isize, isize),
    (dx, dy, dz): Direction,
    own: Cell,
) -> (usize, usize) {
    let mut mine = 0;
    let mut empty = 0;
    for d in -WINDOW_REACH..=WINDOW_REACH {
        match board.cell_at(x + dx * d, y + dy * d, z + dz * d) {
            Some(c) if c == own => mine += 1,
            Some(Cell::Empty) => empty += 1,
            _ => {}
        }
    }
    (mine, empty)
}
