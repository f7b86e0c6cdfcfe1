//! Four-in-a-row detection through a single cell.

use crate::board::{Board, Cell, Player};
use crate::constants::{DIRECTIONS, Direction, WIN_LENGTH, WINDOW_REACH};

/// Check whether the stone at `(x, y, z)` completes a line of four for `player`.
///
/// The cell is expected to already hold `player`'s stone; this only looks.
/// For every direction the run is walked outwards on both sides until the
/// first cell that is off the board or not `player`'s.
pub fn has_four_through(board: &Board, x: usize, y: usize, z: usize, player: Player) -> bool {
    let stone = Cell::from(player);
    let origin = (x as isize, y as isize, z as isize);

    DIRECTIONS.iter().any(|&dir| {
        let forward = run_length(board, origin, dir, 1, stone);
        let backward = run_length(board, origin, dir, -1, stone);
        1 + forward + backward >= WIN_LENGTH
    })
}

/// Contiguous `stone` cells stepping away from `origin` along `sign * dir`.
fn run_length(
    board: &Board,
    (x, y, z): (isize, isize, isize),
    (dx, dy, dz): Direction,
    sign: isize,
    stone: Cell,
) -> usize {
    (1..=WINDOW_REACH)
        .take_while(|&d| {
            let step = sign * d;
            board.cell_at(x + dx * step, y + dy * step, z + dz * step) == Some(stone)
        })
        .count()
}
