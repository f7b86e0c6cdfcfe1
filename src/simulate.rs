//! Speculative placement with guaranteed rollback.
//!
//! A [`Placement`] drops a stone into a column for as long as the guard is
//! alive. Dropping the guard empties the cell again, so the board always
//! returns to its previous contents whichever way the caller leaves the scope.

use std::ops::Deref;

use crate::board::{Board, Cell, Player};
use crate::win::has_four_through;

/// A stone placed for the lifetime of the guard.
pub struct Placement<'a> {
    board: &'a mut Board,
    x: usize,
    y: usize,
    z: usize,
}

impl<'a> Placement<'a> {
    /// Place `player`'s stone at the drop height of `(x, y)`.
    ///
    /// Returns `None`, leaving the board untouched, when the column is full.
    pub fn new(board: &'a mut Board, x: usize, y: usize, player: Player) -> Option<Self> {
        let z = board.drop_height(x, y)?;
        board.set(x, y, z, Cell::from(player));
        Some(Self { board, x, y, z })
    }

    /// Height the stone landed at.
    pub fn z(&self) -> usize {
        self.z
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.x, self.y, self.z, Cell::Empty);
    }
}

/// Would dropping `player`'s stone into `(x, y)` complete four in a row?
///
/// A full column never wins. The board is unchanged on return.
pub fn would_win(board: &mut Board, x: usize, y: usize, player: Player) -> bool {
    match Placement::new(board, x, y, player) {
        Some(placed) => has_four_through(&placed, x, y, placed.z(), player),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SIZE;

    #[test]
    fn test_placement_restores_on_drop() {
        let mut board = Board::new();
        board.play(1, 1, Player::One).unwrap();
        let before = board.clone();
        {
            let placed = Placement::new(&mut board, 1, 1, Player::Two).unwrap();
            assert_eq!(placed.z(), 1);
            assert_eq!(placed.get(1, 1, 1), Cell::PlayerTwo);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_placement_on_full_column() {
        let mut board = Board::new();
        for _ in 0..SIZE {
            board.play(0, 3, Player::One).unwrap();
        }
        let before = board.clone();
        assert!(Placement::new(&mut board, 0, 3, Player::Two).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_would_win_vertical() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.play(2, 2, Player::One).unwrap();
        }
        let before = board.clone();
        assert!(would_win(&mut board, 2, 2, Player::One));
        assert!(!would_win(&mut board, 2, 2, Player::Two));
        assert!(!would_win(&mut board, 1, 2, Player::One));
        assert_eq!(board, before);
    }

    #[test]
    fn test_would_win_full_column_is_false() {
        let mut board = Board::new();
        for _ in 0..SIZE {
            board.play(0, 0, Player::One).unwrap();
        }
        assert!(!would_win(&mut board, 0, 0, Player::One));
    }

    #[test]
    fn test_would_win_respects_gravity() {
        // Three in a row on z = 1; the gap column is empty, so a stone there
        // lands on z = 0 and does not complete the line.
        let mut board = Board::new();
        for x in 0..3 {
            board.play(x, 0, Player::Two).unwrap();
            board.play(x, 0, Player::One).unwrap();
        }
        assert!(!would_win(&mut board, 3, 0, Player::One));
        board.play(3, 0, Player::Two).unwrap();
        assert!(would_win(&mut board, 3, 0, Player::One));
    }
}
