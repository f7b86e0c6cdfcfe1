//! Property tests over generated positions.
//!
//! Positions come from random game prefixes: a list of column picks played
//! alternately, skipping full columns and stopping at the first win, so every
//! generated board is one the engine could meet in a real game.
//!
//! Invariants covered:
//! - The chosen column is on the board and open.
//! - Deciding never changes the board.
//! - A win is always taken, and a forced block is always played.
//! - The same seed gives the same choice.

use proptest::prelude::*;

use cube4::board::{Board, Column};
use cube4::constants::{COLUMNS, FALLBACK_MOVE, SIZE};
use cube4::policy::{Engine, Policy, Reason};
use cube4::simulate::would_win;
use cube4::win::has_four_through;

/// Replay `picks` as a game that stops before anyone connects four.
fn board_from_picks(picks: &[usize]) -> Board {
    let mut board = Board::new();
    for &pick in picks {
        let legal = board.legal_columns();
        if legal.is_empty() {
            break;
        }
        let (x, y) = legal[pick % legal.len()];
        let player = board.side_to_move();
        let z = board.play(x, y, player).unwrap();
        if has_four_through(&board, x, y, z, player) {
            // Keep the position before the winning move so play can continue.
            board = board_without(&board, x, y, z);
            break;
        }
    }
    board
}

fn board_without(board: &Board, x: usize, y: usize, z: usize) -> Board {
    let mut grid = board.to_grid();
    grid[z][y][x] = 0;
    Board::from_grid(&grid).unwrap()
}

fn picks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..COLUMNS, 0..64)
}

proptest! {
    #[test]
    fn chosen_column_is_legal(picks in picks(), seed in any::<u64>()) {
        let mut board = board_from_picks(&picks);
        let (x, y) = Engine::with_seed(seed).choose(&mut board);
        prop_assert!(x < SIZE && y < SIZE);
        if board.legal_columns().is_empty() {
            prop_assert_eq!((x, y), FALLBACK_MOVE);
        } else {
            prop_assert!(board.drop_height(x, y).is_some());
        }
    }

    #[test]
    fn deciding_leaves_board_unchanged(picks in picks(), seed in any::<u64>()) {
        let mut board = board_from_picks(&picks);
        let before = board.clone();
        Engine::with_seed(seed).decide(&mut board);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn wins_are_taken_and_blocks_are_played(picks in picks(), seed in any::<u64>()) {
        let mut board = board_from_picks(&picks);
        let me = board.side_to_move();
        let legal = board.legal_columns();
        let can_win = legal.iter().any(|&(x, y)| would_win(&mut board, x, y, me));
        let must_block = legal
            .iter()
            .any(|&(x, y)| would_win(&mut board, x, y, me.opponent()));

        let d = Engine::with_seed(seed).decide(&mut board);
        let (x, y) = d.column;
        if can_win {
            prop_assert_eq!(d.reason, Reason::Win);
            prop_assert!(would_win(&mut board, x, y, me));
        } else if must_block {
            prop_assert_eq!(d.reason, Reason::Block);
            prop_assert!(would_win(&mut board, x, y, me.opponent()));
        }
    }

    #[test]
    fn same_seed_same_choice(picks in picks(), seed in any::<u64>()) {
        let mut board = board_from_picks(&picks);
        let a: Column = Engine::with_seed(seed).choose(&mut board);
        let b: Column = Engine::with_seed(seed).choose(&mut board);
        prop_assert_eq!(a, b);
    }
}
