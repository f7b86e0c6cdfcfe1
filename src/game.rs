//! Whole games between two policies.

use crate::board::{Board, Player};
use crate::policy::Policy;
use crate::win::has_four_through;

/// How a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player connected four after the given number of moves.
    Won(Player, usize),
    /// The board filled up without a line of four.
    Draw,
}

/// Play `board` to the end, player one using `one` and player two using `two`.
///
/// The side to move is inferred from the board, so a game can be resumed from
/// any position. A position that is already won ends at once with zero moves.
/// A policy that answers with a full column ends the game as a draw.
pub fn play_game(one: &mut dyn Policy, two: &mut dyn Policy, board: &mut Board) -> Outcome {
    if let Some(player) = board.winner() {
        return Outcome::Won(player, 0);
    }
    let mut moves = 0;
    while !board.is_full() {
        let player = board.side_to_move();
        let policy: &mut dyn Policy = match player {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };
        let (x, y) = policy.choose(board);
        let Ok(z) = board.play(x, y, player) else {
            log::warn!("player {player} chose unplayable column ({x}, {y})");
            break;
        };
        moves += 1;
        if has_four_through(board, x, y, z, player) {
            return Outcome::Won(player, moves);
        }
    }
    Outcome::Draw
}
