//! Move selection.
//!
//! [`Engine`] is a greedy one-ply policy. In strict priority order it:
//! 1. falls back to [`FALLBACK_MOVE`] when the board has no legal column,
//! 2. plays the first column that wins on the spot,
//! 3. blocks the first column where the opponent would win on the spot,
//! 4. otherwise scores every legal column with [`score_column`] and picks
//!    uniformly among the best, using the engine's own seedable RNG.
//!
//! The side to move is inferred from stone counts on every call; nothing is
//! remembered between calls except the RNG state.

use log::{debug, info, trace};

use crate::board::{Board, Column, Grid, Player};
use crate::constants::{FALLBACK_MOVE, HANDSHAKE, ILLEGAL_SCORE, SIZE};
use crate::error::EngineError;
use crate::heuristic::score_column;
use crate::simulate::would_win;

/// Why a column was chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    /// No legal column existed.
    Fallback,
    /// The move completes four in a row.
    Win,
    /// The move occupies the opponent's winning cell.
    Block,
    /// Best heuristic score, chosen among `ties` equally scored columns.
    Heuristic { score: i32, ties: usize },
    /// First open column, no evaluation.
    FirstOpen,
}

/// A chosen column together with the rule that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub column: Column,
    pub player: Player,
    pub reason: Reason,
}

/// A move-selection strategy.
///
/// The board is lent mutably so implementations may simulate moves on it,
/// but it must be returned with its contents unchanged.
pub trait Policy {
    fn decide(&mut self, board: &mut Board) -> Decision;

    fn choose(&mut self, board: &mut Board) -> Column {
        self.decide(board).column
    }
}

/// The greedy win / block / heuristic engine.
pub struct Engine {
    rng: fastrand::Rng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with an entropy-seeded tie-break RNG.
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Engine with a deterministic tie-break sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self { rng }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// A second engine whose RNG is derived from this one's.
    pub fn fork(&mut self) -> Engine {
        Self::with_rng(self.rng.fork())
    }
}

impl Policy for Engine {
    fn decide(&mut self, board: &mut Board) -> Decision {
        let me = board.side_to_move();
        let opp = me.opponent();
        let decision = |column: Column, reason: Reason| Decision {
            column,
            player: me,
            reason,
        };

        let legal = board.legal_columns();
        if legal.is_empty() {
            debug!("no legal column for player {me}, falling back");
            return decision(FALLBACK_MOVE, Reason::Fallback);
        }

        if let Some(&col) = legal.iter().find(|&&(x, y)| would_win(board, x, y, me)) {
            debug!("player {me} wins at {col:?}");
            return decision(col, Reason::Win);
        }

        if let Some(&col) = legal.iter().find(|&&(x, y)| would_win(board, x, y, opp)) {
            debug!("player {me} blocks player {opp} at {col:?}");
            return decision(col, Reason::Block);
        }

        let scored: Vec<(i32, Column)> = legal
            .iter()
            .map(|&(x, y)| (score_column(board, x, y, me), (x, y)))
            .collect();
        for (score, col) in &scored {
            trace!("column {col:?} scores {score}");
        }

        let best = scored
            .iter()
            .map(|&(score, _)| score)
            .max()
            .unwrap_or(ILLEGAL_SCORE);
        let candidates: Vec<Column> = scored
            .iter()
            .filter(|&&(score, _)| score == best)
            .map(|&(_, col)| col)
            .collect();

        let col = candidates[self.rng.usize(..candidates.len())];
        debug!(
            "player {me} plays {col:?} with score {best} ({} ties)",
            candidates.len()
        );
        decision(
            col,
            Reason::Heuristic {
                score: best,
                ties: candidates.len(),
            },
        )
    }
}

/// Baseline policy that always takes the first open column.
#[derive(Default)]
pub struct FirstOpen;

impl Policy for FirstOpen {
    fn decide(&mut self, board: &mut Board) -> Decision {
        let player = board.side_to_move();
        match board.legal_columns().first() {
            Some(&column) => Decision {
                column,
                player,
                reason: Reason::FirstOpen,
            },
            None => Decision {
                column: FALLBACK_MOVE,
                player,
                reason: Reason::Fallback,
            },
        }
    }
}

/// Reject a column outside the board instead of clamping it.
pub fn validate_move((x, y): Column) -> Result<Column, EngineError> {
    if x < SIZE && y < SIZE {
        Ok((x, y))
    } else {
        Err(EngineError::OutOfRange { x, y })
    }
}

/// Choose a move for the host grid format (`[z][y][x]`, 0 / 1 / 2).
///
/// The grid is validated first and the result is bound-checked before it is
/// returned. Announces [`HANDSHAKE`] once per call.
pub fn get_move(grid: &Grid, policy: &mut impl Policy) -> Result<Column, EngineError> {
    info!("{HANDSHAKE}");
    let mut board = Board::from_grid(grid)?;
    validate_move(policy.choose(&mut board))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_uses_heuristic() {
        let mut board = Board::new();
        let mut engine = Engine::with_seed(7);
        let d = engine.decide(&mut board);
        assert_eq!(d.player, Player::One);
        assert_eq!(d.reason, Reason::Heuristic { score: 0, ties: 16 });
        assert!(d.column.0 < SIZE && d.column.1 < SIZE);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_vertical_completion() {
        let mut board = Board::new();
        for i in 0..3 {
            board.play(0, 0, Player::One).unwrap();
            board.play(1 + i, 3, Player::Two).unwrap();
        }
        // Both sides threaten; One is to move and completes the stack.
        let d = Engine::with_seed(1).decide(&mut board);
        assert_eq!(d.player, Player::One);
        assert_eq!(d.reason, Reason::Win);
        assert_eq!(d.column, (0, 0));
    }

    #[test]
    fn test_win_beats_block() {
        let mut board = Board::new();
        // One: three along x at y = 1. Two: three along x at y = 3.
        for x in 0..3 {
            board.play(x, 1, Player::One).unwrap();
            board.play(x, 3, Player::Two).unwrap();
        }
        let d = Engine::with_seed(3).decide(&mut board);
        assert_eq!(d.reason, Reason::Win);
        assert_eq!(d.column, (3, 1));
    }

    #[test]
    fn test_block_when_no_win() {
        let mut board = Board::new();
        board.play(0, 0, Player::One).unwrap();
        board.play(0, 2, Player::Two).unwrap();
        board.play(3, 3, Player::One).unwrap();
        board.play(1, 2, Player::Two).unwrap();
        board.play(3, 1, Player::One).unwrap();
        board.play(2, 2, Player::Two).unwrap();
        // One to move; Two threatens (3, 2).
        let d = Engine::with_seed(11).decide(&mut board);
        assert_eq!(d.player, Player::One);
        assert_eq!(d.reason, Reason::Block);
        assert_eq!(d.column, (3, 2));
    }

    #[test]
    fn test_full_board_falls_back() {
        let mut board = Board::new();
        let mut player = Player::One;
        for y in 0..SIZE {
            for x in 0..SIZE {
                for _ in 0..SIZE {
                    board.play(x, y, player).unwrap();
                    player = player.opponent();
                }
            }
        }
        let d = Engine::with_seed(0).decide(&mut board);
        assert_eq!(d.column, FALLBACK_MOVE);
        assert_eq!(d.reason, Reason::Fallback);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut board = Board::new();
        board.play(1, 1, Player::One).unwrap();
        board.play(2, 2, Player::Two).unwrap();
        let a: Vec<Column> = {
            let mut e = Engine::with_seed(42);
            (0..8).map(|_| e.choose(&mut board)).collect()
        };
        let b: Vec<Column> = {
            let mut e = Engine::with_seed(42);
            (0..8).map(|_| e.choose(&mut board)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_open() {
        let mut board = Board::new();
        for _ in 0..SIZE {
            board.play(0, 0, Player::One).unwrap();
        }
        assert_eq!(FirstOpen.choose(&mut board), (1, 0));
    }

    #[test]
    fn test_validate_move() {
        assert_eq!(validate_move((3, 0)), Ok((3, 0)));
        assert_eq!(
            validate_move((4, 1)),
            Err(EngineError::OutOfRange { x: 4, y: 1 })
        );
    }

    #[test]
    fn test_get_move_rejects_bad_grid() {
        let mut grid = [[[0u8; SIZE]; SIZE]; SIZE];
        grid[0][0][0] = 3;
        let err = get_move(&grid, &mut Engine::with_seed(0)).unwrap_err();
        assert!(matches!(err, EngineError::Board(_)));
    }
}
