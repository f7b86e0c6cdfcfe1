//! Cube4: a move-selection engine for 4x4x4 gravity connect-four.
//!
//! Given a board, the engine returns the column `(x, y)` to drop the next
//! stone into. It looks one ply ahead only: take a win if there is one,
//! otherwise block the opponent's win, otherwise pick the most promising
//! column by a static line-count heuristic.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, line directions and engine parameters
//! - [`board`] - Board representation and column queries
//! - [`win`] - Four-in-a-row detection
//! - [`simulate`] - Speculative placement with rollback
//! - [`heuristic`] - Static column scoring
//! - [`policy`] - Move selection
//! - [`game`] - Playing whole games between policies
//! - [`protocol`] - Text protocol for host processes
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use cube4::board::{Board, Player};
//! use cube4::policy::{Engine, Policy};
//!
//! let mut board = Board::new();
//! for _ in 0..3 {
//!     board.play(0, 0, Player::One).unwrap();
//!     board.play(2, 1, Player::Two).unwrap();
//! }
//!
//! let mut engine = Engine::with_seed(1);
//! assert_eq!(engine.choose(&mut board), (0, 0));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod policy;
pub mod protocol;
pub mod simulate;
pub mod win;
