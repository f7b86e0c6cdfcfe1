//! Constants for board geometry, line directions, and engine parameters.
//!
//! The board is a fixed 4x4x4 cube indexed `[z][y][x]`, with `z` as the
//! gravity axis. Stones dropped into a column fall to the lowest empty cell.
//!
//! # Direction Set Configuration
//!
//! The set of line directions is controlled by Cargo features:
//! - `full-axes` (default): all 13 undirected axes of the cube
//! - `legacy-axes`: the 10-axis subset used by earlier versions of the engine
//!
//! To compile with the legacy direction set:
//! ```sh
//! cargo build --no-default-features --features legacy-axes
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Edge length of the cube. Every axis runs over `0..SIZE`.
pub const SIZE: usize = 4;

/// Number of vertical columns (the playable moves).
pub const COLUMNS: usize = SIZE * SIZE;

/// Total number of cells on the board.
pub const CELLS: usize = SIZE * SIZE * SIZE;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Steps walked along a direction on each side of a placement.
pub const WINDOW_REACH: isize = (WIN_LENGTH as isize) - 1;

// =============================================================================
// Heuristic Parameters
// =============================================================================

/// Score reported for a column that is already full.
///
/// Lower than any legal score, which are all in `0..=DIRECTIONS.len()`.
pub const ILLEGAL_SCORE: i32 = -1;

/// Own stones a window needs before the direction counts as promising.
pub const MIN_OWN_IN_WINDOW: usize = 2;

/// Empty cells a window needs before the direction counts as promising.
pub const MIN_EMPTY_IN_WINDOW: usize = 2;

// =============================================================================
// Special Move Values
// =============================================================================

/// Column returned when the board has no legal move at all.
pub const FALLBACK_MOVE: (usize, usize) = (0, 0);

/// Liveness token announced once per decision on the diagnostic stream.
pub const HANDSHAKE: &str = "cube4 ready";

// =============================================================================
// Line Directions
// =============================================================================

/// A unit step `(dx, dy, dz)` through the cube.
pub type Direction = (isize, isize, isize);

/// One representative per undirected axis. Both signs are walked explicitly.
#[cfg(feature = "full-axes")]
pub const DIRECTIONS: [Direction; 13] = [
    (1, 0, 0),   // along x
    (0, 1, 0),   // along y
    (0, 0, 1),   // vertical
    (1, 1, 0),   // horizontal diagonals
    (1, -1, 0),
    (1, 0, 1),   // xz diagonals
    (1, 0, -1),
    (0, 1, 1),   // yz diagonals
    (0, 1, -1),
    (1, 1, 1),   // space diagonals
    (1, 1, -1),
    (1, -1, 1),
    (-1, 1, 1),
];

/// The 10-axis subset. It misses the `(1,0,-1)`, `(0,1,-1)` and `(1,1,-1)` axes.
#[cfg(feature = "legacy-axes")]
pub const DIRECTIONS: [Direction; 10] = [
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 1, 0),
    (-1, 1, 0),
    (1, 0, 1),
    (0, 1, 1),
    (1, 1, 1),
    (-1, 1, 1),
    (1, -1, 1),
];

// Compile-time check: exactly one direction set feature must be enabled
#[cfg(all(feature = "full-axes", feature = "legacy-axes"))]
compile_error!("Cannot enable both 'full-axes' and 'legacy-axes' features at the same time");

#[cfg(not(any(feature = "full-axes", feature = "legacy-axes")))]
compile_error!("Must enable exactly one direction set feature: 'full-axes' or 'legacy-axes'");
