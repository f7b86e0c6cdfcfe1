//! Error types for board input, move application, and move selection.

/// Errors raised while building a board from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid cell value {value} at (x={x}, y={y}, z={z}), expected 0, 1 or 2")]
    InvalidCell {
        value: u8,
        x: usize,
        y: usize,
        z: usize,
    },

    #[error("floating stone at (x={x}, y={y}, z={z}), the cell below it is empty")]
    FloatingStone { x: usize, y: usize, z: usize },

    #[error("invalid board text: {0}")]
    Parse(String),
}

/// Errors raised when a stone is authoritatively dropped into a column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column ({x}, {y}) is off the board")]
    OutOfBounds { x: usize, y: usize },

    #[error("column ({x}, {y}) is full")]
    ColumnFull { x: usize, y: usize },
}

/// Errors surfaced to the host by [`crate::policy::get_move`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("selected column ({x}, {y}) is out of range")]
    OutOfRange { x: usize, y: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}
