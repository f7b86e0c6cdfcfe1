//! Line-based text protocol for driving the engine from a host process.
//!
//! The framing follows GTP: each request is an optional numeric id, a
//! command and its arguments; each reply is `=id message` on success or
//! `?id message` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `clear_board` - Reset the board to empty
//! - `setboard <cells>` - Load a board of 64 cells in z, y, x order
//! - `play <x> <y>` - Drop a stone for the side to move
//! - `genmove` - Choose a move for the side to move and play it
//! - `showboard` - Print the board
//! - `seed <n>` - Reseed the tie-break RNG
//!
//! ## Example
//!
//! ```ignore
//! use cube4::protocol::Session;
//! let mut session = Session::new(cube4::policy::Engine::new());
//! session.run()?;
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::board::{Board, Player};
use crate::constants::HANDSHAKE;
use crate::policy::{Engine, Policy, validate_move};
use crate::win::has_four_through;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "seed",
    "setboard",
    "showboard",
    "version",
];

/// Protocol session state: one game and the engine playing it.
pub struct Session {
    board: Board,
    engine: Engine,
    /// Winner of the current game, once somebody has connected four.
    winner: Option<Player>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Engine::new())
    }
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        Self {
            board: Board::new(),
            engine,
            winner: None,
        }
    }

    /// Run the command loop over stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            debug!("command {command} {args:?}");
            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "clear_board" => {
                self.board = Board::new();
                self.winner = None;
                (true, String::new())
            }

            "setboard" => match args.concat().parse::<Board>() {
                Ok(board) => {
                    self.winner = board.winner();
                    self.board = board;
                    (true, String::new())
                }
                Err(e) => (false, e.to_string()),
            },

            "play" => {
                let (Some(x), Some(y)) = (args.first(), args.get(1)) else {
                    return (false, "missing arguments".to_string());
                };
                let (Ok(x), Ok(y)) = (x.parse::<usize>(), y.parse::<usize>()) else {
                    return (false, "invalid coordinate".to_string());
                };
                if let Some(winner) = self.winner {
                    return (false, format!("game over, player {winner} won"));
                }
                match self.apply(x, y) {
                    Ok(true) => (true, "win".to_string()),
                    Ok(false) => (true, String::new()),
                    Err(e) => (false, e),
                }
            }

            "genmove" => {
                if let Some(winner) = self.winner {
                    return (false, format!("game over, player {winner} won"));
                }
                if self.board.is_full() {
                    return (false, "board is full".to_string());
                }
                info!("{HANDSHAKE}");
                let (x, y) = match validate_move(self.engine.choose(&mut self.board)) {
                    Ok(col) => col,
                    Err(e) => return (false, e.to_string()),
                };
                match self.apply(x, y) {
                    Ok(true) => (true, format!("win {x} {y}")),
                    Ok(false) => (true, format!("{x} {y}")),
                    Err(e) => (false, e),
                }
            }

            "showboard" => (true, format!("\n{}", self.board)),

            "seed" => match args.first().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => {
                    self.engine.reseed(seed);
                    (true, String::new())
                }
                Some(Err(_)) => (false, "invalid seed".to_string()),
                None => (false, "missing argument".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Drop a stone for the side to move; returns whether it won the game.
    fn apply(&mut self, x: usize, y: usize) -> Result<bool, String> {
        let player = self.board.side_to_move();
        let z = self.board.play(x, y, player).map_err(|e| e.to_string())?;
        let won = has_four_through(&self.board, x, y, z, player);
        if won {
            info!("player {player} connects four with ({x}, {y}, {z})");
            self.winner = Some(player);
        }
        Ok(won)
    }
}
