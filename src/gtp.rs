//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go programs. This
//! module drives a [`Board`] from GTP version 2 commands so the rules engine
//! can sit behind graphical interfaces like Sabaki or GoGui. Moves asked of
//! the engine with `genmove` are random legal moves.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Odd sizes from 3 to 25
//! - `clear_board`
//! - `play <color> <vertex>`
//! - `genmove <color>`
//! - `undo`
//! - `showboard`
//! - `is_legal <color> <vertex>` - Answers `1` or `0`
//! - `captures <color>` - Stones captured by `color`
//! - `loadfen <record>` / `savefen` - Position records, see [`crate::fen`]

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow, bail, ensure};
use fastrand::Rng;
use tracing::{debug, warn};

use crate::board::Board;
use crate::constants::{DEFAULT_BOARD_SIZE, MAX_GTP_BOARD_SIZE, is_valid_board_size};
use crate::notation::parse_gtp_color;
use crate::playout::random_move;
use crate::square::Square;
use crate::stone::Stone;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "genmove",
    "is_legal",
    "known_command",
    "list_commands",
    "loadfen",
    "name",
    "play",
    "protocol_version",
    "quit",
    "savefen",
    "showboard",
    "undo",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    /// Current game position
    board: Board,
    /// Positions before each move, for `undo`
    history: Vec<Board>,
    rng: Rng,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create an engine with a 19x19 board.
    pub fn new() -> Self {
        Self {
            board: Board::blank(DEFAULT_BOARD_SIZE),
            history: Vec::new(),
            rng: Rng::new(),
        }
    }

    /// Create an engine around an existing position and random source.
    ///
    /// Fails for boards wider than GTP vertices can name.
    pub fn with_board(board: Board, rng: Rng) -> Result<Self> {
        ensure!(
            board.board_size() <= MAX_GTP_BOARD_SIZE,
            "board size {} is too large for GTP (max {MAX_GTP_BOARD_SIZE})",
            board.board_size()
        );
        Ok(Self {
            board,
            history: Vec::new(),
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the GTP command loop on stdin and stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read GTP command")?;

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

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")
                .context("failed to write GTP response")?;
            output.flush().context("failed to flush GTP response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
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

    /// Execute a GTP command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "gtp command");
        match self.dispatch(command, args) {
            Ok(response) => (true, response),
            Err(e) => {
                warn!(command, error = %e, "gtp command failed");
                (false, e.to_string())
            }
        }
    }

    fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<String> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("2".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let name = arg(args, 0)?;
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                Ok(if known { "true" } else { "false" }.to_string())
            }

            "quit" => Ok(String::new()),

            "boardsize" => {
                let size: usize = arg(args, 0)?
                    .parse()
                    .map_err(|_| anyhow!("boardsize not an integer"))?;
                ensure!(
                    is_valid_board_size(size) && size <= MAX_GTP_BOARD_SIZE,
                    "unacceptable size"
                );
                self.board = Board::blank(size);
                self.history.clear();
                Ok(String::new())
            }

            "clear_board" => {
                self.board = Board::blank(self.board.board_size());
                self.history.clear();
                Ok(String::new())
            }

            "play" => {
                let color = color_arg(args, 0)?;
                let sq = self.vertex_arg(args, 1)?;
                self.play(sq, color)?;
                Ok(String::new())
            }

            "genmove" => {
                let color = color_arg(args, 0)?;
                let mut probe = self.board.clone();
                probe.set_turn(color);
                let sq = random_move(&probe, &mut self.rng);
                let vertex = sq
                    .to_gtp()
                    .with_context(|| format!("no GTP vertex for {sq}"))?;
                self.play(sq, color)?;
                Ok(vertex)
            }

            "undo" => {
                self.board = self.history.pop().context("cannot undo")?;
                Ok(String::new())
            }

            "showboard" => Ok(format!("\n{}", self.board)),

            "is_legal" => {
                let color = color_arg(args, 0)?;
                let sq = self.vertex_arg(args, 1)?;
                Ok(if self.board.is_legal(sq, color) { "1" } else { "0" }.to_string())
            }

            "captures" => {
                let color = color_arg(args, 0)?;
                Ok(self.board.captures(color).to_string())
            }

            "loadfen" => {
                ensure!(!args.is_empty(), "missing argument");
                let board = Board::from_fen(&args.join(" "))?;
                ensure!(
                    board.board_size() <= MAX_GTP_BOARD_SIZE,
                    "unacceptable size"
                );
                self.board = board;
                self.history.clear();
                Ok(String::new())
            }

            "savefen" => Ok(self.board.to_fen()),

            _ => bail!("unknown command: {command}"),
        }
    }

    /// Play `color` at `sq`, letting either side move out of turn.
    fn play(&mut self, sq: Square, color: Stone) -> Result<()> {
        let saved = self.board.clone();
        self.board.set_turn(color);
        if !self.board.make_move(sq, color) {
            self.board = saved;
            bail!("illegal move");
        }
        self.history.push(saved);
        Ok(())
    }

    fn vertex_arg(&self, args: &[&str], i: usize) -> Result<Square> {
        let vertex = arg(args, i)?;
        Square::parse_gtp(vertex, self.board.board_size())
            .map_err(|_| anyhow!("invalid coordinate"))
    }
}

fn arg<'a>(args: &[&'a str], i: usize) -> Result<&'a str> {
    args.get(i).copied().context("missing argument")
}

fn color_arg(args: &[&str], i: usize) -> Result<Stone> {
    parse_gtp_color(arg(args, i)?).context("invalid color")
}
