//! Loading the maze for a run: from a file, standard input, or the
//! generator.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;
use wallbreak_core::{Maze, MazeError, MazeGen};
use wallbreak_paths::is_solvable;

use crate::cli::Source;

/// Generator attempts before giving up on finding a solvable maze.
pub const MAX_ATTEMPTS: usize = 200;

/// Prefix of the optional budget header line.
const HEADER: &str = "k=";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("bad budget header \u{201c}{line}\u{201d}; expected k=<non-negative integer>")]
    Header { line: String },
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("no solvable maze after {attempts} attempts; lower the noise or raise the budget")]
    Unsolvable { attempts: usize },
}

/// A maze ready to solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub maze: Maze,
    /// Budget from a `k=<n>` header line.
    pub header_k: Option<u32>,
    /// Whether the maze was generated rather than read.
    pub generated: bool,
}

/// Load the maze named by `source`. A generated maze must be solvable with
/// `k` breaks.
pub fn load(source: &Source, k: Option<u32>) -> Result<Input, InputError> {
    match source {
        Source::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| InputError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            parse(&text)
        }
        Source::File(path) => read_file(path),
        Source::Generate(maze_gen) => {
            let k = k.unwrap_or_default();
            Ok(Input {
                maze: generate(maze_gen, k)?,
                header_k: None,
                generated: true,
            })
        }
    }
}

fn read_file(path: &Path) -> Result<Input, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", text.len(), path.display());
    parse(&text)
}

/// Parse maze text with an optional leading `k=<n>` line.
pub fn parse(text: &str) -> Result<Input, InputError> {
    let body = text.trim_start();
    let (header_k, body) = match body.split_once('\n') {
        Some((first, rest)) if first.trim().starts_with(HEADER) => {
            (Some(parse_header(first.trim())?), rest)
        }
        None if body.trim().starts_with(HEADER) => (Some(parse_header(body.trim())?), ""),
        _ => (None, body),
    };
    Ok(Input {
        maze: Maze::parse(body)?,
        header_k,
        generated: false,
    })
}

fn parse_header(line: &str) -> Result<u32, InputError> {
    line[HEADER.len()..]
        .trim()
        .parse()
        .map_err(|_| InputError::Header {
            line: line.to_string(),
        })
}

/// Generate mazes until one is solvable with `k` breaks.
pub fn generate(maze_gen: &MazeGen, k: u32) -> Result<Maze, InputError> {
    for attempt in 1..=MAX_ATTEMPTS {
        let maze = maze_gen.generate()?;
        if is_solvable(&maze, k) {
            info!("generated a solvable maze on attempt {attempt}");
            return Ok(maze);
        }
        debug!("attempt {attempt}: goal unreachable with k={k}");
    }
    Err(InputError::Unsolvable {
        attempts: MAX_ATTEMPTS,
    })
}
