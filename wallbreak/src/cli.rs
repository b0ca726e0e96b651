//! Command-line options and the run configuration built from them.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use wallbreak_core::MazeGen;
use wallbreak_paths::SolverKind;

/// Solve a wall-break maze: shortest route from S to G crossing at most K
/// walls, with portal jumps.
///
/// The maze is read from FILE, or standard input when FILE is omitted. An
/// optional first line `k=<n>` sets the budget; `--breaks` overrides it.
#[derive(Debug, Parser)]
#[command(about, long_about, version)]
pub struct Args {
    /// Maze file
    pub file: Option<PathBuf>,

    /// Wall-break budget
    #[arg(short = 'k', long = "breaks", value_name = "K")]
    pub breaks: Option<u32>,

    /// Solver to run
    #[arg(value_enum, short, long, default_value_t = SolverChoice::Both)]
    pub solver: SolverChoice,

    /// Score a player route of N steps against the optimum
    #[arg(long, value_name = "N")]
    pub steps: Option<u32>,

    /// Draw the solver routes over the maze
    #[arg(long, default_value_t = false)]
    pub overlay: bool,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Generate a random solvable maze of this size instead of reading one
    #[arg(long, value_name = "WxH", value_parser = parse_size, conflicts_with = "file")]
    pub generate: Option<Size>,

    /// Portal pairs in a generated maze
    #[arg(long, default_value_t = 2, requires = "generate")]
    pub portals: usize,

    /// Share of carved floor walled back in a generated maze (0.0 to 1.0)
    #[arg(long, default_value_t = 0.1, value_parser = parse_noise, requires = "generate")]
    pub noise: f64,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolverChoice {
    Bfs,
    Astar,
    Both,
}

impl SolverChoice {
    pub fn kinds(self) -> &'static [SolverKind] {
        match self {
            SolverChoice::Bfs => &[SolverKind::Bfs],
            SolverChoice::Astar => &[SolverKind::Astar],
            SolverChoice::Both => &SolverKind::ALL,
        }
    }
}

/// Maze dimensions given as `WxH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got \u{201c}{s}\u{201d}"))?;
    let side = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad side \u{201c}{v}\u{201d}: {e}"))
    };
    Ok(Size {
        width: side(w)?,
        height: side(h)?,
    })
}

fn parse_noise(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{v} is not between 0.0 and 1.0"))
    }
}

/// Where the maze comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Stdin,
    File(PathBuf),
    Generate(MazeGen),
}

/// Settings for one run, resolved from [`Args`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: Source,
    /// Budget from the command line; a maze-file header is the fallback.
    pub breaks: Option<u32>,
    pub solvers: &'static [SolverKind],
    pub steps: Option<u32>,
    pub overlay: bool,
    pub json: bool,
    pub debug: bool,
}

impl Config {
    /// Budget used when neither the command line nor the maze sets one.
    pub const DEFAULT_BREAKS: u32 = 0;

    /// The command line wins over the maze header.
    pub fn budget(&self, header: Option<u32>) -> u32 {
        self.breaks.or(header).unwrap_or(Self::DEFAULT_BREAKS)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let source = match (args.generate, args.file) {
            (Some(size), _) => Source::Generate(
                MazeGen::new(size.width, size.height)
                    .with_portals(args.portals)
                    .with_noise(args.noise),
            ),
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Stdin,
        };
        Self {
            source,
            breaks: args.breaks,
            solvers: args.solver.kinds(),
            steps: args.steps,
            overlay: args.overlay,
            json: args.json,
            debug: args.debug,
        }
    }
}

/// Install the logger. `RUST_LOG` applies as usual; `debug` raises the level
/// to at least debug.
pub fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
