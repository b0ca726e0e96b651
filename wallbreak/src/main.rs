//! wallbreak: shortest routes through mazes where up to K walls may be
//! broken and portal pairs link distant cells.

mod cli;
mod input;
mod report;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use cli::{Args, Config};
use report::{Extras, Report};

/// Exit status when the solvers report different distances or a recorded
/// path fails route validation.
const EXIT_DISAGREE: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("wallbreak: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn Error>> {
    let config = Config::from(Args::parse());
    cli::init_logging(config.debug);

    let input = input::load(&config.source, config.breaks)?;
    let k = config.budget(input.header_k);
    info!(
        "solving {}x{} maze with k={k}",
        input.maze.width(),
        input.maze.height()
    );

    let extras = Extras {
        player_steps: config.steps,
        overlay: config.overlay,
        show_maze: input.generated,
    };
    let report = Report::build(&input.maze, k, config.solvers, extras);
    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    if !report.agree || !report.valid_routes {
        return Ok(ExitCode::from(EXIT_DISAGREE));
    }
    Ok(ExitCode::SUCCESS)
}
