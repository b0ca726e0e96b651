//! Solving a loaded maze and presenting the outcome as text or JSON.

use std::fmt;
use std::time::Instant;

use log::{debug, error};
use serde::Serialize;
use wallbreak_core::{Maze, Point};
use wallbreak_paths::{
    ExactBfs, Solution, Solver, SolverKind, StateSpace, overlay, route, score,
};

/// One solver's outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub solver: SolverKind,
    /// `None` when the goal is unreachable within the budget.
    pub solution: Option<Solution>,
    /// Portal jumps on the recorded path, once it has passed route
    /// validation.
    pub jumps: Option<usize>,
    pub elapsed_us: u128,
}

impl Run {
    pub fn distance(&self) -> Option<u32> {
        self.solution.as_ref().map(|s| s.distance)
    }
}

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The maze text; only filled in for generated mazes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maze: Option<String>,
    pub width: i32,
    pub height: i32,
    pub breaks: u32,
    pub effective_breaks: u32,
    pub runs: Vec<Run>,
    /// Whether every solver reported the same distance.
    pub agree: bool,
    /// Whether every recorded path is a legal route within the budget.
    pub valid_routes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
}

/// What to compute besides the solves themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extras {
    pub player_steps: Option<u32>,
    pub overlay: bool,
    pub show_maze: bool,
}

impl Report {
    pub fn build(maze: &Maze, k: u32, solvers: &[SolverKind], extras: Extras) -> Self {
        let runs: Vec<Run> = solvers
            .iter()
            .map(|&kind| {
                let started = Instant::now();
                let solution = kind.solver().solve(maze, k);
                let elapsed_us = started.elapsed().as_micros();
                debug!("{kind}: {:?} in {elapsed_us} us", solution.as_ref().map(|s| s.distance));
                let jumps = solution.as_ref().and_then(|s| match route::check(maze, k, &s.path) {
                    Ok(report) => Some(report.jumps),
                    Err(e) => {
                        error!("{kind} returned an invalid route: {e}");
                        None
                    }
                });
                Run {
                    solver: kind,
                    solution,
                    jumps,
                    elapsed_us,
                }
            })
            .collect();

        let valid_routes = runs
            .iter()
            .all(|r| r.solution.is_none() || r.jumps.is_some());

        let agree = runs.windows(2).all(|w| w[0].distance() == w[1].distance());
        if !agree {
            let found: Vec<String> = runs
                .iter()
                .map(|r| format!("{}={:?}", r.solver, r.distance()))
                .collect();
            error!("solvers disagree on distance: {}", found.join(", "));
        }

        let player_score = extras.player_steps.and_then(|steps| {
            let optimal = runs
                .iter()
                .find(|r| r.solver == SolverKind::Bfs)
                .map_or_else(|| ExactBfs.distance(maze, k), Run::distance)?;
            Some(score(optimal, steps))
        });

        let hint = extras.overlay.then(|| {
            overlay(
                maze,
                route_of(&runs, SolverKind::Bfs),
                route_of(&runs, SolverKind::Astar),
            )
        });

        Self {
            maze: extras.show_maze.then(|| maze.to_string()),
            width: maze.width(),
            height: maze.height(),
            breaks: k,
            effective_breaks: StateSpace::new(maze, k).budget(),
            runs,
            agree,
            valid_routes,
            score: player_score,
            overlay: hint,
        }
    }
}

/// The recorded path of `kind`'s run, or an empty one.
fn route_of(runs: &[Run], kind: SolverKind) -> &[Point] {
    runs.iter()
        .find(|r| r.solver == kind)
        .and_then(|r| r.solution.as_ref())
        .map(|s| s.path.as_slice())
        .unwrap_or_default()
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.solver.to_string();
        match &self.solution {
            Some(s) => write!(
                f,
                "{name:<6} distance {}, {} break(s) used, {} jump(s), {} expanded, {} us",
                s.distance,
                s.breaks_used,
                self.jumps.map_or_else(|| "?".to_string(), |j| j.to_string()),
                s.expanded,
                self.elapsed_us
            ),
            None => write!(f, "{name:<6} unreachable, {} us", self.elapsed_us),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(maze) = &self.maze {
            writeln!(f, "{maze}\n")?;
        }
        writeln!(
            f,
            "maze {}x{}, k={} (effective {})",
            self.width, self.height, self.breaks, self.effective_breaks
        )?;
        for run in &self.runs {
            writeln!(f, "{run}")?;
        }
        if !self.agree {
            writeln!(f, "solvers disagree")?;
        }
        if !self.valid_routes {
            writeln!(f, "invalid route recorded")?;
        }
        if let Some(score) = self.score {
            writeln!(f, "score {score:.1}")?;
        }
        if let Some(overlay) = &self.overlay {
            writeln!(f, "\n{overlay}")?;
        }
        Ok(())
    }
}
