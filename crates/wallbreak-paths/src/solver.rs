use std::fmt;

use wallbreak_core::{Maze, Point};

use crate::astar::HeuristicAstar;
use crate::bfs::ExactBfs;

/// A found shortest route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Minimum number of steps from start to goal.
    pub distance: u32,
    /// Positions from start to goal inclusive; empty when the solve was
    /// distance-only.
    pub path: Vec<Point>,
    /// Walls crossed on the recorded route.
    pub breaks_used: u32,
    /// States taken off the frontier and expanded (diagnostic only).
    pub expanded: usize,
}

/// Shortest-path solver over the wall-break state space.
///
/// `None` means the goal is unreachable within the budget; it is an
/// ordinary outcome, not an error.
pub trait Solver {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Solve and reconstruct one optimal path.
    fn solve(&self, maze: &Maze, k: u32) -> Option<Solution>;

    /// Minimum distance only. Implementations may skip path bookkeeping.
    fn distance(&self, maze: &Maze, k: u32) -> Option<u32> {
        self.solve(maze, k).map(|s| s.distance)
    }
}

/// Run-time solver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolverKind {
    Bfs,
    Astar,
}

impl SolverKind {
    pub const ALL: [SolverKind; 2] = [SolverKind::Bfs, SolverKind::Astar];

    pub fn solver(self) -> &'static dyn Solver {
        match self {
            SolverKind::Bfs => &ExactBfs,
            SolverKind::Astar => &HeuristicAstar,
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.solver().name())
    }
}
