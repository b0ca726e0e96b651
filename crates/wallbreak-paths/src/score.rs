use wallbreak_core::Maze;

use crate::bfs::ExactBfs;
use crate::solver::Solver;

/// Whether the goal is reachable with at most `k` wall breaks.
///
/// Runs the exact solver in distance-only mode; this is the check map
/// generators retry on and editors gate publication on.
pub fn is_solvable(maze: &Maze, k: u32) -> bool {
    ExactBfs.distance(maze, k).is_some()
}

/// Player score as a percentage of the optimum: `optimal / steps × 100`.
///
/// A player who never moved scores 0.
pub fn score(optimal: u32, player_steps: u32) -> f64 {
    if player_steps == 0 {
        return 0.0;
    }
    f64::from(optimal) / f64::from(player_steps) * 100.0
}
