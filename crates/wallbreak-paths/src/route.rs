//! Validation of a recorded route against a maze and break budget.

use thiserror::Error;
use wallbreak_core::{Maze, Point};

/// Summary of a valid route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteReport {
    /// Moves taken, portal jumps included.
    pub steps: usize,
    /// Unit moves onto wall cells.
    pub breaks: u32,
    /// Portal jumps taken.
    pub jumps: usize,
}

/// Why a route is not a legal walk through the maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route is empty")]
    Empty,
    #[error("route starts at {found}, expected {expected}")]
    WrongStart { found: Point, expected: Point },
    #[error("route ends at {found}, expected {expected}")]
    WrongEnd { found: Point, expected: Point },
    #[error("step {step} leaves the maze at {pos}")]
    OutOfBounds { step: usize, pos: Point },
    #[error("step {step} from {from} to {to} is neither a unit move nor a portal jump")]
    InvalidStep { step: usize, from: Point, to: Point },
    #[error("step {step} breaks a wall beyond the budget of {budget}")]
    OverBudget { step: usize, budget: u32 },
}

/// Check that `path` walks from start to goal using unit moves and portal
/// jumps, crossing at most `k` walls.
pub fn check(maze: &Maze, k: u32, path: &[Point]) -> Result<RouteReport, RouteError> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Err(RouteError::Empty);
    };
    if first != maze.start() {
        return Err(RouteError::WrongStart {
            found: first,
            expected: maze.start(),
        });
    }
    if last != maze.goal() {
        return Err(RouteError::WrongEnd {
            found: last,
            expected: maze.goal(),
        });
    }

    let mut breaks = 0u32;
    let mut jumps = 0usize;
    for (i, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let step = i + 1;
        let Some(cell) = maze.get(to) else {
            return Err(RouteError::OutOfBounds { step, pos: to });
        };
        if from.is_adjacent(to) {
            if cell.is_wall() {
                breaks += 1;
                if breaks > k {
                    return Err(RouteError::OverBudget { step, budget: k });
                }
            }
        } else if maze.try_portal_exit(from) == Some(to) {
            jumps += 1;
        } else {
            return Err(RouteError::InvalidStep { step, from, to });
        }
    }

    Ok(RouteReport {
        steps: path.len() - 1,
        breaks,
        jumps,
    })
}
