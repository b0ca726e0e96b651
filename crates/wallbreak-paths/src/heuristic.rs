//! Admissible remaining-cost estimate for best-first search.
//!
//! The base estimate is the Manhattan distance to the goal. A portal edge
//! costs one step but can cover any distance, so with portals present the
//! plain Manhattan distance may overestimate. [`Heuristic`] therefore also
//! considers walking to a portal end and continuing from there. Walls and
//! the break budget are ignored, which keeps the estimate a lower bound. It
//! is also consistent: one unit step changes it by at most one, and a
//! portal edge by at most one.
//!
//! On a maze without portals the estimate is exactly `manhattan(p, goal)`.

use wallbreak_core::{Maze, Point};

use crate::distance::manhattan;

/// Remaining-cost estimate toward a fixed goal.
#[derive(Debug, Clone)]
pub struct Heuristic {
    goal: Point,
    /// Portal ends with a lower bound on the cost from that end to the goal.
    anchors: Vec<(Point, u32)>,
}

impl Heuristic {
    /// Build the estimate for `maze`'s goal.
    pub fn new(maze: &Maze) -> Self {
        let goal = maze.goal();
        let mut ends: Vec<Point> = Vec::new();
        let mut exits: Vec<usize> = Vec::new();
        for (_, a, b) in maze.portals() {
            let i = ends.len();
            ends.push(a);
            ends.push(b);
            exits.push(i + 1);
            exits.push(i);
        }

        // Bellman-Ford over the relaxed graph of portal ends. Edges are
        // Manhattan walks between ends plus the unit-cost jump to the exit.
        let mut bound: Vec<u32> = ends.iter().map(|&e| manhattan(e, goal)).collect();
        let mut changed = true;
        while changed {
            changed = false;
            for i in 0..ends.len() {
                let mut best = bound[i].min(1 + bound[exits[i]]);
                for j in 0..ends.len() {
                    best = best.min(manhattan(ends[i], ends[j]) + bound[j]);
                }
                if best < bound[i] {
                    bound[i] = best;
                    changed = true;
                }
            }
        }

        let anchors = ends
            .into_iter()
            .zip(bound)
            .filter(|&(e, d)| d < manhattan(e, goal))
            .collect();
        Self { goal, anchors }
    }

    /// Lower bound on the number of steps from `p` to the goal.
    #[inline]
    pub fn estimate(&self, p: Point) -> u32 {
        self.anchors
            .iter()
            .fold(manhattan(p, self.goal), |h, &(e, d)| h.min(manhattan(p, e) + d))
    }
}
