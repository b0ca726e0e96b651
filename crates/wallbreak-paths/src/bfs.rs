use std::collections::VecDeque;

use log::{debug, trace};
use wallbreak_core::Maze;

use crate::solver::{Solution, Solver};
use crate::state::{Edge, NO_PARENT, StateSpace};

/// Exact breadth-first solver.
///
/// Searches the state space one level (path length) at a time. Each state
/// enters the frontier once, at its first discovery, so the level at which a
/// goal state is first popped is the minimum step count over every break
/// count.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactBfs;

impl ExactBfs {
    /// Run the search. With `record_path` unset no parent table is
    /// allocated and the returned path is empty.
    pub fn search(&self, maze: &Maze, k: u32, record_path: bool) -> Option<Solution> {
        let space = StateSpace::new(maze, k);
        let mut visited = vec![false; space.len()];
        let mut parents = if record_path {
            vec![NO_PARENT; space.len()]
        } else {
            Vec::new()
        };

        let root = space.index(space.start());
        visited[root] = true;
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(root);

        let mut edges: Vec<Edge> = Vec::with_capacity(5);
        let mut level: u32 = 0;
        let mut expanded = 0usize;

        while !queue.is_empty() {
            trace!("bfs: level {level}, frontier {}", queue.len());
            for _ in 0..queue.len() {
                let Some(ci) = queue.pop_front() else {
                    break;
                };
                expanded += 1;
                let current = space.state(ci);

                if space.is_goal(current) {
                    debug!(
                        "bfs: k={k} (effective {}), distance {level}, {expanded} expanded",
                        space.budget()
                    );
                    let path = if record_path {
                        space.trace(&parents, ci)
                    } else {
                        Vec::new()
                    };
                    return Some(Solution {
                        distance: level,
                        path,
                        breaks_used: current.breaks,
                        expanded,
                    });
                }

                edges.clear();
                space.successors(current, &mut edges);
                for edge in &edges {
                    let ni = space.index(edge.to);
                    if visited[ni] {
                        continue;
                    }
                    visited[ni] = true;
                    if record_path {
                        parents[ni] = ci;
                    }
                    queue.push_back(ni);
                }
            }
            level += 1;
        }

        debug!(
            "bfs: k={k} (effective {}), unreachable, {expanded} expanded",
            space.budget()
        );
        None
    }
}

impl Solver for ExactBfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve(&self, maze: &Maze, k: u32) -> Option<Solution> {
        self.search(maze, k, true)
    }

    fn distance(&self, maze: &Maze, k: u32) -> Option<u32> {
        self.search(maze, k, false).map(|s| s.distance)
    }
}
