//! The augmented search graph over `(position, breaks used)`.
//!
//! [`StateSpace`] lifts a [`Maze`] into a graph whose vertices are
//! [`State`]s and whose edges all cost one step. Every state maps to a dense
//! index so that per-solve tables (visited flags, best costs, parents) are
//! flat vectors of length [`StateSpace::len`].

use wallbreak_core::{Maze, Point};

/// Sentinel parent index for the root of a search tree.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A search-graph vertex: a grid position plus the number of wall breaks
/// spent to reach it. Equal positions with different `breaks` are distinct
/// states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub pos: Point,
    pub breaks: u32,
}

impl State {
    #[inline]
    pub const fn new(pos: Point, breaks: u32) -> Self {
        Self { pos, breaks }
    }
}

/// How an edge is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Orthogonal move onto a non-wall cell.
    Walk,
    /// Orthogonal move onto a wall cell, spending one break.
    Break,
    /// Jump from a portal cell to its paired cell.
    Portal,
}

/// A unit-cost edge out of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: State,
    pub step: Step,
}

/// Transition function over a borrowed maze and a wall-break budget.
#[derive(Debug, Clone, Copy)]
pub struct StateSpace<'a> {
    maze: &'a Maze,
    budget: u32,
    width: usize,
    layers: usize,
}

impl<'a> StateSpace<'a> {
    /// Create the state space for `maze` with break budget `k`.
    ///
    /// A shortest path never revisits a position, so it crosses each wall at
    /// most once. The budget is capped at the wall count, which leaves every
    /// distance unchanged and bounds the table size.
    pub fn new(maze: &'a Maze, k: u32) -> Self {
        let walls = u32::try_from(maze.wall_count()).unwrap_or(u32::MAX);
        let budget = k.min(walls);
        Self {
            maze,
            budget,
            width: maze.width() as usize,
            layers: budget as usize + 1,
        }
    }

    #[inline]
    pub fn maze(&self) -> &'a Maze {
        self.maze
    }

    /// The effective break budget, `min(k, wall count)`.
    #[inline]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Number of states: cells × (budget + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.maze.bounds().len() * self.layers
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The root state: the maze start with no breaks spent.
    #[inline]
    pub fn start(&self) -> State {
        State::new(self.maze.start(), 0)
    }

    #[inline]
    pub fn is_goal(&self, s: State) -> bool {
        s.pos == self.maze.goal()
    }

    /// Dense index of `s`. Layout is `(row, col, breaks)`, breaks fastest.
    #[inline]
    pub fn index(&self, s: State) -> usize {
        debug_assert!(self.maze.in_bounds(s.pos), "state {s:?} outside maze");
        debug_assert!(s.breaks <= self.budget, "state {s:?} over budget");
        let cell = s.pos.y as usize * self.width + s.pos.x as usize;
        cell * self.layers + s.breaks as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn state(&self, idx: usize) -> State {
        let cell = idx / self.layers;
        let breaks = (idx % self.layers) as u32;
        let pos = Point::new((cell % self.width) as i32, (cell / self.width) as i32);
        State::new(pos, breaks)
    }

    /// Append the edges out of `s` into `buf`. The caller clears `buf`.
    ///
    /// Order: the four orthogonal moves (up, right, down, left), then the
    /// portal jump if `s` stands on a portal.
    pub fn successors(&self, s: State, buf: &mut Vec<Edge>) {
        for np in s.pos.neighbors_4() {
            let Some(cell) = self.maze.get(np) else {
                continue;
            };
            if !cell.is_wall() {
                buf.push(Edge {
                    to: State::new(np, s.breaks),
                    step: Step::Walk,
                });
            } else if s.breaks < self.budget {
                buf.push(Edge {
                    to: State::new(np, s.breaks + 1),
                    step: Step::Break,
                });
            }
        }
        if let Some(exit) = self.maze.try_portal_exit(s.pos) {
            buf.push(Edge {
                to: State::new(exit, s.breaks),
                step: Step::Portal,
            });
        }
    }

    /// Walk `parents` back from `end` to the root and return the positions
    /// from start to `end`.
    pub(crate) fn trace(&self, parents: &[usize], end: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = end;
        while ci != NO_PARENT {
            path.push(self.state(ci).pos);
            ci = parents[ci];
        }
        path.reverse();
        path
    }
}
