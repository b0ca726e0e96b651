//! Shortest paths through mazes with a wall-break budget and portals.
//!
//! The search runs over an augmented state space of `(position, breaks
//! used)` built by [`StateSpace`]. Two solvers share it:
//!
//! - **Exact BFS** ([`ExactBfs`]): level-synchronous breadth-first search.
//! - **A\*** ([`HeuristicAstar`]): best-first search with a Manhattan-based
//!   admissible estimate and lazy invalidation of stale frontier entries.
//!
//! Both report the same distance for every maze and budget; recorded paths
//! may differ when several optimal routes exist. Each solve allocates its
//! own tables, so concurrent solves over a shared [`Maze`] are safe.
//!
//! # Consumers
//!
//! | Need | Entry point |
//! |---|---|
//! | reachability check | [`is_solvable`] |
//! | optimal baseline for scoring | [`ExactBfs`], [`score`] |
//! | route validation | [`route::check`] |
//! | hint overlay | [`overlay()`] |
//!
//! [`Maze`]: wallbreak_core::Maze

mod astar;
mod bfs;
mod distance;
mod heuristic;
pub mod overlay;
pub mod route;
mod score;
mod solver;
mod state;

pub use astar::HeuristicAstar;
pub use bfs::ExactBfs;
pub use distance::manhattan;
pub use heuristic::Heuristic;
pub use overlay::overlay;
pub use route::{RouteError, RouteReport};
pub use score::{is_solvable, score};
pub use solver::{Solution, Solver, SolverKind};
pub use state::{Edge, State, StateSpace, Step};
