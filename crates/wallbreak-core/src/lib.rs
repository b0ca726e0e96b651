//! **wallbreak-core** — maze model for wall-break shortest-path solving.
//!
//! This crate provides the types every other *wallbreak* crate builds on:
//! geometry primitives, typed maze cells, and the validated [`Maze`] with its
//! portal-pair lookup. Mazes are produced by [`Maze::parse`] or
//! [`Maze::from_cells`], which reject structurally invalid input with a
//! [`MazeError`]. [`MazeGen`] builds random mazes for practice and test
//! data.

pub mod cell;
pub mod error;
pub mod geom;
pub mod layout;
pub mod mapgen;
pub mod maze;

pub use cell::{Cell, PortalId};
pub use error::MazeError;
pub use geom::{Point, Range};
pub use mapgen::MazeGen;
pub use maze::Maze;
