use thiserror::Error;

use crate::cell::PortalId;
use crate::geom::Point;

/// A maze that breaks a structural invariant.
///
/// Produced by [`Maze::from_cells`](crate::Maze::from_cells),
/// [`Maze::parse`](crate::Maze::parse) and the generator; solvers never see
/// an invalid maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,
    #[error("maze is {width}x{height} but {found} cells were supplied")]
    SizeMismatch {
        width: i32,
        height: i32,
        found: usize,
    },
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid maze character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    #[error("maze has no start cell")]
    MissingStart,
    #[error("maze has a second start cell at {second} (first at {first})")]
    DuplicateStart { first: Point, second: Point },
    #[error("maze has no goal cell")]
    MissingGoal,
    #[error("maze has a second goal cell at {second} (first at {first})")]
    DuplicateGoal { first: Point, second: Point },
    #[error("portal {id} appears {count} time(s), expected exactly 2")]
    UnpairedPortal { id: PortalId, count: usize },
    #[error("portal {id} at {pos} is beyond the last portal letter")]
    PortalIdOutOfRange { id: PortalId, pos: Point },
    #[error("cannot generate a {width}x{height} maze; start and goal need separate cells")]
    TooSmall { width: i32, height: i32 },
}
