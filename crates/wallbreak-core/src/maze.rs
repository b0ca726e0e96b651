//! The [`Maze`] model: a validated grid of [`Cell`]s with portal pairs.

use std::collections::BTreeMap;
use std::fmt;

use crate::cell::{Cell, PortalId};
use crate::error::MazeError;
use crate::geom::{Point, Range};

/// A rectangular maze with exactly one start, one goal and well-formed
/// portal pairs.
///
/// The invariants are checked once at construction; every accessor relies on
/// them. Solvers only ever read a `Maze`. The one mutation offered,
/// [`clear_wall`](Self::clear_wall), cannot break an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    goal: Point,
    portals: BTreeMap<PortalId, (Point, Point)>,
}

impl Maze {
    /// Build a maze from `width * height` cells in row-major order.
    pub fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::Empty);
        }
        let bounds = Range::sized(width, height);
        if cells.len() != bounds.len() {
            return Err(MazeError::SizeMismatch {
                width,
                height,
                found: cells.len(),
            });
        }

        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;
        let mut ends: BTreeMap<PortalId, Vec<Point>> = BTreeMap::new();

        for (p, &cell) in bounds.iter().zip(cells.iter()) {
            match cell {
                Cell::Start => {
                    if let Some(first) = start {
                        return Err(MazeError::DuplicateStart { first, second: p });
                    }
                    start = Some(p);
                }
                Cell::Goal => {
                    if let Some(first) = goal {
                        return Err(MazeError::DuplicateGoal { first, second: p });
                    }
                    goal = Some(p);
                }
                Cell::Portal(id) if id.letter().is_none() => {
                    return Err(MazeError::PortalIdOutOfRange { id, pos: p });
                }
                Cell::Portal(id) => ends.entry(id).or_default().push(p),
                Cell::Empty | Cell::Wall => {}
            }
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let goal = goal.ok_or(MazeError::MissingGoal)?;

        let mut portals = BTreeMap::new();
        for (id, pts) in ends {
            match pts.as_slice() {
                &[entry, exit] => {
                    portals.insert(id, (entry, exit));
                }
                _ => {
                    return Err(MazeError::UnpairedPortal {
                        id,
                        count: pts.len(),
                    });
                }
            }
        }

        Ok(Self {
            cells,
            bounds,
            start,
            goal,
            portals,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Cell> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// The cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    #[inline]
    pub fn cell_at(&self, p: Point) -> Cell {
        match self.get(p) {
            Some(cell) => cell,
            None => panic!("cell_at: {p} is outside the maze bounds {}", self.bounds),
        }
    }

    /// Whether `p` holds a portal. False outside the grid.
    #[inline]
    pub fn is_portal(&self, p: Point) -> bool {
        self.get(p).is_some_and(Cell::is_portal)
    }

    /// The other end of the portal at `p`, or `None` if `p` is not a portal.
    pub fn try_portal_exit(&self, p: Point) -> Option<Point> {
        let id = self.get(p)?.portal_id()?;
        let &(entry, exit) = self.portals.get(&id)?;
        Some(if p == entry { exit } else { entry })
    }

    /// The other end of the portal at `p`. Applying it twice returns `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not a portal cell.
    pub fn portal_exit(&self, p: Point) -> Point {
        match self.try_portal_exit(p) {
            Some(exit) => exit,
            None => panic!("portal_exit: {p} is not a portal cell"),
        }
    }

    /// Portal pairs ordered by id.
    pub fn portals(&self) -> impl Iterator<Item = (PortalId, Point, Point)> + '_ {
        self.portals.iter().map(|(&id, &(a, b))| (id, a, b))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    /// Turn the wall at `p` into an empty cell. Returns whether a wall was
    /// removed.
    ///
    /// Must not be called while a solve over this maze is in flight; the
    /// borrow checker enforces that for in-process solvers.
    pub fn clear_wall(&mut self, p: Point) -> bool {
        if self.get(p) != Some(Cell::Wall) {
            return false;
        }
        let i = self.index(p);
        self.cells[i] = Cell::Empty;
        true
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Maze {
    /// Write the maze in its text layout, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width() as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
