//! Random maze generation.
//!
//! A depth-first backtracker carves corridors on the odd lattice of an
//! all-wall grid. A share of the carved floor is then walled back in
//! (`wall_noise`), and portal pairs are dropped on random floor cells. Start
//! sits at `(1, 1)` and goal at `(width - 2, height - 2)`.
//!
//! Noise can cut the goal off; callers that need a solvable maze retry with a
//! reachability check.

use rand::seq::SliceRandom;

use crate::cell::{Cell, PortalId};
use crate::error::MazeError;
use crate::geom::{Point, Range};
use crate::maze::Maze;

/// Parameters of the maze generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeGen {
    pub width: i32,
    pub height: i32,
    /// Portal pairs to place, capped at [`PortalId::COUNT`] and by the
    /// available floor.
    pub portal_pairs: usize,
    /// Chance (0.0–1.0) that a carved interior floor cell is walled again.
    pub wall_noise: f64,
}

impl Default for MazeGen {
    fn default() -> Self {
        Self {
            width: 15,
            height: 11,
            portal_pairs: 2,
            wall_noise: 0.1,
        }
    }
}

impl MazeGen {
    /// Smallest side length the generator accepts.
    pub const MIN_SIDE: i32 = 3;

    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_portals(mut self, pairs: usize) -> Self {
        self.portal_pairs = pairs;
        self
    }

    pub fn with_noise(mut self, wall_noise: f64) -> Self {
        self.wall_noise = wall_noise;
        self
    }

    /// Generate one maze. Fails only when the dimensions leave no room for
    /// distinct start and goal cells.
    pub fn generate(&self) -> Result<Maze, MazeError> {
        let (w, h) = (self.width, self.height);
        if w < Self::MIN_SIDE || h < Self::MIN_SIDE || w + h < 2 * Self::MIN_SIDE + 1 {
            return Err(MazeError::TooSmall {
                width: w,
                height: h,
            });
        }
        let bounds = Range::sized(w, h);
        let index = |p: Point| (p.y * w + p.x) as usize;
        let interior = |p: Point| p.x > 0 && p.y > 0 && p.x < w - 1 && p.y < h - 1;

        let mut cells = vec![Cell::Wall; bounds.len()];
        let start = Point::new(1, 1);
        let goal = Point::new(w - 2, h - 2);

        // Iterative backtracker over cells two steps apart.
        cells[index(start)] = Cell::Empty;
        let mut stack = vec![start];
        let mut dirs = Point::DIRS;
        while let Some(&p) = stack.last() {
            dirs.shuffle(&mut rand::rng());
            let next = dirs.iter().find_map(|&d| {
                let q = p + d + d;
                (interior(q) && cells[index(q)] == Cell::Wall).then_some((p + d, q))
            });
            match next {
                Some((between, q)) => {
                    cells[index(between)] = Cell::Empty;
                    cells[index(q)] = Cell::Empty;
                    stack.push(q);
                }
                None => {
                    stack.pop();
                }
            }
        }

        if self.wall_noise > 0.0 {
            let noise = self.wall_noise.min(1.0);
            for p in bounds.iter().filter(|&p| interior(p)) {
                if cells[index(p)] == Cell::Empty && rand::random_bool(noise) {
                    cells[index(p)] = Cell::Wall;
                }
            }
        }
        cells[index(start)] = Cell::Start;
        cells[index(goal)] = Cell::Goal;

        let mut floor: Vec<Point> = bounds
            .iter()
            .filter(|&p| interior(p) && cells[index(p)] == Cell::Empty)
            .collect();
        floor.shuffle(&mut rand::rng());
        let pairs = self.portal_pairs.min(usize::from(PortalId::COUNT)).min(floor.len() / 2);
        for (id, ends) in floor.chunks_exact(2).take(pairs).enumerate() {
            let portal = Cell::Portal(PortalId(id as u8));
            cells[index(ends[0])] = portal;
            cells[index(ends[1])] = portal;
        }

        Maze::from_cells(w, h, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_hold_start_and_goal() {
        for _ in 0..50 {
            let maze = MazeGen::new(11, 7).generate().unwrap();
            assert_eq!(maze.start(), Point::new(1, 1));
            assert_eq!(maze.goal(), Point::new(9, 5));
            assert_eq!((maze.width(), maze.height()), (11, 7));
        }
    }

    #[test]
    fn border_stays_walled() {
        let maze = MazeGen::new(9, 9).with_portals(3).generate().unwrap();
        for (p, cell) in maze.iter() {
            if p.x == 0 || p.y == 0 || p.x == 8 || p.y == 8 {
                assert_eq!(cell, Cell::Wall, "{p}");
            }
        }
    }

    #[test]
    fn noiseless_carving_connects_the_lattice() {
        // Every odd-odd cell is carved when no noise is applied.
        let maze = MazeGen::new(9, 7).with_portals(0).with_noise(0.0).generate().unwrap();
        for y in (1..6).step_by(2) {
            for x in (1..8).step_by(2) {
                assert!(!maze.cell_at(Point::new(x, y)).is_wall(), "({x}, {y})");
            }
        }
    }

    #[test]
    fn portal_pairs_capped_by_floor() {
        let maze = MazeGen::new(5, 3).with_portals(10).with_noise(0.0).generate().unwrap();
        // Interior of 5x3 is one row of three cells: start, one floor, goal.
        assert_eq!(maze.portals().count(), 0);

        let maze = MazeGen::new(15, 11).with_portals(4).with_noise(0.0).generate().unwrap();
        assert_eq!(maze.portals().count(), 4);
    }

    #[test]
    fn portal_pairs_capped_by_letter_count() {
        let maze = MazeGen::new(61, 41)
            .with_portals(100)
            .with_noise(0.0)
            .generate()
            .unwrap();
        assert_eq!(maze.portals().count(), usize::from(PortalId::COUNT));
        assert_eq!(Maze::parse(&maze.to_string()).unwrap(), maze);
    }

    #[test]
    fn full_noise_walls_all_floor() {
        let maze = MazeGen::new(7, 7).with_portals(0).with_noise(1.0).generate().unwrap();
        let open = maze.iter().filter(|(_, c)| *c == Cell::Empty).count();
        assert_eq!(open, 0);
    }

    #[test]
    fn too_small_rejected() {
        assert_eq!(
            MazeGen::new(3, 3).generate(),
            Err(MazeError::TooSmall {
                width: 3,
                height: 3
            })
        );
        assert!(MazeGen::new(2, 9).generate().is_err());
        assert!(MazeGen::new(4, 3).generate().is_ok());
    }

    #[test]
    fn round_trips_through_text() {
        let maze = MazeGen::default().generate().unwrap();
        assert_eq!(Maze::parse(&maze.to_string()).unwrap(), maze);
    }
}
