//! Text layout for mazes.
//!
//! One row per line: `#` wall, `.` empty, `S` start, `G` goal and `a`–`z`
//! for the two ends of a portal pair. Whitespace around the whole block is
//! ignored, as is trailing whitespace on each line.
//!
//! ```text
//! S.#.a
//! .##..
//! a..#G
//! ```

use std::str::FromStr;

use crate::cell::Cell;
use crate::error::MazeError;
use crate::geom::Point;
use crate::maze::Maze;

impl Maze {
    /// Parse a maze from its text layout.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (y, line) in s.lines().enumerate() {
            let line = line.trim_end();
            let mut w = 0usize;
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(MazeError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(cell);
                w += 1;
            }
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(MazeError::RaggedRow {
                        row: y,
                        expected,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        Self::from_cells(width as i32, height as i32, cells)
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
