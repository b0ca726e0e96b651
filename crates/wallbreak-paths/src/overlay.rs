//! Text overlay of two solvers' routes on one maze.

use wallbreak_core::{Cell, Maze, Point};

/// Marks for cells on the first route only.
pub const FIRST_MARK: char = '*';
/// Marks for cells on the second route only.
pub const SECOND_MARK: char = '+';
/// Marks for cells on both routes.
pub const SHARED_MARK: char = '@';
/// Marks for a wall broken by the first route only.
pub const FIRST_BREAK: char = '%';
/// Marks for a wall broken by the second route only.
pub const SECOND_BREAK: char = '&';
/// Marks for a wall broken by both routes.
pub const SHARED_BREAK: char = 'X';

/// Render `maze` in its text layout with both routes drawn over it. Floor
/// and broken walls get distinct marks; start, goal and portal letters are
/// left as they are.
pub fn overlay(maze: &Maze, first: &[Point], second: &[Point]) -> String {
    let width = maze.width() as usize;
    let mut marks = vec![0u8; maze.bounds().len()];
    let index = |p: Point| p.y as usize * width + p.x as usize;
    for &p in first.iter().filter(|p| maze.in_bounds(**p)) {
        marks[index(p)] |= 1;
    }
    for &p in second.iter().filter(|p| maze.in_bounds(**p)) {
        marks[index(p)] |= 2;
    }

    let mut out = String::with_capacity(marks.len() + maze.height() as usize);
    for (p, cell) in maze.iter() {
        if p.x == 0 && p.y > 0 {
            out.push('\n');
        }
        let ch = match (cell, marks[index(p)]) {
            (Cell::Empty, 1) => FIRST_MARK,
            (Cell::Empty, 2) => SECOND_MARK,
            (Cell::Empty, 3) => SHARED_MARK,
            (Cell::Wall, 1) => FIRST_BREAK,
            (Cell::Wall, 2) => SECOND_BREAK,
            (Cell::Wall, 3) => SHARED_BREAK,
            _ => cell.to_char(),
        };
        out.push(ch);
    }
    out
}
