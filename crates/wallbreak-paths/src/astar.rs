use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use wallbreak_core::Maze;

use crate::heuristic::Heuristic;
use crate::solver::{Solution, Solver};
use crate::state::{Edge, NO_PARENT, StateSpace};

/// Cost sentinel for states not reached yet.
const UNREACHED: u32 = u32::MAX;

/// Heuristic best-first (A*) solver.
///
/// Uses the Manhattan estimate from [`Heuristic`], which also accounts for
/// portal shortcuts. Distances always equal [`ExactBfs`](crate::ExactBfs);
/// when several optimal routes exist the recorded path may differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAstar;

/// A frontier entry: a state index with the cost it was pushed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) f: u32,
    pub(crate) g: u32,
    pub(crate) idx: usize,
}

impl FrontierEntry {
    /// Frontier order. `Less` means `self` is popped before `other`.
    ///
    /// 1. lower `f = g + h` first;
    /// 2. on equal `f`, higher `g` first (deeper entries are closer to the
    ///    goal, which cuts plateau exploration);
    /// 3. on equal `f` and `g`, lower state index first, so runs are
    ///    deterministic.
    pub(crate) fn priority(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| self.idx.cmp(&other.idx))
    }
}

/// `BinaryHeap` is a max-heap; the entry that [`priority`] ranks first must
/// compare greatest.
///
/// [`priority`]: FrontierEntry::priority
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority(self)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl HeuristicAstar {
    /// Run the search. With `record_path` unset no parent table is
    /// allocated and the returned path is empty.
    pub fn search(&self, maze: &Maze, k: u32, record_path: bool) -> Option<Solution> {
        self.search_counting_stale(maze, k, record_path).0
    }

    /// As [`search`](Self::search), also returning how many popped entries
    /// were skipped as stale.
    pub(crate) fn search_counting_stale(
        &self,
        maze: &Maze,
        k: u32,
        record_path: bool,
    ) -> (Option<Solution>, usize) {
        let space = StateSpace::new(maze, k);
        let h = Heuristic::new(maze);

        let mut best = vec![UNREACHED; space.len()];
        let mut parents = if record_path {
            vec![NO_PARENT; space.len()]
        } else {
            Vec::new()
        };

        let root = space.start();
        let ri = space.index(root);
        best[ri] = 0;
        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        open.push(FrontierEntry {
            f: h.estimate(root.pos),
            g: 0,
            idx: ri,
        });

        let mut edges: Vec<Edge> = Vec::with_capacity(5);
        let mut expanded = 0usize;
        let mut stale = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };

            // Lazy invalidation: a cheaper push for this state superseded
            // the entry after it was queued.
            if current.g != best[current.idx] {
                stale += 1;
                trace!("astar: skip stale entry {current:?}");
                continue;
            }
            expanded += 1;

            let state = space.state(current.idx);
            if space.is_goal(state) {
                break 'search Some((current, state.breaks));
            }

            edges.clear();
            space.successors(state, &mut edges);
            for edge in &edges {
                let ni = space.index(edge.to);
                let tentative = current.g + 1;
                if tentative >= best[ni] {
                    continue;
                }
                best[ni] = tentative;
                if record_path {
                    parents[ni] = current.idx;
                }
                open.push(FrontierEntry {
                    f: tentative + h.estimate(edge.to.pos),
                    g: tentative,
                    idx: ni,
                });
            }
        };

        let Some((goal, breaks_used)) = found else {
            debug!(
                "astar: k={k} (effective {}), unreachable, {expanded} expanded, {stale} stale",
                space.budget()
            );
            return (None, stale);
        };

        debug!(
            "astar: k={k} (effective {}), distance {}, {expanded} expanded, {stale} stale",
            space.budget(),
            goal.g
        );
        let path = if record_path {
            space.trace(&parents, goal.idx)
        } else {
            Vec::new()
        };
        let solution = Solution {
            distance: goal.g,
            path,
            breaks_used,
            expanded,
        };
        (Some(solution), stale)
    }
}

impl Solver for HeuristicAstar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn solve(&self, maze: &Maze, k: u32) -> Option<Solution> {
        self.search(maze, k, true)
    }

    fn distance(&self, maze: &Maze, k: u32) -> Option<u32> {
        self.search(maze, k, false).map(|s| s.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::ExactBfs;
    use crate::route;
    use wallbreak_core::Point;

    fn entry(f: u32, g: u32, idx: usize) -> FrontierEntry {
        FrontierEntry { f, g, idx }
    }

    #[test]
    fn priority_prefers_lower_f() {
        assert_eq!(entry(3, 0, 9).priority(&entry(4, 4, 0)), Ordering::Less);
        assert_eq!(entry(5, 5, 0).priority(&entry(4, 0, 9)), Ordering::Greater);
    }

    #[test]
    fn priority_breaks_f_ties_by_higher_g() {
        assert_eq!(entry(6, 4, 9).priority(&entry(6, 2, 0)), Ordering::Less);
    }

    #[test]
    fn priority_breaks_full_ties_by_index() {
        assert_eq!(entry(6, 4, 1).priority(&entry(6, 4, 2)), Ordering::Less);
        assert_eq!(entry(6, 4, 2).priority(&entry(6, 4, 2)), Ordering::Equal);
    }

    #[test]
    fn heap_pops_in_priority_order() {
        let mut heap = BinaryHeap::new();
        for e in [
            entry(7, 1, 0),
            entry(5, 2, 3),
            entry(5, 4, 8),
            entry(5, 4, 2),
            entry(6, 0, 1),
        ] {
            heap.push(e);
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(
            order,
            vec![
                entry(5, 4, 2),
                entry(5, 4, 8),
                entry(5, 2, 3),
                entry(6, 0, 1),
                entry(7, 1, 0),
            ]
        );
    }

    #[test]
    fn open_grid_distance_is_manhattan() {
        let maze = Maze::parse(
            "
S....
.....
.....
.....
#...G",
        )
        .unwrap();
        let sol = HeuristicAstar.solve(&maze, 0).unwrap();
        assert_eq!(sol.distance, 8);
        assert_eq!(sol.path.first(), Some(&maze.start()));
        assert_eq!(sol.path.last(), Some(&maze.goal()));
        assert!(sol.expanded > 0 && sol.expanded <= 25);
    }

    #[test]
    fn blocked_corridor_needs_one_break() {
        let maze = Maze::parse("S.#.G").unwrap();
        assert_eq!(HeuristicAstar.solve(&maze, 0), None);
        assert_eq!(HeuristicAstar.distance(&maze, 1), Some(4));
        assert_eq!(HeuristicAstar.distance(&maze, 7), Some(4));
    }

    #[test]
    fn portal_shortcut_is_taken() {
        let maze = Maze::parse("Sa#aG\n.###.\n.....").unwrap();
        let sol = HeuristicAstar.solve(&maze, 0).unwrap();
        assert_eq!(sol.distance, 3);
        assert!(
            sol.path
                .windows(2)
                .any(|w| w[0] == Point::new(1, 0) && w[1] == Point::new(3, 0))
        );
    }

    #[test]
    fn portal_behind_start_is_still_found() {
        // The useful portal end lies away from the goal; plain Manhattan
        // would rank it last and settle on the 7-step walk.
        let maze = Maze::parse("aS.....aG").unwrap();
        assert_eq!(ExactBfs.distance(&maze, 0), Some(3));
        let sol = HeuristicAstar.solve(&maze, 0).unwrap();
        assert_eq!(sol.distance, 3);
        assert_eq!(
            sol.path,
            vec![
                Point::new(1, 0),
                Point::new(0, 0),
                Point::new(7, 0),
                Point::new(8, 0),
            ]
        );
    }

    #[test]
    fn matches_bfs_with_walls_and_portals() {
        let maze = Maze::parse(
            "
S.#....b
.##.##..
..a.#..#
##.##.b.
a....#.G",
        )
        .unwrap();
        for k in 0..=maze.wall_count() as u32 + 1 {
            let exact = ExactBfs.distance(&maze, k);
            let sol = HeuristicAstar.solve(&maze, k);
            assert_eq!(sol.as_ref().map(|s| s.distance), exact, "k={k}");
            if let Some(sol) = sol {
                let report = route::check(&maze, k, &sol.path).unwrap();
                assert_eq!(report.steps, sol.distance as usize);
            }
        }
    }

    #[test]
    fn superseded_entry_is_skipped_not_expanded() {
        // Deeper entries win f ties, so (2, 1) is first queued at cost 5
        // along the top row, then improved to 3 through (1, 1). The cost-5
        // entry pops stale.
        let maze = Maze::parse(
            "
...#G
...#.
S#...",
        )
        .unwrap();
        let (sol, stale) = HeuristicAstar.search_counting_stale(&maze, 0, true);
        let sol = sol.unwrap();
        assert_eq!(sol.distance, 8);
        assert_eq!(ExactBfs.distance(&maze, 0), Some(8));
        assert_eq!(stale, 1);
        assert_eq!(sol.expanded, 12);
        let open_cells = maze.iter().filter(|(_, c)| !c.is_wall()).count();
        assert!(sol.expanded <= open_cells);
    }

    #[test]
    fn expansions_bounded_by_state_count() {
        let maze = Maze::parse(
            "
S.#....b
.##.##..
..a.#..#
##.##.b.
a....#.G",
        )
        .unwrap();
        for k in 0..=3 {
            let (sol, _) = HeuristicAstar.search_counting_stale(&maze, k, false);
            let states = StateSpace::new(&maze, k).len();
            assert!(sol.unwrap().expanded <= states, "k={k}");
        }
    }

    #[test]
    fn unreachable_exhausts_frontier() {
        let maze = Maze::parse("S.#\n###\n..G").unwrap();
        assert_eq!(HeuristicAstar.distance(&maze, 0), None);
        assert_eq!(HeuristicAstar.distance(&maze, 1), Some(4));
        assert_eq!(ExactBfs.distance(&maze, 1), Some(4));
    }
}
