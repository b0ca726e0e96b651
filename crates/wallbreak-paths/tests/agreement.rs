//! Properties that must hold for every maze and budget, checked over many
//! random mazes.

use wallbreak_core::{Cell, Maze, Point, PortalId, Range};
use wallbreak_paths::{ExactBfs, HeuristicAstar, Solver, SolverKind, manhattan, route};

const TRIALS: usize = 300;

/// Random maze with ~30% walls and up to three portal pairs.
fn random_maze() -> Maze {
    let width: i32 = rand::random_range(2..=9);
    let height: i32 = rand::random_range(1..=7);
    let mut cells: Vec<Cell> = (0..width * height)
        .map(|_| {
            if rand::random_bool(0.3) {
                Cell::Wall
            } else {
                Cell::Empty
            }
        })
        .collect();

    let mut free: Vec<usize> = (0..cells.len()).collect();
    cells[take(&mut free)] = Cell::Start;
    cells[take(&mut free)] = Cell::Goal;
    let pairs = rand::random_range(0..=3u8);
    for id in 0..pairs {
        if free.len() < 2 {
            break;
        }
        cells[take(&mut free)] = Cell::Portal(PortalId(id));
        cells[take(&mut free)] = Cell::Portal(PortalId(id));
    }

    Maze::from_cells(width, height, cells).expect("generated maze is valid")
}

fn take(free: &mut Vec<usize>) -> usize {
    free.swap_remove(rand::random_range(0..free.len()))
}

fn budgets(maze: &Maze) -> Vec<u32> {
    let walls = maze.wall_count() as u32;
    let mut ks = vec![0, 1, 2, 3, walls, walls + 1];
    ks.sort_unstable();
    ks.dedup();
    ks
}

#[test]
fn bfs_and_astar_agree_on_distance() {
    for _ in 0..TRIALS {
        let maze = random_maze();
        for k in budgets(&maze) {
            let bfs = ExactBfs.solve(&maze, k);
            let astar = HeuristicAstar.solve(&maze, k);
            assert_eq!(
                bfs.as_ref().map(|s| s.distance),
                astar.as_ref().map(|s| s.distance),
                "k={k}\n{maze}"
            );
            assert_eq!(ExactBfs.distance(&maze, k), bfs.as_ref().map(|s| s.distance));
            assert_eq!(
                HeuristicAstar.distance(&maze, k),
                astar.as_ref().map(|s| s.distance)
            );
        }
    }
}

#[test]
fn recorded_paths_are_valid_routes() {
    for _ in 0..TRIALS {
        let maze = random_maze();
        for k in budgets(&maze) {
            for kind in SolverKind::ALL {
                let Some(sol) = kind.solver().solve(&maze, k) else {
                    continue;
                };
                let report = route::check(&maze, k, &sol.path)
                    .unwrap_or_else(|e| panic!("{kind} k={k}: {e}\n{maze}"));
                assert_eq!(report.steps, sol.distance as usize);
                assert_eq!(report.breaks, sol.breaks_used);
                assert!(sol.breaks_used <= k);
            }
        }
    }
}

#[test]
fn distance_never_grows_with_budget() {
    for _ in 0..TRIALS {
        let maze = random_maze();
        let mut prev: Option<u32> = None;
        for k in 0..=maze.wall_count() as u32 + 1 {
            let d = ExactBfs.distance(&maze, k);
            if let Some(p) = prev {
                let d = d.unwrap_or_else(|| panic!("k={k} lost a path found at k-1\n{maze}"));
                assert!(d <= p, "k={k}: {d} > {p}\n{maze}");
            }
            prev = d;
        }
    }
}

#[test]
fn full_budget_without_portals_is_manhattan() {
    for _ in 0..TRIALS {
        let maze = random_maze();
        if maze.portals().next().is_some() {
            continue;
        }
        let k = maze.wall_count() as u32;
        assert_eq!(
            ExactBfs.distance(&maze, k),
            Some(manhattan(maze.start(), maze.goal())),
            "\n{maze}"
        );
    }
}

#[test]
fn portal_exit_is_an_involution() {
    for _ in 0..TRIALS {
        let maze = random_maze();
        for (_, a, b) in maze.portals() {
            assert_ne!(a, b);
            assert_eq!(maze.portal_exit(a), b);
            assert_eq!(maze.portal_exit(b), a);
            assert_eq!(maze.portal_exit(maze.portal_exit(a)), a);
        }
    }
}

#[test]
fn unobstructed_corridor_is_manhattan_for_any_budget() {
    // Start and goal share a row with nothing but floor between them; walls
    // elsewhere cannot make it shorter.
    let maze = Maze::parse(
        "
#.#.#.#
S.....G
.#.#.#.",
    )
    .unwrap();
    for k in [0, 1, 5, 100] {
        assert_eq!(ExactBfs.distance(&maze, k), Some(6));
        assert_eq!(HeuristicAstar.distance(&maze, k), Some(6));
    }
}

#[test]
fn scenario_portal_detour() {
    // Walking round the wall blocks is long; the portal cuts across them.
    let maze = Maze::parse(
        "
S....#....
a###.#.##.
.#...#.#..
.#.###.#.#
.#.....#a.
.#######.G",
    )
    .unwrap();
    let a = Point::new(0, 1);
    let b = Point::new(8, 4);
    assert_eq!(maze.portal_exit(a), b);

    let bfs = ExactBfs.solve(&maze, 0).unwrap();
    let astar = HeuristicAstar.solve(&maze, 0).unwrap();
    // Start, portal, jump, one step, goal.
    assert_eq!(bfs.distance, 4);
    assert_eq!(astar.distance, 4);
    for path in [&bfs.path, &astar.path] {
        assert!(path.windows(2).any(|w| w[0] == a && w[1] == b));
    }
}

#[test]
fn concurrent_solves_share_one_maze() {
    let maze = random_maze();
    let expected: Vec<_> = (0..4).map(|k| ExactBfs.distance(&maze, k)).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4u32)
            .map(|k| {
                let maze = &maze;
                s.spawn(move || HeuristicAstar.distance(maze, k))
            })
            .collect();
        for (k, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), expected[k]);
        }
    });
}

#[test]
fn open_field_ignores_budget() {
    let maze = Maze::parse("S....\n.....\n....G").unwrap();
    for p in Range::sized(5, 3) {
        assert!(maze.in_bounds(p));
    }
    for k in 0..3 {
        assert_eq!(ExactBfs.distance(&maze, k), Some(6));
    }
}
