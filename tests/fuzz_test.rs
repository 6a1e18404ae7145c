//! Fuzzes the engine against many random grids: a path must be found exactly
//! when the goal is reachable under the movement rules, found paths must be
//! step-by-step valid, and both search modes must agree on cost.
use grid_nav::{path_cost, Footprint, NavGrid, Pathfinder, SearchMode};
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::VecDeque;

const MOVES: [(i32, i32); 8] = [
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
];

fn open(grid: &NavGrid, x: i32, y: i32) -> bool {
    x >= 0
        && y >= 0
        && (x as usize) < grid.width()
        && (y as usize) < grid.height()
        && !grid.is_blocked(x, y).unwrap()
}

/// Movement legality re-derived from the public grid surface: open
/// destination, and for diagonals both flanking cardinals open as well.
fn step_allowed(grid: &NavGrid, from: Point, dx: i32, dy: i32) -> bool {
    if !open(grid, from.x + dx, from.y + dy) {
        return false;
    }
    if dx != 0 && dy != 0 {
        open(grid, from.x + dx, from.y) && open(grid, from.x, from.y + dy)
    } else {
        true
    }
}

/// Breadth-first reachability oracle.
fn reachable(grid: &NavGrid, start: Point, end: Point) -> bool {
    let index = |p: Point| p.y as usize * grid.width() + p.x as usize;
    let mut seen = vec![false; grid.width() * grid.height()];
    let mut queue = VecDeque::new();
    seen[index(start)] = true;
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        if current == end {
            return true;
        }
        for (dx, dy) in MOVES {
            if step_allowed(grid, current, dx, dy) {
                let next = Point::new(current.x + dx, current.y + dy);
                if !seen[index(next)] {
                    seen[index(next)] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    false
}

fn random_grid(n: usize, rng: &mut StdRng) -> NavGrid {
    let mut grid = NavGrid::new(n, n);
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            grid.set_blocked(x, y, rng.gen_bool(0.4)).unwrap();
        }
    }
    grid
}

fn visualize_grid(grid: &NavGrid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_blocked(x, y).unwrap() {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn assert_path_valid(grid: &NavGrid, start: Point, end: Point, path: &[Point]) {
    assert_eq!(*path.last().unwrap(), end);
    assert!(!path.contains(&start));
    let mut current = start;
    for &next in path {
        let dx = next.x - current.x;
        let dy = next.y - current.y;
        assert!(dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0));
        assert!(step_allowed(grid, current, dx, dy));
        current = next;
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 10000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.set_blocked(start.x, start.y, false).unwrap();
        grid.set_blocked(end.x, end.y, false).unwrap();
        let expected = reachable(&grid, start, end);
        let mut nav = Pathfinder::new(grid, Footprint::single(), 10_000);
        let outcome = nav.find_path(start, end, SearchMode::AStar);
        // Show the grid if the engine disagrees with the oracle
        if outcome.is_ok() != expected {
            visualize_grid(nav.grid(), &start, &end);
        }
        assert_eq!(outcome.is_ok(), expected);
        if let Ok(path) = outcome {
            assert_path_valid(nav.grid(), start, end, &path);
            let again = nav.find_path(start, end, SearchMode::AStar).unwrap();
            assert_eq!(path, again);
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 5;
    const N_GRIDS: usize = 10000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.set_blocked(start.x, start.y, false).unwrap();
        grid.set_blocked(end.x, end.y, false).unwrap();
        let mut nav = Pathfinder::new(grid, Footprint::single(), 10_000);
        let astar = nav.find_path(start, end, SearchMode::AStar);
        let dijkstra = nav.find_path(start, end, SearchMode::Dijkstra);
        assert_eq!(astar.is_ok(), dijkstra.is_ok());
        if let (Ok(astar_path), Ok(dijkstra_path)) = (astar, dijkstra) {
            let astar_cost = path_cost(start, &astar_path);
            let dijkstra_cost = path_cost(start, &dijkstra_path);
            let delta_dist = (astar_cost - dijkstra_cost).abs() / dijkstra_cost;
            if delta_dist >= 0.01 {
                println!("Astar cost: {astar_cost}; Dijkstra cost: {dijkstra_cost}");
                println!("Astar path: {astar_path:?}\nDijkstra path: {dijkstra_path:?}");
                visualize_grid(nav.grid(), &start, &end);
            }
            assert!(delta_dist < 0.01);
        }
    }
}
