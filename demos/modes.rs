use grid_nav::{path_cost, Footprint, NavGrid, Pathfinder, SearchMode};
use grid_util::point::Point;

// Runs the same query in both search modes. The costs match; the number of
// expanded cells shows how much work the octile heuristic saves.
fn main() {
    let mut grid = NavGrid::new(12, 12);
    for y in 2..12 {
        grid.set_blocked(5, y, true).unwrap();
    }
    println!("{}", grid);
    let mut nav = Pathfinder::new(grid, Footprint::single(), 10_000);
    let start = Point::new(1, 8);
    let end = Point::new(10, 8);
    for mode in [SearchMode::AStar, SearchMode::Dijkstra] {
        match nav.find_path_with_closed(start, end, mode) {
            Ok((path, closed)) => println!(
                "{:?}: cost {:.3}, {} cells expanded",
                mode,
                path_cost(start, &path),
                closed.len()
            ),
            Err(err) => println!("{:?}: {}", mode, err),
        }
    }
}
