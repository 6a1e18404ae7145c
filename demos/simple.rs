use grid_nav::{Footprint, NavGrid, Pathfinder, SearchMode};
use grid_util::point::Point;

// In this example a path is found on a grid with shape
// S....
// .##..
// .#...
// .#.#.
// ...#E
// S marks the start
// E marks the end
fn main() {
    let mut grid = NavGrid::new(5, 5);
    for (x, y) in [(1, 1), (2, 1), (1, 2), (1, 3), (3, 3), (3, 4)] {
        grid.set_blocked(x, y, true).unwrap();
    }
    println!("{}", grid);
    let mut nav = Pathfinder::new(grid, Footprint::single(), 1000);
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    if let Ok(path) = nav.find_path(start, end, SearchMode::AStar) {
        println!("A path has been found:");
        for p in path {
            println!("{}", p);
        }
    }
}
