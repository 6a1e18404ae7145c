use grid_nav::{Footprint, NavGrid, Pathfinder};
use grid_util::point::Point;

// A watcher behind a short wall. Targets straight across the wall are
// hidden; targets that clear its ends are visible.
fn main() {
    let mut grid = NavGrid::new(9, 9);
    for y in 3..=5 {
        grid.set_blocked(4, y, true).unwrap();
    }
    println!("{}", grid);
    let nav = Pathfinder::new(grid, Footprint::single(), 1000);
    let watcher = Point::new(1, 4);
    for target in [
        Point::new(7, 4),
        Point::new(4, 0),
        Point::new(4, 7),
        Point::new(6, 1),
    ] {
        let visible = nav.has_line_of_sight(watcher, target).unwrap();
        println!(
            "{} -> {}: {}",
            watcher,
            target,
            if visible { "visible" } else { "hidden" }
        );
    }
}
