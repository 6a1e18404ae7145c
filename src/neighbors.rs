use grid_util::point::Point;

use crate::cost::{CARDINAL_COST, DIAGONAL_COST};
use crate::footprint::Footprint;
use crate::grid::NavGrid;

// Candidate moves in fixed emission order (up, left, down, right, then the
// diagonals between them). The order feeds the open-list tie-break, so it is
// part of the engine's deterministic contract. Up is decreasing y.
const CARDINALS: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];
// Indices into the cardinal clearance flags gating each diagonal.
const DIAGONAL_GATES: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];

/// Returns the admissible neighbours of `at` with their step costs, honoring
/// footprint clearance and corner-cut prevention: a diagonal is only offered
/// when both of its adjacent cardinal moves are clear. Cells for which
/// `is_closed` holds are never emitted, and a closed diagonal skips its
/// clearance rectangle; the cardinal flags are always computed so the skip
/// cannot change which other cells are accepted.
pub(crate) fn admissible_neighbors<F>(
    grid: &NavGrid,
    footprint: Footprint,
    at: Point,
    is_closed: F,
) -> Vec<(Point, f32)>
where
    F: Fn(&Point) -> bool,
{
    let mut neighbors = Vec::with_capacity(8);
    let mut cardinal_flags = [false; 4];
    for (i, &(dx, dy)) in CARDINALS.iter().enumerate() {
        let candidate = Point::new(at.x + dx, at.y + dy);
        let clear = cardinal_clear(grid, footprint, at, dx, dy);
        cardinal_flags[i] = clear;
        if clear && !is_closed(&candidate) {
            neighbors.push((candidate, CARDINAL_COST));
        }
    }
    for (i, &(dx, dy)) in DIAGONALS.iter().enumerate() {
        let (a, b) = DIAGONAL_GATES[i];
        if !(cardinal_flags[a] && cardinal_flags[b]) {
            continue;
        }
        let candidate = Point::new(at.x + dx, at.y + dy);
        if is_closed(&candidate) {
            continue;
        }
        if diagonal_clear(grid, footprint, candidate) {
            neighbors.push((candidate, DIAGONAL_COST));
        }
    }
    neighbors
}

/// Whether a cardinal move from `from` keeps the whole body clear: every
/// cell of the band swept by the move (width `2h-1` for vertical moves,
/// height `2v-1` for horizontal ones, reaching `v` resp. `h` cells beyond
/// the center) must be walkable. For a `(1,1)` footprint this is exactly
/// the destination cell.
fn cardinal_clear(grid: &NavGrid, footprint: Footprint, from: Point, dx: i32, dy: i32) -> bool {
    let h = footprint.horizontal();
    let v = footprint.vertical();
    if dy != 0 {
        for i in 0..h {
            for j in 1..=v {
                let y = from.y + dy * j;
                if !grid.walkable(from.x - i, y) || !grid.walkable(from.x + i, y) {
                    return false;
                }
            }
        }
    } else {
        for i in 0..v {
            for j in 1..=h {
                let x = from.x + dx * j;
                if !grid.walkable(x, from.y - i) || !grid.walkable(x, from.y + i) {
                    return false;
                }
            }
        }
    }
    true
}

/// Whether the full `(2h-1) × (2v-1)` occupancy rectangle centered on a
/// diagonal destination is walkable.
fn diagonal_clear(grid: &NavGrid, footprint: Footprint, to: Point) -> bool {
    let h = footprint.horizontal();
    let v = footprint.vertical();
    for x in (to.x - (h - 1))..=(to.x + (h - 1)) {
        for y in (to.y - (v - 1))..=(to.y + (v - 1)) {
            if !grid.walkable(x, y) {
                return false;
            }
        }
    }
    true
}
