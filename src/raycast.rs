//! Line-of-sight raycasting. The direction between two cells is classified
//! into one of 8 octants from the sign pattern of its components; each
//! octant selects 2 (cardinal) or 3 (diagonal) corner rays of the agent's
//! bounding box, which are marched in fixed sub-cell steps over the grid.

use grid_util::point::Point;

use crate::footprint::Footprint;
use crate::grid::NavGrid;

/// Marching step in cell units, strictly smaller than one cell edge so a
/// ray cannot step over a cell without sampling it.
const RAY_STEP: f32 = 0.25;

/// Corner of the agent's bounding box.
#[derive(Clone, Copy)]
struct Corner {
    right: bool,
    bottom: bool,
}

impl Corner {
    /// Continuous offset of this corner from the center cell's origin. For
    /// footprint `(h, v)` the box spans `-(h-1)..h` by `-(v-1)..v`; for
    /// `(1,1)` these are the four corners of the cell itself.
    fn offset(self, footprint: Footprint) -> (f32, f32) {
        let x = if self.right {
            footprint.horizontal()
        } else {
            -(footprint.horizontal() - 1)
        };
        let y = if self.bottom {
            footprint.vertical()
        } else {
            -(footprint.vertical() - 1)
        };
        (x as f32, y as f32)
    }
}

const TOP_LEFT: Corner = Corner {
    right: false,
    bottom: false,
};
const TOP_RIGHT: Corner = Corner {
    right: true,
    bottom: false,
};
const BOTTOM_LEFT: Corner = Corner {
    right: false,
    bottom: true,
};
const BOTTOM_RIGHT: Corner = Corner {
    right: true,
    bottom: true,
};

/// Corner rays per octant: cardinal moves march the two corners of the
/// leading edge, diagonal moves the corner pointing into the move plus its
/// two flanks. Up is decreasing y.
fn octant_corners(sx: i32, sy: i32) -> &'static [Corner] {
    match (sx, sy) {
        (1, 0) => &[TOP_RIGHT, BOTTOM_RIGHT],
        (-1, 0) => &[TOP_LEFT, BOTTOM_LEFT],
        (0, -1) => &[TOP_LEFT, TOP_RIGHT],
        (0, 1) => &[BOTTOM_LEFT, BOTTOM_RIGHT],
        (-1, -1) => &[TOP_LEFT, BOTTOM_LEFT, TOP_RIGHT],
        (-1, 1) => &[TOP_LEFT, BOTTOM_LEFT, BOTTOM_RIGHT],
        (1, 1) => &[BOTTOM_LEFT, BOTTOM_RIGHT, TOP_RIGHT],
        (1, -1) => &[TOP_LEFT, TOP_RIGHT, BOTTOM_RIGHT],
        _ => &[],
    }
}

/// Whether the straight segment from `start` to `goal` crosses a blocked
/// cell for an agent of the given footprint. Every ray starts at a corner
/// of the start's bounding box, marches along the true (normalized)
/// direction and stops once it has crossed the same corner of the goal's
/// box on the primary axis (x whenever the direction has a horizontal
/// component, else y). Fails on the first blocked sample.
pub(crate) fn segment_blocked(
    grid: &NavGrid,
    footprint: Footprint,
    start: Point,
    goal: Point,
) -> bool {
    if start == goal {
        return false;
    }
    let sx = (goal.x - start.x).signum();
    let sy = (goal.y - start.y).signum();
    let dx = (goal.x - start.x) as f32;
    let dy = (goal.y - start.y) as f32;
    let length = (dx * dx + dy * dy).sqrt();
    let step_x = dx / length * RAY_STEP;
    let step_y = dy / length * RAY_STEP;
    for &corner in octant_corners(sx, sy) {
        let (offset_x, offset_y) = corner.offset(footprint);
        let mut x = start.x as f32 + offset_x;
        let mut y = start.y as f32 + offset_y;
        let target_x = goal.x as f32 + offset_x;
        let target_y = goal.y as f32 + offset_y;
        loop {
            let crossed = if sx != 0 {
                if sx > 0 {
                    x >= target_x
                } else {
                    x <= target_x
                }
            } else if sy > 0 {
                y >= target_y
            } else {
                y <= target_y
            };
            if crossed {
                break;
            }
            if sample_blocks(grid, x, y) {
                return true;
            }
            x += step_x;
            y += step_y;
        }
    }
    false
}

/// Samples the cell under a ray position. Corner points shared by several
/// cells belong to the bottom-right one per `floor`; samples outside the
/// grid cannot block.
fn sample_blocks(grid: &NavGrid, x: f32, y: f32) -> bool {
    let cell_x = x.floor() as i32;
    let cell_y = y.floor() as i32;
    grid.in_bounds(cell_x, cell_y) && !grid.walkable(cell_x, cell_y)
}
