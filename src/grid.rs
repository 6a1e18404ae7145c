use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;

use crate::NavError;

/// Occupancy grid over which paths and line-of-sight queries are computed.
///
/// Wraps a [BoolGrid] in which [true] marks a blocked cell and [false] an
/// open one. The grid never changes shape after creation; the blocked flags
/// are the only state mutated from outside, via [set_blocked](Self::set_blocked)
/// between searches.
#[derive(Clone, Debug)]
pub struct NavGrid {
    cells: BoolGrid,
}

impl NavGrid {
    /// Creates an all-open grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> NavGrid {
        NavGrid {
            cells: BoolGrid::new(width, height, false),
        }
    }
    pub fn width(&self) -> usize {
        self.cells.width()
    }
    pub fn height(&self) -> usize {
        self.cells.height()
    }
    /// Whether the cell at `(x, y)` is blocked.
    pub fn is_blocked(&self, x: i32, y: i32) -> Result<bool, NavError> {
        self.check_bounds(x, y)?;
        Ok(self.cells.get(x as usize, y as usize))
    }
    /// Marks the cell at `(x, y)` as blocked or open.
    pub fn set_blocked(&mut self, x: i32, y: i32, blocked: bool) -> Result<(), NavError> {
        self.check_bounds(x, y)?;
        self.cells.set(x as usize, y as usize, blocked);
        Ok(())
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cells.width() && (y as usize) < self.cells.height()
    }
    /// Non-failing probe used by clearance checks and ray sampling. Treats
    /// everything outside the grid as blocked, which makes a map behave as
    /// if it were ringed by blocked cells.
    pub(crate) fn walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.cells.get(x as usize, y as usize)
    }
    pub(crate) fn walkable_point(&self, point: Point) -> bool {
        self.walkable(point.x, point.y)
    }
    pub(crate) fn check_bounds(&self, x: i32, y: i32) -> Result<(), NavError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(NavError::OutOfBounds {
                x,
                y,
                width: self.cells.width(),
                height: self.cells.height(),
            })
        }
    }
}

impl fmt::Display for NavGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                write!(f, "{}", if self.cells.get(x as usize, y as usize) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
