//! # grid_nav
//!
//! Grid-based path planning and line-of-sight checks for agents of
//! configurable rectangular size. Paths are found with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the
//! 8-connected neighbourhood using the octile distance as heuristic, or with
//! plain [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! expansion when no goal bias is wanted. Note that this assumes a
//! uniform-cost grid: cardinal steps cost 1, diagonal steps cost √2, and a
//! diagonal step may never cut the corner of a blocked cell. Agents larger
//! than one cell keep their whole body clear of obstacles, both when pathing
//! and when testing visibility, which is answered by marching up to three
//! corner rays of the agent's bounding box across the grid in sub-cell steps.
mod astar;
mod cost;
mod footprint;
mod grid;
mod neighbors;
mod raycast;

use core::fmt;

use grid_util::point::Point;
use log::{debug, info};

use crate::astar::SearchContext;
use crate::neighbors::admissible_neighbors;
use crate::raycast::segment_blocked;

pub use crate::cost::{
    octile_distance, path_cost, step_cost, SearchMode, CARDINAL_COST, DIAGONAL_COST,
};
pub use crate::footprint::Footprint;
pub use crate::grid::NavGrid;

/// Failure modes of the public query surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavError {
    /// A coordinate lies outside the grid. Checked at every public entry
    /// point before anything else.
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    /// No path exists under the current obstacles and search budget. A
    /// budget-starved search and a genuinely unreachable goal both end
    /// here; compare [Pathfinder::closed_cells] against the budget to tell
    /// them apart.
    NotFound,
    /// Footprint extents must both be at least 1.
    InvalidFootprint { horizontal: i32, vertical: i32 },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NavError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({}, {}) lies outside the {}x{} grid",
                x, y, width, height
            ),
            NavError::NotFound => {
                write!(f, "no path found under the current obstacles and budget")
            }
            NavError::InvalidFootprint {
                horizontal,
                vertical,
            } => write!(
                f,
                "footprint extents must be at least 1, got ({}, {})",
                horizontal, vertical
            ),
        }
    }
}

impl std::error::Error for NavError {}

/// Answers path and visibility queries over a [NavGrid] for one agent
/// [Footprint]. The footprint and the expansion budget are fixed at
/// construction; obstacles may be edited between queries through
/// [grid_mut](Self::grid_mut). Queries borrow the pathfinder mutably, so an
/// in-flight search can never observe a concurrent obstacle edit and the
/// open/closed scratch state is reused from call to call instead of
/// reallocated.
pub struct Pathfinder {
    grid: NavGrid,
    footprint: Footprint,
    budget: usize,
    context: SearchContext<Point, f32>,
}

impl Pathfinder {
    /// Creates a pathfinder owning `grid`. `budget` caps the number of cell
    /// expansions a single search may make before giving up with
    /// [NavError::NotFound].
    pub fn new(grid: NavGrid, footprint: Footprint, budget: usize) -> Pathfinder {
        Pathfinder {
            grid,
            footprint,
            budget,
            context: SearchContext::new(),
        }
    }

    pub fn grid(&self) -> &NavGrid {
        &self.grid
    }

    /// Mutable access to the grid for obstacle edits between queries.
    pub fn grid_mut(&mut self) -> &mut NavGrid {
        &mut self.grid
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Computes a path from `start` to `goal`. The returned path excludes
    /// `start`, ends exactly on `goal` and steps only between mutually
    /// admissible neighbours. `start == goal` is a trivial success with an
    /// empty path; a blocked endpoint fails with [NavError::NotFound]
    /// without expanding anything.
    pub fn find_path(
        &mut self,
        start: Point,
        goal: Point,
        mode: SearchMode,
    ) -> Result<Vec<Point>, NavError> {
        self.grid.check_bounds(start.x, start.y)?;
        self.grid.check_bounds(goal.x, goal.y)?;
        self.context.reset();
        if start == goal {
            return Ok(Vec::new());
        }
        if !self.grid.walkable_point(start) || !self.grid.walkable_point(goal) {
            info!("No path from {} to {}: an endpoint is blocked", start, goal);
            return Err(NavError::NotFound);
        }
        debug!("Searching from {} to {} in {:?} mode", start, goal, mode);
        let grid = &self.grid;
        let footprint = self.footprint;
        let budget = self.budget;
        self.context
            .search(
                start,
                |node, is_closed| admissible_neighbors(grid, footprint, *node, is_closed),
                |node| mode.heuristic(*node, goal),
                |node| *node == goal,
                budget,
            )
            .map(|(path, _cost)| path)
            .ok_or(NavError::NotFound)
    }

    /// Like [find_path](Self::find_path), but also hands back the cells the
    /// search expanded, in expansion order, for visualization. On failure
    /// the trace of the failed search remains available through
    /// [closed_cells](Self::closed_cells).
    pub fn find_path_with_closed(
        &mut self,
        start: Point,
        goal: Point,
        mode: SearchMode,
    ) -> Result<(Vec<Point>, Vec<Point>), NavError> {
        let path = self.find_path(start, goal, mode)?;
        Ok((path, self.context.closed_cells().to_vec()))
    }

    /// Cells expanded by the most recent search, in expansion order. Empty
    /// when the search was resolved before expanding anything.
    pub fn closed_cells(&self) -> &[Point] {
        self.context.closed_cells()
    }

    /// Whether `goal` is visible from `start` for this footprint, i.e. the
    /// straight segment between them crosses no blocked cell.
    pub fn has_line_of_sight(&self, start: Point, goal: Point) -> Result<bool, NavError> {
        self.grid.check_bounds(start.x, start.y)?;
        self.grid.check_bounds(goal.x, goal.y)?;
        let visible = !segment_blocked(&self.grid, self.footprint, start, goal);
        debug!("Line of sight from {} to {}: {}", start, goal, visible);
        Ok(visible)
    }
}
