use grid_util::point::Point;

/// Cost of a step between cardinal neighbours.
pub const CARDINAL_COST: f32 = 1.0;
/// Cost of a step between diagonal neighbours.
pub const DIAGONAL_COST: f32 = std::f32::consts::SQRT_2;

/// Selects how the search estimates remaining cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Informed search guided by the octile distance.
    AStar,
    /// Uniform-cost expansion: the heuristic is identically zero.
    Dijkstra,
}

impl SearchMode {
    pub fn heuristic(self, a: Point, b: Point) -> f32 {
        match self {
            SearchMode::AStar => octile_distance(a, b),
            SearchMode::Dijkstra => 0.0,
        }
    }
}

/// Octile distance between two cells: the exact cost of an unobstructed
/// path on an 8-connected grid with unit/√2 step costs. Admissible and
/// consistent, which keeps recorded `g` values final once a cell is
/// expanded.
pub fn octile_distance(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x).abs() as f32;
    let dy = (a.y - b.y).abs() as f32;
    (DIAGONAL_COST - CARDINAL_COST) * dx.min(dy) + dx.max(dy)
}

/// Cost of a single move between two adjacent cells.
pub fn step_cost(from: Point, to: Point) -> f32 {
    if from.x == to.x || from.y == to.y {
        CARDINAL_COST
    } else {
        DIAGONAL_COST
    }
}

/// Total cost of a path as returned by the engine (start-exclusive), walked
/// from `start`.
pub fn path_cost(start: Point, path: &[Point]) -> f32 {
    let mut cost = 0.0;
    let mut current = start;
    for &next in path {
        cost += step_cost(current, next);
        current = next;
    }
    cost
}
