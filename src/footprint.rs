use crate::NavError;

/// Agent body size in cells, used to widen clearance checks and ray corners.
///
/// An agent with footprint `(h, v)` centered on a cell occupies the
/// `(2h-1) × (2v-1)` rectangle of cells around it; `(1,1)` is a single-cell
/// agent. Extents are fixed for the lifetime of a
/// [Pathfinder](crate::Pathfinder).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    horizontal: i32,
    vertical: i32,
}

impl Footprint {
    /// Validates and builds a footprint. Extents below 1 are rejected.
    pub fn new(horizontal: i32, vertical: i32) -> Result<Footprint, NavError> {
        if horizontal < 1 || vertical < 1 {
            return Err(NavError::InvalidFootprint {
                horizontal,
                vertical,
            });
        }
        Ok(Footprint {
            horizontal,
            vertical,
        })
    }
    /// The single-cell agent, `(1,1)`.
    pub fn single() -> Footprint {
        Footprint {
            horizontal: 1,
            vertical: 1,
        }
    }
    pub fn horizontal(&self) -> i32 {
        self.horizontal
    }
    pub fn vertical(&self) -> i32 {
        self.vertical
    }
}

impl Default for Footprint {
    fn default() -> Footprint {
        Footprint::single()
    }
}
