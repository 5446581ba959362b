use std::cmp::Ordering;

use super::Quadrant;
use crate::{algorithm::orientation_index, error::TopologyError, geom::Coord, Result};

/// The direction in which an edge leaves a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeEnd {
    p0: Coord,
    p1: Coord,
    dx: f64,
    dy: f64,
    quadrant: Quadrant,
}

impl EdgeEnd {
    /// The end at `p0` of an edge whose next point is `p1`.
    ///
    /// Fails if the two points coincide, because then there is no direction.
    pub fn new(p0: Coord, p1: Coord) -> Result<Self> {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let quadrant = Quadrant::of_segment(p0, p1).ok_or_else(|| {
            TopologyError::at("cannot compute the quadrant of a zero-length edge end", p0)
        })?;
        Ok(EdgeEnd {
            p0,
            p1,
            dx,
            dy,
            quadrant,
        })
    }

    pub fn coord(&self) -> Coord {
        self.p0
    }

    pub fn direction_pt(&self) -> Coord {
        self.p1
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Orders edge ends counter-clockwise by angle, starting from the
    /// positive x axis.
    ///
    /// Ends pointing in the same direction compare equal, even if their
    /// direction points differ. The comparison is exact.
    pub fn compare_direction(&self, other: &EdgeEnd) -> Ordering {
        if self.dx == other.dx && self.dy == other.dy {
            return Ordering::Equal;
        }
        match self.quadrant.cmp(&other.quadrant) {
            Ordering::Equal => {}
            ord => return ord,
        }
        // Same quadrant: whichever is to the left of the other comes later.
        orientation_index(other.p0, other.p1, self.p1).cmp(&0)
    }
}
