use crate::geom::Coord;

/// The quadrant of a direction vector, numbered counter-clockwise from the
/// positive x axis.
///
/// Zero ordinates count as non-negative: `(1, 0)` and `(0, 1)` are `NE`,
/// `(-1, 0)` is `NW` and `(0, -1)` is `SE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    NE = 0,
    NW = 1,
    SW = 2,
    SE = 3,
}

impl Quadrant {
    /// Returns `None` for the zero vector, which has no direction.
    pub fn of_vector(dx: f64, dy: f64) -> Option<Quadrant> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(if dx >= 0.0 {
            if dy >= 0.0 {
                Quadrant::NE
            } else {
                Quadrant::SE
            }
        } else if dy >= 0.0 {
            Quadrant::NW
        } else {
            Quadrant::SW
        })
    }

    pub fn of_segment(p0: Coord, p1: Coord) -> Option<Quadrant> {
        if p0.equals_2d(&p1) {
            return None;
        }
        Quadrant::of_vector(p1.x - p0.x, p1.y - p0.y)
    }

    pub fn is_northern(self) -> bool {
        matches!(self, Quadrant::NE | Quadrant::NW)
    }
}
