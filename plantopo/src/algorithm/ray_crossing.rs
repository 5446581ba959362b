use super::orientation_index;
use crate::{geom::Coord, graph::Location};

/// Counts the crossings of a ray, cast from a point in the +x direction, with
/// a stream of ring segments.
///
/// A point on any segment is reported as being on the boundary.
#[derive(Clone, Debug)]
pub struct RayCrossingCounter {
    p: Coord,
    crossings: usize,
    on_segment: bool,
}

impl RayCrossingCounter {
    pub fn new(p: Coord) -> Self {
        RayCrossingCounter {
            p,
            crossings: 0,
            on_segment: false,
        }
    }

    pub fn count_segment(&mut self, p1: Coord, p2: Coord) {
        let p = self.p;
        if p1.x < p.x && p2.x < p.x {
            return;
        }
        if p.equals_2d(&p2) {
            self.on_segment = true;
            return;
        }
        // Horizontal segments never cross the ray; they either contain p or not.
        if p1.y == p.y && p2.y == p.y {
            let min_x = p1.x.min(p2.x);
            let max_x = p1.x.max(p2.x);
            if p.x >= min_x && p.x <= max_x {
                self.on_segment = true;
            }
            return;
        }
        // Half-open in y, so that a vertex on the ray is counted exactly once.
        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orient = orientation_index(p1, p2, p);
            if orient == 0 {
                self.on_segment = true;
                return;
            }
            if p2.y < p1.y {
                orient = -orient;
            }
            if orient > 0 {
                self.crossings += 1;
            }
        }
    }

    pub fn is_on_segment(&self) -> bool {
        self.on_segment
    }

    pub fn location(&self) -> Location {
        if self.on_segment {
            Location::Boundary
        } else if self.crossings % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// Locates a point relative to a closed ring.
pub fn locate_point_in_ring(p: Coord, ring: &[Coord]) -> Location {
    let mut counter = RayCrossingCounter::new(p);
    for w in ring.windows(2) {
        counter.count_segment(w[1], w[0]);
        if counter.is_on_segment() {
            break;
        }
    }
    counter.location()
}

/// Is the point inside the ring or on its boundary?
pub fn is_in_ring(p: Coord, ring: &[Coord]) -> bool {
    locate_point_in_ring(p, ring) != Location::Exterior
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    fn diamond() -> Vec<Coord> {
        vec![p(5.0, 0.0), p(10.0, 5.0), p(5.0, 10.0), p(0.0, 5.0), p(5.0, 0.0)]
    }

    #[test]
    fn locate() {
        let ring = diamond();
        assert_eq!(locate_point_in_ring(p(5.0, 5.0), &ring), Location::Interior);
        assert_eq!(locate_point_in_ring(p(1.0, 1.0), &ring), Location::Exterior);
        assert_eq!(locate_point_in_ring(p(7.5, 2.5), &ring), Location::Boundary);
        assert_eq!(locate_point_in_ring(p(10.0, 5.0), &ring), Location::Boundary);
        // The ray passes exactly through the vertices at y = 5.
        assert_eq!(locate_point_in_ring(p(-1.0, 5.0), &ring), Location::Exterior);
        assert_eq!(locate_point_in_ring(p(1.0, 5.0), &ring), Location::Interior);
        assert!(is_in_ring(p(0.0, 5.0), &ring));
    }

    #[test]
    fn horizontal_edges() {
        let ring = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
            p(0.0, 0.0),
        ];
        assert_eq!(locate_point_in_ring(p(1.0, 2.0), &ring), Location::Interior);
        assert_eq!(locate_point_in_ring(p(3.0, 2.0), &ring), Location::Boundary);
        assert_eq!(locate_point_in_ring(p(3.0, 3.0), &ring), Location::Exterior);
        assert_eq!(locate_point_in_ring(p(-1.0, 2.0), &ring), Location::Exterior);
    }
}
