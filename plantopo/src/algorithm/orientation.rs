use crate::geom::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

fn robust_coord(c: Coord) -> robust::Coord<f64> {
    robust::Coord { x: c.x, y: c.y }
}

/// Which side of the directed line `p1 -> p2` the point `q` is on.
///
/// This is exact: it uses adaptive-precision arithmetic, so nearly-collinear
/// inputs get the right answer.
pub fn orientation(p1: Coord, p2: Coord, q: Coord) -> Orientation {
    let det = robust::orient2d(robust_coord(p1), robust_coord(p2), robust_coord(q));
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Like [`orientation`], but as `1` (left / counter-clockwise), `-1` (right /
/// clockwise) or `0` (collinear).
pub fn orientation_index(p1: Coord, p2: Coord, q: Coord) -> i32 {
    match orientation(p1, p2, q) {
        Orientation::Clockwise => -1,
        Orientation::Collinear => 0,
        Orientation::CounterClockwise => 1,
    }
}

/// The signed area of a ring (shoelace formula): positive for
/// counter-clockwise rings.
///
/// The ring may or may not repeat its first point at the end.
pub fn signed_area(ring: &[Coord]) -> f64 {
    let Some(origin) = ring.first() else {
        return 0.0;
    };
    let mut sum = 0.0;
    for (p, q) in crate::geom::cyclic_pairs(ring) {
        sum += (p.x - origin.x) * (q.y - origin.y) - (q.x - origin.x) * (p.y - origin.y);
    }
    sum / 2.0
}

/// Is the ring counter-clockwise? Degenerate (zero-area) rings are not.
pub fn is_ccw(ring: &[Coord]) -> bool {
    signed_area(ring) > 0.0
}
