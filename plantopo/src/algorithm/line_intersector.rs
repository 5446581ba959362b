use malachite::{
    num::{basic::traits::Zero, conversion::traits::RoundingFrom},
    rounding_modes::RoundingMode,
    Rational,
};

use super::orientation_index;
use crate::geom::{Coord, Envelope, PrecisionModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntersectionKind {
    NoIntersection,
    /// The segments meet in a single point.
    PointIntersection,
    /// The segments are collinear and overlap in a segment of positive length.
    CollinearIntersection,
}

/// Computes the intersection of two line segments, robustly.
///
/// All the sidedness decisions are made with exact orientation predicates.
/// When the segments touch at an endpoint, that endpoint is reported
/// exactly. A proper crossing point is computed exactly and rounded to the
/// nearest representable coordinate (and then to the precision model's
/// grid, if it has one).
#[derive(Clone, Debug)]
pub struct LineIntersector {
    precision: PrecisionModel,
    kind: IntersectionKind,
    input: [[Coord; 2]; 2],
    points: [Coord; 2],
    is_proper: bool,
}

impl Default for LineIntersector {
    fn default() -> Self {
        LineIntersector::new()
    }
}

impl LineIntersector {
    pub fn new() -> Self {
        LineIntersector::with_precision(PrecisionModel::Floating)
    }

    pub fn with_precision(precision: PrecisionModel) -> Self {
        let nan = Coord::new(f64::NAN, f64::NAN);
        LineIntersector {
            precision,
            kind: IntersectionKind::NoIntersection,
            input: [[nan; 2]; 2],
            points: [nan; 2],
            is_proper: false,
        }
    }

    pub fn precision(&self) -> PrecisionModel {
        self.precision
    }

    pub fn set_precision(&mut self, precision: PrecisionModel) {
        self.precision = precision;
    }

    pub fn compute_intersection(&mut self, p1: Coord, p2: Coord, q1: Coord, q2: Coord) {
        self.input = [[p1, p2], [q1, q2]];
        self.is_proper = false;
        self.kind = self.compute_intersect(p1, p2, q1, q2);
    }

    fn compute_intersect(
        &mut self,
        p1: Coord,
        p2: Coord,
        q1: Coord,
        q2: Coord,
    ) -> IntersectionKind {
        if !Envelope::segments_intersect(p1, p2, q1, q2) {
            return IntersectionKind::NoIntersection;
        }

        let pq1 = orientation_index(p1, p2, q1);
        let pq2 = orientation_index(p1, p2, q2);
        if (pq1 > 0 && pq2 > 0) || (pq1 < 0 && pq2 < 0) {
            return IntersectionKind::NoIntersection;
        }
        let qp1 = orientation_index(q1, q2, p1);
        let qp2 = orientation_index(q1, q2, p2);
        if (qp1 > 0 && qp2 > 0) || (qp1 < 0 && qp2 < 0) {
            return IntersectionKind::NoIntersection;
        }

        if pq1 == 0 && pq2 == 0 && qp1 == 0 && qp2 == 0 {
            return self.compute_collinear_intersection(p1, p2, q1, q2);
        }

        if pq1 == 0 || pq2 == 0 || qp1 == 0 || qp2 == 0 {
            // An endpoint of one segment lies on the other. Prefer shared
            // endpoints so that the result is exactly an input vertex.
            self.points[0] = if p1.equals_2d(&q1) || p1.equals_2d(&q2) {
                p1
            } else if p2.equals_2d(&q1) || p2.equals_2d(&q2) {
                p2
            } else if pq1 == 0 {
                q1
            } else if pq2 == 0 {
                q2
            } else if qp1 == 0 {
                p1
            } else {
                p2
            };
        } else {
            self.is_proper = true;
            self.points[0] = self.intersection(p1, p2, q1, q2);
        }
        IntersectionKind::PointIntersection
    }

    fn compute_collinear_intersection(
        &mut self,
        p1: Coord,
        p2: Coord,
        q1: Coord,
        q2: Coord,
    ) -> IntersectionKind {
        let q1_in_p = Envelope::segment_intersects_coord(p1, p2, q1);
        let q2_in_p = Envelope::segment_intersects_coord(p1, p2, q2);
        let p1_in_q = Envelope::segment_intersects_coord(q1, q2, p1);
        let p2_in_q = Envelope::segment_intersects_coord(q1, q2, p2);

        let (a, b, single) = if q1_in_p && q2_in_p {
            (q1, q2, false)
        } else if p1_in_q && p2_in_q {
            (p1, p2, false)
        } else if q1_in_p && p1_in_q {
            (q1, p1, q1.equals_2d(&p1) && !q2_in_p && !p2_in_q)
        } else if q1_in_p && p2_in_q {
            (q1, p2, q1.equals_2d(&p2) && !q2_in_p && !p1_in_q)
        } else if q2_in_p && p1_in_q {
            (q2, p1, q2.equals_2d(&p1) && !q1_in_p && !p2_in_q)
        } else if q2_in_p && p2_in_q {
            (q2, p2, q2.equals_2d(&p2) && !q1_in_p && !p1_in_q)
        } else {
            return IntersectionKind::NoIntersection;
        };
        self.points = [a, b];
        if single {
            IntersectionKind::PointIntersection
        } else {
            IntersectionKind::CollinearIntersection
        }
    }

    fn intersection(&self, p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Coord {
        let pt = exact_intersection(p1, p2, q1, q2)
            .or_else(|| float_intersection(p1, p2, q1, q2))
            .unwrap_or_else(|| nearest_endpoint(p1, p2, q1, q2));
        self.precision.make_precise_coord(pt)
    }

    pub fn kind(&self) -> IntersectionKind {
        self.kind
    }

    pub fn has_intersection(&self) -> bool {
        self.kind != IntersectionKind::NoIntersection
    }

    pub fn is_collinear(&self) -> bool {
        self.kind == IntersectionKind::CollinearIntersection
    }

    /// The number of intersection points: 0, 1, or 2 (for collinear overlaps).
    pub fn intersection_count(&self) -> usize {
        match self.kind {
            IntersectionKind::NoIntersection => 0,
            IntersectionKind::PointIntersection => 1,
            IntersectionKind::CollinearIntersection => 2,
        }
    }

    pub fn intersection_point(&self, i: usize) -> Coord {
        self.points[i]
    }

    pub fn intersection_points(&self) -> &[Coord] {
        &self.points[..self.intersection_count()]
    }

    pub fn input_segment(&self, i: usize) -> [Coord; 2] {
        self.input[i]
    }

    /// The segments cross at a single point that is interior to both.
    pub fn is_proper(&self) -> bool {
        self.has_intersection() && self.is_proper
    }

    /// Some intersection point is not an endpoint of either segment.
    pub fn is_interior_intersection(&self) -> bool {
        self.is_interior_intersection_of(0) || self.is_interior_intersection_of(1)
    }

    /// Some intersection point is not an endpoint of input segment `input_index`.
    pub fn is_interior_intersection_of(&self, input_index: usize) -> bool {
        let [a, b] = self.input[input_index];
        self.intersection_points()
            .iter()
            .any(|p| !p.equals_2d(&a) && !p.equals_2d(&b))
    }

    pub fn is_intersection(&self, p: &Coord) -> bool {
        self.intersection_points().iter().any(|q| q.equals_2d(p))
    }

    /// The distance of intersection point `int_index` along input segment
    /// `segment_index`. See [`compute_edge_distance`].
    pub fn edge_distance(&self, segment_index: usize, int_index: usize) -> f64 {
        let [p0, p1] = self.input[segment_index];
        compute_edge_distance(self.points[int_index], p0, p1)
    }
}

/// A cheap stand-in for the distance of `p` along the segment `p0 - p1`.
///
/// It is the coordinate difference along the segment's dominant axis. This
/// is monotone along the segment, which is all that ordering intersections
/// needs. Points other than `p0` always get a nonzero distance, even if
/// rounding put them off the segment.
pub fn compute_edge_distance(p: Coord, p0: Coord, p1: Coord) -> f64 {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    if p.equals_2d(&p0) {
        0.0
    } else if p.equals_2d(&p1) {
        dx.max(dy)
    } else {
        let pdx = (p.x - p0.x).abs();
        let pdy = (p.y - p0.y).abs();
        let dist = if dx > dy { pdx } else { pdy };
        if dist == 0.0 {
            pdx.max(pdy)
        } else {
            dist
        }
    }
}

fn exact_intersection(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Option<Coord> {
    let r = |v: f64| Rational::try_from(v).ok();
    let (x1, y1, x2, y2) = (r(p1.x)?, r(p1.y)?, r(p2.x)?, r(p2.y)?);
    let (x3, y3, x4, y4) = (r(q1.x)?, r(q1.y)?, r(q2.x)?, r(q2.y)?);

    let px = &x2 - &x1;
    let py = &y2 - &y1;
    let qx = &x4 - &x3;
    let qy = &y4 - &y3;
    let den = &px * &qy - &py * &qx;
    if den == Rational::ZERO {
        return None;
    }
    let t = ((&x3 - &x1) * &qy - (&y3 - &y1) * &qx) / den;
    let x = x1 + &t * px;
    let y = y1 + t * py;
    Some(Coord::new(
        f64::rounding_from(&x, RoundingMode::Nearest).0,
        f64::rounding_from(&y, RoundingMode::Nearest).0,
    ))
}

fn float_intersection(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Option<Coord> {
    let px = p1.y - p2.y;
    let py = p2.x - p1.x;
    let pw = p1.x * p2.y - p2.x * p1.y;
    let qx = q1.y - q2.y;
    let qy = q2.x - q1.x;
    let qw = q1.x * q2.y - q2.x * q1.y;
    let w = px * qy - qx * py;
    let x = (py * qw - qy * pw) / w;
    let y = (qx * pw - px * qw) / w;
    (x.is_finite() && y.is_finite()).then(|| Coord::new(x, y))
}

fn nearest_endpoint(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Coord {
    let candidates = [
        (p1, segment_distance(p1, q1, q2)),
        (p2, segment_distance(p2, q1, q2)),
        (q1, segment_distance(q1, p1, p2)),
        (q2, segment_distance(q2, p1, p2)),
    ];
    candidates
        .into_iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(p1, |(p, _)| p)
}

fn segment_distance(p: Coord, a: Coord, b: Coord) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return p.distance(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    p.distance(&Coord::new(a.x + t * dx, a.y + t * dy))
}
