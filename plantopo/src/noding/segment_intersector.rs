use super::{NodableSegmentString, SegRef, SegmentString};
use crate::{algorithm::LineIntersector, geom::Coord};

/// The narrow phase of noding: what to do with a pair of segments whose
/// envelopes might overlap.
///
/// The segments are identified by index into `strings`, so implementations
/// can mutate the strings they belong to. `a` and `b` may be segments of the
/// same string, or even the same segment, which implementations skip.
pub trait SegmentIntersector<S> {
    fn process_intersections(&mut self, strings: &mut [S], a: SegRef, b: SegRef);

    /// Whether the intersector has seen all it needs to. The noders stop
    /// early once this returns true.
    fn is_done(&self) -> bool {
        false
    }
}

/// An intersection between two segments of the same string is trivial if it
/// is just the vertex they share: the segments are adjacent, or they are the
/// first and last segments of a closed string.
pub(crate) fn is_trivial_intersection(
    li: &LineIntersector,
    a: SegRef,
    b: SegRef,
    size: usize,
    closed: bool,
) -> bool {
    if a.string != b.string || li.intersection_count() != 1 {
        return false;
    }
    if a.segment.abs_diff(b.segment) == 1 {
        return true;
    }
    if closed {
        let max_seg = size.saturating_sub(2);
        let (lo, hi) = (a.segment.min(b.segment), a.segment.max(b.segment));
        return lo == 0 && hi == max_seg;
    }
    false
}

fn compute<S: SegmentString>(
    li: &mut LineIntersector,
    strings: &[S],
    a: SegRef,
    b: SegRef,
) -> [Coord; 4] {
    let [p0, p1] = a.points(strings);
    let [q0, q1] = b.points(strings);
    li.compute_intersection(p0, p1, q0, q1);
    [p0, p1, q0, q1]
}

/// Adds a node to both strings for every non-trivial intersection.
///
/// This is the intersector that makes a [`McIndexNoder`](super::McIndexNoder)
/// a full noder.
#[derive(Clone, Debug, Default)]
pub struct IntersectionAdder {
    li: LineIntersector,
    has_intersection: bool,
    has_proper: bool,
    has_interior: bool,
    proper_point: Option<Coord>,
    num_tests: usize,
    num_intersections: usize,
    num_interior_intersections: usize,
    num_proper_intersections: usize,
}

impl IntersectionAdder {
    pub fn new(li: LineIntersector) -> Self {
        IntersectionAdder {
            li,
            ..Default::default()
        }
    }

    pub fn line_intersector(&self) -> &LineIntersector {
        &self.li
    }

    /// Whether some non-trivial intersection was found (and noded).
    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }

    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper
    }

    pub fn has_interior_intersection(&self) -> bool {
        self.has_interior
    }

    /// The last proper intersection found.
    pub fn proper_intersection_point(&self) -> Option<Coord> {
        self.proper_point
    }

    pub fn num_tests(&self) -> usize {
        self.num_tests
    }

    pub fn num_intersections(&self) -> usize {
        self.num_intersections
    }

    pub fn num_interior_intersections(&self) -> usize {
        self.num_interior_intersections
    }

    pub fn num_proper_intersections(&self) -> usize {
        self.num_proper_intersections
    }
}

impl<S: NodableSegmentString> SegmentIntersector<S> for IntersectionAdder {
    fn process_intersections(&mut self, strings: &mut [S], a: SegRef, b: SegRef) {
        if a == b {
            return;
        }
        self.num_tests += 1;
        compute(&mut self.li, strings, a, b);
        if !self.li.has_intersection() {
            return;
        }

        self.num_intersections += 1;
        if self.li.is_interior_intersection() {
            self.num_interior_intersections += 1;
            self.has_interior = true;
        }
        let s = &strings[a.string];
        if is_trivial_intersection(&self.li, a, b, s.size(), s.is_closed()) {
            return;
        }
        self.has_intersection = true;
        strings[a.string].add_intersections(&self.li, a.segment, 0);
        strings[b.string].add_intersections(&self.li, b.segment, 1);
        if self.li.is_proper() {
            self.num_proper_intersections += 1;
            self.has_proper = true;
            self.proper_point = Some(self.li.intersection_point(0));
        }
    }
}

/// Finds interior intersections: intersection points that are not an
/// endpoint of both segments.
///
/// By default it stops at the first one, which makes it a fast test for
/// whether a set of strings is correctly noded.
#[derive(Clone, Debug, Default)]
pub struct InteriorIntersectionFinder {
    li: LineIntersector,
    find_all: bool,
    intersection: Option<Coord>,
    segments: Option<[Coord; 4]>,
    intersections: Vec<Coord>,
}

impl InteriorIntersectionFinder {
    pub fn new(li: LineIntersector) -> Self {
        InteriorIntersectionFinder {
            li,
            ..Default::default()
        }
    }

    /// Keep going after the first interior intersection.
    pub fn find_all(mut self, find_all: bool) -> Self {
        self.find_all = find_all;
        self
    }

    pub fn has_intersection(&self) -> bool {
        self.intersection.is_some()
    }

    /// The interior intersection point found (the last one, if finding all).
    pub fn intersection(&self) -> Option<Coord> {
        self.intersection
    }

    /// The two segments of the reported intersection, as `[a0, a1, b0, b1]`.
    pub fn intersection_segments(&self) -> Option<[Coord; 4]> {
        self.segments
    }

    pub fn intersections(&self) -> &[Coord] {
        &self.intersections
    }
}

impl<S: SegmentString> SegmentIntersector<S> for InteriorIntersectionFinder {
    fn process_intersections(&mut self, strings: &mut [S], a: SegRef, b: SegRef) {
        if (!self.find_all && self.has_intersection()) || a == b {
            return;
        }
        let segs = compute(&mut self.li, strings, a, b);
        if self.li.has_intersection() && self.li.is_interior_intersection() {
            let [a0, a1, b0, b1] = segs;
            let is_vertex_of_both = |q: &Coord| {
                (q.equals_2d(&a0) || q.equals_2d(&a1)) && (q.equals_2d(&b0) || q.equals_2d(&b1))
            };
            let pt = self
                .li
                .intersection_points()
                .iter()
                .copied()
                .find(|q| !is_vertex_of_both(q))
                .unwrap_or_else(|| self.li.intersection_point(0));
            self.intersection = Some(pt);
            self.segments = Some(segs);
            self.intersections.push(pt);
        }
    }

    fn is_done(&self) -> bool {
        !self.find_all && self.has_intersection()
    }
}

/// Records the interior intersections and nodes them, ignoring the
/// intersections at segment endpoints.
///
/// Snap rounding uses this to find the points whose hot pixels need
/// snapping to.
#[derive(Clone, Debug, Default)]
pub struct InteriorIntersectionFinderAdder {
    li: LineIntersector,
    interior_intersections: Vec<Coord>,
}

impl InteriorIntersectionFinderAdder {
    pub fn new(li: LineIntersector) -> Self {
        InteriorIntersectionFinderAdder {
            li,
            interior_intersections: Vec::new(),
        }
    }

    pub fn interior_intersections(&self) -> &[Coord] {
        &self.interior_intersections
    }

    pub fn into_interior_intersections(self) -> Vec<Coord> {
        self.interior_intersections
    }
}

impl<S: NodableSegmentString> SegmentIntersector<S> for InteriorIntersectionFinderAdder {
    fn process_intersections(&mut self, strings: &mut [S], a: SegRef, b: SegRef) {
        if a == b {
            return;
        }
        compute(&mut self.li, strings, a, b);
        if self.li.has_intersection() && self.li.is_interior_intersection() {
            self.interior_intersections
                .extend_from_slice(self.li.intersection_points());
            strings[a.string].add_intersections(&self.li, a.segment, 0);
            strings[b.string].add_intersections(&self.li, b.segment, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noding::NodedSegmentString;

    fn p(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    fn strings(lines: &[&[(f64, f64)]]) -> Vec<NodedSegmentString> {
        lines
            .iter()
            .map(|l| NodedSegmentString::new(l.iter().map(|&(x, y)| p(x, y)).collect(), ()))
            .collect()
    }

    #[test]
    fn adder_skips_shared_vertex() {
        let mut ss = strings(&[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]]);
        let mut adder = IntersectionAdder::default();
        adder.process_intersections(&mut ss, SegRef::new(0, 0), SegRef::new(0, 1));
        assert_eq!(adder.num_intersections(), 1);
        assert!(!adder.has_intersection());
        assert!(ss[0].nodes().is_empty());
    }

    #[test]
    fn adder_skips_ring_closing_vertex() {
        let mut ss = strings(&[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]]);
        let mut adder = IntersectionAdder::default();
        adder.process_intersections(&mut ss, SegRef::new(0, 0), SegRef::new(0, 2));
        assert!(!adder.has_intersection());
    }

    #[test]
    fn adder_nodes_both_strings() {
        let mut ss = strings(&[&[(0.0, 0.0), (2.0, 2.0)], &[(0.0, 2.0), (2.0, 0.0)]]);
        let mut adder = IntersectionAdder::default();
        adder.process_intersections(&mut ss, SegRef::new(0, 0), SegRef::new(1, 0));
        assert!(adder.has_proper_intersection());
        assert_eq!(adder.proper_intersection_point(), Some(p(1.0, 1.0)));
        assert_eq!(ss[0].nodes().len(), 1);
        assert_eq!(ss[1].nodes().len(), 1);
    }

    #[test]
    fn finder_stops_at_first() {
        let mut ss = strings(&[
            &[(0.0, 0.0), (2.0, 2.0)],
            &[(0.0, 2.0), (2.0, 0.0)],
            &[(0.0, 1.0), (2.0, 1.0)],
        ]);
        let mut finder = InteriorIntersectionFinder::default();
        assert!(!SegmentIntersector::<NodedSegmentString>::is_done(&finder));
        finder.process_intersections(&mut ss, SegRef::new(0, 0), SegRef::new(1, 0));
        assert!(SegmentIntersector::<NodedSegmentString>::is_done(&finder));
        finder.process_intersections(&mut ss, SegRef::new(0, 0), SegRef::new(2, 0));
        assert_eq!(finder.intersections(), &[p(1.0, 1.0)]);
        assert!(ss.iter().all(|s| s.nodes().is_empty()));
    }

    #[test]
    fn finder_ignores_endpoint_touches() {
        let mut ss = strings(&[&[(0.0, 0.0), (2.0, 0.0)], &[(2.0, 0.0), (2.0, 2.0)]]);
        let mut finder = InteriorIntersectionFinder::default().find_all(true);
        finder.process_intersections(&mut ss, SegRef::new(0, 0), SegRef::new(1, 0));
        assert!(!finder.has_intersection());
    }

    #[test]
    fn finder_adder_records_interior_points() {
        let mut ss = strings(&[&[(0.0, 0.0), (4.0, 0.0)], &[(2.0, 0.0), (2.0, 2.0)]]);
        let mut finder = InteriorIntersectionFinderAdder::default();
        finder.process_intersections(&mut ss, SegRef::new(0, 0), SegRef::new(1, 0));
        assert_eq!(finder.interior_intersections(), &[p(2.0, 0.0)]);
        assert_eq!(ss[0].nodes().len(), 1);
        assert_eq!(ss[1].nodes().len(), 1);
    }
}
