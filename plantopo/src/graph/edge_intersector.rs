use super::Edge;
use crate::{
    algorithm::LineIntersector,
    geom::Coord,
    noding::{
        is_trivial_intersection, NodableSegmentString, SegRef, SegmentIntersector, SegmentString,
    },
};

/// The segment intersector used to self-node a [`GeometryGraph`](super::GeometryGraph).
///
/// Non-trivial intersections are recorded on both edges. Along the way it
/// keeps track of whether any intersection was proper, which is how the
/// validity checker spots a self-intersecting polygon, and it can stop at
/// the first one.
#[derive(Clone, Debug)]
pub struct EdgeIntersector {
    li: LineIntersector,
    record_isolated: bool,
    compute_all_segments: bool,
    is_done_when_proper: bool,
    has_intersection: bool,
    has_proper: bool,
    proper_point: Option<Coord>,
    num_tests: usize,
    is_done: bool,
}

impl EdgeIntersector {
    /// If `compute_all_segments` is false, segments of the same edge aren't
    /// tested against each other.
    pub fn new(li: LineIntersector, compute_all_segments: bool, is_done_when_proper: bool) -> Self {
        EdgeIntersector {
            li,
            record_isolated: false,
            compute_all_segments,
            is_done_when_proper,
            has_intersection: false,
            has_proper: false,
            proper_point: None,
            num_tests: 0,
            is_done: false,
        }
    }

    /// Marks edges that intersect something as not isolated.
    pub fn record_isolated(mut self, record: bool) -> Self {
        self.record_isolated = record;
        self
    }

    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }

    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper
    }

    /// The last proper intersection point found.
    pub fn proper_intersection_point(&self) -> Option<Coord> {
        self.proper_point
    }

    pub fn num_tests(&self) -> usize {
        self.num_tests
    }
}

impl SegmentIntersector<Edge> for EdgeIntersector {
    fn process_intersections(&mut self, edges: &mut [Edge], a: SegRef, b: SegRef) {
        if a == b || (!self.compute_all_segments && a.string == b.string) {
            return;
        }
        self.num_tests += 1;
        let [p0, p1] = a.points(edges);
        let [q0, q1] = b.points(edges);
        self.li.compute_intersection(p0, p1, q0, q1);
        if !self.li.has_intersection() {
            return;
        }

        if self.record_isolated {
            edges[a.string].set_isolated(false);
            edges[b.string].set_isolated(false);
        }
        let e = &edges[a.string];
        if is_trivial_intersection(&self.li, a, b, e.size(), e.is_closed()) {
            return;
        }
        self.has_intersection = true;
        edges[a.string].add_intersections(&self.li, a.segment, 0);
        edges[b.string].add_intersections(&self.li, b.segment, 1);
        if self.li.is_proper() {
            self.proper_point = Some(self.li.intersection_point(0));
            self.has_proper = true;
            if self.is_done_when_proper {
                self.is_done = true;
            }
        }
    }

    fn is_done(&self) -> bool {
        self.is_done
    }
}
