use std::ops::ControlFlow;

use crate::{
    algorithm::is_in_ring,
    geom::{Coord, Envelope},
    graph::{GeometryGraph, RingRef},
    index::SweepLineIndex,
};

/// The first of `test` that isn't a node of the ring `search`.
///
/// A point that is a node might only be touching the other ring, so it
/// can't be used to decide which ring is inside which. `None` means every
/// point is a node.
pub(crate) fn find_pt_not_node(
    test: &[Coord],
    search: RingRef,
    graph: &GeometryGraph,
) -> Option<Coord> {
    let Some(edge) = graph.find_edge(search) else {
        return test.first().copied();
    };
    let nodes = edge.intersections();
    test.iter().find(|p| !nodes.is_intersection(p)).copied()
}

#[derive(Clone, Debug)]
struct TestRing<'a> {
    id: RingRef,
    coords: &'a [Coord],
    env: Envelope,
}

/// Looks for a ring lying inside another one, among a set of rings that
/// are known to be properly noded against each other.
pub trait NestedRingTester<'a> {
    fn add(&mut self, id: RingRef, coords: &'a [Coord]);

    /// A point of a ring that lies inside another ring, if there is one.
    fn nested_point(&self) -> Option<Coord>;

    fn is_non_nested(&self) -> bool {
        self.nested_point().is_none()
    }
}

/// Is `inner` inside `search`? If so, returns the witness point.
fn nested_in(inner: &TestRing, search: &TestRing, graph: &GeometryGraph) -> Option<Coord> {
    if inner.id == search.id || !inner.env.intersects(&search.env) {
        return None;
    }
    let pt = find_pt_not_node(inner.coords, search.id, graph)?;
    is_in_ring(pt, search.coords).then_some(pt)
}

/// Tests every pair of rings.
#[derive(Clone, Debug)]
pub struct SimpleNestedRingTester<'a> {
    graph: &'a GeometryGraph,
    rings: Vec<TestRing<'a>>,
}

impl<'a> SimpleNestedRingTester<'a> {
    pub fn new(graph: &'a GeometryGraph) -> Self {
        SimpleNestedRingTester {
            graph,
            rings: Vec::new(),
        }
    }
}

impl<'a> NestedRingTester<'a> for SimpleNestedRingTester<'a> {
    fn add(&mut self, id: RingRef, coords: &'a [Coord]) {
        self.rings.push(TestRing {
            id,
            coords,
            env: Envelope::of_points(coords),
        });
    }

    fn nested_point(&self) -> Option<Coord> {
        self.rings.iter().find_map(|inner| {
            self.rings
                .iter()
                .find_map(|search| nested_in(inner, search, self.graph))
        })
    }
}

/// Only tests rings whose x-extents overlap, found with a sweep.
#[derive(Clone, Debug)]
pub struct SweeplineNestedRingTester<'a> {
    graph: &'a GeometryGraph,
    rings: Vec<TestRing<'a>>,
}

impl<'a> SweeplineNestedRingTester<'a> {
    pub fn new(graph: &'a GeometryGraph) -> Self {
        SweeplineNestedRingTester {
            graph,
            rings: Vec::new(),
        }
    }
}

impl<'a> NestedRingTester<'a> for SweeplineNestedRingTester<'a> {
    fn add(&mut self, id: RingRef, coords: &'a [Coord]) {
        self.rings.push(TestRing {
            id,
            coords,
            env: Envelope::of_points(coords),
        });
    }

    fn nested_point(&self) -> Option<Coord> {
        let mut index = SweepLineIndex::new();
        for (i, r) in self.rings.iter().enumerate() {
            index.add(r.env.min_x, r.env.max_x, i);
        }
        let flow = index.compute_overlaps(|&i, &j| {
            let (a, b) = (&self.rings[i], &self.rings[j]);
            match nested_in(a, b, self.graph).or_else(|| nested_in(b, a, self.graph)) {
                Some(pt) => ControlFlow::Break(pt),
                None => ControlFlow::Continue(()),
            }
        });
        match flow {
            ControlFlow::Break(pt) => Some(pt),
            ControlFlow::Continue(()) => None,
        }
    }
}
