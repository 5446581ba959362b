use std::{borrow::Cow, cell::OnceCell, collections::BTreeMap};

use ordered_float::OrderedFloat;

use super::{Depth, Label};
use crate::{
    algorithm::LineIntersector,
    geom::{Coord, Envelope},
    index::{chains, MonotoneChain},
    noding::{NodableSegmentString, SegmentString},
};

/// An index into the edge arena of a [`PlanarGraph`](super::PlanarGraph) or
/// [`GeometryGraph`](super::GeometryGraph).
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

impl std::fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e_{}", self.0)
    }
}

/// A point where an edge meets something, located by the index of the
/// segment it lies on and its distance along that segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeIntersection {
    pub coord: Coord,
    pub segment_index: usize,
    pub dist: f64,
}

impl EdgeIntersection {
    pub fn is_end_point(&self, max_segment_index: usize) -> bool {
        (self.segment_index == 0 && self.dist == 0.0) || self.segment_index == max_segment_index
    }
}

/// The intersections of an edge, ordered along the edge.
#[derive(Clone, Debug, Default)]
pub struct EdgeIntersectionList {
    nodes: BTreeMap<(usize, OrderedFloat<f64>), EdgeIntersection>,
}

impl EdgeIntersectionList {
    /// Records an intersection, unless one is already recorded at the same
    /// place. Returns the recorded one.
    pub fn add(&mut self, coord: Coord, segment_index: usize, dist: f64) -> &EdgeIntersection {
        self.nodes
            .entry((segment_index, OrderedFloat(dist)))
            .or_insert(EdgeIntersection {
                coord,
                segment_index,
                dist,
            })
    }

    /// Records the first and last points of the edge.
    pub fn add_endpoints(&mut self, pts: &[Coord]) {
        let Some(max) = pts.len().checked_sub(1) else {
            return;
        };
        self.add(pts[0], 0, 0.0);
        self.add(pts[max], max, 0.0);
    }

    pub fn is_intersection(&self, p: &Coord) -> bool {
        self.nodes.values().any(|ei| ei.coord.equals_2d(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeIntersection> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Splits `pts` at every pair of consecutive intersections. The caller
    /// must have added the endpoints.
    pub fn split_edges(&self, pts: &[Coord], label: Label) -> Vec<Edge> {
        let list: Vec<&EdgeIntersection> = self.iter().collect();
        list.windows(2)
            .map(|w| Edge::new(split_points(pts, w[0], w[1]), label))
            .collect()
    }
}

fn split_points(pts: &[Coord], ei0: &EdgeIntersection, ei1: &EdgeIntersection) -> Vec<Coord> {
    // If the last intersection is exactly the start of its segment, that
    // vertex is the end of the split edge and doesn't need repeating.
    let last_seg_start = pts[ei1.segment_index];
    let use_int_pt1 = ei1.dist > 0.0 || !ei1.coord.equals_2d(&last_seg_start);

    let mut ret = Vec::with_capacity(ei1.segment_index - ei0.segment_index + 2);
    ret.push(ei0.coord);
    ret.extend_from_slice(&pts[ei0.segment_index + 1..=ei1.segment_index]);
    if use_int_pt1 {
        ret.push(ei1.coord);
    }
    ret
}

/// A labelled polyline: the basic element of the topology graphs.
#[derive(Clone, Debug)]
pub struct Edge {
    pts: Vec<Coord>,
    env: Envelope,
    label: Label,
    intersections: EdgeIntersectionList,
    depth: Depth,
    depth_delta: i32,
    is_isolated: bool,
    chains: OnceCell<Vec<MonotoneChain>>,
}

impl Edge {
    pub fn new(pts: Vec<Coord>, label: Label) -> Self {
        Edge {
            env: Envelope::of_points(&pts),
            pts,
            label,
            intersections: EdgeIntersectionList::default(),
            depth: Depth::default(),
            depth_delta: 0,
            is_isolated: true,
            chains: OnceCell::new(),
        }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.pts
    }

    pub fn coord(&self, i: usize) -> Coord {
        self.pts[i]
    }

    pub fn num_points(&self) -> usize {
        self.pts.len()
    }

    pub fn envelope(&self) -> &Envelope {
        &self.env
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    pub fn depth(&self) -> &Depth {
        &self.depth
    }

    pub fn depth_mut(&mut self) -> &mut Depth {
        &mut self.depth
    }

    /// Right depth minus left depth, for area edges.
    pub fn depth_delta(&self) -> i32 {
        self.depth_delta
    }

    pub fn set_depth_delta(&mut self, delta: i32) {
        self.depth_delta = delta;
    }

    pub fn intersections(&self) -> &EdgeIntersectionList {
        &self.intersections
    }

    pub fn intersections_mut(&mut self) -> &mut EdgeIntersectionList {
        &mut self.intersections
    }

    pub fn is_isolated(&self) -> bool {
        self.is_isolated
    }

    pub fn set_isolated(&mut self, isolated: bool) {
        self.is_isolated = isolated;
    }

    pub fn is_closed(&self) -> bool {
        self.pts.len() > 1 && self.pts[0].equals_2d(&self.pts[self.pts.len() - 1])
    }

    /// An area edge that goes out and straight back: `a - b - a`.
    pub fn is_collapsed(&self) -> bool {
        self.label.is_area() && self.pts.len() == 3 && self.pts[0].equals_2d(&self.pts[2])
    }

    /// The line edge that a collapsed edge represents.
    pub fn collapsed_edge(&self) -> Edge {
        let mut label = self.label;
        label.to_line(0);
        label.to_line(1);
        Edge::new(self.pts[..2].to_vec(), label)
    }

    pub fn is_pointwise_equal(&self, other: &Edge) -> bool {
        self.pts.len() == other.pts.len()
            && self.pts.iter().zip(&other.pts).all(|(p, q)| p.equals_2d(q))
    }

    /// Records intersection `int_index` of `li` as lying on segment
    /// `segment_index` of this edge, which was input line `geom_index` of `li`.
    ///
    /// An intersection at a vertex is attributed to the segment that starts
    /// there, so that every point has a single representation.
    pub fn add_intersection(
        &mut self,
        li: &LineIntersector,
        segment_index: usize,
        geom_index: usize,
        int_index: usize,
    ) {
        let int_pt = li.intersection_point(int_index);
        let mut normalized = segment_index;
        let mut dist = li.edge_distance(geom_index, int_index);
        let next = segment_index + 1;
        if next < self.pts.len() && int_pt.equals_2d(&self.pts[next]) {
            normalized = next;
            dist = 0.0;
        }
        self.intersections.add(int_pt, normalized, dist);
    }

    /// Records the first and last points as intersections.
    pub fn add_endpoint_intersections(&mut self) {
        self.intersections.add_endpoints(&self.pts);
    }

    /// Splits this edge at its intersections (and endpoints).
    pub fn split_edges(&mut self) -> Vec<Edge> {
        self.add_endpoint_intersections();
        self.intersections.split_edges(&self.pts, self.label)
    }
}

impl SegmentString for Edge {
    fn coordinates(&self) -> &[Coord] {
        &self.pts
    }

    fn monotone_chains(&self) -> Cow<'_, [MonotoneChain]> {
        Cow::Borrowed(self.chains.get_or_init(|| chains(&self.pts)))
    }
}

impl NodableSegmentString for Edge {
    fn add_intersection(
        &mut self,
        li: &LineIntersector,
        segment_index: usize,
        geom_index: usize,
        int_index: usize,
    ) {
        Edge::add_intersection(self, li, segment_index, geom_index, int_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Location;

    fn p(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    fn line(pts: &[(f64, f64)]) -> Edge {
        Edge::new(
            pts.iter().map(|&(x, y)| p(x, y)).collect(),
            Label::on_geom(0, Location::Interior),
        )
    }

    #[test]
    fn vertex_hits_move_to_next_segment() {
        let mut e = line(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
        let mut li = LineIntersector::new();
        li.compute_intersection(p(0.0, 0.0), p(2.0, 0.0), p(2.0, -1.0), p(2.0, 1.0));
        e.add_intersections(&li, 0, 0);
        let ei: Vec<_> = e.intersections().iter().copied().collect();
        assert_eq!(ei.len(), 1);
        assert_eq!(ei[0].segment_index, 1);
        assert_eq!(ei[0].dist, 0.0);
    }

    #[test]
    fn split() {
        let mut e = line(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
        e.intersections_mut().add(p(2.0, 0.0), 0, 2.0);
        e.intersections_mut().add(p(4.0, 0.0), 1, 0.0);
        e.intersections_mut().add(p(2.0, 0.0), 0, 2.0);
        let parts = e.split_edges();
        let parts: Vec<Vec<Coord>> = parts.iter().map(|e| e.coords().to_vec()).collect();
        assert_eq!(
            parts,
            vec![
                vec![p(0.0, 0.0), p(2.0, 0.0)],
                vec![p(2.0, 0.0), p(4.0, 0.0)],
                vec![p(4.0, 0.0), p(4.0, 4.0)],
            ]
        );
    }

    #[test]
    fn collapse() {
        let e = Edge::new(
            vec![p(0.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)],
            Label::area_on_geom(0, Location::Boundary, Location::Exterior, Location::Interior),
        );
        assert!(e.is_collapsed());
        assert!(e.is_closed());
        let c = e.collapsed_edge();
        assert_eq!(c.num_points(), 2);
        assert!(c.label().is_line(0));
        assert_eq!(c.label().on_location(0), Location::Boundary);
    }

    #[test]
    fn chains_are_cached() {
        let e = line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let first = e.monotone_chains();
        assert_eq!(first.len(), 2);
        assert!(matches!(first, Cow::Borrowed(_)));
        assert_eq!(e.monotone_chains().as_ptr(), first.as_ptr());
    }
}
