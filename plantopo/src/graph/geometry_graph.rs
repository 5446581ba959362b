use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::{Edge, EdgeId, EdgeIntersector, Label, Location, Node};
use crate::{
    algorithm::{is_ccw, LineIntersector},
    geom::{remove_repeated_points, Coord, CoordKey, Geometry, LineString, LinearRing, Polygon},
    noding::McIndexNoder,
};

/// Names one ring of the polygons of a geometry: `ring` 0 is the shell of
/// polygon number `polygon`, and `ring` `k + 1` is its `k`th hole.
///
/// Polygons are numbered in the order they appear, across collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RingRef {
    pub polygon: usize,
    pub ring: usize,
}

impl RingRef {
    pub fn shell(polygon: usize) -> Self {
        RingRef { polygon, ring: 0 }
    }

    pub fn hole(polygon: usize, hole: usize) -> Self {
        RingRef {
            polygon,
            ring: hole + 1,
        }
    }
}

/// The topology graph of a single geometry: its labelled edges, and the
/// nodes where its boundary is.
///
/// Area edges are labelled with the geometry's interior on their right when
/// traversed in the clockwise sense, so a shell has the exterior on its left
/// and a hole has the interior on its left.
#[derive(Clone, Debug)]
pub struct GeometryGraph {
    arg_index: usize,
    rings_only: bool,
    edges: Vec<Edge>,
    nodes: BTreeMap<CoordKey, Node>,
    ring_edges: HashMap<RingRef, EdgeId>,
    invalid_point: Option<Coord>,
}

impl GeometryGraph {
    pub fn new(arg_index: usize, geom: &Geometry) -> Self {
        let mut graph = GeometryGraph {
            arg_index,
            rings_only: matches!(
                geom,
                Geometry::LinearRing(_) | Geometry::Polygon(_) | Geometry::MultiPolygon(_)
            ),
            edges: Vec::new(),
            nodes: BTreeMap::new(),
            ring_edges: HashMap::new(),
            invalid_point: None,
        };
        let mut polygon_count = 0;
        graph.add_geometry(geom, &mut polygon_count);
        graph
    }

    fn add_geometry(&mut self, geom: &Geometry, polygon_count: &mut usize) {
        match geom {
            Geometry::Point(p) => {
                if let Some(c) = p.0 {
                    self.insert_point(c, Location::Interior);
                }
            }
            Geometry::MultiPoint(ps) => {
                for c in ps.iter().filter_map(|p| p.0) {
                    self.insert_point(c, Location::Interior);
                }
            }
            Geometry::LineString(LineString(pts)) | Geometry::LinearRing(LinearRing(pts)) => {
                self.add_line(pts)
            }
            Geometry::MultiLineString(ls) => {
                for l in ls {
                    self.add_line(&l.0);
                }
            }
            Geometry::Polygon(p) => {
                self.add_polygon(p, *polygon_count);
                *polygon_count += 1;
            }
            Geometry::MultiPolygon(ps) => {
                for p in ps {
                    self.add_polygon(p, *polygon_count);
                    *polygon_count += 1;
                }
            }
            Geometry::GeometryCollection(gs) => {
                for g in gs {
                    self.add_geometry(g, polygon_count);
                }
            }
        }
    }

    fn add_polygon(&mut self, poly: &Polygon, index: usize) {
        self.add_polygon_ring(
            &poly.shell,
            RingRef::shell(index),
            Location::Exterior,
            Location::Interior,
        );
        for (i, hole) in poly.holes.iter().enumerate() {
            // Holes are the other way round.
            self.add_polygon_ring(
                hole,
                RingRef::hole(index, i),
                Location::Interior,
                Location::Exterior,
            );
        }
    }

    fn add_polygon_ring(
        &mut self,
        ring: &LinearRing,
        ring_ref: RingRef,
        cw_left: Location,
        cw_right: Location,
    ) {
        if ring.is_empty() {
            return;
        }
        let pts = remove_repeated_points(ring.coords());
        if pts.len() < 4 {
            self.invalid_point = Some(pts[0]);
            return;
        }
        let (left, right) = if is_ccw(&pts) {
            (cw_right, cw_left)
        } else {
            (cw_left, cw_right)
        };
        let start = pts[0];
        let label = Label::area_on_geom(self.arg_index, Location::Boundary, left, right);
        self.ring_edges.insert(ring_ref, EdgeId(self.edges.len()));
        self.edges.push(Edge::new(pts, label));
        self.insert_point(start, Location::Boundary);
    }

    fn add_line(&mut self, pts: &[Coord]) {
        if pts.is_empty() {
            return;
        }
        let pts = remove_repeated_points(pts);
        if pts.len() < 2 {
            self.invalid_point = Some(pts[0]);
            return;
        }
        let (first, last) = (pts[0], pts[pts.len() - 1]);
        self.edges.push(Edge::new(pts, Label::on_geom(self.arg_index, Location::Interior)));
        self.insert_boundary_point(first);
        self.insert_boundary_point(last);
    }

    fn node_mut(&mut self, coord: Coord) -> &mut Node {
        self.nodes.entry(CoordKey::from(coord)).or_insert_with(|| Node::new(coord))
    }

    fn insert_point(&mut self, coord: Coord, loc: Location) {
        let arg = self.arg_index;
        self.node_mut(coord).set_location(arg, loc);
    }

    fn insert_boundary_point(&mut self, coord: Coord) {
        let arg = self.arg_index;
        self.node_mut(coord).add_boundary_endpoint(arg);
    }

    pub fn arg_index(&self) -> usize {
        self.arg_index
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node(&self, coord: &Coord) -> Option<&Node> {
        self.nodes.get(&CoordKey::from(coord))
    }

    pub fn is_boundary_node(&self, coord: &Coord) -> bool {
        self.node(coord)
            .is_some_and(|n| n.label().on_location(self.arg_index) == Location::Boundary)
    }

    /// The edge built from a polygon ring, if the ring produced one.
    pub fn find_edge(&self, ring: RingRef) -> Option<&Edge> {
        self.ring_edges.get(&ring).map(|id| &self.edges[id.0])
    }

    pub fn find_edge_mut(&mut self, ring: RingRef) -> Option<&mut Edge> {
        self.ring_edges.get(&ring).map(|id| &mut self.edges[id.0])
    }

    /// Did some component have too few distinct points to make an edge?
    pub fn has_too_few_points(&self) -> bool {
        self.invalid_point.is_some()
    }

    /// The first point of the last component with too few points.
    pub fn invalid_point(&self) -> Option<Coord> {
        self.invalid_point
    }

    /// Nodes the edges of this graph against each other, recording the
    /// intersections on the edges and adding a node for each one.
    ///
    /// Segments of the same ring are only compared if
    /// `compute_ring_self_nodes` is set; lines are always compared with
    /// themselves. If `is_done_if_proper` is set, noding stops at the first
    /// proper intersection, leaving the edges partly noded.
    pub fn compute_self_nodes(
        &mut self,
        li: LineIntersector,
        compute_ring_self_nodes: bool,
        is_done_if_proper: bool,
    ) -> EdgeIntersector {
        let compute_all = compute_ring_self_nodes || !self.rings_only;
        let mut noder = McIndexNoder::new(EdgeIntersector::new(li, compute_all, is_done_if_proper));
        noder.compute_nodes(&mut self.edges);
        debug!(
            edges = self.edges.len(),
            overlaps = noder.num_overlaps(),
            "computed self nodes"
        );
        let si = noder.into_intersector();
        self.add_self_intersection_nodes();
        si
    }

    fn add_self_intersection_nodes(&mut self) {
        let arg = self.arg_index;
        let mut found: Vec<(Coord, Location)> = Vec::new();
        for e in &self.edges {
            let loc = e.label().on_location(arg);
            found.extend(e.intersections().iter().map(|ei| (ei.coord, loc)));
        }
        for (coord, loc) in found {
            // Existing boundary nodes stay as they are.
            if self.is_boundary_node(&coord) {
                continue;
            }
            if loc == Location::Boundary {
                self.insert_boundary_point(coord);
            } else {
                self.insert_point(coord, loc);
            }
        }
    }

    /// Splits every edge at its intersections.
    pub fn compute_split_edges(&mut self) -> Vec<Edge> {
        self.edges.iter_mut().flat_map(Edge::split_edges).collect()
    }
}
