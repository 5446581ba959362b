use std::collections::{BTreeMap, VecDeque};

use super::{
    DirectedEdge, DirectedEdgeId, Edge, EdgeId, EdgeRing, EdgeRingId, EdgeRingKind, Location, Node,
    NodeId, Position, Quadrant,
};
use crate::{
    algorithm::{locate_point_in_ring, orientation_index},
    error::TopologyError,
    geom::{Coord, CoordKey},
    Result,
};

/// The arena that owns a planar graph: its edges, their two directed edges
/// each, the nodes at their ends, and any rings built from them.
///
/// Everything refers to everything else by index. Directed edges `2k` and
/// `2k + 1` are the forward and reverse orientations of edge `k`.
#[derive(Clone, Debug, Default)]
pub struct PlanarGraph {
    edges: Vec<Edge>,
    directed_edges: Vec<DirectedEdge>,
    nodes: Vec<Node>,
    rings: Vec<EdgeRing>,
    node_map: BTreeMap<CoordKey, NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LinkState {
    ScanningForIncoming,
    LinkingToOutgoing,
}

impl PlanarGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.0]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    pub fn directed_edge(&self, id: DirectedEdgeId) -> &DirectedEdge {
        &self.directed_edges[id.0]
    }

    pub fn directed_edge_mut(&mut self, id: DirectedEdgeId) -> &mut DirectedEdge {
        &mut self.directed_edges[id.0]
    }

    pub fn directed_edge_ids(&self) -> impl Iterator<Item = DirectedEdgeId> {
        (0..self.directed_edges.len()).map(DirectedEdgeId)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn ring(&self, id: EdgeRingId) -> &EdgeRing {
        &self.rings[id.0]
    }

    pub fn find_node(&self, coord: &Coord) -> Option<NodeId> {
        self.node_map.get(&CoordKey::from(coord)).copied()
    }

    /// The node at `coord`, created if necessary.
    pub fn add_node(&mut self, coord: Coord) -> NodeId {
        *self.node_map.entry(CoordKey::from(coord)).or_insert_with(|| {
            self.nodes.push(Node::new(coord));
            NodeId(self.nodes.len() - 1)
        })
    }

    /// Is there a node at `coord` that lies on the boundary of operand `geom`?
    pub fn is_boundary_node(&self, geom: usize, coord: &Coord) -> bool {
        self.find_node(coord)
            .is_some_and(|n| self.node(n).label().on_location(geom) == Location::Boundary)
    }

    /// Adds an edge and its two directed edges, inserting them into the
    /// stars of their start nodes.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId> {
        let id = EdgeId(self.edges.len());
        let n = edge.num_points();
        if n < 2 {
            return Err(TopologyError::new("cannot add an edge with fewer than two points"));
        }
        let fwd_id = DirectedEdgeId(self.directed_edges.len());
        let rev_id = DirectedEdgeId(fwd_id.0 + 1);
        let start = self.add_node(edge.coord(0));
        let end = self.add_node(edge.coord(n - 1));
        let fwd = DirectedEdge::new(id, &edge, true, start, rev_id)?;
        let rev = DirectedEdge::new(id, &edge, false, end, fwd_id)?;

        self.edges.push(edge);
        self.directed_edges.push(fwd);
        self.directed_edges.push(rev);
        self.insert_into_star(start, fwd_id);
        self.insert_into_star(end, rev_id);
        Ok(id)
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) -> Result<()> {
        for e in edges {
            self.add_edge(e)?;
        }
        Ok(())
    }

    fn insert_into_star(&mut self, node: NodeId, de: DirectedEdgeId) {
        let end = *self.directed_edges[de.0].end();
        let des = &self.directed_edges;
        let star = &mut self.nodes[node.0].star;
        let pos = star.partition_point(|d| des[d.0].end().compare_direction(&end).is_le());
        star.insert(pos, de);
    }

    /// The directed edges at `node` that are in the result or whose sym is.
    fn result_area_edges(&self, node: NodeId) -> Vec<DirectedEdgeId> {
        self.nodes[node.0]
            .star
            .iter()
            .copied()
            .filter(|&d| {
                let de = &self.directed_edges[d.0];
                de.is_in_result() || self.directed_edges[de.sym().0].is_in_result()
            })
            .collect()
    }

    /// Links, around every node, each incoming in-result directed edge to
    /// the next outgoing in-result directed edge counter-clockwise. The
    /// resulting `next` links trace the maximal rings of the result area.
    pub fn link_result_directed_edges(&mut self) -> Result<()> {
        for n in 0..self.nodes.len() {
            self.link_result_directed_edges_at(NodeId(n))?;
        }
        Ok(())
    }

    fn link_result_directed_edges_at(&mut self, node: NodeId) -> Result<()> {
        let list = self.result_area_edges(node);
        let mut first_out = None;
        let mut incoming: Option<DirectedEdgeId> = None;
        let mut state = LinkState::ScanningForIncoming;
        for &next_out in &list {
            let out = &self.directed_edges[next_out.0];
            let next_in = out.sym();
            if !out.label().is_area() {
                continue;
            }
            if first_out.is_none() && out.is_in_result() {
                first_out = Some(next_out);
            }
            match state {
                LinkState::ScanningForIncoming => {
                    if !self.directed_edges[next_in.0].is_in_result() {
                        continue;
                    }
                    incoming = Some(next_in);
                    state = LinkState::LinkingToOutgoing;
                }
                LinkState::LinkingToOutgoing => {
                    if !out.is_in_result() {
                        continue;
                    }
                    if let Some(inc) = incoming {
                        self.directed_edges[inc.0].next = Some(next_out);
                    }
                    state = LinkState::ScanningForIncoming;
                }
            }
        }
        if state == LinkState::LinkingToOutgoing {
            let coord = self.nodes[node.0].coord();
            let first_out = first_out
                .ok_or_else(|| TopologyError::at("no outgoing directed edge found", coord))?;
            if let Some(inc) = incoming {
                self.directed_edges[inc.0].next = Some(first_out);
            }
        }
        Ok(())
    }

    /// Links every incoming directed edge to the next outgoing one
    /// clockwise, so that `next` traces the faces of the whole graph.
    pub fn link_all_directed_edges(&mut self) {
        for n in 0..self.nodes.len() {
            let star = self.nodes[n].star.clone();
            let mut prev_out: Option<DirectedEdgeId> = None;
            let mut first_in: Option<DirectedEdgeId> = None;
            for &next_out in star.iter().rev() {
                let next_in = self.directed_edges[next_out.0].sym();
                if first_in.is_none() {
                    first_in = Some(next_in);
                }
                if let Some(prev) = prev_out {
                    self.directed_edges[next_in.0].next = Some(prev);
                }
                prev_out = Some(next_out);
            }
            if let (Some(first_in), Some(prev)) = (first_in, prev_out) {
                self.directed_edges[first_in.0].next = Some(prev);
            }
        }
    }

    /// Traces the ring of `kind` that starts at `start`.
    ///
    /// Fails if it runs into a directed edge that isn't linked, or one that
    /// this ring has already claimed without getting back to `start`.
    pub fn build_ring(&mut self, start: DirectedEdgeId, kind: EdgeRingKind) -> Result<EdgeRingId> {
        let id = EdgeRingId(self.rings.len());
        let mut ring = EdgeRing::new(kind, start);
        let mut de_id = start;
        let mut first = true;
        loop {
            let de = &mut self.directed_edges[de_id.0];
            let coord = de.end().coord();
            if kind.ring(de) == Some(id) {
                return Err(TopologyError::at(
                    "directed edge visited twice during ring-building",
                    coord,
                ));
            }
            if !de.label().is_area() {
                return Err(TopologyError::at("found a non-area edge while building a ring", coord));
            }
            kind.set_ring(de, id);
            ring.merge_label(de.label());
            ring.add_points(self.edges[de.edge().0].coords(), de.is_forward(), first);
            ring.edges.push(de_id);
            first = false;

            de_id = kind
                .next(de)
                .ok_or_else(|| TopologyError::at("found null directed edge", coord))?;
            if de_id == start {
                break;
            }
        }
        ring.compute_ring();
        self.rings.push(ring);
        Ok(id)
    }

    pub fn build_maximal_ring(&mut self, start: DirectedEdgeId) -> Result<EdgeRingId> {
        self.build_ring(start, EdgeRingKind::Maximal)
    }

    /// Links the `next_min` pointers around `node` for the edges of the
    /// maximal ring `ring`, pairing incoming and outgoing edges clockwise.
    pub fn link_minimal_directed_edges(&mut self, node: NodeId, ring: EdgeRingId) -> Result<()> {
        let list = self.result_area_edges(node);
        let mut first_out = None;
        let mut incoming: Option<DirectedEdgeId> = None;
        let mut state = LinkState::ScanningForIncoming;
        for &next_out in list.iter().rev() {
            let out = &self.directed_edges[next_out.0];
            let next_in = out.sym();
            if first_out.is_none() && out.edge_ring() == Some(ring) {
                first_out = Some(next_out);
            }
            match state {
                LinkState::ScanningForIncoming => {
                    if self.directed_edges[next_in.0].edge_ring() != Some(ring) {
                        continue;
                    }
                    incoming = Some(next_in);
                    state = LinkState::LinkingToOutgoing;
                }
                LinkState::LinkingToOutgoing => {
                    if out.edge_ring() != Some(ring) {
                        continue;
                    }
                    if let Some(inc) = incoming {
                        self.directed_edges[inc.0].next_min = Some(next_out);
                    }
                    state = LinkState::ScanningForIncoming;
                }
            }
        }
        if state == LinkState::LinkingToOutgoing {
            let coord = self.nodes[node.0].coord();
            let first_out = first_out.ok_or_else(|| {
                TopologyError::at("found null for first outgoing directed edge", coord)
            })?;
            if let Some(inc) = incoming {
                self.directed_edges[inc.0].next_min = Some(first_out);
            }
        }
        Ok(())
    }

    /// Splits a maximal ring that touches itself into minimal rings.
    pub fn build_minimal_rings(&mut self, max_ring: EdgeRingId) -> Result<Vec<EdgeRingId>> {
        let max_edges = self.rings[max_ring.0].edges.clone();
        for &de in &max_edges {
            let node = self.directed_edges[de.0].node();
            self.link_minimal_directed_edges(node, max_ring)?;
        }
        let mut ret = Vec::new();
        for &de in &max_edges {
            if self.directed_edges[de.0].min_edge_ring().is_none() {
                ret.push(self.build_ring(de, EdgeRingKind::Minimal)?);
            }
        }
        Ok(ret)
    }

    /// The number of the ring's directed edges leaving a node, maximized
    /// over the ring's nodes and doubled.
    pub fn max_node_degree(&mut self, ring: EdgeRingId) -> usize {
        if let Some(d) = self.rings[ring.0].max_node_degree {
            return d;
        }
        let r = &self.rings[ring.0];
        let kind = r.kind();
        let max = r
            .edges
            .iter()
            .map(|&de| {
                let node = self.directed_edges[de.0].node();
                self.nodes[node.0]
                    .star
                    .iter()
                    .filter(|&&d| kind.ring(&self.directed_edges[d.0]) == Some(ring))
                    .count()
            })
            .max()
            .unwrap_or(0);
        let degree = 2 * max;
        self.rings[ring.0].max_node_degree = Some(degree);
        degree
    }

    /// Registers `ring` as a hole of `shell`.
    pub fn set_shell(&mut self, ring: EdgeRingId, shell: EdgeRingId) {
        self.rings[ring.0].shell = Some(shell);
        self.rings[shell.0].holes.push(ring);
    }

    /// Is `p` inside the ring (or on its boundary), and not inside any of
    /// its registered holes?
    pub fn ring_contains_point(&self, ring: EdgeRingId, p: Coord) -> bool {
        let r = &self.rings[ring.0];
        if !r.envelope().contains_coord(&p) {
            return false;
        }
        if locate_point_in_ring(p, r.coords()) == Location::Exterior {
            return false;
        }
        !r.holes().iter().any(|&h| self.ring_contains_point(h, p))
    }

    pub fn clear_visited(&mut self) {
        for de in &mut self.directed_edges {
            de.set_visited(false);
        }
    }

    fn copy_sym_depths(&mut self, de: DirectedEdgeId) -> Result<()> {
        let d = &self.directed_edges[de.0];
        let sym = d.sym();
        let (left, right) = (d.depth(Position::Left), d.depth(Position::Right));
        let s = &mut self.directed_edges[sym.0];
        if let Some(right) = right {
            s.set_depth(Position::Left, right)?;
        }
        if let Some(left) = left {
            s.set_depth(Position::Right, left)?;
        }
        Ok(())
    }

    /// Assigns depths around a node, going counter-clockwise from `start`,
    /// which must already have its depths.
    fn compute_star_depths(&mut self, node: NodeId, start: DirectedEdgeId) -> Result<()> {
        let star = self.nodes[node.0].star.clone();
        let coord = self.nodes[node.0].coord();
        let pos = star
            .iter()
            .position(|&d| d == start)
            .ok_or_else(|| TopologyError::at("start edge is not in the node's star", coord))?;
        let mut curr = self.directed_edges[start.0]
            .depth(Position::Left)
            .ok_or_else(|| TopologyError::at("start edge has no depth", coord))?;
        for &de in star[pos + 1..].iter().chain(&star[..pos]) {
            let edge = &self.edges[self.directed_edges[de.0].edge().0];
            let d = &mut self.directed_edges[de.0];
            d.set_edge_depths(edge, Position::Right, curr)?;
            curr = d
                .depth(Position::Left)
                .ok_or_else(|| TopologyError::at("depth was not assigned", coord))?;
        }
        let end_depth = self.directed_edges[start.0].depth(Position::Right);
        if end_depth != Some(curr) {
            return Err(TopologyError::at("depth mismatch around node", coord));
        }
        Ok(())
    }

    fn compute_node_depth(&mut self, node: NodeId) -> Result<()> {
        let star = self.nodes[node.0].star.clone();
        let start = star
            .iter()
            .copied()
            .find(|&d| {
                let de = &self.directed_edges[d.0];
                de.is_visited() || self.directed_edges[de.sym().0].is_visited()
            })
            .ok_or_else(|| {
                TopologyError::at(
                    "unable to find edge to compute depths at",
                    self.nodes[node.0].coord(),
                )
            })?;
        self.compute_star_depths(node, start)?;
        for de in star {
            self.directed_edges[de.0].set_visited(true);
            self.copy_sym_depths(de)?;
        }
        Ok(())
    }

    /// Propagates depths through the connected component of `start`, given
    /// the depth on its right side.
    ///
    /// Depths are carried across each edge using its depth delta, and
    /// around each node from one side of an edge to the next. Any
    /// inconsistency is a topology error.
    pub fn compute_depths(&mut self, start: DirectedEdgeId, right_depth: i32) -> Result<()> {
        self.clear_visited();
        let edge = &self.edges[self.directed_edges[start.0].edge().0];
        self.directed_edges[start.0].set_edge_depths(edge, Position::Right, right_depth)?;
        self.copy_sym_depths(start)?;

        let start_node = self.directed_edges[start.0].node();
        let mut visited_nodes = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([start_node]);
        visited_nodes[start_node.0] = true;
        self.directed_edges[start.0].set_visited(true);
        while let Some(n) = queue.pop_front() {
            self.compute_node_depth(n)?;
            for &de in &self.nodes[n.0].star {
                let sym = &self.directed_edges[self.directed_edges[de.0].sym().0];
                if sym.is_visited() {
                    continue;
                }
                let adj = sym.node();
                if !visited_nodes[adj.0] {
                    visited_nodes[adj.0] = true;
                    queue.push_back(adj);
                }
            }
        }
        tracing::trace!(nodes = visited_nodes.iter().filter(|v| **v).count(), "propagated depths");
        Ok(())
    }

    /// An edge that starts at `p0` and leaves it in the direction of `p1`,
    /// in either orientation.
    pub fn find_edge_in_same_direction(&self, p0: Coord, p1: Coord) -> Option<EdgeId> {
        let same_direction = |ep0: Coord, ep1: Coord| {
            p0.equals_2d(&ep0)
                && orientation_index(p0, p1, ep1) == 0
                && Quadrant::of_segment(p0, p1) == Quadrant::of_segment(ep0, ep1)
        };
        self.edges().find_map(|(id, e)| {
            let pts = e.coords();
            let n = pts.len();
            let matches = n >= 2
                && (same_direction(pts[0], pts[1]) || same_direction(pts[n - 1], pts[n - 2]));
            matches.then_some(id)
        })
    }

    /// The first directed edge (in insertion order) of `edge`.
    pub fn find_edge_end(&self, edge: EdgeId) -> Option<DirectedEdgeId> {
        self.directed_edge_ids()
            .find(|&d| self.directed_edges[d.0].edge() == edge)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{algorithm::signed_area, graph::Label};

    fn p(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    fn area_edge(pts: &[(f64, f64)], left: Location, right: Location) -> Edge {
        let mut e = Edge::new(
            pts.iter().map(|&(x, y)| p(x, y)).collect(),
            Label::area_on_geom(0, Location::Boundary, left, right),
        );
        e.set_depth_delta(super::super::depth_factor(right, left));
        e
    }

    /// A clockwise square shell (interior on the right), split at its corners.
    fn square() -> PlanarGraph {
        let mut g = PlanarGraph::new();
        let corners = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)];
        g.add_edges(
            corners
                .windows(2)
                .map(|w| area_edge(w, Location::Exterior, Location::Interior)),
        )
        .unwrap();
        g
    }

    fn mark_interior_right(g: &mut PlanarGraph) {
        for d in g.directed_edge_ids().collect::<Vec<_>>() {
            let in_result =
                g.directed_edge(d).label().location(0, Position::Right) == Location::Interior;
            g.directed_edge_mut(d).set_in_result(in_result);
        }
    }

    #[test]
    fn stars_are_ccw() {
        let g = square();
        assert_eq!(g.node_ids().count(), 4);
        for n in g.node_ids() {
            let star = g.node(n).star();
            assert_eq!(star.len(), 2);
            let a = g.directed_edge(star[0]).end();
            let b = g.directed_edge(star[1]).end();
            assert!(a.compare_direction(b).is_lt());
        }
        let origin = g.find_node(&p(0.0, 0.0)).unwrap();
        let first = g.directed_edge(g.node(origin).star()[0]);
        // Leaving the origin, east comes before north.
        assert_eq!(first.end().direction_pt(), p(10.0, 0.0));
    }

    #[test]
    fn maximal_ring_of_square() {
        let mut g = square();
        mark_interior_right(&mut g);
        g.link_result_directed_edges().unwrap();
        let start = g.directed_edge_ids().find(|&d| g.directed_edge(d).is_in_result()).unwrap();
        let r = g.build_maximal_ring(start).unwrap();
        let ring = g.ring(r);
        assert_eq!(ring.edges().len(), 4);
        assert_eq!(ring.coords().len(), 5);
        assert!(!ring.is_hole());
        assert!(signed_area(ring.coords()) < 0.0);
        assert_eq!(ring.label().on_location(0), Location::Interior);
        assert_eq!(g.max_node_degree(r), 2);
        assert!(g.ring_contains_point(r, p(5.0, 5.0)));
        assert!(!g.ring_contains_point(r, p(15.0, 5.0)));
    }

    #[test]
    fn ring_revisiting_an_edge() {
        let mut g = square();
        mark_interior_right(&mut g);
        g.link_result_directed_edges().unwrap();
        // Short-circuit the last edge back into the middle of the ring.
        g.directed_edge_mut(DirectedEdgeId(6)).next = Some(DirectedEdgeId(2));
        assert_matches!(
            g.build_maximal_ring(DirectedEdgeId(0)),
            Err(TopologyError { message, .. })
                if message == "directed edge visited twice during ring-building"
        );
    }

    #[test]
    fn unlinked_edge() {
        let mut g = square();
        assert_matches!(
            g.build_maximal_ring(DirectedEdgeId(0)),
            Err(TopologyError { message, .. }) if message == "found null directed edge"
        );
    }

    /// A clockwise square shell, split at (0, 5), with a counter-clockwise
    /// triangular hole touching it there.
    fn touching_hole() -> PlanarGraph {
        let mut g = PlanarGraph::new();
        g.add_edges([
            area_edge(&[(0.0, 0.0), (0.0, 5.0)], Location::Exterior, Location::Interior),
            area_edge(
                &[(0.0, 5.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)],
                Location::Exterior,
                Location::Interior,
            ),
            area_edge(
                &[(0.0, 5.0), (5.0, 3.0), (5.0, 7.0), (0.0, 5.0)],
                Location::Exterior,
                Location::Interior,
            ),
        ])
        .unwrap();
        g
    }

    #[test]
    fn minimal_rings_of_touching_hole() {
        let mut g = touching_hole();
        mark_interior_right(&mut g);
        g.link_result_directed_edges().unwrap();
        let r = g.build_maximal_ring(DirectedEdgeId(0)).unwrap();
        assert_eq!(g.ring(r).edges().len(), 3);
        assert_eq!(g.max_node_degree(r), 4);

        let minimal = g.build_minimal_rings(r).unwrap();
        assert_eq!(minimal.len(), 2);
        let shell = g.ring(minimal[0]);
        assert_eq!(shell.kind(), EdgeRingKind::Minimal);
        assert_eq!(shell.coords().len(), 6);
        assert!(!shell.is_hole());
        let hole = g.ring(minimal[1]);
        assert_eq!(hole.coords().len(), 4);
        assert!(hole.is_hole());
        assert_eq!(g.max_node_degree(minimal[0]), 2);
    }

    #[test]
    fn faces_of_square() {
        let mut g = square();
        g.link_all_directed_edges();
        let inner = g.build_maximal_ring(DirectedEdgeId(0)).unwrap();
        let outer = g.build_maximal_ring(DirectedEdgeId(1)).unwrap();
        assert_ne!(g.ring(inner).is_hole(), g.ring(outer).is_hole());
        g.set_shell(outer, inner);
        assert!(!g.ring_contains_point(inner, p(5.0, 5.0)));
        assert!(g.ring(outer).shell().is_some());
    }

    #[test]
    fn depths_of_square() {
        let mut g = square();
        // The forward edge along the bottom runs from (10, 0) to (0, 0), so
        // its right side is inside.
        let bottom = g.find_edge_in_same_direction(p(10.0, 0.0), p(0.0, 0.0)).unwrap();
        let de = g.find_edge_end(bottom).unwrap();
        assert!(g.directed_edge(de).is_forward());
        g.compute_depths(de, 1).unwrap();
        for d in g.directed_edge_ids() {
            let de = g.directed_edge(d);
            let inside = de.label().location(0, Position::Right) == Location::Interior;
            assert_eq!(de.depth(Position::Right), Some(i32::from(inside)));
            assert_eq!(de.depth(Position::Left), Some(i32::from(!inside)));
        }
    }

    #[test]
    fn inconsistent_depths() {
        let mut g = square();
        // A stale depth on another edge conflicts with the propagated ones.
        g.directed_edge_mut(DirectedEdgeId(2)).set_depth(Position::Left, 5).unwrap();
        assert_matches!(g.compute_depths(DirectedEdgeId(0), 0), Err(TopologyError { .. }));
    }

    #[test]
    fn edge_in_same_direction() {
        let g = square();
        assert!(g.find_edge_in_same_direction(p(0.0, 0.0), p(0.0, 3.0)).is_some());
        assert!(g.find_edge_in_same_direction(p(0.0, 0.0), p(3.0, 3.0)).is_none());
        assert!(g.find_edge_in_same_direction(p(5.0, 0.0), p(0.0, 0.0)).is_none());
    }
}
