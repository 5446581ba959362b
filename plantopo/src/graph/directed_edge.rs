use super::{EdgeEnd, EdgeId, EdgeRingId, Label, Location, NodeId, Position};
use crate::{error::TopologyError, graph::Edge, Result};

#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct DirectedEdgeId(pub usize);

impl std::fmt::Debug for DirectedEdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "de_{}", self.0)
    }
}

/// The change in depth when crossing from `from` to `to`: +1 going into
/// the interior, -1 coming out of it.
pub fn depth_factor(from: Location, to: Location) -> i32 {
    match (from, to) {
        (Location::Exterior, Location::Interior) => 1,
        (Location::Interior, Location::Exterior) => -1,
        _ => 0,
    }
}

/// One of the two orientations of an [`Edge`].
///
/// All the links (`sym`, `next`, the owning rings) are arena indices into
/// the [`PlanarGraph`](super::PlanarGraph) that owns this edge.
#[derive(Clone, Debug)]
pub struct DirectedEdge {
    edge: EdgeId,
    forward: bool,
    end: EdgeEnd,
    label: Label,
    node: NodeId,
    sym: DirectedEdgeId,
    pub(crate) next: Option<DirectedEdgeId>,
    pub(crate) next_min: Option<DirectedEdgeId>,
    pub(crate) edge_ring: Option<EdgeRingId>,
    pub(crate) min_edge_ring: Option<EdgeRingId>,
    in_result: bool,
    visited: bool,
    // Indexed by `Position::index`; the `On` slot is unused.
    depth: [Option<i32>; 3],
}

impl DirectedEdge {
    /// The directed edge that runs along `edge` (or against it, if `forward`
    /// is false), starting at the node `node`.
    pub fn new(
        edge_id: EdgeId,
        edge: &Edge,
        forward: bool,
        node: NodeId,
        sym: DirectedEdgeId,
    ) -> Result<Self> {
        let n = edge.num_points();
        if n < 2 {
            return Err(TopologyError::new("cannot direct an edge with fewer than two points"));
        }
        let end = if forward {
            EdgeEnd::new(edge.coord(0), edge.coord(1))?
        } else {
            EdgeEnd::new(edge.coord(n - 1), edge.coord(n - 2))?
        };
        let mut label = *edge.label();
        if !forward {
            label.flip();
        }
        Ok(DirectedEdge {
            edge: edge_id,
            forward,
            end,
            label,
            node,
            sym,
            next: None,
            next_min: None,
            edge_ring: None,
            min_edge_ring: None,
            in_result: false,
            visited: false,
            depth: [None; 3],
        })
    }

    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }

    pub fn end(&self) -> &EdgeEnd {
        &self.end
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn sym(&self) -> DirectedEdgeId {
        self.sym
    }

    pub fn next(&self) -> Option<DirectedEdgeId> {
        self.next
    }

    pub fn next_min(&self) -> Option<DirectedEdgeId> {
        self.next_min
    }

    pub fn edge_ring(&self) -> Option<EdgeRingId> {
        self.edge_ring
    }

    pub fn min_edge_ring(&self) -> Option<EdgeRingId> {
        self.min_edge_ring
    }

    pub fn is_in_result(&self) -> bool {
        self.in_result
    }

    pub fn set_in_result(&mut self, in_result: bool) {
        self.in_result = in_result;
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub fn depth(&self, pos: Position) -> Option<i32> {
        self.depth[pos.index()]
    }

    /// Assigns a depth to one side. Assigning a different depth to a side
    /// that already has one is a topology error.
    pub fn set_depth(&mut self, pos: Position, depth: i32) -> Result<()> {
        let slot = &mut self.depth[pos.index()];
        match *slot {
            Some(d) if d != depth => Err(TopologyError::at(
                "assigned depths do not match",
                self.end.coord(),
            )),
            _ => {
                *slot = Some(depth);
                Ok(())
            }
        }
    }

    /// The depth delta of the underlying edge, oriented along this edge.
    pub fn depth_delta(&self, edge: &Edge) -> i32 {
        if self.forward {
            edge.depth_delta()
        } else {
            -edge.depth_delta()
        }
    }

    /// Sets the depth of side `pos` and derives the other side from the
    /// depth delta of `edge` (which must be this directed edge's edge).
    pub fn set_edge_depths(&mut self, edge: &Edge, pos: Position, depth: i32) -> Result<()> {
        let direction_factor = if pos == Position::Left { -1 } else { 1 };
        let opposite_depth = depth + self.depth_delta(edge) * direction_factor;
        self.set_depth(pos, depth)?;
        self.set_depth(pos.opposite(), opposite_depth)
    }

    /// A line edge that isn't inside either operand's area.
    pub fn is_line_edge(&self) -> bool {
        let is_line = self.label.is_line(0) || self.label.is_line(1);
        let exterior_if_area =
            |g| !self.label.is_area_of(g) || self.label.all_positions_equal(g, Location::Exterior);
        is_line && exterior_if_area(0) && exterior_if_area(1)
    }

    /// An area edge with the interior on both sides, for both operands.
    pub fn is_interior_area_edge(&self) -> bool {
        (0..2).all(|g| {
            self.label.is_area_of(g)
                && self.label.location(g, Position::Left) == Location::Interior
                && self.label.location(g, Position::Right) == Location::Interior
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::geom::Coord;

    fn area_edge() -> Edge {
        let mut e = Edge::new(
            vec![Coord::new(0.0, 0.0), Coord::new(1.0, 0.0), Coord::new(1.0, 1.0)],
            Label::area_on_geom(0, Location::Boundary, Location::Exterior, Location::Interior),
        );
        e.set_depth_delta(depth_factor(Location::Interior, Location::Exterior));
        e
    }

    #[test]
    fn reverse_flips_label_and_direction() {
        let e = area_edge();
        let de = DirectedEdge::new(EdgeId(0), &e, false, NodeId(1), DirectedEdgeId(0)).unwrap();
        assert_eq!(de.end().coord(), Coord::new(1.0, 1.0));
        assert_eq!(de.end().direction_pt(), Coord::new(1.0, 0.0));
        assert_eq!(de.label().location(0, Position::Left), Location::Interior);
        assert_eq!(de.label().location(0, Position::Right), Location::Exterior);
    }

    #[test]
    fn edge_depths_follow_delta() {
        let e = area_edge();
        assert_eq!(e.depth_delta(), -1);
        let mut fwd =
            DirectedEdge::new(EdgeId(0), &e, true, NodeId(0), DirectedEdgeId(1)).unwrap();
        let mut rev =
            DirectedEdge::new(EdgeId(0), &e, false, NodeId(1), DirectedEdgeId(0)).unwrap();
        fwd.set_edge_depths(&e, Position::Right, 1).unwrap();
        assert_eq!(fwd.depth(Position::Left), Some(0));
        assert_eq!(
            fwd.depth(Position::Left).unwrap() - fwd.depth(Position::Right).unwrap(),
            fwd.depth_delta(&e)
        );

        rev.set_edge_depths(&e, Position::Left, 1).unwrap();
        assert_eq!(rev.depth(Position::Right), Some(0));
        assert_eq!(
            rev.depth(Position::Left).unwrap() - rev.depth(Position::Right).unwrap(),
            rev.depth_delta(&e)
        );
    }

    #[test]
    fn conflicting_depths() {
        let e = area_edge();
        let mut de = DirectedEdge::new(EdgeId(0), &e, true, NodeId(0), DirectedEdgeId(1)).unwrap();
        de.set_depth(Position::Left, 2).unwrap();
        de.set_depth(Position::Left, 2).unwrap();
        assert_matches!(de.set_depth(Position::Left, 3), Err(TopologyError { .. }));
    }

    #[test]
    fn depth_factors() {
        assert_eq!(depth_factor(Location::Exterior, Location::Interior), 1);
        assert_eq!(depth_factor(Location::Interior, Location::Exterior), -1);
        assert_eq!(depth_factor(Location::Interior, Location::Interior), 0);
        assert_eq!(depth_factor(Location::Boundary, Location::Exterior), 0);
    }
}
