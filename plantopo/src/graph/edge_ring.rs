use super::{DirectedEdge, DirectedEdgeId, Label, Location, Position};
use crate::{
    algorithm::is_ccw,
    geom::{Coord, Envelope},
};

#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct EdgeRingId(pub usize);

impl std::fmt::Debug for EdgeRingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r_{}", self.0)
    }
}

/// Which links a ring follows, and which ring slot of a directed edge it
/// owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeRingKind {
    /// Follows `next`; may touch itself at nodes.
    Maximal,
    /// Follows `next_min`; never touches itself.
    Minimal,
}

impl EdgeRingKind {
    pub fn next(self, de: &DirectedEdge) -> Option<DirectedEdgeId> {
        match self {
            EdgeRingKind::Maximal => de.next,
            EdgeRingKind::Minimal => de.next_min,
        }
    }

    pub fn ring(self, de: &DirectedEdge) -> Option<EdgeRingId> {
        match self {
            EdgeRingKind::Maximal => de.edge_ring,
            EdgeRingKind::Minimal => de.min_edge_ring,
        }
    }

    pub(crate) fn set_ring(self, de: &mut DirectedEdge, ring: EdgeRingId) {
        match self {
            EdgeRingKind::Maximal => de.edge_ring = Some(ring),
            EdgeRingKind::Minimal => de.min_edge_ring = Some(ring),
        }
    }
}

/// A closed cycle of directed edges.
#[derive(Clone, Debug)]
pub struct EdgeRing {
    kind: EdgeRingKind,
    start: DirectedEdgeId,
    pub(crate) edges: Vec<DirectedEdgeId>,
    pts: Vec<Coord>,
    env: Envelope,
    label: Label,
    is_hole: bool,
    computed: bool,
    pub(crate) shell: Option<EdgeRingId>,
    pub(crate) holes: Vec<EdgeRingId>,
    pub(crate) max_node_degree: Option<usize>,
}

impl EdgeRing {
    pub(crate) fn new(kind: EdgeRingKind, start: DirectedEdgeId) -> Self {
        EdgeRing {
            kind,
            start,
            edges: Vec::new(),
            pts: Vec::new(),
            env: Envelope::null(),
            label: Label::line(Location::None),
            is_hole: false,
            computed: false,
            shell: None,
            holes: Vec::new(),
            max_node_degree: None,
        }
    }

    pub fn kind(&self) -> EdgeRingKind {
        self.kind
    }

    pub fn start(&self) -> DirectedEdgeId {
        self.start
    }

    pub fn edges(&self) -> &[DirectedEdgeId] {
        &self.edges
    }

    pub fn coords(&self) -> &[Coord] {
        &self.pts
    }

    pub fn envelope(&self) -> &Envelope {
        &self.env
    }

    /// The locations of the ring's interior side, as a line label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn is_hole(&self) -> bool {
        self.is_hole
    }

    pub fn is_shell(&self) -> bool {
        self.shell.is_none()
    }

    pub fn shell(&self) -> Option<EdgeRingId> {
        self.shell
    }

    pub fn holes(&self) -> &[EdgeRingId] {
        &self.holes
    }

    /// Takes the location on the right of a directed edge of the ring, for
    /// each operand that doesn't have one yet.
    pub(crate) fn merge_label(&mut self, de_label: &Label) {
        for geom in 0..2 {
            let loc = de_label.location(geom, Position::Right);
            if loc != Location::None && self.label.on_location(geom) == Location::None {
                self.label.set_location(geom, Position::On, loc);
            }
        }
    }

    /// Appends the points of an edge, skipping the first one unless this is
    /// the first edge of the ring (it repeats the previous edge's last point).
    pub(crate) fn add_points(&mut self, edge_pts: &[Coord], forward: bool, first: bool) {
        let skip = usize::from(!first);
        if forward {
            self.pts.extend(edge_pts.iter().skip(skip));
        } else {
            self.pts.extend(edge_pts.iter().rev().skip(skip));
        }
    }

    /// Finishes the ring: computes its envelope and whether it is a hole
    /// (counter-clockwise). Calling it again does nothing.
    pub fn compute_ring(&mut self) {
        if self.computed {
            return;
        }
        self.env = Envelope::of_points(&self.pts);
        self.is_hole = is_ccw(&self.pts);
        self.computed = true;
    }
}
