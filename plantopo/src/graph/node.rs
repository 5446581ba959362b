use super::{DirectedEdgeId, Label, Location, Position};
use crate::geom::Coord;

#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl std::fmt::Debug for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n_{}", self.0)
    }
}

/// A graph node: a coordinate, its label, and the star of directed edges
/// leaving it, sorted counter-clockwise.
#[derive(Clone, Debug)]
pub struct Node {
    coord: Coord,
    label: Label,
    pub(crate) star: Vec<DirectedEdgeId>,
}

impl Node {
    pub fn new(coord: Coord) -> Self {
        Node {
            coord,
            label: Label::default(),
            star: Vec::new(),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// The outgoing directed edges, counter-clockwise from the positive x axis.
    pub fn star(&self) -> &[DirectedEdgeId] {
        &self.star
    }

    pub fn degree(&self) -> usize {
        self.star.len()
    }

    pub fn is_isolated(&self) -> bool {
        self.label.geometry_count() == 1
    }

    /// Fills in this node's unknown operand locations from `other`.
    ///
    /// A known location of `other` overrides this node's own location,
    /// except that a boundary location is never overridden.
    pub fn merge_label(&mut self, other: &Label) {
        for geom in 0..2 {
            let mut loc = self.label.on_location(geom);
            if !other.is_null(geom) && loc != Location::Boundary {
                loc = other.on_location(geom);
            }
            if self.label.on_location(geom) == Location::None {
                self.label.set_location(geom, Position::On, loc);
            }
        }
    }

    pub fn set_location(&mut self, geom: usize, loc: Location) {
        self.label.set_location(geom, Position::On, loc);
    }

    /// Counts one more boundary endpoint at this node, using the mod-2
    /// rule: an odd number of line endpoints makes a boundary point, an even
    /// number makes an interior point.
    pub fn add_boundary_endpoint(&mut self, geom: usize) {
        let loc = match self.label.on_location(geom) {
            Location::Boundary => Location::Interior,
            _ => Location::Boundary,
        };
        self.label.set_location(geom, Position::On, loc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod2_boundary_rule() {
        let mut n = Node::new(Coord::new(0.0, 0.0));
        n.add_boundary_endpoint(0);
        assert_eq!(n.label().on_location(0), Location::Boundary);
        n.add_boundary_endpoint(0);
        assert_eq!(n.label().on_location(0), Location::Interior);
        n.add_boundary_endpoint(0);
        assert_eq!(n.label().on_location(0), Location::Boundary);
        assert!(n.is_isolated());
    }

    #[test]
    fn merge_keeps_known_locations() {
        let mut n = Node::new(Coord::new(0.0, 0.0));
        n.set_location(0, Location::Boundary);
        n.merge_label(&Label::line(Location::Interior));
        assert_eq!(n.label().on_location(0), Location::Boundary);
        assert_eq!(n.label().on_location(1), Location::Interior);
        assert!(!n.is_isolated());
    }
}
