//! The labelled planar graph: edges, directed edges, nodes and rings.
//!
//! [`GeometryGraph`] is the graph of a single input geometry, used for
//! self-noding. [`PlanarGraph`] is the fully linked arena that rings are
//! assembled in.

mod depth;
mod directed_edge;
mod edge;
mod edge_end;
mod edge_intersector;
mod edge_ring;
mod geometry_graph;
mod label;
mod node;
mod planar_graph;
mod quadrant;

pub use depth::{depth_at_location, Depth};
pub use directed_edge::{depth_factor, DirectedEdge, DirectedEdgeId};
pub use edge::{Edge, EdgeId, EdgeIntersection, EdgeIntersectionList};
pub use edge_end::EdgeEnd;
pub use edge_intersector::EdgeIntersector;
pub use edge_ring::{EdgeRing, EdgeRingId, EdgeRingKind};
pub use geometry_graph::{GeometryGraph, RingRef};
pub use label::{Label, Location, Position, TopologyLocation};
pub use node::{Node, NodeId};
pub use planar_graph::PlanarGraph;
pub use quadrant::Quadrant;
