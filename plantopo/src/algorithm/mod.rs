//! Geometric predicates and constructions.

mod line_intersector;
mod mc_point_in_ring;
mod orientation;
mod ray_crossing;

pub use line_intersector::{compute_edge_distance, IntersectionKind, LineIntersector};
pub use mc_point_in_ring::McPointInRing;
pub use orientation::{is_ccw, orientation_index, signed_area, Orientation};
pub use ray_crossing::{is_in_ring, locate_point_in_ring, RayCrossingCounter};
