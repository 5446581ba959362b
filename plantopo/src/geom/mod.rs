//! Geometry values: coordinates, envelopes and the simple-features types.

mod coord;
mod coords;
mod envelope;
mod geometry;
mod precision;

pub use coord::Coord;
pub(crate) use coord::CoordKey;
pub use coords::{
    cyclic_pairs, find_different_point, has_repeated_points, is_ring, remove_repeated_points,
};
pub use envelope::Envelope;
pub use geometry::{Geometry, LineString, LinearRing, Point, Polygon};
pub use precision::PrecisionModel;
