//! Planar topology for 2D vector geometry.
//!
//! The three layers are the planar graph ([`graph`]), the noding engine
//! ([`noding`]) that turns a set of crossing segment strings into strings
//! that only meet at their endpoints, and the validity checker ([`valid`])
//! that decides whether a polygonal geometry is topologically valid.

pub mod algorithm;
pub mod error;
pub mod geom;
pub mod graph;
pub mod index;
pub mod noding;
pub mod valid;

pub use error::{NodingError, Result, TopologyError};
pub use geom::{Coord, Envelope, Geometry, LineString, LinearRing, Point, Polygon, PrecisionModel};
pub use graph::{Label, Location, Position};
pub use valid::{is_valid, IsValidOp, ValidOptions, ValidationError, ValidationErrorKind};

#[cfg(test)]
pub mod perturbation;
