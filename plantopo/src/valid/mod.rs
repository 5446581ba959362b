//! Topological validity of geometries.
//!
//! [`IsValidOp`] runs the checks; the testers it uses are exposed for
//! callers that already have a noded [`GeometryGraph`](crate::graph::GeometryGraph).

mod connected_interior;
mod consistent_area;
mod error;
mod is_valid_op;
mod nested_rings;
mod options;

pub use connected_interior::ConnectedInteriorTester;
pub use consistent_area::ConsistentAreaTester;
pub use error::{ValidationError, ValidationErrorKind};
pub use is_valid_op::{is_valid, IsValidOp};
pub use nested_rings::{NestedRingTester, SimpleNestedRingTester, SweeplineNestedRingTester};
pub use options::{NestedRingTesterKind, ValidOptions};
