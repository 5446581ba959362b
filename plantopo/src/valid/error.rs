use serde::{Deserialize, Serialize};

use crate::geom::Coord;

/// The ways a geometry can fail to be valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    /// A NaN or infinite ordinate.
    InvalidCoordinate,
    RingNotClosed,
    TooFewPoints,
    SelfIntersection,
    DuplicateRings,
    RingSelfIntersection,
    HoleOutsideShell,
    NestedHoles,
    DisconnectedInterior,
    NestedShells,
}

impl ValidationErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ValidationErrorKind::InvalidCoordinate => "Invalid Coordinate",
            ValidationErrorKind::RingNotClosed => "Ring is not closed",
            ValidationErrorKind::TooFewPoints => "Too few distinct points in geometry component",
            ValidationErrorKind::SelfIntersection => "Self-intersection",
            ValidationErrorKind::DuplicateRings => "Duplicate Rings",
            ValidationErrorKind::RingSelfIntersection => "Ring Self-intersection",
            ValidationErrorKind::HoleOutsideShell => "Hole lies outside shell",
            ValidationErrorKind::NestedHoles => "Holes are nested",
            ValidationErrorKind::DisconnectedInterior => "Interior is disconnected",
            ValidationErrorKind::NestedShells => "Nested shells",
        }
    }
}

/// Why a geometry is invalid, and roughly where.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{} at or near point {coord}", .kind.message())]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub coord: Coord,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, coord: Coord) -> Self {
        ValidationError { kind, coord }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        insta::assert_snapshot!(
            ValidationError::new(ValidationErrorKind::SelfIntersection, Coord::new(5.0, 5.0)),
            @"Self-intersection at or near point (5, 5)"
        );
        insta::assert_snapshot!(
            ValidationError::new(ValidationErrorKind::HoleOutsideShell, Coord::new(20.0, 20.5)),
            @"Hole lies outside shell at or near point (20, 20.5)"
        );
    }

    #[test]
    fn json() {
        let err = ValidationError::new(ValidationErrorKind::NestedHoles, Coord::new(1.0, 2.0));
        let s = serde_json::to_string(&err).unwrap();
        assert_eq!(s, r#"{"kind":"NESTED_HOLES","coord":{"x":1.0,"y":2.0}}"#);
        let back: ValidationError = serde_json::from_str(&s).unwrap();
        assert_eq!(back, err);
    }
}
