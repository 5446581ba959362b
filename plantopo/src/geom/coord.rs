use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A 2D coordinate, with an optional `z` that is carried along but never
/// used by the topology algorithms.
///
/// A missing `z` is `NaN`.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    #[serde(default = "no_z", skip_serializing_if = "no_z_set")]
    pub z: f64,
}

fn no_z() -> f64 {
    f64::NAN
}

fn no_z_set(z: &f64) -> bool {
    z.is_nan()
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Coord { x, y, z: f64::NAN }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Coord { x, y, z }
    }

    pub fn equals_2d(&self, other: &Coord) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Orders by `x`, then by `y`.
    ///
    /// NaN ordinates compare as equal to everything; callers are expected to
    /// have rejected invalid coordinates already.
    pub fn compare_2d(&self, other: &Coord) -> Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }

    pub fn distance(&self, other: &Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Both ordinates are finite.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.equals_2d(other) && (self.z == other.z || (self.z.is_nan() && other.z.is_nan()))
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::new(x, y)
    }
}

impl std::fmt::Debug for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.z.is_nan() {
            write!(f, "({:?}, {:?})", self.x, self.y)
        } else {
            write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A totally ordered 2D key for coordinate maps, ordered like [`Coord::compare_2d`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct CoordKey(OrderedFloat<f64>, OrderedFloat<f64>);

impl From<Coord> for CoordKey {
    fn from(c: Coord) -> Self {
        CoordKey(OrderedFloat(c.x), OrderedFloat(c.y))
    }
}

impl From<&Coord> for CoordKey {
    fn from(c: &Coord) -> Self {
        CoordKey::from(*c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_missing_z() {
        assert_eq!(Coord::new(1.0, 2.0), Coord::new(1.0, 2.0));
        assert_ne!(Coord::new(1.0, 2.0), Coord::new_3d(1.0, 2.0, 0.0));
        assert!(Coord::new(1.0, 2.0).equals_2d(&Coord::new_3d(1.0, 2.0, 0.0)));
    }

    #[test]
    fn ordering() {
        let a = Coord::new(0.0, 5.0);
        let b = Coord::new(1.0, 0.0);
        let c = Coord::new(1.0, 1.0);
        assert_eq!(a.compare_2d(&b), Ordering::Less);
        assert_eq!(c.compare_2d(&b), Ordering::Greater);
        assert!(CoordKey::from(a) < CoordKey::from(b));
        assert!(CoordKey::from(b) < CoordKey::from(c));
    }

    #[test]
    fn validity() {
        assert!(Coord::new(1.0, -1e300).is_valid());
        assert!(!Coord::new(f64::NAN, 0.0).is_valid());
        assert!(!Coord::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn serde_skips_missing_z() {
        let s = serde_json::to_string(&Coord::new(1.0, 2.0)).unwrap();
        assert_eq!(s, r#"{"x":1.0,"y":2.0}"#);
        let c: Coord = serde_json::from_str(r#"{"x":1.0,"y":2.0}"#).unwrap();
        assert!(c.z.is_nan());

        let s = serde_json::to_string(&Coord::new_3d(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(s, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
    }
}
