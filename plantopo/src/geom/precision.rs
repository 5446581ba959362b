use serde::{Deserialize, Serialize};

use super::Coord;

/// How computed coordinates are rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum PrecisionModel {
    /// Full double precision; nothing is rounded.
    #[default]
    Floating,
    /// A grid of `1 / scale` cells. Values are rounded to the nearest grid
    /// line, with ties going towards positive infinity.
    Fixed { scale: f64 },
}

impl PrecisionModel {
    pub fn is_floating(&self) -> bool {
        matches!(self, PrecisionModel::Floating)
    }

    pub fn scale(&self) -> Option<f64> {
        match self {
            PrecisionModel::Floating => None,
            PrecisionModel::Fixed { scale } => Some(*scale),
        }
    }

    pub fn make_precise(&self, v: f64) -> f64 {
        match self {
            PrecisionModel::Floating => v,
            PrecisionModel::Fixed { scale } => (v * scale + 0.5).floor() / scale,
        }
    }

    pub fn make_precise_coord(&self, c: Coord) -> Coord {
        Coord {
            x: self.make_precise(c.x),
            y: self.make_precise(c.y),
            z: c.z,
        }
    }
}
