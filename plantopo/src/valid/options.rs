use serde::{Deserialize, Serialize};

/// Which algorithm looks for nested holes.
///
/// Both give the same answers; the sweepline one only compares rings whose
/// x-extents overlap, and is much faster for polygons with many holes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NestedRingTesterKind {
    Simple,
    #[default]
    Sweepline,
}

/// Options for [`IsValidOp`](super::IsValidOp).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidOptions {
    /// Accept a ring that touches itself at a point, enclosing a hole
    /// (or, for a hole, splitting off an exterior island).
    ///
    /// OGC forbids this; ESRI-style models allow it. The default is the
    /// OGC behaviour.
    pub self_touching_ring_forming_hole_valid: bool,
    pub nested_ring_tester: NestedRingTesterKind,
}

impl ValidOptions {
    pub fn self_touching_ring_forming_hole_valid(mut self, valid: bool) -> Self {
        self.self_touching_ring_forming_hole_valid = valid;
        self
    }

    pub fn nested_ring_tester(mut self, kind: NestedRingTesterKind) -> Self {
        self.nested_ring_tester = kind;
        self
    }
}
