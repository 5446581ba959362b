use super::{Label, Location, Position};

/// Per-operand, per-side depth counters: how many area boundaries have to be
/// crossed to get from the outside to a side of an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Depth {
    // Indexed by operand, then by `Position::index`.
    depth: [[Option<i32>; 3]; 2],
}

/// The depth contribution of a side location.
pub fn depth_at_location(loc: Location) -> Option<i32> {
    match loc {
        Location::Exterior => Some(0),
        Location::Interior => Some(1),
        _ => None,
    }
}

impl Depth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, geom: usize, pos: Position) -> Option<i32> {
        self.depth[geom][pos.index()]
    }

    pub fn set(&mut self, geom: usize, pos: Position, depth: i32) {
        self.depth[geom][pos.index()] = Some(depth);
    }

    /// A side is in the exterior if its depth is zero (or negative).
    pub fn location(&self, geom: usize, pos: Position) -> Location {
        match self.get(geom, pos) {
            Some(d) if d > 0 => Location::Interior,
            _ => Location::Exterior,
        }
    }

    pub fn add(&mut self, geom: usize, pos: Position, loc: Location) {
        if loc == Location::Interior {
            let d = &mut self.depth[geom][pos.index()];
            *d = Some(d.unwrap_or(0) + 1);
        }
    }

    /// Accumulates the side locations of an area label.
    pub fn add_label(&mut self, label: &Label) {
        for geom in 0..2 {
            for pos in [Position::Left, Position::Right] {
                let loc = label.location(geom, pos);
                if let Some(delta) = depth_at_location(loc) {
                    let d = &mut self.depth[geom][pos.index()];
                    *d = Some(d.map_or(delta, |d| d + delta));
                }
            }
        }
    }

    pub fn is_null(&self) -> bool {
        self.depth.iter().flatten().all(Option::is_none)
    }

    pub fn is_null_geom(&self, geom: usize) -> bool {
        self.depth[geom][Position::Left.index()].is_none()
    }

    pub fn is_null_at(&self, geom: usize, pos: Position) -> bool {
        self.get(geom, pos).is_none()
    }

    /// Right depth minus left depth, or zero if either is unknown.
    pub fn delta(&self, geom: usize) -> i32 {
        match (self.get(geom, Position::Right), self.get(geom, Position::Left)) {
            (Some(r), Some(l)) => r - l,
            _ => 0,
        }
    }

    /// Rescales the depths of each operand so that the shallower side is 0
    /// and the deeper side is at most 1.
    pub fn normalize(&mut self) {
        for geom in 0..2 {
            if self.is_null_geom(geom) {
                continue;
            }
            let l = self.get(geom, Position::Left).unwrap_or(0);
            let r = self.get(geom, Position::Right).unwrap_or(0);
            let min_depth = l.min(r).max(0);
            for pos in [Position::Left, Position::Right] {
                let d = self.get(geom, pos).unwrap_or(0);
                self.set(geom, pos, i32::from(d > min_depth));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_and_normalize() {
        let mut depth = Depth::new();
        assert!(depth.is_null());
        let label =
            Label::area_on_geom(0, Location::Boundary, Location::Interior, Location::Exterior);
        depth.add_label(&label);
        depth.add_label(&label);
        assert_eq!(depth.get(0, Position::Left), Some(2));
        assert_eq!(depth.get(0, Position::Right), Some(0));
        assert_eq!(depth.delta(0), -2);
        assert!(depth.is_null_geom(1));

        depth.normalize();
        assert_eq!(depth.get(0, Position::Left), Some(1));
        assert_eq!(depth.get(0, Position::Right), Some(0));
        assert_eq!(depth.location(0, Position::Left), Location::Interior);
        assert_eq!(depth.location(0, Position::Right), Location::Exterior);
    }

    #[test]
    fn cancelling_sides_normalize_to_zero() {
        let mut depth = Depth::new();
        let inside_left =
            Label::area_on_geom(0, Location::Boundary, Location::Interior, Location::Exterior);
        let inside_right =
            Label::area_on_geom(0, Location::Boundary, Location::Exterior, Location::Interior);
        depth.add_label(&inside_left);
        depth.add_label(&inside_right);
        assert_eq!(depth.delta(0), 0);
        depth.normalize();
        assert_eq!(depth.get(0, Position::Left), Some(0));
        assert_eq!(depth.get(0, Position::Right), Some(0));
    }
}
