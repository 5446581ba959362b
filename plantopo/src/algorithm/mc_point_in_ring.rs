use super::RayCrossingCounter;
use crate::{
    geom::{remove_repeated_points, Coord, Envelope},
    graph::Location,
    index::{chains, MonotoneChain, StrTree},
};

/// Point-in-ring location backed by a monotone chain index, for rings that
/// will be queried many times.
#[derive(Clone, Debug)]
pub struct McPointInRing {
    pts: Vec<Coord>,
    env: Envelope,
    index: StrTree<MonotoneChain>,
}

impl McPointInRing {
    pub fn new(ring: &[Coord]) -> Self {
        let pts = remove_repeated_points(ring);
        let env = Envelope::of_points(&pts);
        let index = StrTree::new(chains(&pts).into_iter().map(|c| (*c.envelope(), c)).collect());
        McPointInRing { pts, env, index }
    }

    pub fn locate(&self, p: Coord) -> Location {
        if !self.env.intersects_coord(&p) {
            return Location::Exterior;
        }
        let mut counter = RayCrossingCounter::new(p);
        // Only segments that reach the horizontal ray can matter.
        let ray = Envelope::new(p.x, self.env.max_x, p.y, p.y);
        self.index.query_with(&ray, |mc| {
            mc.select(&self.pts, &ray, &mut |i| {
                counter.count_segment(self.pts[i], self.pts[i + 1]);
            });
        });
        counter.location()
    }

    pub fn is_inside(&self, p: Coord) -> bool {
        self.locate(p) == Location::Interior
    }
}
