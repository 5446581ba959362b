use super::{NodedSegmentString, Noder, SegmentString};
use crate::geom::{remove_repeated_points, Coord};

/// Runs a noder on coordinates mapped to an integer grid, and maps the
/// result back.
///
/// Snap-rounding noders want their input on the unit grid; this wrapper
/// lets them node data at any precision. Input points go to
/// `round((v - offset) * scale)`, with repeated points dropped; output
/// points come back as `v / scale + offset`. A scale of 1 leaves
/// coordinates alone.
#[derive(Clone, Debug)]
pub struct ScaledNoder<N> {
    noder: N,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl<N> ScaledNoder<N> {
    pub fn new(noder: N, scale: f64) -> Self {
        Self::with_offset(noder, scale, 0.0, 0.0)
    }

    pub fn with_offset(noder: N, scale: f64, offset_x: f64, offset_y: f64) -> Self {
        ScaledNoder {
            noder,
            scale,
            offset_x,
            offset_y,
        }
    }

    pub fn is_integer_precision(&self) -> bool {
        self.scale == 1.0
    }

    pub fn inner(&self) -> &N {
        &self.noder
    }

    fn scale_coord(&self, c: &Coord) -> Coord {
        Coord::new(
            ((c.x - self.offset_x) * self.scale + 0.5).floor(),
            ((c.y - self.offset_y) * self.scale + 0.5).floor(),
        )
    }

    fn rescale_coord(&self, c: &Coord) -> Coord {
        Coord::new(c.x / self.scale + self.offset_x, c.y / self.scale + self.offset_y)
    }
}

impl<D, N: Noder<D>> Noder<D> for ScaledNoder<N> {
    fn node(&mut self, strings: Vec<NodedSegmentString<D>>) -> Vec<NodedSegmentString<D>> {
        if self.is_integer_precision() {
            return self.noder.node(strings);
        }
        let scaled = strings
            .into_iter()
            .map(|s| {
                let pts: Vec<Coord> = s.coordinates().iter().map(|c| self.scale_coord(c)).collect();
                let (_, data) = s.into_parts();
                NodedSegmentString::new(remove_repeated_points(&pts), data)
            })
            .collect();
        self.noder
            .node(scaled)
            .into_iter()
            .map(|s| {
                let (pts, data) = s.into_parts();
                NodedSegmentString::new(pts.iter().map(|c| self.rescale_coord(c)).collect(), data)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noding::{IntersectionAdder, McIndexNoder};

    fn p(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn rescales_output() {
        let mut noder = ScaledNoder::new(McIndexNoder::new(IntersectionAdder::default()), 10.0);
        let out = noder.node(vec![
            NodedSegmentString::new(vec![p(0.0, 0.0), p(0.4, 0.4)], ()),
            NodedSegmentString::new(vec![p(0.0, 0.4), p(0.4, 0.0)], ()),
        ]);
        assert_eq!(out.len(), 4);
        for s in &out {
            assert!(s.coordinates().contains(&p(0.2, 0.2)));
            for c in s.coordinates() {
                assert!((0.0..=0.4).contains(&c.x) && (0.0..=0.4).contains(&c.y));
            }
        }
    }

    #[test]
    fn drops_points_that_round_together() {
        let inner = McIndexNoder::new(IntersectionAdder::default());
        let mut noder = ScaledNoder::with_offset(inner, 0.5, 100.0, 0.0);
        let out = noder.node(vec![NodedSegmentString::new(
            vec![p(100.0, 0.0), p(100.5, 0.0), p(120.0, 0.0)],
            (),
        )]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].coordinates(), &[p(100.0, 0.0), p(120.0, 0.0)]);
    }

    #[test]
    fn unit_scale_is_passthrough() {
        let mut noder = ScaledNoder::new(McIndexNoder::new(IntersectionAdder::default()), 1.0);
        assert!(noder.is_integer_precision());
        let out = noder.node(vec![NodedSegmentString::new(vec![p(0.25, 0.0), p(0.75, 0.0)], ())]);
        assert_eq!(out[0].coordinates(), &[p(0.25, 0.0), p(0.75, 0.0)]);
    }
}
