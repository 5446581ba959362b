use super::{
    noded_substrings, InteriorIntersectionFinderAdder, McIndexNoder, NodedSegmentString, Noder,
    SegmentString,
};
use crate::{
    algorithm::LineIntersector,
    geom::{Coord, Envelope, PrecisionModel},
};

/// The unit square of the snapping grid centred on a grid point.
///
/// The square is half-open: it contains its left and bottom edges but not
/// its top and right ones, so the pixels tile the plane. All the tests
/// happen in grid coordinates, where the square has side 1.
#[derive(Clone, Debug)]
pub struct HotPixel {
    original: Coord,
    scale: f64,
    pt: Coord,
    env: Envelope,
    // Counter-clockwise from the top right.
    corners: [Coord; 4],
}

impl HotPixel {
    pub fn new(pt: Coord, scale: f64) -> Self {
        let scaled = if scale == 1.0 {
            pt
        } else {
            Coord::new((pt.x * scale + 0.5).floor(), (pt.y * scale + 0.5).floor())
        };
        let (min_x, max_x) = (scaled.x - 0.5, scaled.x + 0.5);
        let (min_y, max_y) = (scaled.y - 0.5, scaled.y + 0.5);
        HotPixel {
            original: pt,
            scale,
            pt: scaled,
            env: Envelope::new(min_x, max_x, min_y, max_y),
            corners: [
                Coord::new(max_x, max_y),
                Coord::new(min_x, max_y),
                Coord::new(min_x, min_y),
                Coord::new(max_x, min_y),
            ],
        }
    }

    /// The point this pixel was made for, in input coordinates.
    pub fn coord(&self) -> Coord {
        self.original
    }

    /// Whether the segment `p0 - p1` passes through this pixel.
    pub fn intersects(&self, li: &mut LineIntersector, p0: Coord, p1: Coord) -> bool {
        if self.scale == 1.0 {
            self.intersects_scaled(li, p0, p1)
        } else {
            self.intersects_scaled(li, self.to_grid(p0), self.to_grid(p1))
        }
    }

    fn to_grid(&self, p: Coord) -> Coord {
        Coord::new((p.x * self.scale + 0.5).floor(), (p.y * self.scale + 0.5).floor())
    }

    fn intersects_scaled(&self, li: &mut LineIntersector, p0: Coord, p1: Coord) -> bool {
        if !self.env.intersects(&Envelope::from_coords(p0, p1)) {
            return false;
        }
        let [top_right, top_left, bottom_left, bottom_right] = self.corners;

        li.compute_intersection(p0, p1, top_right, top_left);
        if li.is_proper() {
            return true;
        }
        li.compute_intersection(p0, p1, top_left, bottom_left);
        if li.is_proper() {
            return true;
        }
        let hits_left = li.has_intersection();
        li.compute_intersection(p0, p1, bottom_left, bottom_right);
        if li.is_proper() {
            return true;
        }
        let hits_bottom = li.has_intersection();
        li.compute_intersection(p0, p1, bottom_right, top_right);
        if li.is_proper() {
            return true;
        }

        // Through the bottom left corner, or ending at the centre.
        (hits_left && hits_bottom) || p0.equals_2d(&self.pt) || p1.equals_2d(&self.pt)
    }
}

/// Snap rounding by brute force.
///
/// The input must already lie on the grid of `Fixed { scale }`. Interior
/// intersections are rounded to the grid, and then every segment that
/// passes through the hot pixel of an intersection or of another vertex is
/// noded at its centre. The output is fully noded, but may contain
/// zero-length segments and collapses.
#[derive(Clone, Debug)]
pub struct SimpleSnapRounder {
    li: LineIntersector,
    scale: f64,
}

impl SimpleSnapRounder {
    pub fn new(scale: f64) -> Self {
        SimpleSnapRounder {
            li: LineIntersector::with_precision(PrecisionModel::Fixed { scale }),
            scale,
        }
    }

    fn find_interior_intersections<D>(&self, strings: &mut [NodedSegmentString<D>]) -> Vec<Coord> {
        let mut noder = McIndexNoder::new(InteriorIntersectionFinderAdder::new(self.li.clone()));
        noder.compute_nodes(strings);
        noder.into_intersector().into_interior_intersections()
    }

    fn compute_intersection_snaps<D>(
        &mut self,
        strings: &mut [NodedSegmentString<D>],
        snap_pts: &[Coord],
    ) {
        for pt in snap_pts {
            let pixel = HotPixel::new(*pt, self.scale);
            for s in strings.iter_mut() {
                for i in 0..s.size().saturating_sub(1) {
                    if pixel.intersects(&mut self.li, s.coordinate(i), s.coordinate(i + 1)) {
                        s.add_node(pixel.coord(), i);
                    }
                }
            }
        }
    }

    /// Nodes every segment passing through the pixel of some other vertex,
    /// and the vertex too.
    fn compute_vertex_snaps<D>(&mut self, strings: &mut [NodedSegmentString<D>]) {
        let mut snaps: Vec<(usize, Coord, usize)> = Vec::new();
        for (s0, e0) in strings.iter().enumerate() {
            for (i0, &vertex) in e0.coordinates().iter().enumerate() {
                let pixel = HotPixel::new(vertex, self.scale);
                for (s1, e1) in strings.iter().enumerate() {
                    for i1 in 0..e1.size().saturating_sub(1) {
                        if s0 == s1 && i0 == i1 {
                            continue;
                        }
                        let (a, b) = (e1.coordinate(i1), e1.coordinate(i1 + 1));
                        if pixel.intersects(&mut self.li, a, b) {
                            snaps.push((s1, vertex, i1));
                            snaps.push((s0, vertex, i0));
                        }
                    }
                }
            }
        }
        for (s, pt, i) in snaps {
            strings[s].add_node(pt, i);
        }
    }
}

impl<D: Clone> Noder<D> for SimpleSnapRounder {
    fn node(&mut self, mut strings: Vec<NodedSegmentString<D>>) -> Vec<NodedSegmentString<D>> {
        let snap_pts = self.find_interior_intersections(&mut strings);
        tracing::debug!(intersections = snap_pts.len(), "snap rounding");
        self.compute_intersection_snaps(&mut strings, &snap_pts);
        self.compute_vertex_snaps(&mut strings);
        noded_substrings(&strings)
    }
}
