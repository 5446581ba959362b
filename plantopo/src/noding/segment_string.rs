use std::borrow::Cow;

use crate::{
    algorithm::LineIntersector,
    geom::Coord,
    index::{chains, MonotoneChain},
};

/// A sequence of coordinates, viewed as the segments between consecutive
/// points.
///
/// This is what the noders work on. Segment `i` runs from point `i` to
/// point `i + 1`.
pub trait SegmentString {
    fn coordinates(&self) -> &[Coord];

    fn size(&self) -> usize {
        self.coordinates().len()
    }

    fn coordinate(&self, i: usize) -> Coord {
        self.coordinates()[i]
    }

    fn is_closed(&self) -> bool {
        let pts = self.coordinates();
        pts.len() > 1 && pts[0].equals_2d(&pts[pts.len() - 1])
    }

    /// The monotone chains of this string. Implementations that get noded
    /// repeatedly may want to cache them.
    fn monotone_chains(&self) -> Cow<'_, [MonotoneChain]> {
        Cow::Owned(chains(self.coordinates()))
    }
}

/// A segment string that can record the intersections found on it.
pub trait NodableSegmentString: SegmentString {
    /// Records intersection point `int_index` of `li` as lying on segment
    /// `segment_index` of this string, which was input segment `geom_index`
    /// (0 or 1) of `li`.
    fn add_intersection(
        &mut self,
        li: &LineIntersector,
        segment_index: usize,
        geom_index: usize,
        int_index: usize,
    );

    /// Records all of `li`'s intersection points.
    fn add_intersections(&mut self, li: &LineIntersector, segment_index: usize, geom_index: usize) {
        for i in 0..li.intersection_count() {
            self.add_intersection(li, segment_index, geom_index, i);
        }
    }
}

/// A segment of one string in a slice of segment strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegRef {
    pub string: usize,
    pub segment: usize,
}

impl SegRef {
    pub fn new(string: usize, segment: usize) -> Self {
        SegRef { string, segment }
    }

    /// The two endpoints of this segment.
    pub fn points<S: SegmentString>(&self, strings: &[S]) -> [Coord; 2] {
        let pts = strings[self.string].coordinates();
        [pts[self.segment], pts[self.segment + 1]]
    }
}

impl<T: SegmentString + ?Sized> SegmentString for &T {
    fn coordinates(&self) -> &[Coord] {
        (**self).coordinates()
    }

    fn monotone_chains(&self) -> Cow<'_, [MonotoneChain]> {
        (**self).monotone_chains()
    }
}

impl SegmentString for [Coord] {
    fn coordinates(&self) -> &[Coord] {
        self
    }
}

impl SegmentString for Vec<Coord> {
    fn coordinates(&self) -> &[Coord] {
        self
    }
}
