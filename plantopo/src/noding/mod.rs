//! Noding: splitting a set of segment strings so that they only meet at
//! endpoints.
//!
//! The work is split between a broad phase, which finds pairs of segments
//! that might intersect ([`McIndexNoder`], [`SimpleNoder`],
//! [`McIndexSegmentSetMutualIntersector`]), and a narrow phase, the
//! [`SegmentIntersector`], which decides what to do about each pair.

mod mc_index_noder;
mod mutual_intersector;
mod noded_segment_string;
mod scaled_noder;
mod segment_intersector;
mod segment_node;
mod segment_string;
mod simple_noder;
mod snap_rounder;
mod validator;

pub use mc_index_noder::McIndexNoder;
pub use mutual_intersector::McIndexSegmentSetMutualIntersector;
pub use noded_segment_string::{noded_substrings, NodedSegmentString};
pub use scaled_noder::ScaledNoder;
pub(crate) use segment_intersector::is_trivial_intersection;
pub use segment_intersector::{
    InteriorIntersectionFinder, InteriorIntersectionFinderAdder, IntersectionAdder,
    SegmentIntersector,
};
pub use segment_node::{compare_along_segment, octant, SegmentNode, SegmentNodeList};
pub use segment_string::{NodableSegmentString, SegRef, SegmentString};
pub use simple_noder::SimpleNoder;
pub use snap_rounder::{HotPixel, SimpleSnapRounder};
pub use validator::{FastNodingValidator, NodingValidator};

/// Something that nodes a set of segment strings, returning the pieces.
///
/// Each piece carries the data of the string it came from.
pub trait Noder<D> {
    fn node(&mut self, strings: Vec<NodedSegmentString<D>>) -> Vec<NodedSegmentString<D>>;
}

impl<D, N: Noder<D> + ?Sized> Noder<D> for Box<N> {
    fn node(&mut self, strings: Vec<NodedSegmentString<D>>) -> Vec<NodedSegmentString<D>> {
        (**self).node(strings)
    }
}
