use super::{noded_substrings, NodedSegmentString, Noder, SegRef, SegmentIntersector, SegmentString};
use crate::geom::Envelope;

/// Nodes by testing every pair of segments. Quadratic, but with no index to
/// get wrong, which makes it a useful reference.
#[derive(Clone, Debug)]
pub struct SimpleNoder<SI> {
    intersector: SI,
}

impl<SI> SimpleNoder<SI> {
    pub fn new(intersector: SI) -> Self {
        SimpleNoder { intersector }
    }

    pub fn intersector(&self) -> &SI {
        &self.intersector
    }

    pub fn into_intersector(self) -> SI {
        self.intersector
    }

    pub fn compute_nodes<S: SegmentString>(&mut self, strings: &mut [S])
    where
        SI: SegmentIntersector<S>,
    {
        for s0 in 0..strings.len() {
            for s1 in s0..strings.len() {
                self.intersect_strings(strings, s0, s1);
                if self.intersector.is_done() {
                    return;
                }
            }
        }
    }

    fn intersect_strings<S: SegmentString>(&mut self, strings: &mut [S], s0: usize, s1: usize)
    where
        SI: SegmentIntersector<S>,
    {
        let n0 = strings[s0].size().saturating_sub(1);
        let n1 = strings[s1].size().saturating_sub(1);
        let env0 = Envelope::of_points(strings[s0].coordinates());
        if !env0.intersects(&Envelope::of_points(strings[s1].coordinates())) {
            return;
        }
        for i0 in 0..n0 {
            let first = if s0 == s1 { i0 + 1 } else { 0 };
            for i1 in first..n1 {
                self.intersector
                    .process_intersections(strings, SegRef::new(s0, i0), SegRef::new(s1, i1));
            }
        }
    }
}

impl<D: Clone, SI: SegmentIntersector<NodedSegmentString<D>>> Noder<D> for SimpleNoder<SI> {
    fn node(&mut self, mut strings: Vec<NodedSegmentString<D>>) -> Vec<NodedSegmentString<D>> {
        self.compute_nodes(&mut strings);
        noded_substrings(&strings)
    }
}
