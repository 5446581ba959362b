use crate::{
    geom::{Coord, Envelope},
    graph::Quadrant,
};

/// A run of consecutive segments of a point sequence whose directions all lie
/// in one quadrant.
///
/// Because the run is monotone in both x and y, the envelope of any sub-run
/// is spanned by its two end points, and two chains can be intersected by
/// binary subdivision. The chain only stores indices; the points are passed
/// back in by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct MonotoneChain {
    start: usize,
    end: usize,
    env: Envelope,
}

/// Splits `pts` into maximal monotone chains.
///
/// Zero-length segments never end a chain. Sequences with fewer than two
/// points have no chains.
pub fn chains(pts: &[Coord]) -> Vec<MonotoneChain> {
    let mut ret = Vec::new();
    if pts.len() < 2 {
        return ret;
    }
    let mut start = 0;
    while start < pts.len() - 1 {
        let end = find_chain_end(pts, start);
        ret.push(MonotoneChain::new(pts, start, end));
        start = end;
    }
    ret
}

fn find_chain_end(pts: &[Coord], start: usize) -> usize {
    let mut safe_start = start;
    while safe_start < pts.len() - 1 && pts[safe_start].equals_2d(&pts[safe_start + 1]) {
        safe_start += 1;
    }
    if safe_start >= pts.len() - 1 {
        return pts.len() - 1;
    }
    let chain_quad = Quadrant::of_segment(pts[safe_start], pts[safe_start + 1]);
    let mut last = start + 1;
    while last < pts.len() {
        if !pts[last - 1].equals_2d(&pts[last])
            && Quadrant::of_segment(pts[last - 1], pts[last]) != chain_quad
        {
            break;
        }
        last += 1;
    }
    last - 1
}

impl MonotoneChain {
    fn new(pts: &[Coord], start: usize, end: usize) -> Self {
        MonotoneChain {
            start,
            end,
            env: Envelope::from_coords(pts[start], pts[end]),
        }
    }

    /// The index of the first point.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The index of the last point.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn envelope(&self) -> &Envelope {
        &self.env
    }

    /// Calls `action(i, j)` for every pair of segments, the `i`th of `self`
    /// and the `j`th of `other`, whose envelopes might overlap.
    ///
    /// Segment indices are indices of their start points. False positives are
    /// possible, false negatives are not.
    pub fn compute_overlaps(
        &self,
        pts: &[Coord],
        other: &MonotoneChain,
        other_pts: &[Coord],
        action: &mut impl FnMut(usize, usize),
    ) {
        overlaps(
            pts,
            self.start,
            self.end,
            other_pts,
            other.start,
            other.end,
            action,
        );
    }

    /// Calls `action(i)` for every segment whose envelope might intersect
    /// `search_env`.
    pub fn select(&self, pts: &[Coord], search_env: &Envelope, action: &mut impl FnMut(usize)) {
        select(pts, self.start, self.end, search_env, action);
    }
}

fn overlaps(
    pts0: &[Coord],
    start0: usize,
    end0: usize,
    pts1: &[Coord],
    start1: usize,
    end1: usize,
    action: &mut impl FnMut(usize, usize),
) {
    if end0 - start0 == 1 && end1 - start1 == 1 {
        action(start0, start1);
        return;
    }
    let env0 = Envelope::from_coords(pts0[start0], pts0[end0]);
    let env1 = Envelope::from_coords(pts1[start1], pts1[end1]);
    if !env0.intersects(&env1) {
        return;
    }

    let mid0 = (start0 + end0) / 2;
    let mid1 = (start1 + end1) / 2;
    if start0 < mid0 {
        if start1 < mid1 {
            overlaps(pts0, start0, mid0, pts1, start1, mid1, action);
        }
        if mid1 < end1 {
            overlaps(pts0, start0, mid0, pts1, mid1, end1, action);
        }
    }
    if mid0 < end0 {
        if start1 < mid1 {
            overlaps(pts0, mid0, end0, pts1, start1, mid1, action);
        }
        if mid1 < end1 {
            overlaps(pts0, mid0, end0, pts1, mid1, end1, action);
        }
    }
}

fn select(
    pts: &[Coord],
    start: usize,
    end: usize,
    search_env: &Envelope,
    action: &mut impl FnMut(usize),
) {
    if end - start == 1 {
        action(start);
        return;
    }
    if !search_env.intersects(&Envelope::from_coords(pts[start], pts[end])) {
        return;
    }
    let mid = (start + end) / 2;
    if start < mid {
        select(pts, start, mid, search_env, action);
    }
    if mid < end {
        select(pts, mid, end, search_env, action);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn p(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn split_at_quadrant_changes() {
        let pts = [
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(2.0, 3.0),
            p(3.0, 2.0),
            p(3.0, 2.0),
            p(4.0, 0.0),
            p(3.0, -1.0),
        ];
        let cs = chains(&pts);
        let spans: Vec<_> = cs.iter().map(|c| (c.start(), c.end())).collect();
        assert_eq!(spans, vec![(0, 2), (2, 5), (5, 6)]);
        assert_eq!(*cs[0].envelope(), Envelope::new(0.0, 2.0, 0.0, 3.0));
    }

    #[test]
    fn degenerate() {
        assert!(chains(&[]).is_empty());
        assert!(chains(&[p(1.0, 1.0)]).is_empty());
        let cs = chains(&[p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0)]);
        assert_eq!(cs.len(), 1);
        assert_eq!((cs[0].start(), cs[0].end()), (0, 2));
    }

    fn polyline() -> impl Strategy<Value = Vec<Coord>> {
        prop::collection::vec((-20i32..20, -20i32..20), 2..16)
            .prop_map(|v| v.into_iter().map(|(x, y)| p(x as f64, y as f64)).collect())
    }

    proptest! {
        #[test]
        fn chains_cover_every_segment(pts in polyline()) {
            let cs = chains(&pts);
            prop_assert_eq!(cs[0].start(), 0);
            prop_assert_eq!(cs.last().unwrap().end(), pts.len() - 1);
            for w in cs.windows(2) {
                prop_assert_eq!(w[0].end(), w[1].start());
            }
        }

        #[test]
        fn overlaps_contain_all_intersecting_pairs(a in polyline(), b in polyline()) {
            let mut candidates = Vec::new();
            for ca in chains(&a) {
                for cb in chains(&b) {
                    ca.compute_overlaps(&a, &cb, &b, &mut |i, j| candidates.push((i, j)));
                }
            }
            for i in 0..a.len() - 1 {
                for j in 0..b.len() - 1 {
                    if Envelope::segments_intersect(a[i], a[i + 1], b[j], b[j + 1]) {
                        prop_assert!(candidates.contains(&(i, j)));
                    }
                }
            }
        }
    }
}
