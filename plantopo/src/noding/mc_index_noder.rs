use tracing::debug;

use super::{noded_substrings, NodedSegmentString, Noder, SegRef, SegmentIntersector, SegmentString};
use crate::index::{MonotoneChain, StrTree};

/// Nodes a set of segment strings by indexing their monotone chains.
///
/// Every chain goes into a packed R-tree; every pair of chains with
/// overlapping envelopes is compared once, and every pair of their segments
/// with overlapping envelopes is handed to the [`SegmentIntersector`]. What
/// happens then (noding, or just finding intersections) is up to the
/// intersector.
#[derive(Clone, Debug)]
pub struct McIndexNoder<SI> {
    intersector: SI,
    num_overlaps: usize,
}

impl<SI> McIndexNoder<SI> {
    pub fn new(intersector: SI) -> Self {
        McIndexNoder {
            intersector,
            num_overlaps: 0,
        }
    }

    pub fn intersector(&self) -> &SI {
        &self.intersector
    }

    pub fn into_intersector(self) -> SI {
        self.intersector
    }

    /// The number of chain pairs compared by the last run.
    pub fn num_overlaps(&self) -> usize {
        self.num_overlaps
    }

    /// Runs the intersector over every candidate segment pair of `strings`.
    pub fn compute_nodes<S: SegmentString>(&mut self, strings: &mut [S])
    where
        SI: SegmentIntersector<S>,
    {
        let chains: Vec<(usize, MonotoneChain)> = strings
            .iter()
            .enumerate()
            .flat_map(|(i, s)| {
                s.monotone_chains()
                    .iter()
                    .map(|c| (i, c.clone()))
                    .collect::<Vec<_>>()
            })
            .collect();
        let index = StrTree::new(
            chains
                .iter()
                .enumerate()
                .map(|(id, (_, c))| (*c.envelope(), id))
                .collect(),
        );

        self.num_overlaps = 0;
        for (query_id, (query_string, query_chain)) in chains.iter().enumerate() {
            // Each pair is only compared from its lower id.
            let mut candidates = Vec::new();
            index.query_with(query_chain.envelope(), |&test_id| {
                if test_id > query_id {
                    candidates.push(test_id);
                }
            });
            candidates.sort_unstable();

            for test_id in candidates {
                let (test_string, test_chain) = &chains[test_id];
                let mut pairs = Vec::new();
                query_chain.compute_overlaps(
                    strings[*query_string].coordinates(),
                    test_chain,
                    strings[*test_string].coordinates(),
                    &mut |i, j| pairs.push((i, j)),
                );
                self.num_overlaps += 1;
                for (i, j) in pairs {
                    self.intersector.process_intersections(
                        strings,
                        SegRef::new(*query_string, i),
                        SegRef::new(*test_string, j),
                    );
                }
                if self.intersector.is_done() {
                    debug!(
                        chains = chains.len(),
                        overlaps = self.num_overlaps,
                        "noding stopped early"
                    );
                    return;
                }
            }
        }
        debug!(chains = chains.len(), overlaps = self.num_overlaps, "computed nodes");
    }
}

impl<D: Clone, SI: SegmentIntersector<NodedSegmentString<D>>> Noder<D> for McIndexNoder<SI> {
    fn node(&mut self, mut strings: Vec<NodedSegmentString<D>>) -> Vec<NodedSegmentString<D>> {
        self.compute_nodes(&mut strings);
        noded_substrings(&strings)
    }
}
