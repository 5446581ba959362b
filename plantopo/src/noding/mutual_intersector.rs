use tracing::debug;

use super::{SegRef, SegmentIntersector, SegmentString};
use crate::index::{MonotoneChain, StrTree};

/// Finds the intersections between a fixed base set of segment strings and
/// any number of test sets, without testing segments of the same set
/// against each other.
///
/// The base set is indexed once, on construction. For each test set, the
/// test strings are appended to the base strings for the duration of the
/// query, so that intersectors see `SegRef`s into one slice: test segments
/// always come first in each pair, and base segments second.
#[derive(Debug)]
pub struct McIndexSegmentSetMutualIntersector<S> {
    strings: Vec<S>,
    chains: Vec<(usize, MonotoneChain)>,
    index: StrTree<usize>,
}

impl<S: SegmentString> McIndexSegmentSetMutualIntersector<S> {
    pub fn new(base: Vec<S>) -> Self {
        let chains: Vec<(usize, MonotoneChain)> = base
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
        McIndexSegmentSetMutualIntersector {
            strings: base,
            chains,
            index,
        }
    }

    pub fn base_strings(&self) -> &[S] {
        &self.strings
    }

    pub fn into_base_strings(self) -> Vec<S> {
        self.strings
    }

    /// Runs `intersector` over the candidate pairs between `test` and the base
    /// set, and gives the test strings back.
    pub fn process<SI: SegmentIntersector<S>>(
        &mut self,
        test: Vec<S>,
        intersector: &mut SI,
    ) -> Vec<S> {
        let base_len = self.strings.len();
        self.strings.extend(test);

        let mut num_overlaps = 0;
        'outer: for test_string in base_len..self.strings.len() {
            let test_chains = self.strings[test_string].monotone_chains().into_owned();
            for test_chain in &test_chains {
                let mut candidates = Vec::new();
                self.index
                    .query_with(test_chain.envelope(), |&id| candidates.push(id));
                candidates.sort_unstable();

                for id in candidates {
                    let (base_string, base_chain) = &self.chains[id];
                    let mut pairs = Vec::new();
                    test_chain.compute_overlaps(
                        self.strings[test_string].coordinates(),
                        base_chain,
                        self.strings[*base_string].coordinates(),
                        &mut |i, j| pairs.push((i, j)),
                    );
                    num_overlaps += 1;
                    for (i, j) in pairs {
                        intersector.process_intersections(
                            &mut self.strings,
                            SegRef::new(test_string, i),
                            SegRef::new(*base_string, j),
                        );
                    }
                    if intersector.is_done() {
                        break 'outer;
                    }
                }
            }
        }
        debug!(base_chains = self.chains.len(), overlaps = num_overlaps, "mutual intersection");
        self.strings.split_off(base_len)
    }
}
