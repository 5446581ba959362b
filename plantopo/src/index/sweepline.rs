use std::ops::ControlFlow;

/// Finds all pairs of overlapping x-intervals with a sweep.
///
/// Closed intervals are used, so intervals that only touch at an end still
/// overlap.
#[derive(Clone, Debug)]
pub struct SweepLineIndex<T> {
    intervals: Vec<(f64, f64, T)>,
}

impl<T> Default for SweepLineIndex<T> {
    fn default() -> Self {
        SweepLineIndex {
            intervals: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    // Inserts sort before deletes at the same x.
    Insert,
    Delete,
}

impl<T> SweepLineIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, min: f64, max: f64, item: T) {
        self.intervals.push((min.min(max), min.max(max), item));
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Calls `action` once for every unordered pair of overlapping intervals,
    /// stopping early if it breaks.
    pub fn compute_overlaps<B>(
        &self,
        mut action: impl FnMut(&T, &T) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        let mut events: Vec<(f64, EventKind, usize)> = Vec::with_capacity(2 * self.intervals.len());
        for (i, (min, max, _)) in self.intervals.iter().enumerate() {
            events.push((*min, EventKind::Insert, i));
            events.push((*max, EventKind::Delete, i));
        }
        events.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut delete_pos = vec![0; self.intervals.len()];
        for (pos, (_, kind, i)) in events.iter().enumerate() {
            if *kind == EventKind::Delete {
                delete_pos[*i] = pos;
            }
        }

        for (pos, (_, kind, i)) in events.iter().enumerate() {
            if *kind != EventKind::Insert {
                continue;
            }
            for (_, other_kind, j) in &events[pos + 1..delete_pos[*i]] {
                if *other_kind == EventKind::Insert {
                    action(&self.intervals[*i].2, &self.intervals[*j].2)?;
                }
            }
        }
        ControlFlow::Continue(())
    }
}
