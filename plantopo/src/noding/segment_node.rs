use std::{cmp::Ordering, collections::BTreeSet};

use crate::geom::Coord;

/// The octant of the direction from `p0` to `p1`, numbered 0 to 7
/// counter-clockwise from the positive x axis.
///
/// Octant 0 has `dx >= dy >= 0`. A zero-length segment is in octant 0.
pub fn octant(p0: Coord, p1: Coord) -> u8 {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let x_major = dx.abs() >= dy.abs();
    match (dx >= 0.0, dy >= 0.0) {
        (true, true) => {
            if x_major {
                0
            } else {
                1
            }
        }
        (false, true) => {
            if x_major {
                3
            } else {
                2
            }
        }
        (false, false) => {
            if x_major {
                4
            } else {
                5
            }
        }
        (true, false) => {
            if x_major {
                7
            } else {
                6
            }
        }
    }
}

fn sign(a: f64, b: f64) -> i32 {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => -1,
        Some(Ordering::Greater) => 1,
        _ => 0,
    }
}

fn compare_value(major: i32, minor: i32) -> Ordering {
    major.cmp(&0).then(minor.cmp(&0))
}

/// Orders two points that lie on a segment in the given octant by their
/// position along it.
pub fn compare_along_segment(octant: u8, p0: Coord, p1: Coord) -> Ordering {
    if p0.equals_2d(&p1) {
        return Ordering::Equal;
    }
    let xs = sign(p0.x, p1.x);
    let ys = sign(p0.y, p1.y);
    match octant {
        0 => compare_value(xs, ys),
        1 => compare_value(ys, xs),
        2 => compare_value(ys, -xs),
        3 => compare_value(-xs, ys),
        4 => compare_value(-xs, -ys),
        5 => compare_value(-ys, -xs),
        6 => compare_value(-ys, xs),
        _ => compare_value(xs, -ys),
    }
}

/// A node on a segment string: a point on segment `segment_index`.
#[derive(Clone, Copy, Debug)]
pub struct SegmentNode {
    pub coord: Coord,
    pub segment_index: usize,
    segment_octant: u8,
    is_interior: bool,
}

impl SegmentNode {
    pub(crate) fn new(pts: &[Coord], coord: Coord, segment_index: usize) -> Self {
        let segment_octant = if segment_index + 1 < pts.len() {
            octant(pts[segment_index], pts[segment_index + 1])
        } else {
            0
        };
        SegmentNode {
            coord,
            segment_index,
            segment_octant,
            is_interior: !coord.equals_2d(&pts[segment_index]),
        }
    }

    /// Whether the node lies strictly after the start of its segment.
    pub fn is_interior(&self) -> bool {
        self.is_interior
    }
}

impl Ord for SegmentNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segment_index
            .cmp(&other.segment_index)
            .then_with(|| {
                if self.coord.equals_2d(&other.coord) {
                    Ordering::Equal
                } else if !self.is_interior {
                    Ordering::Less
                } else if !other.is_interior {
                    Ordering::Greater
                } else {
                    compare_along_segment(self.segment_octant, self.coord, other.coord)
                }
            })
    }
}

impl PartialOrd for SegmentNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SegmentNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SegmentNode {}

/// The nodes of one segment string, in order along the string.
#[derive(Clone, Debug, Default)]
pub struct SegmentNodeList {
    nodes: BTreeSet<SegmentNode>,
}

impl SegmentNodeList {
    /// Adds a node, unless there is one at the same place already.
    pub fn add(&mut self, pts: &[Coord], coord: Coord, segment_index: usize) {
        self.nodes.insert(SegmentNode::new(pts, coord, segment_index));
    }

    pub fn iter(&self) -> impl Iterator<Item = &SegmentNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn add_endpoints(&mut self, pts: &[Coord]) {
        let Some(max) = pts.len().checked_sub(1) else {
            return;
        };
        self.add(pts, pts[0], 0);
        self.add(pts, pts[max], max);
    }

    /// Adds a node at every vertex where the string collapses onto itself
    /// (`a - b - a`), and at the vertex between two equal nodes that are one
    /// vertex apart.
    pub(crate) fn add_collapsed_nodes(&mut self, pts: &[Coord]) {
        let mut collapsed: Vec<usize> = (0..pts.len().saturating_sub(2))
            .filter(|&i| pts[i].equals_2d(&pts[i + 2]))
            .map(|i| i + 1)
            .collect();

        let nodes: Vec<&SegmentNode> = self.nodes.iter().collect();
        for w in nodes.windows(2) {
            let (a, b) = (w[0], w[1]);
            if !a.coord.equals_2d(&b.coord) {
                continue;
            }
            let mut between = b.segment_index - a.segment_index;
            if !b.is_interior {
                between = between.saturating_sub(1);
            }
            if between == 1 {
                collapsed.push(a.segment_index + 1);
            }
        }

        for i in collapsed {
            self.add(pts, pts[i], i);
        }
    }

    /// Splits `pts` between each pair of consecutive nodes.
    pub(crate) fn split_points(&self, pts: &[Coord]) -> Vec<Vec<Coord>> {
        let nodes: Vec<&SegmentNode> = self.nodes.iter().collect();
        nodes.windows(2).map(|w| split_between(pts, w[0], w[1])).collect()
    }
}

fn split_between(pts: &[Coord], n0: &SegmentNode, n1: &SegmentNode) -> Vec<Coord> {
    if n0.segment_index == n1.segment_index {
        return vec![n0.coord, n1.coord];
    }
    let last_seg_start = pts[n1.segment_index];
    // A node at a vertex is that vertex; don't repeat it.
    let use_n1 = n1.is_interior || !n1.coord.equals_2d(&last_seg_start);

    let mut ret = Vec::with_capacity(n1.segment_index - n0.segment_index + 2);
    ret.push(n0.coord);
    ret.extend_from_slice(&pts[n0.segment_index + 1..=n1.segment_index]);
    if use_n1 {
        ret.push(n1.coord);
    }
    ret
}
