use super::{NodableSegmentString, SegmentNodeList, SegmentString};
use crate::{algorithm::LineIntersector, geom::Coord};

/// A segment string that collects the nodes found on it, and carries some
/// caller data along to the pieces it is split into.
#[derive(Clone, Debug)]
pub struct NodedSegmentString<D = ()> {
    pts: Vec<Coord>,
    data: D,
    nodes: SegmentNodeList,
}

impl<D> NodedSegmentString<D> {
    pub fn new(pts: Vec<Coord>, data: D) -> Self {
        NodedSegmentString {
            pts,
            data,
            nodes: SegmentNodeList::default(),
        }
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn nodes(&self) -> &SegmentNodeList {
        &self.nodes
    }

    pub fn into_parts(self) -> (Vec<Coord>, D) {
        (self.pts, self.data)
    }

    /// Adds a node at `pt` on segment `segment_index`.
    ///
    /// A node at the end vertex of the segment is moved to the start of the
    /// next one, so that every node has one representation.
    pub fn add_node(&mut self, pt: Coord, segment_index: usize) {
        let mut normalized = segment_index;
        let next = segment_index + 1;
        if next < self.pts.len() && pt.equals_2d(&self.pts[next]) {
            normalized = next;
        }
        self.nodes.add(&self.pts, pt, normalized);
    }
}

impl<D: Clone> NodedSegmentString<D> {
    /// The pieces of this string between consecutive nodes (including its
    /// endpoints and collapse points).
    pub fn split(&self) -> Vec<NodedSegmentString<D>> {
        let mut nodes = self.nodes.clone();
        nodes.add_endpoints(&self.pts);
        nodes.add_collapsed_nodes(&self.pts);
        nodes
            .split_points(&self.pts)
            .into_iter()
            .map(|pts| NodedSegmentString::new(pts, self.data.clone()))
            .collect()
    }
}

/// Splits every string at its nodes.
pub fn noded_substrings<'a, D: Clone + 'a>(
    strings: impl IntoIterator<Item = &'a NodedSegmentString<D>>,
) -> Vec<NodedSegmentString<D>> {
    strings.into_iter().flat_map(NodedSegmentString::split).collect()
}

impl<D> SegmentString for NodedSegmentString<D> {
    fn coordinates(&self) -> &[Coord] {
        &self.pts
    }
}

impl<D> NodableSegmentString for NodedSegmentString<D> {
    fn add_intersection(
        &mut self,
        li: &LineIntersector,
        segment_index: usize,
        _geom_index: usize,
        int_index: usize,
    ) {
        self.add_node(li.intersection_point(int_index), segment_index);
    }
}
