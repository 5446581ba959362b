use std::collections::BTreeMap;

use crate::{
    algorithm::LineIntersector,
    geom::{Coord, CoordKey},
    graph::{Edge, EdgeEnd, EdgeIntersection, GeometryGraph, Label, Location, Position},
    Result,
};

/// The edge ends at a node that leave it in the same direction.
#[derive(Clone, Debug)]
struct EdgeEndBundle {
    end: EdgeEnd,
    edge: usize,
    labels: Vec<Label>,
}

impl EdgeEndBundle {
    /// The location on one side of the bundle: interior if any of its edges
    /// says so, otherwise exterior if any says so.
    fn side_location(&self, geom: usize, pos: Position) -> Location {
        let mut loc = Location::None;
        for l in self.labels.iter().filter(|l| l.is_area()) {
            match l.location(geom, pos) {
                Location::Interior => return Location::Interior,
                Location::Exterior => loc = Location::Exterior,
                _ => {}
            }
        }
        loc
    }
}

/// Checks that the area edges of a self-noded geometry graph are labelled
/// consistently, which is how self-intersections that don't cross properly
/// are found.
///
/// Going around each node, the locations on either side of the edges must
/// alternate between interior and exterior. Edges that coincide are found
/// as bundles of more than one edge end.
pub struct ConsistentAreaTester<'a> {
    graph: &'a mut GeometryGraph,
    li: LineIntersector,
    bundles: BTreeMap<CoordKey, Vec<EdgeEndBundle>>,
}

impl<'a> ConsistentAreaTester<'a> {
    pub fn new(graph: &'a mut GeometryGraph) -> Self {
        ConsistentAreaTester {
            graph,
            li: LineIntersector::new(),
            bundles: BTreeMap::new(),
        }
    }

    /// Self-nodes the graph and looks for a node where the area labels
    /// don't make sense, returning its coordinate.
    ///
    /// A proper self-intersection is reported straight away, without
    /// looking at the labels.
    pub fn find_inconsistent_node(&mut self) -> Result<Option<Coord>> {
        let si = self.graph.compute_self_nodes(self.li.clone(), true, true);
        if let Some(pt) = si.proper_intersection_point() {
            return Ok(Some(pt));
        }
        self.build_bundles()?;

        let geom = self.graph.arg_index();
        for (key, bundles) in &self.bundles {
            if !area_labels_consistent(bundles, geom) {
                let Some(pt) = bundles.first().map(|b| b.end.coord()) else {
                    continue;
                };
                tracing::trace!(node = ?key, "inconsistent area labels");
                return Ok(Some(pt));
            }
        }
        Ok(None)
    }

    /// After [`find_inconsistent_node`](Self::find_inconsistent_node) came
    /// back empty, finds a point on an edge that another edge duplicates.
    pub fn find_duplicate_ring(&self) -> Option<Coord> {
        self.bundles
            .values()
            .flatten()
            .find(|b| b.labels.len() > 1)
            .map(|b| self.graph.edges()[b.edge].coord(0))
    }

    fn build_bundles(&mut self) -> Result<()> {
        self.bundles.clear();
        for i in 0..self.graph.edges().len() {
            let edge = &mut self.graph.edges_mut()[i];
            edge.add_endpoint_intersections();
            for (end, label) in edge_ends(edge)? {
                let bundles = self.bundles.entry(CoordKey::from(end.coord())).or_default();
                match bundles.binary_search_by(|b| b.end.compare_direction(&end)) {
                    Ok(pos) => bundles[pos].labels.push(label),
                    Err(pos) => bundles.insert(
                        pos,
                        EdgeEndBundle {
                            end,
                            edge: i,
                            labels: vec![label],
                        },
                    ),
                }
            }
        }
        Ok(())
    }
}

/// Going counter-clockwise around a node, the right side of each bundle
/// must match the left side of the one before, and the two sides of a
/// bundle must differ.
fn area_labels_consistent(bundles: &[EdgeEndBundle], geom: usize) -> bool {
    let Some(last) = bundles.last() else {
        return true;
    };
    let mut curr = last.side_location(geom, Position::Left);
    for b in bundles {
        let left = b.side_location(geom, Position::Left);
        let right = b.side_location(geom, Position::Right);
        if left == right || right != curr {
            return false;
        }
        curr = left;
    }
    true
}

/// The edge ends of an edge: two at each intersection (one back along the
/// edge, one forward), except at the ends.
fn edge_ends(edge: &Edge) -> Result<Vec<(EdgeEnd, Label)>> {
    let eis: Vec<EdgeIntersection> = edge.intersections().iter().copied().collect();
    let mut ret = Vec::with_capacity(2 * eis.len());
    for (k, curr) in eis.iter().enumerate() {
        let prev = k.checked_sub(1).map(|j| &eis[j]);
        if let Some(p) = prev_point(edge, curr, prev) {
            ret.push((EdgeEnd::new(curr.coord, p)?, edge.label().flipped()));
        }
        if let Some(p) = next_point(edge, curr, eis.get(k + 1)) {
            ret.push((EdgeEnd::new(curr.coord, p)?, *edge.label()));
        }
    }
    Ok(ret)
}

fn prev_point(
    edge: &Edge,
    curr: &EdgeIntersection,
    prev: Option<&EdgeIntersection>,
) -> Option<Coord> {
    let mut i_prev = curr.segment_index;
    if curr.dist == 0.0 {
        // At the start of the edge there's nothing behind.
        i_prev = i_prev.checked_sub(1)?;
    }
    match prev {
        Some(p) if p.segment_index >= i_prev => Some(p.coord),
        _ => Some(edge.coord(i_prev)),
    }
}

fn next_point(
    edge: &Edge,
    curr: &EdgeIntersection,
    next: Option<&EdgeIntersection>,
) -> Option<Coord> {
    let i_next = curr.segment_index + 1;
    match next {
        Some(n) if n.segment_index == curr.segment_index => Some(n.coord),
        _ if i_next < edge.num_points() => Some(edge.coord(i_next)),
        _ => None,
    }
}
