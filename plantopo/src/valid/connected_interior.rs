use tracing::debug;

use crate::{
    error::TopologyError,
    geom::{find_different_point, Coord, Polygon},
    graph::{DirectedEdgeId, EdgeRingId, GeometryGraph, Location, PlanarGraph, Position},
    Result,
};

/// Checks that the interior of a polygonal geometry is connected.
///
/// Holes that touch each other and the shell can cut the interior in two
/// without any edge crossing. To catch that, the split edges go into a
/// fresh planar graph and the interior-bounding rings are traced. Walking
/// from each shell then has to reach every ring with the interior on its
/// right that isn't a hole; any ring left over bounds a separate piece.
///
/// The geometry graph must already be self-noded.
pub struct ConnectedInteriorTester<'a> {
    geom_graph: &'a mut GeometryGraph,
}

impl<'a> ConnectedInteriorTester<'a> {
    pub fn new(geom_graph: &'a mut GeometryGraph) -> Self {
        ConnectedInteriorTester { geom_graph }
    }

    /// A point on the boundary of a disconnected piece of the interior of
    /// `polygons`, if there is one.
    pub fn find_disconnected_point(&mut self, polygons: &[&Polygon]) -> Result<Option<Coord>> {
        let arg = self.geom_graph.arg_index();
        let split = self.geom_graph.compute_split_edges();
        let num_split = split.len();

        let mut graph = PlanarGraph::new();
        graph.add_edges(split)?;
        let ids: Vec<DirectedEdgeId> = graph.directed_edge_ids().collect();
        for &de in &ids {
            let d = graph.directed_edge_mut(de);
            if d.label().location(arg, Position::Right) == Location::Interior {
                d.set_in_result(true);
            }
        }
        graph.link_result_directed_edges()?;
        let rings = build_edge_rings(&mut graph, &ids)?;
        debug!(split_edges = num_split, rings = rings.len(), "built interior rings");

        for poly in polygons {
            visit_shell_interior(&mut graph, poly.shell.coords(), arg)?;
        }
        Ok(unvisited_shell_edge(&graph, &rings, arg))
    }
}

/// The rings traced by the in-result directed edges. A maximal ring that
/// touches itself is broken into minimal rings.
fn build_edge_rings(graph: &mut PlanarGraph, ids: &[DirectedEdgeId]) -> Result<Vec<EdgeRingId>> {
    let mut rings = Vec::new();
    for &de in ids {
        let d = graph.directed_edge(de);
        if !d.is_in_result() || d.edge_ring().is_some() {
            continue;
        }
        let max_ring = graph.build_maximal_ring(de)?;
        if graph.max_node_degree(max_ring) > 2 {
            rings.extend(graph.build_minimal_rings(max_ring)?);
        } else {
            rings.push(max_ring);
        }
    }
    Ok(rings)
}

/// Marks the directed edges of the ring just inside `shell` as visited.
fn visit_shell_interior(graph: &mut PlanarGraph, shell: &[Coord], arg: usize) -> Result<()> {
    let Some(&pt0) = shell.first() else {
        return Ok(());
    };
    let Some(pt1) = find_different_point(shell, &pt0) else {
        return Ok(());
    };
    let edge = graph
        .find_edge_in_same_direction(pt0, pt1)
        .ok_or_else(|| TopologyError::at("unable to find the edge of a shell", pt0))?;
    let de = graph
        .find_edge_end(edge)
        .ok_or_else(|| TopologyError::at("unable to find the edge of a shell", pt0))?;
    let sym = graph.directed_edge(de).sym();
    let interior_on_right = |d: DirectedEdgeId| {
        graph.directed_edge(d).label().location(arg, Position::Right) == Location::Interior
    };
    let start = if interior_on_right(de) {
        de
    } else if interior_on_right(sym) {
        sym
    } else {
        return Err(TopologyError::at(
            "unable to find a directed edge with the interior on its right",
            pt0,
        ));
    };
    visit_linked_directed_edges(graph, start)
}

fn visit_linked_directed_edges(graph: &mut PlanarGraph, start: DirectedEdgeId) -> Result<()> {
    let mut de = start;
    loop {
        let d = graph.directed_edge_mut(de);
        d.set_visited(true);
        let coord = d.end().coord();
        de = d
            .next()
            .ok_or_else(|| TopologyError::at("found null directed edge", coord))?;
        if graph.directed_edge(de).is_visited() {
            return Ok(());
        }
    }
}

/// The start of the first unvisited edge of a ring that has the interior
/// on its right and isn't a hole.
fn unvisited_shell_edge(graph: &PlanarGraph, rings: &[EdgeRingId], arg: usize) -> Option<Coord> {
    for &r in rings {
        let ring = graph.ring(r);
        if ring.is_hole() {
            continue;
        }
        let edges = ring.edges();
        let Some(&first) = edges.first() else {
            continue;
        };
        if graph.directed_edge(first).label().location(arg, Position::Right) != Location::Interior {
            continue;
        }
        if let Some(&de) = edges.iter().find(|&&de| !graph.directed_edge(de).is_visited()) {
            return Some(graph.directed_edge(de).end().coord());
        }
    }
    None
}
