use std::collections::BTreeSet;

use tracing::debug;

use super::{
    nested_rings::find_pt_not_node, ConnectedInteriorTester, ConsistentAreaTester,
    NestedRingTester, NestedRingTesterKind, SimpleNestedRingTester, SweeplineNestedRingTester,
    ValidOptions, ValidationError, ValidationErrorKind,
};
use crate::{
    algorithm::{is_in_ring, LineIntersector, McPointInRing},
    error::TopologyError,
    geom::{remove_repeated_points, Coord, CoordKey, Geometry, LinearRing, Polygon},
    graph::{GeometryGraph, Location, RingRef},
    Result,
};

/// Why a check stopped.
enum Stop {
    Invalid(ValidationError),
    Topology(TopologyError),
}

impl From<TopologyError> for Stop {
    fn from(e: TopologyError) -> Self {
        Stop::Topology(e)
    }
}

type Check = std::result::Result<(), Stop>;

fn fail(kind: ValidationErrorKind, coord: Coord) -> Check {
    Err(Stop::Invalid(ValidationError::new(kind, coord)))
}

/// Decides whether a geometry is valid in the OGC simple-features sense.
///
/// The checks run in a fixed order and stop at the first problem, so at
/// most one [`ValidationError`] is reported. Empty geometries are valid.
///
/// ```
/// use plantopo::{Geometry, IsValidOp, LinearRing, Polygon, ValidationErrorKind};
///
/// let bowtie: LinearRing = [(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]
///     .into_iter()
///     .collect();
/// let geom = Geometry::Polygon(Polygon::new(bowtie, vec![]));
/// let err = IsValidOp::new(&geom).validation_error().unwrap().unwrap();
/// assert_eq!(err.kind, ValidationErrorKind::SelfIntersection);
/// ```
#[derive(Clone, Debug)]
pub struct IsValidOp<'a> {
    geom: &'a Geometry,
    options: ValidOptions,
}

impl<'a> IsValidOp<'a> {
    pub fn new(geom: &'a Geometry) -> Self {
        Self::with_options(geom, ValidOptions::default())
    }

    pub fn with_options(geom: &'a Geometry, options: ValidOptions) -> Self {
        IsValidOp { geom, options }
    }

    pub fn options(&self) -> &ValidOptions {
        &self.options
    }

    /// Fails only if the topology graph turns out to be inconsistent, which
    /// means a robustness problem and not an invalid geometry.
    pub fn is_valid(&self) -> Result<bool> {
        Ok(self.validation_error()?.is_none())
    }

    /// The first problem found, if any.
    pub fn validation_error(&self) -> Result<Option<ValidationError>> {
        match self.check_geometry(self.geom) {
            Ok(()) => Ok(None),
            Err(Stop::Invalid(e)) => {
                debug!(kind = ?e.kind, coord = %e.coord, "invalid geometry");
                Ok(Some(e))
            }
            Err(Stop::Topology(e)) => Err(e),
        }
    }

    fn check_geometry(&self, g: &Geometry) -> Check {
        if g.is_empty() {
            return Ok(());
        }
        match g {
            Geometry::Point(_) | Geometry::MultiPoint(_) => check_invalid_coordinates(&g.coords()),
            Geometry::LineString(l) => check_line_string(&l.0),
            Geometry::MultiLineString(ls) => ls.iter().try_for_each(|l| check_line_string(&l.0)),
            Geometry::LinearRing(r) => check_linear_ring(r, g),
            Geometry::Polygon(p) => self.check_polygon(p, g),
            Geometry::MultiPolygon(ps) => self.check_multi_polygon(ps, g),
            Geometry::GeometryCollection(gs) => gs.iter().try_for_each(|g| self.check_geometry(g)),
        }
    }

    fn check_polygon(&self, p: &Polygon, g: &Geometry) -> Check {
        check_invalid_coordinates(p.rings().flat_map(LinearRing::coords))?;
        check_closed_rings(p)?;

        let mut graph = GeometryGraph::new(0, g);
        check_too_few_points(&graph)?;
        check_consistent_area(&mut graph)?;
        if !self.options.self_touching_ring_forming_hole_valid {
            check_no_self_intersecting_rings(&mut graph)?;
        }
        check_holes_in_shell(p, 0, &graph)?;
        self.check_holes_not_nested(p, 0, &graph)?;
        check_connected_interior(&mut graph, &[p])
    }

    fn check_multi_polygon(&self, ps: &[Polygon], g: &Geometry) -> Check {
        for p in ps {
            check_invalid_coordinates(p.rings().flat_map(LinearRing::coords))?;
            check_closed_rings(p)?;
        }

        let mut graph = GeometryGraph::new(0, g);
        check_too_few_points(&graph)?;
        check_consistent_area(&mut graph)?;
        if !self.options.self_touching_ring_forming_hole_valid {
            check_no_self_intersecting_rings(&mut graph)?;
        }
        for (i, p) in ps.iter().enumerate() {
            check_holes_in_shell(p, i, &graph)?;
        }
        for (i, p) in ps.iter().enumerate() {
            self.check_holes_not_nested(p, i, &graph)?;
        }
        check_shells_not_nested(ps, &graph)?;
        let polys: Vec<&Polygon> = ps.iter().collect();
        check_connected_interior(&mut graph, &polys)
    }

    fn check_holes_not_nested(&self, p: &Polygon, index: usize, graph: &GeometryGraph) -> Check {
        let nested = match self.options.nested_ring_tester {
            NestedRingTesterKind::Simple => {
                nested_hole_point(SimpleNestedRingTester::new(graph), p, index)
            }
            NestedRingTesterKind::Sweepline => {
                nested_hole_point(SweeplineNestedRingTester::new(graph), p, index)
            }
        };
        match nested {
            Some(pt) => fail(ValidationErrorKind::NestedHoles, pt),
            None => Ok(()),
        }
    }
}

/// Is `geom` valid, with the default options?
pub fn is_valid(geom: &Geometry) -> Result<bool> {
    IsValidOp::new(geom).is_valid()
}

fn nested_hole_point<'a>(
    mut tester: impl NestedRingTester<'a>,
    p: &'a Polygon,
    index: usize,
) -> Option<Coord> {
    for (i, hole) in p.holes.iter().enumerate() {
        if !hole.is_empty() {
            tester.add(RingRef::hole(index, i), hole.coords());
        }
    }
    tester.nested_point()
}

fn check_invalid_coordinates<'a>(pts: impl IntoIterator<Item = &'a Coord>) -> Check {
    match pts.into_iter().find(|c| !c.is_valid()) {
        Some(c) => fail(ValidationErrorKind::InvalidCoordinate, *c),
        None => Ok(()),
    }
}

fn check_closed_ring(ring: &LinearRing) -> Check {
    match ring.coords().first() {
        Some(&first) if !ring.is_closed() => fail(ValidationErrorKind::RingNotClosed, first),
        _ => Ok(()),
    }
}

fn check_closed_rings(p: &Polygon) -> Check {
    p.rings().try_for_each(check_closed_ring)
}

/// Fewer than `min` distinct points (ignoring repeats) is too few.
fn check_min_points(pts: &[Coord], min: usize) -> Check {
    match pts.first() {
        Some(&first) if remove_repeated_points(pts).len() < min => {
            fail(ValidationErrorKind::TooFewPoints, first)
        }
        _ => Ok(()),
    }
}

fn check_too_few_points(graph: &GeometryGraph) -> Check {
    match graph.invalid_point() {
        Some(pt) => fail(ValidationErrorKind::TooFewPoints, pt),
        None => Ok(()),
    }
}

fn check_line_string(pts: &[Coord]) -> Check {
    check_invalid_coordinates(pts)?;
    check_min_points(pts, 2)
}

fn check_linear_ring(ring: &LinearRing, g: &Geometry) -> Check {
    check_invalid_coordinates(ring.coords())?;
    check_closed_ring(ring)?;
    check_min_points(ring.coords(), 4)?;

    let mut graph = GeometryGraph::new(0, g);
    graph.compute_self_nodes(LineIntersector::new(), true, true);
    check_no_self_intersecting_rings(&mut graph)
}

fn check_consistent_area(graph: &mut GeometryGraph) -> Check {
    let mut cat = ConsistentAreaTester::new(graph);
    if let Some(pt) = cat.find_inconsistent_node()? {
        return fail(ValidationErrorKind::SelfIntersection, pt);
    }
    match cat.find_duplicate_ring() {
        Some(pt) => fail(ValidationErrorKind::DuplicateRings, pt),
        None => Ok(()),
    }
}

/// A ring may only meet itself at its closing point.
fn check_no_self_intersecting_rings(graph: &mut GeometryGraph) -> Check {
    for e in graph.edges_mut() {
        e.add_endpoint_intersections();
        let mut nodes = BTreeSet::new();
        // The start point comes back at the end.
        for ei in e.intersections().iter().skip(1) {
            if !nodes.insert(CoordKey::from(ei.coord)) {
                return fail(ValidationErrorKind::RingSelfIntersection, ei.coord);
            }
        }
    }
    Ok(())
}

fn check_holes_in_shell(p: &Polygon, index: usize, graph: &GeometryGraph) -> Check {
    if p.holes.is_empty() {
        return Ok(());
    }
    let shell = p.shell.coords();
    let locator = (!shell.is_empty()).then(|| McPointInRing::new(shell));
    for hole in p.holes.iter().filter(|h| !h.is_empty()) {
        let hole_pt = match locator {
            None => hole.coords().first().copied(),
            Some(_) => find_pt_not_node(hole.coords(), RingRef::shell(index), graph),
        };
        // A hole made only of shell nodes duplicates the shell, which the
        // consistent area check has already caught.
        let Some(hole_pt) = hole_pt else {
            return Ok(());
        };
        let outside = locator
            .as_ref()
            .map_or(true, |l| l.locate(hole_pt) == Location::Exterior);
        if outside {
            return fail(ValidationErrorKind::HoleOutsideShell, hole_pt);
        }
    }
    Ok(())
}

/// No shell may lie inside another polygon, except inside one of its
/// holes.
fn check_shells_not_nested(ps: &[Polygon], graph: &GeometryGraph) -> Check {
    for (i, p) in ps.iter().enumerate() {
        for (j, other) in ps.iter().enumerate() {
            if i != j {
                check_shell_not_nested(&p.shell, i, other, j, graph)?;
            }
        }
    }
    Ok(())
}

fn check_shell_not_nested(
    shell: &LinearRing,
    index: usize,
    p: &Polygon,
    p_index: usize,
    graph: &GeometryGraph,
) -> Check {
    if p.shell.is_empty() {
        return Ok(());
    }
    let Some(shell_pt) = find_pt_not_node(shell.coords(), RingRef::shell(p_index), graph) else {
        return Ok(());
    };
    if !is_in_ring(shell_pt, p.shell.coords()) {
        return Ok(());
    }

    // Inside the other shell is fine, as long as it's also inside a hole.
    let mut bad_pt = shell_pt;
    for (k, hole) in p.holes.iter().enumerate() {
        if hole.is_empty() {
            continue;
        }
        match shell_inside_hole(shell, index, hole, RingRef::hole(p_index, k), graph)? {
            Some(pt) => bad_pt = pt,
            None => return Ok(()),
        }
    }
    fail(ValidationErrorKind::NestedShells, bad_pt)
}

/// Is the shell inside the hole? `None` if it is, otherwise a point of the
/// shell outside the hole (or a point of the hole inside the shell).
fn shell_inside_hole(
    shell: &LinearRing,
    index: usize,
    hole: &LinearRing,
    hole_ref: RingRef,
    graph: &GeometryGraph,
) -> Result<Option<Coord>> {
    if let Some(shell_pt) = find_pt_not_node(shell.coords(), hole_ref, graph) {
        if !is_in_ring(shell_pt, hole.coords()) {
            return Ok(Some(shell_pt));
        }
    }
    if let Some(hole_pt) = find_pt_not_node(hole.coords(), RingRef::shell(index), graph) {
        return Ok(is_in_ring(hole_pt, shell.coords()).then_some(hole_pt));
    }
    let at = shell.coords().first().copied();
    Err(match at {
        Some(c) => TopologyError::at("points in shell and hole appear to be equal", c),
        None => TopologyError::new("points in shell and hole appear to be equal"),
    })
}

fn check_connected_interior(graph: &mut GeometryGraph, polys: &[&Polygon]) -> Check {
    match ConnectedInteriorTester::new(graph).find_disconnected_point(polys)? {
        Some(pt) => fail(ValidationErrorKind::DisconnectedInterior, pt),
        None => Ok(()),
    }
}
