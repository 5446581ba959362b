use assert_matches::assert_matches;
use plantopo::{
    valid::NestedRingTesterKind, Coord, Geometry, IsValidOp, LinearRing, Polygon, ValidOptions,
    ValidationError, ValidationErrorKind,
};

fn p(x: f64, y: f64) -> Coord {
    Coord::new(x, y)
}

fn ring(pts: &[(f64, f64)]) -> LinearRing {
    pts.iter().copied().collect()
}

fn square(x0: f64, y0: f64, side: f64) -> LinearRing {
    ring(&[
        (x0, y0),
        (x0 + side, y0),
        (x0 + side, y0 + side),
        (x0, y0 + side),
        (x0, y0),
    ])
}

fn polygon(shell: LinearRing, holes: Vec<LinearRing>) -> Geometry {
    Geometry::Polygon(Polygon::new(shell, holes))
}

fn error(g: &Geometry) -> Option<ValidationError> {
    IsValidOp::new(g).validation_error().unwrap()
}

fn error_with(g: &Geometry, options: ValidOptions) -> Option<ValidationError> {
    IsValidOp::with_options(g, options).validation_error().unwrap()
}

#[test]
fn square_is_valid() {
    let g = polygon(square(0.0, 0.0, 10.0), vec![]);
    assert!(plantopo::is_valid(&g).unwrap());

    // Orientation doesn't matter.
    let mut cw = square(0.0, 0.0, 10.0);
    cw.0.reverse();
    assert!(plantopo::is_valid(&polygon(cw, vec![])).unwrap());
}

#[test]
fn bowtie() {
    let g = polygon(
        ring(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]),
        vec![],
    );
    let err = error(&g).unwrap();
    assert_eq!(err, ValidationError::new(ValidationErrorKind::SelfIntersection, p(5.0, 5.0)));
    insta::assert_snapshot!(err, @"Self-intersection at or near point (5, 5)");
}

#[test]
fn hole_outside_shell() {
    let g = polygon(square(0.0, 0.0, 10.0), vec![square(20.0, 20.0, 2.0)]);
    let err = error(&g).unwrap();
    assert_eq!(err, ValidationError::new(ValidationErrorKind::HoleOutsideShell, p(20.0, 20.0)));
    insta::assert_snapshot!(err, @"Hole lies outside shell at or near point (20, 20)");
}

#[test]
fn hole_touching_shell_is_valid() {
    let g = polygon(
        square(0.0, 0.0, 10.0),
        vec![ring(&[(0.0, 5.0), (5.0, 3.0), (5.0, 7.0), (0.0, 5.0)])],
    );
    assert_eq!(error(&g), None);
}

#[test]
fn nested_holes() {
    let g = polygon(
        square(0.0, 0.0, 10.0),
        vec![square(1.0, 1.0, 8.0), square(3.0, 3.0, 2.0)],
    );
    for kind in [NestedRingTesterKind::Simple, NestedRingTesterKind::Sweepline] {
        assert_eq!(
            error_with(&g, ValidOptions::default().nested_ring_tester(kind)),
            Some(ValidationError::new(ValidationErrorKind::NestedHoles, p(3.0, 3.0)))
        );
    }
}

#[test]
fn crossing_holes_self_intersect() {
    let g = polygon(
        square(0.0, 0.0, 10.0),
        vec![square(1.0, 1.0, 4.0), square(3.0, 3.0, 4.0)],
    );
    assert_matches!(
        error(&g),
        Some(ValidationError { kind: ValidationErrorKind::SelfIntersection, .. })
    );
}

#[test]
fn disconnected_interior() {
    // Two holes touching each other and opposite sides of the shell.
    let g = polygon(
        square(0.0, 0.0, 10.0),
        vec![
            ring(&[(0.0, 5.0), (5.0, 5.0), (2.0, 7.0), (0.0, 5.0)]),
            ring(&[(5.0, 5.0), (10.0, 5.0), (8.0, 7.0), (5.0, 5.0)]),
        ],
    );
    let err = error(&g).unwrap();
    assert_eq!(err.kind, ValidationErrorKind::DisconnectedInterior);
    assert!(err.coord.y >= 5.0);
}

#[test]
fn figure_eight_hole() {
    // The hole touches itself at (5, 5), making two lobes.
    let hole = ring(&[
        (5.0, 5.0),
        (2.0, 2.0),
        (2.0, 8.0),
        (5.0, 5.0),
        (8.0, 8.0),
        (8.0, 2.0),
        (5.0, 5.0),
    ]);
    let g = polygon(square(0.0, 0.0, 10.0), vec![hole]);
    assert_eq!(
        error(&g),
        Some(ValidationError::new(ValidationErrorKind::RingSelfIntersection, p(5.0, 5.0)))
    );
    let relaxed = ValidOptions::default().self_touching_ring_forming_hole_valid(true);
    assert_eq!(error_with(&g, relaxed), None);
}

#[test]
fn nested_shells() {
    let g = Geometry::MultiPolygon(vec![
        Polygon::new(square(0.0, 0.0, 10.0), vec![]),
        Polygon::new(square(2.0, 2.0, 2.0), vec![]),
    ]);
    assert_eq!(
        error(&g),
        Some(ValidationError::new(ValidationErrorKind::NestedShells, p(2.0, 2.0)))
    );
}

#[test]
fn empty_hole_does_not_hide_a_nested_shell() {
    let g = Geometry::MultiPolygon(vec![
        Polygon::new(square(0.0, 0.0, 10.0), vec![LinearRing::default()]),
        Polygon::new(square(2.0, 2.0, 2.0), vec![]),
    ]);
    assert_eq!(
        error(&g),
        Some(ValidationError::new(ValidationErrorKind::NestedShells, p(2.0, 2.0)))
    );
}

#[test]
fn empty_shell_with_a_hole() {
    // On its own the polygon counts as empty.
    let g = polygon(LinearRing::default(), vec![square(1.0, 1.0, 2.0)]);
    assert_eq!(error(&g), None);

    // Next to a non-empty polygon the hole has no shell to be inside.
    let g = Geometry::MultiPolygon(vec![
        Polygon::new(LinearRing::default(), vec![square(1.0, 1.0, 2.0)]),
        Polygon::new(square(20.0, 20.0, 5.0), vec![]),
    ]);
    assert_eq!(
        error(&g),
        Some(ValidationError::new(ValidationErrorKind::HoleOutsideShell, p(1.0, 1.0)))
    );
}

#[test]
fn shell_in_a_hole_is_valid() {
    let g = Geometry::MultiPolygon(vec![
        Polygon::new(square(0.0, 0.0, 10.0), vec![square(1.0, 1.0, 8.0)]),
        Polygon::new(square(2.0, 2.0, 2.0), vec![]),
    ]);
    assert_eq!(error(&g), None);
}

#[test]
fn ring_not_closed() {
    let g = polygon(ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]), vec![]);
    assert_eq!(
        error(&g),
        Some(ValidationError::new(ValidationErrorKind::RingNotClosed, p(0.0, 0.0)))
    );
}

#[test]
fn too_few_points() {
    let g = polygon(ring(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (0.0, 0.0)]), vec![]);
    assert_eq!(
        error(&g),
        Some(ValidationError::new(ValidationErrorKind::TooFewPoints, p(0.0, 0.0)))
    );
}

#[test]
fn invalid_coordinate() {
    let g = polygon(
        ring(&[(0.0, 0.0), (10.0, 0.0), (f64::INFINITY, 10.0), (0.0, 10.0), (0.0, 0.0)]),
        vec![],
    );
    assert_matches!(
        error(&g),
        Some(ValidationError { kind: ValidationErrorKind::InvalidCoordinate, coord })
            if coord.x.is_infinite()
    );
}

#[test]
fn duplicate_rings() {
    let g = polygon(
        square(0.0, 0.0, 10.0),
        vec![square(2.0, 2.0, 2.0), square(2.0, 2.0, 2.0)],
    );
    assert_eq!(
        error(&g),
        Some(ValidationError::new(ValidationErrorKind::DuplicateRings, p(2.0, 2.0)))
    );
}

#[test]
fn first_error_in_a_collection_wins() {
    let g = Geometry::GeometryCollection(vec![
        polygon(square(0.0, 0.0, 10.0), vec![]),
        polygon(square(0.0, 0.0, 10.0), vec![square(20.0, 20.0, 1.0)]),
        polygon(ring(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]), vec![]),
    ]);
    assert_matches!(
        error(&g),
        Some(ValidationError { kind: ValidationErrorKind::HoleOutsideShell, .. })
    );
}

#[test]
fn from_json() {
    let g: Geometry = serde_json::from_str(
        r#"{"Polygon": {"shell": [
            {"x": 0, "y": 0}, {"x": 10, "y": 0}, {"x": 10, "y": 10},
            {"x": 0, "y": 10}, {"x": 0, "y": 0}
        ]}}"#,
    )
    .unwrap();
    assert!(plantopo::is_valid(&g).unwrap());
}
