use assert_matches::assert_matches;
use plantopo::{
    noding::{
        FastNodingValidator, IntersectionAdder, McIndexNoder, NodedSegmentString, Noder,
        NodingValidator, ScaledNoder, SegmentString, SimpleNoder, SimpleSnapRounder,
    },
    Coord, NodingError,
};
use proptest::prelude::*;

fn segments(segs: &[(i32, i32, i32, i32)]) -> Vec<NodedSegmentString> {
    segs.iter()
        .map(|&(x0, y0, x1, y1)| {
            NodedSegmentString::new(
                vec![Coord::new(x0 as f64, y0 as f64), Coord::new(x1 as f64, y1 as f64)],
                (),
            )
        })
        .collect()
}

fn sorted_coords(out: &[NodedSegmentString]) -> Vec<Vec<(f64, f64)>> {
    let mut ret: Vec<Vec<(f64, f64)>> = out
        .iter()
        .map(|s| s.coordinates().iter().map(|c| (c.x, c.y)).collect())
        .collect();
    ret.sort_by(|a, b| a.partial_cmp(b).unwrap());
    ret
}

/// A horizontal or vertical segment with integer endpoints and non-zero
/// length.
fn axis_segment() -> impl Strategy<Value = (i32, i32, i32, i32)> {
    (any::<bool>(), -10i32..10, -10i32..10, 1i32..8).prop_map(|(horizontal, x, y, len)| {
        if horizontal {
            (x, y, x + len, y)
        } else {
            (x, y, x, y + len)
        }
    })
}

/// A polyline with integer vertices and no repeated consecutive points.
fn polyline() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-6i32..6, -6i32..6), 2..6)
        .prop_map(|mut pts| {
            pts.dedup();
            pts
        })
        .prop_filter("at least one segment", |pts| pts.len() >= 2)
}

fn polylines(lines: &[Vec<(i32, i32)>]) -> Vec<NodedSegmentString> {
    lines
        .iter()
        .map(|pts| {
            let coords = pts.iter().map(|&(x, y)| Coord::new(x as f64, y as f64)).collect();
            NodedSegmentString::new(coords, ())
        })
        .collect()
}

#[test]
fn grid() {
    let input = segments(&[(0, 0, 4, 0), (0, 2, 4, 2), (1, -1, 1, 3), (3, -1, 3, 3)]);
    let out = McIndexNoder::new(IntersectionAdder::default()).node(input);
    // Each horizontal line is cut twice, and so is each vertical one.
    assert_eq!(out.len(), 12);
    assert_eq!(NodingValidator::new(&out).check_valid(), Ok(()));
}

#[test]
fn snap_rounding_a_near_miss() {
    // These two nearly meet at (1, 1); after rounding to a grid of 0.5
    // they do.
    let input = vec![
        NodedSegmentString::new(vec![Coord::new(0.0, 0.0), Coord::new(2.0, 2.0)], 0),
        NodedSegmentString::new(vec![Coord::new(1.1, 0.0), Coord::new(1.1, 0.9)], 1),
    ];
    let mut noder = ScaledNoder::new(SimpleSnapRounder::new(1.0), 2.0);
    let out = noder.node(input);
    assert!(FastNodingValidator::new().is_valid(&out));
    assert!(out
        .iter()
        .filter(|s| *s.data() == 1)
        .any(|s| s.coordinates().contains(&Coord::new(1.0, 1.0))));
}

#[test]
fn only_the_full_validator_sees_vertex_problems() {
    // One string ends on the other's interior vertex.
    let strings = polylines(&[vec![(0, 0), (1, 0), (2, 1)], vec![(1, 0), (1, -1)]]);
    assert!(FastNodingValidator::new().is_valid(&strings));
    assert_eq!(NodingValidator::new(&strings).check_interior_intersections(), Ok(()));
    assert_matches!(
        NodingValidator::new(&strings).check_valid(),
        Err(NodingError::EndpointInteriorIntersection { at, .. }) if at == Coord::new(1.0, 0.0)
    );

    // A string that folds back on itself.
    let strings = polylines(&[vec![(0, 0), (2, 0), (0, 0)]]);
    assert!(FastNodingValidator::new().is_valid(&strings));
    assert_eq!(NodingValidator::new(&strings).check_interior_intersections(), Ok(()));
    assert_matches!(
        NodingValidator::new(&strings).check_valid(),
        Err(NodingError::NonNodedCollapse { .. })
    );
}

proptest! {
    #[test]
    fn axis_aligned_noding_is_complete(segs in prop::collection::vec(axis_segment(), 1..12)) {
        let out = McIndexNoder::new(IntersectionAdder::default()).node(segments(&segs));
        prop_assert_eq!(NodingValidator::new(&out).check_valid(), Ok(()));
    }

    #[test]
    fn noding_twice_changes_nothing(segs in prop::collection::vec(axis_segment(), 1..12)) {
        let once = McIndexNoder::new(IntersectionAdder::default()).node(segments(&segs));
        let twice = McIndexNoder::new(IntersectionAdder::default()).node(once.clone());
        prop_assert_eq!(sorted_coords(&once), sorted_coords(&twice));
    }

    #[test]
    fn indexed_and_simple_noders_agree(segs in prop::collection::vec(axis_segment(), 1..12)) {
        let indexed = McIndexNoder::new(IntersectionAdder::default()).node(segments(&segs));
        let simple = SimpleNoder::new(IntersectionAdder::default()).node(segments(&segs));
        prop_assert_eq!(sorted_coords(&indexed), sorted_coords(&simple));
    }

    #[test]
    fn validators_agree_on_interior_intersections(
        lines in prop::collection::vec(polyline(), 1..6)
    ) {
        let strings = polylines(&lines);
        prop_assert_eq!(
            FastNodingValidator::new().is_valid(&strings),
            NodingValidator::new(&strings).check_interior_intersections().is_ok()
        );
    }
}
