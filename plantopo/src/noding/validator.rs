use super::{InteriorIntersectionFinder, McIndexNoder, SegmentString};
use crate::{algorithm::LineIntersector, error::NodingError, geom::Coord};

/// Checks by brute force that a set of segment strings is correctly noded.
///
/// Three things are checked, in order: no string ends at an interior vertex
/// of a string, no two segments meet at a point interior to either of them,
/// and no string collapses back on itself (`a - b - a`).
#[derive(Clone, Debug)]
pub struct NodingValidator<'a, S> {
    strings: &'a [S],
}

impl<'a, S: SegmentString> NodingValidator<'a, S> {
    pub fn new(strings: &'a [S]) -> Self {
        NodingValidator { strings }
    }

    pub fn check_valid(&self) -> Result<(), NodingError> {
        self.check_end_point_vertex_intersections()?;
        self.check_interior_intersections()?;
        self.check_collapses()
    }

    pub fn is_valid(&self) -> bool {
        self.check_valid().is_ok()
    }

    pub fn check_collapses(&self) -> Result<(), NodingError> {
        for s in self.strings {
            for w in s.coordinates().windows(3) {
                if w[0].equals_2d(&w[2]) {
                    return Err(NodingError::NonNodedCollapse {
                        a: [w[0], w[1]],
                        b: [w[1], w[2]],
                    });
                }
            }
        }
        Ok(())
    }

    pub fn check_interior_intersections(&self) -> Result<(), NodingError> {
        let mut li = LineIntersector::new();
        for (i, s0) in self.strings.iter().enumerate() {
            for (j, s1) in self.strings.iter().enumerate() {
                for (k0, a) in s0.coordinates().windows(2).enumerate() {
                    for (k1, b) in s1.coordinates().windows(2).enumerate() {
                        if i == j && k0 == k1 {
                            continue;
                        }
                        li.compute_intersection(a[0], a[1], b[0], b[1]);
                        if !li.has_intersection() {
                            continue;
                        }
                        let interior = li
                            .intersection_points()
                            .iter()
                            .find(|p| !is_end_point(p, a) || !is_end_point(p, b));
                        if let Some(at) = interior {
                            return Err(NodingError::NonNodedIntersection {
                                a: [a[0], a[1]],
                                b: [b[0], b[1]],
                                at: *at,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn check_end_point_vertex_intersections(&self) -> Result<(), NodingError> {
        for s in self.strings {
            let pts = s.coordinates();
            for end in pts.first().into_iter().chain(pts.last()) {
                self.check_end_point_vertex_intersection(*end)?;
            }
        }
        Ok(())
    }

    fn check_end_point_vertex_intersection(&self, end: Coord) -> Result<(), NodingError> {
        for s in self.strings {
            for w in s.coordinates().windows(3) {
                if w[1].equals_2d(&end) {
                    return Err(NodingError::EndpointInteriorIntersection {
                        at: end,
                        segments: [w[0], w[1], w[2]],
                    });
                }
            }
        }
        Ok(())
    }
}

fn is_end_point(p: &Coord, seg: &[Coord]) -> bool {
    p.equals_2d(&seg[0]) || p.equals_2d(&seg[1])
}

/// Checks with a spatial index that a set of segment strings has no
/// interior intersections, stopping at the first one found.
///
/// This doesn't look for collapses or endpoint/vertex coincidences, so it
/// is weaker than [`NodingValidator`], but much faster on large inputs.
#[derive(Clone, Debug, Default)]
pub struct FastNodingValidator {
    li: LineIntersector,
}

impl FastNodingValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_valid<S: SegmentString>(&mut self, strings: &[S]) -> Result<(), NodingError> {
        let mut refs: Vec<&S> = strings.iter().collect();
        let mut noder = McIndexNoder::new(InteriorIntersectionFinder::new(self.li.clone()));
        noder.compute_nodes(&mut refs);
        let finder = noder.into_intersector();
        match (finder.intersection(), finder.intersection_segments()) {
            (Some(at), Some([a0, a1, b0, b1])) => Err(NodingError::NonNodedIntersection {
                a: [a0, a1],
                b: [b0, b1],
                at,
            }),
            _ => Ok(()),
        }
    }

    pub fn is_valid<S: SegmentString>(&mut self, strings: &[S]) -> bool {
        self.check_valid(strings).is_ok()
    }
}
