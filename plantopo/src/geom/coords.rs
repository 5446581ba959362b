//! Helpers for coordinate sequences.

use super::Coord;

/// Iterates over consecutive pairs, including the pair that wraps around
/// from the last element to the first.
pub fn cyclic_pairs<T>(xs: &[T]) -> impl Iterator<Item = (&T, &T)> {
    xs.windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .chain(xs.last().zip(xs.first()))
}

pub fn has_repeated_points(pts: &[Coord]) -> bool {
    pts.windows(2).any(|w| w[0].equals_2d(&w[1]))
}

/// Drops every point that is 2D-equal to its predecessor.
pub fn remove_repeated_points(pts: &[Coord]) -> Vec<Coord> {
    let mut ret: Vec<Coord> = Vec::with_capacity(pts.len());
    for p in pts {
        if ret.last().map_or(true, |q| !q.equals_2d(p)) {
            ret.push(*p);
        }
    }
    ret
}

/// Closed, with at least four points.
pub fn is_ring(pts: &[Coord]) -> bool {
    pts.len() >= 4 && pts[0].equals_2d(&pts[pts.len() - 1])
}

/// The first point of `pts` that differs from `p`.
pub fn find_different_point(pts: &[Coord], p: &Coord) -> Option<Coord> {
    pts.iter().find(|q| !q.equals_2d(p)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn repeated_points() {
        let pts = [p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)];
        assert!(has_repeated_points(&pts));
        let deduped = remove_repeated_points(&pts);
        assert_eq!(deduped, vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]);
        assert!(!has_repeated_points(&deduped));
    }

    #[test]
    fn cyclic() {
        let xs = [1, 2, 3];
        let pairs: Vec<_> = cyclic_pairs(&xs).map(|(a, b)| (*a, *b)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 1)]);
        assert_eq!(cyclic_pairs::<i32>(&[]).count(), 0);
    }

    #[test]
    fn rings() {
        assert!(is_ring(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)]));
        assert!(!is_ring(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]));
        assert!(!is_ring(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]));
        assert_eq!(
            find_different_point(&[p(0.0, 0.0), p(0.0, 0.0), p(2.0, 0.0)], &p(0.0, 0.0)),
            Some(p(2.0, 0.0))
        );
    }
}
