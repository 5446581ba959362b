use serde::{Deserialize, Serialize};

use super::Coord;

/// An axis-aligned bounding rectangle.
///
/// The null envelope (`min_x > max_x`) contains nothing and is the identity
/// for [`Envelope::expand_to_include_envelope`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Envelope::null()
    }
}

impl Envelope {
    pub fn null() -> Self {
        Envelope {
            min_x: 0.0,
            max_x: -1.0,
            min_y: 0.0,
            max_y: -1.0,
        }
    }

    /// The envelope spanned by two x values and two y values, in any order.
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Envelope {
            min_x: x1.min(x2),
            max_x: x1.max(x2),
            min_y: y1.min(y2),
            max_y: y1.max(y2),
        }
    }

    pub fn of_coord(p: Coord) -> Self {
        Envelope::new(p.x, p.x, p.y, p.y)
    }

    pub fn from_coords(p: Coord, q: Coord) -> Self {
        Envelope::new(p.x, q.x, p.y, q.y)
    }

    pub fn of_points<'a>(pts: impl IntoIterator<Item = &'a Coord>) -> Self {
        let mut env = Envelope::null();
        for p in pts {
            env.expand_to_include(*p);
        }
        env
    }

    pub fn is_null(&self) -> bool {
        self.max_x < self.min_x
    }

    pub fn width(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.max_x - self.min_x
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            self.max_y - self.min_y
        }
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn centre(&self) -> Option<Coord> {
        (!self.is_null()).then(|| {
            Coord::new(
                (self.min_x + self.max_x) / 2.0,
                (self.min_y + self.max_y) / 2.0,
            )
        })
    }

    pub fn expand_to_include(&mut self, p: Coord) {
        if self.is_null() {
            *self = Envelope::of_coord(p);
        } else {
            self.min_x = self.min_x.min(p.x);
            self.max_x = self.max_x.max(p.x);
            self.min_y = self.min_y.min(p.y);
            self.max_y = self.max_y.max(p.y);
        }
    }

    pub fn expand_to_include_envelope(&mut self, other: &Envelope) {
        if other.is_null() {
            return;
        }
        if self.is_null() {
            *self = *other;
        } else {
            self.min_x = self.min_x.min(other.min_x);
            self.max_x = self.max_x.max(other.max_x);
            self.min_y = self.min_y.min(other.min_y);
            self.max_y = self.max_y.max(other.max_y);
        }
    }

    /// Grows (or, for negative `distance`, shrinks) the envelope on every
    /// side. Shrinking past empty makes it null.
    pub fn expand_by(&mut self, distance: f64) {
        if self.is_null() {
            return;
        }
        self.min_x -= distance;
        self.max_x += distance;
        self.min_y -= distance;
        self.max_y += distance;
        if self.min_x > self.max_x || self.min_y > self.max_y {
            *self = Envelope::null();
        }
    }

    pub fn intersects(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    pub fn intersects_coord(&self, p: &Coord) -> bool {
        !self.is_null()
            && !(p.x > self.max_x || p.x < self.min_x || p.y > self.max_y || p.y < self.min_y)
    }

    /// The common part of two envelopes; null iff they are disjoint.
    pub fn intersection(&self, other: &Envelope) -> Envelope {
        if !self.intersects(other) {
            return Envelope::null();
        }
        Envelope {
            min_x: self.min_x.max(other.min_x),
            max_x: self.max_x.min(other.max_x),
            min_y: self.min_y.max(other.min_y),
            max_y: self.max_y.min(other.max_y),
        }
    }

    pub fn contains_coord(&self, p: &Coord) -> bool {
        self.intersects_coord(p)
    }

    /// `other` lies entirely inside (or on the boundary of) `self`.
    pub fn covers(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// The Euclidean distance between the closest points of two envelopes.
    pub fn distance(&self, other: &Envelope) -> f64 {
        if self.intersects(other) {
            return 0.0;
        }
        let dx = if self.max_x < other.min_x {
            other.min_x - self.max_x
        } else if self.min_x > other.max_x {
            self.min_x - other.max_x
        } else {
            0.0
        };
        let dy = if self.max_y < other.min_y {
            other.min_y - self.max_y
        } else if self.min_y > other.max_y {
            self.min_y - other.max_y
        } else {
            0.0
        };
        dx.hypot(dy)
    }

    /// Does `q` lie in the envelope of the segment `p1 - p2`?
    pub fn segment_intersects_coord(p1: Coord, p2: Coord, q: Coord) -> bool {
        q.x >= p1.x.min(p2.x)
            && q.x <= p1.x.max(p2.x)
            && q.y >= p1.y.min(p2.y)
            && q.y <= p1.y.max(p2.y)
    }

    /// Do the envelopes of the segments `p1 - p2` and `q1 - q2` intersect?
    pub fn segments_intersect(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> bool {
        let min_q = q1.x.min(q2.x);
        let max_q = q1.x.max(q2.x);
        let min_p = p1.x.min(p2.x);
        let max_p = p1.x.max(p2.x);
        if min_p > max_q || max_p < min_q {
            return false;
        }
        let min_q = q1.y.min(q2.y);
        let max_q = q1.y.max(q2.y);
        let min_p = p1.y.min(p2.y);
        let max_p = p1.y.max(p2.y);
        !(min_p > max_q || max_p < min_q)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::perturbation::Reasonable;

    #[test]
    fn null() {
        let env = Envelope::null();
        assert!(env.is_null());
        assert_eq!(env.width(), 0.0);
        assert!(!env.intersects(&env));
        assert!(!env.intersects_coord(&Coord::new(0.0, 0.0)));
        assert_eq!(env.centre(), None);
    }

    #[test]
    fn intersection_and_distance() {
        let a = Envelope::new(0.0, 2.0, 0.0, 2.0);
        let b = Envelope::new(1.0, 3.0, 1.0, 3.0);
        let c = Envelope::new(5.0, 6.0, 6.0, 7.0);
        assert_eq!(a.intersection(&b), Envelope::new(1.0, 2.0, 1.0, 2.0));
        assert!(a.intersection(&c).is_null());
        assert_eq!(a.distance(&b), 0.0);
        assert_eq!(a.distance(&c), 5.0);
        assert!(a.covers(&Envelope::new(0.5, 1.0, 0.0, 2.0)));
        assert!(!a.covers(&b));
    }

    #[test]
    fn shrink_to_null() {
        let mut env = Envelope::new(0.0, 1.0, 0.0, 10.0);
        env.expand_by(-0.6);
        assert!(env.is_null());
    }

    #[test]
    fn segment_envelopes() {
        let p = |x, y| Coord::new(x, y);
        assert!(Envelope::segment_intersects_coord(p(2.0, 0.0), p(0.0, 2.0), p(1.0, 1.0)));
        assert!(!Envelope::segment_intersects_coord(p(2.0, 0.0), p(0.0, 2.0), p(3.0, 1.0)));
        assert!(Envelope::segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0), p(2.0, 5.0)));
        assert!(!Envelope::segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(1.5, 0.0), p(2.0, 5.0)));
    }

    proptest! {
        #[test]
        fn expansion_covers(
            a in Coord::reasonable(),
            b in Coord::reasonable(),
            c in Coord::reasonable(),
        ) {
            let mut env = Envelope::from_coords(a, b);
            let before = env;
            env.expand_to_include(c);
            prop_assert!(env.covers(&before));
            prop_assert!(env.contains_coord(&c));
            prop_assert!(env.intersects(&before));
        }
    }
}
