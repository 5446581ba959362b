//! Proptest strategies for coordinates, and for small perturbations of
//! hand-picked inputs that tend to find robustness bugs.

use std::num::FpCategory;

use proptest::{arbitrary::any, prop_oneof, strategy::BoxedStrategy, strategy::Strategy};

use crate::geom::Coord;

// Kind of like Arbitrary, but
// - it's a local trait, so we can impl it for whatever we want, and
// - it only returns "reasonable" values.
pub trait Reasonable {
    type Strategy: Strategy<Value = Self>;
    fn reasonable() -> Self::Strategy;
}

impl Reasonable for f64 {
    type Strategy = BoxedStrategy<f64>;

    fn reasonable() -> Self::Strategy {
        (-1e6..1e6).boxed()
    }
}

impl Reasonable for Coord {
    type Strategy = BoxedStrategy<Coord>;

    fn reasonable() -> Self::Strategy {
        (f64::reasonable(), f64::reasonable())
            .prop_map(|(x, y)| Coord::new(x, y))
            .boxed()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum FloatPerturbation {
    /// Perturb by between -128 and 127 ulps.
    Ulp(i8),
    /// Perturb by a bounded additive amount.
    Eps(f64),
}

impl FloatPerturbation {
    fn apply(&self, f: f64) -> f64 {
        match *self {
            FloatPerturbation::Ulp(n) => {
                let steps = n.unsigned_abs() as u64;
                match f.classify() {
                    FpCategory::Nan | FpCategory::Infinite => f,
                    FpCategory::Zero => {
                        let x = f64::from_bits(steps);
                        if n < 0 {
                            -x
                        } else {
                            x
                        }
                    }
                    FpCategory::Subnormal | FpCategory::Normal => {
                        // Moving away from zero increases the magnitude bits.
                        let away = (n > 0) == (f > 0.0);
                        let bits = f.abs().to_bits();
                        let bits = if away { bits + steps } else { bits.saturating_sub(steps) };
                        f.signum() * f64::from_bits(bits)
                    }
                }
            }
            FloatPerturbation::Eps(x) => f + x,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CoordPerturbation {
    pub x: FloatPerturbation,
    pub y: FloatPerturbation,
}

impl CoordPerturbation {
    pub fn apply(&self, c: Coord) -> Coord {
        Coord::new(self.x.apply(c.x), self.y.apply(c.y))
    }
}

/// A recipe for changing one of a list of base cases.
#[derive(Clone, Debug)]
pub enum Perturbation {
    Base {
        idx: usize,
    },
    Coord {
        perturbation: CoordPerturbation,
        idx: usize,
        next: Box<Perturbation>,
    },
    /// Adds a vertex part way along a segment.
    Subdivision {
        // Between 0.0 and 1.0
        t: f64,
        idx: usize,
        next: Box<Perturbation>,
    },
}

pub fn float_perturbation(eps: f64) -> impl Strategy<Value = FloatPerturbation> {
    prop_oneof![
        any::<i8>().prop_map(FloatPerturbation::Ulp),
        (-eps..=eps).prop_map(FloatPerturbation::Eps)
    ]
}

pub fn coord_perturbation(eps: f64) -> impl Strategy<Value = CoordPerturbation> {
    (float_perturbation(eps), float_perturbation(eps)).prop_map(|(x, y)| CoordPerturbation { x, y })
}

pub fn perturbation(eps: f64) -> impl Strategy<Value = Perturbation> {
    let leaf = any::<usize>().prop_map(|idx| Perturbation::Base { idx });
    leaf.prop_recursive(3, 16, 8, move |inner| {
        prop_oneof![
            (coord_perturbation(eps), any::<usize>(), inner.clone()).prop_map(
                |(perturbation, idx, next)| Perturbation::Coord {
                    perturbation,
                    idx,
                    next: Box::new(next),
                }
            ),
            (0.0..1.0, any::<usize>(), inner).prop_map(|(t, idx, next)| Perturbation::Subdivision {
                t,
                idx,
                next: Box::new(next),
            }),
        ]
    })
}

fn index<T>(arr: &[T], idx: usize) -> &T {
    &arr[idx % arr.len()]
}

fn index_mut<T>(arr: &mut [T], idx: usize) -> &mut T {
    &mut arr[idx % arr.len()]
}

/// Applies `pert` to one of `base_cases`, which must all be non-empty.
pub fn realize_perturbation(base_cases: &[Vec<Coord>], pert: &Perturbation) -> Vec<Coord> {
    match pert {
        Perturbation::Base { idx } => index(base_cases, *idx).to_owned(),
        Perturbation::Coord {
            perturbation,
            idx,
            next,
        } => {
            let mut next = realize_perturbation(base_cases, next);
            let c = index_mut(&mut next, *idx);
            *c = perturbation.apply(*c);
            next
        }
        Perturbation::Subdivision { t, idx, next } => {
            let mut next = realize_perturbation(base_cases, next);
            let idx = *idx % next.len();
            let p0 = *index(&next, idx);
            let p1 = *index(&next, idx + 1);
            let mid = Coord::new(p0.x + t * (p1.x - p0.x), p0.y + t * (p1.y - p0.y));
            next.insert(idx + 1, mid);
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ulps() {
        assert_eq!(FloatPerturbation::Ulp(1).apply(1.0), 1.0 + f64::EPSILON);
        assert_eq!(FloatPerturbation::Ulp(-1).apply(-1.0), -1.0 - f64::EPSILON);
        assert_eq!(FloatPerturbation::Ulp(1).apply(0.0), f64::from_bits(1));
        assert_eq!(FloatPerturbation::Ulp(5).apply(f64::INFINITY), f64::INFINITY);
    }
}
