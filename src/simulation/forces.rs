//! Pairwise force contributors for the leapfrog engine
//!
//! Defines the `PairForce` trait, the axis-guarded Newtonian gravity law and
//! `ForceSet`, which sums every registered term over all unordered pairs into
//! the bodies' force accumulators

use log::trace;

use crate::simulation::states::{Body, Vector2D};

/// Trait for pairwise force sources
/// `pair_force(a, b)` returns the term that the accumulator adds to `b`
/// and subtracts from `a`
pub trait PairForce {
    fn pair_force(&self, a: &Body, b: &Body) -> Vector2D;
}

/// Newtonian gravity with a per-axis singularity guard
///
/// The returned vector has magnitude `G * ma * mb / d^2` and points from `b`
/// back toward `a`, so adding it to `b` and subtracting it from `a` makes the
/// pair attract.
///
/// The guard compares each axis of the separation independently: a pair with
/// `|dx| <= guard` and `|dy| <= guard` exerts exactly zero force, while a pair at
/// `(guard + 0.05, 0)` is not suppressed even though it is close. Separations just
/// outside the guard can still produce very large forces.
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub guard: f64, // per-axis epsilon
}

impl NewtonianGravity {
    fn is_guarded(&self, r: &Vector2D) -> bool {
        r.x.abs() <= self.guard && r.y.abs() <= self.guard
    }
}

impl PairForce for NewtonianGravity {
    fn pair_force(&self, a: &Body, b: &Body) -> Vector2D {
        // r is the displacement vector from a to b
        let r = b.x - a.x;

        if self.is_guarded(&r) {
            trace!("singularity guard suppressed pair at separation ({}, {})", r.x, r.y);
            return Vector2D::zeros();
        }

        let d = r.norm();

        // isotropic magnitude, rescaled per axis by the unit direction -r/d
        let coupling = self.G * a.m * b.m;
        let magnitude = coupling * d.powf(-2.0);

        Vector2D::new(magnitude * (-r.x / d), magnitude * (-r.y / d))
    }
}

/// Collection of pairwise force terms
/// Each term implements [`PairForce`] and their contributions are summed
/// into each body's force accumulator
pub struct ForceSet {
    terms: Vec<Box<dyn PairForce + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PairForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Add every pair's contribution into the bodies' accumulators
    /// - visits each unordered pair (i, j) with i < j exactly once
    /// - `f[j] += term(i, j)` and `f[i] -= term(i, j)`
    /// - accumulators are not cleared first
    pub fn accumulate_forces(&self, bodies: &mut [Body]) {
        let n = bodies.len();

        for i in 0..n {
            for j in (i + 1)..n {
                for term in &self.terms {
                    let f = term.pair_force(&bodies[i], &bodies[j]);
                    bodies[j].f += f;
                    bodies[i].f -= f;
                }
            }
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}
