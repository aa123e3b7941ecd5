//! Core state types for the leapfrog simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` carries mass, force accumulator, velocity and position as `Vector2D`
//! - `System` holds the ordered list of bodies and the running elapsed time `t`
//!
//! `Vector2D` is a plain nalgebra value type, so add/subtract/scale/magnitude are
//! `a + b`, `a - b`, `a * k` and `a.norm()`. Every operator returns a fresh value.

use nalgebra::Vector2;
pub type Vector2D = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: Vector2D, // position
    pub v: Vector2D, // velocity
    pub m: f64, // mass, constant after creation
    pub f: Vector2D, // force accumulator, cleared once consumed by the kick
}

impl Body {
    /// New body at rest with respect to forces (zeroed accumulator)
    pub fn new(x: Vector2D, v: Vector2D, m: f64) -> Self {
        Self {
            x,
            v,
            m,
            f: Vector2D::zeros(),
        }
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> Vector2D {
        self.v * self.m
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // elapsed time
}

impl System {
    /// System at t = 0
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Mass-weighted mean position, origin for a massless system
    pub fn center_of_mass(&self) -> Vector2D {
        let total_mass = self.total_mass();
        if total_mass <= 0.0 {
            return Vector2D::zeros();
        }

        let weighted = self
            .bodies
            .iter()
            .fold(Vector2D::zeros(), |acc, b| acc + b.x * b.m);
        weighted / total_mass
    }

    pub fn total_momentum(&self) -> Vector2D {
        self.bodies
            .iter()
            .fold(Vector2D::zeros(), |acc, b| acc + b.momentum())
    }

    /// Sum of 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum()
    }
}
