//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - time step and number of outer steps,
//! - gravitational constant `G`,
//! - per-axis singularity guard used by the force law

/// Per-axis separation at or below which a pair exerts no force
pub const DEFAULT_GUARD: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // time step dt
    pub iterations: usize, // number of outer steps
    pub G: f64, // gravitational constant
    pub guard: f64, // singularity guard epsilon
}
