//! Error types for scenario configuration.

use thiserror::Error;

/// Reasons a scenario is rejected before the simulation starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The scenario lists no bodies.
    #[error("scenario has no bodies")]
    NoBodies,

    /// `body_count` disagrees with the body list.
    #[error("body count mismatch: expected {expected}, got {actual}")]
    BodyCountMismatch {
        /// Declared body count.
        expected: usize,
        /// Number of bodies listed.
        actual: usize,
    },

    /// Time step is zero, negative or not finite.
    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    /// Gravitational constant is not finite.
    #[error("gravitational constant must be finite, got {0}")]
    InvalidGravitationalConstant(f64),

    /// Singularity guard is negative or not finite.
    #[error("singularity guard must be finite and non-negative, got {0}")]
    InvalidGuard(f64),

    /// Output precision asks for zero significant digits.
    #[error("output precision must be at least one significant digit")]
    InvalidPrecision,

    /// Position or velocity is not two-dimensional.
    #[error("body {index}: `{field}` must have 2 components, got {len}")]
    WrongDimension {
        /// Body index in the scenario.
        index: usize,
        /// Offending field name.
        field: &'static str,
        /// Number of components given.
        len: usize,
    },

    /// Position or velocity has a NaN or infinite component.
    #[error("body {index}: `{field}` has a non-finite component")]
    NonFiniteState {
        /// Body index in the scenario.
        index: usize,
        /// Offending field name.
        field: &'static str,
    },

    /// Mass is zero, negative or not finite.
    #[error("body {index}: mass must be finite and positive, got {mass}")]
    InvalidMass {
        /// Body index in the scenario.
        index: usize,
        /// Offending mass.
        mass: f64,
    },
}
