//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – time accounting, emission and number formatting
//! - [`ParametersConfig`] – time step, iteration count and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The built-in four-body system written as YAML:
//!
//! ```yaml
//! engine:
//!   time_accounting: per_body   # or per_phase
//!   emission: per_body          # or per_step
//!   precision: 6                # significant digits, omit for round-trip output
//!
//! parameters:
//!   h0: 0.2                     # fixed step size
//!   iterations: 2000            # number of outer steps
//!   G: 0.001                    # gravitational constant
//!   guard: 0.1                  # per-axis singularity guard
//!   body_count: 4               # optional, must match `bodies`
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.0e8
//!   - x: [ 70.0, -150.0 ]
//!     v: [ 12.0, -6.0 ]
//!     m: 1000.0
//!   - x: [ 90.0, 90.0 ]
//!     v: [ 15.0, -15.0 ]
//!     m: 9000.0
//!   - x: [ 50.0, -50.0 ]
//!     v: [ -20.0, -20.0 ]
//!     m: 400.0
//! ```
//!
//! Every field of `engine` and the `guard` / `body_count` parameters may be
//! omitted. [`ScenarioConfig::validate`] rejects anything the integrator cannot
//! run before a single step is taken.

use serde::Deserialize;

use crate::configuration::error::ConfigError;
use crate::simulation::engine::{Emission, TimeAccounting};
use crate::simulation::params::DEFAULT_GUARD;

fn default_precision() -> Option<usize> {
    Some(6)
}

fn default_guard() -> f64 {
    DEFAULT_GUARD
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub time_accounting: TimeAccounting, // per-body half-step bumps or once per phase
    #[serde(default)]
    pub emission: Emission, // snapshot after every body or once per outer step
    #[serde(default = "default_precision")]
    pub precision: Option<usize>, // significant digits in the output
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_accounting: TimeAccounting::default(),
            emission: Emission::default(),
            precision: default_precision(),
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub h0: f64,           // time step size
    pub iterations: usize, // number of outer steps
    pub G: f64,            // gravitational constant
    #[serde(default = "default_guard")]
    pub guard: f64,        // per-axis singularity guard
    #[serde(default)]
    pub body_count: Option<usize>, // expected number of bodies
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position `[x, y]` in simulation units
    pub v: Vec<f64>, // Initial velocity `[vx, vy]` in simulation units per time unit
    pub m: f64,      // Mass of the body, finite and positive
}

impl BodyConfig {
    pub fn new(x: [f64; 2], v: [f64; 2], m: f64) -> Self {
        Self {
            x: x.to_vec(),
            v: v.to_vec(),
            m,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Time accounting, emission and formatting
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // Initial state of every body, in output order
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    /// Check every precondition the integrator relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;

        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }
        if let Some(expected) = p.body_count {
            if expected != self.bodies.len() {
                return Err(ConfigError::BodyCountMismatch {
                    expected,
                    actual: self.bodies.len(),
                });
            }
        }
        if !p.h0.is_finite() || p.h0 <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(p.h0));
        }
        if !p.G.is_finite() {
            return Err(ConfigError::InvalidGravitationalConstant(p.G));
        }
        if !p.guard.is_finite() || p.guard < 0.0 {
            return Err(ConfigError::InvalidGuard(p.guard));
        }
        if self.engine.precision == Some(0) {
            return Err(ConfigError::InvalidPrecision);
        }

        for (index, b) in self.bodies.iter().enumerate() {
            for (field, values) in [("x", &b.x), ("v", &b.v)] {
                if values.len() != 2 {
                    return Err(ConfigError::WrongDimension {
                        index,
                        field,
                        len: values.len(),
                    });
                }
                if values.iter().any(|c| !c.is_finite()) {
                    return Err(ConfigError::NonFiniteState { index, field });
                }
            }
            if !b.m.is_finite() || b.m <= 0.0 {
                return Err(ConfigError::InvalidMass { index, mass: b.m });
            }
        }

        Ok(())
    }
}

impl Default for ScenarioConfig {
    /// Sun-like central mass with three orbiting planets
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig {
                h0: 0.2,
                iterations: 2000,
                G: 0.001,
                guard: DEFAULT_GUARD,
                body_count: Some(4),
            },
            bodies: vec![
                BodyConfig::new([0.0, 0.0], [0.0, 0.0], 1.0e8),
                BodyConfig::new([70.0, -150.0], [12.0, -6.0], 1000.0),
                BodyConfig::new([90.0, 90.0], [15.0, -15.0], 9000.0),
                BodyConfig::new([50.0, -50.0], [-20.0, -20.0], 400.0),
            ],
        }
    }
}
