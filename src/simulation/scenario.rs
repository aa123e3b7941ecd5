//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it, and produces the
//! runtime bundle `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)

use std::io::{self, Write};

use log::{debug, info};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::leapfrog_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::reporter::Reporter;
use crate::simulation::states::{Body, System, Vector2D};

/// Fully-initialized simulation, exclusively owning its bodies for the run
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body`, zeroed accumulators
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body::new(
            Vector2D::new(bc.x[0], bc.x[1]),
            Vector2D::new(bc.v[0], bc.v[1]),
            bc.m,
        )).collect();

        // Initial system state: bodies at t = 0
        let system = System::new(bodies);

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            iterations: p_cfg.iterations,
            G: p_cfg.G,
            guard: p_cfg.guard,
        };

        let e_cfg = cfg.engine;
        let engine = Engine {
            time_accounting: e_cfg.time_accounting,
            emission: e_cfg.emission,
            precision: e_cfg.precision,
        };
        if !engine.is_compatibility_mode() {
            debug!(
                "engine running with time accounting {:?}, emission {:?}",
                engine.time_accounting, engine.emission
            );
        }

        // Forces: register the guarded Newtonian gravity law
        let forces = ForceSet::new().with(NewtonianGravity {
            G: parameters.G,
            guard: parameters.guard,
        });

        info!(
            "built scenario: {} bodies, dt = {}, {} steps, G = {}",
            system.bodies.len(),
            parameters.h0,
            parameters.iterations,
            parameters.G
        );

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }

    /// Reporter on `out` using this scenario's number format
    pub fn reporter<W: Write>(&self, out: W) -> Reporter<W> {
        Reporter::new(out, self.engine.precision)
    }

    /// Run every outer step, writing snapshots to `reporter`
    pub fn run<W: Write>(&mut self, reporter: &mut Reporter<W>) -> io::Result<()> {
        let Scenario {
            engine,
            parameters,
            system,
            forces,
        } = self;

        leapfrog_integrator(system, forces, parameters, engine, reporter)?;
        reporter.flush()
    }
}
