//! Fixed-step leapfrog integrator for the n-body system
//!
//! One outer step is drift / force / kick:
//! - Phase A: `x += v * dt/2` for every body
//! - Phase B: pairwise forces summed into the accumulators by the `ForceSet`
//! - Phase C: per body, in index order: `v += f * dt/m`, `x += v * dt/2`,
//!   snapshot, clear `f`
//!
//! With the default engine modes the half-step time bump happens once per body in
//! both drift phases (so one outer step advances `sys.t` by `bodies * dt`) and a
//! snapshot is written after every body's kick, while later bodies still hold
//! their half-drifted positions.

use std::io::{self, Write};

use log::trace;

use super::engine::{Emission, Engine, TimeAccounting};
use super::forces::ForceSet;
use super::params::Parameters;
use super::reporter::Reporter;
use super::states::{System, Vector2D};

/// Advance the system by one outer step
/// Updates positions, velocities, accumulators and `sys.t` in place and writes
/// snapshots to `reporter` as selected by `engine.emission`
pub fn leapfrog_step<W: Write>(
    sys: &mut System,
    forces: &ForceSet,
    params: &Parameters,
    engine: &Engine,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    let dt = params.h0; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2

    // Drift: x_n+1/2 = x_n + (dt/2) * v_n
    for b in sys.bodies.iter_mut() {
        b.x += b.v * half_dt;
        if engine.time_accounting == TimeAccounting::PerBody {
            sys.t += half_dt;
        }
    }
    if engine.time_accounting == TimeAccounting::PerPhase {
        sys.t += half_dt;
    }

    // f at the half-drifted positions, every pair once
    forces.accumulate_forces(&mut sys.bodies);

    // Kick and second drift, body by body
    for i in 0..n {
        {
            let b = &mut sys.bodies[i];
            b.v += b.f * (dt / b.m);
            b.x += b.v * half_dt;
        }

        if engine.emission == Emission::PerBody {
            reporter.emit(&sys.bodies)?;
        }

        sys.bodies[i].f = Vector2D::zeros();

        if engine.time_accounting == TimeAccounting::PerBody {
            sys.t += half_dt;
        }
    }

    if engine.time_accounting == TimeAccounting::PerPhase {
        sys.t += half_dt;
    }
    if engine.emission == Emission::PerStep {
        reporter.emit(&sys.bodies)?;
    }

    trace!("outer step done, t = {}", sys.t);
    Ok(())
}

/// Run `params.iterations` outer steps, no early exit
pub fn leapfrog_integrator<W: Write>(
    sys: &mut System,
    forces: &ForceSet,
    params: &Parameters,
    engine: &Engine,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    for _ in 0..params.iterations {
        leapfrog_step(sys, forces, params, engine, reporter)?;
    }
    Ok(())
}
