pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, System, Vector2D};
pub use simulation::params::{Parameters, DEFAULT_GUARD};
pub use simulation::engine::{Engine, Emission, TimeAccounting};
pub use simulation::forces::{PairForce, ForceSet, NewtonianGravity};
pub use simulation::reporter::{Reporter, format_general};
pub use simulation::integrator::{leapfrog_step, leapfrog_integrator};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};
pub use configuration::error::ConfigError;
