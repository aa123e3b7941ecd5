//! High-level runtime engine settings
//!
//! Selects how the leapfrog loop accounts for elapsed time, how often it
//! emits snapshots, and how the reporter renders numbers.

use serde::Deserialize;

/// How `System::t` advances during an outer step
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeAccounting {
    /// Half step added once per body in both drift phases, `bodies * dt` per outer step
    #[default]
    PerBody,
    /// Half step added once per drift phase, `dt` per outer step
    PerPhase,
}

/// When snapshots are written during the kick phase
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Emission {
    /// One snapshot after each body's kick and drift, `bodies` lines per outer step
    #[default]
    PerBody,
    /// One snapshot after every body has been updated
    PerStep,
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub time_accounting: TimeAccounting,
    pub emission: Emission,
    pub precision: Option<usize>, // significant digits, None = shortest round-trip
}

impl Engine {
    /// True when both policies reproduce the original per-body behaviour
    pub fn is_compatibility_mode(&self) -> bool {
        self.time_accounting == TimeAccounting::PerBody && self.emission == Emission::PerBody
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            time_accounting: TimeAccounting::default(),
            emission: Emission::default(),
            precision: Some(6),
        }
    }
}
