//! High-level runtime engine settings
//!
//! Selects integrator, collision pass ordering and the runtime switches
//! read at the start of every step

use crate::configuration::config::{EngineConfig, IntegratorConfig, PairOrdering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub integrator: IntegratorConfig, // verlet or euler
    pub pair_ordering: PairOrdering, // sequential or snapshot
    pub elastic_collisions: bool, // false = skip the collision pass
    pub skip_separating: bool, // true = no velocity exchange for pairs moving apart
    pub paused: bool, // true = skip integration
    pub color_map: bool, // renderer colours by speed
}

impl Default for Engine {
    fn default() -> Self {
        Engine::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            integrator: cfg.integrator,
            pair_ordering: cfg.pair_ordering,
            elastic_collisions: cfg.elastic_collisions,
            skip_separating: cfg.skip_separating,
            paused: cfg.paused,
            color_map: cfg.color_map,
        }
    }
}
