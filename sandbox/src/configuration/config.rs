//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – switches (integrator, pair ordering, collisions, pause, colour map, field)
//! - [`ParametersConfig`] – world extents, wall damping, time scale, generator ranges
//! - [`BodyConfig`]       – optional explicit initial particles
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document is a valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"        # or "euler"
//!   pair_ordering: "sequential" # or "snapshot"
//!   elastic_collisions: true
//!   skip_separating: false      # true: no exchange for pairs moving apart
//!   paused: false
//!   color_map: true
//!   field:
//!     kind: gravity
//!     g: [0.0, -5.0]
//!
//! parameters:
//!   half_width: 800.0
//!   half_height: 600.0
//!   damp_factor: 0.5
//!   time_scale: 15.0
//!   max_speed: 100.0
//!   min_radius: 2.0
//!   max_radius: 10.0
//!   count: 2000
//!   spawn_radius: 5.0
//!   seed: 42
//!
//! bodies:                       # optional, replaces random generation
//!   - x: [-6.0, 0.0]
//!     v: [10.0, 0.0]
//!     radius: 5.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Which integrator advances the particles
/// `integrator: "verlet"` or `integrator: "euler"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "verlet")] // Velocity Verlet, carries the previous acceleration between steps
    Verlet,

    #[serde(rename = "euler")] // Explicit Euler, velocity then position
    Euler,
}

/// How the collision pass orders reads and writes within one frame
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairOrdering {
    #[default]
    #[serde(rename = "sequential")] // later pairs see corrections made by earlier ones
    Sequential,

    #[serde(rename = "snapshot")] // all pairs read the state at pass start
    Snapshot,
}

/// Acceleration field applied during integration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldConfig {
    Gravity { g: [f64; 2] },
    Attractor { center: [f64; 2], strength: f64, #[serde(default)] softening: f64 },
    None,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig::Gravity { g: crate::simulation::forces::DEFAULT_GRAVITY }
    }
}

/// Engine switches, all of them can be flipped at runtime
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig,
    pub pair_ordering: PairOrdering,
    pub elastic_collisions: bool, // off: skip the collision pass
    pub skip_separating: bool, // on: pairs already moving apart keep their velocities
    pub paused: bool, // on: skip integration
    pub color_map: bool, // velocity colours instead of plain white
    pub field: FieldConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::default(),
            pair_ordering: PairOrdering::default(),
            elastic_collisions: false,
            skip_separating: false,
            paused: false,
            color_map: true,
            field: FieldConfig::default(),
        }
    }
}

/// World and generator parameters
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub half_width: f64, // world spans [-half_width, half_width]
    pub half_height: f64, // world spans [-half_height, half_height]
    pub zoom: f64, // view only
    pub damp_factor: f64, // velocity kept after a wall bounce
    pub time_scale: f64, // simulated seconds per wall-clock second
    pub max_speed: f64, // generator speed bound, also the colour map scale
    pub min_radius: f64,
    pub max_radius: f64,
    pub count: usize, // particles created by a reset
    pub spawn_radius: f64, // radius of click-spawned particles
    pub seed: Option<u64>, // None: fresh entropy each run
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            half_width: 800.0,
            half_height: 600.0,
            zoom: 1.0,
            damp_factor: 0.5,
            time_scale: 15.0,
            max_speed: 100.0,
            min_radius: 2.0,
            max_radius: 10.0,
            count: 2000,
            spawn_radius: 5.0,
            seed: None,
        }
    }
}

/// Explicit initial state for one particle
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // position
    #[serde(default)]
    pub v: [f64; 2], // velocity
    pub radius: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Option<Vec<BodyConfig>>, // None: generate `count` random particles
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
