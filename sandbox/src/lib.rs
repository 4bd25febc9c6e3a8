pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use error::{Result, SandboxError};

pub use simulation::states::{NVec2, Particle, System};
pub use simulation::forces::{AccelSet, Acceleration, ConstantGravity, PointAttractor};
pub use simulation::integrator::{euler_step, integrate, verlet_step};
pub use simulation::boundary::{resolve_boundary, Bounds, WallHits};
pub use simulation::collision::{colliding_pairs, overlap_slack, overlaps, resolve_collisions, CollisionReport};
pub use simulation::response::{resolve_pair, PairOutcome};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::step::{simulation_step, StepReport};
pub use simulation::scenario::{Command, ParticleView, Scenario};

pub use configuration::config::{IntegratorConfig, PairOrdering, FieldConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::color_map::{speed_color, Rgb};
#[cfg(feature = "viewer")]
pub use visualization::viewer::run_2d;

pub use benchmark::benchmark::{bench_step, bench_pair_ordering};
