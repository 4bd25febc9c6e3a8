//! Build fully-initialized sandbox scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine switches (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System`, particles at t = 0)
//! - active acceleration field (`AccelSet`)
//! - the random generator used by resets
//!
//! The driver (viewer or headless loop) owns one `Scenario`, feeds it frame
//! times through [`Scenario::step`] and user commands through
//! [`Scenario::apply`], and reads [`Scenario::snapshot`] to draw.

use rand::rngs::StdRng;
use rand::{rng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::configuration::config::{BodyConfig, FieldConfig, ScenarioConfig};
use crate::error::{Result, SandboxError};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, ConstantGravity, PointAttractor};
use crate::simulation::generator::random_particles;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, System};
use crate::simulation::step::{simulation_step, StepReport};
use crate::visualization::color_map::{speed_color, Rgb};

/// Zoom multiplier used by `ZoomIn` / `ZoomOut`
pub const ZOOM_STEP: f64 = 1.5;

/// Discrete driver events, applied between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Reset, // regenerate `count` random particles, zoom back to 1
    Clear, // remove every particle
    SpawnAt { position: NVec2, radius: Option<f64> }, // particle at rest, `spawn_radius` when no radius is given
    TogglePause,
    ToggleElasticCollisions,
    ToggleColorMap,
    SetZoom(f64),
    ZoomIn,
    ZoomOut,
    ResizeWorld { half_width: f64, half_height: f64 },
}

/// What the renderer needs for one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub position: NVec2,
    pub radius: f64,
    pub color: Rgb,
}

/// Fully-initialized runtime bundle, built from a [`ScenarioConfig`]
///
/// With the `viewer` feature it is inserted into bevy as a `Resource` and
/// driven by the viewer systems.
#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    rng: StdRng,
}

/// Acceleration set for a configured field
pub fn build_forces(field: &FieldConfig) -> AccelSet {
    match field {
        FieldConfig::Gravity { g } => AccelSet::new().with(ConstantGravity { g: NVec2::from(*g) }),
        FieldConfig::Attractor { center, strength, softening } => AccelSet::new().with(PointAttractor {
            center: NVec2::from(*center),
            strength: *strength,
            softening: *softening,
        }),
        FieldConfig::None => AccelSet::new(),
    }
}

impl Scenario {
    /// Validate `cfg` and build the initial state.
    ///
    /// Explicit `bodies` are used as given; otherwise `count` particles are
    /// drawn from the generator.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters::from(cfg.parameters);
        let engine = Engine::from(&cfg.engine);
        let forces = build_forces(&cfg.engine.field);

        let mut scenario = Self::from_parts(engine, parameters, System::default(), forces)?;
        match cfg.bodies {
            Some(bodies) => {
                let particles = bodies
                    .iter()
                    .map(|bc: &BodyConfig| Particle::new(NVec2::from(bc.x), NVec2::from(bc.v), bc.radius))
                    .collect::<Result<Vec<_>>>()?;
                scenario.system = System::new(particles);
            }
            None => {
                let particles = random_particles(&scenario.parameters, &mut scenario.rng)?;
                scenario.system = System::new(particles);
            }
        }

        info!(
            particles = scenario.system.len(),
            integrator = ?scenario.engine.integrator,
            ordering = ?scenario.engine.pair_ordering,
            "scenario built"
        );
        Ok(scenario)
    }

    /// Assemble a scenario around an existing system.
    pub fn from_parts(engine: Engine, parameters: Parameters, system: System, forces: AccelSet) -> Result<Self> {
        parameters.validate()?;
        let rng = match parameters.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(rng().random()),
        };
        Ok(Self {
            engine,
            parameters,
            system,
            forces,
            rng,
        })
    }

    /// Run one frame of `elapsed` wall-clock seconds.
    pub fn step(&mut self, elapsed: f64) -> StepReport {
        // Split &mut Scenario into &mut fields in one destructuring step
        let Scenario {
            engine,
            parameters,
            system,
            forces,
            ..
        } = self;
        simulation_step(system, engine, parameters, forces, elapsed)
    }

    /// Apply a driver command. A rejected command leaves the scenario as it was.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Reset => {
                let particles = random_particles(&self.parameters, &mut self.rng)?;
                self.system.particles = particles;
                self.parameters.zoom = 1.0;
                info!(particles = self.system.len(), "reset");
            }
            Command::Clear => {
                self.system.clear();
                info!("cleared");
            }
            Command::SpawnAt { position, radius } => {
                let radius = radius.unwrap_or(self.parameters.spawn_radius);
                let room = self.parameters.half_width.min(self.parameters.half_height);
                if radius > room {
                    return Err(SandboxError::config(format!(
                        "spawn radius {radius} exceeds the world half-extent {room}"
                    )));
                }
                let p = Particle::at_rest(position, radius)?;
                self.system.particles.push(p);
                debug!(x = position.x, y = position.y, radius, "spawned particle");
            }
            Command::TogglePause => {
                self.engine.paused = !self.engine.paused;
                info!(paused = self.engine.paused, "pause toggled");
            }
            Command::ToggleElasticCollisions => {
                self.engine.elastic_collisions = !self.engine.elastic_collisions;
                info!(enabled = self.engine.elastic_collisions, "elastic collisions toggled");
            }
            Command::ToggleColorMap => {
                self.engine.color_map = !self.engine.color_map;
                debug!(enabled = self.engine.color_map, "colour map toggled");
            }
            Command::SetZoom(zoom) => self.set_zoom(zoom)?,
            Command::ZoomIn => self.set_zoom(self.parameters.zoom * ZOOM_STEP)?,
            Command::ZoomOut => self.set_zoom(self.parameters.zoom / ZOOM_STEP)?,
            Command::ResizeWorld { half_width, half_height } => {
                let resized = Parameters { half_width, half_height, ..self.parameters.clone() };
                resized.validate()?;
                self.parameters = resized;
                info!(half_width, half_height, "world resized");
            }
        }
        Ok(())
    }

    fn set_zoom(&mut self, zoom: f64) -> Result<()> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(SandboxError::config(format!("zoom must be finite and > 0, got {zoom}")));
        }
        self.parameters.zoom = zoom;
        debug!(zoom, "zoom set");
        Ok(())
    }

    /// Read-only view of every particle in insertion order.
    pub fn snapshot(&self) -> Vec<ParticleView> {
        self.system
            .particles
            .iter()
            .map(|p| ParticleView {
                position: p.position,
                radius: p.radius(),
                color: if self.engine.color_map {
                    speed_color(&p.velocity, self.parameters.max_speed)
                } else {
                    Rgb::WHITE
                },
            })
            .collect()
    }
}
