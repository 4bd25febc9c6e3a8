//! One frame of the sandbox.
//!
//! The pipeline is fixed and runs to completion every call:
//! 1. `dt = time_scale * elapsed`
//! 2. collision pass, if elastic collisions are on
//! 3. integration, unless paused
//! 4. wall clamp for every particle, always

use tracing::trace;

use super::boundary::resolve_boundary;
use super::collision::{resolve_collisions, CollisionReport};
use super::engine::Engine;
use super::forces::AccelSet;
use super::integrator::integrate;
use super::params::Parameters;
use super::states::System;

/// What a single frame did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub dt: f64,
    pub collisions: Option<CollisionReport>, // None when the pass was skipped
    pub integrated: bool,
    pub wall_hits: usize, // particles touched by at least one wall
}

/// Advance `sys` by one frame of `elapsed` wall-clock seconds.
///
/// Negative or non-finite `elapsed` counts as zero: the frame still runs the
/// collision and wall phases but nothing moves under integration.
pub fn simulation_step(
    sys: &mut System,
    engine: &Engine,
    params: &Parameters,
    forces: &AccelSet,
    elapsed: f64,
) -> StepReport {
    let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
    let dt = params.time_scale * elapsed;
    let mut report = StepReport { dt, ..Default::default() };

    if engine.elastic_collisions {
        report.collisions = Some(resolve_collisions(
            &mut sys.particles,
            params.slack(),
            &engine.pair_ordering,
            engine.skip_separating,
        ));
    }

    if !engine.paused {
        integrate(sys, forces, &engine.integrator, dt);
        report.integrated = true;
    }

    let bounds = params.bounds();
    for p in sys.particles.iter_mut() {
        if resolve_boundary(p, &bounds, params.damp_factor).any() {
            report.wall_hits += 1;
        }
    }

    trace!(
        dt,
        particles = sys.particles.len(),
        wall_hits = report.wall_hits,
        "step"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{NVec2, Particle};

    fn still_system() -> System {
        System::new(vec![Particle::at_rest(NVec2::new(0.0, 0.0), 2.0).unwrap()])
    }

    #[test]
    fn paused_frame_does_not_integrate() {
        let mut sys = still_system();
        let engine = Engine { paused: true, ..Engine::default() };
        let report = simulation_step(&mut sys, &engine, &Parameters::default(), &AccelSet::default(), 0.1);
        assert!(!report.integrated);
        assert_eq!(sys.particles[0].position, NVec2::zeros());
        assert_eq!(sys.t, 0.0);
    }

    #[test]
    fn dt_is_scaled_elapsed_time() {
        let mut sys = still_system();
        let params = Parameters { time_scale: 4.0, ..Parameters::default() };
        let report = simulation_step(&mut sys, &Engine::default(), &params, &AccelSet::default(), 0.25);
        assert_eq!(report.dt, 1.0);
        assert!((sys.t - 1.0).abs() < 1e-12);
        // gravity pulled it down
        assert!(sys.particles[0].velocity.y < 0.0);
    }

    #[test]
    fn negative_elapsed_is_ignored() {
        let mut sys = still_system();
        let report = simulation_step(&mut sys, &Engine::default(), &Parameters::default(), &AccelSet::default(), -1.0);
        assert_eq!(report.dt, 0.0);
        assert_eq!(sys.particles[0].position, NVec2::zeros());
    }

    #[test]
    fn collision_pass_only_when_enabled() {
        let mut sys = still_system();
        let params = Parameters::default();
        let off = simulation_step(&mut sys, &Engine::default(), &params, &AccelSet::new(), 0.01);
        assert!(off.collisions.is_none());
        let engine = Engine { elastic_collisions: true, ..Engine::default() };
        let on = simulation_step(&mut sys, &engine, &params, &AccelSet::new(), 0.01);
        assert_eq!(on.collisions.map(|c| c.tested), Some(0));
    }
}
