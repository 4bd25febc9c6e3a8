//! Random particle generation for resets.

use rand::Rng;

use crate::error::{Result, SandboxError};
use super::params::Parameters;
use super::states::{NVec2, Particle};

/// Distance kept between generated centers and the walls
pub const SPAWN_MARGIN: f64 = 10.0;

/// Draw `params.count` particles:
/// - position uniform in `[-W + margin, W - margin] x [-H + margin, H - margin]`
/// - each velocity component uniform in `[-max_speed, max_speed]`
/// - radius uniform in `[min_radius, max_radius]`
///
/// Fails fast on invalid parameters or a world too small for the margin.
pub fn random_particles<R: Rng + ?Sized>(params: &Parameters, rng: &mut R) -> Result<Vec<Particle>> {
    params.validate()?;
    if params.half_width <= SPAWN_MARGIN || params.half_height <= SPAWN_MARGIN {
        return Err(SandboxError::config(format!(
            "world half-extents ({}, {}) must exceed the spawn margin {SPAWN_MARGIN}",
            params.half_width, params.half_height
        )));
    }

    let x_max = params.half_width - SPAWN_MARGIN;
    let y_max = params.half_height - SPAWN_MARGIN;
    let v_max = params.max_speed;

    (0..params.count)
        .map(|_| {
            let position = NVec2::new(rng.random_range(-x_max..=x_max), rng.random_range(-y_max..=y_max));
            let velocity = NVec2::new(rng.random_range(-v_max..=v_max), rng.random_range(-v_max..=v_max));
            let radius = rng.random_range(params.min_radius..=params.max_radius);
            Particle::new(position, velocity, radius)
        })
        .collect()
}
