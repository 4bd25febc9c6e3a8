//! Core state types for the particle sandbox.
//!
//! - `Particle` one circular body, mass is its radius
//! - `System`   the particle list plus the simulation clock `t`

use nalgebra::Vector2;

use crate::error::{Result, SandboxError};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: NVec2, // center, world units
    pub velocity: NVec2, // units per second
    pub previous_acceleration: NVec2, // last field sample, read by the Verlet step
    radius: f64, // > 0, fixed at creation
}

impl Particle {
    /// Create a particle with zero integrator state.
    ///
    /// Errors: `SandboxError::Configuration` if `radius` is not finite and
    /// strictly positive, or if position/velocity hold NaN or infinity.
    pub fn new(position: NVec2, velocity: NVec2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SandboxError::config(format!(
                "particle radius must be finite and > 0, got {radius}"
            )));
        }
        if !position.iter().all(|c| c.is_finite()) {
            return Err(SandboxError::config("particle position must be finite"));
        }
        if !velocity.iter().all(|c| c.is_finite()) {
            return Err(SandboxError::config("particle velocity must be finite"));
        }
        Ok(Self {
            position,
            velocity,
            previous_acceleration: NVec2::zeros(),
            radius,
        })
    }

    /// Particle at rest, as created by a spawn click.
    pub fn at_rest(position: NVec2, radius: f64) -> Result<Self> {
        Self::new(position, NVec2::zeros(), radius)
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Mass is the radius, never set independently.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity.norm_squared()
    }

    #[inline]
    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub particles: Vec<Particle>, // render order is insertion order
    pub t: f64, // simulated time, only advances while unpaused
}

impl System {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drop every particle. The clock keeps running.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Average velocity over all particles, zero for an empty system.
    pub fn mean_velocity(&self) -> NVec2 {
        if self.particles.is_empty() {
            return NVec2::zeros();
        }
        let sum = self
            .particles
            .iter()
            .fold(NVec2::zeros(), |acc, p| acc + p.velocity);
        sum / self.particles.len() as f64
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub fn momentum(&self) -> NVec2 {
        self.particles
            .iter()
            .fold(NVec2::zeros(), |acc, p| acc + p.momentum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_tracks_radius() -> Result<()> {
        let p = Particle::new(NVec2::new(1.0, 2.0), NVec2::new(3.0, 4.0), 2.5)?;
        assert_eq!(p.mass(), 2.5);
        assert_eq!(p.previous_acceleration, NVec2::zeros());
        // |v|^2 = 25, KE = 0.5 * 2.5 * 25
        assert!((p.kinetic_energy() - 31.25).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn non_positive_radius_rejected() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Particle::at_rest(NVec2::zeros(), r).unwrap_err();
            assert!(err.to_string().contains("radius"), "radius {r} accepted");
        }
    }

    #[test]
    fn non_finite_state_rejected() {
        let err = Particle::new(NVec2::new(f64::NAN, 0.0), NVec2::zeros(), 1.0).unwrap_err();
        assert!(err.to_string().contains("position"));
        let err = Particle::new(NVec2::zeros(), NVec2::new(0.0, f64::INFINITY), 1.0).unwrap_err();
        assert!(err.to_string().contains("velocity"));
    }

    #[test]
    fn mean_velocity_of_empty_system_is_zero() {
        assert_eq!(System::default().mean_velocity(), NVec2::zeros());
    }

    #[test]
    fn mean_velocity_averages() -> Result<()> {
        let sys = System::new(vec![
            Particle::new(NVec2::zeros(), NVec2::new(2.0, 0.0), 1.0)?,
            Particle::new(NVec2::zeros(), NVec2::new(0.0, -4.0), 3.0)?,
        ]);
        assert_eq!(sys.mean_velocity(), NVec2::new(1.0, -2.0));
        // momentum weights by radius
        assert_eq!(sys.momentum(), NVec2::new(2.0, -12.0));
        Ok(())
    }
}
