//! Numerical and physical parameters for the sandbox
//!
//! `Parameters` holds runtime settings:
//! - world half-extents and wall damping,
//! - time scale applied to wall-clock frame time,
//! - generator ranges (speed, radius, count) and spawn radius,
//! - camera zoom, which is carried here for the renderer only
//!
//! Passed explicitly to every step; there is no global instance.

use crate::configuration::config::ParametersConfig;
use crate::error::{Result, SandboxError};
use super::boundary::Bounds;
use super::collision::overlap_slack;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub half_width: f64, // world half-extent along x
    pub half_height: f64, // world half-extent along y
    pub zoom: f64, // view scale, never read by physics
    pub damp_factor: f64, // velocity kept after a wall bounce
    pub time_scale: f64, // dt = time_scale * elapsed
    pub max_speed: f64, // generator speed bound and colour map scale
    pub min_radius: f64, // generator radius lower bound, sets the detection slack
    pub max_radius: f64, // generator radius upper bound
    pub count: usize, // particles created by a reset
    pub spawn_radius: f64, // radius of spawned particles
    pub seed: Option<u64>, // deterministic generator seed
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters::from(ParametersConfig::default())
    }
}

impl From<ParametersConfig> for Parameters {
    fn from(cfg: ParametersConfig) -> Self {
        Self {
            half_width: cfg.half_width,
            half_height: cfg.half_height,
            zoom: cfg.zoom,
            damp_factor: cfg.damp_factor,
            time_scale: cfg.time_scale,
            max_speed: cfg.max_speed,
            min_radius: cfg.min_radius,
            max_radius: cfg.max_radius,
            count: cfg.count,
            spawn_radius: cfg.spawn_radius,
            seed: cfg.seed,
        }
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SandboxError::config(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

impl Parameters {
    /// Reject values the kernel cannot run with. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        positive("half_width", self.half_width)?;
        positive("half_height", self.half_height)?;
        positive("zoom", self.zoom)?;
        positive("max_speed", self.max_speed)?;
        positive("min_radius", self.min_radius)?;
        positive("max_radius", self.max_radius)?;
        positive("spawn_radius", self.spawn_radius)?;
        if self.min_radius > self.max_radius {
            return Err(SandboxError::config(format!(
                "min_radius ({}) must not exceed max_radius ({})",
                self.min_radius, self.max_radius
            )));
        }
        // a disc wider than the world would be clamped against both opposite walls
        let largest = self.max_radius.max(self.spawn_radius);
        if self.half_width < largest || self.half_height < largest {
            return Err(SandboxError::config(format!(
                "world half-extents ({}, {}) must be at least the largest radius {largest}",
                self.half_width, self.half_height
            )));
        }
        if !(self.damp_factor > 0.0 && self.damp_factor < 1.0) {
            return Err(SandboxError::config(format!(
                "damp_factor must lie in (0, 1), got {}",
                self.damp_factor
            )));
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(SandboxError::config(format!(
                "time_scale must be finite and >= 0, got {}",
                self.time_scale
            )));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            half_width: self.half_width,
            half_height: self.half_height,
        }
    }

    /// Detection slack for the collision pass
    pub fn slack(&self) -> f64 {
        overlap_slack(self.min_radius)
    }
}
