//! Acceleration fields for the sandbox
//!
//! A field is sampled once per particle per step. Terms must be
//! deterministic and free of side effects, the Verlet step averages two
//! samples and relies on that.

use crate::simulation::states::{NVec2, Particle};

/// Gravity used when a scenario does not pick a field
pub const DEFAULT_GRAVITY: [f64; 2] = [0.0, -5.0];

/// Collection of acceleration terms (gravity, attractors, ...)
/// Each term implements [`Acceleration`] and their contributions are summed
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set (free motion)
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration felt by `particle` at time `t`
    pub fn accel_at(&self, t: f64, particle: &Particle) -> NVec2 {
        self.terms
            .iter()
            .fold(NVec2::zeros(), |acc, term| acc + term.acceleration(t, particle))
    }
}

impl Default for AccelSet {
    /// Constant downward gravity
    fn default() -> Self {
        AccelSet::new().with(ConstantGravity::default())
    }
}

/// Acceleration source queried per particle
pub trait Acceleration {
    fn acceleration(&self, t: f64, particle: &Particle) -> NVec2;
}

/// Uniform field, independent of state
#[derive(Debug, Clone, Copy)]
pub struct ConstantGravity {
    pub g: NVec2,
}

impl Default for ConstantGravity {
    fn default() -> Self {
        Self { g: NVec2::from(DEFAULT_GRAVITY) }
    }
}

impl Acceleration for ConstantGravity {
    fn acceleration(&self, _t: f64, _particle: &Particle) -> NVec2 {
        self.g
    }
}

/// Pull toward a fixed point, falling off with softened inverse square
/// distance. `softening` keeps the field finite at the center.
#[derive(Debug, Clone, Copy)]
pub struct PointAttractor {
    pub center: NVec2,
    pub strength: f64,
    pub softening: f64,
}

impl Acceleration for PointAttractor {
    fn acceleration(&self, _t: f64, particle: &Particle) -> NVec2 {
        // r points from the particle to the center
        let r = self.center - particle.position;
        let d2 = r.norm_squared() + self.softening * self.softening;
        if d2 == 0.0 {
            return NVec2::zeros();
        }
        let inv_r = d2.sqrt().recip();
        // a = strength * r / |r_soft|^3
        self.strength * inv_r * inv_r * inv_r * r
    }
}
