//! Fixed-step time integrators for the particle sandbox
//!
//! Provides a per-particle velocity-Verlet step (default) and an explicit
//! Euler step, both sampling accelerations from an `AccelSet`.
//! `dt` comes from the driver, already scaled by the time scale.

use crate::configuration::config::IntegratorConfig;
use super::forces::AccelSet;
use super::states::{Particle, System};

/// Advance one particle by `dt` using velocity-Verlet.
///
/// The acceleration sampled in the previous step is carried in
/// `previous_acceleration`, so each step costs one field evaluation.
/// `dt <= 0` leaves the particle untouched.
pub fn verlet_step(p: &mut Particle, forces: &AccelSet, t: f64, dt: f64) {
    if dt <= 0.0 {
        return;
    }
    let half_dt = 0.5 * dt; // half step dt/2
    let a_old = p.previous_acceleration;

    // x_n+1 = x_n + dt v_n + (dt^2 / 2) a_n
    p.position += dt * p.velocity + (dt * half_dt) * a_old;

    // a_n+1 sampled at the new position
    let a_new = forces.accel_at(t + dt, p);

    // v_n+1 = v_n + (dt / 2)(a_n + a_n+1)
    p.velocity += half_dt * (a_old + a_new);
    p.previous_acceleration = a_new;
}

/// Advance one particle by `dt` using explicit Euler.
/// Velocity first, then position with the updated velocity.
pub fn euler_step(p: &mut Particle, forces: &AccelSet, t: f64, dt: f64) {
    if dt <= 0.0 {
        return;
    }
    let a = forces.accel_at(t, p);
    p.velocity += dt * a;
    p.position += dt * p.velocity;
    p.previous_acceleration = a;
}

/// Advance every particle of `sys` by `dt` with the selected integrator
/// and move the clock forward.
pub fn integrate(sys: &mut System, forces: &AccelSet, integrator: &IntegratorConfig, dt: f64) {
    if dt <= 0.0 {
        return;
    }
    let t = sys.t;
    match integrator {
        IntegratorConfig::Verlet => {
            for p in sys.particles.iter_mut() {
                verlet_step(p, forces, t, dt);
            }
        }
        IntegratorConfig::Euler => {
            for p in sys.particles.iter_mut() {
                euler_step(p, forces, t, dt);
            }
        }
    }
    sys.t += dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::forces::ConstantGravity;
    use crate::simulation::states::NVec2;

    fn moving(vx: f64, vy: f64) -> Particle {
        Particle::new(NVec2::new(1.0, 2.0), NVec2::new(vx, vy), 1.0).unwrap()
    }

    #[test]
    fn verlet_without_acceleration_is_straight_line() {
        let forces = AccelSet::new();
        let mut p = moving(3.0, -1.5);
        verlet_step(&mut p, &forces, 0.0, 0.25);
        assert_eq!(p.position, NVec2::new(1.0 + 3.0 * 0.25, 2.0 - 1.5 * 0.25));
        assert_eq!(p.velocity, NVec2::new(3.0, -1.5));
        assert_eq!(p.previous_acceleration, NVec2::zeros());
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let forces = AccelSet::default();
        let mut p = moving(3.0, -1.5);
        let before = p.clone();
        verlet_step(&mut p, &forces, 0.0, 0.0);
        assert_eq!(p, before);
        euler_step(&mut p, &forces, 0.0, 0.0);
        assert_eq!(p, before);
    }

    #[test]
    fn verlet_under_gravity_matches_closed_form() {
        // constant g: after the first step the stored acceleration is g, and
        // from then on each step is exact for a parabola
        let g = NVec2::new(0.0, -5.0);
        let forces = AccelSet::new().with(ConstantGravity { g });
        let mut p = moving(2.0, 10.0);
        p.previous_acceleration = g;
        let (x0, v0) = (p.position, p.velocity);
        let dt = 0.1;
        let steps = 20;
        for i in 0..steps {
            verlet_step(&mut p, &forces, i as f64 * dt, dt);
        }
        let t = dt * steps as f64;
        let x_exact = x0 + v0 * t + 0.5 * g * t * t;
        let v_exact = v0 + g * t;
        assert!((p.position - x_exact).norm() < 1e-9);
        assert!((p.velocity - v_exact).norm() < 1e-9);
    }

    #[test]
    fn euler_updates_velocity_then_position() {
        let forces = AccelSet::new().with(ConstantGravity { g: NVec2::new(0.0, -10.0) });
        let mut p = moving(1.0, 0.0);
        euler_step(&mut p, &forces, 0.0, 0.5);
        assert_eq!(p.velocity, NVec2::new(1.0, -5.0));
        assert_eq!(p.position, NVec2::new(1.5, -0.5));
        assert_eq!(p.previous_acceleration, NVec2::new(0.0, -10.0));
    }

    #[test]
    fn integrate_advances_clock() {
        let mut sys = System::new(vec![moving(1.0, 0.0), moving(0.0, 1.0)]);
        integrate(&mut sys, &AccelSet::new(), &IntegratorConfig::Verlet, 0.5);
        assert!((sys.t - 0.5).abs() < 1e-12);
        assert_eq!(sys.particles[0].position, NVec2::new(1.5, 2.0));
        assert_eq!(sys.particles[1].position, NVec2::new(1.0, 2.5));
    }
}
