//! Two-body collision response: positional de-penetration followed by an
//! elastic velocity exchange along the line of centers. Mass is the radius.

use super::states::{NVec2, Particle};
use super::vector::{dot, magnitude_squared, try_normalize};

/// What `resolve_pair` did to a pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairOutcome {
    pub separated: bool, // positions were pushed apart
    pub bounced: bool, // velocities were exchanged
    pub degenerate: bool, // coincident centers, nothing applied
}

/// Position and velocity corrections for one pair, computed without
/// touching either particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDelta {
    pub dx_a: NVec2,
    pub dx_b: NVec2,
    pub dv_a: NVec2,
    pub dv_b: NVec2,
    pub outcome: PairOutcome,
}

/// Push `a` and `b` apart when their circles overlap.
///
/// The normal is `a - b`, the shift is half the penetration depth, split so
/// that the smaller body moves further:
/// `ratio = 1 / (1 + (rb/ra)^2)`, `a += n (1-ratio) delta`, `b -= n ratio delta`.
/// Returns `(shift_a, shift_b)`, both zero when the pair does not overlap,
/// `None` when the centers coincide.
pub fn separation(a: &Particle, b: &Particle) -> Option<(NVec2, NVec2)> {
    let diff = a.position - b.position;
    let min_dist = a.radius() + b.radius();
    let dist_sq = magnitude_squared(&diff);
    if dist_sq >= min_dist * min_dist {
        return Some((NVec2::zeros(), NVec2::zeros()));
    }

    let normal = try_normalize(&diff).ok()?;
    let dist = dist_sq.sqrt();
    let size_ratio = b.radius() / a.radius();
    let mass_ratio = 1.0 / (1.0 + size_ratio * size_ratio);
    let delta = 0.5 * (min_dist - dist);

    Some((normal * ((1.0 - mass_ratio) * delta), -normal * (mass_ratio * delta)))
}

/// Velocity changes for a perfectly elastic collision between `a` and `b`.
///
/// `scale = 2/(ma+mb) * dot(va-vb, xa-xb) / |xa-xb|^2`,
/// `dva = -(xa-xb) mb scale`, `dvb = (xa-xb) ma scale`.
/// With `skip_separating`, pairs already moving apart get zero change.
/// `None` when the centers coincide.
pub fn elastic_exchange(a: &Particle, b: &Particle, skip_separating: bool) -> Option<(NVec2, NVec2)> {
    let dx = a.position - b.position;
    let dist_sq = magnitude_squared(&dx);
    if dist_sq == 0.0 {
        return None;
    }
    let closing = dot(&(a.velocity - b.velocity), &dx);
    if skip_separating && closing >= 0.0 {
        return Some((NVec2::zeros(), NVec2::zeros()));
    }
    let scale = 2.0 / (a.mass() + b.mass()) * closing / dist_sq;
    Some((-dx * (b.mass() * scale), dx * (a.mass() * scale)))
}

/// Compute both corrections for a pair, the velocity part being evaluated at
/// the de-penetrated positions.
pub fn pair_delta(a: &Particle, b: &Particle, skip_separating: bool) -> PairDelta {
    let mut delta = PairDelta {
        dx_a: NVec2::zeros(),
        dx_b: NVec2::zeros(),
        dv_a: NVec2::zeros(),
        dv_b: NVec2::zeros(),
        outcome: PairOutcome::default(),
    };

    let Some((dx_a, dx_b)) = separation(a, b) else {
        delta.outcome.degenerate = true;
        return delta;
    };
    delta.dx_a = dx_a;
    delta.dx_b = dx_b;
    delta.outcome.separated = dx_a != NVec2::zeros() || dx_b != NVec2::zeros();

    let mut moved_a = a.clone();
    let mut moved_b = b.clone();
    moved_a.position += dx_a;
    moved_b.position += dx_b;

    match elastic_exchange(&moved_a, &moved_b, skip_separating) {
        Some((dv_a, dv_b)) => {
            delta.dv_a = dv_a;
            delta.dv_b = dv_b;
            delta.outcome.bounced = dv_a != NVec2::zeros() || dv_b != NVec2::zeros();
        }
        None => delta.outcome.degenerate = true,
    }
    delta
}

/// Apply de-penetration then the elastic exchange to `a` and `b` in place.
/// Coincident centers leave both particles untouched.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle, skip_separating: bool) -> PairOutcome {
    let d = pair_delta(a, b, skip_separating);
    a.position += d.dx_a;
    b.position += d.dx_b;
    a.velocity += d.dv_a;
    b.velocity += d.dv_b;
    d.outcome
}

/// Mutable access to two distinct particles of a slice, `i < j`.
pub fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(i < j);
    let (left, right) = particles.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f64, y: f64, vx: f64, vy: f64, r: f64) -> Particle {
        Particle::new(NVec2::new(x, y), NVec2::new(vx, vy), r).unwrap()
    }

    #[test]
    fn equal_masses_head_on_swap_velocities() {
        let mut a = body(-5.0, 0.0, 10.0, 0.0, 5.0);
        let mut b = body(5.0, 0.0, -10.0, 0.0, 5.0);
        let out = resolve_pair(&mut a, &mut b, false);
        assert!(out.bounced && !out.separated && !out.degenerate);
        assert!((a.velocity - NVec2::new(-10.0, 0.0)).norm() < 1e-12);
        assert!((b.velocity - NVec2::new(10.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn separating_pair_is_exchanged_by_default() {
        let mut a = body(-4.0, 0.0, -1.0, 0.0, 5.0);
        let mut b = body(4.0, 0.0, 1.0, 0.0, 5.0);
        let out = resolve_pair(&mut a, &mut b, false);
        assert!(out.bounced && out.separated);
        // exchange evaluated at x = -4.5 / 4.5
        assert!((a.velocity - NVec2::new(1.0, 0.0)).norm() < 1e-12);
        assert!((b.velocity - NVec2::new(-1.0, 0.0)).norm() < 1e-12);
        assert!((a.position.x + 4.5).abs() < 1e-12);
    }

    #[test]
    fn separating_pair_keeps_velocities_when_skipped() {
        let mut a = body(-4.0, 0.0, -1.0, 0.0, 5.0);
        let mut b = body(4.0, 0.0, 1.0, 0.0, 5.0);
        let out = resolve_pair(&mut a, &mut b, true);
        assert!(!out.bounced);
        assert_eq!(a.velocity, NVec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, NVec2::new(1.0, 0.0));
        // still pushed apart
        assert!(out.separated);
        assert!((b.position.x - a.position.x) > 8.0);
    }

    #[test]
    fn smaller_body_moves_further() {
        let mut small = body(0.0, 0.0, 0.0, 0.0, 1.0);
        let mut big = body(3.0, 0.0, 0.0, 0.0, 3.0);
        resolve_pair(&mut small, &mut big, false);
        let moved_small = small.position.x.abs();
        let moved_big = (big.position.x - 3.0).abs();
        assert!(moved_small > moved_big);
        // half of the 1.0 overlap is removed in total
        assert!((moved_small + moved_big - 0.5).abs() < 1e-12);
        assert!(small.position.x < 0.0 && big.position.x > 3.0);
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut a = body(1.0, 1.0, 3.0, 0.0, 2.0);
        let mut b = body(1.0, 1.0, -3.0, 0.0, 2.0);
        let (a0, b0) = (a.clone(), b.clone());
        let out = resolve_pair(&mut a, &mut b, false);
        assert!(out.degenerate);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn pair_mut_hands_out_both() {
        let mut ps = vec![body(0.0, 0.0, 0.0, 0.0, 1.0), body(1.0, 0.0, 0.0, 0.0, 1.0), body(2.0, 0.0, 0.0, 0.0, 1.0)];
        let (a, c) = pair_mut(&mut ps, 0, 2);
        a.velocity.x = 1.0;
        c.velocity.x = 2.0;
        assert_eq!(ps[0].velocity.x, 1.0);
        assert_eq!(ps[2].velocity.x, 2.0);
    }
}
