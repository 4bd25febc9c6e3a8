//! Brute-force collision pass
//!
//! Every unordered pair (i, j), i < j, is tested once per frame: O(N^2).
//! A spatial grid would only change which pairs get tested, the overlap
//! predicate and the response stay the same.

use tracing::trace;

use crate::configuration::config::PairOrdering;
use super::response::{pair_delta, pair_mut, resolve_pair, PairOutcome};
use super::states::{NVec2, Particle};
use super::vector::distance_squared;

/// Detection slack as a fraction of the smallest configured radius
pub const SLACK_FRACTION: f64 = 0.5;

/// Extra distance at which a pair already counts as touching
pub fn overlap_slack(min_radius: f64) -> f64 {
    SLACK_FRACTION * min_radius
}

/// `|xa - xb|^2 <= (ra + rb + slack)^2`
#[inline]
pub fn overlaps(a: &Particle, b: &Particle, slack: f64) -> bool {
    let reach = a.radius() + b.radius() + slack;
    distance_squared(&a.position, &b.position) <= reach * reach
}

/// All touching pairs of `particles`, in loop order.
pub fn colliding_pairs(particles: &[Particle], slack: f64) -> Vec<(usize, usize)> {
    let n = particles.len();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if overlaps(&particles[i], &particles[j], slack) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Counters for one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub tested: usize,
    pub colliding: usize,
    pub separated: usize,
    pub bounced: usize,
    pub degenerate: usize,
}

impl CollisionReport {
    fn record(&mut self, outcome: PairOutcome) {
        self.colliding += 1;
        self.separated += outcome.separated as usize;
        self.bounced += outcome.bounced as usize;
        self.degenerate += outcome.degenerate as usize;
    }
}

/// Detect and resolve every touching pair, one pass, no iteration to
/// convergence.
///
/// - `Sequential`: pairs are visited in (i, j) order and each one reads the
///   state left behind by the pairs before it.
/// - `Snapshot`: every pair reads the state as it was when the pass started;
///   the corrections of all pairs are summed and applied at the end.
///
/// `skip_separating` leaves the velocities of pairs already moving apart
/// untouched; otherwise every touching pair gets the elastic exchange.
pub fn resolve_collisions(
    particles: &mut [Particle],
    slack: f64,
    ordering: &PairOrdering,
    skip_separating: bool,
) -> CollisionReport {
    match ordering {
        PairOrdering::Sequential => resolve_sequential(particles, slack, skip_separating),
        PairOrdering::Snapshot => resolve_snapshot(particles, slack, skip_separating),
    }
}

fn resolve_sequential(particles: &mut [Particle], slack: f64, skip_separating: bool) -> CollisionReport {
    let n = particles.len();
    let mut report = CollisionReport::default();
    for i in 0..n {
        for j in (i + 1)..n {
            report.tested += 1;
            let (a, b) = pair_mut(particles, i, j);
            if !overlaps(a, b, slack) {
                continue;
            }
            let outcome = resolve_pair(a, b, skip_separating);
            if outcome.degenerate {
                trace!(i, j, "coincident centers, pair skipped");
            }
            report.record(outcome);
        }
    }
    report
}

fn resolve_snapshot(particles: &mut [Particle], slack: f64, skip_separating: bool) -> CollisionReport {
    let n = particles.len();
    let snapshot = particles.to_vec();
    let mut dx = vec![NVec2::zeros(); n];
    let mut dv = vec![NVec2::zeros(); n];
    let mut report = CollisionReport {
        tested: n * n.saturating_sub(1) / 2,
        ..Default::default()
    };

    for (i, j) in colliding_pairs(&snapshot, slack) {
        let d = pair_delta(&snapshot[i], &snapshot[j], skip_separating);
        if d.outcome.degenerate {
            trace!(i, j, "coincident centers, pair skipped");
        }
        dx[i] += d.dx_a;
        dx[j] += d.dx_b;
        dv[i] += d.dv_a;
        dv[j] += d.dv_b;
        report.record(d.outcome);
    }

    for ((p, shift), kick) in particles.iter_mut().zip(dx.iter()).zip(dv.iter()) {
        p.position += *shift;
        p.velocity += *kick;
    }
    report
}
