use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::PairOrdering;
use crate::simulation::collision::resolve_collisions;
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::generator::random_particles;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;
use crate::simulation::step::simulation_step;

/// One row of a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchRow {
    pub n: usize,
    pub pairs: usize,
    pub seconds_per_frame: f64,
}

fn seeded_system(n: usize) -> (System, Parameters) {
    let params = Parameters {
        count: n,
        seed: Some(42),
        ..Parameters::default()
    };
    // defaults always validate, so generation only fails on a broken build
    let particles = random_particles(&params, &mut StdRng::seed_from_u64(42)).unwrap_or_default();
    (System::new(particles), params)
}

/// Time a full frame (collisions on, gravity, walls) for growing N
pub fn bench_step(ns: &[usize], frames: usize) -> Vec<BenchRow> {
    let engine = Engine {
        elastic_collisions: true,
        ..Engine::default()
    };
    let forces = AccelSet::default();
    let frames = frames.max(1);
    let mut rows = Vec::with_capacity(ns.len());

    for &n in ns {
        let (mut sys, params) = seeded_system(n);

        // Warm up
        simulation_step(&mut sys, &engine, &params, &forces, 1.0 / 60.0);

        let t0 = Instant::now();
        for _ in 0..frames {
            simulation_step(&mut sys, &engine, &params, &forces, 1.0 / 60.0);
        }
        let per_frame = t0.elapsed().as_secs_f64() / frames as f64;

        println!("N = {n:6}, step = {:10.6} s/frame", per_frame);
        rows.push(BenchRow {
            n,
            pairs: n * n.saturating_sub(1) / 2,
            seconds_per_frame: per_frame,
        });
    }
    rows
}

/// Compare the two pair orderings on the same initial state
pub fn bench_pair_ordering(ns: &[usize]) {
    for &n in ns {
        let (sys, params) = seeded_system(n);
        let slack = params.slack();

        let mut seq = sys.particles.clone();
        let t0 = Instant::now();
        resolve_collisions(&mut seq, slack, &PairOrdering::Sequential, false);
        let dt_seq = t0.elapsed().as_secs_f64();

        let mut snap = sys.particles.clone();
        let t1 = Instant::now();
        resolve_collisions(&mut snap, slack, &PairOrdering::Snapshot, false);
        let dt_snap = t1.elapsed().as_secs_f64();

        println!("N = {n:6}, sequential = {:8.6} s, snapshot = {:8.6} s", dt_seq, dt_snap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bench_reports_one_row_per_size() {
        let rows = bench_step(&[10, 20], 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].n, 20);
        assert_eq!(rows[1].pairs, 190);
        assert!(rows[0].seconds_per_frame >= 0.0);
    }
}
