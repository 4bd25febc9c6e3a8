use particle_sandbox::{Scenario, ScenarioConfig};
use particle_sandbox::{bench_pair_ordering, bench_step};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D particle sandbox")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window even when the viewer is compiled in
    #[arg(long)]
    headless: bool,

    /// Frames to run headless
    #[arg(long, default_value_t = 600)]
    frames: usize,

    /// Wall-clock seconds per headless frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_time: f64,

    /// Time the step for growing particle counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let cfg = ScenarioConfig::from_yaml_file(&config_path)
        .with_context(|| format!("loading scenario {}", config_path.display()))?;
    Ok(cfg)
}

fn run_headless(mut scenario: Scenario, frames: usize, frame_time: f64) {
    let log_every = (frames / 10).max(1);
    for frame in 0..frames {
        let report = scenario.step(frame_time);
        if frame % log_every == 0 {
            tracing::info!(
                frame,
                t = scenario.system.t,
                particles = scenario.system.len(),
                colliding = report.collisions.map(|c| c.colliding).unwrap_or(0),
                wall_hits = report.wall_hits,
                kinetic_energy = scenario.system.kinetic_energy(),
                "frame"
            );
        }
    }
    let mean = scenario.system.mean_velocity();
    tracing::info!(t = scenario.system.t, mean_vx = mean.x, mean_vy = mean.y, "headless run finished");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if args.bench {
        bench_step(&[250, 500, 1000, 2000, 4000], 10);
        bench_pair_ordering(&[250, 500, 1000, 2000, 4000]);
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    #[cfg(feature = "viewer")]
    if !args.headless {
        particle_sandbox::run_2d(scenario);
        return Ok(());
    }

    #[cfg(not(feature = "viewer"))]
    if !args.headless {
        tracing::warn!("built without the `viewer` feature, running headless");
    }

    run_headless(scenario, args.frames, args.frame_time);
    Ok(())
}
