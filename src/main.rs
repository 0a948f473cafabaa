use std::path::PathBuf;
use std::process::ExitCode;

use stable_fluids::config::{self, Config};
use stable_fluids::solver::diagnostics;
use stable_fluids::{logging, SimState, SolverError};

struct Defaults;

impl Defaults {
    /// Radians per tick the injected force direction turns.
    const SPIN_RATE: f64 = 0.05;
}

fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH))
}

/// Force for tick `tick`: a slowly rotating push standing in for a mouse drag.
fn impulse(tick: usize, force: f64) -> (f64, f64) {
    let angle = tick as f64 * Defaults::SPIN_RATE;
    (force * angle.cos(), force * angle.sin())
}

fn inject(state: &mut SimState, cfg: &Config, tick: usize) -> Result<(), SolverError> {
    let c = (state.n() + 1) / 2;
    state.add_density(c, c, cfg.run.source)?;
    let (du, dv) = impulse(tick, cfg.run.force);
    state.add_velocity(c, c, du, dv)
}

fn run(cfg: &Config) -> Result<SimState, SolverError> {
    let params = cfg.physics.solver_params();
    params.validate()?;
    let mut state = SimState::new(cfg.physics.n)?;
    log::info!(
        "N={} visc={} diff={} dt={} sweeps={} ticks={}",
        cfg.physics.n, params.visc, params.diff, params.dt, params.relaxation.iterations, cfg.run.ticks
    );

    let every = cfg.run.report_every.max(1);
    for tick in 1..=cfg.run.ticks {
        inject(&mut state, cfg, tick)?;
        state.step(&params);
        if tick % every == 0 || tick == cfg.run.ticks {
            log::info!(
                "tick {tick:>5}: mass={:.6} ke={:.3e} max_div={:.3e}",
                diagnostics::total_density(state.density()),
                diagnostics::kinetic_energy(state.u(), state.v()),
                diagnostics::max_divergence(state.u(), state.v()),
            );
        }
    }
    Ok(state)
}

fn main() -> ExitCode {
    logging::init();
    let path = config_path();
    let cfg = config::load(&path);
    match run(&cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
