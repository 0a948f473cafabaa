use std::path::Path;

use serde::Deserialize;

use crate::solver::{Relaxation, SolverParams};

pub const DEFAULT_PATH: &str = "stable-fluids.yaml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub run: RunConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub n: usize,
    pub visc: f64,
    pub diff: f64,
    pub dt: f64,
    pub iterations: usize,
    pub tolerance: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub ticks: usize,
    pub report_every: usize,
    /// Density added at the grid centre each tick.
    pub source: f64,
    /// Magnitude of the force impulse added each tick.
    pub force: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            run: RunConfig::default(),
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            n: 100,
            visc: 0.0001,
            diff: 0.0001,
            dt: 0.01,
            iterations: 20,
            tolerance: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 200,
            report_every: 20,
            source: 0.5,
            force: 2.0,
        }
    }
}

impl PhysicsConfig {
    pub fn solver_params(&self) -> SolverParams {
        SolverParams {
            visc: self.visc,
            diff: self.diff,
            dt: self.dt,
            relaxation: Relaxation {
                iterations: self.iterations,
                tolerance: self.tolerance,
            },
        }
    }
}

/// Load configuration from `path`, falling back to defaults when the file is
/// missing or cannot be parsed.
pub fn load(path: &Path) -> Config {
    if !path.exists() {
        log::debug!("{} not found; using defaults", path.display());
        return Config::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str(&contents) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("failed to parse {}: {e}; using defaults", path.display());
                Config::default()
            }
        },
        Err(e) => {
            log::warn!("failed to read {}: {e}; using defaults", path.display());
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.physics.n, 100);
        assert_eq!(cfg.physics.visc, 0.0001);
        assert_eq!(cfg.physics.diff, 0.0001);
        assert_eq!(cfg.physics.dt, 0.01);
        assert_eq!(cfg.physics.iterations, 20);
        assert_eq!(cfg.physics.tolerance, None);
        assert_eq!(cfg.run.ticks, 200);
        assert_eq!(cfg.run.report_every, 20);
        assert_eq!(cfg.run.source, 0.5);
        assert_eq!(cfg.run.force, 2.0);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "physics:\n  visc: 0.01\nrun:\n  ticks: 5\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.physics.visc, 0.01);
        assert_eq!(cfg.physics.diff, 0.0001); // default
        assert_eq!(cfg.run.ticks, 5);
        assert_eq!(cfg.run.source, 0.5); // default
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
physics:
  n: 64
  visc: 0.001
  diff: 0.002
  dt: 0.05
  iterations: 40
  tolerance: 1.0e-6
run:
  ticks: 10
  report_every: 2
  source: 1.5
  force: 4.0
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.physics.n, 64);
        assert_eq!(cfg.physics.visc, 0.001);
        assert_eq!(cfg.physics.diff, 0.002);
        assert_eq!(cfg.physics.dt, 0.05);
        assert_eq!(cfg.physics.iterations, 40);
        assert_eq!(cfg.physics.tolerance, Some(1.0e-6));
        assert_eq!(cfg.run.ticks, 10);
        assert_eq!(cfg.run.report_every, 2);
        assert_eq!(cfg.run.source, 1.5);
        assert_eq!(cfg.run.force, 4.0);
    }

    #[test]
    fn test_solver_params_conversion() {
        let yaml = "physics:\n  iterations: 7\n  tolerance: 0.001\n  dt: 0.2\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        let params = cfg.physics.solver_params();
        assert_eq!(params.dt, 0.2);
        assert_eq!(params.relaxation, Relaxation { iterations: 7, tolerance: Some(0.001) });
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let cfg = load(Path::new("definitely-not-here/stable-fluids.yaml"));
        assert_eq!(cfg.physics.visc, 0.0001);
        assert_eq!(cfg.physics.n, 100);
    }

    #[test]
    fn test_load_invalid_file_falls_back() {
        let path = std::env::temp_dir().join(format!("stable-fluids-bad-{}.yaml", std::process::id()));
        std::fs::write(&path, "physics: [not, a, map").unwrap();
        let cfg = load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.physics.n, 100);
        assert_eq!(cfg.run.ticks, 200);
    }
}
