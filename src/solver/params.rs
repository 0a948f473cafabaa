use crate::error::SolverError;

/// Stopping rule for Gauss-Seidel relaxation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relaxation {
    /// Upper bound on sweeps.
    pub iterations: usize,
    /// Stop early once a sweep moves no interior cell by more than this.
    pub tolerance: Option<f64>,
}

impl Default for Relaxation {
    fn default() -> Self {
        Self {
            iterations: 20,
            tolerance: None,
        }
    }
}

impl Relaxation {
    pub fn fixed(iterations: usize) -> Self {
        Self {
            iterations,
            tolerance: None,
        }
    }
}

/// Solver parameters for the fluid simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParams {
    pub visc: f64,
    pub diff: f64,
    pub dt: f64,
    pub relaxation: Relaxation,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            visc: 0.0001,
            diff: 0.0001,
            dt: 0.01,
            relaxation: Relaxation::default(),
        }
    }
}

impl SolverParams {
    /// Reject values the numerical core cannot handle.
    /// Rates must be non-negative, dt strictly positive, all values finite.
    pub fn validate(&self) -> Result<(), SolverError> {
        let non_negative = [("visc", self.visc), ("diff", self.diff)];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SolverError::InvalidParameter { name, value });
            }
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SolverError::InvalidParameter { name: "dt", value: self.dt });
        }
        if self.relaxation.iterations == 0 {
            return Err(SolverError::InvalidParameter { name: "iterations", value: 0.0 });
        }
        if let Some(tol) = self.relaxation.tolerance {
            if !tol.is_finite() || tol < 0.0 {
                return Err(SolverError::InvalidParameter { name: "tolerance", value: tol });
            }
        }
        Ok(())
    }
}
