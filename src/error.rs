use thiserror::Error;

/// Errors raised by precondition checks around the solver.
///
/// The per-tick numerical routines themselves never fail; everything here is
/// caught at construction, configuration or injection time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("grid size must be positive, got N = {0}")]
    InvalidGridSize(usize),

    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("cell ({i}, {j}) is not an interior cell of a {n}x{n} grid")]
    GhostCell { i: usize, j: usize, n: usize },
}
