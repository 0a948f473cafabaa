//! Grid-based incompressible fluid solver after Stam's "stable fluids":
//! implicit diffusion by Gauss-Seidel relaxation, semi-Lagrangian advection,
//! and pressure projection on an N×N box with reflective walls.
//!
//! A host drives the solver once per tick: queue forces and density with
//! [`SimState::add_velocity`] / [`SimState::add_density`], call
//! [`SimState::step`], then read [`SimState::u`], [`SimState::v`] and
//! [`SimState::density`] (or copy them out with [`SimState::snapshot_into`]).

pub mod config;
pub mod error;
pub mod logging;
pub mod solver;
pub mod state;

pub use error::SolverError;
pub use solver::{dens_step, vel_step, Relaxation, SolverParams};
pub use state::{Field, FrameSnapshot, SimState};
