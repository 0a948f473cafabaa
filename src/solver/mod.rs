mod boundary;
mod core;
pub mod diagnostics;
mod params;

// Re-export public API
pub use boundary::{set_bnd, FieldType};
pub use self::core::{advect, diffuse, lin_solve, project};
pub use params::{Relaxation, SolverParams};

use crate::state::{Field, SimState};

/// Velocity step: fold queued forces, diffuse, project, self-advect, project.
///
/// Reads and writes all four fields. `u`/`v` hold the new velocity on return;
/// `u0`/`v0` are scratch during the call and zeroed on return, ready to
/// accumulate the next tick's forces.
///
/// Panics if the fields do not share one grid size.
pub fn vel_step(u: &mut Field, v: &mut Field, u0: &mut Field, v0: &mut Field, visc: f64, dt: f64, relax: &Relaxation) {
    u.assert_same_grid(v);
    u.assert_same_grid(u0);
    u.assert_same_grid(v0);

    u.add_assign_from(u0);
    v.add_assign_from(v0);

    // Diffuse velocity
    diffuse(FieldType::Vx, u0, u, visc, dt, relax);
    diffuse(FieldType::Vy, v0, v, visc, dt, relax);

    // Project to make diffused velocity divergence-free (u, v as scratch)
    project(u0, v0, u, v, relax);

    // Advect velocity along itself
    advect(FieldType::Vx, u, u0, u0, v0, dt);
    advect(FieldType::Vy, v, v0, u0, v0, dt);

    // Advection reintroduces divergence (u0, v0 as scratch)
    project(u, v, u0, v0, relax);

    u0.fill(0.0);
    v0.fill(0.0);
}

/// Density step: fold queued sources, diffuse, advect along `(u, v)`.
///
/// `u`/`v` are read-only. `x` holds the new density on return; `x0` is
/// scratch during the call and zeroed on return.
///
/// Panics if the fields do not share one grid size.
pub fn dens_step(x: &mut Field, x0: &mut Field, u: &Field, v: &Field, diff: f64, dt: f64, relax: &Relaxation) {
    x.assert_same_grid(x0);
    x.assert_same_grid(u);
    x.assert_same_grid(v);

    x.add_assign_from(x0);
    diffuse(FieldType::Scalar, x0, x, diff, dt, relax);
    advect(FieldType::Scalar, x, x0, u, v, dt);

    x0.fill(0.0);
}

/// Full fluid simulation step: velocity first, then density along the new velocity.
pub fn fluid_step(state: &mut SimState, params: &SolverParams) {
    let relax = &params.relaxation;
    vel_step(&mut state.u, &mut state.v, &mut state.u_prev, &mut state.v_prev, params.visc, params.dt, relax);
    dens_step(&mut state.dens, &mut state.dens_prev, &state.u, &state.v, params.diff, params.dt, relax);
}
