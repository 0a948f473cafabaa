use crate::state::Field;
use super::boundary::{FieldType, set_bnd};
use super::params::Relaxation;

/// Gauss-Seidel iterative linear solver.
/// Solves: x[i,j] = (x0[i,j] + a * (neighbors)) / c
///
/// Updates are in place, `i` outer and `j` inner, so each cell sees the
/// values already written earlier in the same sweep. Boundaries are
/// re-derived after every sweep. Returns the number of sweeps performed.
pub fn lin_solve(field_type: FieldType, x: &mut Field, x0: &Field, a: f64, c: f64, relax: &Relaxation) -> usize {
    debug_assert!(x.same_grid(x0));
    let n = x.n();
    let c_inv = 1.0 / c;
    for sweep in 1..=relax.iterations {
        let mut max_delta = 0.0_f64;
        for i in 1..=n {
            for j in 1..=n {
                let neighbors = x[(i - 1, j)] + x[(i + 1, j)] + x[(i, j - 1)] + x[(i, j + 1)];
                let updated = (x0[(i, j)] + a * neighbors) * c_inv;
                max_delta = max_delta.max((updated - x[(i, j)]).abs());
                x[(i, j)] = updated;
            }
        }
        set_bnd(field_type, x);
        if relax.tolerance.is_some_and(|tol| max_delta <= tol) {
            log::trace!("{field_type:?} relaxation settled after {sweep} sweeps (delta {max_delta:e})");
            return sweep;
        }
    }
    relax.iterations
}

/// Diffusion step: spreads the field over time.
/// a = dt * diff * N^2, c = 1 + 4a
///
/// Implicit, so stable for any dt and rate.
pub fn diffuse(field_type: FieldType, x: &mut Field, x0: &Field, diff: f64, dt: f64, relax: &Relaxation) {
    let n = x.n() as f64;
    let a = dt * diff * n * n;
    // Initial guess: the undiffused field
    x.copy_from(x0);
    lin_solve(field_type, x, x0, a, 1.0 + 4.0 * a, relax);
}

/// Semi-Lagrangian advection: traces each cell backwards through (u, v) and
/// samples `d0` bilinearly at the departure point.
pub fn advect(field_type: FieldType, d: &mut Field, d0: &Field, u: &Field, v: &Field, dt: f64) {
    debug_assert!(d.same_grid(d0) && d.same_grid(u) && d.same_grid(v));
    let n = d.n();
    let dt0 = dt * n as f64;
    let lo = 0.5;
    let hi = n as f64 + 0.5;

    for i in 1..=n {
        for j in 1..=n {
            // Trace backwards, clamped so all four samples stay on the grid
            let x = (i as f64 - dt0 * u[(i, j)]).clamp(lo, hi);
            let y = (j as f64 - dt0 * v[(i, j)]).clamp(lo, hi);

            let i0 = x.floor() as usize;
            let i1 = i0 + 1;
            let j0 = y.floor() as usize;
            let j1 = j0 + 1;
            let s1 = x - i0 as f64;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f64;
            let t0 = 1.0 - t1;

            d[(i, j)] = s0 * (t0 * d0[(i0, j0)] + t1 * d0[(i0, j1)])
                + s1 * (t0 * d0[(i1, j0)] + t1 * d0[(i1, j1)]);
        }
    }
    set_bnd(field_type, d);
}

/// Pressure projection: enforces incompressibility (divergence-free velocity field).
/// `p` and `div` are scratch; their previous contents are discarded.
pub fn project(u: &mut Field, v: &mut Field, p: &mut Field, div: &mut Field, relax: &Relaxation) {
    debug_assert!(u.same_grid(v) && u.same_grid(p) && u.same_grid(div));
    let n = u.n();
    let h = 1.0 / n as f64;

    // Calculate divergence
    for i in 1..=n {
        for j in 1..=n {
            div[(i, j)] = -0.5 * h * (u[(i + 1, j)] - u[(i - 1, j)] + v[(i, j + 1)] - v[(i, j - 1)]);
            p[(i, j)] = 0.0;
        }
    }
    set_bnd(FieldType::Scalar, div);
    set_bnd(FieldType::Scalar, p);

    // Solve for pressure
    lin_solve(FieldType::Scalar, p, div, 1.0, 4.0, relax);

    // Subtract pressure gradient from velocity
    for i in 1..=n {
        for j in 1..=n {
            u[(i, j)] -= 0.5 * (p[(i + 1, j)] - p[(i - 1, j)]) / h;
            v[(i, j)] -= 0.5 * (p[(i, j + 1)] - p[(i, j - 1)]) / h;
        }
    }
    set_bnd(FieldType::Vx, u);
    set_bnd(FieldType::Vy, v);
}
