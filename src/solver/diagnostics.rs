use crate::state::Field;

/// Discrete divergence into `out`, using the projection stencil:
/// `-0.5 * h * (du/dx + dv/dy)` with central differences, `h = 1/N`.
/// Ghost cells of `out` are left at zero.
pub fn divergence_into(u: &Field, v: &Field, out: &mut Field) {
    let n = u.n();
    let h = 1.0 / n as f64;
    out.fill(0.0);
    for i in 1..=n {
        for j in 1..=n {
            out[(i, j)] = -0.5 * h * (u[(i + 1, j)] - u[(i - 1, j)] + v[(i, j + 1)] - v[(i, j - 1)]);
        }
    }
}

/// Largest absolute interior divergence.
pub fn max_divergence(u: &Field, v: &Field) -> f64 {
    let mut div = Field::new(u.n());
    divergence_into(u, v, &mut div);
    div.as_slice().iter().fold(0.0_f64, |m, d| m.max(d.abs()))
}

/// Sum of interior divergence: the net flux through the walls.
pub fn net_divergence(u: &Field, v: &Field) -> f64 {
    let mut div = Field::new(u.n());
    divergence_into(u, v, &mut div);
    div.interior_sum()
}

/// Total interior density (the conserved "mass").
pub fn total_density(dens: &Field) -> f64 {
    dens.interior_sum()
}

/// Compute volume-averaged kinetic energy: KE = 0.5 * <u² + v²>.
pub fn kinetic_energy(u: &Field, v: &Field) -> f64 {
    let n = u.n();
    let mut sum = 0.0;
    for i in 1..=n {
        for j in 1..=n {
            sum += u[(i, j)] * u[(i, j)] + v[(i, j)] * v[(i, j)];
        }
    }
    0.5 * sum / (n * n) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 8;

    #[test]
    fn test_divergence_of_expanding_field() {
        // u = i, v = j: du/dx = dv/dy = 1 cell⁻¹ → div = -0.5 * h * 4
        let mut u = Field::new(N);
        let mut v = Field::new(N);
        for i in 0..N + 2 {
            for j in 0..N + 2 {
                u[(i, j)] = i as f64;
                v[(i, j)] = j as f64;
            }
        }
        let mut div = Field::new(N);
        divergence_into(&u, &v, &mut div);
        let expected = -0.5 * (1.0 / N as f64) * 4.0;
        for i in 1..=N {
            for j in 1..=N {
                assert!((div[(i, j)] - expected).abs() < 1e-12);
            }
        }
        assert!((max_divergence(&u, &v) - expected.abs()).abs() < 1e-12);
    }

    #[test]
    fn test_net_divergence_zero_for_uniform_flow() {
        let mut u = Field::new(N);
        u.fill(0.4);
        let v = Field::new(N);
        assert!(net_divergence(&u, &v).abs() < 1e-15);
    }

    #[test]
    fn test_kinetic_energy_zero() {
        let u = Field::new(N);
        let v = Field::new(N);
        let ke = kinetic_energy(&u, &v);
        assert!(ke.abs() < 1e-15, "KE should be 0 with no flow, got {}", ke);
    }

    #[test]
    fn test_kinetic_energy_uniform_flow() {
        let mut u = Field::new(N);
        u.fill(1.0);
        let v = Field::new(N);
        let ke = kinetic_energy(&u, &v);
        assert!((ke - 0.5).abs() < 1e-10, "KE should be 0.5, got {}", ke);
    }

    #[test]
    fn test_total_density_interior_only() {
        let mut d = Field::new(N);
        d.fill(0.5);
        assert!((total_density(&d) - 0.5 * (N * N) as f64).abs() < 1e-12);
    }
}
