use std::ops::{Index, IndexMut};

use crate::error::SolverError;
use crate::solver::{self, SolverParams};

/// Square scalar field on an N×N interior with a one-cell ghost border.
///
/// Storage is a single flat buffer of `(N + 2)²` values. Cell `(i, j)` lives at
/// `i * (N + 2) + j`, where `i` is the x index and `j` the y index, both in
/// `0..=N + 1`. Interior cells are `1..=N` on each axis; index `0` and `N + 1`
/// are ghost cells whose values are derived by the boundary pass.
///
/// Neighbor offsets follow from the layout: `(i ± 1, j)` is `± stride`,
/// `(i, j ± 1)` is `± 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    n: usize,
    data: Vec<f64>,
}

impl Field {
    /// Zero-initialized field for an N×N interior.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "grid size must be > 0");
        Self {
            n,
            data: vec![0.0; (n + 2) * (n + 2)],
        }
    }

    /// Interior size N.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cells per `i` slice, i.e. N + 2.
    pub fn stride(&self) -> usize {
        self.n + 2
    }

    #[inline(always)]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.stride() && j < self.stride());
        i * self.stride() + j
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    pub fn copy_from(&mut self, other: &Field) {
        self.assert_same_grid(other);
        self.data.copy_from_slice(&other.data);
    }

    /// `self += other`, cell by cell (ghost cells included).
    pub fn add_assign_from(&mut self, other: &Field) {
        self.assert_same_grid(other);
        for (value, o) in self.data.iter_mut().zip(other.data.iter()) {
            *value += o;
        }
    }

    /// Sum over interior cells only.
    pub fn interior_sum(&self) -> f64 {
        let n = self.n;
        (1..=n)
            .map(|i| self.data[self.idx(i, 1)..=self.idx(i, n)].iter().sum::<f64>())
            .sum()
    }

    pub fn is_interior(&self, i: usize, j: usize) -> bool {
        (1..=self.n).contains(&i) && (1..=self.n).contains(&j)
    }

    pub fn same_grid(&self, other: &Field) -> bool {
        self.n == other.n && self.data.len() == other.data.len()
    }

    pub fn assert_same_grid(&self, other: &Field) {
        assert!(
            self.same_grid(other),
            "field grid mismatch: N = {} vs N = {}",
            self.n,
            other.n
        );
    }
}

impl Index<(usize, usize)> for Field {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[self.idx(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Field {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let k = self.idx(i, j);
        &mut self.data[k]
    }
}

/// The full set of buffers for one simulation.
///
/// `u`, `v`, `dens` hold the displayed state between ticks. The `*_prev`
/// buffers accumulate sources between ticks and serve as relaxation scratch
/// during a tick; they are zero again when a tick returns.
pub struct SimState {
    pub(crate) n: usize,
    pub(crate) u: Field,
    pub(crate) v: Field,
    pub(crate) u_prev: Field,
    pub(crate) v_prev: Field,
    pub(crate) dens: Field,
    pub(crate) dens_prev: Field,
}

/// Copy of the displayable fields taken between ticks.
pub struct FrameSnapshot {
    pub n: usize,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub density: Vec<f64>,
}

impl FrameSnapshot {
    /// Pre-allocate a snapshot buffer matching the given grid size.
    pub fn new_empty(n: usize) -> Self {
        let size = (n + 2) * (n + 2);
        FrameSnapshot {
            n,
            u: vec![0.0; size],
            v: vec![0.0; size],
            density: vec![0.0; size],
        }
    }

    /// Density at cell `(i, j)` using the same layout as [`Field`].
    pub fn density_at(&self, i: usize, j: usize) -> f64 {
        self.density[i * (self.n + 2) + j]
    }
}

impl SimState {
    pub fn new(n: usize) -> Result<Self, SolverError> {
        if n == 0 {
            return Err(SolverError::InvalidGridSize(n));
        }
        log::debug!("allocating {n}x{n} grid ({} cells per field)", (n + 2) * (n + 2));
        Ok(Self {
            n,
            u: Field::new(n),
            v: Field::new(n),
            u_prev: Field::new(n),
            v_prev: Field::new(n),
            dens: Field::new(n),
            dens_prev: Field::new(n),
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn u(&self) -> &Field {
        &self.u
    }

    pub fn v(&self) -> &Field {
        &self.v
    }

    pub fn density(&self) -> &Field {
        &self.dens
    }

    /// Queue `amount` of density at an interior cell for the next tick.
    pub fn add_density(&mut self, i: usize, j: usize, amount: f64) -> Result<(), SolverError> {
        self.check_interior(i, j)?;
        self.dens_prev[(i, j)] += amount;
        Ok(())
    }

    /// Queue a velocity impulse `(du, dv)` at an interior cell for the next tick.
    pub fn add_velocity(&mut self, i: usize, j: usize, du: f64, dv: f64) -> Result<(), SolverError> {
        self.check_interior(i, j)?;
        self.u_prev[(i, j)] += du;
        self.v_prev[(i, j)] += dv;
        Ok(())
    }

    /// Advance one tick: velocity step, then density step.
    pub fn step(&mut self, params: &SolverParams) {
        solver::fluid_step(self, params);
    }

    /// Copy current state into a pre-allocated snapshot, avoiding allocation.
    pub fn snapshot_into(&self, dst: &mut FrameSnapshot) {
        if dst.n != self.n {
            *dst = FrameSnapshot::new_empty(self.n);
        }
        dst.u.copy_from_slice(self.u.as_slice());
        dst.v.copy_from_slice(self.v.as_slice());
        dst.density.copy_from_slice(self.dens.as_slice());
    }

    fn check_interior(&self, i: usize, j: usize) -> Result<(), SolverError> {
        if self.dens.is_interior(i, j) {
            Ok(())
        } else {
            Err(SolverError::GhostCell { i, j, n: self.n })
        }
    }
}
