use crate::state::Field;

/// Field type for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Scalar,
    Vx,
    Vy,
}

/// Boundary condition handler for the closed box.
///   - `FieldType::Scalar`: Neumann (copy neighbor) on all four walls
///   - `FieldType::Vx`: negate at the left/right walls, copy at top/bottom
///   - `FieldType::Vy`: negate at the top/bottom walls, copy at left/right
///
/// Corner ghost cells take the mean of their two edge-adjacent ghost cells.
pub fn set_bnd(field_type: FieldType, x: &mut Field) {
    let n = x.n();
    let sx = if field_type == FieldType::Vx { -1.0 } else { 1.0 };
    let sy = if field_type == FieldType::Vy { -1.0 } else { 1.0 };

    for k in 1..=n {
        x[(0, k)] = sx * x[(1, k)];
        x[(n + 1, k)] = sx * x[(n, k)];
        x[(k, 0)] = sy * x[(k, 1)];
        x[(k, n + 1)] = sy * x[(k, n)];
    }

    x[(0, 0)] = 0.5 * (x[(1, 0)] + x[(0, 1)]);
    x[(0, n + 1)] = 0.5 * (x[(1, n + 1)] + x[(0, n)]);
    x[(n + 1, 0)] = 0.5 * (x[(n, 0)] + x[(n + 1, 1)]);
    x[(n + 1, n + 1)] = 0.5 * (x[(n, n + 1)] + x[(n + 1, n)]);
}
