use crate::core::properties::kinds::SpinChannel;
use nalgebra::{Matrix3, Vector3};
use thiserror::Error;

/// Radius below which a query point is treated as sitting on the nucleus.
///
/// Inside this guard the gradient direction is undefined; the spherical limits
/// are used instead.
const NUCLEUS_GUARD_RADIUS: f64 = 1e-10;

/// A property profile tabulated separately for the two spin channels.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPair {
    pub alpha: Vec<f64>,
    pub beta: Vec<f64>,
}

impl SpinPair {
    fn value_at(&self, grid: &[f64], channel: SpinChannel, radius: f64) -> f64 {
        match channel {
            SpinChannel::Alpha => interp(grid, &self.alpha, radius),
            SpinChannel::Beta => interp(grid, &self.beta, radius),
            SpinChannel::Total => {
                interp(grid, &self.alpha, radius) + interp(grid, &self.beta, radius)
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RadialTableError {
    #[error("radial grid needs at least 2 points, got {0}")]
    TooShort(usize),

    #[error("radial grid must start at a non-negative radius, got {0}")]
    NegativeRadius(f64),

    #[error("radial grid is not strictly increasing at index {0}")]
    NonMonotonic(usize),

    #[error("table '{table}' has {actual} values but the radial grid has {expected}")]
    LengthMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Tabulated spherically symmetric property profiles for one atomic species.
///
/// All tables share one strictly increasing radial grid. The density carries its
/// first and second radial derivatives so that gradient, Laplacian, and Hessian
/// fields can be reconstructed exactly from the spherical form. The
/// kinetic-energy density is optional; datasets that do not tabulate it surface
/// an explicit unsupported-property error instead of a silent zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialTables {
    r: Vec<f64>,
    density: SpinPair,
    density_d1: SpinPair,
    density_d2: SpinPair,
    kinetic: Option<SpinPair>,
}

impl RadialTables {
    pub fn new(
        r: Vec<f64>,
        density: SpinPair,
        density_d1: SpinPair,
        density_d2: SpinPair,
        kinetic: Option<SpinPair>,
    ) -> Result<Self, RadialTableError> {
        if r.len() < 2 {
            return Err(RadialTableError::TooShort(r.len()));
        }
        if r[0] < 0.0 {
            return Err(RadialTableError::NegativeRadius(r[0]));
        }
        for i in 1..r.len() {
            if r[i] <= r[i - 1] {
                return Err(RadialTableError::NonMonotonic(i));
            }
        }

        let expected = r.len();
        let pairs: [(&'static str, &SpinPair); 3] = [
            ("density", &density),
            ("density_d1", &density_d1),
            ("density_d2", &density_d2),
        ];
        for (table, pair) in pairs {
            check_len(table, expected, pair)?;
        }
        if let Some(pair) = &kinetic {
            check_len("kinetic", expected, pair)?;
        }

        Ok(Self {
            r,
            density,
            density_d1,
            density_d2,
            kinetic,
        })
    }

    pub fn grid(&self) -> &[f64] {
        &self.r
    }

    pub fn has_kinetic(&self) -> bool {
        self.kinetic.is_some()
    }

    pub fn density_at(&self, channel: SpinChannel, radius: f64) -> f64 {
        self.density.value_at(&self.r, channel, radius)
    }

    pub fn density_d1_at(&self, channel: SpinChannel, radius: f64) -> f64 {
        self.density_d1.value_at(&self.r, channel, radius)
    }

    pub fn density_d2_at(&self, channel: SpinChannel, radius: f64) -> f64 {
        self.density_d2.value_at(&self.r, channel, radius)
    }

    pub fn kinetic_at(&self, channel: SpinChannel, radius: f64) -> Option<f64> {
        self.kinetic
            .as_ref()
            .map(|pair| pair.value_at(&self.r, channel, radius))
    }

    /// Density gradient at a displacement from the nucleus: `rho'(r) * d_hat`.
    pub fn gradient_at(&self, channel: SpinChannel, displacement: &Vector3<f64>) -> Vector3<f64> {
        let radius = displacement.norm();
        if radius < NUCLEUS_GUARD_RADIUS {
            return Vector3::zeros();
        }
        displacement * (self.density_d1_at(channel, radius) / radius)
    }

    /// Density Laplacian at a radius: `rho''(r) + 2 rho'(r) / r`, with the
    /// spherical limit `3 rho''(0)` on the nucleus.
    pub fn laplacian_at(&self, channel: SpinChannel, radius: f64) -> f64 {
        if radius < NUCLEUS_GUARD_RADIUS {
            return 3.0 * self.density_d2_at(channel, 0.0);
        }
        self.density_d2_at(channel, radius)
            + 2.0 * self.density_d1_at(channel, radius) / radius
    }

    /// Density Hessian at a displacement:
    /// `rho''(r) * d_hat d_hat^T + (rho'(r)/r) * (I - d_hat d_hat^T)`.
    pub fn hessian_at(&self, channel: SpinChannel, displacement: &Vector3<f64>) -> Matrix3<f64> {
        let radius = displacement.norm();
        if radius < NUCLEUS_GUARD_RADIUS {
            return Matrix3::identity() * self.density_d2_at(channel, 0.0);
        }
        let unit = displacement / radius;
        let outer = unit * unit.transpose();
        let d2 = self.density_d2_at(channel, radius);
        let d1_over_r = self.density_d1_at(channel, radius) / radius;
        outer * (d2 - d1_over_r) + Matrix3::identity() * d1_over_r
    }
}

fn check_len(table: &'static str, expected: usize, pair: &SpinPair) -> Result<(), RadialTableError> {
    for actual in [pair.alpha.len(), pair.beta.len()] {
        if actual != expected {
            return Err(RadialTableError::LengthMismatch {
                table,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Linear interpolation on a strictly increasing grid.
///
/// Below the first grid point the profile is clamped flat; beyond the last it
/// is zero (atomic profiles decay to zero at the table edge).
fn interp(grid: &[f64], values: &[f64], x: f64) -> f64 {
    let last = grid.len() - 1;
    if x <= grid[0] {
        return values[0];
    }
    if x > grid[last] {
        return 0.0;
    }
    let hi = grid.partition_point(|&g| g < x);
    let lo = hi - 1;
    let t = (x - grid[lo]) / (grid[hi] - grid[lo]);
    values[lo] + t * (values[hi] - values[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn constant_pair(len: usize, alpha: f64, beta: f64) -> SpinPair {
        SpinPair {
            alpha: vec![alpha; len],
            beta: vec![beta; len],
        }
    }

    /// Tables on r = [0, 1, 2, 3] with a piecewise-linear alpha density
    /// 4 - r, beta density 2 - r/2, d1 = -1 (alpha) / -0.5 (beta), d2 = 0.
    fn linear_tables() -> RadialTables {
        let r = vec![0.0, 1.0, 2.0, 3.0];
        let density = SpinPair {
            alpha: vec![4.0, 3.0, 2.0, 1.0],
            beta: vec![2.0, 1.5, 1.0, 0.5],
        };
        let d1 = constant_pair(4, -1.0, -0.5);
        let d2 = constant_pair(4, 0.0, 0.0);
        let kinetic = constant_pair(4, 0.25, 0.25);
        RadialTables::new(r, density, d1, d2, Some(kinetic)).unwrap()
    }

    #[test]
    fn interpolation_is_exact_on_grid_nodes() {
        let tables = linear_tables();
        assert!(f64_approx_equal(
            tables.density_at(SpinChannel::Alpha, 1.0),
            3.0
        ));
        assert!(f64_approx_equal(
            tables.density_at(SpinChannel::Beta, 2.0),
            1.0
        ));
    }

    #[test]
    fn interpolation_is_linear_between_nodes() {
        let tables = linear_tables();
        assert!(f64_approx_equal(
            tables.density_at(SpinChannel::Alpha, 1.5),
            2.5
        ));
    }

    #[test]
    fn total_channel_sums_alpha_and_beta() {
        let tables = linear_tables();
        let alpha = tables.density_at(SpinChannel::Alpha, 0.5);
        let beta = tables.density_at(SpinChannel::Beta, 0.5);
        let total = tables.density_at(SpinChannel::Total, 0.5);
        assert!(f64_approx_equal(total, alpha + beta));
    }

    #[test]
    fn profile_is_clamped_below_and_zero_beyond_the_grid() {
        let tables = linear_tables();
        assert!(f64_approx_equal(
            tables.density_at(SpinChannel::Alpha, -1.0),
            4.0
        ));
        assert!(f64_approx_equal(
            tables.density_at(SpinChannel::Alpha, 10.0),
            0.0
        ));
    }

    #[test]
    fn gradient_points_along_the_displacement() {
        let tables = linear_tables();
        let displacement = Vector3::new(0.0, 0.0, 2.0);
        let gradient = tables.gradient_at(SpinChannel::Alpha, &displacement);
        // d1 = -1 along +z.
        assert!(f64_approx_equal(gradient.x, 0.0));
        assert!(f64_approx_equal(gradient.y, 0.0));
        assert!(f64_approx_equal(gradient.z, -1.0));
    }

    #[test]
    fn gradient_is_zero_on_the_nucleus() {
        let tables = linear_tables();
        let gradient = tables.gradient_at(SpinChannel::Total, &Vector3::zeros());
        assert_eq!(gradient, Vector3::zeros());
    }

    #[test]
    fn hessian_is_symmetric() {
        let tables = linear_tables();
        let displacement = Vector3::new(1.0, -0.5, 0.75);
        let hessian = tables.hessian_at(SpinChannel::Alpha, &displacement);
        for i in 0..3 {
            for j in 0..3 {
                assert!(f64_approx_equal(hessian[(i, j)], hessian[(j, i)]));
            }
        }
    }

    #[test]
    fn hessian_trace_equals_laplacian() {
        let tables = linear_tables();
        let displacement = Vector3::new(0.6, 0.8, 0.0);
        let hessian = tables.hessian_at(SpinChannel::Alpha, &displacement);
        let laplacian = tables.laplacian_at(SpinChannel::Alpha, displacement.norm());
        assert!(f64_approx_equal(hessian.trace(), laplacian));
    }

    #[test]
    fn laplacian_takes_the_spherical_limit_on_the_nucleus() {
        let tables = linear_tables();
        let on_nucleus = tables.laplacian_at(SpinChannel::Alpha, 0.0);
        assert!(f64_approx_equal(
            on_nucleus,
            3.0 * tables.density_d2_at(SpinChannel::Alpha, 0.0)
        ));
    }

    #[test]
    fn kinetic_is_none_when_not_tabulated() {
        let r = vec![0.0, 1.0];
        let tables = RadialTables::new(
            r,
            constant_pair(2, 1.0, 1.0),
            constant_pair(2, 0.0, 0.0),
            constant_pair(2, 0.0, 0.0),
            None,
        )
        .unwrap();
        assert!(!tables.has_kinetic());
        assert_eq!(tables.kinetic_at(SpinChannel::Total, 0.5), None);
    }

    #[test]
    fn construction_rejects_short_grids() {
        let result = RadialTables::new(
            vec![0.0],
            constant_pair(1, 1.0, 1.0),
            constant_pair(1, 0.0, 0.0),
            constant_pair(1, 0.0, 0.0),
            None,
        );
        assert_eq!(result.unwrap_err(), RadialTableError::TooShort(1));
    }

    #[test]
    fn construction_rejects_non_monotonic_grids() {
        let result = RadialTables::new(
            vec![0.0, 1.0, 1.0],
            constant_pair(3, 1.0, 1.0),
            constant_pair(3, 0.0, 0.0),
            constant_pair(3, 0.0, 0.0),
            None,
        );
        assert_eq!(result.unwrap_err(), RadialTableError::NonMonotonic(2));
    }

    #[test]
    fn construction_rejects_negative_radii() {
        let result = RadialTables::new(
            vec![-0.5, 1.0],
            constant_pair(2, 1.0, 1.0),
            constant_pair(2, 0.0, 0.0),
            constant_pair(2, 0.0, 0.0),
            None,
        );
        assert!(matches!(result, Err(RadialTableError::NegativeRadius(_))));
    }

    #[test]
    fn construction_rejects_mismatched_table_lengths() {
        let result = RadialTables::new(
            vec![0.0, 1.0, 2.0],
            constant_pair(3, 1.0, 1.0),
            constant_pair(2, 0.0, 0.0),
            constant_pair(3, 0.0, 0.0),
            None,
        );
        assert!(matches!(
            result,
            Err(RadialTableError::LengthMismatch {
                table: "density_d1",
                expected: 3,
                actual: 2,
            })
        ));
    }
}
