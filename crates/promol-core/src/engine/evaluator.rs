use super::error::EvaluationError;
use super::promolecule::PromoleculeCenter;
use crate::core::properties::kinds::{FieldKind, SpinChannel};
use nalgebra::{Matrix3, Point3, Vector3};
use rayon::prelude::*;

// Batched evaluation must agree exactly with point-by-point evaluation, so
// parallelism is across points only; the per-point reduction runs center-major
// in insertion order.

pub(crate) fn scalar_field(
    centers: &[PromoleculeCenter],
    kind: FieldKind,
    points: &[Point3<f64>],
    spin: SpinChannel,
) -> Result<Vec<f64>, EvaluationError> {
    points
        .par_iter()
        .map(|point| scalar_at_point(centers, kind, point, spin))
        .collect()
}

pub(crate) fn gradient_field(
    centers: &[PromoleculeCenter],
    points: &[Point3<f64>],
    spin: SpinChannel,
) -> Vec<Vector3<f64>> {
    points
        .par_iter()
        .map(|point| {
            let mut sum = Vector3::zeros();
            for center in centers {
                let displacement = point - center.position;
                for member in &center.species.members {
                    sum += member.record.gradient_at(spin, &displacement) * member.weight;
                }
            }
            sum
        })
        .collect()
}

pub(crate) fn hessian_field(
    centers: &[PromoleculeCenter],
    points: &[Point3<f64>],
    spin: SpinChannel,
) -> Vec<Matrix3<f64>> {
    points
        .par_iter()
        .map(|point| {
            let mut sum = Matrix3::zeros();
            for center in centers {
                let displacement = point - center.position;
                for member in &center.species.members {
                    sum += member.record.hessian_at(spin, &displacement) * member.weight;
                }
            }
            sum
        })
        .collect()
}

/// Applies `ln` to an already-summed scalar field.
///
/// Superposed properties are additive in linear space only, so the transform
/// runs after summation. The whole call fails on the first non-positive value;
/// nothing is clamped.
pub(crate) fn log_transform(values: Vec<f64>) -> Result<Vec<f64>, EvaluationError> {
    if let Some((point_index, &value)) = values
        .iter()
        .enumerate()
        .find(|(_, value)| **value <= 0.0)
    {
        return Err(EvaluationError::NonPositiveLog { point_index, value });
    }
    Ok(values.into_iter().map(f64::ln).collect())
}

fn scalar_at_point(
    centers: &[PromoleculeCenter],
    kind: FieldKind,
    point: &Point3<f64>,
    spin: SpinChannel,
) -> Result<f64, EvaluationError> {
    let mut sum = 0.0;
    for center in centers {
        let displacement = point - center.position;
        for member in &center.species.members {
            let value = match kind {
                FieldKind::Density => member.record.density_at(spin, &displacement),
                FieldKind::KineticEnergyDensity => member.record.kinetic_at(spin, &displacement)?,
                FieldKind::Laplacian => member.record.laplacian_at(spin, &displacement),
                FieldKind::Gradient | FieldKind::Hessian => {
                    unreachable!("scalar evaluation dispatched for a non-scalar field kind")
                }
            };
            sum += member.weight * value;
        }
    }
    Ok(sum)
}
