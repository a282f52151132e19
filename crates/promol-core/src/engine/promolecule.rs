use super::error::EvaluationError;
use super::evaluator;
use crate::core::models::record::{AtomicRecord, UnsupportedPropertyError};
use crate::core::models::species::SpeciesSpec;
use crate::core::properties::kinds::{FieldBatch, FieldKind, ScalarKind, SpinChannel};
use crate::core::properties::mean;
use nalgebra::{Matrix3, Point3, Vector3};
use std::sync::Arc;

/// One tabulated record participating in an interpolated species, with its
/// interpolation weight.
#[derive(Debug, Clone)]
pub struct WeightedRecord {
    pub record: Arc<AtomicRecord>,
    pub weight: f64,
}

/// A resolved species: one record for integral requests, two or four weighted
/// records when the requested charge and/or multiplicity is fractional.
/// Weights are non-negative and sum to one.
#[derive(Debug, Clone)]
pub struct WeightedSpecies {
    pub spec: SpeciesSpec,
    pub members: Vec<WeightedRecord>,
}

impl WeightedSpecies {
    /// The species' scalar property as the weighted sum over its records.
    pub fn scalar(&self, kind: ScalarKind) -> Result<f64, UnsupportedPropertyError> {
        let mut sum = 0.0;
        for member in &self.members {
            sum += member.weight * member.record.scalar(kind)?;
        }
        Ok(sum)
    }
}

/// One atom of a promolecule: a resolved species at a nuclear position (bohr).
#[derive(Debug, Clone)]
pub struct PromoleculeCenter {
    pub species: WeightedSpecies,
    pub position: Point3<f64>,
}

/// A molecule-level property estimate built by superposing isolated-atom data
/// at fixed nuclear positions.
///
/// Constructed once by [`crate::workflows::build::PromoleculeBuilder`] and
/// immutable afterward; every query is a pure read. Center order is the input
/// order and matters only for the reproducibility of floating-point summation.
#[derive(Debug, Clone)]
pub struct Promolecule {
    dataset: String,
    centers: Vec<PromoleculeCenter>,
}

impl Promolecule {
    pub(crate) fn new(dataset: String, centers: Vec<PromoleculeCenter>) -> Self {
        Self { dataset, centers }
    }

    /// Name of the dataset the promolecule was resolved against.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn centers(&self) -> &[PromoleculeCenter] {
        &self.centers
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// An extensive scalar property: the sum of per-center contributions.
    ///
    /// # Errors
    ///
    /// Propagates [`EvaluationError::UnsupportedProperty`] if any contributing
    /// record lacks the property; there is no partial aggregation.
    pub fn extensive_scalar(&self, kind: ScalarKind) -> Result<f64, EvaluationError> {
        let mut sum = 0.0;
        for center in &self.centers {
            sum += center.species.scalar(kind)?;
        }
        Ok(sum)
    }

    /// An intensive scalar property: the power mean of per-center values.
    ///
    /// `power = 1` is the arithmetic mean. See
    /// [`crate::core::properties::mean::power_mean`] for the validity rules;
    /// violations surface as [`EvaluationError::InvalidArgument`].
    pub fn intensive_scalar(&self, kind: ScalarKind, power: f64) -> Result<f64, EvaluationError> {
        let mut values = Vec::with_capacity(self.centers.len());
        for center in &self.centers {
            values.push(center.species.scalar(kind)?);
        }
        mean::power_mean(&values, power)
            .map_err(|e| EvaluationError::InvalidArgument(e.to_string()))
    }

    /// Total mass in unified atomic mass units.
    pub fn mass(&self) -> Result<f64, EvaluationError> {
        self.extensive_scalar(ScalarKind::Mass)
    }

    /// Total electronic energy in hartree.
    pub fn energy(&self) -> Result<f64, EvaluationError> {
        self.extensive_scalar(ScalarKind::Energy)
    }

    /// Evaluates an extensive spatial property over query points (bohr).
    ///
    /// This is the closed-enumeration dispatch: the result shape follows the
    /// kind, and illegal parameter combinations — the log transform on a
    /// vector- or tensor-valued kind — are rejected here.
    pub fn field(
        &self,
        kind: FieldKind,
        points: &[Point3<f64>],
        spin: SpinChannel,
        log: bool,
    ) -> Result<FieldBatch, EvaluationError> {
        if log && !kind.supports_log() {
            return Err(EvaluationError::InvalidArgument(format!(
                "log transform is undefined for the non-scalar field '{}'",
                kind
            )));
        }

        match kind {
            FieldKind::Density | FieldKind::KineticEnergyDensity | FieldKind::Laplacian => {
                let mut values = evaluator::scalar_field(&self.centers, kind, points, spin)?;
                if log {
                    values = evaluator::log_transform(values)?;
                }
                Ok(FieldBatch::Scalar(values))
            }
            FieldKind::Gradient => Ok(FieldBatch::Vector(evaluator::gradient_field(
                &self.centers,
                points,
                spin,
            ))),
            FieldKind::Hessian => Ok(FieldBatch::Tensor(evaluator::hessian_field(
                &self.centers,
                points,
                spin,
            ))),
        }
    }

    /// Electron density at the query points.
    pub fn density(
        &self,
        points: &[Point3<f64>],
        spin: SpinChannel,
        log: bool,
    ) -> Result<Vec<f64>, EvaluationError> {
        let mut values = evaluator::scalar_field(&self.centers, FieldKind::Density, points, spin)?;
        if log {
            values = evaluator::log_transform(values)?;
        }
        Ok(values)
    }

    /// Kinetic-energy density at the query points.
    pub fn kinetic_energy_density(
        &self,
        points: &[Point3<f64>],
        spin: SpinChannel,
        log: bool,
    ) -> Result<Vec<f64>, EvaluationError> {
        let mut values = evaluator::scalar_field(
            &self.centers,
            FieldKind::KineticEnergyDensity,
            points,
            spin,
        )?;
        if log {
            values = evaluator::log_transform(values)?;
        }
        Ok(values)
    }

    /// Density Laplacian at the query points.
    pub fn laplacian(
        &self,
        points: &[Point3<f64>],
        spin: SpinChannel,
        log: bool,
    ) -> Result<Vec<f64>, EvaluationError> {
        let mut values =
            evaluator::scalar_field(&self.centers, FieldKind::Laplacian, points, spin)?;
        if log {
            values = evaluator::log_transform(values)?;
        }
        Ok(values)
    }

    /// Density gradient at the query points.
    pub fn gradient(
        &self,
        points: &[Point3<f64>],
        spin: SpinChannel,
    ) -> Result<Vec<Vector3<f64>>, EvaluationError> {
        Ok(evaluator::gradient_field(&self.centers, points, spin))
    }

    /// Density Hessian at the query points.
    pub fn hessian(
        &self,
        points: &[Point3<f64>],
        spin: SpinChannel,
    ) -> Result<Vec<Matrix3<f64>>, EvaluationError> {
        Ok(evaluator::hessian_field(&self.centers, points, spin))
    }
}
