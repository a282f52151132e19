use super::radial::RadialTables;
use super::species::SpeciesKey;
use crate::core::properties::kinds::{ScalarKind, SpinChannel};
use nalgebra::{Matrix3, Vector3};
use thiserror::Error;

/// Raised when a property kind is requested that the active dataset does not
/// tabulate for a species. Untabulated properties are never substituted with
/// zero or NaN.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("property '{kind}' is not tabulated for {key}")]
pub struct UnsupportedPropertyError {
    pub kind: String,
    pub key: SpeciesKey,
}

/// One tabulated isolated-atom entry of a reference dataset.
///
/// Mass and energy are tabulated for every species; the remaining scalars are
/// dataset-dependent. The radial tables hold the spatially resolved properties
/// as functions of the distance from the nucleus. Records are immutable once
/// loaded and shared by reference counting.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicRecord {
    pub key: SpeciesKey,
    pub mass: f64,
    pub energy: f64,
    pub electron_count: Option<f64>,
    pub spin_count: Option<f64>,
    pub ionization_potential: Option<f64>,
    pub radial: RadialTables,
}

impl AtomicRecord {
    /// Looks up a scalar property.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedPropertyError`] if the kind is not tabulated for
    /// this record.
    pub fn scalar(&self, kind: ScalarKind) -> Result<f64, UnsupportedPropertyError> {
        let value = match kind {
            ScalarKind::Mass => Some(self.mass),
            ScalarKind::Energy => Some(self.energy),
            ScalarKind::ElectronCount => self.electron_count,
            ScalarKind::SpinCount => self.spin_count,
            ScalarKind::IonizationPotential => self.ionization_potential,
        };
        value.ok_or_else(|| UnsupportedPropertyError {
            kind: kind.to_string(),
            key: self.key,
        })
    }

    /// Electron density at a displacement from this record's nucleus.
    pub fn density_at(&self, channel: SpinChannel, displacement: &Vector3<f64>) -> f64 {
        self.radial.density_at(channel, displacement.norm())
    }

    /// Kinetic-energy density at a displacement from this record's nucleus.
    pub fn kinetic_at(
        &self,
        channel: SpinChannel,
        displacement: &Vector3<f64>,
    ) -> Result<f64, UnsupportedPropertyError> {
        self.radial
            .kinetic_at(channel, displacement.norm())
            .ok_or_else(|| UnsupportedPropertyError {
                kind: "ked".to_string(),
                key: self.key,
            })
    }

    pub fn gradient_at(&self, channel: SpinChannel, displacement: &Vector3<f64>) -> Vector3<f64> {
        self.radial.gradient_at(channel, displacement)
    }

    pub fn laplacian_at(&self, channel: SpinChannel, displacement: &Vector3<f64>) -> f64 {
        self.radial.laplacian_at(channel, displacement.norm())
    }

    pub fn hessian_at(&self, channel: SpinChannel, displacement: &Vector3<f64>) -> Matrix3<f64> {
        self.radial.hessian_at(channel, displacement)
    }
}
