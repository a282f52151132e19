use crate::core::data::provider::AtomicDataset;
use crate::core::models::species::SpeciesSpec;
use crate::core::utils::units::LengthUnit;
use crate::engine::error::ResolveError;
use crate::engine::promolecule::{Promolecule, PromoleculeCenter};
use crate::engine::resolver;
use nalgebra::Point3;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Input '{what}' has length {actual}, but 'atomic_numbers' has length {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Builds a [`Promolecule`] from per-atom input arrays.
///
/// Atomic numbers and coordinates are required and must have equal length.
/// Charges default to zero and multiplicities to one; both may be fractional,
/// in which case the species resolver interpolates between tabulated records.
/// Coordinates are converted to bohr once, at build time.
///
/// ```ignore
/// let promolecule = PromoleculeBuilder::new()
///     .atomic_numbers([1, 1])
///     .coordinates([Point3::origin(), Point3::new(0.0, 0.0, 1.4)])
///     .build(&dataset)?;
/// let mass = promolecule.mass()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromoleculeBuilder {
    atomic_numbers: Vec<u32>,
    coordinates: Vec<Point3<f64>>,
    charges: Option<Vec<f64>>,
    multiplicities: Option<Vec<f64>>,
    units: LengthUnit,
}

impl PromoleculeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atomic_numbers(mut self, numbers: impl IntoIterator<Item = u32>) -> Self {
        self.atomic_numbers = numbers.into_iter().collect();
        self
    }

    pub fn coordinates(mut self, coordinates: impl IntoIterator<Item = Point3<f64>>) -> Self {
        self.coordinates = coordinates.into_iter().collect();
        self
    }

    /// Per-atom charges; may be fractional. Defaults to all zeros.
    pub fn charges(mut self, charges: impl IntoIterator<Item = f64>) -> Self {
        self.charges = Some(charges.into_iter().collect());
        self
    }

    /// Per-atom multiplicities; may be fractional, sign encodes spin polarity.
    /// Defaults to all ones.
    pub fn multiplicities(mut self, multiplicities: impl IntoIterator<Item = f64>) -> Self {
        self.multiplicities = Some(multiplicities.into_iter().collect());
        self
    }

    /// Length unit of the input coordinates. Defaults to bohr.
    pub fn units(mut self, units: LengthUnit) -> Self {
        self.units = units;
        self
    }

    /// Resolves every requested species and assembles the promolecule.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::LengthMismatch`] if the input arrays disagree in
    /// length, and propagates resolver failures for species the dataset cannot
    /// represent.
    #[instrument(skip_all, name = "promolecule_build")]
    pub fn build<D>(self, dataset: &D) -> Result<Promolecule, BuildError>
    where
        D: AtomicDataset + ?Sized,
    {
        let n = self.atomic_numbers.len();
        check_length("coordinates", n, self.coordinates.len())?;

        let charges = match self.charges {
            Some(charges) => {
                check_length("charges", n, charges.len())?;
                charges
            }
            None => vec![0.0; n],
        };
        let multiplicities = match self.multiplicities {
            Some(multiplicities) => {
                check_length("multiplicities", n, multiplicities.len())?;
                multiplicities
            }
            None => vec![1.0; n],
        };

        info!(
            atoms = n,
            dataset = dataset.name(),
            "Building promolecule."
        );

        let mut centers = Vec::with_capacity(n);
        for (i, (&atomic_number, position)) in self
            .atomic_numbers
            .iter()
            .zip(&self.coordinates)
            .enumerate()
        {
            let spec = SpeciesSpec::new(atomic_number, charges[i], multiplicities[i]);
            let species = resolver::resolve(dataset, &spec)?;
            debug!(center = i, species = %spec, records = species.members.len(), "Resolved center.");

            let position = Point3::new(
                self.units.to_bohr(position.x),
                self.units.to_bohr(position.y),
                self.units.to_bohr(position.z),
            );
            centers.push(PromoleculeCenter { species, position });
        }

        Ok(Promolecule::new(dataset.name().to_string(), centers))
    }
}

fn check_length(what: &'static str, expected: usize, actual: usize) -> Result<(), BuildError> {
    if expected != actual {
        return Err(BuildError::LengthMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}
