use super::error::ResolveError;
use super::promolecule::{WeightedRecord, WeightedSpecies};
use crate::core::data::provider::AtomicDataset;
use crate::core::models::species::{self, SpeciesKey, SpeciesSpec};

/// One axis of the interpolation lattice: an integral grid value and its weight.
type AxisPoint = (i32, f64);

/// Resolves a requested species against a dataset.
///
/// Integral charge and multiplicity name a single record with weight 1. A
/// fractional value on either axis is bracketed by its floor and ceiling
/// integers with linear weights; when both axes are fractional the two 1-D
/// bracketings combine bilinearly into up to four weighted records. The
/// multiplicity sign (spin polarity) is preserved by bracketing the signed
/// value directly.
///
/// # Errors
///
/// Returns [`ResolveError::SpeciesNotFound`] when an exact integral request has
/// no record, and [`ResolveError::InterpolationRange`] when a fractional
/// request lacks one of its bracketing records.
pub fn resolve<D>(dataset: &D, spec: &SpeciesSpec) -> Result<WeightedSpecies, ResolveError>
where
    D: AtomicDataset + ?Sized,
{
    let charge_axis = bracket(spec.charge);
    let multiplicity_axis = bracket(spec.multiplicity);
    let integral = charge_axis.len() == 1 && multiplicity_axis.len() == 1;

    let mut members = Vec::with_capacity(charge_axis.len() * multiplicity_axis.len());
    for &(charge, charge_weight) in &charge_axis {
        for &(multiplicity, multiplicity_weight) in &multiplicity_axis {
            let key = SpeciesKey::new(spec.atomic_number, charge, multiplicity);
            let record = dataset.lookup(&key).ok_or_else(|| {
                if integral {
                    ResolveError::SpeciesNotFound {
                        dataset: dataset.name().to_string(),
                        spec: *spec,
                    }
                } else {
                    ResolveError::InterpolationRange {
                        dataset: dataset.name().to_string(),
                        spec: *spec,
                        missing: key,
                    }
                }
            })?;
            members.push(WeightedRecord {
                record,
                weight: charge_weight * multiplicity_weight,
            });
        }
    }

    Ok(WeightedSpecies {
        spec: *spec,
        members,
    })
}

fn bracket(value: f64) -> Vec<AxisPoint> {
    if species::is_integral(value) {
        vec![(value.round() as i32, 1.0)]
    } else {
        let floor = value.floor();
        let frac = value - floor;
        vec![(floor as i32, 1.0 - frac), (floor as i32 + 1, frac)]
    }
}
