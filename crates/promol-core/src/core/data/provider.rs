use crate::core::models::record::AtomicRecord;
use crate::core::models::species::SpeciesKey;
use std::sync::Arc;

/// Capability interface over a source of tabulated atomic reference data.
///
/// The evaluator core is written against this trait so that any concrete
/// dataset format — the bundled TOML store, an embedded table, a test fixture —
/// plugs in as an adapter. Lookups are by exact integral key; interpolation
/// over fractional charges and multiplicities is the resolver's concern, not
/// the dataset's.
pub trait AtomicDataset: Send + Sync {
    /// Identifier of this dataset, used in error messages and logs.
    fn name(&self) -> &str;

    /// Returns the record tabulated for an exact species key, if any.
    ///
    /// Absence is meaningful (the resolver turns it into a species-not-found or
    /// interpolation-range error) and therefore reported as `None` rather than
    /// an error.
    fn lookup(&self, key: &SpeciesKey) -> Option<Arc<AtomicRecord>>;
}
