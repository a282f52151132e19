use super::provider::AtomicDataset;
use crate::core::models::radial::{RadialTableError, RadialTables, SpinPair};
use crate::core::models::record::AtomicRecord;
use crate::core::models::species::SpeciesKey;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Deserialized shape of a dataset TOML file, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDataset {
    name: String,
    #[serde(default)]
    species: Vec<RawSpecies>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSpecies {
    atomic_number: u32,
    charge: i32,
    multiplicity: i32,
    mass: f64,
    energy: f64,
    electron_count: Option<f64>,
    spin_count: Option<f64>,
    ionization_potential: Option<f64>,
    radial: RawRadial,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRadial {
    r: Vec<f64>,
    density_alpha: Vec<f64>,
    density_beta: Vec<f64>,
    density_d1_alpha: Vec<f64>,
    density_d1_beta: Vec<f64>,
    density_d2_alpha: Vec<f64>,
    density_d2_beta: Vec<f64>,
    kinetic_alpha: Option<Vec<f64>>,
    kinetic_beta: Option<Vec<f64>>,
}

#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Duplicate species {key} in dataset '{dataset}'")]
    DuplicateSpecies { dataset: String, key: SpeciesKey },

    #[error("Invalid radial tables for species {key} in dataset '{dataset}': {source}")]
    Radial {
        dataset: String,
        key: SpeciesKey,
        source: RadialTableError,
    },

    #[error(
        "Species {key} in dataset '{dataset}' tabulates only one kinetic spin channel; both or neither are required"
    )]
    KineticChannelMismatch { dataset: String, key: SpeciesKey },
}

/// The bundled TOML-tabulated dataset backend.
///
/// A store is loaded once, validated species by species, and immutable
/// afterward. Records are shared via `Arc` so that promolecules built from the
/// store stay valid independently of it.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    name: String,
    records: HashMap<SpeciesKey, Arc<AtomicRecord>>,
}

impl DatasetStore {
    /// Loads and validates a dataset from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetLoadError::Io`] if the file cannot be read,
    /// [`DatasetLoadError::Toml`] if it is not valid TOML, and the validation
    /// variants if the tabulated content is inconsistent.
    pub fn load(path: &Path) -> Result<Self, DatasetLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| DatasetLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let raw: RawDataset = toml::from_str(&content).map_err(|e| DatasetLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut records = Vec::with_capacity(raw.species.len());
        for raw_species in raw.species {
            records.push(Self::process_raw_species(&raw.name, raw_species)?);
        }

        let store = Self::from_records(raw.name, records)?;
        tracing::info!(
            dataset = %store.name,
            species = store.len(),
            "Loaded atomic reference dataset."
        );
        Ok(store)
    }

    /// Builds a store from records constructed in code.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetLoadError::DuplicateSpecies`] if two records share a key.
    pub fn from_records(
        name: impl Into<String>,
        records: Vec<AtomicRecord>,
    ) -> Result<Self, DatasetLoadError> {
        let name = name.into();
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            let key = record.key;
            if map.insert(key, Arc::new(record)).is_some() {
                return Err(DatasetLoadError::DuplicateSpecies { dataset: name, key });
            }
        }
        Ok(Self { name, records: map })
    }

    fn process_raw_species(
        dataset: &str,
        raw: RawSpecies,
    ) -> Result<AtomicRecord, DatasetLoadError> {
        let key = SpeciesKey::new(raw.atomic_number, raw.charge, raw.multiplicity);

        let kinetic = match (raw.radial.kinetic_alpha, raw.radial.kinetic_beta) {
            (Some(alpha), Some(beta)) => Some(SpinPair { alpha, beta }),
            (None, None) => None,
            _ => {
                return Err(DatasetLoadError::KineticChannelMismatch {
                    dataset: dataset.to_string(),
                    key,
                });
            }
        };

        let radial = RadialTables::new(
            raw.radial.r,
            SpinPair {
                alpha: raw.radial.density_alpha,
                beta: raw.radial.density_beta,
            },
            SpinPair {
                alpha: raw.radial.density_d1_alpha,
                beta: raw.radial.density_d1_beta,
            },
            SpinPair {
                alpha: raw.radial.density_d2_alpha,
                beta: raw.radial.density_d2_beta,
            },
            kinetic,
        )
        .map_err(|source| DatasetLoadError::Radial {
            dataset: dataset.to_string(),
            key,
            source,
        })?;

        Ok(AtomicRecord {
            key,
            mass: raw.mass,
            energy: raw.energy,
            electron_count: raw.electron_count,
            spin_count: raw.spin_count,
            ionization_potential: raw.ionization_potential,
            radial,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tabulated species keys, sorted for deterministic listings.
    pub fn species_keys(&self) -> Vec<SpeciesKey> {
        let mut keys: Vec<_> = self.records.keys().copied().collect();
        keys.sort_by_key(|k| (k.atomic_number, k.charge, k.multiplicity));
        keys
    }
}

impl AtomicDataset for DatasetStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, key: &SpeciesKey) -> Option<Arc<AtomicRecord>> {
        self.records.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    const HYDROGEN_TOML: &str = r#"
name = "test-set"

[[species]]
atomic_number = 1
charge = 0
multiplicity = 2
mass = 1.008
energy = -0.5

[species.radial]
r = [0.0, 1.0, 2.0]
density_alpha = [0.3, 0.1, 0.05]
density_beta = [0.0, 0.0, 0.0]
density_d1_alpha = [-0.3, -0.2, -0.05]
density_d1_beta = [0.0, 0.0, 0.0]
density_d2_alpha = [0.3, 0.1, 0.05]
density_d2_beta = [0.0, 0.0, 0.0]
kinetic_alpha = [0.2, 0.1, 0.05]
kinetic_beta = [0.0, 0.0, 0.0]
"#;

    fn write_dataset(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn loads_a_valid_dataset_file() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, "set.toml", HYDROGEN_TOML);

        let store = DatasetStore::load(&path).unwrap();

        assert_eq!(store.name(), "test-set");
        assert_eq!(store.len(), 1);
        let record = store.lookup(&SpeciesKey::new(1, 0, 2)).unwrap();
        assert_eq!(record.mass, 1.008);
        assert_eq!(record.energy, -0.5);
        assert!(record.electron_count.is_none());
        assert!(record.radial.has_kinetic());
    }

    #[test]
    fn lookup_misses_return_none() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, "set.toml", HYDROGEN_TOML);
        let store = DatasetStore::load(&path).unwrap();

        assert!(store.lookup(&SpeciesKey::new(1, 1, 1)).is_none());
        assert!(store.lookup(&SpeciesKey::new(2, 0, 1)).is_none());
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = DatasetStore::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(DatasetLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, "bad.toml", "name = [unclosed");
        let result = DatasetStore::load(&path);
        assert!(matches!(result, Err(DatasetLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_non_monotonic_radial_grid() {
        let dir = TempDir::new().unwrap();
        let broken = HYDROGEN_TOML.replace("r = [0.0, 1.0, 2.0]", "r = [0.0, 1.0, 0.5]");
        let path = write_dataset(&dir, "set.toml", &broken);

        let result = DatasetStore::load(&path);
        assert!(matches!(
            result,
            Err(DatasetLoadError::Radial {
                source: RadialTableError::NonMonotonic(2),
                ..
            })
        ));
    }

    #[test]
    fn load_fails_for_mismatched_table_lengths() {
        let dir = TempDir::new().unwrap();
        let broken = HYDROGEN_TOML.replace(
            "kinetic_alpha = [0.2, 0.1, 0.05]",
            "kinetic_alpha = [0.2, 0.1]",
        );
        let path = write_dataset(&dir, "set.toml", &broken);

        let result = DatasetStore::load(&path);
        assert!(matches!(
            result,
            Err(DatasetLoadError::Radial {
                source: RadialTableError::LengthMismatch { .. },
                ..
            })
        ));
    }

    #[test]
    fn load_fails_when_only_one_kinetic_channel_is_present() {
        let dir = TempDir::new().unwrap();
        let broken = HYDROGEN_TOML.replace("kinetic_beta = [0.0, 0.0, 0.0]\n", "");
        let path = write_dataset(&dir, "set.toml", &broken);

        let result = DatasetStore::load(&path);
        assert!(matches!(
            result,
            Err(DatasetLoadError::KineticChannelMismatch { .. })
        ));
    }

    #[test]
    fn load_fails_for_duplicate_species() {
        let dir = TempDir::new().unwrap();
        let species_block = HYDROGEN_TOML.trim_start_matches("\nname = \"test-set\"\n");
        let duplicated = format!("name = \"test-set\"\n{0}\n{0}", species_block);
        let path = write_dataset(&dir, "set.toml", &duplicated);

        let result = DatasetStore::load(&path);
        assert!(matches!(
            result,
            Err(DatasetLoadError::DuplicateSpecies { .. })
        ));
    }

    #[test]
    fn species_keys_are_sorted() {
        let dir = TempDir::new().unwrap();
        let species_block = HYDROGEN_TOML.trim_start_matches("\nname = \"test-set\"\n");
        let second = species_block
            .replace("atomic_number = 1", "atomic_number = 2")
            .replace("multiplicity = 2", "multiplicity = 1");
        let two_species = format!("name = \"test-set\"\n{}\n{}", second, species_block);
        let path = write_dataset(&dir, "set.toml", &two_species);

        let store = DatasetStore::load(&path).unwrap();
        assert_eq!(
            store.species_keys(),
            vec![SpeciesKey::new(1, 0, 2), SpeciesKey::new(2, 0, 1)]
        );
    }
}
