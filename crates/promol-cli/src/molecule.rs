use nalgebra::Point3;
use promol::core::utils::elements;
use promol::core::utils::units::LengthUnit;
use promol::workflows::build::PromoleculeBuilder;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Deserialized shape of a molecule TOML file, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMolecule {
    units: Option<String>,
    #[serde(default)]
    atoms: Vec<RawAtom>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAtom {
    element: Option<String>,
    atomic_number: Option<u32>,
    position: [f64; 3],
    charge: Option<f64>,
    multiplicity: Option<f64>,
}

#[derive(Debug, Error)]
pub enum MoleculeFileError {
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

    #[error("Atom {index} has neither an 'element' symbol nor an 'atomic_number'")]
    MissingIdentity { index: usize },

    #[error("Unknown element symbol '{symbol}' for atom {index}")]
    UnknownElement { index: usize, symbol: String },

    #[error("Unknown length unit '{0}'; expected 'bohr' or 'angstrom'")]
    UnknownUnit(String),
}

/// A validated molecule input: per-atom species requests plus coordinates.
#[derive(Debug, Clone)]
pub struct MoleculeFile {
    pub atomic_numbers: Vec<u32>,
    pub coordinates: Vec<Point3<f64>>,
    pub charges: Vec<f64>,
    pub multiplicities: Vec<f64>,
    pub units: LengthUnit,
}

impl MoleculeFile {
    /// Loads and validates a molecule from a TOML file.
    ///
    /// Atoms may name their species by element symbol or atomic number;
    /// charges default to zero and multiplicities to one, and both may be
    /// fractional.
    pub fn load(path: &Path) -> Result<Self, MoleculeFileError> {
        let content = std::fs::read_to_string(path).map_err(|e| MoleculeFileError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let raw: RawMolecule = toml::from_str(&content).map_err(|e| MoleculeFileError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let units = match raw.units {
            Some(name) => {
                LengthUnit::from_str(&name).map_err(|_| MoleculeFileError::UnknownUnit(name))?
            }
            None => LengthUnit::Bohr,
        };

        let mut atomic_numbers = Vec::with_capacity(raw.atoms.len());
        let mut coordinates = Vec::with_capacity(raw.atoms.len());
        let mut charges = Vec::with_capacity(raw.atoms.len());
        let mut multiplicities = Vec::with_capacity(raw.atoms.len());

        for (index, atom) in raw.atoms.into_iter().enumerate() {
            let atomic_number = match (&atom.element, atom.atomic_number) {
                (_, Some(z)) => z,
                (Some(symbol), None) => elements::atomic_number(symbol).ok_or_else(|| {
                    MoleculeFileError::UnknownElement {
                        index,
                        symbol: symbol.clone(),
                    }
                })?,
                (None, None) => return Err(MoleculeFileError::MissingIdentity { index }),
            };

            atomic_numbers.push(atomic_number);
            coordinates.push(Point3::from(atom.position));
            charges.push(atom.charge.unwrap_or(0.0));
            multiplicities.push(atom.multiplicity.unwrap_or(1.0));
        }

        Ok(Self {
            atomic_numbers,
            coordinates,
            charges,
            multiplicities,
            units,
        })
    }

    /// Turns the parsed molecule into a ready-to-build promolecule builder.
    pub fn into_builder(self) -> PromoleculeBuilder {
        PromoleculeBuilder::new()
            .atomic_numbers(self.atomic_numbers)
            .coordinates(self.coordinates)
            .charges(self.charges)
            .multiplicities(self.multiplicities)
            .units(self.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_molecule(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("molecule.toml");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn loads_atoms_by_symbol_and_atomic_number() {
        let dir = TempDir::new().unwrap();
        let path = write_molecule(
            &dir,
            r#"
units = "angstrom"

[[atoms]]
element = "O"
position = [0.0, 0.0, 0.0]

[[atoms]]
atomic_number = 1
position = [0.0, 0.0, 0.96]
charge = 0.5
multiplicity = 2.0
"#,
        );

        let molecule = MoleculeFile::load(&path).unwrap();

        assert_eq!(molecule.atomic_numbers, vec![8, 1]);
        assert_eq!(molecule.units, LengthUnit::Angstrom);
        assert_eq!(molecule.charges, vec![0.0, 0.5]);
        assert_eq!(molecule.multiplicities, vec![1.0, 2.0]);
        assert_eq!(molecule.coordinates[1], Point3::new(0.0, 0.0, 0.96));
    }

    #[test]
    fn defaults_to_bohr_when_units_are_omitted() {
        let dir = TempDir::new().unwrap();
        let path = write_molecule(
            &dir,
            r#"
[[atoms]]
element = "H"
position = [0.0, 0.0, 0.0]
"#,
        );

        let molecule = MoleculeFile::load(&path).unwrap();
        assert_eq!(molecule.units, LengthUnit::Bohr);
    }

    #[test]
    fn rejects_atoms_without_identity() {
        let dir = TempDir::new().unwrap();
        let path = write_molecule(
            &dir,
            r#"
[[atoms]]
position = [0.0, 0.0, 0.0]
"#,
        );

        let result = MoleculeFile::load(&path);
        assert!(matches!(
            result,
            Err(MoleculeFileError::MissingIdentity { index: 0 })
        ));
    }

    #[test]
    fn rejects_unknown_element_symbols() {
        let dir = TempDir::new().unwrap();
        let path = write_molecule(
            &dir,
            r#"
[[atoms]]
element = "Qq"
position = [0.0, 0.0, 0.0]
"#,
        );

        let result = MoleculeFile::load(&path);
        assert!(matches!(
            result,
            Err(MoleculeFileError::UnknownElement { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_unknown_units() {
        let dir = TempDir::new().unwrap();
        let path = write_molecule(
            &dir,
            r#"
units = "parsec"

[[atoms]]
element = "H"
position = [0.0, 0.0, 0.0]
"#,
        );

        let result = MoleculeFile::load(&path);
        assert!(matches!(result, Err(MoleculeFileError::UnknownUnit(_))));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = MoleculeFile::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(MoleculeFileError::Io { .. })));
    }
}
