use crate::cli::ScalarArgs;
use crate::error::{CliError, Result};
use crate::molecule::MoleculeFile;
use promol::core::data::store::DatasetStore;
use promol::core::properties::kinds::ScalarKind;
use std::str::FromStr;
use tracing::info;

pub fn run(args: ScalarArgs) -> Result<()> {
    let kind = ScalarKind::from_str(&args.kind)
        .map_err(|_| CliError::Argument(format!("unknown scalar kind '{}'", args.kind)))?;

    let store = DatasetStore::load(&args.dataset)?;
    let molecule = MoleculeFile::load(&args.molecule)?;
    let promolecule = molecule.into_builder().build(&store)?;

    let value = match args.power {
        Some(power) => {
            info!(%kind, power, "Computing intensive scalar property.");
            promolecule.intensive_scalar(kind, power)?
        }
        None => {
            info!(%kind, "Computing extensive scalar property.");
            promolecule.extensive_scalar(kind)?
        }
    };

    println!("{} = {}", kind, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    const DATASET_TOML: &str = r#"
name = "test-set"

[[species]]
atomic_number = 1
charge = 0
multiplicity = 1
mass = 1.008
energy = -0.5

[species.radial]
r = [0.0, 1.0, 2.0]
density_alpha = [0.3, 0.1, 0.0]
density_beta = [0.3, 0.1, 0.0]
density_d1_alpha = [-0.3, -0.2, -0.05]
density_d1_beta = [-0.3, -0.2, -0.05]
density_d2_alpha = [0.3, 0.1, 0.05]
density_d2_beta = [0.3, 0.1, 0.05]
"#;

    const MOLECULE_TOML: &str = r#"
[[atoms]]
element = "H"
position = [0.0, 0.0, 0.0]

[[atoms]]
element = "H"
position = [0.0, 0.0, 1.4]
"#;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn computes_an_extensive_scalar_end_to_end() {
        let dir = TempDir::new().unwrap();
        let args = ScalarArgs {
            dataset: write_file(&dir, "set.toml", DATASET_TOML),
            molecule: write_file(&dir, "mol.toml", MOLECULE_TOML),
            kind: "mass".to_string(),
            power: None,
        };

        assert!(run(args).is_ok());
    }

    #[test]
    fn computes_an_intensive_scalar_end_to_end() {
        let dir = TempDir::new().unwrap();
        let args = ScalarArgs {
            dataset: write_file(&dir, "set.toml", DATASET_TOML),
            molecule: write_file(&dir, "mol.toml", MOLECULE_TOML),
            kind: "mass".to_string(),
            power: Some(1.0),
        };

        assert!(run(args).is_ok());
    }

    #[test]
    fn unknown_kind_is_an_argument_error() {
        let dir = TempDir::new().unwrap();
        let args = ScalarArgs {
            dataset: write_file(&dir, "set.toml", DATASET_TOML),
            molecule: write_file(&dir, "mol.toml", MOLECULE_TOML),
            kind: "volume".to_string(),
            power: None,
        };

        assert!(matches!(run(args), Err(CliError::Argument(_))));
    }

    #[test]
    fn untabulated_kind_propagates_the_evaluation_error() {
        let dir = TempDir::new().unwrap();
        let args = ScalarArgs {
            dataset: write_file(&dir, "set.toml", DATASET_TOML),
            molecule: write_file(&dir, "mol.toml", MOLECULE_TOML),
            kind: "ip".to_string(),
            power: None,
        };

        assert!(matches!(run(args), Err(CliError::Evaluation(_))));
    }
}
