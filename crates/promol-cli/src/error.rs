use promol::core::data::store::DatasetLoadError;
use promol::engine::error::EvaluationError;
use promol::workflows::build::BuildError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetLoadError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Molecule(#[from] crate::molecule::MoleculeFileError),

    #[error("Failed to read points from '{path}': {source}", path = path.display())]
    PointsParsing {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV output error: {0}")]
    CsvOutput(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),
}
