use crate::cli::EvalArgs;
use crate::error::{CliError, Result};
use crate::molecule::MoleculeFile;
use nalgebra::Point3;
use promol::core::data::store::DatasetStore;
use promol::core::properties::kinds::{FieldBatch, FieldKind, SpinChannel};
use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Deserialize)]
struct PointRow {
    x: f64,
    y: f64,
    z: f64,
}

pub fn run(args: EvalArgs) -> Result<()> {
    let kind = FieldKind::from_str(&args.kind)
        .map_err(|_| CliError::Argument(format!("unknown field kind '{}'", args.kind)))?;
    let spin = SpinChannel::from_str(&args.spin)
        .map_err(|_| CliError::Argument(format!("unknown spin channel '{}'", args.spin)))?;

    let store = DatasetStore::load(&args.dataset)?;
    let molecule = MoleculeFile::load(&args.molecule)?;
    let promolecule = molecule.into_builder().build(&store)?;
    let points = read_points(&args.points)?;

    info!(
        %kind,
        %spin,
        log = args.log,
        points = points.len(),
        "Evaluating property field."
    );
    let batch = promolecule.field(kind, &points, spin, args.log)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_output(file, &points, &batch)?;
        }
        None => write_output(std::io::stdout(), &points, &batch)?,
    }
    Ok(())
}

fn read_points(path: &Path) -> Result<Vec<Point3<f64>>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| CliError::PointsParsing {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut points = Vec::new();
    for row in reader.deserialize::<PointRow>() {
        let row = row.map_err(|e| CliError::PointsParsing {
            path: path.to_path_buf(),
            source: e,
        })?;
        points.push(Point3::new(row.x, row.y, row.z));
    }
    Ok(points)
}

fn write_output<W: Write>(writer: W, points: &[Point3<f64>], batch: &FieldBatch) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    match batch {
        FieldBatch::Scalar(values) => {
            csv_writer.write_record(["x", "y", "z", "value"])?;
            for (point, value) in points.iter().zip(values) {
                csv_writer.serialize((point.x, point.y, point.z, value))?;
            }
        }
        FieldBatch::Vector(vectors) => {
            csv_writer.write_record(["x", "y", "z", "gx", "gy", "gz"])?;
            for (point, vector) in points.iter().zip(vectors) {
                csv_writer.serialize((point.x, point.y, point.z, vector.x, vector.y, vector.z))?;
            }
        }
        FieldBatch::Tensor(tensors) => {
            csv_writer.write_record(["x", "y", "z", "xx", "xy", "xz", "yy", "yz", "zz"])?;
            for (point, tensor) in points.iter().zip(tensors) {
                csv_writer.serialize((
                    point.x,
                    point.y,
                    point.z,
                    tensor[(0, 0)],
                    tensor[(0, 1)],
                    tensor[(0, 2)],
                    tensor[(1, 1)],
                    tensor[(1, 2)],
                    tensor[(2, 2)],
                ))?;
            }
        }
    }

    csv_writer.flush()?;
    Ok(())
}
