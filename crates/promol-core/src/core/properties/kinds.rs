use nalgebra::{Matrix3, Vector3};
use std::fmt;
use std::str::FromStr;

/// Spin channel selector for spatially resolved properties.
///
/// Atomic reference tables are stored per spin channel; the `Total` channel is
/// the sum of the alpha and beta contributions and is what most callers want.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpinChannel {
    /// Spin-up electrons only.
    Alpha,
    /// Spin-down electrons only.
    Beta,
    /// Alpha plus beta: the spin-summed property.
    #[default]
    Total,
}

/// Per-atom scalar properties aggregated over a promolecule.
///
/// Whether a given kind is available depends on the active dataset; requesting
/// an untabulated kind is an explicit error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Atomic mass in unified atomic mass units.
    Mass,
    /// Total electronic energy of the isolated atom, in hartree.
    Energy,
    /// Number of electrons.
    ElectronCount,
    /// Number of unpaired electrons (signed by polarity).
    SpinCount,
    /// First ionization potential, in hartree.
    IonizationPotential,
}

/// Spatially resolved property fields evaluated on query grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Electron density.
    Density,
    /// Positive-definite kinetic-energy density.
    KineticEnergyDensity,
    /// Density gradient, a 3-vector per point.
    Gradient,
    /// Density Laplacian.
    Laplacian,
    /// Density Hessian, a symmetric 3x3 tensor per point.
    Hessian,
}

/// The per-point result shape of a field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// One value per point.
    Scalar,
    /// Three components per point.
    Vector,
    /// A symmetric 3x3 tensor per point.
    Tensor,
}

impl FieldKind {
    pub fn shape(self) -> FieldShape {
        match self {
            FieldKind::Density | FieldKind::KineticEnergyDensity | FieldKind::Laplacian => {
                FieldShape::Scalar
            }
            FieldKind::Gradient => FieldShape::Vector,
            FieldKind::Hessian => FieldShape::Tensor,
        }
    }

    /// The log transform is defined for scalar-shaped fields only.
    pub fn supports_log(self) -> bool {
        self.shape() == FieldShape::Scalar
    }
}

/// A batch of field values, one entry per query point, shaped per [`FieldKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldBatch {
    Scalar(Vec<f64>),
    Vector(Vec<Vector3<f64>>),
    Tensor(Vec<Matrix3<f64>>),
}

impl FieldBatch {
    pub fn len(&self) -> usize {
        match self {
            FieldBatch::Scalar(v) => v.len(),
            FieldBatch::Vector(v) => v.len(),
            FieldBatch::Tensor(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unwraps a scalar batch, returning `None` for vector or tensor data.
    pub fn as_scalar(&self) -> Option<&[f64]> {
        match self {
            FieldBatch::Scalar(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for SpinChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpinChannel::Alpha => "alpha",
            SpinChannel::Beta => "beta",
            SpinChannel::Total => "ab",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Mass => "mass",
            ScalarKind::Energy => "energy",
            ScalarKind::ElectronCount => "nelec",
            ScalarKind::SpinCount => "nspin",
            ScalarKind::IonizationPotential => "ip",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Density => "density",
            FieldKind::KineticEnergyDensity => "ked",
            FieldKind::Gradient => "gradient",
            FieldKind::Laplacian => "laplacian",
            FieldKind::Hessian => "hessian",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SpinChannel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Ok(SpinChannel::Alpha),
            "b" | "beta" => Ok(SpinChannel::Beta),
            "ab" | "total" | "alpha+beta" => Ok(SpinChannel::Total),
            _ => Err(()),
        }
    }
}

impl FromStr for ScalarKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mass" => Ok(ScalarKind::Mass),
            "energy" => Ok(ScalarKind::Energy),
            "nelec" | "electron-count" | "electron_count" => Ok(ScalarKind::ElectronCount),
            "nspin" | "spin-count" | "spin_count" => Ok(ScalarKind::SpinCount),
            "ip" | "ionization-potential" | "ionization_potential" => {
                Ok(ScalarKind::IonizationPotential)
            }
            _ => Err(()),
        }
    }
}

impl FromStr for FieldKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "density" | "rho" => Ok(FieldKind::Density),
            "ked" | "kinetic-energy-density" | "kinetic_energy_density" => {
                Ok(FieldKind::KineticEnergyDensity)
            }
            "gradient" => Ok(FieldKind::Gradient),
            "laplacian" => Ok(FieldKind::Laplacian),
            "hessian" => Ok(FieldKind::Hessian),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_shapes_match_their_kinds() {
        assert_eq!(FieldKind::Density.shape(), FieldShape::Scalar);
        assert_eq!(FieldKind::KineticEnergyDensity.shape(), FieldShape::Scalar);
        assert_eq!(FieldKind::Laplacian.shape(), FieldShape::Scalar);
        assert_eq!(FieldKind::Gradient.shape(), FieldShape::Vector);
        assert_eq!(FieldKind::Hessian.shape(), FieldShape::Tensor);
    }

    #[test]
    fn log_transform_is_only_supported_for_scalar_shapes() {
        assert!(FieldKind::Density.supports_log());
        assert!(FieldKind::KineticEnergyDensity.supports_log());
        assert!(FieldKind::Laplacian.supports_log());
        assert!(!FieldKind::Gradient.supports_log());
        assert!(!FieldKind::Hessian.supports_log());
    }

    #[test]
    fn spin_channel_parses_short_and_long_spellings() {
        assert_eq!(SpinChannel::from_str("a"), Ok(SpinChannel::Alpha));
        assert_eq!(SpinChannel::from_str("alpha"), Ok(SpinChannel::Alpha));
        assert_eq!(SpinChannel::from_str("B"), Ok(SpinChannel::Beta));
        assert_eq!(SpinChannel::from_str("ab"), Ok(SpinChannel::Total));
        assert_eq!(SpinChannel::from_str("alpha+beta"), Ok(SpinChannel::Total));
        assert_eq!(SpinChannel::from_str("up"), Err(()));
    }

    #[test]
    fn scalar_kind_parses_short_and_long_names() {
        assert_eq!(ScalarKind::from_str("mass"), Ok(ScalarKind::Mass));
        assert_eq!(ScalarKind::from_str("nelec"), Ok(ScalarKind::ElectronCount));
        assert_eq!(
            ScalarKind::from_str("electron-count"),
            Ok(ScalarKind::ElectronCount)
        );
        assert_eq!(
            ScalarKind::from_str("IP"),
            Ok(ScalarKind::IonizationPotential)
        );
        assert_eq!(ScalarKind::from_str("charge"), Err(()));
    }

    #[test]
    fn field_kind_parse_round_trips_through_display() {
        for kind in [
            FieldKind::Density,
            FieldKind::KineticEnergyDensity,
            FieldKind::Gradient,
            FieldKind::Laplacian,
            FieldKind::Hessian,
        ] {
            assert_eq!(FieldKind::from_str(&kind.to_string()), Ok(kind));
        }
    }

    #[test]
    fn field_batch_reports_length_and_scalar_access() {
        let batch = FieldBatch::Scalar(vec![1.0, 2.0]);
        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
        assert_eq!(batch.as_scalar(), Some(&[1.0, 2.0][..]));

        let vectors = FieldBatch::Vector(vec![Vector3::zeros()]);
        assert_eq!(vectors.len(), 1);
        assert!(vectors.as_scalar().is_none());
    }
}
