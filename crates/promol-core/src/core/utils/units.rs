use std::str::FromStr;

/// One Bohr radius expressed in Angstroms (CODATA 2018).
pub const BOHR_IN_ANGSTROM: f64 = 0.529177210903;

/// Length unit of caller-supplied coordinates.
///
/// All internal storage and evaluation is in atomic units (bohr); conversion
/// happens exactly once, when a promolecule is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Atomic units. The internal representation; conversion is the identity.
    #[default]
    Bohr,
    /// Angstroms, converted to bohr on input.
    Angstrom,
}

impl LengthUnit {
    /// Converts a coordinate value expressed in this unit to bohr.
    pub fn to_bohr(self, value: f64) -> f64 {
        match self {
            LengthUnit::Bohr => value,
            LengthUnit::Angstrom => value / BOHR_IN_ANGSTROM,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bohr" | "au" | "a.u." => Ok(LengthUnit::Bohr),
            "angstrom" | "ang" | "a" => Ok(LengthUnit::Angstrom),
            _ => Err(()),
        }
    }
}
