//! # Core Models Module
//!
//! Data structures representing isolated-atom reference data in promol.
//!
//! ## Overview
//!
//! The models module defines the identities and payloads the rest of the library
//! computes with:
//!
//! - **Species identities** - Integral dataset keys and possibly-fractional
//!   requests for atomic species
//! - **Radial tables** - Tabulated spherically symmetric property profiles and
//!   their reconstruction into 3D scalar, vector, and tensor fields
//! - **Atomic records** - One immutable tabulated atom: scalar properties plus
//!   radial tables
//!
//! All models are immutable once constructed; property evaluation is a pure
//! read.
//!
//! ## Key Components
//!
//! - [`species`] - [`species::SpeciesKey`] and [`species::SpeciesSpec`]
//! - [`radial`] - [`radial::RadialTables`] and radial interpolation
//! - [`record`] - [`record::AtomicRecord`] and per-record field evaluation

pub mod radial;
pub mod record;
pub mod species;
