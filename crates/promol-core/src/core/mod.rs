//! # Core Module
//!
//! This module provides the fundamental building blocks for promolecular property
//! evaluation, serving as the stateless computational core of the library.
//!
//! ## Overview
//!
//! The core module defines how isolated-atom reference data is represented, parsed,
//! and evaluated. Everything in this layer is a pure function of immutable inputs:
//! there is no optimization state, no caching, and no I/O beyond one-time dataset
//! loading.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Atomic Representation** ([`models`]) - Species identities, tabulated atomic
//!   records, and radial property tables with their spherical-field reconstruction
//! - **Property Taxonomy** ([`properties`]) - The closed enumeration of scalar and
//!   spatial property kinds, spin channels, result shapes, and generalized means
//! - **Reference Data** ([`data`]) - The dataset capability interface and the
//!   TOML-tabulated backend implementing it
//! - **Shared Utilities** ([`utils`]) - Element symbol tables and length units

pub mod data;
pub mod models;
pub mod properties;
pub mod utils;
