//! # Workflows Module
//!
//! High-level, user-facing entry points of promol.
//!
//! ## Overview
//!
//! Workflows tie the `core` and `engine` layers together behind a small,
//! validated API. Construction is the only workflow this library needs: once a
//! [`crate::engine::promolecule::Promolecule`] exists, its query surface is the
//! whole of the public behavior.
//!
//! ## Architecture
//!
//! - **Promolecule Construction** ([`build`]) - A builder that validates input
//!   arrays, applies the one-time unit conversion, resolves every requested
//!   species against a dataset, and returns the immutable promolecule.

pub mod build;
