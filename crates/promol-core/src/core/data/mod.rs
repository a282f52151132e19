//! # Reference Data Module
//!
//! Access to tabulated isolated-atom reference data.
//!
//! ## Overview
//!
//! The promolecule evaluator is backend-agnostic: it consumes any type
//! implementing the [`provider::AtomicDataset`] capability interface, which maps
//! integral species keys to immutable [`crate::core::models::record::AtomicRecord`]s.
//! The bundled backend is [`store::DatasetStore`], a TOML-tabulated dataset
//! loaded with a raw-then-validate pass; alternative formats are adapters
//! implementing the same trait.

pub mod provider;
pub mod store;
