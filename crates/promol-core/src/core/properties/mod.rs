//! # Properties Module
//!
//! The closed taxonomy of promolecular properties and the pure math shared by
//! their aggregation.
//!
//! ## Overview
//!
//! Every property a promolecule can be queried for is a member of one of two
//! closed enumerations: [`kinds::ScalarKind`] for per-atom scalars (mass, energy,
//! electron count, ...) and [`kinds::FieldKind`] for spatially resolved fields
//! (density, kinetic-energy density, gradient, Laplacian, Hessian). Each field
//! kind carries its own result shape and log-transform validity, so illegal
//! parameter combinations are rejected up front instead of dispatching on open
//! strings.
//!
//! ## Key Components
//!
//! - [`kinds`] - Scalar/field kind enumerations, spin channels, result shapes
//! - [`mean`] - The generalized power mean used for intensive properties

pub mod kinds;
pub mod mean;
