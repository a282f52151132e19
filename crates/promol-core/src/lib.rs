//! # Promol Core Library
//!
//! A library for promolecular modeling: molecular scalar and spatial properties are
//! estimated by superposing tabulated isolated-atom data at fixed nuclear positions,
//! without any self-consistent electronic-structure computation.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`AtomicRecord`,
//!   radial property tables), the closed property taxonomy (`ScalarKind`, `FieldKind`,
//!   `SpinChannel`), pure mathematics (radial interpolation, spherical field
//!   reconstruction, generalized means), and dataset I/O.
//!
//! - **[`engine`]: The Logic Core.** Resolves requested species — including fractional
//!   charges and multiplicities — into weighted combinations of tabulated records,
//!   holds the immutable `Promolecule` aggregate, and evaluates spatial property
//!   fields over arbitrary query grids in parallel.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It ties
//!   the `engine` and `core` together behind a validated builder that turns atomic
//!   numbers, coordinates, and optional charges/multiplicities into a ready-to-query
//!   `Promolecule`.

pub mod core;
pub mod engine;
pub mod workflows;
