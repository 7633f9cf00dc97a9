//! Data models for the binding layer.
//!
//! The central type is [`geometry::Geometry`], the validated container for
//! atomic numbers, Cartesian positions, and an optional periodic lattice.
//! [`elements`] provides the static element-symbol table used by input
//! parsing and reporting.

pub mod elements;
pub mod geometry;

pub use geometry::{Geometry, ValidationError};
