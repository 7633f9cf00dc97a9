//! # Engine Layer
//!
//! This module owns the calculation lifecycle of the binding: screened
//! structure handles, calculator configuration, single-point dispatch, and
//! result retrieval.
//!
//! ## Overview
//!
//! The numerical engine itself is opaque and sits behind the
//! [`compute::ComputeEngine`] trait; everything in this layer is the
//! validation and error-translation glue around it. The control flow a
//! caller sees is:
//!
//! 1. construct a [`structure::Structure`] (local validation, then the
//!    engine's geometry screen),
//! 2. bind it to a [`method::Method`] and [`options::CalculationOptions`]
//!    in a [`calculator::Calculator`],
//! 3. run [`calculator::Calculator::singlepoint`], optionally restarting
//!    from an earlier [`results::Results`],
//! 4. read properties back through the availability-checked accessors.
//!
//! Failures at every step are [`error::EngineError`]s; objects under a
//! failed operation keep their last known-good state.

pub mod calculator;
pub mod compute;
pub mod error;
pub mod method;
pub mod mock;
pub mod options;
pub mod results;
pub mod screening;
pub mod structure;
