use crate::core::models::geometry::Geometry;
use crate::engine::method::Method;
use crate::engine::options::CalculationOptions;
use nalgebra::{DMatrix, Matrix3, Vector3};
use thiserror::Error;

/// Rejections produced by a numerical engine.
///
/// The display text of each variant is what ends up, verbatim, in the
/// diagnostic log and in the message of the [`EngineError`](crate::engine::error::EngineError)
/// it is translated into.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComputeError {
    #[error("nuclear fusion: atoms {first} and {second} are {separation:.4} bohr apart")]
    NuclearFusion {
        first: usize,
        second: usize,
        separation: f64,
    },

    #[error("{method} does not support periodic boundary conditions")]
    UnsupportedPeriodic { method: Method },

    #[error("self-consistent field did not converge within {iterations} iterations")]
    NotConverged { iterations: usize },

    #[error("{0}")]
    Other(String),
}

/// Populated fields of an earlier calculation, offered to the engine as an
/// initial guess. The hint is advisory: it need not be consistent with the
/// geometry being evaluated, and an engine is free to ignore it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestartHint<'a> {
    pub energy: Option<f64>,
    pub charges: Option<&'a [f64]>,
}

impl RestartHint<'_> {
    /// Whether the hint carries any information at all.
    pub fn is_empty(&self) -> bool {
        self.energy.is_none() && self.charges.is_none()
    }
}

/// Everything an engine needs for one single-point evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationRequest<'a> {
    pub geometry: &'a Geometry,
    pub method: Method,
    pub options: &'a CalculationOptions,
    pub restart: Option<RestartHint<'a>>,
}

/// Raw output of one single-point evaluation.
///
/// Energy and gradient are always present; the remaining properties are
/// populated only when the method/geometry combination supports them. The
/// gradient has one row per atom, charges one entry per atom, bond orders
/// an N x N matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub energy: f64,
    pub gradient: Vec<Vector3<f64>>,
    pub dipole: Option<Vector3<f64>>,
    pub charges: Option<Vec<f64>>,
    pub bond_orders: Option<DMatrix<f64>>,
    pub virial: Option<Matrix3<f64>>,
}

impl Evaluation {
    /// An energy-and-gradient-only evaluation for `natoms` atoms.
    pub fn new(energy: f64, gradient: Vec<Vector3<f64>>) -> Self {
        Self {
            energy,
            gradient,
            dipole: None,
            charges: None,
            bond_orders: None,
            virial: None,
        }
    }
}

/// Capability interface of the opaque numerical engine.
///
/// The binding layer is written against this trait only, so it can be
/// exercised with the deterministic [`MockEngine`](crate::engine::mock::MockEngine)
/// and later pointed at a real native library without touching the
/// lifecycle code. Implementations must be safe to share between threads;
/// callers are expected to serialize evaluations, so interior locking is
/// sufficient.
pub trait ComputeEngine: Send + Sync {
    /// Short human-readable engine label used in diagnostics.
    fn name(&self) -> &str;

    /// Final geometry sanity check, run when a structure is constructed or
    /// updated. A rejection here aborts the construction/update.
    fn screen(&self, geometry: &Geometry) -> Result<(), ComputeError>;

    /// Runs one blocking single-point evaluation.
    fn evaluate(&self, request: EvaluationRequest<'_>) -> Result<Evaluation, ComputeError>;
}
