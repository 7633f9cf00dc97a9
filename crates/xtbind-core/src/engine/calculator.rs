use crate::core::diagnostics::Diagnostics;
use crate::engine::compute::{ComputeEngine, Evaluation, EvaluationRequest};
use crate::engine::error::EngineError;
use crate::engine::method::Method;
use crate::engine::options::{CalculationOptions, Verbosity};
use crate::engine::results::Results;
use crate::engine::structure::Structure;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Reusable calculation context: one structure, one method
/// parametrization, and the configuration handed to the engine on every
/// evaluation.
///
/// Construction validates the structure (see [`Structure::new`]) but
/// deliberately accepts method/geometry combinations the method cannot
/// evaluate: a periodic structure under a molecular-only method fails at
/// [`singlepoint`](Self::singlepoint) time, not here, so the constructor
/// behaves identically for every method.
pub struct Calculator {
    structure: Structure,
    method: Method,
    options: CalculationOptions,
}

impl Calculator {
    /// Builds the structure from raw arrays and binds it to `method`.
    ///
    /// # Errors
    ///
    /// Exactly the failure modes of [`Structure::new`]: local shape
    /// validation first, then the engine's geometry screen.
    pub fn new(
        engine: Arc<dyn ComputeEngine>,
        diagnostics: Diagnostics,
        method: Method,
        numbers: &[u32],
        coordinates: &[f64],
        lattice: Option<&[f64]>,
        periodic: Option<[bool; 3]>,
    ) -> Result<Self, EngineError> {
        let structure = Structure::new(
            engine,
            diagnostics,
            numbers,
            coordinates,
            lattice,
            periodic,
        )?;
        Ok(Self::from_structure(structure, method))
    }

    /// Binds an already-screened structure to `method`.
    pub fn from_structure(structure: Structure, method: Method) -> Self {
        Self {
            structure,
            method,
            options: CalculationOptions::new(),
        }
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Mutable access to the owned structure, e.g. for coordinate updates
    /// between single points.
    pub fn structure_mut(&mut self) -> &mut Structure {
        &mut self.structure
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn options(&self) -> &CalculationOptions {
        &self.options
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.options.set_verbosity(verbosity);
    }

    /// See [`CalculationOptions::set_accuracy`].
    pub fn set_accuracy(&mut self, accuracy: f64) -> Result<(), EngineError> {
        self.options.set_accuracy(accuracy)
    }

    /// See [`CalculationOptions::set_electronic_temperature`].
    pub fn set_electronic_temperature(&mut self, temperature: f64) -> Result<(), EngineError> {
        self.options.set_electronic_temperature(temperature)
    }

    /// See [`CalculationOptions::set_max_iterations`].
    pub fn set_max_iterations(&mut self, iterations: usize) -> Result<(), EngineError> {
        self.options.set_max_iterations(iterations)
    }

    /// Cheap self-consistency probe of the calculator state, without
    /// running a calculation: re-screens the current geometry against the
    /// engine. Zero means healthy; any nonzero value is an opaque failure
    /// signal.
    pub fn check(&self) -> i32 {
        match self.structure.engine().screen(self.structure.geometry()) {
            Ok(()) => 0,
            Err(_) => 1,
        }
    }

    /// Runs a single-point calculation into a fresh [`Results`].
    pub fn singlepoint(&self) -> Result<Results, EngineError> {
        let mut results = Results::new(self);
        self.singlepoint_restart(&mut results)?;
        Ok(results)
    }

    /// Runs a single-point calculation, seeding the engine with the
    /// populated fields of `results` as an initial guess and updating
    /// `results` in place on success.
    ///
    /// # Errors
    ///
    /// [`EngineError::SinglePoint`] when the engine rejects or fails the
    /// evaluation (unsupported method/geometry combination,
    /// non-convergence, ...), and [`EngineError::Internal`] when the
    /// engine replies with arrays that do not match the structure. In
    /// both cases `results` keeps its pre-call state untouched.
    #[instrument(skip_all, fields(method = %self.method, natoms = self.structure.len()))]
    pub fn singlepoint_restart(&self, results: &mut Results) -> Result<(), EngineError> {
        let hint = results.restart_hint();
        let request = EvaluationRequest {
            geometry: self.structure.geometry(),
            method: self.method,
            options: &self.options,
            restart: (!hint.is_empty()).then_some(hint),
        };

        let evaluation = match self.structure.engine().evaluate(request) {
            Ok(evaluation) => evaluation,
            Err(failure) => {
                let reason = failure.to_string();
                self.structure
                    .diagnostics()
                    .record(format!("single point failed: {reason}"));
                warn!(engine = self.structure.engine().name(), %reason, "single point failed");
                return Err(EngineError::SinglePoint(reason));
            }
        };

        self.verify_shapes(&evaluation)?;
        info!(energy = evaluation.energy, "single point finished");
        results.apply(evaluation);
        Ok(())
    }

    /// Guards against an engine reply sized inconsistently with the
    /// structure; nothing is applied when this fails.
    fn verify_shapes(&self, evaluation: &Evaluation) -> Result<(), EngineError> {
        let natoms = self.structure.len();
        if evaluation.gradient.len() != natoms {
            return Err(EngineError::Internal(format!(
                "engine returned {} gradient rows for {natoms} atoms",
                evaluation.gradient.len()
            )));
        }
        if let Some(charges) = &evaluation.charges {
            if charges.len() != natoms {
                return Err(EngineError::Internal(format!(
                    "engine returned {} charges for {natoms} atoms",
                    charges.len()
                )));
            }
        }
        if let Some(bond_orders) = &evaluation.bond_orders {
            if bond_orders.shape() != (natoms, natoms) {
                return Err(EngineError::Internal(format!(
                    "engine returned a {:?} bond-order matrix for {natoms} atoms",
                    bond_orders.shape()
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn diagnostics(&self) -> &Diagnostics {
        self.structure.diagnostics()
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("method", &self.method)
            .field("natoms", &self.structure.len())
            .field("options", &self.options)
            .finish()
    }
}
