use crate::core::models::geometry::Geometry;
use crate::engine::compute::{ComputeEngine, ComputeError, Evaluation, EvaluationRequest};
use crate::engine::method::Method;
use crate::engine::options::Verbosity;
use crate::engine::screening;
use nalgebra::{DMatrix, Matrix3, Vector3};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// One `evaluate` call as the mock saw it, for marshaling assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedRequest {
    pub method: Method,
    pub natoms: usize,
    pub periodic: bool,
    pub restarted: bool,
    pub verbosity: Verbosity,
    pub accuracy: Option<f64>,
    pub electronic_temperature: Option<f64>,
    pub max_iterations: Option<usize>,
}

#[derive(Default)]
struct MockState {
    scripted: HashMap<Method, VecDeque<Evaluation>>,
    failures: VecDeque<ComputeError>,
    observed: Vec<ObservedRequest>,
}

/// Deterministic stand-in for the native numerical engine.
///
/// The lifecycle-relevant behavior is real: geometries are screened with
/// [`screening::screen`], and a periodic structure evaluated with a
/// molecular-only method is rejected exactly like the native engine would
/// reject it. The numbers, however, are either scripted per method (queue
/// reference evaluations with [`script`](Self::script) or
/// [`with_evaluation`](Self::with_evaluation)) or synthesized as zeros, so
/// tests of the binding never depend on an actual tight-binding solver.
///
/// Every `evaluate` call is recorded and can be inspected through
/// [`observed`](Self::observed); injected failures
/// ([`queue_failure`](Self::queue_failure)) take precedence over scripted
/// results.
#[derive(Default)]
pub struct MockEngine {
    state: Mutex<MockState>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`script`](Self::script).
    pub fn with_evaluation(self, method: Method, evaluation: Evaluation) -> Self {
        self.script(method, evaluation);
        self
    }

    /// Queues a canned evaluation for `method`. Queued evaluations are
    /// consumed in order; when the queue for a method is empty, a zero
    /// evaluation sized to the request is synthesized instead.
    pub fn script(&self, method: Method, evaluation: Evaluation) {
        self.lock().scripted.entry(method).or_default().push_back(evaluation);
    }

    /// Makes the next `evaluate` call fail with `error`, regardless of any
    /// scripted results.
    pub fn queue_failure(&self, error: ComputeError) {
        self.lock().failures.push_back(error);
    }

    /// Number of `evaluate` calls so far.
    pub fn calls(&self) -> usize {
        self.lock().observed.len()
    }

    /// Every `evaluate` call seen so far, oldest first.
    pub fn observed(&self) -> Vec<ObservedRequest> {
        self.lock().observed.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn synthesize(geometry: &Geometry) -> Evaluation {
        let natoms = geometry.len();
        Evaluation {
            energy: -0.5 * natoms as f64,
            gradient: vec![Vector3::zeros(); natoms],
            dipole: Some(Vector3::zeros()),
            charges: Some(vec![0.0; natoms]),
            bond_orders: Some(DMatrix::zeros(natoms, natoms)),
            virial: Some(Matrix3::zeros()),
        }
    }
}

impl ComputeEngine for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    fn screen(&self, geometry: &Geometry) -> Result<(), ComputeError> {
        screening::screen(geometry)
    }

    fn evaluate(&self, request: EvaluationRequest<'_>) -> Result<Evaluation, ComputeError> {
        let periodic = request.geometry.is_periodic();
        {
            let mut state = self.lock();
            state.observed.push(ObservedRequest {
                method: request.method,
                natoms: request.geometry.len(),
                periodic,
                restarted: request.restart.is_some_and(|hint| !hint.is_empty()),
                verbosity: request.options.verbosity(),
                accuracy: request.options.accuracy(),
                electronic_temperature: request.options.electronic_temperature(),
                max_iterations: request.options.max_iterations(),
            });

            if let Some(error) = state.failures.pop_front() {
                return Err(error);
            }
        }

        screening::screen(request.geometry)?;
        if periodic && !request.method.supports_periodic() {
            return Err(ComputeError::UnsupportedPeriodic {
                method: request.method,
            });
        }

        let mut evaluation = self
            .lock()
            .scripted
            .get_mut(&request.method)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Self::synthesize(request.geometry));

        if !request.method.computes_dipole(periodic) {
            evaluation.dipole = None;
        }
        if !request.method.computes_virial(periodic) {
            evaluation.virial = None;
        }
        Ok(evaluation)
    }
}
