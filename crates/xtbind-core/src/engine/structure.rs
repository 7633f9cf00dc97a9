use crate::core::diagnostics::Diagnostics;
use crate::core::models::geometry::Geometry;
use crate::engine::compute::ComputeEngine;
use crate::engine::error::EngineError;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Engine-screened molecular structure handle.
///
/// Construction runs the full local validation of
/// [`Geometry::from_arrays`] and then the engine's own geometry screen, so
/// a `Structure` value always refers to input the engine has accepted.
/// Updates are atomic: a rejected replacement leaves the previous geometry
/// untouched.
pub struct Structure {
    geometry: Geometry,
    engine: Arc<dyn ComputeEngine>,
    diagnostics: Diagnostics,
}

impl Structure {
    /// Validates and screens a new structure.
    ///
    /// `coordinates` and `lattice` are flat row-major arrays in bohr; see
    /// [`Geometry::from_arrays`] for the shape rules and the periodicity
    /// defaults.
    ///
    /// # Errors
    ///
    /// Shape violations surface as
    /// [`EngineError::Validation`]; an engine-side rejection (for example
    /// two coincident nuclei) as [`EngineError::Initialization`], with the
    /// engine's diagnostic text recorded in the shared log.
    pub fn new(
        engine: Arc<dyn ComputeEngine>,
        diagnostics: Diagnostics,
        numbers: &[u32],
        coordinates: &[f64],
        lattice: Option<&[f64]>,
        periodic: Option<[bool; 3]>,
    ) -> Result<Self, EngineError> {
        let geometry = Geometry::from_arrays(numbers, coordinates, lattice, periodic)?;
        if let Err(rejection) = engine.screen(&geometry) {
            let reason = rejection.to_string();
            diagnostics.record(format!("structure rejected: {reason}"));
            warn!(engine = engine.name(), %reason, "structure initialization rejected");
            return Err(EngineError::Initialization(reason));
        }
        debug!(
            natoms = geometry.len(),
            periodic = geometry.is_periodic(),
            "structure initialized"
        );
        Ok(Self {
            geometry,
            engine,
            diagnostics,
        })
    }

    /// Replaces the Cartesian coordinates (and optionally the lattice),
    /// re-validating and re-screening first.
    ///
    /// The update is atomic: on any error the structure still holds its
    /// previous geometry, bit for bit.
    ///
    /// # Errors
    ///
    /// Shape violations surface as [`EngineError::Validation`]; an
    /// engine-side rejection of the new geometry as [`EngineError::Update`].
    pub fn update(
        &mut self,
        coordinates: &[f64],
        lattice: Option<&[f64]>,
    ) -> Result<(), EngineError> {
        let candidate = self.geometry.with_coordinates(coordinates, lattice)?;
        if let Err(rejection) = self.engine.screen(&candidate) {
            let reason = rejection.to_string();
            self.diagnostics.record(format!("update rejected: {reason}"));
            warn!(engine = self.engine.name(), %reason, "structure update rejected");
            return Err(EngineError::Update(reason));
        }
        self.geometry = candidate;
        Ok(())
    }

    /// Redirects subsequent diagnostic output to `path`; purely an I/O
    /// concern, shared with every object holding the same diagnostics
    /// handle.
    pub fn set_output(&self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        self.diagnostics.set_output(path)?;
        Ok(())
    }

    /// Reverts diagnostic output to stderr.
    pub fn release_output(&self) {
        self.diagnostics.release_output();
    }

    /// Flushes pending diagnostic text, prefixed by `message`. I/O
    /// problems while flushing are logged and swallowed; callers do not
    /// check this.
    pub fn show(&self, message: &str) {
        if let Err(error) = self.diagnostics.flush(message) {
            warn!(%error, "failed to flush diagnostics");
        }
    }

    /// The validated geometry this handle currently holds.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.geometry.len()
    }

    /// Always false; empty structures cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }

    pub(crate) fn engine(&self) -> &Arc<dyn ComputeEngine> {
        &self.engine
    }

    pub(crate) fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

impl std::fmt::Debug for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Structure")
            .field("natoms", &self.geometry.len())
            .field("periodic", &self.geometry.is_periodic())
            .field("engine", &self.engine.name())
            .finish()
    }
}
