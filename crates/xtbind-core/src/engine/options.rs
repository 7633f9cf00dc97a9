use crate::engine::error::EngineError;

/// How much diagnostic output the engine is allowed to produce.
///
/// The levels are ordered; anything at or below the configured level is
/// emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No diagnostic output at all.
    Muted,
    /// Errors and a one-line summary per calculation.
    Minimal,
    /// Everything the engine prints.
    #[default]
    Full,
}

/// Accuracy multipliers outside this range are rejected rather than
/// silently clamped.
pub const ACCURACY_RANGE: std::ops::RangeInclusive<f64> = 1.0e-4..=1.0e3;

/// Configuration handed to the engine with every evaluation.
///
/// Unset values mean "use the engine-side default"; the binding never
/// substitutes its own numbers. All mutation goes through the
/// range-checked setters, so a held value is always valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationOptions {
    verbosity: Verbosity,
    accuracy: Option<f64>,
    electronic_temperature: Option<f64>,
    max_iterations: Option<usize>,
}

impl CalculationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    pub fn electronic_temperature(&self) -> Option<f64> {
        self.electronic_temperature
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Sets the numerical accuracy multiplier (lower is tighter).
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the value is not finite or lies outside
    /// [`ACCURACY_RANGE`]; the previous value is retained.
    pub fn set_accuracy(&mut self, accuracy: f64) -> Result<(), EngineError> {
        if !accuracy.is_finite() || !ACCURACY_RANGE.contains(&accuracy) {
            return Err(EngineError::InvalidConfiguration {
                option: "accuracy",
                reason: format!(
                    "{accuracy} is outside {:e}..={:e}",
                    ACCURACY_RANGE.start(),
                    ACCURACY_RANGE.end()
                ),
            });
        }
        self.accuracy = Some(accuracy);
        Ok(())
    }

    /// Sets the electronic temperature for Fermi smearing, in kelvin.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the value is not finite and strictly
    /// positive; the previous value is retained.
    pub fn set_electronic_temperature(&mut self, temperature: f64) -> Result<(), EngineError> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(EngineError::InvalidConfiguration {
                option: "electronic_temperature",
                reason: format!("{temperature} is not a positive temperature"),
            });
        }
        self.electronic_temperature = Some(temperature);
        Ok(())
    }

    /// Sets the self-consistent-field iteration limit.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for a zero limit; the previous value is
    /// retained.
    pub fn set_max_iterations(&mut self, iterations: usize) -> Result<(), EngineError> {
        if iterations == 0 {
            return Err(EngineError::InvalidConfiguration {
                option: "max_iterations",
                reason: "at least one iteration is required".to_string(),
            });
        }
        self.max_iterations = Some(iterations);
        Ok(())
    }
}
