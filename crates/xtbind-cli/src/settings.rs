use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;
use xtbind::engine::method::Method;
use xtbind::engine::options::CalculationOptions;

/// Calculation settings read from a TOML file.
///
/// Every field is optional; values pass through the range-checked setters
/// of [`CalculationOptions`], so an out-of-range entry is reported instead
/// of silently accepted.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Settings {
    pub method: Option<String>,
    pub accuracy: Option<f64>,
    pub electronic_temperature: Option<f64>,
    pub max_iterations: Option<usize>,
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!(?settings, "loaded settings file");
        Ok(settings)
    }

    /// Picks the method: an explicit CLI argument wins over the settings
    /// file; with neither, GFN2-xTB is the default.
    pub fn resolve_method(&self, cli_method: Option<&str>) -> Result<Method> {
        let name = match cli_method.or(self.method.as_deref()) {
            Some(name) => name,
            None => return Ok(Method::Gfn2Xtb),
        };
        Method::from_str(name)
            .map_err(|_| CliError::Argument(format!("unknown method parametrization '{name}'")))
    }

    /// Applies the configured values through the validated setters.
    pub fn apply(&self, options: &mut CalculationOptions) -> Result<()> {
        if let Some(accuracy) = self.accuracy {
            options.set_accuracy(accuracy)?;
        }
        if let Some(temperature) = self.electronic_temperature {
            options.set_electronic_temperature(temperature)?;
        }
        if let Some(iterations) = self.max_iterations {
            options.set_max_iterations(iterations)?;
        }
        Ok(())
    }
}
