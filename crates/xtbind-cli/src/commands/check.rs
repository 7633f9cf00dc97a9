use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::settings::Settings;
use tracing::{debug, info, warn};
use xtbind::core::io::xyz;
use xtbind::core::models::elements;
use xtbind::engine::error::EngineError;
use xtbind::engine::options::CalculationOptions;
use xtbind::engine::screening;

pub fn run(args: CheckArgs) -> Result<()> {
    let settings = match &args.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let method = settings.resolve_method(args.method.as_deref())?;

    let mut options = CalculationOptions::new();
    settings.apply(&mut options)?;
    debug!(?options, "calculation options validated");

    info!("Loading structure from {:?}", &args.input);
    let geometry = xyz::read_xyz(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    println!("Structure: {} atoms, {}", geometry.len(), periodicity(&geometry.periodic()));

    if let Some(contact) = screening::closest_contact(&geometry) {
        let first = elements::symbol(geometry.numbers()[contact.first]).unwrap_or("?");
        let second = elements::symbol(geometry.numbers()[contact.second]).unwrap_or("?");
        println!(
            "Closest contact: {first}{} - {second}{} at {:.4} bohr",
            contact.first + 1,
            contact.second + 1,
            contact.separation
        );
    }

    // The same screen a structure construction would run.
    screening::screen(&geometry)
        .map_err(|rejection| CliError::Core(EngineError::Initialization(rejection.to_string())))?;

    if geometry.is_periodic() && !method.supports_periodic() {
        warn!(%method, "method cannot evaluate periodic structures");
        println!(
            "Warning: {method} does not support periodic boundary conditions; \
             a single-point calculation on this structure would fail."
        );
    } else {
        println!("Method: {method}");
    }

    println!("Structure OK.");
    Ok(())
}

fn periodicity(periodic: &[bool; 3]) -> String {
    if periodic.iter().all(|&p| !p) {
        return "molecular".to_string();
    }
    let axes: String = periodic
        .iter()
        .zip(["x", "y", "z"])
        .filter_map(|(&p, axis)| p.then_some(axis))
        .collect();
    format!("periodic along {axes}")
}
