use crate::core::models::geometry::ValidationError;
use crate::engine::results::Property;
use thiserror::Error;

/// Errors surfaced by the calculation lifecycle.
///
/// Local input validation is wrapped unchanged; everything else mirrors a
/// rejection of the underlying engine, carrying its diagnostic text. The
/// object an operation failed on always retains its pre-call state.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not initialize structure: {0}")]
    Initialization(String),

    #[error("Could not update structure: {0}")]
    Update(String),

    #[error("Single point calculation failed: {0}")]
    SinglePoint(String),

    #[error("{}", .property.unavailable())]
    NotAvailable { property: Property },

    #[error("Invalid configuration for {option}: {reason}")]
    InvalidConfiguration {
        option: &'static str,
        reason: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
