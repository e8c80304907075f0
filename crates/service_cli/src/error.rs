//! CLI error types.

use pricer_lattice::LatticeError;
use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command-line user.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command argument was recognised but unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine rejected the inputs.
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// JSON rendering failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("Unknown format: yaml".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: Unknown format: yaml");
    }

    #[test]
    fn test_lattice_error_passthrough() {
        let err: CliError = LatticeError::InvalidPeriods { periods: 0 }.into();
        assert_eq!(format!("{}", err), "Invalid period count: N = 0");
    }
}
