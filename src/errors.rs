use thiserror::Error;

/// Errors produced while building or evaluating wing and nacelle geometry.
#[derive(Error, Debug)]
pub enum AeroError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Non-finite {quantity} at station {station} (value = {value})")]
    NumericDegeneracy {
        quantity: &'static str,
        station: usize,
        value: f64,
    },

    #[error("Length of '{name}' is {found}, expected {expected}")]
    ContractViolation {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AeroError {
    pub(crate) fn config<S: Into<String>>(message: S) -> Self {
        AeroError::Configuration(message.into())
    }

    /// Fails with a `ContractViolation` if `found` does not equal `expected`.
    pub(crate) fn check_len(name: &str, expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(AeroError::ContractViolation {
                name: name.to_string(),
                expected,
                found,
            })
        }
    }
}
