//! Error type shared by every stage of the divider search.

use thiserror::Error;

/// Result type alias using [`DividerError`].
pub type Result<T> = std::result::Result<T, DividerError>;

/// Conditions that terminate a single search call.
///
/// An empty result set is never an error: a tight tolerance or an empty range
/// simply yields no solutions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DividerError {
    /// Series name is not one of E6, E12 or E24
    #[error("Unknown resistor series '{name}' (expected E6, E12 or E24)")]
    UnknownSeries { name: String },

    /// Arm members reduce to a zero, negative or infinite resistance
    #[error("Degenerate arm {members:?}: resistance must be finite and above zero")]
    DegenerateArm { members: Vec<f64> },

    /// Arm built with a member count outside 1..=2
    #[error("Arm must hold one or two resistors, got {len}")]
    InvalidArm { len: usize },

    /// Target voltage of zero (or not finite) makes the error percentage undefined
    #[error("Invalid target voltage {target}: must be finite and non-zero")]
    InvalidTarget { target: f64 },
}
