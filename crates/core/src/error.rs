//! Boundary error model.

use thiserror::Error;

/// Result type used at the crate boundaries (parsing, configuration, decoding).
pub type OccupancyResult<T> = Result<T, OccupancyError>;

/// Boundary-level error.
///
/// Aggregation, ranking, filtering and drill-down never fail: malformed roster
/// data degrades to defaults or exclusion. This type only covers input that a
/// caller hands over as text (selections, configuration, documents).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OccupancyError {
    /// A building or filter selection could not be parsed.
    #[error("invalid building selection: {0}")]
    InvalidSelection(String),

    /// A configuration value was present but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A roster document could not be decoded.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl OccupancyError {
    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
