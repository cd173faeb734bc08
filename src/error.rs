use thiserror::Error;

/// Errors returned when a clustering run is rejected.
///
/// All validation happens before the point store is touched, so a returned
/// error always means the store is unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A point row does not have 2 or 3 coordinates.
    #[error("invalid dimension for point {index}: expected 2 or 3 coordinates, found {found}")]
    InvalidDimension {
        /// Position of the offending point in the input.
        index: usize,
        /// Number of coordinates found.
        found: usize,
    },

    /// A point coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input.
        index: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
