//! Error types for lattice construction.
//!
//! This module provides:
//! - `LatticeError`: validation errors reported before any computation runs

use thiserror::Error;

/// Lattice input-validation errors.
///
/// Every variant is a recoverable, user-facing validation failure: the
/// engine refuses to build the tree and reports which input was rejected.
/// Degenerate model parameters (a violated no-arbitrage condition) are
/// deliberately *not* an error; see
/// [`ModelConstants::respects_no_arbitrage`](crate::model::ModelConstants::respects_no_arbitrage).
///
/// # Variants
/// - `InvalidPeriods`: period count below one
/// - `InvalidSpot`: negative spot price
/// - `InvalidStrike`: negative strike price
///
/// # Examples
/// ```
/// use pricer_lattice::LatticeError;
///
/// let err = LatticeError::InvalidSpot { spot: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Invalid period count (must be at least one).
    #[error("Invalid period count: N = {periods}")]
    InvalidPeriods {
        /// The invalid period count
        periods: usize,
    },

    /// Invalid spot price (negative).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price (negative).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_periods_display() {
        let err = LatticeError::InvalidPeriods { periods: 0 };
        assert_eq!(format!("{}", err), "Invalid period count: N = 0");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = LatticeError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = LatticeError::InvalidStrike { strike: -50.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = -50");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = LatticeError::InvalidPeriods { periods: 0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = LatticeError::InvalidStrike { strike: -1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
