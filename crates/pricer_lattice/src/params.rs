//! Engine input parameters.
//!
//! This module provides the immutable parameter bundle consumed by
//! [`compute`](crate::engine::compute), together with its validation.

use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::instrument::OptionKind;

/// Parameters for one lattice computation.
///
/// All rates are annualised and continuously compounded; `maturity` is in
/// years. Validation rejects only what makes the tree meaningless
/// (`periods < 1`, negative spot or strike). Economically degenerate but
/// arithmetically well-defined inputs pass through untouched — see
/// [`ModelConstants::respects_no_arbitrage`](crate::model::ModelConstants::respects_no_arbitrage).
///
/// The tree has `2^(periods + 1) - 1` nodes; the caller is responsible
/// for keeping `periods` within practical bounds (the engine enforces no
/// upper limit).
///
/// # Examples
///
/// ```
/// use pricer_lattice::{LatticeParams, OptionKind};
///
/// let params = LatticeParams {
///     kind: OptionKind::Call,
///     spot: 100.0,
///     strike: 100.0,
///     rate: 0.05,
///     maturity: 1.0,
///     drift: 0.10,
///     volatility: 0.20,
///     periods: 4,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticeParams {
    /// Call or put.
    pub kind: OptionKind,
    /// Initial underlying price (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Risk-free interest rate (r), per annum.
    pub rate: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Drift of the geometric random walk (μ), per annum.
    pub drift: f64,
    /// Volatility (σ), per annum.
    pub volatility: f64,
    /// Number of tree periods (N ≥ 1).
    pub periods: usize,
}

impl LatticeParams {
    /// Checks the inputs the engine refuses to compute from.
    ///
    /// # Errors
    /// - [`LatticeError::InvalidPeriods`] when `periods < 1`
    /// - [`LatticeError::InvalidSpot`] when `spot < 0`
    /// - [`LatticeError::InvalidStrike`] when `strike < 0`
    pub fn validate(&self) -> Result<(), LatticeError> {
        if self.periods < 1 {
            return Err(LatticeError::InvalidPeriods {
                periods: self.periods,
            });
        }
        if self.spot < 0.0 {
            return Err(LatticeError::InvalidSpot { spot: self.spot });
        }
        if self.strike < 0.0 {
            return Err(LatticeError::InvalidStrike {
                strike: self.strike,
            });
        }
        Ok(())
    }
}
