//! CRR model constants under geometric-random-walk dynamics.
//!
//! One time step of length `δ = T / N` moves the underlying by a
//! multiplicative factor:
//!
//! ```text
//! u = exp(μδ + σ√δ)        up factor
//! d = exp(μδ − σ√δ)        down factor
//! ```
//!
//! Risk-neutral pricing discounts with `exp(−rδ)` and weights the two
//! branches with
//!
//! ```text
//! p = (exp(rδ) − d) / (u − d),    q = 1 − p
//! ```
//!
//! No-arbitrage requires `d < exp(rδ) < u`; when violated, `p` leaves
//! `[0, 1]`. The constants are computed regardless and propagated
//! unchanged — the caller can consult
//! [`ModelConstants::respects_no_arbitrage`] to warn.

use serde::{Deserialize, Serialize};

use crate::params::LatticeParams;

/// Derived per-step model constants.
///
/// Immutable once computed; every pass of the engine reads the same set.
///
/// # Examples
///
/// ```
/// use pricer_lattice::{LatticeParams, ModelConstants, OptionKind};
///
/// let params = LatticeParams {
///     kind: OptionKind::Call,
///     spot: 100.0,
///     strike: 100.0,
///     rate: 0.05,
///     maturity: 1.0,
///     drift: 0.10,
///     volatility: 0.20,
///     periods: 1,
/// };
/// let constants = ModelConstants::from_params(&params);
/// assert!((constants.up - 0.30_f64.exp()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelConstants {
    /// Step length `δ = maturity / periods`, in years.
    pub step: f64,
    /// Up factor `u`.
    pub up: f64,
    /// Down factor `d`.
    pub down: f64,
    /// One-step discount factor `exp(−rδ)`.
    pub discount: f64,
    /// One-step cash growth factor `exp(rδ)`.
    pub growth: f64,
    /// Risk-neutral up probability `p`.
    pub prob_up: f64,
    /// Risk-neutral down probability `q = 1 − p`.
    pub prob_down: f64,
}

impl ModelConstants {
    /// Computes the constants from engine parameters.
    pub fn from_params(params: &LatticeParams) -> Self {
        let step = params.maturity / params.periods as f64;
        let sqrt_step = step.sqrt();
        let up = (params.drift * step + params.volatility * sqrt_step).exp();
        let down = (params.drift * step - params.volatility * sqrt_step).exp();
        let growth = (params.rate * step).exp();
        let discount = (-params.rate * step).exp();
        let prob_up = (growth - down) / (up - down);
        let prob_down = 1.0 - prob_up;
        Self {
            step,
            up,
            down,
            discount,
            growth,
            prob_up,
            prob_down,
        }
    }

    /// Whether `d < exp(rδ) < u`, i.e. whether `p` lies inside `[0, 1]`.
    ///
    /// A `false` here means the probabilities are financially
    /// nonsensical; the engine still uses them as-is.
    #[inline]
    pub fn respects_no_arbitrage(&self) -> bool {
        self.down < self.growth && self.growth < self.up
    }

    /// The four display scalars `u, d, p, q` rounded to two decimals.
    #[inline]
    pub fn rounded(&self) -> RoundedFactors {
        RoundedFactors {
            up: round2(self.up),
            down: round2(self.down),
            prob_up: round2(self.prob_up),
            prob_down: round2(self.prob_down),
        }
    }
}

/// Display-rounded model factors (two decimal places).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundedFactors {
    /// Up factor `u`, rounded.
    pub up: f64,
    /// Down factor `d`, rounded.
    pub down: f64,
    /// Up probability `p`, rounded.
    pub prob_up: f64,
    /// Down probability `q`, rounded.
    pub prob_down: f64,
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
