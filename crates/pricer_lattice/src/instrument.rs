//! Asian option instrument definitions.
//!
//! The payoff of an arithmetic-average Asian option depends on the mean
//! of the underlying price along the whole path:
//!
//! - Call: `max(A - K, 0)`
//! - Put:  `max(K - A, 0)`
//!
//! Both are expressed through a single sign convention `φ` (+1 for a
//! call, -1 for a put), so the rest of the engine never branches on the
//! option kind.
//!
//! # Averaging convention
//!
//! At period `i` the running average divides the running sum by `i + 2`,
//! one more than the `i + 1` prices observed so far. This is the model's
//! documented convention (one extra synthetic observation) and is
//! preserved deliberately; it is not a bug to correct.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Call or put flavour of the option.
///
/// # Examples
/// ```
/// use pricer_lattice::OptionKind;
///
/// assert_eq!(OptionKind::Call.sign::<f64>(), 1.0);
/// assert_eq!(OptionKind::Put.sign::<f64>(), -1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    /// Right to buy: pays when the average ends above the strike.
    Call,
    /// Right to sell: pays when the average ends below the strike.
    Put,
}

impl OptionKind {
    /// Returns the payoff sign `φ`: `+1` for a call, `-1` for a put.
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            OptionKind::Call => T::one(),
            OptionKind::Put => -T::one(),
        }
    }

    /// Intrinsic value of the average-strike payoff at a tree node.
    ///
    /// # Arguments
    /// * `running_sum` - Sum of underlying prices along the path so far
    /// * `period` - Tree period of the node (`0..=N`)
    /// * `strike` - Strike price `K`
    ///
    /// # Returns
    /// `max(φ · (running_sum / (period + 2) − K), 0)`.
    #[inline]
    pub fn average_intrinsic<T: Float>(self, running_sum: T, period: usize, strike: T) -> T {
        let divisor = T::from(period + 2).unwrap();
        let average = running_sum / divisor;
        (self.sign::<T>() * (average - strike)).max(T::zero())
    }
}
