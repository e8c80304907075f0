//! The tree engine: four deterministic passes over the path tree.
//!
//! 1. **Model constants** — up/down factors, discount, risk-neutral
//!    probabilities ([`ModelConstants`]).
//! 2. **Forward price/sum pass** — underlying price, running sum, and
//!    intrinsic value at every node, period 0 → N.
//! 3. **Backward option-price pass** — leaves take the undiscounted
//!    intrinsic value; every interior node takes the discounted
//!    risk-neutral expectation of its two children, period N → 0.
//! 4. **Forward replication pass** — starting from the root option
//!    price, pick the hedge ratio `Δ` at every non-terminal node,
//!    split the portfolio into shares and cash, and roll both into each
//!    child. After rebalancing, the portfolio value equals the option
//!    price at that node; this self-financing equality is the engine's
//!    defining correctness invariant.
//!
//! One call builds one immutable [`TreeResult`]; nothing is cached or
//! mutated afterwards, and identical inputs reproduce identical output
//! bit for bit.

use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::layout::TreeLayout;
use crate::model::{ModelConstants, RoundedFactors};
use crate::params::LatticeParams;
use crate::tree::{self, NodeId};

/// Replicating-portfolio state at one node.
///
/// `value` is always `cash + shares · stock_price` at the node it is
/// attached to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioState {
    /// Number of underlying shares held (the hedge ratio `Δ`).
    pub shares: f64,
    /// Cash account balance.
    pub cash: f64,
    /// Total portfolio value.
    pub value: f64,
}

/// One node of the path tree with every per-node quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Node identity `(period, index)`.
    pub id: NodeId,
    /// Underlying price on this path.
    pub stock_price: f64,
    /// Running sum of underlying prices along the path, root inclusive.
    pub running_sum: f64,
    /// `max(φ·(running_sum/(period+2) − K), 0)`.
    pub intrinsic_value: f64,
    /// Discounted risk-neutral option value.
    pub option_price: f64,
    /// Portfolio on arrival from the parent, before rebalancing.
    ///
    /// `None` at the root, which has no parent; the root's starting
    /// value is its own `option_price`.
    pub pre_rebalance: Option<PortfolioState>,
    /// Portfolio after rebalancing at this node.
    ///
    /// `None` at the leaves, where the option settles and no further
    /// hedge is chosen.
    pub post_rebalance: Option<PortfolioState>,
}

impl TreeNode {
    /// Portfolio value on arrival at this node.
    ///
    /// At the root this is the replication seed, i.e. the root option
    /// price.
    #[inline]
    pub fn portfolio_value(&self) -> f64 {
        match &self.pre_rebalance {
            Some(state) => state.value,
            None => self.option_price,
        }
    }
}

/// Complete output of one engine run.
///
/// `nodes` is ordered ascending by `(period, index)`; that order is a
/// contract shared with [`TreeLayout`] positions and the label
/// projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeResult {
    /// The parameters the tree was built from.
    pub params: LatticeParams,
    /// Raw per-step model constants.
    pub constants: ModelConstants,
    /// `u, d, p, q` rounded to two decimals for display.
    pub rounded: RoundedFactors,
    /// All nodes in ascending `(period, index)` order.
    pub nodes: Vec<TreeNode>,
    /// Display positions and edges.
    pub layout: TreeLayout,
}

impl TreeResult {
    /// Number of tree periods.
    #[inline]
    pub fn periods(&self) -> usize {
        self.params.periods
    }

    /// The node at `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.flat()]
    }

    /// The root node `(0, 1)`.
    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }
}

/// Builds the full tree: prices, sums, intrinsic values, option prices,
/// and the replicating portfolio at every node.
///
/// # Arguments
/// * `params` - Option and model parameters; see [`LatticeParams`]
///
/// # Errors
/// Returns a [`LatticeError`] validation failure for `periods < 1` or a
/// negative spot or strike. Nothing else fails: degenerate model
/// parameters (`p` outside `[0, 1]`) are propagated unchanged, and the
/// exponential cost of large `periods` is the caller's to bound.
///
/// # Examples
///
/// ```
/// use pricer_lattice::{compute, LatticeParams, OptionKind};
///
/// let params = LatticeParams {
///     kind: OptionKind::Call,
///     spot: 100.0,
///     strike: 90.0,
///     rate: 0.05,
///     maturity: 1.0,
///     drift: 0.10,
///     volatility: 0.20,
///     periods: 2,
/// };
/// let result = compute(&params).unwrap();
/// assert_eq!(result.nodes.len(), 7);
/// assert!(result.root().option_price > 0.0);
/// ```
pub fn compute(params: &LatticeParams) -> Result<TreeResult, LatticeError> {
    params.validate()?;

    let constants = ModelConstants::from_params(params);
    let periods = params.periods;
    let count = tree::node_count(periods);

    // Pass 2: forward price/sum/intrinsic. Table order fills every
    // parent before its children, so each child reads settled state.
    let mut prices = vec![0.0; count];
    let mut sums = vec![0.0; count];
    prices[0] = params.spot;
    sums[0] = params.spot;
    for id in tree::iter_ids(periods) {
        if id.period < periods {
            let parent_price = prices[id.flat()];
            let parent_sum = sums[id.flat()];

            let up = id.up_child();
            prices[up.flat()] = parent_price * constants.up;
            sums[up.flat()] = parent_sum + parent_price * constants.up;

            let down = id.down_child();
            prices[down.flat()] = parent_price * constants.down;
            sums[down.flat()] = parent_sum + parent_price * constants.down;
        }
    }

    let intrinsics: Vec<f64> = tree::iter_ids(periods)
        .map(|id| {
            params
                .kind
                .average_intrinsic(sums[id.flat()], id.period, params.strike)
        })
        .collect();

    // Pass 3: backward induction. Leaves settle at intrinsic value with
    // no discount; discounting starts one step earlier.
    let mut option_prices = vec![0.0; count];
    for period in (0..=periods).rev() {
        for index in 1..=tree::nodes_at(period) {
            let id = NodeId { period, index };
            option_prices[id.flat()] = if period == periods {
                intrinsics[id.flat()]
            } else {
                constants.discount
                    * (constants.prob_up * option_prices[id.up_child().flat()]
                        + constants.prob_down * option_prices[id.down_child().flat()])
            };
        }
    }

    // Pass 4: forward replication. The arrival value at the root is the
    // root option price; everywhere else it is inherited from the
    // parent's post-rebalance split, grown one step.
    let mut pre: Vec<Option<PortfolioState>> = vec![None; count];
    let mut post: Vec<Option<PortfolioState>> = vec![None; count];
    for id in tree::iter_ids(periods) {
        if id.period < periods {
            let flat = id.flat();
            let stock = prices[flat];
            let arrival_value = match &pre[flat] {
                Some(state) => state.value,
                None => option_prices[flat],
            };

            let up = id.up_child();
            let down = id.down_child();
            let shares = (option_prices[up.flat()] - option_prices[down.flat()])
                / ((constants.up - constants.down) * stock);
            let cash = arrival_value - shares * stock;
            post[flat] = Some(PortfolioState {
                shares,
                cash,
                value: cash + shares * stock,
            });

            let grown_cash = cash * constants.growth;
            for child in [up, down] {
                pre[child.flat()] = Some(PortfolioState {
                    shares,
                    cash: grown_cash,
                    value: grown_cash + shares * prices[child.flat()],
                });
            }
        }
    }

    let nodes = tree::iter_ids(periods)
        .map(|id| {
            let flat = id.flat();
            TreeNode {
                id,
                stock_price: prices[flat],
                running_sum: sums[flat],
                intrinsic_value: intrinsics[flat],
                option_price: option_prices[flat],
                pre_rebalance: pre[flat],
                post_rebalance: post[flat],
            }
        })
        .collect();

    Ok(TreeResult {
        params: *params,
        constants,
        rounded: constants.rounded(),
        nodes,
        layout: TreeLayout::build(periods),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::OptionKind;
    use approx::assert_relative_eq;

    fn standard_params() -> LatticeParams {
        LatticeParams {
            kind: OptionKind::Call,
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            maturity: 1.0,
            drift: 0.10,
            volatility: 0.20,
            periods: 3,
        }
    }

    #[test]
    fn test_validation_runs_before_computation() {
        let params = LatticeParams {
            periods: 0,
            ..standard_params()
        };
        assert_eq!(
            compute(&params),
            Err(LatticeError::InvalidPeriods { periods: 0 })
        );
    }

    #[test]
    fn test_node_count_per_period() {
        let result = compute(&standard_params()).unwrap();
        assert_eq!(result.nodes.len(), 15);
        for period in 0..=3 {
            let in_period = result.nodes.iter().filter(|n| n.id.period == period).count();
            assert_eq!(in_period, 1 << period);
        }
    }

    #[test]
    fn test_running_sum_accumulates_once_per_node() {
        let result = compute(&standard_params()).unwrap();
        let root = result.root();
        assert_eq!(root.running_sum, 100.0);
        for node in &result.nodes[1..] {
            let parent = NodeId {
                period: node.id.period - 1,
                index: (node.id.index + 1) / 2,
            };
            let parent = result.node(parent);
            assert_relative_eq!(
                node.running_sum,
                parent.running_sum + node.stock_price,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_terminal_nodes_have_no_rebalance() {
        let result = compute(&standard_params()).unwrap();
        for node in &result.nodes {
            if node.id.period == result.periods() {
                assert!(node.post_rebalance.is_none());
                assert!(node.pre_rebalance.is_some());
            } else {
                assert!(node.post_rebalance.is_some());
            }
        }
        assert!(result.root().pre_rebalance.is_none());
    }

    #[test]
    fn test_terminal_option_price_is_intrinsic_exactly() {
        let result = compute(&standard_params()).unwrap();
        for node in &result.nodes {
            if node.id.period == result.periods() {
                // Bitwise equality: no discounting at the leaves.
                assert_eq!(node.option_price, node.intrinsic_value);
            }
        }
    }

    #[test]
    fn test_stock_tree_is_kind_independent() {
        let call = compute(&standard_params()).unwrap();
        let put = compute(&LatticeParams {
            kind: OptionKind::Put,
            ..standard_params()
        })
        .unwrap();

        assert_eq!(call.constants, put.constants);
        assert_eq!(call.layout, put.layout);
        for (c, p) in call.nodes.iter().zip(&put.nodes) {
            assert_eq!(c.stock_price, p.stock_price);
            assert_eq!(c.running_sum, p.running_sum);
        }
    }

    #[test]
    fn test_idempotence() {
        let first = compute(&standard_params()).unwrap();
        let second = compute(&standard_params()).unwrap();
        assert_eq!(first, second);
    }
}
