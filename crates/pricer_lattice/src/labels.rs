//! Text labels for rendering the tree.
//!
//! A pure projection over [`TreeResult`]: the engine computes numbers,
//! this module turns them into the short strings a node-and-edge plot
//! attaches to each node. Rounding here is display-only.
//!
//! Portfolio, cash, and share labels show the state both before and
//! after rebalancing as `"<pre>,<post>"`. The root has no arrival state,
//! so its labels repeat the post-rebalance figures; the leaves never
//! rebalance, so theirs show the arrival figures alone.

use serde::{Deserialize, Serialize};

use crate::engine::{TreeNode, TreeResult};

/// Display labels for one node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLabels {
    /// Underlying price and running sum: `"S = 104.08, Y = 204.08"`.
    pub stock: String,
    /// Intrinsic value, one decimal.
    pub intrinsic: String,
    /// Option price, two decimals.
    pub option_price: String,
    /// Portfolio value before/after rebalancing.
    pub portfolio: String,
    /// Cash account before/after rebalancing.
    pub cash: String,
    /// Shares held before/after rebalancing.
    pub shares: String,
}

/// Builds labels for every node, in table order.
pub fn node_labels(result: &TreeResult) -> Vec<NodeLabels> {
    result.nodes.iter().map(label_node).collect()
}

fn label_node(node: &TreeNode) -> NodeLabels {
    let stock = format!(
        "S = {}, Y = {}",
        fmt(node.stock_price, 2),
        fmt(node.running_sum, 2)
    );
    let intrinsic = fmt(node.intrinsic_value, 1);
    let option_price = fmt(node.option_price, 2);

    let (portfolio, cash, shares) = match (&node.pre_rebalance, &node.post_rebalance) {
        // Interior node: arrival state, then the fresh hedge.
        (Some(pre), Some(post)) => (
            format!("{},{}", fmt(pre.value, 2), fmt(post.value, 2)),
            format!("{},{}", fmt(pre.cash, 2), fmt(post.cash, 2)),
            format!("{},{}", fmt(pre.shares, 2), fmt(post.shares, 2)),
        ),
        // Root: seeded at the option price, post figures shown twice.
        (None, Some(post)) => (
            format!("{},{}", fmt(node.option_price, 2), fmt(post.value, 2)),
            format!("{},{}", fmt(post.cash, 2), fmt(post.cash, 2)),
            format!("{},{}", fmt(post.shares, 2), fmt(post.shares, 2)),
        ),
        // Leaf: only the arrival state exists.
        (Some(pre), None) => (
            fmt(pre.value, 2),
            fmt(pre.cash, 2),
            fmt(pre.shares, 2),
        ),
        // Unreachable: every node has at least one side.
        (None, None) => (String::new(), String::new(), String::new()),
    };

    NodeLabels {
        stock,
        intrinsic,
        option_price,
        portfolio,
        cash,
        shares,
    }
}

/// Rounds to `dp` decimals and renders without trailing zeros, keeping
/// node annotations short.
fn fmt(x: f64, dp: i32) -> String {
    let scale = 10f64.powi(dp);
    let rounded = (x * scale).round() / scale;
    format!("{}", rounded)
}
