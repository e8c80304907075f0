//! Structural and no-arbitrage invariants of the lattice engine.
//!
//! These tests verify the properties that define the engine:
//!
//! 1. **Node counts**: `2^(N+1) - 1` nodes, `2^i` per period
//! 2. **Martingale consistency**: every interior price is the discounted
//!    risk-neutral expectation of its children
//! 3. **Terminal payoff**: leaves settle at intrinsic value, undiscounted
//! 4. **Self-financing replication**: the rebalanced portfolio tracks the
//!    option price at every node

use approx::assert_relative_eq;
use pricer_lattice::{compute, LatticeParams, NodeId, OptionKind, TreeResult};

/// Standard test parameters shared across the suite.
fn standard_params() -> LatticeParams {
    LatticeParams {
        kind: OptionKind::Put,
        spot: 100.0,
        strike: 100.0,
        rate: 0.05,
        maturity: 1.0,
        drift: 0.10,
        volatility: 0.20,
        periods: 4,
    }
}

fn assert_replication_tracks_option(result: &TreeResult) {
    for node in &result.nodes {
        if let Some(post) = &node.post_rebalance {
            assert_relative_eq!(
                post.value,
                node.option_price,
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }
        if let Some(pre) = &node.pre_rebalance {
            assert_relative_eq!(
                pre.value,
                node.option_price,
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn test_node_counts() {
    let result = compute(&standard_params()).unwrap();
    assert_eq!(result.nodes.len(), (1 << 5) - 1);
    for period in 0..=4 {
        let in_period = result
            .nodes
            .iter()
            .filter(|n| n.id.period == period)
            .count();
        assert_eq!(in_period, 1 << period, "period {period}");
    }
}

#[test]
fn test_martingale_consistency() {
    let result = compute(&standard_params()).unwrap();
    let c = &result.constants;
    for node in &result.nodes {
        if node.id.period < result.periods() {
            let up = result.node(node.id.up_child()).option_price;
            let down = result.node(node.id.down_child()).option_price;
            assert_relative_eq!(
                node.option_price,
                c.discount * (c.prob_up * up + c.prob_down * down),
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn test_terminal_payoff_undiscounted() {
    let result = compute(&standard_params()).unwrap();
    for node in &result.nodes {
        if node.id.period == result.periods() {
            assert_eq!(node.option_price, node.intrinsic_value);
        }
    }
}

#[test]
fn test_self_financing_replication_put() {
    let result = compute(&standard_params()).unwrap();
    assert_replication_tracks_option(&result);
}

#[test]
fn test_self_financing_replication_call() {
    let result = compute(&LatticeParams {
        kind: OptionKind::Call,
        strike: 60.0,
        ..standard_params()
    })
    .unwrap();
    assert_replication_tracks_option(&result);
}

#[test]
fn test_portfolio_reaches_payoff_at_maturity() {
    let result = compute(&standard_params()).unwrap();
    for node in &result.nodes {
        if node.id.period == result.periods() {
            let pre = node.pre_rebalance.as_ref().unwrap();
            assert_relative_eq!(
                pre.value,
                node.intrinsic_value,
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn test_single_period_reduces_to_static_hedge() {
    let params = LatticeParams {
        periods: 1,
        ..standard_params()
    };
    let result = compute(&params).unwrap();
    assert_eq!(result.nodes.len(), 3);

    let c = &result.constants;
    let up = result.node(NodeId { period: 1, index: 1 });
    let down = result.node(NodeId { period: 1, index: 2 });
    let root = result.root();

    // Single-period no-arbitrage hedge: Δ = (C_u − C_d) / ((u − d)·S).
    let delta = (up.option_price - down.option_price) / ((c.up - c.down) * params.spot);
    let post = root.post_rebalance.as_ref().unwrap();
    assert_relative_eq!(post.shares, delta, max_relative = 1e-12);
    assert_relative_eq!(
        post.cash,
        root.option_price - delta * params.spot,
        max_relative = 1e-12
    );

    // The hedge delivers the payoff in both states.
    for leaf in [up, down] {
        let pre = leaf.pre_rebalance.as_ref().unwrap();
        assert_relative_eq!(pre.shares, delta, max_relative = 1e-12);
        assert_relative_eq!(
            pre.value,
            leaf.option_price,
            epsilon = 1e-10,
            max_relative = 1e-10
        );
    }
}

#[test]
fn test_cash_grows_at_risk_free_rate_between_rebalances() {
    let result = compute(&standard_params()).unwrap();
    let growth = result.constants.growth;
    for node in &result.nodes {
        if let Some(post) = &node.post_rebalance {
            for child in [node.id.up_child(), node.id.down_child()] {
                let pre = result.node(child).pre_rebalance.as_ref().unwrap();
                assert_relative_eq!(pre.cash, post.cash * growth, max_relative = 1e-12);
                assert_relative_eq!(pre.shares, post.shares, max_relative = 1e-15);
            }
        }
    }
}

#[test]
fn test_root_portfolio_seeded_at_option_price() {
    let result = compute(&standard_params()).unwrap();
    let root = result.root();
    assert!(root.pre_rebalance.is_none());
    assert_eq!(root.portfolio_value(), root.option_price);
}
