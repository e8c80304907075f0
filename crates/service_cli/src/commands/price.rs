//! Price command implementation
//!
//! Prices the option with the pricer_lattice engine and prints the model
//! constants, root price, and initial hedge.

use pricer_lattice::{compute, LatticeParams, OptionKind};
use tracing::{info, warn};

use crate::Result;

/// Run the price command
pub fn run(params: &LatticeParams) -> Result<()> {
    info!("Starting pricing...");
    info!("  Kind: {:?}", params.kind);
    info!("  Spot: {}, Strike: {}", params.spot, params.strike);
    info!("  Rate: {}, Maturity: {}y", params.rate, params.maturity);
    info!(
        "  Drift: {}, Volatility: {}, Periods: {}",
        params.drift, params.volatility, params.periods
    );

    let result = compute(params)?;

    if !result.constants.respects_no_arbitrage() {
        warn!(
            "No-arbitrage condition violated (d < exp(r*step) < u fails): p = {:.4}",
            result.constants.prob_up
        );
    }

    let kind = match params.kind {
        OptionKind::Call => "Asian call",
        OptionKind::Put => "Asian put",
    };
    let root = result.root();
    let hedge = root
        .post_rebalance
        .as_ref()
        .expect("non-terminal root: periods >= 1");

    println!(
        "\n{kind}, {} periods, {} nodes",
        params.periods,
        result.nodes.len()
    );
    println!("┌──────────────────────────┬────────────┐");
    println!("│ u (up factor)            │ {:>10} │", result.rounded.up);
    println!("│ d (down factor)          │ {:>10} │", result.rounded.down);
    println!("│ p (risk-neutral up)      │ {:>10} │", result.rounded.prob_up);
    println!("│ q (risk-neutral down)    │ {:>10} │", result.rounded.prob_down);
    println!("├──────────────────────────┼────────────┤");
    println!("│ Option price             │ {:>10.4} │", root.option_price);
    println!("│ Initial hedge (shares)   │ {:>10.4} │", hedge.shares);
    println!("│ Initial cash account     │ {:>10.4} │", hedge.cash);
    println!("└──────────────────────────┴────────────┘");

    info!("Pricing complete");
    Ok(())
}
