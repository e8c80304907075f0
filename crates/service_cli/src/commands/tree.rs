//! Tree command implementation
//!
//! Prints the full path tree, one row per node, with the display labels
//! a node-and-edge renderer would attach to each node.

use pricer_lattice::{compute, node_labels, LatticeParams, TreeResult};
use serde::Serialize;
use tracing::{info, warn};

use crate::{CliError, Result};

/// JSON payload: the numeric result plus its label projection.
#[derive(Serialize)]
struct TreeReport<'a> {
    result: &'a TreeResult,
    labels: Vec<pricer_lattice::NodeLabels>,
}

/// Run the tree command
pub fn run(params: &LatticeParams, format: &str) -> Result<()> {
    info!("Building tree with {} periods...", params.periods);

    let result = compute(params)?;

    if !result.constants.respects_no_arbitrage() {
        warn!(
            "No-arbitrage condition violated: p = {:.4} lies outside [0, 1]",
            result.constants.prob_up
        );
    }

    match format {
        "json" => {
            let report = TreeReport {
                labels: node_labels(&result),
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => {
            println!(
                "period,index,stock_price,running_sum,intrinsic_value,option_price,\
                 shares_pre,cash_pre,value_pre,shares_post,cash_post,value_post"
            );
            for node in &result.nodes {
                let pre = fmt_state(&node.pre_rebalance);
                let post = fmt_state(&node.post_rebalance);
                println!(
                    "{},{},{},{},{},{},{},{}",
                    node.id.period,
                    node.id.index,
                    node.stock_price,
                    node.running_sum,
                    node.intrinsic_value,
                    node.option_price,
                    pre,
                    post
                );
            }
        }
        "table" => {
            print_table(&result);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }

    info!("Tree output complete");
    Ok(())
}

fn fmt_state(state: &Option<pricer_lattice::PortfolioState>) -> String {
    match state {
        Some(s) => format!("{},{},{}", s.shares, s.cash, s.value),
        None => ",,".to_string(),
    }
}

fn print_table(result: &TreeResult) {
    let labels = node_labels(result);

    println!(
        "\n{:?}, u/d/p/q = {}/{}/{}/{}",
        result.params.kind,
        result.rounded.up,
        result.rounded.down,
        result.rounded.prob_up,
        result.rounded.prob_down
    );
    println!("┌────────┬───────┬──────────────────────────────┬───────────┬──────────┬──────────────────────┐");
    println!("│ Period │ Index │ Stock / running sum          │ Intrinsic │ Price    │ Portfolio (pre,post) │");
    println!("├────────┼───────┼──────────────────────────────┼───────────┼──────────┼──────────────────────┤");
    for node in &result.nodes {
        let label = &labels[node.id.flat()];
        println!(
            "│ {:>6} │ {:>5} │ {:<28} │ {:>9} │ {:>8} │ {:>20} │",
            node.id.period,
            node.id.index,
            label.stock,
            label.intrinsic,
            label.option_price,
            label.portfolio
        );
    }
    println!("└────────┴───────┴──────────────────────────────┴───────────┴──────────┴──────────────────────┘");
}
