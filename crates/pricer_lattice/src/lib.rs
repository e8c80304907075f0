//! # Pricer Lattice (P: Pricing Kernel)
//!
//! Asian option pricing on a Cox-Ross-Rubinstein binomial lattice with
//! geometric-random-walk dynamics, together with the dynamic replication
//! strategy that manufactures the option payoff.
//!
//! This crate provides:
//! - Model constants (up/down factors, risk-neutral probabilities, discount)
//! - A full path tree of underlying prices and running sums
//! - Backward-induction option prices at every node
//! - A forward-filled self-financing replicating portfolio (shares + cash)
//! - Display projections: node layout, edge polylines, text labels
//!
//! ## Design Principles
//!
//! - **One consolidated node record** per path node instead of parallel
//!   per-quantity maps
//! - **Closed-form indexing**: the tree is a regular full binary tree, so
//!   node identity, storage offset, and children are all arithmetic on
//!   `(period, index)` — no graph structure
//! - **Numbers first, text later**: the engine returns structured numeric
//!   results; label formatting is a separate pure projection
//!
//! ## Path tree, not a recombining lattice
//!
//! The Asian payoff depends on the running sum of prices along the path,
//! so up-then-down and down-then-up reach the same price but different
//! states. The tree therefore keeps all `2^i` paths at period `i` as
//! distinct nodes, and the node count is `2^(N+1) - 1` for `N` periods.
//!
//! # Examples
//!
//! ```
//! use pricer_lattice::{compute, LatticeParams, OptionKind};
//!
//! let params = LatticeParams {
//!     kind: OptionKind::Put,
//!     spot: 100.0,
//!     strike: 100.0,
//!     rate: 0.05,
//!     maturity: 1.0,
//!     drift: 0.10,
//!     volatility: 0.20,
//!     periods: 3,
//! };
//!
//! let result = compute(&params).unwrap();
//! assert_eq!(result.nodes.len(), 15); // 2^4 - 1
//!
//! let root = &result.nodes[0];
//! let hedge = root.post_rebalance.as_ref().unwrap();
//! assert!((hedge.value - root.option_price).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod error;
pub mod instrument;
pub mod labels;
pub mod layout;
pub mod model;
pub mod params;
pub mod tree;

pub use engine::{compute, PortfolioState, TreeNode, TreeResult};
pub use error::LatticeError;
pub use instrument::OptionKind;
pub use labels::{node_labels, NodeLabels};
pub use layout::{Edge, TreeLayout};
pub use model::{ModelConstants, RoundedFactors};
pub use params::LatticeParams;
pub use tree::NodeId;
