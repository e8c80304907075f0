//! Node identity and indexing for the path tree.
//!
//! Period `i` holds `2^i` nodes indexed `1..=2^i`. Storage is a single
//! flat array in ascending `(period, index)` order, so the offset of
//! `(i, j)` is `2^i - 1 + (j - 1)`. Children interleave in the order the
//! forward pass visits parents: node `j` spawns `2j - 1` (up) and `2j`
//! (down) in the next period. Every pass uses these same offsets.

use serde::{Deserialize, Serialize};

/// Identity of one path node: `(period, index)` with a 1-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    /// Tree period, `0..=N`.
    pub period: usize,
    /// Path index within the period, `1..=2^period`.
    pub index: usize,
}

impl NodeId {
    /// The root node `(0, 1)`.
    pub const ROOT: NodeId = NodeId {
        period: 0,
        index: 1,
    };

    /// Offset of this node in the flat, `(period, index)`-ascending table.
    #[inline]
    pub fn flat(self) -> usize {
        (1 << self.period) - 1 + (self.index - 1)
    }

    /// Ordinal of this node in table order (same as [`NodeId::flat`]).
    #[inline]
    pub fn ordinal(self) -> usize {
        self.flat()
    }

    /// The up child, one period later.
    #[inline]
    pub fn up_child(self) -> NodeId {
        NodeId {
            period: self.period + 1,
            index: 2 * self.index - 1,
        }
    }

    /// The down child, one period later.
    #[inline]
    pub fn down_child(self) -> NodeId {
        NodeId {
            period: self.period + 1,
            index: 2 * self.index,
        }
    }
}

/// Number of nodes at one period: `2^period`.
#[inline]
pub fn nodes_at(period: usize) -> usize {
    1 << period
}

/// Total node count for a tree with `periods` periods: `2^(N+1) - 1`.
#[inline]
pub fn node_count(periods: usize) -> usize {
    (1 << (periods + 1)) - 1
}

/// Iterates all node ids in ascending `(period, index)` order.
///
/// This order is the iteration contract of the whole crate: the node
/// table, layout positions, and label projections all follow it.
pub fn iter_ids(periods: usize) -> impl Iterator<Item = NodeId> {
    (0..=periods).flat_map(|period| {
        (1..=nodes_at(period)).map(move |index| NodeId { period, index })
    })
}
