//! Display layout for the path tree.
//!
//! Positions are display-only and never feed back into the numbers. The
//! horizontal coordinate is the period; the vertical coordinate spreads
//! each period's paths far enough apart that sibling subtrees never
//! overlap, so the tree renders planar with straight, non-crossing
//! parent-child segments.
//!
//! For node `(i, j)` in a tree of `N` periods with table ordinal
//! `k = 2^i + j - 2`:
//!
//! ```text
//! x = i
//! y = (N + 2 + i) - (2 + N + k)·j
//! ```
//!
//! The widening `(2 + N + k)` multiplier makes deeper, higher-indexed
//! paths drop away faster than their up-siblings, which is what keeps
//! the fan-out from crossing.

use serde::{Deserialize, Serialize};

use crate::tree::{self, NodeId};

/// A 2-D display position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate (the period).
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// One parent→child line segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Parent endpoint.
    pub parent: NodeId,
    /// Child endpoint.
    pub child: NodeId,
}

/// Layout of every node plus the edge list, in table order.
///
/// Positions follow the ascending `(period, index)` iteration contract;
/// edges are parent-major in the same order, up edge before down edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    /// Per-node positions, indexed by [`NodeId::flat`].
    pub positions: Vec<Position>,
    /// Parent→child segments for all non-terminal nodes.
    pub edges: Vec<Edge>,
}

/// Position of a single node as a pure function of `(id, periods)`.
#[inline]
pub fn position(id: NodeId, periods: usize) -> Position {
    let i = id.period as f64;
    let j = id.index as f64;
    let k = id.ordinal() as f64;
    Position {
        x: i,
        y: (periods as f64 + 2.0 + i) - (2.0 + periods as f64 + k) * j,
    }
}

impl TreeLayout {
    /// Builds the full layout for a tree with `periods` periods.
    pub fn build(periods: usize) -> Self {
        let positions = tree::iter_ids(periods)
            .map(|id| position(id, periods))
            .collect();

        let mut edges = Vec::with_capacity(tree::node_count(periods) - 1);
        for id in tree::iter_ids(periods) {
            if id.period < periods {
                edges.push(Edge {
                    parent: id,
                    child: id.up_child(),
                });
                edges.push(Edge {
                    parent: id,
                    child: id.down_child(),
                });
            }
        }

        Self { positions, edges }
    }

    /// Position of one node.
    #[inline]
    pub fn position(&self, id: NodeId) -> Position {
        self.positions[id.flat()]
    }

    /// Node coordinates as parallel x/y arrays in table order.
    pub fn node_series(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = self.positions.iter().map(|p| p.x).collect();
        let ys = self.positions.iter().map(|p| p.y).collect();
        (xs, ys)
    }

    /// Edge coordinates as polylines with `None` separators.
    ///
    /// Each segment contributes `[x0, x1, None]` / `[y0, y1, None]`, the
    /// shape scatter-style plotting consumers expect.
    pub fn edge_series(&self) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
        let mut xs = Vec::with_capacity(self.edges.len() * 3);
        let mut ys = Vec::with_capacity(self.edges.len() * 3);
        for edge in &self.edges {
            let from = self.position(edge.parent);
            let to = self.position(edge.child);
            xs.extend([Some(from.x), Some(to.x), None]);
            ys.extend([Some(from.y), Some(to.y), None]);
        }
        (xs, ys)
    }
}
