#![forbid(unsafe_code)]

//! Tree navigation primitives.
//!
//! All queries run on plain indices; sibling lists are never materialized,
//! so costs are O(k) in the number of nodes scanned. Every query is total:
//! sibling moves past either edge of a group return the node itself, which
//! lets callers chain moves without branching on absence. That self-return
//! is a guaranteed contract, not a fallback.

use crate::node::{NodeId, NodeTable};

impl NodeTable {
    /// Parent of `n`; [`NodeId::ROOT`] for top-level items and for the
    /// root itself.
    #[must_use]
    pub fn parent(&self, n: NodeId) -> NodeId {
        self.node(n).parent
    }

    /// First child of `n`, or `None` for leaves.
    #[must_use]
    pub fn eldest(&self, n: NodeId) -> Option<NodeId> {
        self.node(n).eldest
    }

    /// Previous sibling of `n`.
    ///
    /// Returns `n` itself when `n` is the eldest of its parent: moving
    /// past the edge of a sibling group is a no-op.
    #[must_use]
    pub fn previous_sibling(&self, n: NodeId) -> NodeId {
        let n = self.clamp(n);
        let parent = self.parent(n);
        if self.eldest(parent) == Some(n) {
            return n;
        }
        for i in (1..n.get()).rev() {
            let candidate = NodeId::new(i);
            if self.parent(candidate) == parent {
                return candidate;
            }
        }
        n
    }

    /// Next sibling of `n`; `n` itself when it is the youngest.
    #[must_use]
    pub fn next_sibling(&self, n: NodeId) -> NodeId {
        let n = self.clamp(n);
        let parent = self.parent(n);
        for i in n.get() + 1..=self.last().get() {
            let candidate = NodeId::new(i);
            if self.parent(candidate) == parent {
                return candidate;
            }
        }
        n
    }

    /// 1-based position of `n` among its siblings.
    #[must_use]
    pub fn rank(&self, n: NodeId) -> usize {
        let n = self.clamp(n);
        if n == NodeId::ROOT {
            return 1;
        }
        let Some(mut child) = self.eldest(self.parent(n)) else {
            return 1;
        };
        let mut rank = 1;
        while child != n {
            let next = self.next_sibling(child);
            if next == child {
                // Youngest reached without meeting `n`; the walk is done.
                break;
            }
            child = next;
            rank += 1;
        }
        rank
    }

    /// Number of nodes sharing `n`'s parent, `n` included.
    #[must_use]
    pub fn siblings_count(&self, n: NodeId) -> usize {
        let n = self.clamp(n);
        if n == NodeId::ROOT {
            return 1;
        }
        let parent = self.parent(n);
        let start = self.eldest(parent).map_or(1, NodeId::get);
        let mut count = 0;
        for i in start..=self.last().get() {
            if self.parent(NodeId::new(i)) == parent {
                count += 1;
            }
        }
        count
    }
}
