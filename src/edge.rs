use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// All graphs in this crate are undirected, so `Edge(u, v)` and `Edge(v, u)` describe the same
/// edge; use [`Edge::normalized`] or [`Edge::key`] when comparing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

/// Order-independent encoding of an edge: `min` in the upper and `max` in the lower 32 bits
pub type EdgeKey = u64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Packs the normalized edge into a single integer.
    /// `Edge(u, v).key() == Edge(v, u).key()` for all `u, v`.
    pub fn key(&self) -> EdgeKey {
        let Edge(u, v) = self.normalized();
        ((u as EdgeKey) << 32) | v as EdgeKey
    }

    /// Inverse of [`Edge::key`]; always returns the normalized edge
    pub fn from_key(key: EdgeKey) -> Self {
        Edge((key >> 32) as Node, key as Node)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<(&Node, &Node)> for Edge {
    fn from(value: (&Node, &Node)) -> Self {
        Edge(*value.0, *value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_ignores_orientation() {
        assert_eq!(Edge(3, 9).key(), Edge(9, 3).key());
        assert_ne!(Edge(3, 9).key(), Edge(3, 8).key());
        assert_ne!(Edge(0, 1).key(), Edge(1, 1).key());

        assert_eq!(Edge::from_key(Edge(9, 3).key()), Edge(3, 9));
        assert_eq!(
            Edge::from_key(Edge(Node::MAX - 1, 0).key()),
            Edge(0, Node::MAX - 1)
        );
    }

    #[test]
    fn normalization() {
        assert!(Edge(1, 2).is_normalized());
        assert!(!Edge(2, 1).is_normalized());
        assert_eq!(Edge(2, 1).normalized(), Edge(1, 2));
        assert_eq!(Edge(2, 1).reverse(), Edge(1, 2));
        assert!(Edge(4, 4).is_loop());
        assert_eq!(format!("{}", Edge(4, 5)), "(4,5)");
    }
}
