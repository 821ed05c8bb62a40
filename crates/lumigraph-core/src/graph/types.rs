//! Value types for the canvas graph.
//!
//! Nodes carry a stable opaque identifier assigned at creation time; geometry
//! and boolean state live in side tables inside [`super::GraphStore`], and
//! edges reference identifiers rather than coordinates. Moving a node never
//! rewrites edge or state entries.

use serde::{Deserialize, Serialize};

/// Stable identifier of a node, assigned once at placement.
///
/// Identifiers are unique for the lifetime of a store (monotonically
/// allocated, never reused) and survive moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// An integer coordinate pair on the canvas plane.
///
/// Serializes as a two-element JSON array `[x, y]`, the persisted wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "(i64, i64)", from = "(i64, i64)")]
pub struct Point {
    /// Horizontal canvas coordinate.
    pub x: i64,
    /// Vertical canvas coordinate.
    pub y: i64,
}

impl Point {
    /// Creates a point from canvas coordinates.
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An undirected edge between two nodes.
///
/// Stored in insertion orientation; equality of the pair is symmetric, so
/// `(a, b)` and `(b, a)` denote the same edge. Self-loops are not rejected
/// at construction. Duplicates are collapsed by
/// [`super::GraphStore::cleanup_edges`], not at insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
}

impl Edge {
    /// Creates an edge between two node identifiers.
    #[must_use]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    /// Returns the first endpoint in stored orientation.
    #[must_use]
    pub fn a(self) -> NodeId {
        self.a
    }

    /// Returns the second endpoint in stored orientation.
    #[must_use]
    pub fn b(self) -> NodeId {
        self.b
    }

    /// Symmetric endpoint-pair test: true for `(a, b)` and `(b, a)` alike.
    #[must_use]
    pub fn connects(self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// Returns true if either endpoint is `id`.
    #[must_use]
    pub fn touches(self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    /// Returns the endpoint opposite `id`, if `id` is an endpoint.
    ///
    /// For a self-loop `(id, id)` the opposite endpoint is `id` itself.
    #[must_use]
    pub fn opposite(self, id: NodeId) -> Option<NodeId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}
