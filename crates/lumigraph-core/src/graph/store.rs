//! In-memory store for canvas graph nodes, edges, and lit state.
//!
//! Nodes live in an id-indexed arena with a separate insertion-order list so
//! iteration and serialization stay deterministic. Geometry and boolean state
//! are side tables keyed by [`NodeId`]; edges reference ids, so moving a node
//! is a single position update and removing one is an index cascade rather
//! than a coordinate rewrite.

use std::collections::HashMap;

use tracing::debug;

use super::geometry::{self, DEFAULT_RADIUS};
use super::types::{Edge, NodeId, Point};
use crate::error::Result;
use crate::persist::GraphSnapshot;

/// Owner of the node set, edge list, and per-node lit state.
///
/// Invariants, holding after every public operation returns:
///
/// 1. Both endpoints of every edge are members of the node set.
/// 2. Every node has exactly one state entry.
/// 3. No two distinct nodes sit closer than `2·radius` (enforced at
///    placement; `move_node` intentionally skips the re-check so a drag can
///    pass through tight layouts).
/// 4. After [`GraphStore::cleanup_edges`], no two edges are equal under
///    symmetric comparison.
#[derive(Debug, Clone)]
pub struct GraphStore {
    radius: i64,
    next_id: u64,
    /// Node ids in insertion order, the iteration and tie-break order.
    order: Vec<NodeId>,
    positions: HashMap<NodeId, Point>,
    states: HashMap<NodeId, bool>,
    edges: Vec<Edge>,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// Creates an empty store with the default hit radius.
    #[must_use]
    pub fn new() -> Self {
        Self::with_radius(DEFAULT_RADIUS)
    }

    /// Creates an empty store with a custom hit radius.
    #[must_use]
    pub fn with_radius(radius: i64) -> Self {
        Self {
            radius,
            next_id: 0,
            order: Vec::new(),
            positions: HashMap::new(),
            states: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the node hit-circle radius.
    #[must_use]
    pub fn radius(&self) -> i64 {
        self.radius
    }

    // ── Geometric queries ──────────────────────────────────────────────

    /// Returns the first node in insertion order whose hit circle contains
    /// `(x, y)`. No distance ranking between overlapping candidates.
    #[must_use]
    pub fn find_node_at(&self, x: i64, y: i64) -> Option<NodeId> {
        let p = Point::new(x, y);
        self.order
            .iter()
            .copied()
            .find(|id| match self.positions.get(id) {
                Some(center) => geometry::hit_circle_contains(*center, self.radius, p),
                None => false,
            })
    }

    /// Returns true if a node placed at `(x, y)` would overlap no existing
    /// hit circle, i.e. every current center is farther than `2·radius`.
    #[must_use]
    pub fn can_place_at(&self, x: i64, y: i64) -> bool {
        let p = Point::new(x, y);
        !self
            .positions
            .values()
            .any(|center| geometry::circles_overlap(*center, p, self.radius))
    }

    // ── Node ops ───────────────────────────────────────────────────────

    /// Places a node at `(x, y)` with state unlit.
    ///
    /// Returns `None` without mutating when the placement-exclusion test
    /// fails.
    pub fn add_node(&mut self, x: i64, y: i64) -> Option<NodeId> {
        if !self.can_place_at(x, y) {
            return None;
        }
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.order.push(id);
        self.positions.insert(id, Point::new(x, y));
        self.states.insert(id, false);
        debug!(%id, x, y, "node placed");
        Some(id)
    }

    /// Moves a node to `(x, y)`, keeping its edges and state.
    ///
    /// Returns false if `id` is not a current node. The placement-exclusion
    /// test is NOT re-run: a node mid-drag may overlap others.
    pub fn move_node(&mut self, id: NodeId, x: i64, y: i64) -> bool {
        match self.positions.get_mut(&id) {
            Some(pos) => {
                *pos = Point::new(x, y);
                true
            }
            None => false,
        }
    }

    /// Removes a node, its state entry, and every edge touching it.
    ///
    /// Returns false if `id` is not a current node.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if self.positions.remove(&id).is_none() {
            return false;
        }
        self.states.remove(&id);
        self.order.retain(|n| *n != id);
        self.edges.retain(|e| !e.touches(id));
        debug!(%id, "node removed");
        true
    }

    // ── Edge ops ───────────────────────────────────────────────────────

    /// Appends the undirected edge `(a, b)`.
    ///
    /// Returns false if either endpoint is missing. Duplicates are accepted
    /// here and collapsed by the next [`GraphStore::cleanup_edges`] pass.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        if !self.positions.contains_key(&a) || !self.positions.contains_key(&b) {
            return false;
        }
        self.edges.push(Edge::new(a, b));
        debug!(%a, %b, "edge added");
        true
    }

    /// Removes the first edge stored as `(a, b)` and the first stored as
    /// `(b, a)`, when present. Silent no-op when neither orientation exists.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        if let Some(idx) = self.edges.iter().position(|e| e.a() == a && e.b() == b) {
            self.edges.remove(idx);
        }
        if let Some(idx) = self.edges.iter().position(|e| e.a() == b && e.b() == a) {
            self.edges.remove(idx);
        }
    }

    /// Symmetric membership test: true for either stored orientation.
    #[must_use]
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// Returns true if `(x, y)` lies within the hit radius of the
    /// (unclamped) line through `edge`'s endpoints. False when either
    /// endpoint no longer exists.
    #[must_use]
    pub fn is_near_edge(&self, x: i64, y: i64, edge: Edge) -> bool {
        match (self.position(edge.a()), self.position(edge.b())) {
            (Some(a), Some(b)) => geometry::is_near_edge(Point::new(x, y), a, b, self.radius),
            _ => false,
        }
    }

    /// Canonicalizes, deduplicates, and sorts the edge list.
    ///
    /// Each edge is oriented with its lexicographically smaller endpoint
    /// position first (node id breaks coordinate ties), exact duplicates are
    /// dropped, the list is sorted by canonical position pairs, and any edge
    /// referencing a missing node is removed. Idempotent.
    pub fn cleanup_edges(&mut self) {
        self.edges
            .retain(|e| self.positions.contains_key(&e.a()) && self.positions.contains_key(&e.b()));

        // Endpoints were just retained against the node set, so the lookup
        // cannot miss; the fallback only keeps this panic-free.
        let key = |id: NodeId| -> (Point, NodeId) {
            let pos = self
                .positions
                .get(&id)
                .copied()
                .unwrap_or(Point::new(i64::MAX, i64::MAX));
            (pos, id)
        };

        let mut canonical: Vec<Edge> = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            let oriented = if key(edge.a()) <= key(edge.b()) {
                *edge
            } else {
                Edge::new(edge.b(), edge.a())
            };
            if !canonical.contains(&oriented) {
                canonical.push(oriented);
            }
        }
        canonical.sort_by_key(|e| (key(e.a()), key(e.b())));
        self.edges = canonical;
    }

    // ── State ops ──────────────────────────────────────────────────────

    /// Flips the state of `id` and, per edge incident to `id`, the state of
    /// the opposite endpoint. Depth-1 propagation only — connected nodes two
    /// hops away are untouched. Unknown ids are a silent no-op.
    ///
    /// Propagation iterates the raw edge list, so a duplicate edge that has
    /// not been through [`GraphStore::cleanup_edges`] yet flips its neighbor
    /// once per copy.
    pub fn toggle(&mut self, id: NodeId) {
        if !self.states.contains_key(&id) {
            return;
        }
        if let Some(state) = self.states.get_mut(&id) {
            *state = !*state;
        }
        for edge in &self.edges {
            let neighbor = if edge.a() == id {
                edge.b()
            } else if edge.b() == id {
                edge.a()
            } else {
                continue;
            };
            if let Some(state) = self.states.get_mut(&neighbor) {
                *state = !*state;
            }
        }
    }

    /// Sets every node unlit — unless all of them already are, in which case
    /// every node is set lit instead. A toggle-all-or-reset-all policy, not
    /// an unconditional clear.
    pub fn reset_all(&mut self) {
        let all_unlit = !self.states.values().any(|lit| *lit);
        for state in self.states.values_mut() {
            *state = all_unlit;
        }
    }

    /// Removes every node, edge, and state entry.
    pub fn clear(&mut self) {
        self.order.clear();
        self.positions.clear();
        self.states.clear();
        self.edges.clear();
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Iterates nodes in insertion order as `(id, position)` pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.positions.get(id).map(|p| (*id, *p)))
    }

    /// Returns the edge list in stored order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns a node's position.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// Returns a node's lit state.
    #[must_use]
    pub fn state(&self, id: NodeId) -> Option<bool> {
        self.states.get(&id).copied()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of edges (duplicates included until cleanup).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // ── Snapshot & serialization ───────────────────────────────────────

    /// Captures the current nodes, edges, and states in coordinate space.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes: Vec<Point> = self.nodes().map(|(_, p)| p).collect();
        let edges: Vec<(Point, Point)> = self
            .edges
            .iter()
            .filter_map(|e| {
                let a = self.positions.get(&e.a())?;
                let b = self.positions.get(&e.b())?;
                Some((*a, *b))
            })
            .collect();
        let states: Vec<(Point, bool)> = self
            .nodes()
            .filter_map(|(id, p)| self.states.get(&id).map(|lit| (p, *lit)))
            .collect();
        GraphSnapshot {
            nodes,
            edges,
            states,
        }
    }

    /// Replaces the entire store contents from a snapshot.
    ///
    /// Node identifiers are re-allocated; edge endpoints are resolved by
    /// coordinate against the snapshot's node list (first match in insertion
    /// order) and edges that resolve to no node are dropped, which is where
    /// the first cleanup pass would have discarded them anyway.
    pub fn restore(&mut self, snapshot: &GraphSnapshot) {
        self.clear();

        let mut pending_states: Vec<(Point, bool)> = snapshot.states.clone();
        for point in &snapshot.nodes {
            let id = NodeId::new(self.next_id);
            self.next_id += 1;
            self.order.push(id);
            self.positions.insert(id, *point);
            let lit = pending_states
                .iter()
                .position(|(p, _)| p == point)
                .map(|idx| pending_states.remove(idx).1)
                .unwrap_or(false);
            self.states.insert(id, lit);
        }

        for (a, b) in &snapshot.edges {
            let resolved_a = self.node_with_position(*a);
            let resolved_b = self.node_with_position(*b);
            if let (Some(a), Some(b)) = (resolved_a, resolved_b) {
                self.edges.push(Edge::new(a, b));
            }
        }
    }

    /// Emits the store as the persisted JSON document.
    pub fn serialize(&self) -> Result<String> {
        self.snapshot().to_json()
    }

    /// Replaces the store wholesale from a persisted JSON document.
    ///
    /// On any decode failure the current contents are left untouched.
    pub fn deserialize(&mut self, data: &str) -> Result<()> {
        let snapshot = GraphSnapshot::from_json(data)?;
        self.restore(&snapshot);
        debug!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            "graph replaced from document"
        );
        Ok(())
    }

    fn node_with_position(&self, p: Point) -> Option<NodeId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.positions.get(id) == Some(&p))
    }
}
