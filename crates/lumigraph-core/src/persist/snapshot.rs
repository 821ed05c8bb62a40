//! The persisted graph document.
//!
//! One UTF-8 JSON document with three ordered arrays:
//!
//! ```text
//! {
//!   "nodes":  [[x, y], ...],
//!   "edges":  [[[x1, y1], [x2, y2]], ...],
//!   "states": [[[x, y], bool], ...]
//! }
//! ```
//!
//! `nodes` preserves insertion order. `states` carries exactly one entry per
//! node, matched by exact coordinate equality. Decoding validates structure
//! before anything is applied, so a failed load never leaves a half-replaced
//! graph behind.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::Point;

/// The (nodes, edges, states) triple at a point in time.
///
/// Doubles as the persistence document and as the rollback point the
/// controller restores after a render failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Node positions in insertion order.
    pub nodes: Vec<Point>,
    /// Edge endpoint pairs, in stored order.
    pub edges: Vec<(Point, Point)>,
    /// One `(position, lit)` entry per node.
    pub states: Vec<(Point, bool)>,
}

impl GraphSnapshot {
    /// Encodes the snapshot as the persisted JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes and validates a persisted JSON document.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] on malformed JSON, a missing top-level key, a
    /// non-array value, or a coordinate pair of the wrong arity;
    /// [`Error::Decode`] when the state entries do not match the node list
    /// one-to-one by exact coordinate equality.
    pub fn from_json(data: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(data)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks that `states` carries exactly one entry per node.
    fn validate(&self) -> Result<()> {
        if self.states.len() != self.nodes.len() {
            return Err(Error::Decode(format!(
                "expected one state entry per node: {} nodes, {} states",
                self.nodes.len(),
                self.states.len()
            )));
        }
        // Multiset match: each state coordinate consumes one node entry, so
        // duplicated coordinates in one list cannot hide behind the other.
        let mut unmatched: Vec<Point> = self.nodes.clone();
        for (point, _) in &self.states {
            match unmatched.iter().position(|p| p == point) {
                Some(idx) => {
                    unmatched.swap_remove(idx);
                }
                None => {
                    return Err(Error::Decode(format!(
                        "state entry references unknown node {point}"
                    )));
                }
            }
        }
        Ok(())
    }
}
