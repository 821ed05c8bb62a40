//! Canvas graph data model: nodes, edges, lit state, and hit-testing.
//!
//! # Example
//!
//! ```rust
//! use lumigraph_core::graph::GraphStore;
//!
//! let mut store = GraphStore::new();
//! let a = store.add_node(100, 100).unwrap();
//! let b = store.add_node(140, 100).unwrap();
//! store.add_edge(a, b);
//!
//! store.toggle(a);
//! assert_eq!(store.state(a), Some(true));
//! assert_eq!(store.state(b), Some(true)); // depth-1 propagation
//! ```

pub mod geometry;
mod store;
mod types;


pub use store::GraphStore;
pub use types::{Edge, NodeId, Point};
