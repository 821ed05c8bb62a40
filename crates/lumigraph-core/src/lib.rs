//! # Lumigraph Core
//!
//! Data model and interaction logic for the Lumigraph editor: an interactive
//! undirected graph whose nodes are geometric points on a 2-D canvas.
//!
//! ## Features
//!
//! - **Id-indexed graph store**: stable node identifiers with geometry and
//!   lit state in side tables; moving a node never rewrites edges
//! - **Geometric hit-testing**: point-in-circle node lookup, `2·RADIUS`
//!   placement exclusion, point-near-line edge lookup
//! - **Lights-out toggling**: depth-1 state propagation along edges
//! - **JSON persistence**: ordered nodes/edges/states document with
//!   validate-before-apply loading
//! - **Display-free interaction machine**: the full gesture state machine
//!   runs against trait seams, so the editor logic is unit-testable
//!
//! ## Quick Start
//!
//! ```rust
//! use lumigraph_core::{GraphStore, InteractionController, PointerButton, PointerEvent, Renderer};
//!
//! struct NullRenderer;
//!
//! impl Renderer for NullRenderer {
//!     fn clear(&mut self) -> lumigraph_core::Result<()> {
//!         Ok(())
//!     }
//!     fn draw_circle(&mut self, _x: i64, _y: i64, _filled: bool) -> lumigraph_core::Result<()> {
//!         Ok(())
//!     }
//!     fn draw_line(&mut self, _x1: i64, _y1: i64, _x2: i64, _y2: i64) -> lumigraph_core::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut controller = InteractionController::new(GraphStore::new());
//! let mut surface = NullRenderer;
//!
//! // Place two nodes and connect them with a press-drag-release gesture.
//! controller.dispatch(PointerEvent::Press { button: PointerButton::Primary, x: 100, y: 100 }, &mut surface);
//! controller.dispatch(PointerEvent::Press { button: PointerButton::Primary, x: 140, y: 100 }, &mut surface);
//! controller.dispatch(PointerEvent::Press { button: PointerButton::Primary, x: 100, y: 100 }, &mut surface);
//! controller.dispatch(PointerEvent::Move { x: 140, y: 100 }, &mut surface);
//! controller.dispatch(PointerEvent::Release { button: PointerButton::Primary, x: 140, y: 100 }, &mut surface);
//!
//! assert_eq!(controller.store().edge_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;
pub mod persist;
pub mod render;

pub use config::EditorConfig;
pub use controller::{InteractionController, PointerButton, PointerEvent};
pub use error::{Error, Result};
pub use graph::{Edge, GraphStore, NodeId, Point};
pub use persist::{FileStore, FsFileStore, GraphSnapshot};
pub use render::Renderer;
