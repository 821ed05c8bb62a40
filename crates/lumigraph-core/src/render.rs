//! Rendering-surface seam.
//!
//! The editor core never draws; it hands primitives to whatever surface the
//! host provides. Any toolkit canvas can implement this, and tests drive the
//! controller with an in-memory recorder.

use crate::error::Result;

/// The drawing surface the controller redraws onto.
///
/// Calls are fallible so a surface backed by real toolkit state can reject a
/// draw; the controller treats any failure as a render inconsistency and
/// rolls back to its last good snapshot.
pub trait Renderer {
    /// Erases the whole surface before a redraw.
    fn clear(&mut self) -> Result<()>;

    /// Draws a node's hit circle centered at `(x, y)`; `filled` marks a lit
    /// node.
    fn draw_circle(&mut self, x: i64, y: i64, filled: bool) -> Result<()>;

    /// Draws an edge (or the connect-preview line) between two points.
    fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> Result<()>;
}
