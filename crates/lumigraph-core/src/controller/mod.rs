//! Interaction state machine: raw events in, store operations out.
//!
//! The controller owns the [`GraphStore`] and a small amount of transient
//! gesture state (which node is being connected or dragged), interprets
//! events against the current mode, and requests redraws through the
//! [`Renderer`] seam. Input interpretation is decoupled from state mutation
//! so every gesture is testable without a display.
//!
//! Gestures in edit mode:
//!
//! - primary press on empty, clear space places a node
//! - primary press on a node arms a connect; dragging previews the edge and
//!   releasing over another node commits it
//! - double press on a node arms a move; dragging repositions it on every
//!   motion event
//! - secondary press removes the node under the pointer, or failing that the
//!   first edge near it
//! - `e` toggles edit mode
//!
//! In run mode a primary press on a node toggles its lit state (with depth-1
//! propagation) and every other gesture is inert.

mod events;


pub use events::{PointerButton, PointerEvent};

use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::graph::{GraphStore, NodeId, Point};
use crate::persist::{FileStore, GraphSnapshot};
use crate::render::Renderer;

/// Translates pointer/keyboard events into graph mutations and redraws.
#[derive(Debug)]
pub struct InteractionController {
    store: GraphStore,
    edit_mode: bool,
    pending_move: Option<NodeId>,
    pending_connect: Option<NodeId>,
    connect_cursor: Option<Point>,
    /// Set once the current move gesture has saved its rollback point.
    move_snapshot_taken: bool,
    last_good: GraphSnapshot,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(GraphStore::new())
    }
}

impl InteractionController {
    /// Creates a controller owning `store`, starting in edit mode.
    #[must_use]
    pub fn new(store: GraphStore) -> Self {
        let last_good = store.snapshot();
        Self {
            store,
            edit_mode: true,
            pending_move: None,
            pending_connect: None,
            connect_cursor: None,
            move_snapshot_taken: false,
            last_good,
        }
    }

    /// Read access to the graph for hosts that render or inspect it.
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Returns true while topology edits are enabled.
    #[must_use]
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Processes one event to completion.
    pub fn dispatch<R: Renderer>(&mut self, event: PointerEvent, renderer: &mut R) {
        match event {
            PointerEvent::Press {
                button: PointerButton::Primary,
                x,
                y,
            } => self.primary_press(x, y, renderer),
            PointerEvent::Press {
                button: PointerButton::Secondary,
                x,
                y,
            } => self.secondary_press(x, y, renderer),
            PointerEvent::Move { x, y } => self.pointer_move(x, y, renderer),
            PointerEvent::Release {
                button: PointerButton::Primary,
                ..
            } => self.primary_release(renderer),
            PointerEvent::Release { .. } => {}
            PointerEvent::DoublePress { x, y } => self.double_press(x, y),
            PointerEvent::Key(c) => self.key(c),
        }
    }

    // ── Gestures ───────────────────────────────────────────────────────

    fn primary_press<R: Renderer>(&mut self, x: i64, y: i64, renderer: &mut R) {
        self.disarm();

        if !self.edit_mode {
            if let Some(id) = self.store.find_node_at(x, y) {
                self.last_good = self.store.snapshot();
                self.store.toggle(id);
                self.redraw(renderer);
            }
            return;
        }

        if let Some(id) = self.store.find_node_at(x, y) {
            self.pending_connect = Some(id);
            return;
        }

        if !self.store.can_place_at(x, y) {
            return;
        }
        self.last_good = self.store.snapshot();
        self.store.add_node(x, y);
        self.redraw(renderer);
    }

    fn secondary_press<R: Renderer>(&mut self, x: i64, y: i64, renderer: &mut R) {
        if !self.edit_mode {
            return;
        }

        if let Some(id) = self.store.find_node_at(x, y) {
            self.last_good = self.store.snapshot();
            self.store.remove_node(id);
            self.redraw(renderer);
            return;
        }

        // No node under the pointer: delete the first edge near it, in
        // iteration order.
        let hit = self
            .store
            .edges()
            .iter()
            .copied()
            .find(|edge| self.store.is_near_edge(x, y, *edge));
        if let Some(edge) = hit {
            self.last_good = self.store.snapshot();
            self.store.remove_edge(edge.a(), edge.b());
            self.redraw(renderer);
        }
    }

    fn pointer_move<R: Renderer>(&mut self, x: i64, y: i64, renderer: &mut R) {
        if !self.edit_mode {
            return;
        }

        if let Some(id) = self.pending_move {
            // A move in progress trumps any half-armed connect.
            self.pending_connect = None;
            self.connect_cursor = None;

            if !self.move_snapshot_taken {
                self.last_good = self.store.snapshot();
                self.move_snapshot_taken = true;
            }
            if !self.store.move_node(id, x, y) {
                self.pending_move = None;
                self.move_snapshot_taken = false;
            }
            self.redraw(renderer);
            return;
        }

        if self.pending_connect.is_some() {
            self.connect_cursor = Some(Point::new(x, y));
            // Preview only: the store stays unmutated until release.
            self.redraw(renderer);
        }
    }

    fn primary_release<R: Renderer>(&mut self, renderer: &mut R) {
        let Some(source) = self.pending_connect else {
            return;
        };
        let Some(cursor) = self.connect_cursor.take() else {
            // Press and release with no drag in between: nothing to connect.
            self.pending_connect = None;
            return;
        };
        self.pending_connect = None;

        match self.store.find_node_at(cursor.x, cursor.y) {
            Some(target) => {
                self.last_good = self.store.snapshot();
                self.store.add_edge(source, target);
                self.redraw(renderer);
            }
            // Released over empty space: drop the preview line.
            None => self.redraw(renderer),
        }
    }

    fn double_press(&mut self, x: i64, y: i64) {
        if !self.edit_mode {
            return;
        }
        self.disarm();
        if let Some(id) = self.store.find_node_at(x, y) {
            self.pending_move = Some(id);
        }
    }

    fn key(&mut self, c: char) {
        if c.eq_ignore_ascii_case(&'e') {
            self.edit_mode = !self.edit_mode;
            self.disarm();
        }
    }

    // ── Commands (the host's buttons) ──────────────────────────────────

    /// Serializes the graph and writes it to `path`.
    pub fn save<F: FileStore>(&self, files: &F, path: &Path) -> Result<()> {
        let json = self.store.serialize()?;
        files.write_all_text(path, &json)?;
        info!(path = %path.display(), nodes = self.store.node_count(), "graph saved");
        Ok(())
    }

    /// Loads `path` and replaces the graph wholesale, then redraws.
    ///
    /// Decode and I/O failures surface to the caller and leave the current
    /// graph untouched.
    pub fn load<F: FileStore, R: Renderer>(
        &mut self,
        files: &F,
        path: &Path,
        renderer: &mut R,
    ) -> Result<()> {
        let text = files.read_all_text(path)?;
        self.last_good = self.store.snapshot();
        self.store.deserialize(&text)?;
        self.disarm();
        self.redraw(renderer);
        info!(path = %path.display(), nodes = self.store.node_count(), "graph loaded");
        Ok(())
    }

    /// Removes every node and edge, then redraws.
    pub fn remove_all<R: Renderer>(&mut self, renderer: &mut R) {
        self.last_good = self.store.snapshot();
        self.store.clear();
        self.disarm();
        self.redraw(renderer);
    }

    /// Applies the toggle-all-or-reset-all state policy, then redraws.
    pub fn reset_states<R: Renderer>(&mut self, renderer: &mut R) {
        self.last_good = self.store.snapshot();
        self.store.reset_all();
        self.redraw(renderer);
    }

    /// Redraws the current graph without mutating it.
    pub fn refresh<R: Renderer>(&mut self, renderer: &mut R) {
        self.redraw(renderer);
    }

    // ── Redraw protocol ────────────────────────────────────────────────

    /// Cleans up edges and redraws the full scene.
    ///
    /// A failing draw rolls the store back to the last good snapshot and
    /// draws that instead; a second failure is logged and abandoned rather
    /// than retried forever.
    fn redraw<R: Renderer>(&mut self, renderer: &mut R) {
        self.store.cleanup_edges();
        if let Err(err) = self.draw_scene(renderer) {
            warn!(error = %err, "render failed; restoring last good snapshot");
            self.store.restore(&self.last_good);
            self.store.cleanup_edges();
            if let Err(err) = self.draw_scene(renderer) {
                warn!(error = %err, "render failed after rollback; giving up");
            }
        }
    }

    fn draw_scene<R: Renderer>(&self, renderer: &mut R) -> Result<()> {
        renderer.clear()?;
        for (id, p) in self.store.nodes() {
            let filled = self.store.state(id).unwrap_or(false);
            renderer.draw_circle(p.x, p.y, filled)?;
        }
        for edge in self.store.edges() {
            if let (Some(a), Some(b)) = (
                self.store.position(edge.a()),
                self.store.position(edge.b()),
            ) {
                renderer.draw_line(a.x, a.y, b.x, b.y)?;
            }
        }
        // Connect preview rides on top of the committed scene.
        if let (Some(source), Some(cursor)) = (self.pending_connect, self.connect_cursor) {
            if let Some(a) = self.store.position(source) {
                renderer.draw_line(a.x, a.y, cursor.x, cursor.y)?;
            }
        }
        Ok(())
    }

    fn disarm(&mut self) {
        self.pending_move = None;
        self.pending_connect = None;
        self.connect_cursor = None;
        self.move_snapshot_taken = false;
    }
}
