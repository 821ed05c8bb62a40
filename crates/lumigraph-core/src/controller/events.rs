//! The abstract pointer/keyboard event vocabulary.
//!
//! The controller is driven by this enumeration instead of a toolkit event
//! loop, so gesture logic runs in unit tests without a display.

/// Which pointer button an event carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The main button: place, connect, drag, toggle.
    Primary,
    /// The alternate button: remove nodes and edges.
    Secondary,
}

/// One input event delivered by the host event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// A button went down at `(x, y)`.
    Press {
        /// Button that went down.
        button: PointerButton,
        /// Pointer x coordinate.
        x: i64,
        /// Pointer y coordinate.
        y: i64,
    },
    /// The pointer moved to `(x, y)` with the primary button held.
    Move {
        /// Pointer x coordinate.
        x: i64,
        /// Pointer y coordinate.
        y: i64,
    },
    /// A button came up at `(x, y)`.
    Release {
        /// Button that came up.
        button: PointerButton,
        /// Pointer x coordinate.
        x: i64,
        /// Pointer y coordinate.
        y: i64,
    },
    /// The second press of a double-press landed at `(x, y)`.
    DoublePress {
        /// Pointer x coordinate.
        x: i64,
        /// Pointer y coordinate.
        y: i64,
    },
    /// A character key was pressed.
    Key(char),
}
