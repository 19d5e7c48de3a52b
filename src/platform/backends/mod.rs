// src/platform/backends/mod.rs

//! Defines the `Driver` trait for backend implementations (e.g., X11) and the
//! common types exchanged across that seam: `BackendEvent` for input flowing
//! in, and `RenderCommand` for drawing primitives flowing out.
//!
//! The editor core never talks to a windowing system directly. It consumes
//! `BackendEvent`s and emits `RenderCommand`s; a `Driver` translates both at
//! the platform boundary. This keeps the state machine and renderer fully
//! unit-testable against the mock driver.

use crate::color::Color;
use anyhow::Result;

// Re-export driver implementations so they can be accessed via
// `crate::platform::backends::x11::XDriver`, etc.
#[cfg(test)]
pub mod mock;
pub mod x11;

/// Represents events originating from the backend (platform-specific UI/input).
/// These events are processed by the `AppOrchestrator`, which feeds them to
/// the `EditorState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendEvent {
    /// The application received a request to close from the platform
    /// (e.g., user clicked the window's close button).
    CloseRequested,
    /// A mouse button was pressed at the given window coordinate.
    MouseButtonPress { button: MouseButton, x: i32, y: i32 },
    /// A mouse button was released at the given window coordinate.
    MouseButtonRelease { button: MouseButton, x: i32, y: i32 },
    /// The mouse was moved to the given window coordinate.
    MouseMove { x: i32, y: i32 },
    /// The window was resized by the platform. The editor ignores this; the
    /// backend uses it to keep its back buffer sized to the window.
    Resize { width_px: u16, height_px: u16 },
}

/// Represents mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
    Other(u8),
}

/// Drawing commands for the backend to execute.
///
/// Each command carries its color directly; there is no ambient draw-color
/// state. Commands within a frame are executed in order, so later draws
/// cover earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCommand {
    /// Clears the entire display area with the specified color.
    Clear { color: Color },
    /// Plots a single pixel.
    DrawPoint { x: i32, y: i32, color: Color },
    /// Draws a line segment between two points.
    DrawLine {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },
    /// Draws an (unfilled) circle outline centered at `(cx, cy)`.
    DrawCircle {
        cx: i32,
        cy: i32,
        radius: u16,
        color: Color,
    },
}

/// Defines the interface for a rendering and platform interaction driver.
///
/// A `Driver` is responsible for:
/// 1.  Window and display setup and management (e.g., creating an X11 window).
/// 2.  Handling platform-specific events (input, resize, close requests) and
///     translating them into generic `BackendEvent`s.
/// 3.  Implementing the abstract drawing primitives in `RenderCommand` so the
///     renderer never needs backend-specific details.
pub trait Driver {
    /// Creates and initializes a new driver instance.
    ///
    /// This should perform all necessary setup for the backend, such as
    /// opening display connections and creating the window.
    fn new() -> Result<Self>
    where
        Self: Sized;

    /// Processes any pending platform events.
    ///
    /// Must not block: when no native events are pending it returns an empty
    /// vector so the frame loop falls through to rendering.
    fn process_events(&mut self) -> Result<Vec<BackendEvent>>;

    /// Executes a list of render commands against the backend's surface.
    ///
    /// Called once per frame by the orchestrator with the full frame's
    /// command list. Nothing is visible until `present()`.
    fn execute_render_commands(&mut self, commands: Vec<RenderCommand>) -> Result<()>;

    /// Presents the composed frame to the display.
    /// For double-buffered backends this copies or swaps the back buffer.
    fn present(&mut self) -> Result<()>;

    /// Sets the window title.
    fn set_title(&mut self, title: &str);

    /// Performs any necessary cleanup before the driver is dropped.
    /// This method should be idempotent.
    fn cleanup(&mut self) -> Result<()>;
}
