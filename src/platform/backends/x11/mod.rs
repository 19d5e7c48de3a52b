// src/platform/backends/x11/mod.rs

//! X11 backend driver implementation for the editor.
//!
//! This module defines `XDriver`, which coordinates the X11 functionality
//! split across its submodules:
//! - `connection`: Manages the connection to the X server.
//! - `window`: Handles X11 window creation, properties, and WM protocols.
//! - `graphics`: Draws render commands into a back-buffer pixmap.
//! - `event`: Translates X11 events into generic `BackendEvent`s.
//!
//! `XDriver` implements the `crate::platform::backends::Driver` trait,
//! providing the platform-specific layer under the editor's core logic.

use crate::config::CONFIG;
use crate::platform::backends::{BackendEvent, Driver, RenderCommand};
use anyhow::{Context, Result};
use log::{debug, error, info};

pub mod connection;
pub mod event;
pub mod graphics;
pub mod window;

use connection::Connection;
use graphics::Graphics;
use window::Window;

/// Implements the `Driver` trait for the X11 windowing system.
pub struct XDriver {
    connection: Connection,
    window: Window,
    graphics: Graphics,
}

impl XDriver {
    /// Creates and initializes all components of the X11 driver: the server
    /// connection, the editor window (mapped and WM-protocol configured),
    /// and the graphics state for it.
    pub fn new() -> Result<Self> {
        info!("XDriver::new() - initializing X11 driver components.");

        let connection = Connection::new().map_err(|e| {
            error!("Failed to establish X11 connection: {}", e);
            e
        })?;

        let width_px = CONFIG.window.width_px;
        let height_px = CONFIG.window.height_px;

        let mut window = Window::new(&connection, width_px, height_px)
            .context("Failed to create X11 window")?;
        window
            .setup_protocols(&connection)
            .context("Failed to set up WM protocols")?;
        window.set_title(&connection, &CONFIG.window.title);

        let graphics = Graphics::new(&connection, window.id(), width_px, height_px)
            .context("Failed to initialize X11 graphics")?;

        window.map(&connection);
        info!(
            "X11 window (ID: {}) mapped at {}x{}.",
            window.id(),
            width_px,
            height_px
        );

        Ok(XDriver {
            connection,
            window,
            graphics,
        })
    }
}

impl Driver for XDriver {
    fn new() -> Result<Self> {
        XDriver::new()
    }

    fn process_events(&mut self) -> Result<Vec<BackendEvent>> {
        let events = event::process_pending_events(&self.connection, &mut self.window)?;

        // Window resizes also resize the back buffer before the next frame
        // is drawn into it.
        for event in &events {
            if let BackendEvent::Resize {
                width_px,
                height_px,
            } = *event
            {
                self.graphics
                    .resize(&self.connection, self.window.id(), width_px, height_px)
                    .context("Failed to resize back buffer")?;
            }
        }

        Ok(events)
    }

    fn execute_render_commands(&mut self, commands: Vec<RenderCommand>) -> Result<()> {
        for command in commands {
            self.graphics.execute(&self.connection, command);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.graphics.present(&self.connection, self.window.id());
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(&self.connection, title);
    }

    fn cleanup(&mut self) -> Result<()> {
        debug!("XDriver cleanup.");
        self.graphics.cleanup(&self.connection);
        self.window.cleanup(&self.connection);
        Ok(())
    }
}

impl Drop for XDriver {
    fn drop(&mut self) {
        // Cleanup is idempotent; ensure server resources go before the
        // connection closes.
        let _ = self.cleanup();
    }
}
