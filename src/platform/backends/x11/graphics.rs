// src/platform/backends/x11/graphics.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

//! Drawing primitives for the X11 backend.
//!
//! All drawing happens into an offscreen pixmap the size of the window;
//! `present` copies it to the window in one `XCopyArea`, so a frame never
//! appears half-drawn. Colors are allocated lazily through the default
//! colormap and cached per RGB triple.

use super::connection::Connection;
use crate::color::Color;
use crate::platform::backends::RenderCommand;
use anyhow::{anyhow, Result};
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::mem;

// X11 library imports
use libc::{c_int, c_uint, c_ulong};
use x11::xlib;

/// A full circle for `XDrawArc`, in 1/64 degree units.
const FULL_ARC: c_int = 360 * 64;

/// Owns the graphics context, the back-buffer pixmap, and the color cache
/// for one window.
pub struct Graphics {
    gc: xlib::GC,
    back_buffer: xlib::Pixmap,
    buffer_width: u16,
    buffer_height: u16,
    /// Allocated pixel values keyed by RGB triple. The handful of scheme
    /// colors means this stays tiny.
    color_cache: HashMap<(u8, u8, u8), c_ulong>,
    cleaned_up: bool,
}

impl Graphics {
    /// Creates the GC and the back-buffer pixmap for `window_id`.
    pub fn new(
        connection: &Connection,
        window_id: xlib::Window,
        width_px: u16,
        height_px: u16,
    ) -> Result<Self> {
        let display = connection.display();

        // SAFETY: display and window_id are valid; gc_values is a valid
        // zeroed XGCValues and the mask of 0 means no fields are read.
        let gc = unsafe {
            let mut gc_values: xlib::XGCValues = mem::zeroed();
            xlib::XCreateGC(display, window_id, 0, &mut gc_values)
        };
        if gc.is_null() {
            return Err(anyhow!("XCreateGC failed for window ID {}", window_id));
        }

        let back_buffer = Self::create_pixmap(connection, window_id, width_px, height_px)?;
        debug!(
            "Graphics initialized: {}x{} back buffer, depth {}.",
            width_px,
            height_px,
            connection.depth()
        );

        Ok(Graphics {
            gc,
            back_buffer,
            buffer_width: width_px,
            buffer_height: height_px,
            color_cache: HashMap::new(),
            cleaned_up: false,
        })
    }

    fn create_pixmap(
        connection: &Connection,
        window_id: xlib::Window,
        width_px: u16,
        height_px: u16,
    ) -> Result<xlib::Pixmap> {
        // SAFETY: display, window_id, and depth are valid; dimensions are
        // clamped to at least 1, which XCreatePixmap requires.
        let pixmap = unsafe {
            xlib::XCreatePixmap(
                connection.display(),
                window_id,
                width_px.max(1) as c_uint,
                height_px.max(1) as c_uint,
                connection.depth() as c_uint,
            )
        };
        if pixmap == 0 {
            return Err(anyhow!(
                "XCreatePixmap failed ({}x{})",
                width_px,
                height_px
            ));
        }
        Ok(pixmap)
    }

    /// Recreates the back buffer at a new size after a window resize.
    pub fn resize(
        &mut self,
        connection: &Connection,
        window_id: xlib::Window,
        width_px: u16,
        height_px: u16,
    ) -> Result<()> {
        let new_buffer = Self::create_pixmap(connection, window_id, width_px, height_px)?;
        // SAFETY: the old pixmap is a valid XID owned by us.
        unsafe {
            xlib::XFreePixmap(connection.display(), self.back_buffer);
        }
        self.back_buffer = new_buffer;
        self.buffer_width = width_px;
        self.buffer_height = height_px;
        debug!("Back buffer resized to {}x{}.", width_px, height_px);
        Ok(())
    }

    /// Resolves a `Color` to an allocated pixel value, allocating and
    /// caching it on first use. Falls back to the black pixel if the
    /// colormap refuses the allocation.
    fn pixel_for(&mut self, connection: &Connection, color: Color) -> c_ulong {
        let rgb = color.to_rgb();
        if let Some(&pixel) = self.color_cache.get(&rgb) {
            return pixel;
        }

        let (r, g, b) = rgb;
        // SAFETY: display and colormap are valid; xcolor is a properly
        // initialized XColor passed by mutable pointer.
        let pixel = unsafe {
            let mut xcolor: xlib::XColor = mem::zeroed();
            // Scale 8-bit channels to the 16-bit range Xlib expects.
            xcolor.red = r as u16 * 257;
            xcolor.green = g as u16 * 257;
            xcolor.blue = b as u16 * 257;
            xcolor.flags = (xlib::DoRed | xlib::DoGreen | xlib::DoBlue) as libc::c_char;
            if xlib::XAllocColor(connection.display(), connection.colormap(), &mut xcolor) != 0 {
                xcolor.pixel
            } else {
                warn!(
                    "XAllocColor failed for rgb({}, {}, {}); falling back to black.",
                    r, g, b
                );
                connection.black_pixel()
            }
        };
        self.color_cache.insert(rgb, pixel);
        pixel
    }

    /// Executes one render command against the back buffer.
    pub fn execute(&mut self, connection: &Connection, command: RenderCommand) {
        let display = connection.display();
        trace!("Graphics: {:?}", command);
        match command {
            RenderCommand::Clear { color } => {
                let pixel = self.pixel_for(connection, color);
                // SAFETY: all XIDs and pointers are valid; fill covers the
                // whole back buffer.
                unsafe {
                    xlib::XSetForeground(display, self.gc, pixel);
                    xlib::XFillRectangle(
                        display,
                        self.back_buffer,
                        self.gc,
                        0,
                        0,
                        self.buffer_width as c_uint,
                        self.buffer_height as c_uint,
                    );
                }
            }
            RenderCommand::DrawPoint { x, y, color } => {
                let pixel = self.pixel_for(connection, color);
                // SAFETY: as above; out-of-bounds coordinates are clipped
                // by the server.
                unsafe {
                    xlib::XSetForeground(display, self.gc, pixel);
                    xlib::XDrawPoint(display, self.back_buffer, self.gc, x, y);
                }
            }
            RenderCommand::DrawLine { x1, y1, x2, y2, color } => {
                let pixel = self.pixel_for(connection, color);
                // SAFETY: as above.
                unsafe {
                    xlib::XSetForeground(display, self.gc, pixel);
                    xlib::XDrawLine(display, self.back_buffer, self.gc, x1, y1, x2, y2);
                }
            }
            RenderCommand::DrawCircle { cx, cy, radius, color } => {
                let pixel = self.pixel_for(connection, color);
                let r = radius as c_int;
                // SAFETY: as above. XDrawArc takes the bounding box of the
                // ellipse and angles in 1/64 degree units.
                unsafe {
                    xlib::XSetForeground(display, self.gc, pixel);
                    xlib::XDrawArc(
                        display,
                        self.back_buffer,
                        self.gc,
                        cx - r,
                        cy - r,
                        (radius as c_uint) * 2,
                        (radius as c_uint) * 2,
                        0,
                        FULL_ARC,
                    );
                }
            }
        }
    }

    /// Copies the back buffer to the window and flushes the request queue.
    pub fn present(&mut self, connection: &Connection, window_id: xlib::Window) {
        // SAFETY: all XIDs and pointers are valid for the copy.
        unsafe {
            xlib::XCopyArea(
                connection.display(),
                self.back_buffer,
                window_id,
                self.gc,
                0,
                0,
                self.buffer_width as c_uint,
                self.buffer_height as c_uint,
                0,
                0,
            );
            xlib::XFlush(connection.display());
        }
    }

    /// Releases the GC and back buffer. Idempotent.
    pub fn cleanup(&mut self, connection: &Connection) {
        if self.cleaned_up {
            return;
        }
        debug!("Releasing X11 graphics resources.");
        // SAFETY: XIDs are valid and owned by us; guarded by `cleaned_up`.
        unsafe {
            xlib::XFreePixmap(connection.display(), self.back_buffer);
            xlib::XFreeGC(connection.display(), self.gc);
        }
        self.cleaned_up = true;
    }
}
