// src/platform/backends/x11/window.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

use super::connection::Connection;
use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::ffi::CString;
use std::mem;

// X11 library imports
use libc::c_uint;
use x11::xlib;

/// Represents an X11 window and its associated properties.
///
/// Manages the window ID, the WM_DELETE_WINDOW protocol atoms, and the
/// current pixel dimensions. Cleanup of X11 resources is handled by the
/// `cleanup` method, which should be called explicitly by the owner
/// (`XDriver`) before the `Connection` is closed.
#[derive(Debug)]
pub struct Window {
    id: xlib::Window,
    wm_delete_window: xlib::Atom, // Atom for WM_DELETE_WINDOW protocol
    protocols_atom: xlib::Atom,   // Atom for WM_PROTOCOLS
    current_pixel_width: u16,
    current_pixel_height: u16,
    destroyed: bool,
}

impl Window {
    /// Creates a new X11 window with an event mask covering the input the
    /// editor consumes: button presses/releases, pointer motion, exposure,
    /// and structure (resize) notifications.
    ///
    /// The window is not yet visible (mapped) or configured with WM
    /// protocols until subsequent methods are called.
    pub fn new(connection: &Connection, width_px: u16, height_px: u16) -> Result<Self> {
        info!("Creating X11 window: {}x{}px", width_px, height_px);
        let display = connection.display();
        let bg_pixel = connection.black_pixel();

        // SAFETY: Xlib calls involving FFI. The connection and its members
        // are valid for the duration of this call.
        let window_id = unsafe {
            let root_window = connection.root_window();

            let mut attributes: xlib::XSetWindowAttributes = mem::zeroed();
            attributes.colormap = connection.colormap();
            attributes.background_pixel = bg_pixel;
            attributes.border_pixel = bg_pixel;
            attributes.event_mask = xlib::ExposureMask
                | xlib::ButtonPressMask
                | xlib::ButtonReleaseMask
                | xlib::PointerMotionMask
                | xlib::StructureNotifyMask;

            xlib::XCreateWindow(
                display,
                root_window,
                0, // x position (relative to parent)
                0, // y position
                width_px as c_uint,
                height_px as c_uint,
                0, // border width
                connection.depth(),
                xlib::InputOutput as c_uint,
                xlib::XDefaultVisual(display, connection.screen()),
                xlib::CWColormap | xlib::CWBackPixel | xlib::CWBorderPixel | xlib::CWEventMask,
                &mut attributes,
            )
        };

        if window_id == 0 {
            return Err(anyhow!("XCreateWindow failed"));
        }
        debug!(
            "X window created (ID: {}), initial size: {}x{}",
            window_id, width_px, height_px
        );

        Ok(Window {
            id: window_id,
            wm_delete_window: 0, // Initialized by setup_protocols
            protocols_atom: 0,
            current_pixel_width: width_px,
            current_pixel_height: height_px,
            destroyed: false,
        })
    }

    /// Registers for the WM_DELETE_WINDOW protocol so the window manager's
    /// close button arrives as a ClientMessage instead of killing the
    /// connection.
    pub fn setup_protocols(&mut self, connection: &Connection) -> Result<()> {
        let display = connection.display();
        let wm_protocols = CString::new("WM_PROTOCOLS").expect("static string has no NUL");
        let wm_delete = CString::new("WM_DELETE_WINDOW").expect("static string has no NUL");

        // SAFETY: display is valid; the CStrings outlive the calls.
        unsafe {
            self.protocols_atom = xlib::XInternAtom(display, wm_protocols.as_ptr(), xlib::False);
            self.wm_delete_window = xlib::XInternAtom(display, wm_delete.as_ptr(), xlib::False);

            if self.wm_delete_window != 0 && self.protocols_atom != 0 {
                let status = xlib::XSetWMProtocols(
                    display,
                    self.id,
                    [self.wm_delete_window].as_mut_ptr(),
                    1,
                );
                if status == 0 {
                    warn!("XSetWMProtocols failed; window close button may kill the connection.");
                }
            } else {
                warn!("Failed to intern WM_PROTOCOLS/WM_DELETE_WINDOW atoms.");
            }
        }
        Ok(())
    }

    /// Maps the window, making it visible.
    pub fn map(&self, connection: &Connection) {
        // SAFETY: display and window id are valid.
        unsafe {
            xlib::XMapRaised(connection.display(), self.id);
        }
    }

    /// Sets the window title.
    pub fn set_title(&self, connection: &Connection, title: &str) {
        match CString::new(title) {
            Ok(title_c) => {
                // SAFETY: display, window id, and the CString are valid.
                unsafe {
                    xlib::XStoreName(connection.display(), self.id, title_c.as_ptr() as *mut _);
                }
            }
            Err(_) => warn!("Window title contained an interior NUL byte; not set."),
        }
    }

    /// Records new pixel dimensions reported by a ConfigureNotify event.
    /// Returns true if the size actually changed.
    pub fn record_resize(&mut self, width_px: u16, height_px: u16) -> bool {
        if width_px == self.current_pixel_width && height_px == self.current_pixel_height {
            return false;
        }
        debug!(
            "Window resized: {}x{} -> {}x{}",
            self.current_pixel_width, self.current_pixel_height, width_px, height_px
        );
        self.current_pixel_width = width_px;
        self.current_pixel_height = height_px;
        true
    }

    #[inline]
    pub fn id(&self) -> xlib::Window {
        self.id
    }

    #[inline]
    pub fn wm_delete_window_atom(&self) -> xlib::Atom {
        self.wm_delete_window
    }

    #[inline]
    pub fn protocols_atom(&self) -> xlib::Atom {
        self.protocols_atom
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_pixel_width, self.current_pixel_height)
    }

    /// Destroys the window. Idempotent.
    pub fn cleanup(&mut self, connection: &Connection) {
        if !self.destroyed && self.id != 0 {
            info!("Destroying X11 window (ID: {}).", self.id);
            // SAFETY: display and window id are valid; guarded against
            // double destruction by the `destroyed` flag.
            unsafe {
                xlib::XDestroyWindow(connection.display(), self.id);
            }
            self.destroyed = true;
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if !self.destroyed {
            // The Connection may already be gone at this point, so no Xlib
            // calls here; XCloseDisplay releases the window server-side.
            debug!(
                "Window (ID: {}) dropped without explicit cleanup; display close will reclaim it.",
                self.id
            );
        }
    }
}
