// src/platform/backends/x11/connection.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::ptr;

// X11 library imports
use libc::c_int;
use x11::xlib;

/// Manages an X11 Display connection, ensuring it's closed on drop.
///
/// This struct wraps the raw `*mut xlib::Display` pointer and handles
/// opening and closing it.
#[derive(Debug)]
struct ManagedDisplay {
    ptr: *mut xlib::Display,
}

impl ManagedDisplay {
    /// Attempts to open a new connection to the X server.
    ///
    /// Passing NULL to `XOpenDisplay` means it will use the `DISPLAY`
    /// environment variable.
    pub fn new() -> Result<Self> {
        let display_ptr = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if display_ptr.is_null() {
            Err(anyhow!(
                "Failed to open X display. Check DISPLAY environment variable or X server status."
            ))
        } else {
            debug!("X display opened successfully: {:p}", display_ptr);
            Ok(Self { ptr: display_ptr })
        }
    }

    /// Returns the raw X11 display pointer.
    #[inline]
    pub fn raw(&self) -> *mut xlib::Display {
        self.ptr
    }
}

impl Drop for ManagedDisplay {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            info!("Closing X11 display connection: {:p}", self.ptr);
            unsafe {
                let status = xlib::XCloseDisplay(self.ptr);
                if status != 0 {
                    warn!(
                        "XCloseDisplay returned non-zero status: {}. Display may not have closed cleanly.",
                        status
                    );
                }
            }
        }
    }
}

/// Represents and manages the connection to the X server.
///
/// Encapsulates the Xlib `Display` pointer and the common identifiers the
/// rest of the backend needs: the default screen, its colormap, and depth.
/// The connection is automatically closed when this struct is dropped.
#[derive(Debug)]
pub struct Connection {
    managed_display: ManagedDisplay,
    screen: c_int,
    colormap: xlib::Colormap,
    depth: c_int,
}

impl Connection {
    /// Establishes a new connection to the X server and caches the default
    /// screen, colormap, and depth for it.
    pub fn new() -> Result<Self> {
        let managed_display = ManagedDisplay::new()?;
        let display = managed_display.raw();

        // SAFETY: `display` is a valid pointer returned by XOpenDisplay.
        let (screen, colormap, depth) = unsafe {
            let screen = xlib::XDefaultScreen(display);
            let colormap = xlib::XDefaultColormap(display, screen);
            let depth = xlib::XDefaultDepth(display, screen);
            (screen, colormap, depth)
        };

        debug!(
            "X11 connection ready: screen={}, depth={}, colormap={}",
            screen, depth, colormap
        );

        Ok(Connection {
            managed_display,
            screen,
            colormap,
            depth,
        })
    }

    /// Returns the raw display pointer for Xlib calls.
    #[inline]
    pub fn display(&self) -> *mut xlib::Display {
        self.managed_display.raw()
    }

    #[inline]
    pub fn screen(&self) -> c_int {
        self.screen
    }

    #[inline]
    pub fn colormap(&self) -> xlib::Colormap {
        self.colormap
    }

    #[inline]
    pub fn depth(&self) -> c_int {
        self.depth
    }

    /// The root window of the default screen.
    pub fn root_window(&self) -> xlib::Window {
        // SAFETY: display and screen are valid for the lifetime of self.
        unsafe { xlib::XRootWindow(self.display(), self.screen) }
    }

    /// The black pixel value of the default screen, used as the initial
    /// window background before the first frame is drawn.
    pub fn black_pixel(&self) -> libc::c_ulong {
        // SAFETY: display and screen are valid for the lifetime of self.
        unsafe { xlib::XBlackPixel(self.display(), self.screen) }
    }
}
