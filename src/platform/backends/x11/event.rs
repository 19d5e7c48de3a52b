// src/platform/backends/x11/event.rs
#![allow(non_snake_case)] // Allow non-snake case for X11 types

//! Translates native X11 events into generic `BackendEvent`s.

use super::connection::Connection;
use super::window::Window;
use crate::platform::backends::{BackendEvent, MouseButton};
use anyhow::Result;
use log::{debug, info, trace};
use std::mem;

use x11::xlib;

/// Polls the X server and translates all pending events.
///
/// This function polls with `XPending` and drains the queue with
/// `XNextEvent`, so it never blocks: with no events pending it returns an
/// empty vector and the frame loop falls through to rendering. Events the
/// editor has no use for (expose, focus, keyboard) are dropped here.
pub fn process_pending_events(
    connection: &Connection,
    window: &mut Window,
) -> Result<Vec<BackendEvent>> {
    let mut backend_events = Vec::new();
    let display = connection.display();

    // SAFETY: `XPending` is safe to call with `display`, which is a valid
    // pointer from an active `Connection`.
    while unsafe { xlib::XPending(display) } > 0 {
        let mut xevent: xlib::XEvent = unsafe { mem::zeroed() };
        // SAFETY: `display` is valid and `xevent` is a valid mutable pointer
        // to a zeroed `XEvent`. The `XPending` loop condition guarantees an
        // event is queued, so this does not block.
        unsafe { xlib::XNextEvent(display, &mut xevent) };

        // SAFETY: `type_` is a common field present in every XEvent variant.
        let event_type = unsafe { xevent.type_ };

        match event_type {
            xlib::ClientMessage => {
                // SAFETY: Accessing the `xclient` union field is safe because
                // the `event_type` has been confirmed to be `ClientMessage`.
                let client_message_event = unsafe { xevent.client_message };
                // Check if this is a WM_DELETE_WINDOW message.
                if client_message_event.message_type == window.protocols_atom()
                    && client_message_event.data.as_longs()[0] as xlib::Atom
                        == window.wm_delete_window_atom()
                {
                    info!(
                        "XEvent: WM_DELETE_WINDOW received for window {}.",
                        client_message_event.window
                    );
                    backend_events.push(BackendEvent::CloseRequested);
                } else {
                    trace!(
                        "XEvent: Ignored ClientMessage (type: {}) on window {}",
                        client_message_event.message_type,
                        client_message_event.window
                    );
                }
            }
            xlib::ButtonPress => {
                // SAFETY: Accessing `xbutton` is safe as `event_type` is `ButtonPress`.
                let button_event = unsafe { xevent.button };
                let button = translate_button(button_event.button);
                debug!(
                    "XEvent: ButtonPress (button: {:?}, x: {}, y: {}) on window {}",
                    button, button_event.x, button_event.y, button_event.window
                );
                backend_events.push(BackendEvent::MouseButtonPress {
                    button,
                    x: button_event.x,
                    y: button_event.y,
                });
            }
            xlib::ButtonRelease => {
                // SAFETY: Accessing `xbutton` is safe as `event_type` is `ButtonRelease`.
                let button_event = unsafe { xevent.button };
                let button = translate_button(button_event.button);
                debug!(
                    "XEvent: ButtonRelease (button: {:?}, x: {}, y: {}) on window {}",
                    button, button_event.x, button_event.y, button_event.window
                );
                backend_events.push(BackendEvent::MouseButtonRelease {
                    button,
                    x: button_event.x,
                    y: button_event.y,
                });
            }
            xlib::MotionNotify => {
                // SAFETY: Accessing `xmotion` is safe as `event_type` is `MotionNotify`.
                let motion_event = unsafe { xevent.motion };
                trace!(
                    "XEvent: MotionNotify (x: {}, y: {}) on window {}",
                    motion_event.x,
                    motion_event.y,
                    motion_event.window
                );
                backend_events.push(BackendEvent::MouseMove {
                    x: motion_event.x,
                    y: motion_event.y,
                });
            }
            xlib::ConfigureNotify => {
                // SAFETY: Accessing `xconfigure` is safe as `event_type` is `ConfigureNotify`.
                let configure_event = unsafe { xevent.configure };
                let width_px = configure_event.width.max(1) as u16;
                let height_px = configure_event.height.max(1) as u16;
                if window.record_resize(width_px, height_px) {
                    backend_events.push(BackendEvent::Resize {
                        width_px,
                        height_px,
                    });
                }
            }
            other => {
                trace!("XEvent: ignoring event type {}", other);
            }
        }
    }

    Ok(backend_events)
}

fn translate_button(native: u32) -> MouseButton {
    match native {
        xlib::Button1 => MouseButton::Left,
        xlib::Button2 => MouseButton::Middle,
        xlib::Button3 => MouseButton::Right,
        xlib::Button4 => MouseButton::ScrollUp, // Conventionally scroll up
        xlib::Button5 => MouseButton::ScrollDown, // Conventionally scroll down
        other => MouseButton::Other(other as u8),
    }
}
