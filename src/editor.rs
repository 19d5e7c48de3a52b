// src/editor.rs

//! The interaction state machine for the curve editor.
//!
//! `EditorState` owns what would otherwise live in ambient
//! globals: the placed control points, the curve-drawn flag, the last known
//! pointer position, and the active drag. It is advanced by an explicit step
//! function, `handle_event`, which consumes one `BackendEvent` at a time;
//! rendering is handled separately by the `Renderer`. This split keeps the
//! state machine unit-testable without a real windowing surface.

use crate::geometry::{CubicBezier, Point};
use crate::platform::backends::{BackendEvent, MouseButton};
use log::{debug, trace};

/// A cubic Bézier curve has exactly four control points.
pub const CONTROL_POINT_COUNT: usize = 4;

/// The editor's interaction phase, derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// 0-3 control points placed; left clicks append points.
    Placing,
    /// All 4 points placed and the curve has been drawn at least once;
    /// pointer motion drags control points within the hit radius.
    Ready,
}

/// Holds the editor's entire mutable state.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The placed control points, in placement order. Never exceeds
    /// `CONTROL_POINT_COUNT`.
    points: Vec<Point>,
    /// True once all 4 points exist and the curve has been evaluated at
    /// least once. Set by the render step, not by event handling.
    curve_ready: bool,
    /// Index of the control point most recently moved by a drag, if the
    /// last motion event moved any. Only ever set while `curve_ready`.
    active_drag: Option<usize>,
    /// Last known pointer position, updated by every motion event.
    pointer: Point,
    /// Drag hit-test radius in pixels. The boundary is exclusive.
    hit_radius: u16,
}

impl EditorState {
    pub fn new(hit_radius: u16) -> Self {
        EditorState {
            points: Vec::with_capacity(CONTROL_POINT_COUNT),
            curve_ready: false,
            active_drag: None,
            pointer: Point::default(),
            hit_radius,
        }
    }

    /// Applies one backend event to the state.
    ///
    /// Unknown or irrelevant events (non-left buttons, releases, resizes)
    /// are ignored; `CloseRequested` is handled by the orchestrator before
    /// it reaches here.
    pub fn handle_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::MouseButtonPress {
                button: MouseButton::Left,
                x,
                y,
            } => self.place_point(x, y),
            BackendEvent::MouseMove { x, y } => self.pointer_moved(x, y),
            other => {
                trace!("EditorState: ignoring event {:?}", other);
            }
        }
    }

    /// Appends a control point at `(x, y)`, unless all 4 already exist.
    fn place_point(&mut self, x: i32, y: i32) {
        if self.points.len() >= CONTROL_POINT_COUNT {
            debug!(
                "EditorState: ignoring extra click at ({}, {}); all {} control points placed.",
                x, y, CONTROL_POINT_COUNT
            );
            return;
        }
        self.points.push(Point::new(x, y));
        debug!(
            "EditorState: placed control point P{} at ({}, {}).",
            self.points.len() - 1,
            x,
            y
        );
    }

    /// Handles pointer motion: drags control points once the curve is ready,
    /// and always records the new pointer position.
    ///
    /// Every control point is hit-tested independently against the motion
    /// position, so more than one may move in the same event when their hit
    /// circles overlap; overlapping markers then travel together.
    fn pointer_moved(&mut self, x: i32, y: i32) {
        if self.curve_ready {
            let mut moved = None;
            let radius = self.hit_radius as f64;
            for (index, point) in self.points.iter_mut().enumerate() {
                if point.distance_to(x, y) < radius {
                    *point = Point::new(x, y);
                    moved = Some(index);
                    debug!(
                        "EditorState: dragged control point P{} to ({}, {}).",
                        index, x, y
                    );
                }
            }
            self.active_drag = moved;
        }
        self.pointer = Point::new(x, y);
    }

    /// Marks the curve as drawn. Called by the render step after the first
    /// evaluation with all 4 points present.
    pub fn mark_curve_drawn(&mut self) {
        debug_assert_eq!(self.points.len(), CONTROL_POINT_COUNT);
        self.curve_ready = true;
    }

    /// The curve defined by the control points, once all 4 exist.
    pub fn bezier(&self) -> Option<CubicBezier> {
        let points: [Point; CONTROL_POINT_COUNT] = self.points.as_slice().try_into().ok()?;
        Some(CubicBezier::new(points))
    }

    pub fn phase(&self) -> EditorPhase {
        if self.curve_ready {
            EditorPhase::Ready
        } else {
            EditorPhase::Placing
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn curve_ready(&self) -> bool {
        self.curve_ready
    }

    pub fn active_drag(&self) -> Option<usize> {
        self.active_drag
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn hit_radius(&self) -> u16 {
        self.hit_radius
    }
}
