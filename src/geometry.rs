// src/geometry.rs

//! Pure geometry for the editor: integer points and the cubic Bézier
//! evaluator.
//!
//! Everything in this module is a pure function of its inputs; there is no
//! hidden state and no error condition for finite coordinates. The rest of
//! the crate treats this module as the single authority on curve math.

use serde::{Deserialize, Serialize};

/// A 2D integer coordinate, in window pixel space.
///
/// Control points are stored as `Point`s; curve samples are real-valued and
/// only truncated back to pixels at draw-call assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Euclidean distance from this point to `(x, y)`.
    pub fn distance_to(&self, x: i32, y: i32) -> f64 {
        let dx = (x - self.x) as f64;
        let dy = (y - self.y) as f64;
        dx.hypot(dy)
    }
}

/// A cubic Bézier curve defined by four control points P0..P3.
///
/// The curve runs from P0 to P3; P1 and P2 shape it without (in general)
/// lying on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubicBezier {
    pub control_points: [Point; 4],
}

/// Upper bound on the segment count a single `sample` call will produce,
/// keeping pathological step values from requesting an astronomic `Vec`.
pub const MAX_SEGMENTS: usize = 1_000_000;

impl CubicBezier {
    pub fn new(control_points: [Point; 4]) -> Self {
        CubicBezier { control_points }
    }

    /// Evaluates the curve at parameter `u` in `[0, 1]`:
    ///
    /// `B(u) = (1-u)^3*P0 + 3u(1-u)^2*P1 + 3u^2(1-u)*P2 + u^3*P3`
    ///
    /// `B(0)` is exactly P0 and `B(1)` is exactly P3: at the endpoints all
    /// but one basis coefficient is 0.0 and the remaining one is 1.0.
    pub fn point_at(&self, u: f64) -> (f64, f64) {
        let [p0, p1, p2, p3] = self.control_points;
        let v = 1.0 - u;
        let b0 = v * v * v;
        let b1 = 3.0 * u * v * v;
        let b2 = 3.0 * u * u * v;
        let b3 = u * u * u;
        (
            b0 * p0.x as f64 + b1 * p1.x as f64 + b2 * p2.x as f64 + b3 * p3.x as f64,
            b0 * p0.y as f64 + b1 * p1.y as f64 + b2 * p2.y as f64 + b3 * p3.y as f64,
        )
    }

    /// Samples the curve at a fixed parameter step, producing a polyline
    /// dense enough for direct pixel plotting (the default step of 0.0001
    /// yields 10,001 samples).
    ///
    /// The sample parameters are `i / n` for `i in 0..=n` with
    /// `n = round(1/step)`, so the first and last samples land exactly on
    /// P0 and P3 instead of accumulating floating-point step error.
    ///
    /// `n` is clamped to `MAX_SEGMENTS`; a zero, negative, or non-finite
    /// step degenerates to a single segment rather than an unbounded
    /// allocation.
    pub fn sample(&self, step: f64) -> Vec<(f64, f64)> {
        let n = if step.is_finite() && step > 0.0 {
            (1.0 / step).round().clamp(1.0, MAX_SEGMENTS as f64) as usize
        } else {
            1
        };
        let mut samples = Vec::with_capacity(n + 1);
        for i in 0..=n {
            samples.push(self.point_at(i as f64 / n as f64));
        }
        samples
    }
}

#[cfg(test)]
mod tests;
