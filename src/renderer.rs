// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer`'s primary responsibility is to translate the `EditorState`
//! into a series of abstract drawing commands that can be executed by a
//! `Driver`. It is backend-agnostic: it contains no platform-specific drawing
//! code and can be exercised in tests by inspecting the command list.

use crate::config::ColorScheme;
use crate::editor::EditorState;
use crate::geometry::Point;
use crate::platform::backends::RenderCommand;
use log::trace;

/// Translates `EditorState` into a per-frame list of `RenderCommand`s.
///
/// Command order matters for visual correctness, since later draws cover
/// earlier ones: background clear first, then the sampled curve, then the
/// guide lines and control point markers interleaved so each guide line sits
/// under the marker circles at both of its endpoints.
///
/// The `Renderer` is stateless beyond the scope of a single `build_frame`
/// call; the sampled curve is recomputed every frame a full set of control
/// points exists.
pub struct Renderer {
    /// Parameter step for curve sampling.
    sample_step: f64,
}

impl Renderer {
    pub fn new(sample_step: f64) -> Self {
        Renderer { sample_step }
    }

    /// Assembles the draw commands for one frame.
    ///
    /// Also the point where `curve_ready` flips: once all 4 control points
    /// exist and the curve has been sampled for drawing, the state is marked
    /// so that subsequent pointer motion drags points.
    pub fn build_frame(&self, state: &mut EditorState, scheme: &ColorScheme) -> Vec<RenderCommand> {
        let mut commands = vec![RenderCommand::Clear {
            color: scheme.background,
        }];

        if let Some(bezier) = state.bezier() {
            let samples = bezier.sample(self.sample_step);
            trace!("Renderer: plotting {} curve samples.", samples.len());
            commands.reserve(samples.len() + 8);
            for (x, y) in samples {
                // Integer cast truncates toward zero.
                commands.push(RenderCommand::DrawPoint {
                    x: x as i32,
                    y: y as i32,
                    color: scheme.curve,
                });
            }
            state.mark_curve_drawn();
        }

        self.push_markers_and_guides(&mut commands, state.points(), state.hit_radius(), scheme);
        commands
    }

    /// Emits, for each placed control point in order, its marker circle and
    /// then the guide line to the next point (if any), so the line is drawn
    /// before the next point's circle.
    fn push_markers_and_guides(
        &self,
        commands: &mut Vec<RenderCommand>,
        points: &[Point],
        marker_radius: u16,
        scheme: &ColorScheme,
    ) {
        for (index, point) in points.iter().enumerate() {
            commands.push(RenderCommand::DrawCircle {
                cx: point.x,
                cy: point.y,
                radius: marker_radius,
                color: scheme.marker,
            });
            if let Some(next) = points.get(index + 1) {
                commands.push(RenderCommand::DrawLine {
                    x1: point.x,
                    y1: point.y,
                    x2: next.x,
                    y2: next.y,
                    color: scheme.guide_line,
                });
            }
        }
    }
}
