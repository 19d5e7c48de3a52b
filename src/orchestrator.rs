// src/orchestrator.rs

//! Orchestrates the main application flow, coordinating between the editor
//! state machine, the renderer, and the backend driver. This module
//! encapsulates the per-frame event processing logic, making it testable by
//! abstracting the platform behind the `Driver` trait.

use crate::config::ColorScheme;
use crate::editor::EditorState;
use crate::platform::backends::{BackendEvent, Driver};
use crate::renderer::Renderer;
use anyhow::{Context, Result};
use log::{debug, info, trace};

/// Represents the status of the orchestrator after one iteration of its loop.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OrchestratorStatus {
    /// The orchestrator processed events successfully and should continue running.
    Running,
    /// A shutdown signal was received (close request from the driver).
    /// The application should terminate gracefully.
    Shutdown,
}

/// Encapsulates the main application state and the per-frame cycle.
///
/// The driver is held as a trait object so tests can substitute the mock
/// backend; the `EditorState` and `Renderer` are concrete types owned here.
pub struct AppOrchestrator<'a> {
    state: EditorState,
    renderer: Renderer,
    colors: ColorScheme,
    pub driver: &'a mut dyn Driver,
}

impl<'a> AppOrchestrator<'a> {
    /// Creates a new `AppOrchestrator`.
    pub fn new(
        state: EditorState,
        renderer: Renderer,
        colors: ColorScheme,
        driver: &'a mut dyn Driver,
    ) -> Self {
        AppOrchestrator {
            state,
            renderer,
            colors,
            driver,
        }
    }

    /// Runs one frame of the cooperative loop: poll events, step the state
    /// machine, build and execute the frame's draw commands, present.
    ///
    /// A close request short-circuits the cycle; no further frame is
    /// rendered for it.
    pub fn process_event_cycle(&mut self) -> Result<OrchestratorStatus> {
        let events = self
            .driver
            .process_events()
            .context("driver event processing failed")?;

        for event in events {
            debug!("Orchestrator: handling {:?}", event);
            if event == BackendEvent::CloseRequested {
                info!("Orchestrator: close requested. Signaling shutdown.");
                return Ok(OrchestratorStatus::Shutdown);
            }
            self.state.handle_event(event);
        }

        let commands = self.renderer.build_frame(&mut self.state, &self.colors);
        trace!("Orchestrator: executing {} render commands.", commands.len());
        self.driver
            .execute_render_commands(commands)
            .context("driver failed to execute render commands")?;
        self.driver.present().context("driver failed to present")?;

        Ok(OrchestratorStatus::Running)
    }

    /// Read access to the editor state, mainly for tests and diagnostics.
    pub fn state(&self) -> &EditorState {
        &self.state
    }
}

#[cfg(test)]
mod tests;
