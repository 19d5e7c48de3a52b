// src/platform/backends/mock.rs

use crate::platform::backends::{BackendEvent, Driver, RenderCommand};
use anyhow::Result;

/// Test-only driver: replays queued events and records executed commands.
pub struct MockDriver {
    events: Vec<BackendEvent>,
    render_commands: Vec<RenderCommand>,
    present_count: usize,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            render_commands: Vec::new(),
            present_count: 0,
        }
    }

    pub fn push_event(&mut self, event: BackendEvent) {
        self.events.push(event);
    }

    /// All commands executed so far, across frames.
    pub fn render_commands(&self) -> &[RenderCommand] {
        &self.render_commands
    }

    pub fn clear_render_commands(&mut self) {
        self.render_commands.clear();
    }

    pub fn present_count(&self) -> usize {
        self.present_count
    }
}

impl Driver for MockDriver {
    fn new() -> Result<Self> {
        Ok(Self::new())
    }

    fn process_events(&mut self) -> Result<Vec<BackendEvent>> {
        Ok(self.events.drain(..).collect())
    }

    fn execute_render_commands(&mut self, commands: Vec<RenderCommand>) -> Result<()> {
        self.render_commands.extend(commands);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.present_count += 1;
        Ok(())
    }

    fn set_title(&mut self, _title: &str) {}

    fn cleanup(&mut self) -> Result<()> {
        Ok(())
    }
}
