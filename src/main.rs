// src/main.rs

// Declare modules
pub mod color;
pub mod config;
pub mod editor;
pub mod geometry;
pub mod orchestrator;
pub mod platform;
pub mod renderer;

use crate::{
    config::CONFIG,
    editor::EditorState,
    orchestrator::{AppOrchestrator, OrchestratorStatus},
    platform::backends::x11::XDriver,
    platform::backends::Driver,
    renderer::Renderer,
};

use anyhow::Context;
use log::{error, info};

/// Main entry point for the `curvepad` editor.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting curvepad...");

    // Touch the lazy config so load errors surface before any window exists.
    info!(
        "Configuration loaded: {}x{} window, hit radius {}, sample step {}.",
        CONFIG.window.width_px,
        CONFIG.window.height_px,
        CONFIG.editor.hit_radius,
        CONFIG.editor.sample_step
    );

    // --- Instantiate the backend driver ---
    let mut driver = XDriver::new().context("Failed to initialize X11 driver")?;

    // --- Initialize core components ---
    let state = EditorState::new(CONFIG.editor.hit_radius);
    let renderer = Renderer::new(CONFIG.editor.sample_step);

    let mut orchestrator =
        AppOrchestrator::new(state, renderer, CONFIG.colors.clone(), &mut driver);
    info!("AppOrchestrator created. Click four points to draw a curve.");

    // --- Main frame loop ---
    loop {
        match orchestrator.process_event_cycle() {
            Ok(OrchestratorStatus::Running) => {
                std::thread::sleep(std::time::Duration::from_millis(
                    CONFIG.performance.min_draw_latency_ms,
                ));
            }
            Ok(OrchestratorStatus::Shutdown) => {
                info!("Orchestrator requested shutdown. Exiting main loop.");
                break;
            }
            Err(e) => {
                error!(
                    "Error in orchestrator event cycle: {:#}. Root cause: {:?}. Exiting.",
                    e,
                    e.root_cause()
                );
                break;
            }
        }
    }

    // --- Cleanup ---
    drop(orchestrator);
    driver.cleanup().context("Failed to clean up X11 driver")?;
    info!("curvepad exited successfully.");

    Ok(())
}
