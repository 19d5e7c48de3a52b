// src/orchestrator/tests.rs

use super::*;
use crate::config::ColorScheme;
use crate::platform::backends::mock::MockDriver;
use crate::platform::backends::{MouseButton, RenderCommand};
use crate::renderer::Renderer;
use test_log::test;

fn orchestrator(driver: &mut MockDriver) -> AppOrchestrator<'_> {
    AppOrchestrator::new(
        EditorState::new(8),
        Renderer::new(0.01),
        ColorScheme::default(),
        driver,
    )
}

fn left_click(x: i32, y: i32) -> BackendEvent {
    BackendEvent::MouseButtonPress {
        button: MouseButton::Left,
        x,
        y,
    }
}

#[test]
fn it_should_shutdown_on_close_request() {
    let mut driver = MockDriver::new();
    driver.push_event(BackendEvent::CloseRequested);

    let mut orchestrator = orchestrator(&mut driver);
    let status = orchestrator.process_event_cycle().unwrap();
    assert_eq!(status, OrchestratorStatus::Shutdown);

    // No frame is rendered for the cycle that shuts down.
    assert!(driver.render_commands().is_empty());
    assert_eq!(driver.present_count(), 0);
}

#[test]
fn close_request_wins_at_any_phase() {
    let mut driver = MockDriver::new();
    driver.push_event(left_click(100, 100));
    driver.push_event(BackendEvent::CloseRequested);

    let mut orchestrator = orchestrator(&mut driver);
    let status = orchestrator.process_event_cycle().unwrap();
    assert_eq!(status, OrchestratorStatus::Shutdown);
    // The click preceding the close request was still applied.
    assert_eq!(orchestrator.state().points().len(), 1);
}

#[test]
fn idle_cycle_renders_and_presents() {
    let mut driver = MockDriver::new();
    let mut orchestrator = orchestrator(&mut driver);

    let status = orchestrator.process_event_cycle().unwrap();
    assert_eq!(status, OrchestratorStatus::Running);
    drop(orchestrator);

    assert_eq!(
        driver.render_commands(),
        &[RenderCommand::Clear {
            color: ColorScheme::default().background
        }]
    );
    assert_eq!(driver.present_count(), 1);
}

#[test]
fn four_clicks_produce_a_curve_frame() {
    let mut driver = MockDriver::new();
    for (x, y) in [(100, 100), (150, 50), (250, 50), (300, 100)] {
        driver.push_event(left_click(x, y));
    }

    let mut orchestrator = orchestrator(&mut driver);
    let status = orchestrator.process_event_cycle().unwrap();
    assert_eq!(status, OrchestratorStatus::Running);
    assert!(orchestrator.state().curve_ready());
    drop(orchestrator);

    let curve_points = driver
        .render_commands()
        .iter()
        .filter(|c| matches!(c, RenderCommand::DrawPoint { .. }))
        .count();
    assert_eq!(curve_points, 101);
}

#[test]
fn motion_in_the_same_cycle_as_placement_does_not_drag() {
    // The curve only becomes drag-ready once a frame has rendered it, so a
    // motion event polled in the same cycle as the fourth click moves nothing.
    let mut driver = MockDriver::new();
    for (x, y) in [(100, 100), (150, 50), (250, 50), (300, 100)] {
        driver.push_event(left_click(x, y));
    }
    driver.push_event(BackendEvent::MouseMove { x: 103, y: 101 });

    let mut orchestrator = orchestrator(&mut driver);
    orchestrator.process_event_cycle().unwrap();
    assert_eq!(orchestrator.state().points()[0].x, 100);
    assert_eq!(orchestrator.state().pointer().x, 103);
}

#[test]
fn drag_in_a_later_cycle_updates_the_rendered_curve() {
    let mut driver = MockDriver::new();
    driver.push_event(BackendEvent::MouseMove { x: 103, y: 101 });

    // State as it stands after a first frame has drawn the curve.
    let mut state = EditorState::new(8);
    for (x, y) in [(100, 100), (150, 50), (250, 50), (300, 100)] {
        state.handle_event(left_click(x, y));
    }
    state.mark_curve_drawn();

    let mut orchestrator = AppOrchestrator::new(
        state,
        Renderer::new(0.01),
        ColorScheme::default(),
        &mut driver,
    );
    orchestrator.process_event_cycle().unwrap();
    assert_eq!(orchestrator.state().points()[0].x, 103);
    drop(orchestrator);

    assert!(driver
        .render_commands()
        .iter()
        .any(|c| matches!(c, RenderCommand::DrawPoint { x: 103, y: 101, .. })));
}
