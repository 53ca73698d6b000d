//! Unit tests for the pointer bridge handlers.

use crate::helpers::{SURFACE_LEFT, SURFACE_TOP, bridge_fixture, raw_at};
use canvas_bridge::input::{DragState, PointerError};
use canvas_bridge::{PointerEvent, RawPointerEvent, SurfacePoint, SurfaceRect};

#[test]
fn test_press_starts_drag_at_surface_point() {
    let (mut bridge, controller) = bridge_fixture();

    bridge.on_press(&raw_at(10.0, 10.0)).unwrap();

    let p = SurfacePoint::new(10.0, 10.0);
    assert_eq!(
        *bridge.drag_state(),
        DragState::Dragging {
            start: p,
            current: p
        }
    );
    assert_eq!(controller.events(), vec![PointerEvent::pressed(p)]);
}

#[test]
fn test_move_without_press_is_ignored() {
    let (mut bridge, controller) = bridge_fixture();

    bridge.on_move(&raw_at(5.0, 5.0)).unwrap();

    assert!(controller.events().is_empty());
    assert!(!bridge.drag_state().is_active());
    // Guard runs before any surface query
    assert_eq!(bridge.surface().rect_queries(), 0);
}

#[test]
fn test_release_without_press_is_ignored() {
    let (mut bridge, controller) = bridge_fixture();

    bridge.on_release(&raw_at(5.0, 5.0)).unwrap();

    assert!(controller.events().is_empty());
    assert_eq!(*bridge.drag_state(), DragState::Idle);
    assert_eq!(bridge.surface().rect_queries(), 0);
}

#[test]
fn test_move_updates_current_only() {
    let (mut bridge, _controller) = bridge_fixture();

    bridge.on_press(&raw_at(10.0, 10.0)).unwrap();
    bridge.on_move(&raw_at(15.0, 12.0)).unwrap();

    let state = bridge.drag_state();
    assert_eq!(state.start_position(), Some(SurfacePoint::new(10.0, 10.0)));
    assert_eq!(state.current_position(), Some(SurfacePoint::new(15.0, 12.0)));
}

#[test]
fn test_press_with_missing_coordinate_leaves_state_idle() {
    let (mut bridge, controller) = bridge_fixture();
    let raw = RawPointerEvent {
        client_x: None,
        client_y: Some(20.0),
    };

    let err = bridge.on_press(&raw).unwrap_err();

    assert_eq!(err, PointerError::MissingCoordinate("x"));
    assert!(!bridge.drag_state().is_active());
    assert!(controller.events().is_empty());
}

#[test]
fn test_move_with_missing_coordinate_keeps_drag() {
    let (mut bridge, controller) = bridge_fixture();
    bridge.on_press(&raw_at(10.0, 10.0)).unwrap();

    let raw = RawPointerEvent {
        client_x: Some(150.0),
        client_y: None,
    };
    let err = bridge.on_move(&raw).unwrap_err();

    assert_eq!(err, PointerError::MissingCoordinate("y"));
    assert_eq!(
        bridge.drag_state().current_position(),
        Some(SurfacePoint::new(10.0, 10.0))
    );
    assert_eq!(controller.events().len(), 1);
}

#[test]
fn test_release_resets_even_when_point_fails() {
    let (mut bridge, controller) = bridge_fixture();
    bridge.on_press(&raw_at(10.0, 10.0)).unwrap();

    let result = bridge.on_release(&RawPointerEvent::default());

    assert_eq!(result, Err(PointerError::MissingCoordinate("x")));
    assert_eq!(*bridge.drag_state(), DragState::Idle);
    assert_eq!(
        controller.events(),
        vec![PointerEvent::pressed(SurfacePoint::new(10.0, 10.0))]
    );
}

#[test]
fn test_rect_is_requeried_per_event() {
    let (mut bridge, controller) = bridge_fixture();

    bridge.on_press(&raw_at(10.0, 10.0)).unwrap();
    // Surface scrolls by 30px between events
    bridge.surface().set_rect(SurfaceRect::new(
        SURFACE_LEFT - 30.0,
        SURFACE_TOP,
        800.0,
        600.0,
    ));
    bridge.on_move(&raw_at(10.0, 10.0)).unwrap();

    assert_eq!(bridge.surface().rect_queries(), 2);
    assert_eq!(
        controller.events()[1],
        PointerEvent::dragged(SurfacePoint::new(40.0, 10.0))
    );
}

#[test]
fn test_click_and_double_click_are_stateless() {
    let (mut bridge, controller) = bridge_fixture();

    bridge.on_click(&raw_at(3.0, 4.0)).unwrap();
    bridge.on_double_click(&raw_at(3.0, 4.0)).unwrap();

    let p = SurfacePoint::new(3.0, 4.0);
    assert_eq!(
        controller.events(),
        vec![PointerEvent::clicked(p), PointerEvent::double_clicked(p)]
    );
    assert!(!bridge.drag_state().is_active());
}

#[test]
fn test_click_during_drag_keeps_drag() {
    let (mut bridge, _controller) = bridge_fixture();
    bridge.on_press(&raw_at(1.0, 1.0)).unwrap();

    bridge.on_click(&raw_at(2.0, 2.0)).unwrap();

    assert!(bridge.drag_state().is_active());
}

#[test]
fn test_press_during_drag_restarts() {
    let (mut bridge, _controller) = bridge_fixture();
    bridge.on_press(&raw_at(1.0, 1.0)).unwrap();
    bridge.on_move(&raw_at(5.0, 5.0)).unwrap();

    bridge.on_press(&raw_at(7.0, 8.0)).unwrap();

    let p = SurfacePoint::new(7.0, 8.0);
    assert_eq!(bridge.drag_state().start_position(), Some(p));
    assert_eq!(bridge.drag_state().current_position(), Some(p));
}

#[test]
fn test_pointer_leave_ends_drag_silently() {
    let (mut bridge, controller) = bridge_fixture();
    bridge.on_press(&raw_at(1.0, 1.0)).unwrap();

    bridge.on_pointer_leave();
    bridge.on_move(&raw_at(2.0, 2.0)).unwrap();
    bridge.on_release(&raw_at(2.0, 2.0)).unwrap();

    assert_eq!(controller.events().len(), 1);
    assert_eq!(*bridge.drag_state(), DragState::Idle);
}

#[test]
fn test_client_size_passthrough() {
    let (bridge, _controller) = bridge_fixture();
    assert_eq!(bridge.client_width(), 800.0);
    assert_eq!(bridge.client_height(), 600.0);

    bridge
        .surface()
        .set_rect(SurfaceRect::new(0.0, 0.0, 1024.0, 768.0));
    assert_eq!(bridge.client_width(), 1024.0);
    assert_eq!(bridge.client_height(), 768.0);
}
