use super::*;
use crate::nodes::input::types::PointerEvent;

fn detector() -> PressGestureDetector {
    PressGestureDetector::new(PressState::new())
}

#[test]
fn down_stores_resolved_offset() {
    let mut detector = detector();
    let outcome = detector.on_event(&PointerEvent::down(Point::new(10.0, 5.0)), |_| Some(3));
    assert!(matches!(outcome, PressOutcome::Pressed(Some(3))));
    assert!(detector.is_pressed());
    assert_eq!(detector.state().pressed_offset(), Some(3));
}

#[test]
fn down_passes_position_to_resolver() {
    let mut detector = detector();
    let mut seen = None;
    let _ = detector.on_event(&PointerEvent::down(Point::new(12.0, 4.0)), |p| {
        seen = Some(p);
        None
    });
    assert_eq!(seen, Some(Point::new(12.0, 4.0)));
}

#[test]
fn release_hands_back_offset_then_resets() {
    let mut detector = detector();
    let state = detector.state().clone();
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO), |_| Some(7));

    let outcome = detector.on_event(&PointerEvent::up(Point::ZERO), |_| None);
    let PressOutcome::Released(guard) = outcome else {
        panic!("expected a release, got {outcome:?}");
    };
    // Still inside the press window while the guard is alive.
    assert_eq!(guard.offset(), Some(7));
    assert_eq!(state.pressed_offset(), Some(7));
    drop(guard);

    assert_eq!(state.pressed_offset(), None);
    assert!(!detector.is_pressed());
}

#[test]
fn guard_reports_pointer_and_hold_time() {
    let mut detector = detector();
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO).with_id(3), |_| Some(1));
    std::thread::sleep(Duration::from_millis(5));

    let outcome = detector.on_event(&PointerEvent::up(Point::ZERO).with_id(3), |_| None);
    let PressOutcome::Released(guard) = outcome else {
        panic!("expected a release, got {outcome:?}");
    };
    assert_eq!(guard.pointer(), 3);
    assert!(guard.held_for() >= Duration::from_millis(5));
}

#[test]
fn cancel_event_cancels_press() {
    let mut detector = detector();
    let state = detector.state().clone();
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO), |_| Some(2));

    let outcome = detector.on_event(&PointerEvent::cancel(Point::ZERO), |_| None);
    assert!(matches!(outcome, PressOutcome::Cancelled(_)));
    drop(outcome);
    assert_eq!(state.pressed_offset(), None);
}

#[test]
fn small_move_keeps_press() {
    let mut detector = detector();
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO), |_| Some(1));
    let outcome = detector.on_event(&PointerEvent::moved(Point::new(3.0, 3.0)), |_| None);
    assert!(matches!(outcome, PressOutcome::Ignored));
    assert!(detector.is_pressed());
}

#[test]
fn move_past_threshold_cancels() {
    let mut detector = detector();
    let state = detector.state().clone();
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO), |_| Some(1));
    let outcome = detector.on_event(
        &PointerEvent::moved(Point::new(DRAG_THRESHOLD + 1.0, 0.0)),
        |_| None,
    );
    assert!(matches!(outcome, PressOutcome::Cancelled(_)));
    drop(outcome);
    assert_eq!(state.pressed_offset(), None);

    // A late up after the cancellation is not a click.
    let late = detector.on_event(&PointerEvent::up(Point::ZERO), |_| None);
    assert!(matches!(late, PressOutcome::Ignored));
}

#[test]
fn consumed_up_is_a_cancellation() {
    let mut detector = detector();
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO), |_| Some(1));
    let up = PointerEvent::up(Point::ZERO);
    up.consume();
    let outcome = detector.on_event(&up, |_| None);
    assert!(matches!(outcome, PressOutcome::Cancelled(_)));
}

#[test]
fn consumed_down_is_ignored() {
    let mut detector = detector();
    let down = PointerEvent::down(Point::ZERO);
    down.consume();
    let outcome = detector.on_event(&down, |_| Some(1));
    assert!(matches!(outcome, PressOutcome::Ignored));
    assert!(!detector.is_pressed());
}

#[test]
fn second_pointer_is_ignored_while_pressed() {
    let mut detector = detector();
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO).with_id(1), |_| Some(1));
    let second = detector.on_event(&PointerEvent::down(Point::ZERO).with_id(2), |_| Some(9));
    assert!(matches!(second, PressOutcome::Ignored));
    let stray_up = detector.on_event(&PointerEvent::up(Point::ZERO).with_id(2), |_| None);
    assert!(matches!(stray_up, PressOutcome::Ignored));
    assert_eq!(detector.state().pressed_offset(), Some(1));
}

#[test]
fn unresolved_press_still_opens_a_window() {
    let mut detector = detector();
    let outcome = detector.on_event(&PointerEvent::down(Point::ZERO), |_| None);
    assert!(matches!(outcome, PressOutcome::Pressed(None)));
    assert!(detector.is_pressed());
    let released = detector.on_event(&PointerEvent::up(Point::ZERO), |_| None);
    match released {
        PressOutcome::Released(guard) => assert_eq!(guard.offset(), None),
        other => panic!("expected a release, got {other:?}"),
    }
}

#[test]
fn dropping_detector_mid_press_resets_state() {
    let mut detector = detector();
    let state = detector.state().clone();
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO), |_| Some(4));
    assert_eq!(state.pressed_offset(), Some(4));
    drop(detector);
    assert_eq!(state.pressed_offset(), None);
}

#[test]
fn reset_abandons_press() {
    let mut detector = detector();
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO), |_| Some(4));
    detector.reset();
    assert!(!detector.is_pressed());
    assert_eq!(detector.state().pressed_offset(), None);
}

#[test]
fn panic_while_holding_guard_still_resets() {
    let state = PressState::new();
    let mut detector = PressGestureDetector::new(state.clone());
    let _ = detector.on_event(&PointerEvent::down(Point::ZERO), |_| Some(5));
    let outcome = detector.on_event(&PointerEvent::up(Point::ZERO), |_| None);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _outcome = outcome;
        panic!("click handler failed");
    }));
    assert!(result.is_err());
    assert_eq!(state.pressed_offset(), None);
}
