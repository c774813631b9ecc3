use peek_common::{
    Device, Dimensions, DragController, Orientation, PointerDelta, PreviewConfig, ResizeAxis,
    ViewportAction, ViewportState, WindowSize,
};
use proptest::prelude::*;

const WINDOWS: [WindowSize; 5] = [
    WindowSize::new(1600.0, 900.0),
    WindowSize::new(2560.0, 1440.0),
    WindowSize::new(1024.0, 768.0),
    WindowSize::new(800.0, 1200.0),
    WindowSize::new(375.0, 667.0),
];

/// One step of a user session: a model action or a drag gesture.
#[derive(Debug, Clone)]
enum Step {
    Act(ViewportAction),
    Press(ResizeAxis),
    Move(PointerDelta),
    Release,
}

fn axis_strategy() -> impl Strategy<Value = ResizeAxis> {
    prop_oneof![Just(ResizeAxis::Horizontal), Just(ResizeAxis::Vertical)]
}

fn window_strategy() -> impl Strategy<Value = WindowSize> {
    prop_oneof![
        4 => (100.0..4000.0f64, 100.0..3000.0f64).prop_map(|(w, h)| WindowSize::new(w, h)),
        1 => prop::sample::select(WINDOWS.to_vec()),
        1 => Just(WindowSize::new(0.0, 0.0)),
    ]
}

fn delta_strategy() -> impl Strategy<Value = PointerDelta> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| PointerDelta::new(x, y))
}

fn action_strategy() -> impl Strategy<Value = ViewportAction> {
    let orientation = prop_oneof![Just(Orientation::Portrait), Just(Orientation::Landscape)];
    prop_oneof![
        prop::sample::select(Device::ALL.to_vec()).prop_map(ViewportAction::SelectDevice),
        orientation.prop_map(ViewportAction::SetOrientation),
        Just(ViewportAction::Rotate),
        window_strategy().prop_map(ViewportAction::WindowResized),
        (axis_strategy(), -1000.0..1000.0f64)
            .prop_map(|(axis, screen_delta)| ViewportAction::ResizeBy { axis, screen_delta }),
        Just(ViewportAction::ToggleMenu),
        Just(ViewportAction::CloseMenu),
    ]
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => action_strategy().prop_map(Step::Act),
        1 => axis_strategy().prop_map(Step::Press),
        3 => delta_strategy().prop_map(Step::Move),
        1 => Just(Step::Release),
    ]
}

fn check_invariants(state: &ViewportState) -> Result<(), TestCaseError> {
    let dims = state.dimensions();
    prop_assert!(dims.width >= 300.0, "width {} below floor", dims.width);
    prop_assert!(dims.height >= 300.0, "height {} below floor", dims.height);
    prop_assert!(
        state.scale() > 0.0 && state.scale() <= 1.0,
        "scale {} out of range",
        state.scale()
    );
    Ok(())
}

proptest! {
    #[test]
    fn test_invariants_hold_across_random_sequences(
        window in window_strategy(),
        steps in prop::collection::vec(step_strategy(), 0..200),
    ) {
        let mut state = ViewportState::new(window, PreviewConfig::default());
        let mut drag = DragController::new();
        check_invariants(&state)?;

        for step in steps {
            let action = match step {
                Step::Act(action) => Some(action),
                Step::Press(axis) => {
                    drag.press(axis);
                    None
                }
                Step::Move(delta) => drag.pointer_moved(delta),
                Step::Release => {
                    drag.release();
                    None
                }
            };
            if let Some(action) = action {
                state.apply(action);
            }
            check_invariants(&state)?;
        }
    }

    #[test]
    fn test_pointer_moves_only_resize_while_dragging(
        window in window_strategy(),
        delta in delta_strategy(),
    ) {
        let mut state = ViewportState::new(window, PreviewConfig::default());
        let drag = DragController::new();
        let before = state.clone();

        if let Some(action) = drag.pointer_moved(delta) {
            state.apply(action);
        }
        prop_assert_eq!(state, before);
    }
}

#[test]
fn test_selecting_same_device_twice_is_idempotent() {
    for device in Device::ALL {
        let mut once = ViewportState::new(WINDOWS[0], PreviewConfig::default());
        once.apply(ViewportAction::SelectDevice(device));

        let mut twice = once.clone();
        twice.apply(ViewportAction::SelectDevice(device));

        assert_eq!(once, twice, "{device}");
    }
}

#[test]
fn test_rotating_twice_restores_dimensions() {
    for device in Device::ALL {
        let mut state = ViewportState::new(WINDOWS[0], PreviewConfig::default());
        state.select_device(device);
        let before = state.dimensions();

        state.apply(ViewportAction::Rotate);
        assert_eq!(state.dimensions(), before.swapped());
        state.apply(ViewportAction::Rotate);

        assert_eq!(state.dimensions(), before, "{device}");
        assert_eq!(state.orientation(), Orientation::Portrait);
    }
}

#[test]
fn test_drag_session_end_to_end() {
    let mut state = ViewportState::new(WindowSize::new(1600.0, 900.0), PreviewConfig::default());
    state.select_device(Device::Tablet);
    let mut drag = DragController::new();

    drag.press(ResizeAxis::Vertical);
    let scale = state.scale();
    for _ in 0..4 {
        if let Some(action) = drag.pointer_moved(PointerDelta::new(3.0, -10.0)) {
            state.apply(action);
        }
    }
    assert!(state.dimensions().height < 1024.0);
    assert_eq!(state.dimensions().width, 768.0);
    assert!(state.scale() >= scale);

    drag.release();
    let after_release = state.dimensions();
    assert_eq!(drag.pointer_moved(PointerDelta::new(0.0, 50.0)), None);
    assert_eq!(state.dimensions(), after_release);
}

#[test]
fn test_mobile_landscape_in_small_window() {
    let mut state = ViewportState::new(WindowSize::new(1600.0, 900.0), PreviewConfig::default());
    state.apply(ViewportAction::SelectDevice(Device::Mobile));
    state.apply(ViewportAction::SetOrientation(Orientation::Landscape));
    assert_eq!(state.dimensions(), Dimensions::new(667.0, 375.0));
    assert_eq!(state.scale(), 1.0);
}
