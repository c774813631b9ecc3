//! Drag-resize state machine
//!
//! `Idle` → `Dragging(axis)` on a handle press, back to `Idle` on release.
//! While dragging, pointer movement on the dragged axis becomes a
//! [`ViewportAction::ResizeBy`]; movement on the other axis is ignored.

use crate::ViewportAction;

/// Which side of the viewport a handle resizes.
///
/// - `Horizontal` changes the width: the handle sits on the right edge and
///   reads horizontal pointer movement
/// - `Vertical` changes the height: the handle sits on the bottom edge and
///   reads vertical pointer movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeAxis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ResizeAxis),
}

/// Pointer movement since the previous move event, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerDelta {
    pub x: f64,
    pub y: f64,
}

impl PointerDelta {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn along(self, axis: ResizeAxis) -> f64 {
        match axis {
            ResizeAxis::Horizontal => self.x,
            ResizeAxis::Vertical => self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Axis being dragged, if a session is active.
    pub fn axis(&self) -> Option<ResizeAxis> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(axis) => Some(axis),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.axis().is_some()
    }

    /// Start a session on `axis`. A press while already dragging switches axis.
    pub fn press(&mut self, axis: ResizeAxis) {
        self.state = DragState::Dragging(axis);
    }

    /// Translate pointer movement into a resize.
    ///
    /// Returns `None` while idle or when the movement along the dragged axis
    /// is zero.
    pub fn pointer_moved(&self, delta: PointerDelta) -> Option<ViewportAction> {
        let axis = self.axis()?;
        let screen_delta = delta.along(axis);
        if screen_delta == 0.0 || !screen_delta.is_finite() {
            return None;
        }
        Some(ViewportAction::ResizeBy { axis, screen_delta })
    }

    /// End the session. Returns the axis that was being dragged.
    pub fn release(&mut self) -> Option<ResizeAxis> {
        let axis = self.axis();
        self.state = DragState::Idle;
        axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let drag = DragController::new();
        assert_eq!(drag.state(), DragState::Idle);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_press_records_axis() {
        let mut drag = DragController::new();
        drag.press(ResizeAxis::Vertical);
        assert_eq!(drag.state(), DragState::Dragging(ResizeAxis::Vertical));
        assert_eq!(drag.axis(), Some(ResizeAxis::Vertical));
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let drag = DragController::new();
        assert_eq!(drag.pointer_moved(PointerDelta::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_move_reads_dragged_axis_only() {
        let mut drag = DragController::new();
        drag.press(ResizeAxis::Horizontal);
        assert_eq!(
            drag.pointer_moved(PointerDelta::new(12.0, -40.0)),
            Some(ViewportAction::ResizeBy {
                axis: ResizeAxis::Horizontal,
                screen_delta: 12.0,
            })
        );
        assert_eq!(drag.pointer_moved(PointerDelta::new(0.0, 25.0)), None);
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut drag = DragController::new();
        drag.press(ResizeAxis::Horizontal);
        assert_eq!(drag.release(), Some(ResizeAxis::Horizontal));
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.pointer_moved(PointerDelta::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_release_while_idle() {
        let mut drag = DragController::new();
        assert_eq!(drag.release(), None);
        assert_eq!(drag.state(), DragState::Idle);
    }
}
