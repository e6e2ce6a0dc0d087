//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to viewer actions like ToggleAnimation, Exit, etc.
//! Pointer drags and wheel scrolls are NOT mapped here - they go directly to RotationController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start or stop auto-rotation (Space)
    ToggleAnimation,
    /// Zero every angle and stop auto-rotation (R)
    ResetRotation,
    /// Switch between orthogonal and perspective projection (P)
    ToggleProjection,
    /// Leave the viewer (Escape)
    Exit,
}

/// Maps raw key events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unbound keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Space => Some(InputAction::ToggleAnimation),
            KeyCode::KeyR => Some(InputAction::ResetRotation),
            KeyCode::KeyP => Some(InputAction::ToggleProjection),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }
}
