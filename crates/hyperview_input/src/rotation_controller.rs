//! Rotation controller for pointer input
//!
//! Controls:
//! - Left drag or one-finger drag: horizontal → XY, vertical → XZ
//! - Wheel: YW
//! - Shift + wheel: XW
//! - Ctrl/Cmd + wheel: ZW

use hyperview_math::{RotationPlane, RotationState};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase};
use winit::keyboard::ModifiersState;

/// Accumulates pointer input and applies it as rotation deltas
pub struct RotationController {
    // Drag state
    dragging: bool,
    active_touch: Option<u64>,
    last_position: Option<(f64, f64)>,

    modifiers: ModifiersState,

    // Degrees accumulated since the last update, indexed like RotationPlane::ALL
    pending: [f32; 6],

    // Configuration
    /// Degrees per pixel of drag
    pub drag_sensitivity: f32,
    /// Degrees per wheel notch
    pub wheel_step: f32,
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            active_touch: None,
            last_position: None,

            modifiers: ModifiersState::empty(),

            pending: [0.0; 6],

            drag_sensitivity: 0.5,
            wheel_step: 2.0,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    /// Process an absolute cursor position
    ///
    /// The first position after a press only anchors the drag.
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        if self.active_touch.is_some() {
            return;
        }
        if self.dragging {
            if let Some((last_x, last_y)) = self.last_position {
                self.accumulate_drag((x - last_x) as f32, (y - last_y) as f32);
            }
        }
        self.last_position = Some((x, y));
    }

    /// The cursor left the surface; any drag in progress ends
    pub fn process_cursor_left(&mut self) {
        self.dragging = false;
        self.last_position = None;
    }

    /// Process a touch event; only the first finger down drives the drag
    pub fn process_touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) {
        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_none() {
                    self.active_touch = Some(id);
                    self.dragging = true;
                    self.last_position = Some((x, y));
                }
            }
            TouchPhase::Moved => {
                if self.active_touch != Some(id) {
                    return;
                }
                if let Some((last_x, last_y)) = self.last_position {
                    self.accumulate_drag((x - last_x) as f32, (y - last_y) as f32);
                }
                self.last_position = Some((x, y));
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch == Some(id) {
                    self.active_touch = None;
                    self.dragging = false;
                    self.last_position = None;
                }
            }
        }
    }

    /// Track the keyboard modifiers that select the wheel plane
    pub fn process_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Process a wheel event
    ///
    /// Only the direction matters: each event adds or removes one
    /// [`RotationController::wheel_step`]. Scrolling toward the user
    /// increases the angle.
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let dy = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        if dy == 0.0 || !dy.is_finite() {
            return;
        }
        let step = if dy < 0.0 { self.wheel_step } else { -self.wheel_step };
        let plane = self.wheel_plane();
        self.pending[plane_index(plane)] += step;
    }

    /// The plane the wheel currently rotates
    pub fn wheel_plane(&self) -> RotationPlane {
        if self.modifiers.shift_key() {
            RotationPlane::XW
        } else if self.modifiers.control_key() || self.modifiers.super_key() {
            RotationPlane::ZW
        } else {
            RotationPlane::YW
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True when input is waiting to be applied
    pub fn has_pending(&self) -> bool {
        self.pending.iter().any(|&d| d != 0.0)
    }

    /// Apply accumulated input to a rotation target
    ///
    /// Returns true if any angle changed.
    pub fn update<R: RotationControl>(&mut self, target: &mut R) -> bool {
        let mut changed = false;
        for (plane, delta) in RotationPlane::ALL.into_iter().zip(self.pending) {
            if delta != 0.0 {
                target.rotate_plane(plane, delta);
                changed = true;
            }
        }
        self.pending = [0.0; 6];
        changed
    }

    fn accumulate_drag(&mut self, dx: f32, dy: f32) {
        self.pending[plane_index(RotationPlane::XY)] += dx * self.drag_sensitivity;
        self.pending[plane_index(RotationPlane::XZ)] += dy * self.drag_sensitivity;
    }

    /// Builder: set degrees per pixel of drag
    pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    /// Builder: set degrees per wheel event
    pub fn with_wheel_step(mut self, step: f32) -> Self {
        self.wheel_step = step;
        self
    }
}

// RotationPlane is declared in application order
fn plane_index(plane: RotationPlane) -> usize {
    plane as usize
}

/// Trait for rotation targets
/// Allows the controller to drive any holder of plane angles
pub trait RotationControl {
    /// Add `degrees` to the angle of `plane`
    fn rotate_plane(&mut self, plane: RotationPlane, degrees: f32);
}

impl RotationControl for RotationState {
    fn rotate_plane(&mut self, plane: RotationPlane, degrees: f32) {
        self.add_angle(plane, degrees);
    }
}
