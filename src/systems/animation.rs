//! Auto-rotation driver
//!
//! The host calls [`AnimationDriver::tick`] with the time since its last
//! frame at whatever cadence it runs. Steps are tuned per reference frame,
//! so a host at 30 fps gets double steps and the angular speed stays the
//! same.

use hyperview_math::{RotationPlane, RotationState};
use crate::config::AnimationConfig;

/// Largest time step applied in one tick, in seconds
pub const MAX_TICK: f32 = 0.25;

/// Advances rotation angles while enabled
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDriver {
    enabled: bool,
    /// Degrees per reference frame, per plane
    steps: [(RotationPlane, f32); 3],
    frame_rate: f32,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            enabled: config.enabled,
            steps: [
                (RotationPlane::XY, config.xy_step),
                (RotationPlane::XW, config.xw_step),
                (RotationPlane::ZW, config.zw_step),
            ],
            frame_rate: config.frame_rate,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the running state and return the new one
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Advance `rotation` by `dt` seconds
    ///
    /// Returns true if any angle changed. Non-positive or non-finite `dt`
    /// is ignored and long stalls are capped at [`MAX_TICK`].
    pub fn tick(&self, rotation: &mut RotationState, dt: f32) -> bool {
        if !self.enabled || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        let frames = dt.min(MAX_TICK) * self.frame_rate;
        self.advance(rotation, frames)
    }

    /// Advance by exactly one reference frame
    pub fn step(&self, rotation: &mut RotationState) -> bool {
        self.enabled && self.advance(rotation, 1.0)
    }

    /// Seconds per reference frame
    pub fn frame_time(&self) -> f32 {
        if self.frame_rate > 0.0 { 1.0 / self.frame_rate } else { 0.0 }
    }

    fn advance(&self, rotation: &mut RotationState, frames: f32) -> bool {
        let mut changed = false;
        for (plane, step) in self.steps {
            let delta = step * frames;
            if delta != 0.0 && delta.is_finite() {
                rotation.add_angle(plane, delta);
                changed = true;
            }
        }
        changed
    }
}
