//! Application systems
//!
//! Per-frame helpers the viewer drives: auto-rotation and debounced
//! regeneration.

mod animation;
mod regeneration;

pub use animation::{AnimationDriver, MAX_TICK};
pub use regeneration::RegenerationScheduler;
