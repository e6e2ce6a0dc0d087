//! Pointer input for 4D rotation
//!
//! This crate turns mouse drags, touch drags and wheel scrolls into
//! rotation-plane deltas.

mod rotation_controller;

pub use rotation_controller::{RotationController, RotationControl};
