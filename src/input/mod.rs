//! Input handling module
//!
//! Provides input mapping from raw key events to viewer actions.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
