//! # hexwin-winit
//!
//! Feeds winit window events into a [`hexwin::Game`].
//!
//! [`WinitHost`] keeps the cursor position in logical pixels and turns
//! winit's pointer, keyboard and close events into the matching lifecycle
//! callbacks. The conversion helpers in this crate map winit's button and key
//! types onto hexwin's backend-agnostic ones.

mod host;
mod input;

pub use host::*;
pub use input::*;
