//! # hexwin-widgets
//!
//! Widgets for the hexwin window-object tree.
//!
//! Every widget implements [`hexwin::WinObject`] and can be placed in a
//! [`hexwin::BoxLayout`]. Interactive widgets take their callbacks through
//! builder methods and report value changes as they happen.

mod button;
mod checkbox;
mod container;
mod label;
mod slider;
mod space;

pub use button::*;
pub use checkbox::*;
pub use container::*;
pub use label::*;
pub use slider::*;
pub use space::*;
