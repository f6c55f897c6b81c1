//! # hexwin
//!
//! Retained-mode GUI core for a single-threaded game host.
//!
//! Every node of the widget tree implements [`WinObject`]. Box layouts lay
//! their children out along one axis with an integer solver, windows host a
//! root layout, and the [`WindowManager`] routes host pointer input into the
//! trees with a capture state machine. Concrete widgets live in the
//! `hexwin-widgets` crate.
//!
//! ## Core Types
//!
//! - [`WinObject`] - Capability trait shared by windows, layouts and widgets
//! - [`BoxLayout`] - Horizontal or vertical box with per-child [`LayoutFlags`]
//! - [`Window`] - Top-level container with a background and frame
//! - [`WindowManager`] - Window registry, pointer routing and [`Capture`]
//!
//! ## Host Integration
//!
//! - [`Game`] - Callbacks the host engine invokes
//! - [`GuiApp`] - [`Game`] implementation driving a [`WindowManager`]
//! - [`Painter`] - Drawing surface, with [`DrawList`] as a recording backend
//! - [`Metrics`] - Shared text measurement

mod color;
mod debug;
mod draw;
mod events;
mod host;
mod input;
mod layout;
mod manager;
mod measure;
mod object;
mod primitives;
mod window;

#[cfg(test)]
mod testing;

// Core types
pub use color::*;
pub use layout::*;
pub use object::*;
pub use primitives::*;
pub use window::*;

// Input & Events
pub use events::*;
pub use input::*;
pub use manager::*;

// Rendering & Host
pub use debug::DebugOptions;
pub use draw::*;
pub use host::*;
pub use measure::*;

pub use hexwin_macros::WithBuilders;
