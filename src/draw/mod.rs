//! Drawing primitives, the action log, and Cairo-based rendering.
//!
//! This module defines the core drawing types of the board:
//! - [`Point`], [`Tool`], [`DrawingAction`]: the replayable action record
//! - [`ActionLog`]: committed actions plus the one in-progress slot
//! - [`Color`], [`Theme`]: render-time color handling
//! - [`BoardSurface`] and the rendering functions that replay a log onto it

pub mod action;
pub mod color;
pub mod log;
pub mod render;
pub mod surface;
pub mod theme;

// Re-export commonly used types at module level
pub use action::{DrawingAction, Point, Tool};
pub use color::Color;
pub use log::ActionLog;
pub use render::{render_action, render_actions, render_background};
pub use surface::BoardSurface;
pub use theme::Theme;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, WHITE};
