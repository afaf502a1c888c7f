//! Replayable whiteboard drawing core.
//!
//! Pointer gestures are recorded as discrete drawing actions in an
//! append-only log, and the raster surface is always produced by replaying
//! that log from a cleared background, so identical logs yield identical
//! pixels. Persistence serializes the committed log to a portable JSON
//! array and restores it wholesale.
//!
//! | Module | Role |
//! |--------|------|
//! | [`draw`] | Action model, action log, colors/themes, Cairo replay renderer |
//! | [`input`] | Pointer-gesture state machine and tool session state |
//! | [`session`] | JSON codec and board-file storage |
//! | [`presence`] | Simulated collaborator roster (decorative jitter) |
//! | [`chat`] | Chat message list with the scripted auto-reply |
//! | [`config`] | TOML configuration (drawing defaults, palette, limits) |

pub mod chat;
pub mod config;
pub mod draw;
pub mod input;
pub mod presence;
pub mod session;
pub mod util;

pub use config::Config;
