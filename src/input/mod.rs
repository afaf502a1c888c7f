//! Input handling and the tool state machine.
//!
//! This module translates host pointer events into action-log mutations. It
//! maintains the current tool selection (tool, color, size) and the gesture
//! state machine (idle vs. drawing).

pub mod state;

// Re-export commonly used types at module level
pub use state::{DrawingState, NullPrompt, TextPrompt, ToolController};
