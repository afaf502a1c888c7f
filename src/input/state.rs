//! Pointer-gesture state machine and tool session state.

use crate::config::Config;
use crate::draw::{ActionLog, DrawingAction, Point, Tool};
use chrono::Utc;
use log::debug;

/// Synchronous text entry for the text tool.
///
/// The prompt blocks the initiating gesture until the user confirms or
/// cancels; `None` or an empty string means nothing is appended. Hosts wire
/// this to a modal dialog; tests inject stubs.
pub trait TextPrompt {
    /// Asks the user for text. `None` means the prompt was cancelled.
    fn request_text(&mut self) -> Option<String>;
}

/// A prompt that always cancels. For hosts without text entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPrompt;

impl TextPrompt for NullPrompt {
    fn request_text(&mut self) -> Option<String> {
        None
    }
}

/// Current gesture state.
///
/// The board assumes a single pointer stream, so one slot is enough; a
/// multi-touch extension would need one `Drawing` state per pointer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingState {
    /// Not drawing - waiting for the next pointer-down
    #[default]
    Idle,
    /// A gesture is in flight and the log holds its in-progress action
    Drawing,
}

/// Mints action identifiers from the wall clock.
///
/// IDs are millisecond timestamps; successive mints within the same
/// millisecond bump past the previous value so IDs stay unique and strictly
/// increasing.
#[derive(Debug, Default)]
struct IdMinter {
    last: i64,
}

impl IdMinter {
    fn mint(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}

/// Translates pointer events into action-log mutations.
///
/// Owns the [`ActionLog`] plus the externally-selected tool/color/size, and
/// tracks whether a gesture is in flight. Hosts feed it pointer events and
/// repaint whenever `take_needs_redraw` reports a change.
pub struct ToolController {
    /// The action log this controller mutates
    pub log: ActionLog,
    /// Currently selected tool
    current_tool: Tool,
    /// Currently selected stroke color (hex string)
    current_color: String,
    /// Currently selected stroke width
    current_size: f64,
    /// Gesture state machine
    state: DrawingState,
    /// Set whenever a mutation requires a repaint
    needs_redraw: bool,
    minter: IdMinter,
    prompt: Box<dyn TextPrompt>,
    /// Size re-applied when selecting pen/eraser
    freehand_size: f64,
    /// Size re-applied when selecting the highlighter
    highlighter_size: f64,
}

impl ToolController {
    /// Creates a controller with the config's drawing defaults.
    pub fn new(config: &Config, prompt: Box<dyn TextPrompt>) -> Self {
        Self {
            log: ActionLog::new(),
            current_tool: Tool::Pen,
            current_color: config.drawing.default_color.clone(),
            current_size: config.drawing.default_size,
            state: DrawingState::Idle,
            needs_redraw: true,
            minter: IdMinter::default(),
            prompt,
            freehand_size: config.drawing.freehand_size,
            highlighter_size: config.drawing.highlighter_size,
        }
    }

    /// The currently selected tool.
    pub fn current_tool(&self) -> Tool {
        self.current_tool
    }

    /// The currently selected color.
    pub fn current_color(&self) -> &str {
        &self.current_color
    }

    /// The currently selected stroke width.
    pub fn current_size(&self) -> f64 {
        self.current_size
    }

    /// Whether a gesture is currently in flight.
    pub fn is_drawing(&self) -> bool {
        self.state == DrawingState::Drawing
    }

    /// Selects a tool, re-applying the fixed size defaults: highlighter
    /// always starts at its wide default, pen and eraser at the narrow one.
    pub fn set_tool(&mut self, tool: Tool) {
        self.current_tool = tool;
        match tool {
            Tool::Highlighter => self.current_size = self.highlighter_size,
            Tool::Pen | Tool::Eraser => self.current_size = self.freehand_size,
            _ => {}
        }
        debug!("tool -> {tool:?}, size {}", self.current_size);
    }

    /// Selects a stroke color for subsequent actions.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.current_color = color.into();
    }

    /// Selects a stroke width for subsequent actions.
    pub fn set_size(&mut self, size: f64) {
        self.current_size = size;
    }

    /// Pointer pressed at `point`.
    ///
    /// Cursor does nothing. Text prompts synchronously and commits straight
    /// to the log when the prompt yields non-empty text. Every other tool
    /// begins an in-progress action.
    pub fn on_pointer_down(&mut self, point: Point) {
        if self.state != DrawingState::Idle {
            return;
        }

        match self.current_tool {
            Tool::Cursor => {}
            Tool::Text => {
                let Some(text) = self.prompt.request_text().filter(|t| !t.is_empty()) else {
                    debug!("text prompt cancelled or empty, nothing appended");
                    return;
                };
                let action = DrawingAction::text_at(
                    self.minter.mint(),
                    self.current_color.clone(),
                    self.current_size,
                    point,
                    text,
                );
                self.log.push_committed(action);
                self.needs_redraw = true;
            }
            tool => {
                let action = DrawingAction::started_at(
                    self.minter.mint(),
                    tool,
                    self.current_color.clone(),
                    self.current_size,
                    point,
                );
                self.log.begin(action);
                self.state = DrawingState::Drawing;
                self.needs_redraw = true;
            }
        }
    }

    /// Pointer moved to `point`.
    ///
    /// Extends the in-progress action per its tool's rule; a no-op outside a
    /// gesture. Presence jitter is the host's concern and never runs here.
    pub fn on_pointer_move(&mut self, point: Point) {
        if self.state != DrawingState::Drawing {
            return;
        }
        self.log.extend(point);
        self.needs_redraw = true;
    }

    /// Pointer released: commit the gesture.
    pub fn on_pointer_up(&mut self) {
        self.finish_gesture();
    }

    /// Pointer left the surface: treated exactly like a release.
    pub fn on_pointer_leave(&mut self) {
        self.finish_gesture();
    }

    fn finish_gesture(&mut self) {
        if self.state != DrawingState::Drawing {
            return;
        }
        self.log.commit();
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    /// Returns and clears the repaint flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
