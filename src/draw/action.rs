//! Drawing action model: points, tools, and the action record.

use serde::{Deserialize, Serialize};

/// A position on the board surface, in absolute surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The drawing tool an action was created with.
///
/// The tool is fixed at creation time and decides both how pointer motion
/// extends the action (accumulate a path vs. track a two-point span) and how
/// the renderer draws it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Selection/no-op tool; never produces an action
    Cursor,
    /// Freehand opaque stroke
    Pen,
    /// Freehand translucent stroke (alpha 0.3)
    Highlighter,
    /// Freehand stroke in the background color
    Eraser,
    /// Axis-aligned box between two drag corners
    Rectangle,
    /// True circle: center at the drag start, radius to the drag end
    Circle,
    /// Line with a V-shaped head at the drag end
    Arrow,
    /// Single-click text placed at a baseline point
    Text,
}

impl Tool {
    /// Whether pointer motion accumulates a path for this tool.
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pen | Self::Highlighter | Self::Eraser)
    }

    /// Whether this tool tracks a fixed `[start, current]` two-point span.
    pub fn is_two_point(self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle | Self::Arrow)
    }

    /// Minimum number of points a committed action of this tool must carry.
    pub fn required_points(self) -> usize {
        if self.is_two_point() { 2 } else { 1 }
    }
}

/// One atomic drawing operation, immutable once committed.
///
/// `points` semantics depend on `tool`: freehand tools carry the full sampled
/// polyline, two-point tools carry `[start, end]`, and text carries a single
/// baseline point. `color` is kept verbatim as a `#RRGGBB` string so a board
/// file round-trips byte-for-byte through the codec.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawingAction {
    /// Creation-time millisecond timestamp, rendered as a decimal string
    pub id: String,
    /// Tool the action was created with
    pub tool: Tool,
    /// Stroke/fill color as written by the palette (e.g. `"#EF4444"`)
    pub color: String,
    /// Stroke width in pixels; text uses `size * 3` as the font size
    pub size: f64,
    /// Ordered point list; meaning depends on `tool`
    pub points: Vec<Point>,
    /// Text content, present only for [`Tool::Text`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl DrawingAction {
    /// Creates an action with a single starting point and no text.
    pub fn started_at(id: String, tool: Tool, color: String, size: f64, origin: Point) -> Self {
        Self {
            id,
            tool,
            color,
            size,
            points: vec![origin],
            text: None,
        }
    }

    /// Creates a committed text action at a baseline point.
    pub fn text_at(id: String, color: String, size: f64, anchor: Point, text: String) -> Self {
        Self {
            id,
            tool: Tool::Text,
            color,
            size,
            points: vec![anchor],
            text: Some(text),
        }
    }

    /// Whether this action satisfies the commit invariants for its tool.
    ///
    /// Freehand needs at least one point, two-point shapes exactly two, and
    /// text exactly one point plus non-empty content.
    pub fn is_complete(&self) -> bool {
        match self.tool {
            Tool::Cursor => false,
            Tool::Pen | Tool::Highlighter | Tool::Eraser => !self.points.is_empty(),
            Tool::Rectangle | Tool::Circle | Tool::Arrow => self.points.len() == 2,
            Tool::Text => {
                self.points.len() == 1 && self.text.as_deref().is_some_and(|t| !t.is_empty())
            }
        }
    }
}
