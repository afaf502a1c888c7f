//! Append-only action log with a single in-progress slot.

use super::action::{DrawingAction, Point};
use log::debug;

/// Ordered log of committed drawing actions plus at most one action still
/// being drawn.
///
/// Committed order is render order (oldest at the bottom). The in-progress
/// action is mutable until it is committed or discarded; committed actions
/// are never modified or reordered, only replaced wholesale by a load.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    committed: Vec<DrawingAction>,
    in_progress: Option<DrawingAction>,
}

impl ActionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs an action into the in-progress slot.
    ///
    /// Any previous in-progress action is dropped; the state machine never
    /// begins a gesture while one is active.
    pub fn begin(&mut self, action: DrawingAction) {
        self.in_progress = Some(action);
    }

    /// Extends the in-progress action with a new pointer sample.
    ///
    /// Freehand tools accumulate every sample; two-point tools keep only
    /// `[start, current]`. No-op when nothing is in progress.
    pub fn extend(&mut self, point: Point) {
        let Some(action) = self.in_progress.as_mut() else {
            return;
        };

        if action.tool.is_freehand() {
            action.points.push(point);
        } else if action.tool.is_two_point() {
            action.points.truncate(1);
            action.points.push(point);
        }
    }

    /// Commits the in-progress action to the tail of the log.
    ///
    /// An action that does not satisfy its tool's point invariants (a shape
    /// gesture that never moved) is dropped instead of committed. Idempotent
    /// when nothing is in progress. Returns `true` if an action was appended.
    pub fn commit(&mut self) -> bool {
        let Some(action) = self.in_progress.take() else {
            return false;
        };

        if !action.is_complete() {
            debug!(
                "discarding incomplete {:?} gesture ({} point(s))",
                action.tool,
                action.points.len()
            );
            return false;
        }

        self.committed.push(action);
        true
    }

    /// Drops the in-progress action without committing. Idempotent.
    pub fn discard(&mut self) {
        self.in_progress = None;
    }

    /// Appends an already-complete action directly to the committed log,
    /// bypassing the in-progress slot. Used by the text tool.
    pub fn push_committed(&mut self, action: DrawingAction) {
        debug_assert!(action.is_complete());
        self.committed.push(action);
    }

    /// Atomically replaces the committed log and clears any in-progress
    /// action. This is the only removal path.
    pub fn replace_all(&mut self, actions: Vec<DrawingAction>) {
        self.committed = actions;
        self.in_progress = None;
    }

    /// Committed actions in render order.
    pub fn committed(&self) -> &[DrawingAction] {
        &self.committed
    }

    /// The action currently being drawn, if any.
    pub fn in_progress(&self) -> Option<&DrawingAction> {
        self.in_progress.as_ref()
    }

    /// All actions in paint order: committed first, then the in-progress
    /// action on top.
    pub fn render_iter(&self) -> impl Iterator<Item = &DrawingAction> {
        self.committed.iter().chain(self.in_progress.iter())
    }

    /// Number of committed actions.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns `true` if nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::action::Tool;

    fn pen_action(id: &str) -> DrawingAction {
        DrawingAction::started_at(id.into(), Tool::Pen, "#000000".into(), 5.0, Point::new(0.0, 0.0))
    }

    fn rect_action(id: &str) -> DrawingAction {
        DrawingAction::started_at(
            id.into(),
            Tool::Rectangle,
            "#000000".into(),
            5.0,
            Point::new(0.0, 0.0),
        )
    }

    #[test]
    fn extend_appends_for_freehand() {
        let mut log = ActionLog::new();
        log.begin(pen_action("1"));
        log.extend(Point::new(1.0, 0.0));
        log.extend(Point::new(2.0, 0.0));

        assert_eq!(log.in_progress().unwrap().points.len(), 3);
    }

    #[test]
    fn extend_replaces_for_two_point() {
        let mut log = ActionLog::new();
        log.begin(rect_action("1"));
        log.extend(Point::new(10.0, 10.0));
        log.extend(Point::new(20.0, 20.0));
        log.extend(Point::new(30.0, 30.0));

        let points = &log.in_progress().unwrap().points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[1], Point::new(30.0, 30.0));
    }

    #[test]
    fn extend_without_gesture_is_noop() {
        let mut log = ActionLog::new();
        log.extend(Point::new(1.0, 1.0));
        assert!(log.in_progress().is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn commit_appends_and_clears() {
        let mut log = ActionLog::new();
        log.begin(pen_action("1"));
        assert!(log.commit());
        assert_eq!(log.len(), 1);
        assert!(log.in_progress().is_none());

        // Idempotent once the slot is empty.
        assert!(!log.commit());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn commit_drops_incomplete_shape() {
        let mut log = ActionLog::new();
        log.begin(rect_action("1"));
        // No motion: still a single point.
        assert!(!log.commit());
        assert!(log.is_empty());
        assert!(log.in_progress().is_none());
    }

    #[test]
    fn discard_never_commits() {
        let mut log = ActionLog::new();
        log.begin(pen_action("1"));
        log.discard();
        log.discard();
        assert!(log.is_empty());
        assert!(log.in_progress().is_none());
    }

    #[test]
    fn replace_all_clears_in_progress() {
        let mut log = ActionLog::new();
        log.begin(pen_action("1"));

        let mut replacement = pen_action("2");
        replacement.points.push(Point::new(5.0, 5.0));
        log.replace_all(vec![replacement]);

        assert_eq!(log.len(), 1);
        assert_eq!(log.committed()[0].id, "2");
        assert!(log.in_progress().is_none());
    }

    #[test]
    fn render_iter_puts_in_progress_last() {
        let mut log = ActionLog::new();
        log.begin(pen_action("1"));
        log.commit();
        log.begin(pen_action("2"));

        let ids: Vec<&str> = log.render_iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn committed_order_is_insertion_order() {
        let mut log = ActionLog::new();
        for id in ["1", "2", "3"] {
            log.begin(pen_action(id));
            log.commit();
        }
        let ids: Vec<&str> = log.committed().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }
}
