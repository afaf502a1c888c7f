//! Geometry helpers shared by the renderer and tests.

use crate::draw::Point;

/// Half-angle of the arrowhead V, off the shaft direction.
const ARROWHEAD_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Arrowhead segment length for a stroke of the given width.
pub fn arrowhead_length(size: f64) -> f64 {
    10.0 + size
}

/// Computes the two back points of a V-shaped arrowhead at `end`.
///
/// Each head segment runs from `end` backwards along the shaft direction
/// (`start` → `end`), rotated ±30° off the shaft, with length `10 + size`.
/// A zero-length shaft has no direction; both points collapse onto `end`.
pub fn arrowhead_points(start: Point, end: Point, size: f64) -> [Point; 2] {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx == 0.0 && dy == 0.0 {
        return [end, end];
    }

    let angle = dy.atan2(dx);
    let len = arrowhead_length(size);

    let left = Point::new(
        end.x - len * (angle - ARROWHEAD_ANGLE).cos(),
        end.y - len * (angle - ARROWHEAD_ANGLE).sin(),
    );
    let right = Point::new(
        end.x - len * (angle + ARROWHEAD_ANGLE).cos(),
        end.y - len * (angle + ARROWHEAD_ANGLE).sin(),
    );

    [left, right]
}
