use std::f64::consts::PI;

use tracing::warn;

use super::Point2;

/// Returns the Euclidean distance between two points in meters.
///
/// Coordinates are in pixel space; `grid_size` is the pixels-per-meter
/// scale.
#[must_use]
pub fn distance_m(p1: &Point2, p2: &Point2, grid_size: f64) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt() / grid_size
}

/// Returns the angle of the segment from `p1` to `p2` in degrees,
/// in the range `(-180, 180]`.
///
/// Returns 0 and logs a warning if any coordinate is NaN.
#[must_use]
pub fn angle_deg(p1: &Point2, p2: &Point2) -> f64 {
    if p1.x.is_nan() || p1.y.is_nan() || p2.x.is_nan() || p2.y.is_nan() {
        warn!(
            "invalid coordinates for angle: ({}, {}) -> ({}, {})",
            p1.x, p1.y, p2.x, p2.y
        );
        return 0.0;
    }
    (p2.y - p1.y).atan2(p2.x - p1.x) * 180.0 / PI
}

/// Returns the minimum distance from `point` to the segment from
/// `seg_start` to `seg_end`, in meters.
///
/// Projects the point onto the infinite line through the segment and
/// clamps the projection parameter to `[0, 1]`. A zero-length segment
/// degenerates to point-to-point distance. Used for hit-testing walls.
#[must_use]
pub fn point_to_segment_dist_m(
    point: &Point2,
    seg_start: &Point2,
    seg_end: &Point2,
    grid_size: f64,
) -> f64 {
    let dx = seg_end.x - seg_start.x;
    let dy = seg_end.y - seg_start.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return distance_m(point, seg_start, grid_size);
    }

    let t = ((point.x - seg_start.x) * dx + (point.y - seg_start.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest = Point2::new(seg_start.x + t * dx, seg_start.y + t * dy);
    distance_m(point, &closest, grid_size)
}
