use super::distance_2d::distance_m;
use super::Point2;

/// Axis-aligned bounding box of a polygon, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// The all-zero box, returned for empty vertex lists.
    pub const ZERO: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
        width: 0.0,
        height: 0.0,
    };
}

/// Computes the area of a polygon via the shoelace formula, in pixel².
///
/// Orientation-independent (absolute value). Returns 0 for fewer than
/// 3 vertices.
#[must_use]
pub fn polygon_area_px2(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum.abs() * 0.5
}

/// Computes the perimeter of a polygon in meters, wrapping last→first.
///
/// Returns 0 for fewer than 2 vertices.
#[must_use]
pub fn polygon_perimeter_m(points: &[Point2], grid_size: f64) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut perimeter = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        perimeter += distance_m(&points[i], &points[j], grid_size);
    }
    perimeter
}

/// Returns the axis-aligned bounding box of a vertex list.
///
/// Empty input yields [`Bounds::ZERO`].
#[must_use]
pub fn polygon_bounds(points: &[Point2]) -> Bounds {
    let Some(first) = points.first() else {
        return Bounds::ZERO;
    };
    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;
    for pt in &points[1..] {
        min_x = min_x.min(pt.x);
        min_y = min_y.min(pt.y);
        max_x = max_x.max(pt.x);
        max_y = max_y.max(pt.y);
    }
    Bounds {
        min_x,
        min_y,
        max_x,
        max_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Returns the arithmetic mean of the vertices.
///
/// Not the area-weighted centroid — good enough as an interior sample
/// for roughly-convex shapes, but can land outside highly concave
/// ones. Returns the origin for empty input.
#[must_use]
pub fn polygon_centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::new(0.0, 0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Point2::new(sum_x / n, sum_y / n)
}

/// Ray-casting point-in-polygon test.
///
/// Casts a ray to +x and counts edge crossings. Returns `false` for
/// fewer than 3 vertices.
#[must_use]
pub fn point_in_polygon(x: f64, y: f64, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);
        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn unit_square_px() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
            Point2::new(0.0, 100.0),
        ]
    }

    // ── polygon_area_px2 tests ──

    #[test]
    fn shoelace_unit_square() {
        // 100×100 px square → 10000 px², i.e. 1 m² at 100 px/m.
        let area = polygon_area_px2(&unit_square_px());
        assert!((area - 10_000.0).abs() < TOLERANCE, "area={area}");
    }

    #[test]
    fn shoelace_orientation_invariant() {
        let mut reversed = unit_square_px();
        reversed.reverse();
        let a = polygon_area_px2(&unit_square_px());
        let b = polygon_area_px2(&reversed);
        assert!((a - b).abs() < TOLERANCE);
    }

    #[test]
    fn shoelace_degenerate() {
        assert!(polygon_area_px2(&[]).abs() < TOLERANCE);
        assert!(polygon_area_px2(&unit_square_px()[..2]).abs() < TOLERANCE);
    }

    // ── polygon_perimeter_m tests ──

    #[test]
    fn perimeter_unit_square() {
        let p = polygon_perimeter_m(&unit_square_px(), 100.0);
        assert!((p - 4.0).abs() < TOLERANCE, "p={p}");
    }

    #[test]
    fn perimeter_degenerate() {
        assert!(polygon_perimeter_m(&[], 100.0).abs() < TOLERANCE);
        assert!(polygon_perimeter_m(&unit_square_px()[..1], 100.0).abs() < TOLERANCE);
    }

    // ── polygon_bounds tests ──

    #[test]
    fn bounds_basic() {
        let b = polygon_bounds(&[
            Point2::new(10.0, -5.0),
            Point2::new(30.0, 25.0),
            Point2::new(-20.0, 0.0),
        ]);
        assert!((b.min_x + 20.0).abs() < TOLERANCE);
        assert!((b.min_y + 5.0).abs() < TOLERANCE);
        assert!((b.max_x - 30.0).abs() < TOLERANCE);
        assert!((b.max_y - 25.0).abs() < TOLERANCE);
        assert!((b.width - 50.0).abs() < TOLERANCE);
        assert!((b.height - 30.0).abs() < TOLERANCE);
    }

    #[test]
    fn bounds_empty_is_zero() {
        assert_eq!(polygon_bounds(&[]), Bounds::ZERO);
    }

    // ── polygon_centroid tests ──

    #[test]
    fn centroid_of_square() {
        let c = polygon_centroid(&unit_square_px());
        assert!((c.x - 50.0).abs() < TOLERANCE);
        assert!((c.y - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_empty_is_origin() {
        let c = polygon_centroid(&[]);
        assert!(c.x.abs() < TOLERANCE && c.y.abs() < TOLERANCE);
    }

    // ── point_in_polygon tests ──

    #[test]
    fn containment_inside_and_outside() {
        let square = unit_square_px();
        assert!(point_in_polygon(50.0, 50.0, &square));
        assert!(!point_in_polygon(150.0, 50.0, &square));
        assert!(!point_in_polygon(-1.0, -1.0, &square));
    }

    #[test]
    fn containment_outside_bounding_box_never_inside() {
        // A point strictly outside the bounding box must never report
        // inside, for any polygon.
        let concave = vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
            Point2::new(50.0, 40.0),
            Point2::new(0.0, 100.0),
        ];
        let b = polygon_bounds(&concave);
        assert!(!point_in_polygon(b.max_x + 1.0, 50.0, &concave));
        assert!(!point_in_polygon(50.0, b.min_y - 1.0, &concave));
    }

    #[test]
    fn containment_degenerate() {
        assert!(!point_in_polygon(0.0, 0.0, &[]));
        assert!(!point_in_polygon(0.0, 0.0, &unit_square_px()[..2]));
    }
}
