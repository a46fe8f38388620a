use super::Point2;

/// Bounded segment-segment intersection in 2D.
///
/// Segments are `p1→p2` and `p3→p4`. Uses the determinant form and
/// restricts both parameters to `[0, 1]`, so only true segment
/// crossings are reported. Returns `None` for parallel or collinear
/// segments (vanishing denominator).
#[must_use]
pub fn segment_intersect_2d(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> Option<Point2> {
    let den = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if den == 0.0 {
        return None;
    }

    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / den;
    let u = -((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x)) / den;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point2::new(
            p1.x + t * (p2.x - p1.x),
            p1.y + t * (p2.y - p1.y),
        ))
    } else {
        None
    }
}

/// Intersection of the segment `p1→p2` with the infinite line through
/// `l1` and `l2`.
///
/// Only the segment parameter is bounded to `[0, 1]`; the line extends
/// past both of its defining points. Returns `None` when the segment is
/// parallel to the line (vanishing denominator) or does not reach it.
#[must_use]
pub fn segment_line_intersect_2d(
    p1: &Point2,
    p2: &Point2,
    l1: &Point2,
    l2: &Point2,
) -> Option<Point2> {
    let den = (p1.x - p2.x) * (l1.y - l2.y) - (p1.y - p2.y) * (l1.x - l2.x);
    if den == 0.0 {
        return None;
    }

    let t = ((p1.x - l1.x) * (l1.y - l2.y) - (p1.y - l1.y) * (l1.x - l2.x)) / den;
    if (0.0..=1.0).contains(&t) {
        Some(Point2::new(
            p1.x + t * (p2.x - p1.x),
            p1.y + t * (p2.y - p1.y),
        ))
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn crossing_segments() {
        // X-cross at (50, 50).
        let pt = segment_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(100.0, 100.0),
            &Point2::new(0.0, 100.0),
            &Point2::new(100.0, 0.0),
        )
        .unwrap();
        assert!((pt.x - 50.0).abs() < TOLERANCE);
        assert!((pt.y - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn parallel_segments_none() {
        let r = segment_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(100.0, 0.0),
            &Point2::new(0.0, 10.0),
            &Point2::new(100.0, 10.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn lines_cross_but_segments_do_not() {
        // The infinite lines intersect at (50, 50), outside both segments.
        let r = segment_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 10.0),
            &Point2::new(0.0, 100.0),
            &Point2::new(100.0, 0.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn segment_line_crossing_beyond_line_points() {
        // The segment crosses x=100 at (100, 150), past the span of the
        // line's defining points (y 0..100). The line form still
        // reports the hit; the segment form does not.
        let p1 = Point2::new(150.0, 150.0);
        let p2 = Point2::new(50.0, 150.0);
        let l1 = Point2::new(100.0, 0.0);
        let l2 = Point2::new(100.0, 100.0);
        let pt = segment_line_intersect_2d(&p1, &p2, &l1, &l2).unwrap();
        assert!((pt.x - 100.0).abs() < TOLERANCE);
        assert!((pt.y - 150.0).abs() < TOLERANCE);
        assert!(segment_intersect_2d(&p1, &p2, &l1, &l2).is_none());
    }

    #[test]
    fn segment_line_segment_falls_short() {
        // The infinite line is crossed only by the segment's extension.
        let r = segment_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(100.0, -50.0),
            &Point2::new(100.0, 50.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn segment_line_parallel_none() {
        let r = segment_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(100.0, 0.0),
            &Point2::new(0.0, 10.0),
            &Point2::new(100.0, 10.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn shared_endpoint_counts() {
        // Touching at an endpoint is t=1, u=0 — still a valid intersection.
        let pt = segment_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(100.0, 0.0),
            &Point2::new(100.0, 0.0),
            &Point2::new(100.0, 100.0),
        )
        .unwrap();
        assert!((pt.x - 100.0).abs() < TOLERANCE);
        assert!(pt.y.abs() < TOLERANCE);
    }
}
