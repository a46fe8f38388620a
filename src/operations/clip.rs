//! Band clipping: Sutherland–Hodgman against an axis-aligned rectangle
//! plus a centroid-based void subtraction.

use crate::math::{
    intersect_2d::segment_line_intersect_2d,
    polygon_2d::{point_in_polygon, polygon_centroid},
    Point2, CLIP_EDGE_TOLERANCE,
};

/// An axis-aligned clipping band in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a band from its top-left corner and extents.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The four directed clip edges, clockwise: top, right, bottom,
    /// left.
    fn clip_edges(&self) -> [(Point2, Point2); 4] {
        let tl = Point2::new(self.x, self.y);
        let tr = Point2::new(self.x + self.width, self.y);
        let br = Point2::new(self.x + self.width, self.y + self.height);
        let bl = Point2::new(self.x, self.y + self.height);
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}

/// Whether `p` is on the inner side of the directed edge `start→end`,
/// with tolerance so near-boundary points count as inside.
///
/// Edges run clockwise in screen coordinates (y down), putting the
/// band's interior on the positive cross-product side.
fn is_inside(p: &Point2, start: &Point2, end: &Point2) -> bool {
    (end.x - start.x) * (p.y - start.y) - (end.y - start.y) * (p.x - start.x)
        >= -CLIP_EDGE_TOLERANCE
}

/// Clips a polygon against a rectangular band (Sutherland–Hodgman).
///
/// Clips sequentially against the band's four half-planes. The input
/// is assumed simple (non-self-intersecting); concave inputs clip
/// correctly against a convex band, but only a single connected trace
/// is produced — a clip that would geometrically split a shape into
/// disjoint parts comes back as one polygon with degenerate bridges.
///
/// Returns a vector with at most one polygon; empty when fewer than 3
/// vertices survive.
#[must_use]
pub fn clip_to_rect(polygon: &[Point2], rect: &Rect) -> Vec<Vec<Point2>> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let mut clipped: Vec<Point2> = polygon.to_vec();

    for (edge_start, edge_end) in rect.clip_edges() {
        if clipped.is_empty() {
            break;
        }
        let mut next_pass = Vec::with_capacity(clipped.len() + 4);

        for j in 0..clipped.len() {
            let p1 = clipped[j];
            let p2 = clipped[(j + 1) % clipped.len()];
            let p1_in = is_inside(&p1, &edge_start, &edge_end);
            let p2_in = is_inside(&p2, &edge_start, &edge_end);

            // Crossings intersect the polygon edge with the infinite
            // line through the clip edge: a crossing can land past the
            // rectangle side's own extent and must still be emitted.
            if p1_in && p2_in {
                next_pass.push(p2);
            } else if p1_in {
                if let Some(hit) = segment_line_intersect_2d(&p1, &p2, &edge_start, &edge_end) {
                    next_pass.push(hit);
                }
            } else if p2_in {
                if let Some(hit) = segment_line_intersect_2d(&p1, &p2, &edge_start, &edge_end) {
                    next_pass.push(hit);
                }
                next_pass.push(p2);
            }
            // Both outside: nothing survives this edge pair.
        }
        clipped = next_pass;
    }

    if clipped.len() >= 3 {
        vec![clipped]
    } else {
        Vec::new()
    }
}

/// Clips to the band, then drops clipped pieces swallowed by voids.
///
/// Void subtraction is a centroid-containment heuristic: a clipped
/// piece is discarded whole when its vertex-mean centroid lies inside
/// any void polygon, and kept whole otherwise. This cannot carve a
/// partial hole out of a piece — a piece that merely overlaps a void
/// without containing its centroid is kept intact. That is the
/// intended (approximate) behavior, not an oversight; replacing it
/// with a true polygon boolean would change every partially-voided
/// layout.
#[must_use]
pub fn clip_and_subtract_voids(
    polygon: &[Point2],
    rect: &Rect,
    void_polygons: &[Vec<Point2>],
) -> Vec<Vec<Point2>> {
    let clipped = clip_to_rect(polygon, rect);
    if void_polygons.is_empty() {
        return clipped;
    }

    clipped
        .into_iter()
        .filter(|piece| {
            let centroid = polygon_centroid(piece);
            !void_polygons
                .iter()
                .any(|v| point_in_polygon(centroid.x, centroid.y, v))
        })
        .collect()
}
