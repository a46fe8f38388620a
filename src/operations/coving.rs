//! Coving adjustment: expanding covered outlines and shrinking voids.
//!
//! Coving is a physical trim at the wall/floor junction; material must
//! run `coving_amount` meters up the wall, so the covered polygon grows
//! outward by that distance along each coved edge (and a void shrinks
//! inward, since material runs into it).
//!
//! All three routines use the same per-vertex displacement: the
//! averaged, normalized normals of the two segments meeting at a
//! corner. This is a local approximation, not a true polygon buffer —
//! large offsets on concave or acute corners can self-intersect. That
//! limitation is accepted; exact mitering is out of scope.

use std::collections::HashMap;

use crate::math::{Point2, Vector2, MIN_COVING_M, TOLERANCE};
use crate::model::{Edge, SegmentKey};

/// Pixel radius for matching a void loop segment back to its source
/// edge (void loops may reorder and reverse edges during tracing).
const EDGE_MATCH_PX: f64 = 1.0;

/// Corner displacement along the averaged normal of the two segments
/// meeting at `current`, scaled to `coving_m` meters.
///
/// Degenerate corners (a zero-length adjacent segment, or normals that
/// exactly cancel on a straight reversal) displace by zero.
#[must_use]
pub fn coving_expansion_vector(
    prev: &Point2,
    current: &Point2,
    next: &Point2,
    coving_m: f64,
    grid_size: f64,
) -> Vector2 {
    let coving_px = coving_m * grid_size;

    let v1 = Vector2::new(current.x - prev.x, current.y - prev.y);
    let v2 = Vector2::new(next.x - current.x, next.y - current.y);
    let len1 = v1.norm();
    let len2 = v2.norm();

    let n1 = if len1 > 0.0 {
        Vector2::new(-v1.y / len1, v1.x / len1)
    } else {
        Vector2::zeros()
    };
    let n2 = if len2 > 0.0 {
        Vector2::new(-v2.y / len2, v2.x / len2)
    } else {
        Vector2::zeros()
    };

    let avg = n1 + n2;
    let avg_len = avg.norm();
    if avg_len < TOLERANCE {
        return Vector2::zeros();
    }
    avg / avg_len * coving_px
}

/// Maximum effective coving amount among two optional adjacent edges.
fn corner_coving_amount(edge1: Option<&&Edge>, edge2: Option<&&Edge>) -> f64 {
    let mut amount: f64 = 0.0;
    for edge in [edge1, edge2].into_iter().flatten() {
        if edge.coving && edge.coving_amount > MIN_COVING_M {
            amount = amount.max(edge.coving_amount);
        }
    }
    amount
}

/// Expands a polygon outward at corners adjacent to coved edges.
///
/// Each vertex looks up its two adjacent segments in `source_edges` by
/// canonical segment key and takes the larger coving amount among those
/// flagged `coving`. Vertices with no coved neighbor stay put. The
/// lookup is exact: it relies on the polygon's vertices being the edge
/// endpoints, which holds for loops produced by the assembly pass.
#[must_use]
pub fn expand_for_coving(polygon: &[Point2], source_edges: &[Edge], grid_size: f64) -> Vec<Point2> {
    let n = polygon.len();
    if n < 3 {
        return polygon.to_vec();
    }

    let by_key: HashMap<SegmentKey, &Edge> = source_edges
        .iter()
        .map(|edge| (edge.segment_key(), edge))
        .collect();

    let mut expanded = Vec::with_capacity(n);
    for i in 0..n {
        let prev = &polygon[(i + n - 1) % n];
        let current = &polygon[i];
        let next = &polygon[(i + 1) % n];

        let edge1 = by_key.get(&SegmentKey::new(prev, current));
        let edge2 = by_key.get(&SegmentKey::new(current, next));
        let amount = corner_coving_amount(edge1, edge2);

        if amount > MIN_COVING_M {
            let d = coving_expansion_vector(prev, current, next, amount, grid_size);
            expanded.push(Point2::new(current.x + d.x, current.y + d.y));
        } else {
            expanded.push(*current);
        }
    }
    expanded
}

/// Shrinks a void loop inward by its maximum coving amount.
///
/// Void loops come out of the tracer with edges possibly reordered and
/// reversed, so source edges are matched by endpoint proximity rather
/// than exact key. Returns the loop unchanged when no edge carries a
/// meaningful coving amount.
#[must_use]
pub fn shrink_void_for_coving(
    void_loop: &[Point2],
    void_edges: &[Edge],
    grid_size: f64,
) -> Vec<Point2> {
    let n = void_loop.len();
    let mut max_coving: f64 = 0.0;

    for i in 0..n {
        let p1 = &void_loop[i];
        let p2 = &void_loop[(i + 1) % n];
        let matched = void_edges.iter().find(|edge| {
            let (s, e) = (edge.start(), edge.end());
            (within(&s, p1) && within(&e, p2)) || (within(&s, p2) && within(&e, p1))
        });
        if let Some(edge) = matched {
            if edge.coving && edge.coving_amount > MIN_COVING_M {
                max_coving = max_coving.max(edge.coving_amount);
            }
        }
    }

    if max_coving > MIN_COVING_M {
        offset_polygon(void_loop, -max_coving * grid_size)
    } else {
        void_loop.to_vec()
    }
}

fn within(a: &Point2, b: &Point2) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt() < EDGE_MATCH_PX
}

/// Offsets every vertex of a polygon along its averaged corner normal.
///
/// The sign of `offset_px` selects inflate vs deflate relative to the
/// polygon's winding. Per-vertex offsetting is not a true buffer: it
/// does not trim self-intersections, so large magnitudes on concave or
/// acute corners produce invalid outlines. Degenerate corners keep
/// their original position. Fewer than 3 points are returned unchanged.
#[must_use]
pub fn offset_polygon(points: &[Point2], offset_px: f64) -> Vec<Point2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut offset = Vec::with_capacity(n);
    for i in 0..n {
        let prev = &points[(i + n - 1) % n];
        let current = &points[i];
        let next = &points[(i + 1) % n];

        // Reuse the corner bisector at unit scale, then apply the
        // signed pixel distance.
        let unit = coving_expansion_vector(prev, current, next, 1.0, 1.0);
        offset.push(Point2::new(
            current.x + unit.x * offset_px,
            current.y + unit.y * offset_px,
        ));
    }
    offset
}
