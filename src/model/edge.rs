use serde::{Deserialize, Serialize};

use crate::math::{distance_2d::distance_m, Point2};

/// The kind of a drawn edge.
///
/// Doors and windows sit on walls and do not participate in polygon
/// formation or coving; void edges bound holes in the floor area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    Wall,
    Door,
    Window,
    VoidEdge,
}

/// A raw user-drawn segment in pixel space.
///
/// Edges do not know their neighbors; loop structure is recovered by
/// the assembly pass. `coving_amount` is in meters and only meaningful
/// for walls and void edges with `coving` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub kind: EdgeKind,
    pub coving: bool,
    pub coving_amount: f64,
}

impl Edge {
    /// Creates an edge of the given kind with coving disabled.
    #[must_use]
    pub fn new(start: Point2, end: Point2, kind: EdgeKind) -> Self {
        Self {
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
            kind,
            coving: false,
            coving_amount: 0.0,
        }
    }

    /// Sets the coving flag and amount (meters), builder-style.
    #[must_use]
    pub fn with_coving(mut self, amount_m: f64) -> Self {
        self.coving = true;
        self.coving_amount = amount_m;
        self
    }

    /// The start endpoint as a point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        Point2::new(self.start_x, self.start_y)
    }

    /// The end endpoint as a point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        Point2::new(self.end_x, self.end_y)
    }

    /// The same segment traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start_x: self.end_x,
            start_y: self.end_y,
            end_x: self.start_x,
            end_y: self.start_y,
            ..self.clone()
        }
    }

    /// Edge length in meters.
    #[must_use]
    pub fn length_m(&self, grid_size: f64) -> f64 {
        distance_m(&self.start(), &self.end(), grid_size)
    }

    /// Direction-independent key for this segment's geometry.
    #[must_use]
    pub fn segment_key(&self) -> SegmentKey {
        SegmentKey::new(&self.start(), &self.end())
    }
}

/// Canonical direction-independent key for a segment, built from the
/// componentwise min/max of the two endpoints.
///
/// Matches segments by exact coordinates (bit patterns), so it only
/// finds edges whose endpoints are the polygon's own vertices — which
/// holds for loops produced by the assembly pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentKey([u64; 4]);

impl SegmentKey {
    /// Builds the key for the segment between two points.
    #[must_use]
    pub fn new(a: &Point2, b: &Point2) -> Self {
        Self([
            a.x.min(b.x).to_bits(),
            a.y.min(b.y).to_bits(),
            a.x.max(b.x).to_bits(),
            a.y.max(b.y).to_bits(),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reversed_swaps_endpoints_keeps_attributes() {
        let e = Edge::new(
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            EdgeKind::VoidEdge,
        )
        .with_coving(0.15);
        let r = e.reversed();
        assert_eq!(r.start(), e.end());
        assert_eq!(r.end(), e.start());
        assert_eq!(r.kind, EdgeKind::VoidEdge);
        assert!(r.coving);
        assert!((r.coving_amount - 0.15).abs() < 1e-12);
    }

    #[test]
    fn segment_key_direction_independent() {
        let a = Point2::new(10.0, 20.0);
        let b = Point2::new(-5.0, 40.0);
        assert_eq!(SegmentKey::new(&a, &b), SegmentKey::new(&b, &a));
    }

    #[test]
    fn length_in_meters() {
        let e = Edge::new(Point2::new(0.0, 0.0), Point2::new(400.0, 0.0), EdgeKind::Wall);
        assert!((e.length_m(100.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn serde_camel_case_snapshot_fields() {
        let e = Edge::new(Point2::new(1.0, 2.0), Point2::new(3.0, 4.0), EdgeKind::Wall);
        let json = serde_json::to_value(&e).unwrap();
        assert!(json.get("startX").is_some());
        assert!(json.get("covingAmount").is_some());
        assert_eq!(json["kind"], "wall");
    }
}
