use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::math::{polygon_2d::polygon_area_px2, Point2};

/// A detected closed floor region.
///
/// `points` keep the traversal order of the walls they came from —
/// winding is not normalized (the shoelace area is orientation
/// independent). `area_m2` is computed at construction; callers that
/// mutate `points` must call [`FloorPolygon::recompute_area`]
/// themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPolygon {
    pub id: Uuid,
    pub points: Vec<Point2>,
    pub area_m2: f64,
}

impl FloorPolygon {
    /// Creates a polygon with a fresh id and an area derived from the
    /// vertices at `grid_size` pixels per meter.
    #[must_use]
    pub fn new(points: Vec<Point2>, grid_size: f64) -> Self {
        let area_m2 = polygon_area_px2(&points) / (grid_size * grid_size);
        Self {
            id: Uuid::new_v4(),
            points,
            area_m2,
        }
    }

    /// Re-derives `area_m2` from the current vertices.
    pub fn recompute_area(&mut self, grid_size: f64) {
        self.area_m2 = polygon_area_px2(&self.points) / (grid_size * grid_size);
    }
}
