use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::math::Point2;

/// Direction in which vinyl strips are cut across a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CutDirection {
    /// Bands sweep downward along Y; strips run the full width.
    Horizontal,
    /// Bands sweep rightward along X; strips run the full height.
    Vertical,
}

/// A single cuttable unit of roll material.
///
/// `x`/`y`/`width`/`height` are the pixel-space bounding box of the
/// piece. `area_m2` is derived from the bounding box, not the clipped
/// shape — an accepted approximation for near-rectangular pieces.
/// `shape` keeps the true clipped polygon for cut-line rendering.
/// `sheet_number` is 1-based and scoped to one polygon + direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strip {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area_m2: f64,
    pub direction: CutDirection,
    pub shape: Vec<Point2>,
    pub sheet_number: u32,
}

/// The strips planned for one polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonLayout {
    pub polygon_index: usize,
    pub polygon_id: Uuid,
    pub strips: Vec<Strip>,
    pub total_material_area_m2: f64,
}

/// A full vinyl estimate for one cut direction.
///
/// Derived data: recomputed whole whenever geometry or material width
/// changes, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VinylLayout {
    pub direction: CutDirection,
    pub polygon_layouts: Vec<PolygonLayout>,
    pub total_material_area_m2: f64,
    pub total_floor_area_m2: f64,
    pub waste_m2: f64,
    pub efficiency_pct: f64,
}

impl VinylLayout {
    /// Total number of pieces across all polygons.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.polygon_layouts.iter().map(|l| l.strips.len()).sum()
    }
}
