//! Vinyl strip planning: sweeping roll-width bands across a polygon.

use crate::error::{OperationError, Result};
use crate::math::{
    polygon_2d::{polygon_bounds, Bounds},
    Point2, MIN_STRIP_AREA_M2,
};
use crate::model::{
    CutDirection, Edge, EdgeKind, FloorPolygon, PlanConfig, PolygonLayout, Strip, VinylLayout,
};
use crate::operations::assembly::group_void_loops;
use crate::operations::clip::{clip_and_subtract_voids, Rect};
use crate::operations::coving::shrink_void_for_coving;

/// Plans the cuttable strips for one polygon in one direction.
///
/// Bands of one roll width sweep the polygon's bounding box — down the
/// Y axis for horizontal strips, across the X axis for vertical ones —
/// and each band is clipped against the polygon with void subtraction.
/// The final band is clamped to the remaining extent.
#[derive(Debug)]
pub struct StripPlanner {
    points: Vec<Point2>,
    direction: CutDirection,
    config: PlanConfig,
    void_edges: Vec<Edge>,
}

impl StripPlanner {
    /// Creates a planner for the given polygon outline.
    ///
    /// `edges` may be the full drawn edge set; only void edges are
    /// used (for hole subtraction).
    #[must_use]
    pub fn new(
        points: Vec<Point2>,
        direction: CutDirection,
        config: PlanConfig,
        edges: &[Edge],
    ) -> Self {
        let void_edges: Vec<Edge> = edges
            .iter()
            .filter(|e| e.kind == EdgeKind::VoidEdge)
            .cloned()
            .collect();
        Self {
            points,
            direction,
            config,
            void_edges,
        }
    }

    /// Executes the band sweep.
    ///
    /// Strip areas are derived from each piece's bounding box, not its
    /// clipped shape — acceptable for the near-rectangular pieces the
    /// sweep produces. Pieces at or below the sliver threshold are
    /// discarded. An outline with fewer than 3 points yields no strips
    /// (a normal state while drawing).
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the configured band
    /// width is not a positive finite pixel count (impossible through
    /// [`PlanConfig::new`], possible through a hand-built config).
    pub fn execute(&self) -> Result<Vec<Strip>> {
        let band_px = self.config.roll_width_px();
        if !band_px.is_finite() || band_px <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "band width {band_px} px is not usable"
            ))
            .into());
        }

        if self.points.len() < 3 {
            return Ok(Vec::new());
        }

        let void_polygons = self.adjusted_void_loops();
        let bounds = polygon_bounds(&self.points);
        let grid = self.config.grid_size;

        let mut strips = Vec::new();
        let mut sheet_number = 1_u32;

        let (mut coord, sweep_end) = match self.direction {
            CutDirection::Horizontal => (bounds.min_y, bounds.max_y),
            CutDirection::Vertical => (bounds.min_x, bounds.max_x),
        };

        while coord < sweep_end {
            let band = self.band_rect(&bounds, coord, band_px);

            for piece in clip_and_subtract_voids(&self.points, &band, &void_polygons) {
                if piece.len() < 3 {
                    continue;
                }
                let piece_bounds = polygon_bounds(&piece);
                let area_m2 = (piece_bounds.width / grid) * (piece_bounds.height / grid);
                if area_m2 <= MIN_STRIP_AREA_M2 {
                    continue;
                }
                strips.push(Strip {
                    x: piece_bounds.min_x,
                    y: piece_bounds.min_y,
                    width: piece_bounds.width,
                    height: piece_bounds.height,
                    area_m2,
                    direction: self.direction,
                    shape: piece,
                    sheet_number,
                });
                sheet_number += 1;
            }

            coord += band_px;
        }

        Ok(strips)
    }

    /// Groups the planner's void edges into loops and applies coving
    /// shrinkage to each.
    fn adjusted_void_loops(&self) -> Vec<Vec<Point2>> {
        group_void_loops(&self.void_edges)
            .iter()
            .map(|void_loop| {
                shrink_void_for_coving(void_loop, &self.void_edges, self.config.grid_size)
            })
            .collect()
    }

    /// The band rectangle at sweep position `coord`, clamped to the
    /// remaining extent.
    fn band_rect(&self, bounds: &Bounds, coord: f64, band_px: f64) -> Rect {
        match self.direction {
            CutDirection::Horizontal => Rect::new(
                bounds.min_x,
                coord,
                bounds.width,
                band_px.min(bounds.max_y - coord),
            ),
            CutDirection::Vertical => Rect::new(
                coord,
                bounds.min_y,
                band_px.min(bounds.max_x - coord),
                bounds.height,
            ),
        }
    }
}

/// Aggregates per-polygon strip plans into a full vinyl estimate.
#[derive(Debug)]
pub struct VinylCalculation<'a> {
    polygons: &'a [FloorPolygon],
    edges: &'a [Edge],
    direction: CutDirection,
    config: PlanConfig,
}

impl<'a> VinylCalculation<'a> {
    /// Creates a calculation over all detected polygons.
    #[must_use]
    pub fn new(
        polygons: &'a [FloorPolygon],
        edges: &'a [Edge],
        direction: CutDirection,
        config: PlanConfig,
    ) -> Self {
        Self {
            polygons,
            edges,
            direction,
            config,
        }
    }

    /// Runs the strip planner per polygon and totals the result.
    ///
    /// `waste = material − floor`; `efficiency = floor / material`
    /// as a percentage, or 0 when no material is used.
    ///
    /// # Errors
    ///
    /// Propagates [`StripPlanner::execute`] errors.
    pub fn execute(&self) -> Result<VinylLayout> {
        let mut polygon_layouts = Vec::with_capacity(self.polygons.len());

        for (polygon_index, polygon) in self.polygons.iter().enumerate() {
            let strips = StripPlanner::new(
                polygon.points.clone(),
                self.direction,
                self.config,
                self.edges,
            )
            .execute()?;
            let total_material_area_m2 = strips.iter().map(|s| s.area_m2).sum();
            polygon_layouts.push(PolygonLayout {
                polygon_index,
                polygon_id: polygon.id,
                strips,
                total_material_area_m2,
            });
        }

        let total_material_area_m2: f64 = polygon_layouts
            .iter()
            .map(|l| l.total_material_area_m2)
            .sum();
        let total_floor_area_m2: f64 = self.polygons.iter().map(|p| p.area_m2).sum();
        let efficiency_pct = if total_material_area_m2 > 0.0 {
            total_floor_area_m2 / total_material_area_m2 * 100.0
        } else {
            0.0
        };

        Ok(VinylLayout {
            direction: self.direction,
            polygon_layouts,
            total_material_area_m2,
            total_floor_area_m2,
            waste_m2: total_material_area_m2 - total_floor_area_m2,
            efficiency_pct,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::EdgeKind;

    fn rect_points(w: f64, h: f64) -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(w, h),
            Point2::new(0.0, h),
        ]
    }

    fn config() -> PlanConfig {
        PlanConfig::default() // 100 px/m, 2.0 m roll width
    }

    fn void_square(x: f64, y: f64, size: f64) -> Vec<Edge> {
        let pts = rect_points(size, size);
        (0..4)
            .map(|i| {
                let a = Point2::new(pts[i].x + x, pts[i].y + y);
                let b = Point2::new(pts[(i + 1) % 4].x + x, pts[(i + 1) % 4].y + y);
                Edge::new(a, b, EdgeKind::VoidEdge)
            })
            .collect()
    }

    // ── StripPlanner tests ──

    #[test]
    fn horizontal_bands_cover_rectangle() {
        // 4 m × 3 m room, 2 m bands: a 2 m strip and a clamped 1 m strip.
        let strips = StripPlanner::new(
            rect_points(400.0, 300.0),
            CutDirection::Horizontal,
            config(),
            &[],
        )
        .execute()
        .unwrap();

        assert_eq!(strips.len(), 2);
        assert!((strips[0].area_m2 - 8.0).abs() < 1e-9, "{}", strips[0].area_m2);
        assert!((strips[1].area_m2 - 4.0).abs() < 1e-9, "{}", strips[1].area_m2);
        assert_eq!(strips[0].sheet_number, 1);
        assert_eq!(strips[1].sheet_number, 2);

        // Band count = ceil(H / B); union of bounding boxes covers the room.
        let covered: f64 = strips.iter().map(|s| s.area_m2).sum();
        assert!((covered - 12.0).abs() < MIN_STRIP_AREA_M2);
        assert!((strips[1].y - 200.0).abs() < 1e-9);
        assert!((strips[1].height - 100.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_bands_sweep_x() {
        let strips = StripPlanner::new(
            rect_points(400.0, 300.0),
            CutDirection::Vertical,
            config(),
            &[],
        )
        .execute()
        .unwrap();
        assert_eq!(strips.len(), 2);
        assert!((strips[0].width - 200.0).abs() < 1e-9);
        assert!((strips[0].height - 300.0).abs() < 1e-9);
        assert!((strips[1].x - 200.0).abs() < 1e-9);
    }

    #[test]
    fn sliver_bands_are_discarded() {
        // 4 m × 4.0002 m: the third band is a 0.02 px sliver below the
        // area threshold.
        let strips = StripPlanner::new(
            rect_points(400.0, 400.02),
            CutDirection::Horizontal,
            config(),
            &[],
        )
        .execute()
        .unwrap();
        assert_eq!(strips.len(), 2);
    }

    #[test]
    fn band_swallowed_by_void_is_dropped() {
        // Void covering the entire first band: its centroid test drops
        // that strip whole.
        let voids = void_square(-10.0, -10.0, 420.0);
        // Void spans y in [-10, 410]: both bands' centroids are inside,
        // so nothing survives.
        let strips = StripPlanner::new(
            rect_points(400.0, 300.0),
            CutDirection::Horizontal,
            config(),
            &voids,
        )
        .execute()
        .unwrap();
        assert!(strips.is_empty());
    }

    #[test]
    fn small_void_keeps_bands() {
        // A small void near a corner leaves both band centroids
        // uncovered; bands are kept whole (documented approximation).
        let voids = void_square(10.0, 10.0, 40.0);
        let strips = StripPlanner::new(
            rect_points(400.0, 300.0),
            CutDirection::Horizontal,
            config(),
            &voids,
        )
        .execute()
        .unwrap();
        assert_eq!(strips.len(), 2);
    }

    #[test]
    fn open_outline_yields_no_strips() {
        let strips = StripPlanner::new(Vec::new(), CutDirection::Horizontal, config(), &[])
            .execute()
            .unwrap();
        assert!(strips.is_empty());
    }

    #[test]
    fn hand_built_config_with_bad_band_errors() {
        let bad = PlanConfig {
            grid_size: 100.0,
            roll_width_m: 0.0,
            roll_length_m: 25.0,
        };
        let r = StripPlanner::new(
            rect_points(400.0, 300.0),
            CutDirection::Horizontal,
            bad,
            &[],
        )
        .execute();
        assert!(r.is_err());
    }

    // ── VinylCalculation tests ──

    #[test]
    fn totals_and_efficiency_for_exact_cover() {
        let polygons = vec![FloorPolygon::new(rect_points(400.0, 300.0), 100.0)];
        let layout = VinylCalculation::new(&polygons, &[], CutDirection::Horizontal, config())
            .execute()
            .unwrap();

        assert_eq!(layout.piece_count(), 2);
        assert!((layout.total_floor_area_m2 - 12.0).abs() < 1e-9);
        assert!((layout.total_material_area_m2 - 12.0).abs() < 1e-9);
        assert!(layout.waste_m2.abs() < 1e-9);
        assert!((layout.efficiency_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_plan_has_zero_efficiency() {
        let layout = VinylCalculation::new(&[], &[], CutDirection::Horizontal, config())
            .execute()
            .unwrap();
        assert!(layout.polygon_layouts.is_empty());
        assert!(layout.total_material_area_m2.abs() < 1e-12);
        assert!(layout.efficiency_pct.abs() < 1e-12);
    }

    #[test]
    fn efficiency_stays_within_bounds_with_waste() {
        // An L-shape wastes material on bounding-box strips; efficiency
        // must stay in (0, 100].
        let l_shape = vec![
            Point2::new(0.0, 0.0),
            Point2::new(400.0, 0.0),
            Point2::new(400.0, 150.0),
            Point2::new(200.0, 150.0),
            Point2::new(200.0, 300.0),
            Point2::new(0.0, 300.0),
        ];
        let polygons = vec![FloorPolygon::new(l_shape, 100.0)];
        let layout = VinylCalculation::new(&polygons, &[], CutDirection::Horizontal, config())
            .execute()
            .unwrap();
        assert!(layout.efficiency_pct > 0.0);
        assert!(layout.efficiency_pct <= 100.0 + 1e-9);
        assert!(layout.waste_m2 >= -1e-9);
    }
}
