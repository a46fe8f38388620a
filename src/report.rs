//! Plan summaries: floor measurements and the installer cut list.

use std::fmt::Write as _;

use crate::model::{CutDirection, Edge, EdgeKind, FloorPolygon, PlanConfig, Roll, VinylLayout};

/// Headline figures for a measured floor plan.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorMeasurements {
    pub total_area_m2: f64,
    pub total_perimeter_m: f64,
    pub wall_count: usize,
    pub polygon_count: usize,
    /// Combined length of wall edges with coving enabled.
    pub total_coving_length_m: f64,
}

/// Measures the detected polygons and drawn walls.
///
/// Perimeter sums over every polygon, so shared walls between adjacent
/// rooms count once per room. Coving length only counts wall edges with
/// a positive coving amount.
#[must_use]
pub fn measure_floor(
    polygons: &[FloorPolygon],
    edges: &[Edge],
    grid_size: f64,
) -> FloorMeasurements {
    let total_area_m2 = polygons.iter().map(|p| p.area_m2).sum();
    let total_perimeter_m = polygons
        .iter()
        .map(|p| crate::math::polygon_2d::polygon_perimeter_m(&p.points, grid_size))
        .sum();
    let walls: Vec<&Edge> = edges.iter().filter(|e| e.kind == EdgeKind::Wall).collect();
    let total_coving_length_m = walls
        .iter()
        .filter(|e| e.coving && e.coving_amount > 0.0)
        .map(|e| e.length_m(grid_size))
        .sum();

    FloorMeasurements {
        total_area_m2,
        total_perimeter_m,
        wall_count: walls.len(),
        polygon_count: polygons.len(),
        total_coving_length_m,
    }
}

fn direction_name(direction: CutDirection) -> &'static str {
    match direction {
        CutDirection::Horizontal => "Horizontal",
        CutDirection::Vertical => "Vertical",
    }
}

/// Renders the markdown cut list for a packed layout.
///
/// The header block estimates total roll consumption in linear meters;
/// the estimate divides the summed piece lengths by the roll length
/// and rounds up, which overstates usage when pieces share a roll side
/// by side. Each roll then gets a placement table the installer can
/// cut from directly.
#[must_use]
pub fn cut_list(layout: &VinylLayout, rolls: &[Roll], config: &PlanConfig) -> String {
    // Folded from +0.0: an empty `f64` sum is -0.0, which would render
    // as "-0" in the header.
    let total_linear_m = rolls
        .iter()
        .flat_map(|r| r.pieces.iter())
        .fold(0.0_f64, |acc, p| acc + p.piece.length_m);
    let rolls_estimate = (total_linear_m / config.roll_length_m).ceil();
    let direction = direction_name(layout.direction);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Roll Layout Summary ({})",
        direction.to_uppercase()
    );
    let _ = writeln!(out, "Total Rolls Used (estimated): {rolls_estimate}");
    let _ = writeln!(
        out,
        "Total Material on Rolls: {total_linear_m:.2} linear meters (approx.)"
    );
    let _ = writeln!(out, "Vinyl Width: {} m", config.roll_width_m);
    let _ = writeln!(
        out,
        "Note: material is supplied in {} m roll segments.",
        config.roll_length_m
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "# Cut List for {direction} Layout");
    let _ = writeln!(
        out,
        "Total Material: {:.2} m\u{b2} | Waste: {:.2} m\u{b2} | Efficiency: {:.1}%",
        layout.total_material_area_m2, layout.waste_m2, layout.efficiency_pct
    );

    for roll in rolls {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Roll {}", roll.roll_number);
        let _ = writeln!(out, "| Piece | Dimensions | Area | Offset (X, Y) |");
        let _ = writeln!(out, "|-------|------------|------|---------------|");
        for placed in &roll.pieces {
            let _ = writeln!(
                out,
                "| {} | {:.2}m x {:.2}m | {:.2} m\u{b2} | ({:.2}m, {:.2}m) |",
                placed.piece.name,
                placed.piece.length_m,
                placed.piece.width_m,
                placed.piece.area_m2,
                placed.offset_x_m,
                placed.offset_y_m
            );
        }
    }

    out
}
