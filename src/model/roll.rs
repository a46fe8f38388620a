use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// A rectangular piece of material awaiting roll placement.
///
/// `length_m` runs along the roll's long axis, `width_m` across it.
/// Which strip dimension maps to which depends on the cut direction —
/// see [`crate::operations::packing::pieces_from_layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    /// Label like `P1_S2` (polygon 1, sheet 2).
    pub name: String,
    /// The true clipped outline, for cut-line rendering.
    pub shape: Vec<Point2>,
    pub length_m: f64,
    pub width_m: f64,
    pub area_m2: f64,
}

/// A piece with its placement offsets within a roll, in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPiece {
    #[serde(flatten)]
    pub piece: Piece,
    pub offset_x_m: f64,
    pub offset_y_m: f64,
}

/// One fixed-size stock roll with its placed pieces.
///
/// Rolls are numbered sequentially from 1 and built fresh on every
/// packing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roll {
    pub roll_number: u32,
    pub pieces: Vec<PlacedPiece>,
}
