//! Roll packing: fitting planned strips onto fixed-size material rolls.

use tracing::warn;

use crate::error::{OperationError, Result};
use crate::model::{CutDirection, Piece, PlacedPiece, Roll, VinylLayout};

/// Placement slack in meters, absorbing float drift from the strip
/// sweep so an exact-width piece still fits its roll.
const FIT_TOLERANCE_M: f64 = 1e-4;

/// Converts a planned layout into nameable cut pieces in meters.
///
/// A piece's length runs along the strip's cut direction (its long
/// axis) and its width is the band extent, so a full-width strip lies
/// flush across the roll. Names are `P{polygon}_S{sheet}` with 1-based
/// numbering, stable across re-runs of the same plan.
#[must_use]
pub fn pieces_from_layout(layout: &VinylLayout, grid_size: f64) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(layout.piece_count());
    for polygon_layout in &layout.polygon_layouts {
        for strip in &polygon_layout.strips {
            let (length_m, width_m) = match strip.direction {
                CutDirection::Horizontal => (strip.width / grid_size, strip.height / grid_size),
                CutDirection::Vertical => (strip.height / grid_size, strip.width / grid_size),
            };
            pieces.push(Piece {
                name: format!(
                    "P{}_S{}",
                    polygon_layout.polygon_index + 1,
                    strip.sheet_number
                ),
                shape: strip.shape.clone(),
                length_m,
                width_m,
                area_m2: strip.area_m2,
            });
        }
    }
    pieces
}

/// Greedy shelf packer for rectangular pieces on fixed-size rolls.
///
/// Pieces are sorted longest-first so the longest piece anchors each
/// column. Within a roll, pieces stack across the width at a shared
/// length offset; when the width is exhausted the offset advances past
/// the column's anchor piece. A new roll opens when neither works.
///
/// Every input piece is placed exactly once. Oversized pieces (longer
/// or wider than a roll) are logged and placed anyway, each on its own
/// fresh roll, so the cut list stays complete and the overflow is
/// visible to the installer.
#[derive(Debug)]
pub struct RollPacker {
    pieces: Vec<Piece>,
    roll_length_m: f64,
    roll_width_m: f64,
}

impl RollPacker {
    /// Creates a packer over the given pieces and roll dimensions.
    #[must_use]
    pub fn new(pieces: Vec<Piece>, roll_length_m: f64, roll_width_m: f64) -> Self {
        Self {
            pieces,
            roll_length_m,
            roll_width_m,
        }
    }

    /// Packs all pieces onto as few rolls as the greedy order allows.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if either roll dimension
    /// is not a positive finite number.
    pub fn execute(&self) -> Result<Vec<Roll>> {
        for (name, value) in [
            ("roll length", self.roll_length_m),
            ("roll width", self.roll_width_m),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "{name} {value} m is not usable"
                ))
                .into());
            }
        }

        let mut sorted = self.pieces.clone();
        sorted.sort_by(|a, b| {
            b.length_m
                .partial_cmp(&a.length_m)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let max_length = self.roll_length_m + FIT_TOLERANCE_M;
        let max_width = self.roll_width_m + FIT_TOLERANCE_M;

        let mut rolls: Vec<Roll> = Vec::new();
        // Open column on the current roll: its length offset, the
        // length of its anchor (first, longest) piece, and the width
        // consumed so far.
        let mut column_offset = 0.0_f64;
        let mut column_length = 0.0_f64;
        let mut column_width_used = 0.0_f64;

        for piece in sorted {
            if piece.length_m > max_length {
                warn!(
                    piece = %piece.name,
                    length_m = piece.length_m,
                    roll_length_m = self.roll_length_m,
                    "piece is longer than the roll; placing anyway"
                );
            }
            if piece.width_m > max_width {
                warn!(
                    piece = %piece.name,
                    width_m = piece.width_m,
                    roll_width_m = self.roll_width_m,
                    "piece is wider than the roll; placing anyway"
                );
            }

            // Stack across the width of the open column.
            if let Some(roll) = rolls.last_mut() {
                if column_offset + piece.length_m <= max_length
                    && column_width_used + piece.width_m <= max_width
                {
                    let placed = PlacedPiece {
                        offset_x_m: column_offset,
                        offset_y_m: column_width_used,
                        piece,
                    };
                    column_width_used += placed.piece.width_m;
                    column_length = column_length.max(placed.piece.length_m);
                    roll.pieces.push(placed);
                    continue;
                }

                // Start a new column past the current one's anchor.
                let next_offset = column_offset + column_length;
                if next_offset + piece.length_m <= max_length && piece.width_m <= max_width {
                    column_offset = next_offset;
                    column_length = piece.length_m;
                    column_width_used = piece.width_m;
                    roll.pieces.push(PlacedPiece {
                        offset_x_m: column_offset,
                        offset_y_m: 0.0,
                        piece,
                    });
                    continue;
                }
            }

            // Open a new roll.
            column_offset = 0.0;
            column_length = piece.length_m;
            column_width_used = piece.width_m;
            rolls.push(Roll {
                roll_number: u32::try_from(rolls.len() + 1).unwrap_or(u32::MAX),
                pieces: vec![PlacedPiece {
                    offset_x_m: 0.0,
                    offset_y_m: 0.0,
                    piece,
                }],
            });
        }

        Ok(rolls)
    }
}
