mod config;
mod edge;
mod layout;
mod polygon;
mod roll;

pub use config::PlanConfig;
pub use edge::{Edge, EdgeKind, SegmentKey};
pub use layout::{CutDirection, PolygonLayout, Strip, VinylLayout};
pub use polygon::FloorPolygon;
pub use roll::{Piece, PlacedPiece, Roll};
