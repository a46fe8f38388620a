pub mod assembly;
pub mod clip;
pub mod coving;
pub mod packing;
pub mod strips;

pub use packing::RollPacker;
pub use strips::{StripPlanner, VinylCalculation};
