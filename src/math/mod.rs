pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Pixel tolerance for matching edge endpoints during loop tracing.
///
/// Hand-drawn edges rarely meet exactly; endpoints within this radius
/// are treated as the same corner.
pub const ENDPOINT_SNAP_PX: f64 = 5.0;

/// Cross-product tolerance for the clipper's inside test. Points this
/// close to a clip edge count as inside, avoiding boundary flicker.
pub const CLIP_EDGE_TOLERANCE: f64 = 0.001;

/// Strips with less area than this (in m²) are clipping slivers and
/// are discarded.
pub const MIN_STRIP_AREA_M2: f64 = 0.001;

/// Coving amounts below this (in meters, 1 mm) are ignored.
pub const MIN_COVING_M: f64 = 0.001;
