pub mod arc_2d;
pub mod intersect_2d;
pub mod point_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Equality, strict containment and point hashing all use this value;
/// endpoint matching breaks if any of them disagree.
pub const TOLERANCE: f64 = 1e-5;
