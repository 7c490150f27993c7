mod point;
mod vector;
mod line;

pub use point::Point;
pub use vector::GeoVector;
pub use line::Line;

/// Angle type, in degrees (alias for f64).
pub type Degrees = f64;

/// Tolerance for all coordinate and length comparisons.
pub const EPS: f64 = 1e-6;
