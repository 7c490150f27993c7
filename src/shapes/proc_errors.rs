/// Shape construction error type.
#[derive(Debug)]
pub enum ShapeError {
    /// A parameter is outside the domain of the shape (non-positive axis, too few vertices...).
    Domain(String),
    /// The input collapses the geometry (coincident points, collinear triangle...).
    Degenerate(String),
}
impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::Domain(error) => write!(f, "Domain Error:\n{}", error),
            ShapeError::Degenerate(error) => write!(f, "Degenerate Geometry:\n{}", error),
        }
    }
}

/// Result type for the `shapes` module.
pub type ShapeResult<T> = std::result::Result<T, ShapeError>;

/// Create a `ShapeError::Domain` from a string.
pub fn domain_err<T>(error_str: &str) -> ShapeResult<T> {
    Err(ShapeError::Domain(error_str.to_string()))
}

/// Create a `ShapeError::Degenerate` from a string.
pub fn degenerate_err<T>(error_str: &str) -> ShapeResult<T> {
    Err(ShapeError::Degenerate(error_str.to_string()))
}
