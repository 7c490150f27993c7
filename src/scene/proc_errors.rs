use crate::{io, shapes};

/// Scene process error type.
#[derive(Debug)]
pub enum SceneError {
    /// IO error while reading the scene or writing results.
    IoError(io::IoError),
    /// Shape construction or transform error, with the shape name.
    ShapeError(String, shapes::ShapeError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(error) => write!(f, "{}", error),
            SceneError::ShapeError(name, error) => write!(f, "- Shape \"{}\":\n{}", name, error),
            SceneError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<io::IoError> for SceneError {
    fn from(error: io::IoError) -> Self {
        SceneError::IoError(error)
    }
}

/// Result type for the `scene` module.
pub type ProcResult<T> = std::result::Result<T, SceneError>;

/// Create a `SceneError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(SceneError::StringOnly(error_str.to_string()))
}
