use crate::{
    args,
    scene,
};

/// Error-type enum for the `planar` crate.
/// Wraps the error of every module the binary runs through.
#[derive(Debug)]
pub enum PlanarError {
    ArgError(args::ArgError),
    SceneError(scene::SceneError),
}
impl std::fmt::Display for PlanarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanarError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            PlanarError::SceneError(error) => write!(f, "! SCENE ERROR:\n{}", error),
        }
    }
}
impl From<args::ArgError> for PlanarError {
    fn from(error: args::ArgError) -> Self {
        PlanarError::ArgError(error)
    }
}
impl From<scene::SceneError> for PlanarError {
    fn from(error: scene::SceneError) -> Self {
        PlanarError::SceneError(error)
    }
}

/// Result type for the `planar` crate.
pub type PlanarResult<T> = std::result::Result<T, PlanarError>;
