use crate::{
    adapter,
    args,
    diagram,
    io,
};

/// Error-type enum for the `tridiag` crate.
/// Wraps the errors of each stage, from argument handling to writing the image.
#[derive(Debug)]
pub enum TridiagError {
    ArgError(args::ArgError),
    IoError(io::IoError),
    DiagramError(diagram::DiagramError),
    AdapterError(adapter::AdapterError),
    StringOnly(String),
}
impl std::fmt::Display for TridiagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TridiagError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            TridiagError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            TridiagError::DiagramError(error) => write!(f, "! DIAGRAM ERROR:\n{}", error),
            TridiagError::AdapterError(error) => write!(f, "! RESULT ERROR:\n{}", error),
            TridiagError::StringOnly(error) => write!(f, "! TRIDIAG ERROR:\n- {}", error),
        }
    }
}
impl std::error::Error for TridiagError {}
impl From<String> for TridiagError {
    fn from(error: String) -> Self {
        TridiagError::StringOnly(error)
    }
}
impl From<args::ArgError> for TridiagError {
    fn from(error: args::ArgError) -> Self {
        TridiagError::ArgError(error)
    }
}
impl From<io::IoError> for TridiagError {
    fn from(error: io::IoError) -> Self {
        TridiagError::IoError(error)
    }
}
impl From<diagram::DiagramError> for TridiagError {
    fn from(error: diagram::DiagramError) -> Self {
        TridiagError::DiagramError(error)
    }
}
impl From<adapter::AdapterError> for TridiagError {
    fn from(error: adapter::AdapterError) -> Self {
        TridiagError::AdapterError(error)
    }
}

/// Result type for the `tridiag` crate.
pub type TridiagResult<T> = std::result::Result<T, TridiagError>;

/// Create a `TridiagResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::TridiagError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> TridiagResult<T> {
    Err(TridiagError::StringOnly(error_str.to_string()))
}
