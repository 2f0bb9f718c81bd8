use crate::diagram;

/// Result adapter error type.
#[derive(Debug)]
pub enum AdapterError {
    /// The result record is missing data the diagram needs.
    MalformedResult(String),
    /// Rendering the adapted input failed.
    DiagramError(diagram::DiagramError),
}
impl std::fmt::Display for AdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterError::MalformedResult(error) => write!(f, "Malformed triangulation result:\n{}", error),
            AdapterError::DiagramError(error) => write!(f, "{}", error),
        }
    }
}
impl From<diagram::DiagramError> for AdapterError {
    fn from(error: diagram::DiagramError) -> Self {
        AdapterError::DiagramError(error)
    }
}

/// Result type for the `adapter` module.
pub type ProcResult<T> = std::result::Result<T, AdapterError>;

/// Create an `AdapterError::MalformedResult` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(AdapterError::MalformedResult(error_str.to_string()))
}
