use plotters::drawing::DrawingAreaErrorKind;

/// Diagram rendering error type.
#[derive(Debug)]
pub enum DiagramError {
    /// Input geometry that cannot be drawn (non-finite coordinates, empty plot window).
    InvalidGeometry(String),
    /// Error from the plotting backend while drawing the chart.
    DrawingError(String),
    /// Scene serialization error.
    SerdeJsonError(serde_json::Error),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for DiagramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagramError::InvalidGeometry(error) => write!(f, "Invalid geometry:\n{}", error),
            DiagramError::DrawingError(error) => write!(f, "Drawing Error:\n{}", error),
            DiagramError::SerdeJsonError(error) => write!(f, "JSON Serialization Error:\n{}", error),
            DiagramError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<serde_json::Error> for DiagramError {
    fn from(error: serde_json::Error) -> Self {
        DiagramError::SerdeJsonError(error)
    }
}
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for DiagramError {
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        DiagramError::DrawingError(error.to_string())
    }
}
impl From<String> for DiagramError {
    fn from(error: String) -> Self {
        DiagramError::StringOnly(error)
    }
}

/// Result type for the `diagram` module.
pub type ProcResult<T> = std::result::Result<T, DiagramError>;

/// Create a `DiagramError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(DiagramError::StringOnly(error_str.to_string()))
}

/// Create a `DiagramError::InvalidGeometry` from a string.
pub fn err_geometry<T>(error_str: &str) -> ProcResult<T> {
    Err(DiagramError::InvalidGeometry(error_str.to_string()))
}
