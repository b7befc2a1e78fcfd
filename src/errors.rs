use std::fmt;

/// Errors raised by a drawing surface. The contract is fail-fast: the first
/// surface error aborts whatever painter is running.
#[derive(Debug)]
pub enum SurfaceError {
    Closed,
    Render(String),
}

impl std::error::Error for SurfaceError {}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SurfaceError::Closed => write!(f, "Drawing surface is closed."),
            SurfaceError::Render(msg) => write!(f, "Surface render error: {}", msg),
        }
    }
}

/// Configuration and propagation errors from the painters.
#[derive(Debug)]
pub enum PainterError {
    InvalidCellSize(f64),
    InvalidRadius(f64),
    Surface(SurfaceError),
}

impl std::error::Error for PainterError {}

impl fmt::Display for PainterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PainterError::InvalidCellSize(size) => {
                write!(f, "Cell size must be positive and finite, got {}", size)
            }
            PainterError::InvalidRadius(radius) => {
                write!(f, "Circle radius must be positive and finite, got {}", radius)
            }
            PainterError::Surface(err) => write!(f, "Surface failure: {}", err),
        }
    }
}

impl From<SurfaceError> for PainterError {
    fn from(err: SurfaceError) -> Self {
        PainterError::Surface(err)
    }
}
