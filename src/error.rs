use thiserror::Error;

/// Errors raised by color math and painting.
///
/// Every variant except [`ColorError::Image`] is a caller-input bug rather than
/// a runtime condition, so nothing here is worth retrying.
#[derive(Error, Debug)]
pub enum ColorError {
    #[error("gradient stops share offset {offset}, cannot interpolate between them")]
    CoincidentStops { offset: f64 },
    #[error("{what} is not a number")]
    NotANumber { what: &'static str },
    #[error("{what} is infinite")]
    NotFinite { what: &'static str },
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("control has no paintable area ({width}x{height})")]
    EmptyArea { width: f64, height: f64 },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ColorError>;
