//! Error types for raw video descriptors and frame sizing
//!
//! Provides typed errors that library users can match and handle specifically.

use thiserror::Error;

/// Errors that can occur while describing or sizing raw video frames
///
/// The frame-size operations only ever return
/// [`RawVideoError::InvalidDimensions`]. The remaining variants come from
/// constructing descriptors and parsing format tags.
///
/// # Examples
///
/// ```
/// use lamco_raw_video::{frame_size, PixelFormat, RawVideoError};
///
/// match frame_size(PixelFormat::I420, 1921, 1080) {
///     Ok(size) => println!("allocate {} bytes", size),
///     Err(RawVideoError::InvalidDimensions { format, width, height }) => {
///         eprintln!("cannot size {} at {}x{}", format, width, height);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RawVideoError {
    /// The (format, width, height) combination cannot be sized
    ///
    /// Raised when the format is not part of the supported tag set, when a
    /// dimension is zero, when the format's chroma subsampling requires an
    /// even dimension that is odd, or when the byte count does not fit in
    /// a `u64`.
    #[error("Invalid dimensions {width}x{height} for format {format}")]
    InvalidDimensions {
        /// Format tag as supplied by the caller
        format: String,
        /// Frame width in pixels
        width: u32,
        /// Frame height in pixels
        height: u32,
    },

    /// A descriptor field violates its basic constraint
    #[error("Invalid frame descriptor: {0}")]
    InvalidDescriptor(String),

    /// A required descriptor field was never set on the builder
    #[error("Missing required descriptor field: {0}")]
    MissingField(&'static str),

    /// Framerate denominator is zero
    #[error("Invalid framerate {frames}/{seconds}: seconds must be positive")]
    InvalidFramerate {
        /// Number of frames
        frames: u32,
        /// Number of seconds those frames span
        seconds: u32,
    },

    /// Format tag is not one of the supported raw video formats
    #[error("Unknown pixel format: {0}")]
    UnknownFormat(String),
}

/// Result type for raw video operations
///
/// This is a convenience alias for `Result<T, RawVideoError>`.
pub type Result<T> = std::result::Result<T, RawVideoError>;

impl RawVideoError {
    /// Create an invalid dimensions error
    pub(crate) fn invalid_dimensions(format: impl Into<String>, width: u32, height: u32) -> Self {
        Self::InvalidDimensions {
            format: format.into(),
            width,
            height,
        }
    }

    /// Create an invalid descriptor error
    pub(crate) fn invalid_descriptor(msg: impl Into<String>) -> Self {
        Self::InvalidDescriptor(msg.into())
    }

    /// Check whether this error is a frame sizing rejection
    #[must_use]
    pub fn is_invalid_dimensions(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RawVideoError::invalid_dimensions("I420", 3, 2);
        assert_eq!(err.to_string(), "Invalid dimensions 3x2 for format I420");

        let err = RawVideoError::MissingField("width");
        assert_eq!(err.to_string(), "Missing required descriptor field: width");

        let err = RawVideoError::InvalidFramerate { frames: 30, seconds: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid framerate 30/0: seconds must be positive"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = RawVideoError::invalid_descriptor("width must be positive");
        assert!(matches!(err, RawVideoError::InvalidDescriptor(_)));
        assert!(!err.is_invalid_dimensions());

        let err = RawVideoError::invalid_dimensions("NV12", 4, 3);
        assert!(err.is_invalid_dimensions());
    }
}
