//! # lamco-raw-video
//!
//! Raw (uncompressed) video frame descriptors and unpadded frame size
//! calculation.
//!
//! This crate is part of the [lamco-media](https://github.com/lamco-admin/lamco-media)
//! workspace. It is a pure data and arithmetic layer: it describes raw video
//! buffers and sizes them, but never allocates, moves or converts pixel data.
//!
//! # Features
//!
//! - **Frame Descriptors**: Immutable width, height, framerate, format and alignment
//! - **Exact Framerates**: Rational `frames / seconds` pairs (NTSC is `30000/1001`)
//! - **Closed Format Set**: I420, I422, I444, RGB, BGRA, RGBA, NV12, NV21, YV12, AYUV
//! - **Frame Sizing**: Subsampling-aware byte counts with parity checks
//!
//! # Quick Start
//!
//! ```rust
//! use lamco_raw_video::{frame_size, FrameDescriptor, PixelFormat};
//!
//! # fn example() -> lamco_raw_video::Result<()> {
//! let descriptor = FrameDescriptor::builder()
//!     .width(1280)
//!     .height(720)
//!     .framerate(60, 1)
//!     .format(PixelFormat::I420)
//!     .aligned(true)
//!     .build()?;
//!
//! // Size receive buffers from the negotiated descriptor
//! let bytes = descriptor.frame_size()?;
//! assert_eq!(bytes, 1_382_400);
//!
//! // Or size a raw (format, width, height) triple directly
//! assert_eq!(frame_size(PixelFormat::RGBA, 2, 2)?, 16);
//! # Ok(())
//! # }
//! # example().expect("example runs");
//! ```
//!
//! # Error Handling
//!
//! Every sizing rejection is [`RawVideoError::InvalidDimensions`], whether
//! the cause is an unknown format tag or an odd dimension for a subsampled
//! format:
//!
//! ```rust
//! use lamco_raw_video::{frame_size, frame_size_for_tag, PixelFormat};
//!
//! assert!(frame_size(PixelFormat::I420, 3, 2)
//!     .expect_err("odd width")
//!     .is_invalid_dimensions());
//! assert!(frame_size_for_tag("UnknownFormat", 4, 4)
//!     .expect_err("unknown tag")
//!     .is_invalid_dimensions());
//! ```
//!
//! # Thread Safety
//!
//! All types are `Copy + Send + Sync` and every operation is a pure
//! function, so descriptors and sizes can be shared and computed from any
//! thread without synchronization.

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod descriptor;
pub mod error;
pub mod format;
pub mod framerate;
pub mod size;

// =============================================================================
// RE-EXPORTS - PRIMARY API
// =============================================================================

// Descriptor
pub use descriptor::{FrameDescriptor, FrameDescriptorBuilder};

// Errors
pub use error::{RawVideoError, Result};

// Formats
pub use format::{ChromaSubsampling, PixelFormat};
pub use framerate::Framerate;

// Sizing
pub use size::{frame_size, frame_size_for_tag, frame_size_of};

// =============================================================================
// CRATE-LEVEL ITEMS
// =============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get all supported raw video formats
///
/// Returns the closed format set in its stable contract order:
/// I420, I422, I444, RGB, BGRA, RGBA, NV12, NV21, YV12, AYUV.
#[must_use]
pub fn supported_formats() -> Vec<PixelFormat> {
    PixelFormat::ALL.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_formats() {
        let formats = supported_formats();
        assert_eq!(formats.len(), 10);
        assert_eq!(formats[0], PixelFormat::I420);
        assert_eq!(formats[9], PixelFormat::AYUV);
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<FrameDescriptor>();
        assert_send_sync::<Framerate>();
        assert_send_sync::<PixelFormat>();
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
